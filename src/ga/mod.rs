//! Genetic-algorithm timetabling core.
//!
//! Population-based search over week grids. One individual is a [`Grid`]:
//! a `[DAYS][PERIODS][classrooms]` cube of optional course ids. The search
//! is a plain generational GA with roulette selection, day-range crossover,
//! a relocate-or-swap mutation, global elitism, and stagnation-based early
//! termination.
//!
//! # Submodules
//!
//! - [`grid`]: chromosome representation and the random initializer
//! - [`fitness`]: multi-term fitness evaluation
//! - [`operators`]: crossover and mutation
//! - [`evolver`]: population lifecycle and termination protocol
//!
//! # Reference
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//!   Machine Learning"
//! - Burke & Petrovic (2002), "Recent research directions in automated
//!   timetabling"

mod evolver;
mod fitness;
mod grid;
pub mod operators;

pub use evolver::{CancelToken, EvolveError, EvolveOutcome, Evolver, Termination};
pub use fitness::{evaluate, FitnessResult};
pub use grid::Grid;

/// Teaching days per week.
pub const DAYS: usize = 5;
/// Teaching periods per day.
pub const PERIODS: usize = 6;
/// Individuals per generation.
pub const POPULATION_SIZE: usize = 60;
/// Generation budget.
pub const MAX_GENERATIONS: usize = 80;
/// Consecutive non-improving generations before early termination.
pub const STAGNATION_LIMIT: usize = 15;
/// Per-child probability of applying the mutation operator.
pub const MUTATION_RATE: f64 = 0.03;
