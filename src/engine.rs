//! Top-level timetabling API.
//!
//! [`ScheduleEngine::generate`] runs the whole pipeline: validate the three
//! input collections, build the catalog, evolve, and decode the winning
//! grid into a [`ScheduleResult`]. The run is CPU-bound and synchronous;
//! callers that serve requests should run it on a worker thread and may
//! pass a [`CancelToken`] to bound its wall-clock time (a cancelled run
//! still yields the best result found so far).
//!
//! The engine owns one RNG per `generate` call, so concurrent runs from
//! separate calls never share random state.

use std::time::Instant;

use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Deserialize;

use crate::catalog::Catalog;
use crate::ga::{CancelToken, EvolveError, Evolver};
use crate::models::{Classroom, Course, ScheduleResult, Teacher};
use crate::validation::{validate_input, ValidationError};
use crate::views::{format_views, to_entries};

/// Input container for one timetabling run.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleRequest {
    /// Known teachers.
    pub teachers: Vec<Teacher>,
    /// Sessions to place, one grid cell each.
    pub courses: Vec<Course>,
    /// Available classrooms.
    pub classrooms: Vec<Classroom>,
}

impl ScheduleRequest {
    /// Creates a new request.
    pub fn new(teachers: Vec<Teacher>, courses: Vec<Course>, classrooms: Vec<Classroom>) -> Self {
        Self {
            teachers,
            courses,
            classrooms,
        }
    }
}

/// Errors surfaced by [`ScheduleEngine::generate`].
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// The input collections failed validation; the search never ran.
    InvalidInput(Vec<ValidationError>),
    /// The search completed without producing a usable timetable.
    SchedulingFailed(EvolveError),
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleError::InvalidInput(errors) => {
                write!(f, "invalid scheduling input: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{e}")?;
                }
                Ok(())
            }
            ScheduleError::SchedulingFailed(e) => write!(f, "scheduling failed: {e}"),
        }
    }
}

impl std::error::Error for ScheduleError {}

/// Configurable entry point for timetabling runs.
///
/// # Example
///
/// ```
/// use timetable_ga::engine::{ScheduleEngine, ScheduleRequest};
/// use timetable_ga::models::{Classroom, Course, Teacher};
///
/// let request = ScheduleRequest::new(
///     vec![Teacher::new("T1", "Ada")],
///     vec![Course::new(1, "Algorithms", "T1").with_required(true)],
///     vec![Classroom::new(101, "Room A").with_capacity(40).with_multimedia(true)],
/// );
/// let result = ScheduleEngine::new().with_seed(42).generate(&request).unwrap();
/// assert!(result.entries.iter().all(|e| e.course_id == 1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScheduleEngine {
    seed: Option<u64>,
    cancel: Option<CancelToken>,
}

impl ScheduleEngine {
    /// Creates an engine with OS-seeded randomness.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixes the RNG seed, making the run fully deterministic.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Attaches a cancellation token, checked at generation boundaries.
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Generates a timetable for the request.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidInput`] if any input collection is empty or
    /// contains duplicate ids; [`ScheduleError::SchedulingFailed`] if the
    /// search never established a best individual.
    pub fn generate(&self, request: &ScheduleRequest) -> Result<ScheduleResult, ScheduleError> {
        validate_input(&request.teachers, &request.courses, &request.classrooms)
            .map_err(ScheduleError::InvalidInput)?;

        let catalog = Catalog::new(&request.teachers, &request.courses, &request.classrooms);
        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let start = Instant::now();
        let mut evolver = Evolver::new(&catalog);
        if let Some(token) = &self.cancel {
            evolver = evolver.with_cancel_token(token.clone());
        }
        let outcome = evolver
            .evolve(&mut rng)
            .map_err(ScheduleError::SchedulingFailed)?;

        let views = format_views(&outcome.grid, &catalog);
        let entries = to_entries(&outcome.grid, &catalog);
        info!(
            "Scheduled {} of {} courses in {:.2?}",
            entries.len(),
            catalog.course_count(),
            start.elapsed()
        );

        Ok(ScheduleResult {
            teacher_view: views.teacher_view,
            classroom_view: views.classroom_view,
            fitness: outcome.stats.fitness,
            utilization: outcome.stats.utilization,
            conflicts: outcome.stats.conflicts,
            entries,
        })
    }
}
