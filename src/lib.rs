//! Genetic-algorithm course timetabling.
//!
//! Assigns weekly teaching sessions to (day, period, classroom) slots under
//! hard and soft constraints: teacher double-booking, teacher daily load,
//! multimedia-room preference for required courses, and slot utilization.
//! The search is heuristic with a fixed generation budget — it favors
//! conflict-free timetables strongly but does not guarantee one.
//!
//! # Modules
//!
//! - **`models`**: Input collections (`Teacher`, `Course`, `Classroom`) and
//!   run output (`ScheduleEntry`, `ScheduleResult`)
//! - **`validation`**: Input integrity checks (empty collections, duplicate IDs)
//! - **`catalog`**: Run-scoped lookup tables and the classroom index bijection
//! - **`ga`**: The search core — grid chromosome, fitness, operators, evolver
//! - **`views`**: Decoding the winning grid into views and flat entries
//! - **`engine`**: The `validate → catalog → evolve → decode` pipeline
//!
//! # Usage
//!
//! ```
//! use timetable_ga::engine::{ScheduleEngine, ScheduleRequest};
//! use timetable_ga::models::{Classroom, Course, Teacher};
//!
//! let request = ScheduleRequest::new(
//!     vec![Teacher::new("T1", "Ada"), Teacher::new("T2", "Grace")],
//!     vec![
//!         Course::new(1, "Algorithms", "T1").with_required(true),
//!         Course::new(2, "Databases", "T2"),
//!     ],
//!     vec![
//!         Classroom::new(101, "Room A").with_capacity(40).with_multimedia(true),
//!         Classroom::new(102, "Room B").with_capacity(30),
//!     ],
//! );
//!
//! let result = ScheduleEngine::new().with_seed(42).generate(&request)?;
//! assert!(!result.entries.is_empty());
//! # Ok::<(), timetable_ga::engine::ScheduleError>(())
//! ```
//!
//! # Reference
//!
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//!   Machine Learning"
//! - Burke & Petrovic (2002), "Recent research directions in automated
//!   timetabling"

pub mod catalog;
pub mod engine;
pub mod ga;
pub mod models;
pub mod validation;
pub mod views;
