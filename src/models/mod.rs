//! Timetabling domain models.
//!
//! Input collections (`Teacher`, `Course`, `Classroom`) and run output
//! (`ScheduleEntry`, `ScheduleResult`). All types are plain serde-derived
//! values; behavior lives in `catalog`, `ga`, and `views`.

mod input;
mod output;

pub use input::{Classroom, Course, Teacher};
pub use output::{ScheduleEntry, ScheduleResult};
