//! Output models.
//!
//! A completed run produces a flat, persistence-ready entry list plus
//! human-facing teacher and classroom views, alongside the quality stats
//! of the winning individual.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One placed session: a single row for the schedule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Placed course.
    pub course_id: i64,
    /// Teacher delivering the course (denormalized for persistence).
    pub teacher_id: String,
    /// Hosting classroom.
    pub classroom_id: i64,
    /// Weekday index (0..=4, Monday-based).
    pub day: usize,
    /// Period index within the day (0..=5).
    pub period: usize,
}

/// The complete result of a timetabling run.
///
/// `teacher_view` and `classroom_view` map an entity name to a
/// `time label → session description` map. When unresolved conflicts leave
/// two sessions on the same (entity, time) pair, the later cell in grid
/// iteration order wins — the views mirror the grid, they do not repair it.
///
/// `conflicts` is the raw conflict count of the winning individual, not a
/// normalized rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Teacher name → (time label → "Course (Classroom)").
    pub teacher_view: HashMap<String, HashMap<String, String>>,
    /// Classroom name → (time label → "Course (Teacher)").
    pub classroom_view: HashMap<String, HashMap<String, String>>,
    /// Fitness of the winning individual.
    pub fitness: f64,
    /// Fraction of grid slots occupied (0.0..=1.0).
    pub utilization: f64,
    /// Conflict count of the winning individual.
    pub conflicts: u32,
    /// One entry per occupied grid cell, in day-major order.
    pub entries: Vec<ScheduleEntry>,
}
