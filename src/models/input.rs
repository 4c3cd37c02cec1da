//! Input domain models.
//!
//! The three collections a timetabling run consumes: teachers, courses,
//! and classrooms. All are immutable for the duration of a run. A course
//! represents a single weekly teaching session to be placed in the grid.

use serde::{Deserialize, Serialize};

/// A teacher referenced by one or more courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
}

/// A single weekly teaching session to place in the timetable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier.
    pub id: i64,
    /// Human-readable name.
    pub name: String,
    /// Teacher delivering this course.
    pub teacher_id: String,
    /// Required courses prefer multimedia-equipped classrooms.
    #[serde(default)]
    pub is_required: bool,
}

/// A classroom that can host one session per (day, period) slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classroom {
    /// Unique classroom identifier.
    pub id: i64,
    /// Human-readable name.
    pub name: String,
    /// Seating capacity. Informational; not constrained during search.
    pub capacity: i32,
    /// Whether the room has multimedia equipment.
    #[serde(default)]
    pub is_multimedia: bool,
}

impl Teacher {
    /// Creates a new teacher.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl Course {
    /// Creates a new elective course.
    pub fn new(id: i64, name: impl Into<String>, teacher_id: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            teacher_id: teacher_id.into(),
            is_required: false,
        }
    }

    /// Marks the course as required.
    pub fn with_required(mut self, is_required: bool) -> Self {
        self.is_required = is_required;
        self
    }
}

impl Classroom {
    /// Creates a new classroom without multimedia equipment.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            capacity: 0,
            is_multimedia: false,
        }
    }

    /// Sets the seating capacity.
    pub fn with_capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the multimedia flag.
    pub fn with_multimedia(mut self, is_multimedia: bool) -> Self {
        self.is_multimedia = is_multimedia;
        self
    }
}
