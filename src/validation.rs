//! Input validation for timetabling runs.
//!
//! Checks structural integrity of the three input collections before the
//! search starts. Detects:
//! - Empty collections (a run needs at least one of each)
//! - Duplicate course, classroom, or teacher IDs
//!
//! Unknown `teacher_id` references on courses are *not* errors: the catalog
//! synthesizes a placeholder teacher for them (see [`crate::catalog`]).

use std::collections::HashSet;

use crate::models::{Classroom, Course, Teacher};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A required input collection is empty.
    EmptyCollection,
    /// Two entities share the same ID.
    DuplicateId,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Validates the input collections for a timetabling run.
///
/// Checks:
/// 1. Teachers, courses, and classrooms are all non-empty
/// 2. No duplicate teacher IDs
/// 3. No duplicate course IDs
/// 4. No duplicate classroom IDs
///
/// Duplicate IDs would silently collapse in the catalog's id-keyed maps,
/// so they are rejected up front.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    teachers: &[Teacher],
    courses: &[Course],
    classrooms: &[Classroom],
) -> ValidationResult {
    let mut errors = Vec::new();

    if teachers.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCollection,
            "No teachers supplied",
        ));
    }
    if courses.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCollection,
            "No courses supplied",
        ));
    }
    if classrooms.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCollection,
            "No classrooms supplied",
        ));
    }

    let mut teacher_ids = HashSet::new();
    for t in teachers {
        if !teacher_ids.insert(t.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate teacher ID: {}", t.id),
            ));
        }
    }

    let mut course_ids = HashSet::new();
    for c in courses {
        if !course_ids.insert(c.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", c.id),
            ));
        }
    }

    let mut classroom_ids = HashSet::new();
    for r in classrooms {
        if !classroom_ids.insert(r.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate classroom ID: {}", r.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
