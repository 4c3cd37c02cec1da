//! Grid fitness evaluation.
//!
//! Scores one grid in a single O(DAYS * PERIODS * rooms) pass:
//!
//! | Term | Weight | Meaning |
//! |------|--------|---------|
//! | 1 / (conflicts + 1) | — | dominant; strictly decreasing in conflicts |
//! | utilization | 0.3 | occupied slots / total slots |
//! | multimedia rate | 0.2 | required courses placed in multimedia rooms |
//! | teacher spread | 0.05 | per teacher-day with at most 2 classes |
//!
//! A conflict is an extra occupant of a teacher's (day, period) pair, or
//! one unit of daily overflow beyond 3 classes. The `+1` denominator keeps
//! the dominant term finite and always positive, so roulette weights are
//! well-defined for any grid.

use std::collections::{HashMap, HashSet};

use super::{Grid, DAYS};
use crate::catalog::Catalog;

/// Quality stats for one grid, computed per evaluation and never stored on
/// the grid itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitnessResult {
    /// Combined fitness (always > 0).
    pub fitness: f64,
    /// Conflict count (teacher double-bookings plus daily overflow).
    pub conflicts: u32,
    /// Occupied slots / total slots.
    pub utilization: f64,
}

/// Evaluates a grid against the catalog. Pure: no side effects, same
/// result for the same inputs.
pub fn evaluate(grid: &Grid, catalog: &Catalog) -> FitnessResult {
    let mut conflicts: u32 = 0;
    let mut multimedia_score: u32 = 0;
    let mut used_slots: u32 = 0;

    // teacher id → (day, period) pairs already claimed
    let mut teacher_slots: HashMap<&str, HashSet<(usize, usize)>> = HashMap::new();
    // teacher id → classes per day
    let mut daily_counts: HashMap<&str, [u32; DAYS]> = HashMap::new();

    for (day, period, room, course_id) in grid.occupied() {
        let Some(course) = catalog.course(course_id) else {
            continue;
        };
        used_slots += 1;

        // Extra occupants of a claimed (day, period) count once each; the
        // first occupant keeps its claim.
        let claimed = teacher_slots.entry(&course.teacher_id).or_default();
        if !claimed.insert((day, period)) {
            conflicts += 1;
        }

        daily_counts.entry(&course.teacher_id).or_insert([0; DAYS])[day] += 1;

        if course.is_required {
            if let Some(classroom) = catalog.classroom_by_index(room) {
                if classroom.is_multimedia {
                    multimedia_score += 1;
                }
            }
        }
    }

    // Daily-load pass: graduated overflow penalty above 3, spread bonus for
    // each day with at most 2 classes (idle days included). A day with
    // exactly 3 classes earns neither. Only teachers with at least one
    // placed class have a row here, so an all-empty grid scores no bonus.
    let mut teacher_spread_score: u32 = 0;
    for counts in daily_counts.values() {
        for &count in counts {
            if count > 3 {
                conflicts += count - 3;
            } else if count <= 2 {
                teacher_spread_score += 1;
            }
        }
    }

    let total_slots = grid.slot_count();
    let utilization = if total_slots > 0 {
        f64::from(used_slots) / total_slots as f64
    } else {
        0.0
    };

    let required = catalog.required_course_count();
    let multimedia_rate = if required > 0 {
        f64::from(multimedia_score) / required as f64
    } else {
        1.0
    };

    let fitness = 1.0 / (f64::from(conflicts) + 1.0)
        + utilization * 0.3
        + multimedia_rate * 0.2
        + f64::from(teacher_spread_score) * 0.05;

    FitnessResult {
        fitness,
        conflicts,
        utilization,
    }
}
