//! Decoding the winning grid into human- and persistence-facing shapes.
//!
//! [`format_views`] builds teacher-keyed and classroom-keyed weekly views
//! with `"{Day} Period {n}"` time labels. [`to_entries`] flattens the grid
//! into one [`ScheduleEntry`] per occupied cell for the schedule table.
//!
//! View maps are last-write-wins: if unresolved conflicts leave two
//! sessions on the same (entity, time) pair, the later cell in grid
//! iteration order silently replaces the earlier one. The views mirror the
//! grid as-is; repairing conflicts is the search's job, not the decoder's.

use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::ga::{Grid, DAYS};
use crate::models::ScheduleEntry;

/// Weekday names for time labels, indexed by day.
pub const DAY_NAMES: [&str; DAYS] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// Teacher- and classroom-keyed weekly views of one grid.
#[derive(Debug, Clone, Default)]
pub struct ScheduleViews {
    /// Teacher name → (time label → "Course (Classroom)").
    pub teacher_view: HashMap<String, HashMap<String, String>>,
    /// Classroom name → (time label → "Course (Teacher)").
    pub classroom_view: HashMap<String, HashMap<String, String>>,
}

/// Builds the time label for a (day, period) pair, e.g. `"Monday Period 3"`.
fn time_label(day: usize, period: usize) -> String {
    format!("{} Period {}", DAY_NAMES[day], period + 1)
}

/// Decodes a grid into teacher and classroom views.
pub fn format_views(grid: &Grid, catalog: &Catalog) -> ScheduleViews {
    let mut views = ScheduleViews::default();

    for (day, period, room, course_id) in grid.occupied() {
        let Some(course) = catalog.course(course_id) else {
            continue;
        };
        let Some(teacher) = catalog.teacher(&course.teacher_id) else {
            continue;
        };
        let Some(classroom) = catalog.classroom_by_index(room) else {
            continue;
        };

        let time_key = time_label(day, period);
        views
            .teacher_view
            .entry(teacher.name.clone())
            .or_default()
            .insert(time_key.clone(), format!("{} ({})", course.name, classroom.name));
        views
            .classroom_view
            .entry(classroom.name.clone())
            .or_default()
            .insert(time_key, format!("{} ({})", course.name, teacher.name));
    }

    views
}

/// Flattens a grid into persistence-ready entries, one per occupied cell,
/// in day-major, then period, then classroom-index order.
pub fn to_entries(grid: &Grid, catalog: &Catalog) -> Vec<ScheduleEntry> {
    grid.occupied()
        .filter_map(|(day, period, room, course_id)| {
            let course = catalog.course(course_id)?;
            let classroom_id = catalog.classroom_id(room)?;
            Some(ScheduleEntry {
                course_id,
                teacher_id: course.teacher_id.clone(),
                classroom_id,
                day,
                period,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Classroom, Course, Teacher};

    fn sample_catalog() -> Catalog {
        let teachers = vec![Teacher::new("T1", "Ada"), Teacher::new("T2", "Grace")];
        let courses = vec![
            Course::new(1, "Algorithms", "T1").with_required(true),
            Course::new(2, "Compilers", "T2"),
        ];
        let classrooms = vec![
            Classroom::new(101, "Room A").with_multimedia(true),
            Classroom::new(102, "Room B"),
        ];
        Catalog::new(&teachers, &courses, &classrooms)
    }

    #[test]
    fn test_format_views_labels_and_descriptions() {
        let catalog = sample_catalog();
        let mut grid = Grid::empty(2);
        grid.set(0, 2, 0, Some(1));
        grid.set(3, 0, 1, Some(2));

        let views = format_views(&grid, &catalog);

        assert_eq!(
            views.teacher_view["Ada"]["Monday Period 3"],
            "Algorithms (Room A)"
        );
        assert_eq!(
            views.classroom_view["Room A"]["Monday Period 3"],
            "Algorithms (Ada)"
        );
        assert_eq!(
            views.teacher_view["Grace"]["Thursday Period 1"],
            "Compilers (Room B)"
        );
        assert_eq!(
            views.classroom_view["Room B"]["Thursday Period 1"],
            "Compilers (Grace)"
        );
    }

    #[test]
    fn test_conflicting_time_slot_is_last_write_wins() {
        let teachers = vec![Teacher::new("T1", "Ada")];
        let courses = vec![Course::new(1, "A", "T1"), Course::new(2, "B", "T1")];
        let classrooms = vec![Classroom::new(101, "Room A"), Classroom::new(102, "Room B")];
        let catalog = Catalog::new(&teachers, &courses, &classrooms);

        // Both courses at (0, 0): same teacher, different rooms
        let mut grid = Grid::empty(2);
        grid.set(0, 0, 0, Some(1));
        grid.set(0, 0, 1, Some(2));

        let views = format_views(&grid, &catalog);
        // Room index 1 iterates after 0, so course 2 wins the teacher slot
        assert_eq!(views.teacher_view["Ada"]["Monday Period 1"], "B (Room B)");
        // Classroom views keep both: different room keys
        assert_eq!(views.classroom_view["Room A"]["Monday Period 1"], "A (Ada)");
        assert_eq!(views.classroom_view["Room B"]["Monday Period 1"], "B (Ada)");
    }

    #[test]
    fn test_synthesized_teacher_appears_in_views() {
        let teachers = vec![Teacher::new("T1", "Ada")];
        let courses = vec![Course::new(1, "Seminar", "T99")];
        let classrooms = vec![Classroom::new(101, "Room A")];
        let catalog = Catalog::new(&teachers, &courses, &classrooms);

        let mut grid = Grid::empty(1);
        grid.set(1, 1, 0, Some(1));

        let views = format_views(&grid, &catalog);
        assert_eq!(
            views.teacher_view["Teacher T99"]["Tuesday Period 2"],
            "Seminar (Room A)"
        );
    }

    #[test]
    fn test_to_entries_matches_occupied_cells() {
        let catalog = sample_catalog();
        let mut grid = Grid::empty(2);
        grid.set(2, 4, 1, Some(1));
        grid.set(0, 0, 0, Some(2));

        let entries = to_entries(&grid, &catalog);
        assert_eq!(entries.len(), grid.occupied_count());

        // Day-major order: (0,0) before (2,4)
        assert_eq!(entries[0].course_id, 2);
        assert_eq!(entries[0].teacher_id, "T2");
        assert_eq!(entries[0].classroom_id, 101);
        assert_eq!(entries[0].day, 0);
        assert_eq!(entries[0].period, 0);

        assert_eq!(entries[1].course_id, 1);
        assert_eq!(entries[1].classroom_id, 102);
        assert_eq!(entries[1].day, 2);
        assert_eq!(entries[1].period, 4);
    }

    #[test]
    fn test_entries_round_trip_reconstructs_grid() {
        let catalog = sample_catalog();
        let mut grid = Grid::empty(2);
        grid.set(1, 3, 0, Some(1));
        grid.set(4, 5, 1, Some(2));

        let entries = to_entries(&grid, &catalog);
        let mut rebuilt = Grid::empty(catalog.classroom_count());
        for entry in &entries {
            let room = catalog.classroom_index(entry.classroom_id).unwrap();
            rebuilt.set(entry.day, entry.period, room, Some(entry.course_id));
        }
        assert_eq!(rebuilt, grid);
    }

    #[test]
    fn test_empty_grid_yields_empty_views_and_entries() {
        let catalog = sample_catalog();
        let grid = Grid::empty(2);
        let views = format_views(&grid, &catalog);
        assert!(views.teacher_view.is_empty());
        assert!(views.classroom_view.is_empty());
        assert!(to_entries(&grid, &catalog).is_empty());
    }
}
