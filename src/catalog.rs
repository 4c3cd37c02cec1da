//! Run-scoped domain catalog.
//!
//! Immutable lookup tables built once per timetabling run: id-keyed maps
//! for teachers, courses, and classrooms, plus a dense classroom index.
//! Classrooms are addressed during search by a 0-based index because their
//! ids may be sparse; the catalog keeps the index ↔ id bijection.
//!
//! Courses referencing an unknown `teacher_id` get a synthesized placeholder
//! teacher so that every placed course resolves to a teacher downstream.
//! Course and classroom input order is preserved: the initializer places
//! courses in catalog order, and index assignment must not depend on hash
//! map iteration order (determinism under a fixed seed).

use std::collections::HashMap;

use crate::models::{Classroom, Course, Teacher};

/// Immutable lookup tables for one timetabling run.
#[derive(Debug, Clone)]
pub struct Catalog {
    teachers: HashMap<String, Teacher>,
    courses: HashMap<i64, Course>,
    classrooms: HashMap<i64, Classroom>,
    /// Course ids in input order.
    course_ids: Vec<i64>,
    /// Classroom ids in input order; position = dense classroom index.
    classroom_ids: Vec<i64>,
    /// Classroom id → dense index.
    classroom_index: HashMap<i64, usize>,
    required_courses: usize,
}

impl Catalog {
    /// Builds the catalog from the three input collections.
    ///
    /// Synthesizes a `Teacher { id, name: "Teacher <id>" }` for every course
    /// whose `teacher_id` is not present in the teacher collection.
    pub fn new(teachers: &[Teacher], courses: &[Course], classrooms: &[Classroom]) -> Self {
        let mut teacher_map: HashMap<String, Teacher> = teachers
            .iter()
            .map(|t| (t.id.clone(), t.clone()))
            .collect();

        for course in courses {
            if !teacher_map.contains_key(&course.teacher_id) {
                teacher_map.insert(
                    course.teacher_id.clone(),
                    Teacher::new(
                        course.teacher_id.clone(),
                        format!("Teacher {}", course.teacher_id),
                    ),
                );
            }
        }

        let mut course_map = HashMap::new();
        let mut course_ids = Vec::with_capacity(courses.len());
        for course in courses {
            if course_map.insert(course.id, course.clone()).is_none() {
                course_ids.push(course.id);
            }
        }

        let mut classroom_map = HashMap::new();
        let mut classroom_ids = Vec::with_capacity(classrooms.len());
        for classroom in classrooms {
            if classroom_map.insert(classroom.id, classroom.clone()).is_none() {
                classroom_ids.push(classroom.id);
            }
        }
        let classroom_index = classroom_ids
            .iter()
            .enumerate()
            .map(|(idx, &id)| (id, idx))
            .collect();

        let required_courses = course_map.values().filter(|c| c.is_required).count();

        Self {
            teachers: teacher_map,
            courses: course_map,
            classrooms: classroom_map,
            course_ids,
            classroom_ids,
            classroom_index,
            required_courses,
        }
    }

    /// Looks up a teacher by id.
    pub fn teacher(&self, id: &str) -> Option<&Teacher> {
        self.teachers.get(id)
    }

    /// Looks up a course by id.
    pub fn course(&self, id: i64) -> Option<&Course> {
        self.courses.get(&id)
    }

    /// Looks up a classroom by id.
    pub fn classroom(&self, id: i64) -> Option<&Classroom> {
        self.classrooms.get(&id)
    }

    /// Looks up a classroom by its dense index.
    pub fn classroom_by_index(&self, index: usize) -> Option<&Classroom> {
        self.classroom_ids
            .get(index)
            .and_then(|id| self.classrooms.get(id))
    }

    /// Maps a classroom id to its dense index.
    pub fn classroom_index(&self, id: i64) -> Option<usize> {
        self.classroom_index.get(&id).copied()
    }

    /// Maps a dense index back to the classroom id.
    pub fn classroom_id(&self, index: usize) -> Option<i64> {
        self.classroom_ids.get(index).copied()
    }

    /// Courses in input order.
    pub fn courses_in_order(&self) -> impl Iterator<Item = &Course> {
        self.course_ids.iter().filter_map(|id| self.courses.get(id))
    }

    /// Number of courses to place.
    pub fn course_count(&self) -> usize {
        self.course_ids.len()
    }

    /// Number of classrooms (grid depth).
    pub fn classroom_count(&self) -> usize {
        self.classroom_ids.len()
    }

    /// Number of required courses (multimedia-rate denominator).
    pub fn required_course_count(&self) -> usize {
        self.required_courses
    }
}
