//! Course catalog state: the learner's courses, the current selection,
//! and the active list filters.
//!
//! Every action here is total: unknown course or lesson ids degrade to a
//! no-op instead of signaling failure. Callers must not rely on these
//! methods panicking or returning errors.

use crate::domain::{Course, CourseFilters, FilterUpdate, Lesson};

/// Course state store.
///
/// The current course and lesson are held as nullable ids and resolved by
/// lookup at read time, so replacing the catalog can never leave a stale
/// embedded copy behind.
///
/// # Examples
///
/// ```
/// use maieutica::application::CoursesState;
///
/// let mut courses = CoursesState::default();
/// courses.set_current_course(Some("1".to_string()));
/// // The id does not resolve until a matching course is loaded.
/// assert!(courses.current_course().is_none());
/// ```
#[derive(Debug, Default)]
pub struct CoursesState {
    courses: Vec<Course>,
    current_course: Option<String>,
    current_lesson: Option<String>,
    filters: CourseFilters,
}

impl CoursesState {
    /// Replaces the whole catalog unconditionally.
    pub fn set_courses(&mut self, courses: Vec<Course>) {
        self.courses = courses;
    }

    /// Sets or clears the current course id. Accepted as-is, no
    /// validation.
    pub fn set_current_course(&mut self, course_id: Option<String>) {
        self.current_course = course_id;
    }

    /// Sets or clears the current lesson id. Accepted as-is, no
    /// validation.
    pub fn set_current_lesson(&mut self, lesson_id: Option<String>) {
        self.current_lesson = lesson_id;
    }

    /// Shallow-merges the update into the active filters; unspecified
    /// fields keep their values.
    pub fn update_filters(&mut self, update: FilterUpdate) {
        self.filters.apply(update);
    }

    /// Marks a lesson completed and recomputes the owning course's
    /// progress from its lesson flags.
    ///
    /// Marking an already-completed lesson changes nothing. Unknown
    /// course or lesson ids make the whole call a no-op; courses other
    /// than the matching one are left untouched.
    pub fn mark_lesson_complete(&mut self, course_id: &str, lesson_id: &str) {
        let Some(course) = self.courses.iter_mut().find(|c| c.id == course_id) else {
            return;
        };
        let Some(lesson) = course.lessons.iter_mut().find(|l| l.id == lesson_id) else {
            return;
        };
        lesson.completed = true;
        course.progress = Some(course.derived_progress());
    }

    /// Overwrites a course's progress directly, independent of lesson
    /// completion state. The two entry points can disagree; no
    /// reconciliation is attempted. Unknown course ids are a no-op.
    pub fn update_progress(&mut self, course_id: &str, progress: u8) {
        if let Some(course) = self.courses.iter_mut().find(|c| c.id == course_id) {
            course.progress = Some(progress.min(100));
        }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn filters(&self) -> &CourseFilters {
        &self.filters
    }

    /// Resolves the current course id against the catalog. `None` when
    /// nothing is selected or the id no longer exists.
    pub fn current_course(&self) -> Option<&Course> {
        let id = self.current_course.as_deref()?;
        self.courses.iter().find(|c| c.id == id)
    }

    pub fn current_course_id(&self) -> Option<&str> {
        self.current_course.as_deref()
    }

    /// Resolves the current lesson id within the current course.
    pub fn current_lesson(&self) -> Option<&Lesson> {
        let id = self.current_lesson.as_deref()?;
        self.current_course()?.lessons.iter().find(|l| l.id == id)
    }

    pub fn current_lesson_id(&self) -> Option<&str> {
        self.current_lesson.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CourseLevel, Instructor, LessonKind};

    fn lesson(id: &str) -> Lesson {
        Lesson {
            id: id.to_string(),
            title: format!("Lesson {}", id),
            duration: "15 min".to_string(),
            kind: LessonKind::Video,
            completed: false,
            video_url: None,
            exercise_data: None,
            resources: Vec::new(),
        }
    }

    fn course(id: &str, lesson_ids: &[&str]) -> Course {
        Course {
            id: id.to_string(),
            title: format!("Course {}", id),
            description: "A demo course".to_string(),
            category: "Mathematics".to_string(),
            level: CourseLevel::Beginner,
            duration: "8 weeks".to_string(),
            price: 49.99,
            instructor: Instructor {
                name: "Dr. Sarah Chen".to_string(),
                avatar: String::new(),
                bio: String::new(),
            },
            thumbnail: String::new(),
            cover_video: None,
            lessons: lesson_ids.iter().map(|&id| lesson(id)).collect(),
            progress: None,
            enrolled: true,
            rating: 4.8,
            students_count: 1234,
        }
    }

    fn state_with(courses: Vec<Course>) -> CoursesState {
        let mut state = CoursesState::default();
        state.set_courses(courses);
        state
    }

    #[test]
    fn test_default_state() {
        let state = CoursesState::default();
        assert!(state.courses().is_empty());
        assert!(state.current_course().is_none());
        assert!(state.current_lesson().is_none());
        assert_eq!(*state.filters(), CourseFilters::default());
    }

    #[test]
    fn test_mark_lesson_complete_recomputes_progress() {
        let mut state = state_with(vec![course("1", &["a", "b", "c"])]);

        state.mark_lesson_complete("1", "a");
        assert_eq!(state.courses()[0].progress, Some(33));

        state.mark_lesson_complete("1", "b");
        assert_eq!(state.courses()[0].progress, Some(67));

        state.mark_lesson_complete("1", "c");
        assert_eq!(state.courses()[0].progress, Some(100));
    }

    #[test]
    fn test_mark_lesson_complete_is_idempotent() {
        let mut state = state_with(vec![course("1", &["a", "b"])]);

        state.mark_lesson_complete("1", "a");
        state.mark_lesson_complete("1", "a");

        assert_eq!(state.courses()[0].completed_lesson_count(), 1);
        assert_eq!(state.courses()[0].progress, Some(50));
    }

    #[test]
    fn test_mark_lesson_complete_unknown_course_is_noop() {
        let mut state = state_with(vec![course("1", &["a"])]);
        let before = state.courses().to_vec();

        state.mark_lesson_complete("missing", "a");

        assert_eq!(state.courses(), before.as_slice());
    }

    #[test]
    fn test_mark_lesson_complete_unknown_lesson_is_noop() {
        let mut state = state_with(vec![course("1", &["a"])]);

        state.mark_lesson_complete("1", "missing");

        assert!(!state.courses()[0].lessons[0].completed);
        assert_eq!(state.courses()[0].progress, None);
    }

    #[test]
    fn test_mark_lesson_complete_leaves_other_courses_alone() {
        let mut state = state_with(vec![course("1", &["a"]), course("2", &["a"])]);

        state.mark_lesson_complete("1", "a");

        assert_eq!(state.courses()[0].progress, Some(100));
        assert!(!state.courses()[1].lessons[0].completed);
        assert_eq!(state.courses()[1].progress, None);
    }

    #[test]
    fn test_update_progress_overwrites_directly() {
        let mut state = state_with(vec![course("1", &["a", "b"])]);

        state.update_progress("1", 80);

        // Lesson flags are untouched; the two entry points may disagree.
        assert_eq!(state.courses()[0].progress, Some(80));
        assert_eq!(state.courses()[0].completed_lesson_count(), 0);
    }

    #[test]
    fn test_update_progress_clamps_to_100() {
        let mut state = state_with(vec![course("1", &["a"])]);
        state.update_progress("1", 250);
        assert_eq!(state.courses()[0].progress, Some(100));
    }

    #[test]
    fn test_update_progress_unknown_course_is_noop() {
        let mut state = state_with(vec![course("1", &["a"])]);
        state.update_progress("missing", 50);
        assert_eq!(state.courses()[0].progress, None);
    }

    #[test]
    fn test_update_filters_preserves_unspecified_fields() {
        let mut state = CoursesState::default();

        state.update_filters(FilterUpdate::level(Some(CourseLevel::Beginner)));
        state.update_filters(FilterUpdate::search("algebra"));
        state.update_filters(FilterUpdate::category(Some("Science".to_string())));

        let filters = state.filters();
        assert_eq!(filters.category.as_deref(), Some("Science"));
        assert_eq!(filters.level, Some(CourseLevel::Beginner));
        assert_eq!(filters.search, "algebra");
    }

    #[test]
    fn test_update_filters_can_clear_a_filter() {
        let mut state = CoursesState::default();
        state.update_filters(FilterUpdate::category(Some("Science".to_string())));
        state.update_filters(FilterUpdate::category(None));
        assert_eq!(state.filters().category, None);
    }

    #[test]
    fn test_current_course_lookup() {
        let mut state = state_with(vec![course("1", &["a"]), course("2", &["a"])]);

        state.set_current_course(Some("2".to_string()));
        assert_eq!(state.current_course().unwrap().id, "2");

        state.set_current_course(None);
        assert!(state.current_course().is_none());
    }

    #[test]
    fn test_current_course_invalidated_by_catalog_replacement() {
        let mut state = state_with(vec![course("1", &["a"])]);
        state.set_current_course(Some("1".to_string()));
        assert!(state.current_course().is_some());

        state.set_courses(vec![course("2", &["a"])]);
        assert!(state.current_course().is_none());
    }

    #[test]
    fn test_current_lesson_resolves_within_current_course() {
        let mut state = state_with(vec![course("1", &["a", "b"]), course("2", &["x"])]);

        state.set_current_lesson(Some("b".to_string()));
        // No current course, nothing to resolve against.
        assert!(state.current_lesson().is_none());

        state.set_current_course(Some("1".to_string()));
        assert_eq!(state.current_lesson().unwrap().id, "b");

        // A lesson id from another course does not resolve.
        state.set_current_lesson(Some("x".to_string()));
        assert!(state.current_lesson().is_none());
    }
}
