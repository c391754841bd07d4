//! Derived views over the course catalog.
//!
//! Everything here is a pure computation over borrowed course data: the
//! dashboard partitions (enrolled / in progress / completed), the filtered
//! course list, and the XP gauge math for the sidebar. No function in this
//! module mutates state.

use super::models::{Course, CourseFilters};

/// XP span of a single level. The sidebar gauge measures the user's XP
/// against this value; XP values are level-relative.
pub const XP_PER_LEVEL: u32 = 1000;

/// Fraction of the current level's XP span that has been earned, clamped
/// to 1.0.
///
/// # Examples
///
/// ```
/// use maieutica::domain::xp_progress_ratio;
///
/// assert_eq!(xp_progress_ratio(750), 0.75);
/// assert_eq!(xp_progress_ratio(2000), 1.0);
/// ```
pub fn xp_progress_ratio(xp: u32) -> f64 {
    (f64::from(xp) / f64::from(XP_PER_LEVEL)).min(1.0)
}

/// XP still needed to reach the next level. Zero once the span is filled.
pub fn xp_to_next_level(xp: u32) -> u32 {
    XP_PER_LEVEL.saturating_sub(xp)
}

/// Read-only query interface over a course catalog.
///
/// Borrows the course list from the store and answers the questions the
/// dashboard and course list pages ask: which courses are enrolled, which
/// are mid-way, which are done, and which match the active filters.
///
/// # Examples
///
/// ```
/// use maieutica::domain::CatalogQuery;
///
/// let courses = vec![];
/// let query = CatalogQuery::new(&courses);
/// assert!(query.enrolled().is_empty());
/// ```
pub struct CatalogQuery<'a> {
    courses: &'a [Course],
}

impl<'a> CatalogQuery<'a> {
    pub fn new(courses: &'a [Course]) -> Self {
        CatalogQuery { courses }
    }

    pub fn find(&self, id: &str) -> Option<&'a Course> {
        self.courses.iter().find(|course| course.id == id)
    }

    /// Courses the learner is enrolled in, in catalog order.
    pub fn enrolled(&self) -> Vec<&'a Course> {
        self.courses.iter().filter(|c| c.enrolled).collect()
    }

    /// Enrolled courses with progress strictly between 0 and 100.
    pub fn in_progress(&self) -> Vec<&'a Course> {
        self.courses.iter().filter(|c| c.is_in_progress()).collect()
    }

    /// Enrolled courses at exactly 100 percent.
    pub fn completed(&self) -> Vec<&'a Course> {
        self.courses.iter().filter(|c| c.is_completed()).collect()
    }

    /// Courses matching the active filters, in catalog order.
    pub fn filtered(&self, filters: &CourseFilters) -> Vec<&'a Course> {
        self.courses
            .iter()
            .filter(|course| filters.matches(course))
            .collect()
    }

    /// The most popular courses by student count, for the landing page
    /// preview.
    pub fn featured(&self, limit: usize) -> Vec<&'a Course> {
        let mut courses: Vec<&Course> = self.courses.iter().collect();
        courses.sort_by(|a, b| b.students_count.cmp(&a.students_count));
        courses.truncate(limit);
        courses
    }
}
