use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseLevel {
    pub fn label(&self) -> &'static str {
        match self {
            CourseLevel::Beginner => "Beginner",
            CourseLevel::Intermediate => "Intermediate",
            CourseLevel::Advanced => "Advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LessonKind {
    Video,
    Exercise,
    Reading,
    LiveSession,
}

impl LessonKind {
    pub fn label(&self) -> &'static str {
        match self {
            LessonKind::Video => "Video",
            LessonKind::Exercise => "Exercise",
            LessonKind::Reading => "Reading",
            LessonKind::LiveSession => "Live Session",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Pdf,
    Link,
    Download,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub kind: ResourceKind,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub duration: String,
    pub kind: LessonKind,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub exercise_data: Option<serde_json::Value>,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instructor {
    pub name: String,
    pub avatar: String,
    pub bio: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub level: CourseLevel,
    pub duration: String,
    pub price: f64,
    pub instructor: Instructor,
    pub thumbnail: String,
    #[serde(default)]
    pub cover_video: Option<String>,
    pub lessons: Vec<Lesson>,
    /// Percent complete, 0-100. Only meaningful while `enrolled` is true.
    #[serde(default)]
    pub progress: Option<u8>,
    #[serde(default)]
    pub enrolled: bool,
    pub rating: f64,
    pub students_count: u32,
}

impl Course {
    pub fn completed_lesson_count(&self) -> usize {
        self.lessons.iter().filter(|lesson| lesson.completed).count()
    }

    /// Percent complete derived from lesson completion flags.
    ///
    /// A course with no lessons reports 0. All lessons complete reports
    /// exactly 100.
    pub fn derived_progress(&self) -> u8 {
        if self.lessons.is_empty() {
            return 0;
        }
        let completed = self.completed_lesson_count() as f64;
        let total = self.lessons.len() as f64;
        (completed / total * 100.0).round() as u8
    }

    pub fn is_in_progress(&self) -> bool {
        self.enrolled && matches!(self.progress, Some(p) if p > 0 && p < 100)
    }

    pub fn is_completed(&self) -> bool {
        self.enrolled && self.progress == Some(100)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Learner,
    Teacher,
    Parent,
    Admin,
}

impl UserRole {
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Learner => "Learner",
            UserRole::Teacher => "Teacher",
            UserRole::Parent => "Parent",
            UserRole::Admin => "Admin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub avatar: String,
    #[serde(default)]
    pub xp: u32,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub badges: Vec<String>,
}

fn default_level() -> u32 {
    1
}

impl User {
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

/// An authenticated user together with the opaque token the mock backend
/// issued for it.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    pub token: String,
}

/// A badge earned by the learner, shown on the dashboard overview.
#[derive(Debug, Clone)]
pub struct Achievement {
    pub name: String,
    pub description: String,
    pub icon: String,
}

/// An upcoming live session advertised on the dashboard overview.
#[derive(Debug, Clone)]
pub struct LiveSessionInfo {
    pub title: String,
    pub instructor: String,
    pub time: String,
}

/// Active filters for the course list.
///
/// `None` for category or level means the filter is not applied. An empty
/// search string matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseFilters {
    pub category: Option<String>,
    pub level: Option<CourseLevel>,
    pub search: String,
}

impl CourseFilters {
    pub fn matches(&self, course: &Course) -> bool {
        if let Some(ref category) = self.category {
            if !course.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if let Some(level) = self.level {
            if course.level != level {
                return false;
            }
        }
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let haystacks = [&course.title, &course.description, &course.category];
            if !haystacks.iter().any(|h| h.to_lowercase().contains(&needle)) {
                return false;
            }
        }
        true
    }

    /// Shallow-merges `update` into the current filters. Fields the update
    /// leaves unset keep their existing values.
    pub fn apply(&mut self, update: FilterUpdate) {
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(level) = update.level {
            self.level = level;
        }
        if let Some(search) = update.search {
            self.search = search;
        }
    }
}

/// Partial filter change. Outer `None` leaves the field untouched; for
/// category and level an inner `None` clears that filter.
#[derive(Debug, Clone, Default)]
pub struct FilterUpdate {
    pub category: Option<Option<String>>,
    pub level: Option<Option<CourseLevel>>,
    pub search: Option<String>,
}

impl FilterUpdate {
    pub fn search(search: impl Into<String>) -> Self {
        FilterUpdate {
            search: Some(search.into()),
            ..FilterUpdate::default()
        }
    }

    pub fn category(category: Option<String>) -> Self {
        FilterUpdate {
            category: Some(category),
            ..FilterUpdate::default()
        }
    }

    pub fn level(level: Option<CourseLevel>) -> Self {
        FilterUpdate {
            level: Some(level),
            ..FilterUpdate::default()
        }
    }
}
