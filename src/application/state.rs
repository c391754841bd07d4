//! Top-level application state for the terminal client.
//!
//! `App` owns the two stores ([`UiState`], [`CoursesState`]) plus the
//! session, the current route, and the input buffers for the auth forms.
//! Infrastructure results (login, registration, catalog loading) are fed
//! back in through `set_*_result` methods so the struct itself never
//! touches the outside world.

use std::time::Instant;

use crate::application::courses_state::CoursesState;
use crate::application::ui_state::{NotificationKind, UiState};
use crate::domain::{
    Achievement, CatalogQuery, Course, CourseLevel, DomainError, DomainResult, FilterUpdate,
    LiveSessionInfo, Session, UserRole,
};

/// The page currently shown.
///
/// Landing, Login and Register are full-screen; Dashboard and MyCourses
/// render inside the dashboard layout (sidebar + header).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Public landing page with the course preview
    Landing,
    /// Email/password sign-in form
    Login,
    /// Account creation form with role selection
    Register,
    /// Learner overview: XP, goals, streak, continue-learning list
    Dashboard,
    /// Enrolled course list with tabs, search and lesson tracking
    MyCourses,
}

/// Which form field currently receives keystrokes on the auth pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Name,
    Email,
    Password,
    ConfirmPassword,
    Role,
}

/// Tab selection on the My Courses page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseTab {
    All,
    InProgress,
    Completed,
}

impl CourseTab {
    pub fn label(&self) -> &'static str {
        match self {
            CourseTab::All => "All Courses",
            CourseTab::InProgress => "In Progress",
            CourseTab::Completed => "Completed",
        }
    }

    pub fn next(self) -> CourseTab {
        match self {
            CourseTab::All => CourseTab::InProgress,
            CourseTab::InProgress => CourseTab::Completed,
            CourseTab::Completed => CourseTab::All,
        }
    }
}

/// Weekly study goal shown on the dashboard. Static display data.
#[derive(Debug, Clone, Copy)]
pub struct WeeklyGoal {
    pub studied_hours: u32,
    pub target_hours: u32,
}

/// Sidebar navigation entries for a role, mirroring the dashboard layout.
pub fn nav_items(role: UserRole) -> &'static [&'static str] {
    match role {
        UserRole::Learner => &["Overview", "My Courses", "Leaderboard", "Profile"],
        UserRole::Teacher => &["Dashboard", "My Courses", "Students", "Analytics"],
        UserRole::Parent => &["Overview", "Children", "Messages"],
        UserRole::Admin => &["Dashboard", "Users", "Courses", "Analytics"],
    }
}

/// Main application state.
///
/// # Examples
///
/// ```
/// use maieutica::application::{App, Route};
///
/// let app = App::default();
/// assert_eq!(app.route, Route::Landing);
/// assert!(app.session.is_none());
/// ```
#[derive(Debug)]
pub struct App {
    /// The page currently shown
    pub route: Route,
    /// Interface chrome state (theme, sidebar, notifications)
    pub ui: UiState,
    /// Course catalog state
    pub courses: CoursesState,
    /// The authenticated user, if any
    pub session: Option<Session>,
    /// Name input buffer (register form)
    pub name_input: String,
    /// Email input buffer (auth forms)
    pub email_input: String,
    /// Password input buffer (auth forms)
    pub password_input: String,
    /// Password confirmation buffer (register form)
    pub confirm_input: String,
    /// Role picked on the register form
    pub role_choice: UserRole,
    /// Form field currently receiving keystrokes
    pub auth_focus: AuthField,
    /// Active tab on My Courses
    pub course_tab: CourseTab,
    /// Selected row in the visible course list
    pub selected_course: usize,
    /// Selected row in the open course's lesson list
    pub selected_lesson: usize,
    /// Whether keystrokes on My Courses go to the search box
    pub search_active: bool,
    /// Help popup visibility
    pub help_visible: bool,
    /// Set when the user asks to quit
    pub should_quit: bool,
    /// Static dashboard fixture: hours studied this week vs. target
    pub weekly_goal: WeeklyGoal,
    /// Static dashboard fixture: consecutive study days
    pub study_streak_days: u32,
    /// Static dashboard fixture: recently earned badges
    pub achievements: Vec<Achievement>,
    /// Static dashboard fixture: upcoming live sessions
    pub upcoming_sessions: Vec<LiveSessionInfo>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            route: Route::Landing,
            ui: UiState::default(),
            courses: CoursesState::default(),
            session: None,
            name_input: String::new(),
            email_input: String::new(),
            password_input: String::new(),
            confirm_input: String::new(),
            role_choice: UserRole::Learner,
            auth_focus: AuthField::Email,
            course_tab: CourseTab::All,
            selected_course: 0,
            selected_lesson: 0,
            search_active: false,
            help_visible: false,
            should_quit: false,
            weekly_goal: WeeklyGoal {
                studied_hours: 4,
                target_hours: 7,
            },
            study_streak_days: 12,
            achievements: Vec::new(),
            upcoming_sessions: Vec::new(),
        }
    }
}

impl App {
    /// Advances time-driven state. Called once per event-loop iteration.
    pub fn tick(&mut self, now: Instant) {
        self.ui.expire_notifications(now);
    }

    /// Switches to the login form with empty inputs.
    pub fn goto_login(&mut self) {
        self.route = Route::Login;
        self.clear_auth_inputs();
        self.auth_focus = AuthField::Email;
    }

    /// Switches to the register form with empty inputs.
    pub fn goto_register(&mut self) {
        self.route = Route::Register;
        self.clear_auth_inputs();
        self.auth_focus = AuthField::Name;
    }

    /// Abandons the current auth form and returns to the landing page.
    pub fn cancel_auth(&mut self) {
        self.route = Route::Landing;
        self.clear_auth_inputs();
    }

    fn clear_auth_inputs(&mut self) {
        self.name_input.clear();
        self.email_input.clear();
        self.password_input.clear();
        self.confirm_input.clear();
        self.role_choice = UserRole::Learner;
    }

    /// Moves focus to the next form field, wrapping around. The login
    /// form only cycles email and password.
    pub fn focus_next_field(&mut self) {
        self.auth_focus = match self.route {
            Route::Login => match self.auth_focus {
                AuthField::Email => AuthField::Password,
                _ => AuthField::Email,
            },
            _ => match self.auth_focus {
                AuthField::Name => AuthField::Email,
                AuthField::Email => AuthField::Password,
                AuthField::Password => AuthField::ConfirmPassword,
                AuthField::ConfirmPassword => AuthField::Role,
                AuthField::Role => AuthField::Name,
            },
        };
    }

    /// The input buffer behind the focused field, if it is a text field.
    pub fn focused_input_mut(&mut self) -> Option<&mut String> {
        match self.auth_focus {
            AuthField::Name => Some(&mut self.name_input),
            AuthField::Email => Some(&mut self.email_input),
            AuthField::Password => Some(&mut self.password_input),
            AuthField::ConfirmPassword => Some(&mut self.confirm_input),
            AuthField::Role => None,
        }
    }

    /// Steps the register form's role picker through all four roles.
    pub fn cycle_role(&mut self) {
        self.role_choice = match self.role_choice {
            UserRole::Learner => UserRole::Parent,
            UserRole::Parent => UserRole::Teacher,
            UserRole::Teacher => UserRole::Admin,
            UserRole::Admin => UserRole::Learner,
        };
    }

    /// Applies the outcome of a login attempt: install the session and
    /// enter the dashboard, or surface the error as a notification.
    pub fn set_login_result(&mut self, result: DomainResult<Session>, now: Instant) {
        match result {
            Ok(session) => {
                self.ui.add_notification(
                    NotificationKind::Success,
                    "Welcome back!",
                    "You have successfully logged in.",
                    now,
                );
                self.session = Some(session);
                self.route = Route::Dashboard;
                self.clear_auth_inputs();
            }
            Err(error) => {
                self.notify_auth_error("Login Failed", &error, now);
            }
        }
    }

    /// Applies the outcome of a registration attempt.
    pub fn set_register_result(&mut self, result: DomainResult<Session>, now: Instant) {
        match result {
            Ok(session) => {
                self.ui.add_notification(
                    NotificationKind::Success,
                    "Welcome to Maieutica!",
                    format!("Your account has been created, {}.", session.user.first_name()),
                    now,
                );
                self.session = Some(session);
                self.route = Route::Dashboard;
                self.clear_auth_inputs();
            }
            Err(error) => {
                self.notify_auth_error("Registration Failed", &error, now);
            }
        }
    }

    fn notify_auth_error(&mut self, title: &str, error: &DomainError, now: Instant) {
        self.ui
            .add_notification(NotificationKind::Error, title, error.to_string(), now);
    }

    /// Drops the session and returns to the landing page.
    pub fn logout(&mut self) {
        self.session = None;
        self.route = Route::Landing;
        self.courses.set_current_course(None);
        self.courses.set_current_lesson(None);
    }

    /// Applies the outcome of loading the course catalog.
    pub fn set_catalog_result(&mut self, result: Result<Vec<Course>, String>, now: Instant) {
        match result {
            Ok(courses) => {
                self.courses.set_courses(courses);
            }
            Err(error) => {
                self.ui.add_notification(
                    NotificationKind::Error,
                    "Catalog unavailable",
                    error,
                    now,
                );
            }
        }
    }

    /// The enrolled courses visible on My Courses under the active tab,
    /// search and filters, in catalog order.
    pub fn visible_courses(&self) -> Vec<&Course> {
        let query = CatalogQuery::new(self.courses.courses());
        let filters = self.courses.filters();
        query
            .enrolled()
            .into_iter()
            .filter(|course| match self.course_tab {
                CourseTab::All => true,
                CourseTab::InProgress => course.is_in_progress(),
                CourseTab::Completed => course.is_completed(),
            })
            .filter(|course| filters.matches(course))
            .collect()
    }

    /// Per-tab course counts shown in the tab bar: (all, in progress,
    /// completed).
    pub fn tab_counts(&self) -> (usize, usize, usize) {
        let query = CatalogQuery::new(self.courses.courses());
        (
            query.enrolled().len(),
            query.in_progress().len(),
            query.completed().len(),
        )
    }

    /// Switches to the next My Courses tab and resets the selection.
    pub fn next_course_tab(&mut self) {
        self.course_tab = self.course_tab.next();
        self.selected_course = 0;
    }

    pub fn select_next_course(&mut self) {
        let count = self.visible_courses().len();
        if count > 0 && self.selected_course + 1 < count {
            self.selected_course += 1;
        }
    }

    pub fn select_prev_course(&mut self) {
        self.selected_course = self.selected_course.saturating_sub(1);
    }

    /// Opens the selected course's lesson list.
    pub fn open_selected_course(&mut self) {
        let id = self
            .visible_courses()
            .get(self.selected_course)
            .map(|course| course.id.clone());
        if let Some(id) = id {
            self.courses.set_current_course(Some(id));
            self.selected_lesson = 0;
        }
    }

    /// Closes the open course and returns to the course list.
    pub fn close_course(&mut self) {
        self.courses.set_current_course(None);
        self.courses.set_current_lesson(None);
        self.selected_lesson = 0;
    }

    pub fn select_next_lesson(&mut self) {
        let count = self
            .courses
            .current_course()
            .map_or(0, |course| course.lessons.len());
        if count > 0 && self.selected_lesson + 1 < count {
            self.selected_lesson += 1;
        }
    }

    pub fn select_prev_lesson(&mut self) {
        self.selected_lesson = self.selected_lesson.saturating_sub(1);
    }

    /// Marks the selected lesson of the open course as complete and
    /// confirms it with a notification.
    pub fn complete_selected_lesson(&mut self, now: Instant) {
        let Some(course) = self.courses.current_course() else {
            return;
        };
        let Some(lesson) = course.lessons.get(self.selected_lesson) else {
            return;
        };
        if lesson.completed {
            return;
        }
        let course_id = course.id.clone();
        let lesson_id = lesson.id.clone();
        let lesson_title = lesson.title.clone();

        self.courses.mark_lesson_complete(&course_id, &lesson_id);
        self.ui.add_notification(
            NotificationKind::Success,
            "Lesson complete",
            format!("Finished \"{}\"", lesson_title),
            now,
        );
    }

    /// Appends a character to the search box, keeping the store's filter
    /// state as the single source of truth.
    pub fn search_push(&mut self, c: char) {
        let mut search = self.courses.filters().search.clone();
        search.push(c);
        self.courses.update_filters(FilterUpdate::search(search));
        self.selected_course = 0;
    }

    /// Deletes the last character of the search box.
    pub fn search_pop(&mut self) {
        let mut search = self.courses.filters().search.clone();
        search.pop();
        self.courses.update_filters(FilterUpdate::search(search));
        self.selected_course = 0;
    }

    /// Steps the level filter through none -> beginner -> intermediate ->
    /// advanced -> none.
    pub fn cycle_level_filter(&mut self) {
        let next = match self.courses.filters().level {
            None => Some(CourseLevel::Beginner),
            Some(CourseLevel::Beginner) => Some(CourseLevel::Intermediate),
            Some(CourseLevel::Intermediate) => Some(CourseLevel::Advanced),
            Some(CourseLevel::Advanced) => None,
        };
        self.courses.update_filters(FilterUpdate::level(next));
        self.selected_course = 0;
    }
}
