use crate::application::{App, AuthField, Route};
use crate::infrastructure::MockAuthService;
use crossterm::event::{KeyCode, KeyModifiers};
use std::time::Instant;

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) && key == KeyCode::Char('c') {
            app.should_quit = true;
            return;
        }

        if app.help_visible {
            if matches!(
                key,
                KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                app.help_visible = false;
            }
            return;
        }

        match app.route {
            Route::Landing => Self::handle_landing(app, key),
            Route::Login | Route::Register => Self::handle_auth(app, key),
            Route::Dashboard => Self::handle_dashboard(app, key),
            Route::MyCourses => Self::handle_my_courses(app, key),
        }
    }

    fn handle_landing(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Char('l') => app.goto_login(),
            KeyCode::Char('r') => app.goto_register(),
            KeyCode::Char('t') => app.ui.toggle_theme(),
            KeyCode::F(1) | KeyCode::Char('?') => app.help_visible = true,
            _ => {}
        }
    }

    fn handle_auth(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc => app.cancel_auth(),
            KeyCode::Tab => app.focus_next_field(),
            KeyCode::Enter => Self::submit_auth(app),
            KeyCode::Backspace => {
                if let Some(input) = app.focused_input_mut() {
                    input.pop();
                }
            }
            KeyCode::Char(' ') if app.auth_focus == AuthField::Role => app.cycle_role(),
            KeyCode::Char(c) => {
                if let Some(input) = app.focused_input_mut() {
                    input.push(c);
                }
            }
            _ => {}
        }
    }

    fn submit_auth(app: &mut App) {
        let now = Instant::now();
        match app.route {
            Route::Login => {
                let result =
                    MockAuthService::authenticate(&app.email_input, &app.password_input);
                app.set_login_result(result, now);
            }
            Route::Register => {
                let result = MockAuthService::register(
                    &app.name_input,
                    &app.email_input,
                    &app.password_input,
                    &app.confirm_input,
                    app.role_choice,
                );
                app.set_register_result(result, now);
            }
            _ => {}
        }
    }

    fn handle_dashboard(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Char('c') => {
                app.route = Route::MyCourses;
                app.selected_course = 0;
            }
            _ => Self::handle_chrome_key(app, key),
        }
    }

    fn handle_my_courses(app: &mut App, key: KeyCode) {
        if app.search_active {
            match key {
                KeyCode::Esc | KeyCode::Enter => app.search_active = false,
                KeyCode::Backspace => app.search_pop(),
                KeyCode::Char(c) => app.search_push(c),
                _ => {}
            }
            return;
        }

        if app.courses.current_course().is_some() {
            match key {
                KeyCode::Esc => app.close_course(),
                KeyCode::Up | KeyCode::Char('k') => app.select_prev_lesson(),
                KeyCode::Down | KeyCode::Char('j') => app.select_next_lesson(),
                KeyCode::Enter => app.complete_selected_lesson(Instant::now()),
                KeyCode::Char('q') => app.should_quit = true,
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Char('o') => app.route = Route::Dashboard,
            KeyCode::Tab => app.next_course_tab(),
            KeyCode::Char('/') => app.search_active = true,
            KeyCode::Char('f') => app.cycle_level_filter(),
            KeyCode::Up | KeyCode::Char('k') => app.select_prev_course(),
            KeyCode::Down | KeyCode::Char('j') => app.select_next_course(),
            KeyCode::Enter => app.open_selected_course(),
            _ => Self::handle_chrome_key(app, key),
        }
    }

    /// Keys shared by every page inside the dashboard layout.
    fn handle_chrome_key(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Char('b') => app.ui.toggle_sidebar(),
            KeyCode::Char('t') => app.ui.toggle_theme(),
            KeyCode::Char('n') => {
                let newest = app.ui.notifications().next().map(|n| n.id);
                if let Some(id) = newest {
                    app.ui.remove_notification(id);
                }
            }
            KeyCode::Char('x') => app.logout(),
            KeyCode::F(1) | KeyCode::Char('?') => app.help_visible = true,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Theme;

    fn key(app: &mut App, code: KeyCode) {
        InputHandler::handle_key_event(app, code, KeyModifiers::NONE);
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            key(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_landing_shortcuts() {
        let mut app = App::default();

        key(&mut app, KeyCode::Char('t'));
        assert_eq!(app.ui.theme, Theme::Dark);

        key(&mut app, KeyCode::Char('l'));
        assert_eq!(app.route, Route::Login);

        key(&mut app, KeyCode::Esc);
        assert_eq!(app.route, Route::Landing);

        key(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_login_flow_through_keys() {
        let mut app = App::default();
        key(&mut app, KeyCode::Char('l'));

        type_text(&mut app, "learner@maieutica.app");
        key(&mut app, KeyCode::Tab);
        type_text(&mut app, "password1");
        key(&mut app, KeyCode::Enter);

        assert_eq!(app.route, Route::Dashboard);
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.user.name, "Alex Kim");
    }

    #[test]
    fn test_failed_login_stays_on_form() {
        let mut app = App::default();
        key(&mut app, KeyCode::Char('l'));

        type_text(&mut app, "learner@maieutica.app");
        key(&mut app, KeyCode::Tab);
        type_text(&mut app, "short");
        key(&mut app, KeyCode::Enter);

        assert_eq!(app.route, Route::Login);
        assert!(app.session.is_none());
        assert_eq!(app.ui.notification_count(), 1);
    }

    #[test]
    fn test_backspace_edits_focused_field() {
        let mut app = App::default();
        key(&mut app, KeyCode::Char('l'));

        type_text(&mut app, "abc");
        key(&mut app, KeyCode::Backspace);
        assert_eq!(app.email_input, "ab");
    }

    #[test]
    fn test_register_role_cycling_with_space() {
        let mut app = App::default();
        key(&mut app, KeyCode::Char('r'));

        // Reach the role field: name -> email -> password -> confirm -> role.
        for _ in 0..4 {
            key(&mut app, KeyCode::Tab);
        }
        assert_eq!(app.auth_focus, AuthField::Role);

        key(&mut app, KeyCode::Char(' '));
        assert_eq!(app.role_choice, crate::domain::UserRole::Parent);
    }

    #[test]
    fn test_dashboard_navigation_and_logout() {
        let mut app = App::default();
        key(&mut app, KeyCode::Char('l'));
        type_text(&mut app, "a@b.c");
        key(&mut app, KeyCode::Tab);
        type_text(&mut app, "password1");
        key(&mut app, KeyCode::Enter);

        key(&mut app, KeyCode::Char('c'));
        assert_eq!(app.route, Route::MyCourses);

        key(&mut app, KeyCode::Char('o'));
        assert_eq!(app.route, Route::Dashboard);

        key(&mut app, KeyCode::Char('x'));
        assert_eq!(app.route, Route::Landing);
        assert!(app.session.is_none());
    }

    #[test]
    fn test_search_mode_routes_keystrokes_to_filters() {
        let mut app = App::default();
        app.route = Route::MyCourses;

        key(&mut app, KeyCode::Char('/'));
        assert!(app.search_active);

        type_text(&mut app, "algebra");
        assert_eq!(app.courses.filters().search, "algebra");

        key(&mut app, KeyCode::Backspace);
        assert_eq!(app.courses.filters().search, "algebr");

        key(&mut app, KeyCode::Esc);
        assert!(!app.search_active);
    }

    #[test]
    fn test_ctrl_c_quits_from_any_route() {
        let mut app = App::default();
        app.route = Route::Register;
        InputHandler::handle_key_event(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_popup_swallows_keys() {
        let mut app = App::default();
        key(&mut app, KeyCode::F(1));
        assert!(app.help_visible);

        // While the popup is open other shortcuts are inert.
        key(&mut app, KeyCode::Char('l'));
        assert_eq!(app.route, Route::Landing);
        assert!(app.help_visible);

        key(&mut app, KeyCode::Esc);
        assert!(!app.help_visible);
    }
}
