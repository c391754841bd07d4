use crate::application::{nav_items, App, AuthField, CourseTab, NotificationKind, Route, Theme};
use crate::domain::{xp_progress_ratio, xp_to_next_level, CatalogQuery, UserRole};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Gauge, List, ListItem, Paragraph, Row, Table, Wrap},
    Frame,
};

/// Colors derived from the active theme. Recomputed every frame, so
/// toggling the theme repaints the whole interface on the next draw.
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub highlight_bg: Color,
    pub highlight_fg: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Palette {
        match theme {
            Theme::Light => Palette {
                bg: Color::White,
                fg: Color::Black,
                muted: Color::DarkGray,
                accent: Color::Blue,
                highlight_bg: Color::Blue,
                highlight_fg: Color::White,
            },
            Theme::Dark => Palette {
                bg: Color::Black,
                fg: Color::Gray,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                highlight_bg: Color::Cyan,
                highlight_fg: Color::Black,
            },
        }
    }

    fn base(&self) -> Style {
        Style::default().bg(self.bg).fg(self.fg)
    }

    fn panel(&self, title: &str) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_string())
            .style(self.base())
    }
}

pub fn render_ui(f: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.ui.theme);
    f.render_widget(Block::default().style(palette.base()), f.area());

    match app.route {
        Route::Landing => render_landing(f, app, &palette),
        Route::Login | Route::Register => render_auth(f, app, &palette),
        Route::Dashboard | Route::MyCourses => render_dashboard_layout(f, app, &palette),
    }

    render_notifications(f, app, &palette);

    if app.help_visible {
        render_help_popup(f, &palette);
    }
}

fn render_landing(f: &mut Frame, app: &App, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    let header = Paragraph::new("Maieutica")
        .style(palette.base().fg(palette.accent).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(header, chunks[0]);

    let hero = Paragraph::new(vec![
        Line::from(Span::styled(
            "Learning that feels like play",
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Interactive courses, live sessions and a gamified path"),
        Line::from("from your first lesson to mastery."),
    ])
    .style(palette.base())
    .alignment(Alignment::Center);
    f.render_widget(hero, chunks[1]);

    render_featured_courses(f, app, palette, chunks[2]);

    let footer = Paragraph::new("l: log in | r: create account | t: theme | q: quit")
        .style(palette.base().fg(palette.muted))
        .block(palette.panel(""))
        .alignment(Alignment::Center);
    f.render_widget(footer, chunks[3]);
}

fn render_featured_courses(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let query = CatalogQuery::new(app.courses.courses());
    let rows: Vec<Row> = query
        .featured(3)
        .into_iter()
        .map(|course| {
            Row::new(vec![
                Cell::from(course.title.clone()),
                Cell::from(course.level.label()),
                Cell::from(course.duration.clone()),
                Cell::from(format!("{:.1}★", course.rating)),
                Cell::from(format!("{} students", course.students_count)),
            ])
            .style(palette.base())
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(45),
            Constraint::Length(14),
            Constraint::Length(10),
            Constraint::Length(6),
            Constraint::Length(16),
        ],
    )
    .header(
        Row::new(vec!["Course", "Level", "Duration", "Rating", "Students"])
            .style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)),
    )
    .block(palette.panel("Featured Courses"))
    .column_spacing(1);

    f.render_widget(table, area);
}

fn render_auth(f: &mut Frame, app: &App, palette: &Palette) {
    let area = centered_rect(f.area(), 50, 70);
    f.render_widget(Clear, area);

    let (title, fields): (&str, Vec<(AuthField, &str, String)>) = match app.route {
        Route::Login => (
            "Sign in",
            vec![
                (AuthField::Email, "Email", app.email_input.clone()),
                (AuthField::Password, "Password", mask(&app.password_input)),
            ],
        ),
        _ => (
            "Create your account",
            vec![
                (AuthField::Name, "Name", app.name_input.clone()),
                (AuthField::Email, "Email", app.email_input.clone()),
                (AuthField::Password, "Password", mask(&app.password_input)),
                (
                    AuthField::ConfirmPassword,
                    "Confirm password",
                    mask(&app.confirm_input),
                ),
                (AuthField::Role, "Role (space to change)", app.role_choice.label().to_string()),
            ],
        ),
    };

    let mut constraints = vec![Constraint::Length(2)];
    constraints.extend(std::iter::repeat(Constraint::Length(3)).take(fields.len()));
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(2));

    let outer = palette.panel(title);
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let subtitle = match app.route {
        Route::Login => "Sign in to continue your learning journey",
        _ => "Start learning in minutes",
    };
    f.render_widget(
        Paragraph::new(subtitle).style(palette.base().fg(palette.muted)),
        chunks[0],
    );

    for (i, (field, label, value)) in fields.iter().enumerate() {
        let focused = app.auth_focus == *field;
        let border_style = if focused {
            Style::default().fg(palette.accent)
        } else {
            Style::default().fg(palette.muted)
        };
        let text = if focused && *field != AuthField::Role {
            format!("{}▏", value)
        } else {
            value.clone()
        };
        let widget = Paragraph::new(text).style(palette.base()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(*label)
                .border_style(border_style),
        );
        f.render_widget(widget, chunks[i + 1]);
    }

    let hints = Paragraph::new("Tab: next field | Enter: submit | Esc: back")
        .style(palette.base().fg(palette.muted))
        .alignment(Alignment::Center);
    f.render_widget(hints, chunks[fields.len() + 2]);
}

fn mask(value: &str) -> String {
    "•".repeat(value.chars().count())
}

fn render_dashboard_layout(f: &mut Frame, app: &App, palette: &Palette) {
    let sidebar_width = if app.ui.sidebar_open { 26 } else { 4 };
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
        .split(f.area());

    render_sidebar(f, app, palette, columns[0]);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(columns[1]);

    render_header(f, app, palette, main[0]);
    match app.route {
        Route::MyCourses => render_my_courses(f, app, palette, main[1]),
        _ => render_overview(f, app, palette, main[1]),
    }
    render_status_bar(f, app, palette, main[2]);
}

fn render_sidebar(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let block = palette.panel(if app.ui.sidebar_open { "Maieutica" } else { "" });
    let inner = block.inner(area);
    f.render_widget(block, area);

    if !app.ui.sidebar_open {
        return;
    }
    let Some(session) = &app.session else {
        return;
    };
    let user = &session.user;

    let show_xp = user.role == UserRole::Learner;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if show_xp { 3 } else { 0 }),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(inner);

    if show_xp {
        let gauge = Gauge::default()
            .block(Block::default().title(format!("Level {}", user.level)))
            .gauge_style(Style::default().fg(palette.accent))
            .ratio(xp_progress_ratio(user.xp))
            .label(format!("{} / 1000 XP", user.xp));
        f.render_widget(gauge, chunks[0]);
    }

    let items: Vec<ListItem> = nav_items(user.role)
        .iter()
        .map(|&label| {
            let active = is_active_nav(app.route, user.role, label);
            let style = if active {
                Style::default()
                    .bg(palette.highlight_bg)
                    .fg(palette.highlight_fg)
            } else {
                palette.base()
            };
            ListItem::new(format!("  {}", label)).style(style)
        })
        .collect();
    f.render_widget(List::new(items), chunks[1]);

    let user_card = Paragraph::new(vec![
        Line::from(Span::styled(
            user.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            user.role.label(),
            Style::default().fg(palette.muted),
        )),
    ])
    .style(palette.base());
    f.render_widget(user_card, chunks[2]);
}

fn is_active_nav(route: Route, role: UserRole, label: &str) -> bool {
    if role != UserRole::Learner {
        return false;
    }
    matches!(
        (route, label),
        (Route::Dashboard, "Overview") | (Route::MyCourses, "My Courses")
    )
}

fn render_header(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let title = match app.route {
        Route::MyCourses => "My Courses",
        _ => "Overview",
    };
    let bell = match app.ui.notification_count() {
        0 => String::new(),
        n => format!(" | {} notification{}", n, if n == 1 { "" } else { "s" }),
    };
    let header = Paragraph::new(format!("{}{}", title, bell))
        .style(palette.base().fg(palette.accent).add_modifier(Modifier::BOLD))
        .block(palette.panel(""));
    f.render_widget(header, area);
}

fn render_overview(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let Some(session) = &app.session else {
        return;
    };
    let user = &session.user;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Min(6),
            Constraint::Length(6),
        ])
        .split(area);

    let welcome = Paragraph::new(format!(
        "Welcome back, {}! Ready to continue your learning journey?",
        user.first_name()
    ))
    .style(palette.base().add_modifier(Modifier::BOLD));
    f.render_widget(welcome, chunks[0]);

    let stats = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(chunks[1]);

    let xp = Gauge::default()
        .block(palette.panel("Your Progress"))
        .gauge_style(Style::default().fg(palette.accent))
        .ratio(xp_progress_ratio(user.xp))
        .label(format!(
            "{} XP to next level",
            xp_to_next_level(user.xp)
        ));
    f.render_widget(xp, stats[0]);

    let goal = app.weekly_goal;
    let goal_ratio =
        (f64::from(goal.studied_hours) / f64::from(goal.target_hours.max(1))).min(1.0);
    let goal_gauge = Gauge::default()
        .block(palette.panel("Weekly Goal"))
        .gauge_style(Style::default().fg(palette.accent))
        .ratio(goal_ratio)
        .label(format!("{}h of {}h", goal.studied_hours, goal.target_hours));
    f.render_widget(goal_gauge, stats[1]);

    let streak = Paragraph::new(format!("{} days in a row", app.study_streak_days))
        .style(palette.base())
        .block(palette.panel("Study Streak"));
    f.render_widget(streak, stats[2]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);

    let query = CatalogQuery::new(app.courses.courses());
    let continue_items: Vec<ListItem> = query
        .in_progress()
        .into_iter()
        .map(|course| {
            ListItem::new(format!(
                "{} — {}% complete",
                course.title,
                course.progress.unwrap_or(0)
            ))
            .style(palette.base())
        })
        .collect();
    let continue_list = if continue_items.is_empty() {
        List::new(vec![ListItem::new("No courses in progress. Start learning something new today!")
            .style(palette.base().fg(palette.muted))])
    } else {
        List::new(continue_items)
    };
    f.render_widget(continue_list.block(palette.panel("Continue Learning")), middle[0]);

    let session_items: Vec<ListItem> = app
        .upcoming_sessions
        .iter()
        .map(|s| {
            ListItem::new(format!("{} — {} ({})", s.time, s.title, s.instructor))
                .style(palette.base())
        })
        .collect();
    f.render_widget(
        List::new(session_items).block(palette.panel("Upcoming Live Sessions")),
        middle[1],
    );

    let achievement_items: Vec<ListItem> = app
        .achievements
        .iter()
        .map(|a| {
            ListItem::new(format!("{} {} — {}", a.icon, a.name, a.description))
                .style(palette.base())
        })
        .collect();
    f.render_widget(
        List::new(achievement_items).block(palette.panel("Recent Achievements")),
        chunks[3],
    );
}

fn render_my_courses(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let (all, in_progress, completed) = app.tab_counts();
    let tab_line: Vec<Span> = [
        (CourseTab::All, all),
        (CourseTab::InProgress, in_progress),
        (CourseTab::Completed, completed),
    ]
    .into_iter()
    .flat_map(|(tab, count)| {
        let style = if tab == app.course_tab {
            Style::default()
                .bg(palette.highlight_bg)
                .fg(palette.highlight_fg)
        } else {
            palette.base().fg(palette.muted)
        };
        vec![
            Span::styled(format!(" {} ({}) ", tab.label(), count), style),
            Span::raw("  "),
        ]
    })
    .collect();
    f.render_widget(Paragraph::new(Line::from(tab_line)).style(palette.base()), chunks[0]);

    let filters = app.courses.filters();
    let search_title = if app.search_active { "Search (typing)" } else { "Search (/)" };
    let level_note = filters
        .level
        .map(|l| format!(" | level: {}", l.label()))
        .unwrap_or_default();
    let search = Paragraph::new(format!("{}{}", filters.search, level_note))
        .style(palette.base())
        .block(Block::default().borders(Borders::ALL).title(search_title).border_style(
            if app.search_active {
                Style::default().fg(palette.accent)
            } else {
                Style::default().fg(palette.muted)
            },
        ));
    f.render_widget(search, chunks[1]);

    match app.courses.current_course() {
        Some(_) => render_lesson_list(f, app, palette, chunks[2]),
        None => render_course_table(f, app, palette, chunks[2]),
    }
}

fn render_course_table(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let rows: Vec<Row> = app
        .visible_courses()
        .into_iter()
        .enumerate()
        .map(|(i, course)| {
            let style = if i == app.selected_course {
                Style::default()
                    .bg(palette.highlight_bg)
                    .fg(palette.highlight_fg)
            } else {
                palette.base()
            };
            Row::new(vec![
                Cell::from(course.title.clone()),
                Cell::from(course.category.clone()),
                Cell::from(course.level.label()),
                Cell::from(course.duration.clone()),
                Cell::from(progress_bar(course.progress.unwrap_or(0))),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(40),
            Constraint::Length(16),
            Constraint::Length(14),
            Constraint::Length(10),
            Constraint::Min(14),
        ],
    )
    .header(
        Row::new(vec!["Course", "Category", "Level", "Duration", "Progress"])
            .style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)),
    )
    .block(palette.panel("Enrolled Courses"))
    .column_spacing(1);
    f.render_widget(table, area);
}

fn progress_bar(progress: u8) -> String {
    let filled = (usize::from(progress) / 10).min(10);
    format!("{}{} {:>3}%", "█".repeat(filled), "░".repeat(10 - filled), progress)
}

fn render_lesson_list(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let Some(course) = app.courses.current_course() else {
        return;
    };

    let items: Vec<ListItem> = course
        .lessons
        .iter()
        .enumerate()
        .map(|(i, lesson)| {
            let marker = if lesson.completed { "[x]" } else { "[ ]" };
            let style = if i == app.selected_lesson {
                Style::default()
                    .bg(palette.highlight_bg)
                    .fg(palette.highlight_fg)
            } else {
                palette.base()
            };
            ListItem::new(format!(
                "{} {} — {} ({})",
                marker,
                lesson.title,
                lesson.kind.label(),
                lesson.duration
            ))
            .style(style)
        })
        .collect();

    let title = format!(
        "{} — {}% complete (Enter: mark done, Esc: back)",
        course.title,
        course.progress.unwrap_or(0)
    );
    f.render_widget(List::new(items).block(palette.panel(&title)), area);
}

fn render_status_bar(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let hints = match app.route {
        Route::MyCourses => {
            if app.search_active {
                "Esc: stop searching | type to filter".to_string()
            } else if app.courses.current_course().is_some() {
                "↑↓: select lesson | Enter: mark done | Esc: back | q: quit".to_string()
            } else {
                "↑↓: select | Enter: open | Tab: tabs | /: search | f: level filter | o: overview | b: sidebar | t: theme | q: quit"
                    .to_string()
            }
        }
        _ => "c: my courses | b: sidebar | t: theme | n: dismiss notification | F1: help | x: log out | q: quit".to_string(),
    };
    let bar = Paragraph::new(hints)
        .style(palette.base().fg(palette.muted))
        .block(palette.panel(""));
    f.render_widget(bar, area);
}

fn render_notifications(f: &mut Frame, app: &App, palette: &Palette) {
    let area = f.area();
    let width = area.width.min(42);
    let x = area.width.saturating_sub(width);

    for (i, notification) in app.ui.notifications().enumerate() {
        let y = 1 + (i as u16) * 4;
        if y + 4 > area.height {
            break;
        }
        let rect = Rect {
            x,
            y,
            width,
            height: 4,
        };
        let color = match notification.kind {
            NotificationKind::Success => Color::Green,
            NotificationKind::Error => Color::Red,
            NotificationKind::Warning => Color::Yellow,
            NotificationKind::Info => palette.accent,
        };
        f.render_widget(Clear, rect);
        let toast = Paragraph::new(notification.message.clone())
            .wrap(Wrap { trim: true })
            .style(palette.base())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(notification.title.clone())
                    .border_style(Style::default().fg(color)),
            );
        f.render_widget(toast, rect);
    }
}

fn render_help_popup(f: &mut Frame, palette: &Palette) {
    let area = centered_rect(f.area(), 60, 70);
    f.render_widget(Clear, area);

    let help = Paragraph::new(get_help_text())
        .wrap(Wrap { trim: false })
        .style(palette.base())
        .block(palette.panel("Keyboard Reference (Esc to close)"));
    f.render_widget(help, area);
}

fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    Rect {
        x: (area.width - width) / 2,
        y: (area.height - height) / 2,
        width,
        height,
    }
}

fn get_help_text() -> String {
    r#"GLOBAL
t          Toggle light/dark theme
q          Quit (from landing or dashboard pages)
F1 or ?    Toggle this help

LANDING
l          Open the sign-in form
r          Open the registration form

AUTH FORMS
Tab        Next field
Space      Change role (register form, role field)
Enter      Submit
Esc        Back to landing

DASHBOARD
o          Overview page
c          My Courses page
b          Toggle sidebar
n          Dismiss newest notification
x          Log out

MY COURSES
Tab        Cycle All / In Progress / Completed
/          Type into the search box (Esc to stop)
f          Cycle the level filter
Up/Down    Select a course or lesson
Enter      Open course / mark lesson complete
Esc        Close the open course"#
        .to_string()
}
