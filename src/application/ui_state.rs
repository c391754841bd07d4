//! Interface chrome state: theme, sidebar, and the transient notification
//! queue.
//!
//! `UiState` is an explicit container owned by [`crate::application::App`];
//! tests construct their own instances. Notification expiry is driven by
//! timestamps checked on the event-loop tick rather than background timers,
//! so the whole lifecycle is deterministic under test.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a notification stays visible before it expires on its own.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

/// Upper bound on the live notification queue. Inserting beyond this drops
/// the oldest entries.
pub const MAX_NOTIFICATIONS: usize = 5;

/// Color scheme for the whole interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Severity of a notification, determining its visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationKind::Success => "Success",
            NotificationKind::Error => "Error",
            NotificationKind::Warning => "Warning",
            NotificationKind::Info => "Info",
        }
    }
}

/// A transient toast shown in the dashboard header area.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Opaque unique token, used for explicit removal.
    pub id: u64,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub created_at: Instant,
    /// The moment this notification stops being shown unless removed
    /// earlier.
    pub expires_at: Instant,
}

/// Interface state store.
///
/// Holds the theme, the sidebar flag, and the bounded notification queue
/// ordered newest-first.
///
/// # Examples
///
/// ```
/// use maieutica::application::{Theme, UiState};
///
/// let mut ui = UiState::default();
/// assert_eq!(ui.theme, Theme::Light);
/// ui.toggle_theme();
/// assert_eq!(ui.theme, Theme::Dark);
/// ```
#[derive(Debug)]
pub struct UiState {
    /// Current color scheme. The presentation layer derives its palette
    /// from this on every frame.
    pub theme: Theme,
    /// Whether the dashboard sidebar is expanded.
    pub sidebar_open: bool,
    /// Live notifications, newest first. Never longer than
    /// [`MAX_NOTIFICATIONS`].
    notifications: VecDeque<Notification>,
    /// Source of notification ids.
    next_notification_id: u64,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            sidebar_open: true,
            notifications: VecDeque::new(),
            next_notification_id: 0,
        }
    }
}

impl UiState {
    /// Flips between light and dark.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Expands or collapses the sidebar.
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Adds a notification to the front of the queue and returns its id.
    ///
    /// The queue is truncated to its [`MAX_NOTIFICATIONS`] most recent
    /// entries, dropping the oldest. The entry expires
    /// [`NOTIFICATION_TTL`] after `now` unless removed earlier.
    pub fn add_notification(
        &mut self,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        now: Instant,
    ) -> u64 {
        let id = self.next_notification_id;
        self.next_notification_id += 1;

        self.notifications.push_front(Notification {
            id,
            kind,
            title: title.into(),
            message: message.into(),
            created_at: now,
            expires_at: now + NOTIFICATION_TTL,
        });
        self.notifications.truncate(MAX_NOTIFICATIONS);

        id
    }

    /// Removes the notification with the given id. Unknown ids are a
    /// no-op, so explicit dismissal and expiry can race harmlessly.
    pub fn remove_notification(&mut self, id: u64) {
        self.notifications.retain(|n| n.id != id);
    }

    /// Drops every notification whose `expires_at` has passed. Called
    /// from the event-loop tick.
    pub fn expire_notifications(&mut self, now: Instant) {
        self.notifications.retain(|n| n.expires_at > now);
    }

    /// Live notifications, newest first.
    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    pub fn notification_count(&self) -> usize {
        self.notifications.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(ui: &mut UiState, title: &str, now: Instant) -> u64 {
        ui.add_notification(NotificationKind::Info, title, "message", now)
    }

    #[test]
    fn test_default_state() {
        let ui = UiState::default();
        assert_eq!(ui.theme, Theme::Light);
        assert!(ui.sidebar_open);
        assert_eq!(ui.notification_count(), 0);
    }

    #[test]
    fn test_toggle_theme_round_trips() {
        let mut ui = UiState::default();
        ui.toggle_theme();
        assert_eq!(ui.theme, Theme::Dark);
        ui.toggle_theme();
        assert_eq!(ui.theme, Theme::Light);
    }

    #[test]
    fn test_toggle_sidebar() {
        let mut ui = UiState::default();
        ui.toggle_sidebar();
        assert!(!ui.sidebar_open);
        ui.toggle_sidebar();
        assert!(ui.sidebar_open);
    }

    #[test]
    fn test_notifications_are_newest_first() {
        let mut ui = UiState::default();
        let now = Instant::now();
        add(&mut ui, "first", now);
        add(&mut ui, "second", now);
        add(&mut ui, "third", now);

        let titles: Vec<&str> = ui.notifications().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["third", "second", "first"]);
    }

    #[test]
    fn test_queue_never_exceeds_cap() {
        let mut ui = UiState::default();
        let now = Instant::now();
        for i in 0..20 {
            add(&mut ui, &format!("n{}", i), now);
            assert!(ui.notification_count() <= MAX_NOTIFICATIONS);
        }
        assert_eq!(ui.notification_count(), MAX_NOTIFICATIONS);

        // The survivors are the five most recent.
        let titles: Vec<&str> = ui.notifications().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["n19", "n18", "n17", "n16", "n15"]);
    }

    #[test]
    fn test_notification_ids_are_unique() {
        let mut ui = UiState::default();
        let now = Instant::now();
        let a = add(&mut ui, "a", now);
        let b = add(&mut ui, "b", now);
        assert_ne!(a, b);
    }

    #[test]
    fn test_remove_notification() {
        let mut ui = UiState::default();
        let now = Instant::now();
        let keep = add(&mut ui, "keep", now);
        let drop = add(&mut ui, "drop", now);

        ui.remove_notification(drop);

        assert_eq!(ui.notification_count(), 1);
        assert_eq!(ui.notifications().next().unwrap().id, keep);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut ui = UiState::default();
        let now = Instant::now();
        add(&mut ui, "only", now);

        ui.remove_notification(999);
        assert_eq!(ui.notification_count(), 1);
    }

    #[test]
    fn test_expiry_after_ttl() {
        let mut ui = UiState::default();
        let now = Instant::now();
        add(&mut ui, "short-lived", now);

        // Just before the deadline the entry is still present.
        ui.expire_notifications(now + NOTIFICATION_TTL - Duration::from_millis(1));
        assert_eq!(ui.notification_count(), 1);

        ui.expire_notifications(now + NOTIFICATION_TTL);
        assert_eq!(ui.notification_count(), 0);
    }

    #[test]
    fn test_expiry_only_drops_elapsed_entries() {
        let mut ui = UiState::default();
        let now = Instant::now();
        add(&mut ui, "old", now);
        add(&mut ui, "new", now + Duration::from_secs(3));

        ui.expire_notifications(now + NOTIFICATION_TTL);

        let titles: Vec<&str> = ui.notifications().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["new"]);
    }

    #[test]
    fn test_manual_removal_then_expiry_is_harmless() {
        let mut ui = UiState::default();
        let now = Instant::now();
        let id = add(&mut ui, "toast", now);

        ui.remove_notification(id);
        assert_eq!(ui.notification_count(), 0);

        // The expiry sweep for the already-removed entry changes nothing.
        ui.expire_notifications(now + NOTIFICATION_TTL);
        assert_eq!(ui.notification_count(), 0);
    }
}
