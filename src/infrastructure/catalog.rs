//! Seeded demo data standing in for the platform backend.
//!
//! The course catalog ships as a JSON asset embedded at compile time and
//! is deserialized once at startup. Nothing is ever written back; all
//! state resets on restart.

use crate::domain::{Achievement, Course, LiveSessionInfo};

const DEMO_CATALOG: &str = include_str!("demo_catalog.json");

pub struct CatalogRepository;

impl CatalogRepository {
    /// Parses the embedded demo catalog.
    pub fn demo_catalog() -> Result<Vec<Course>, String> {
        serde_json::from_str::<Vec<Course>>(DEMO_CATALOG)
            .map_err(|e| format!("Invalid catalog data - {}", e))
    }

    /// Recently earned badges shown on the dashboard overview.
    pub fn demo_achievements() -> Vec<Achievement> {
        [
            ("Week Warrior", "7 days study streak", "🔥"),
            ("Quick Learner", "Completed 3 lessons today", "⚡"),
            ("Math Master", "Finished algebra course", "🧮"),
        ]
        .into_iter()
        .map(|(name, description, icon)| Achievement {
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
        })
        .collect()
    }

    /// Upcoming live sessions advertised on the dashboard overview.
    pub fn demo_live_sessions() -> Vec<LiveSessionInfo> {
        [
            ("Interactive Math Workshop", "Dr. Sarah Chen", "2:00 PM Today"),
            (
                "Creative Writing Session",
                "Prof. Michael Torres",
                "10:00 AM Tomorrow",
            ),
        ]
        .into_iter()
        .map(|(title, instructor, time)| LiveSessionInfo {
            title: title.to_string(),
            instructor: instructor.to_string(),
            time: time.to_string(),
        })
        .collect()
    }
}
