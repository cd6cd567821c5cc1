//! Dashboard view identifiers and navigation entries
//!
//! The dashboard has a fixed, closed set of views. Everything that selects or
//! lists views goes through [`ViewId`] so an unknown view cannot exist once a
//! value has been constructed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the dashboard's selectable content panes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    /// Member overview, supplied by the routing layer rather than the registry
    #[default]
    Dashboard,
    Videos,
    Live,
    Events,
    Community,
    Resources,
    Insights,
    Profile,
}

impl ViewId {
    /// Every view, in declaration order
    pub const ALL: [ViewId; 8] = [
        ViewId::Dashboard,
        ViewId::Videos,
        ViewId::Live,
        ViewId::Events,
        ViewId::Community,
        ViewId::Resources,
        ViewId::Insights,
        ViewId::Profile,
    ];

    /// The view a freshly created shell starts on
    pub const DEFAULT: ViewId = ViewId::Dashboard;

    /// Symbolic tag, e.g. `"videos"`
    pub fn as_str(self) -> &'static str {
        match self {
            ViewId::Dashboard => "dashboard",
            ViewId::Videos => "videos",
            ViewId::Live => "live",
            ViewId::Events => "events",
            ViewId::Community => "community",
            ViewId::Resources => "resources",
            ViewId::Insights => "insights",
            ViewId::Profile => "profile",
        }
    }

    pub fn is_default(self) -> bool {
        self == Self::DEFAULT
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a dashboard view
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dashboard view: {0:?}")]
pub struct ParseViewError(pub String);

impl FromStr for ViewId {
    type Err = ParseViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        ViewId::ALL
            .into_iter()
            .find(|view| view.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| ParseViewError(s.to_string()))
    }
}

/// Icon shown next to a navigation label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconHint {
    LayoutDashboard,
    BookOpen,
    Users,
    PlayCircle,
    Calendar,
    Folder,
    FileText,
    Settings,
}

impl IconHint {
    /// Text glyph rendered in place of an icon font
    pub fn glyph(self) -> &'static str {
        match self {
            IconHint::LayoutDashboard => "▦",
            IconHint::BookOpen => "📖",
            IconHint::Users => "👥",
            IconHint::PlayCircle => "▶",
            IconHint::Calendar => "📅",
            IconHint::Folder => "📁",
            IconHint::FileText => "📄",
            IconHint::Settings => "⚙",
        }
    }

    /// Kebab-case name, used as a CSS hook (`icon-book-open`)
    pub fn name(self) -> &'static str {
        match self {
            IconHint::LayoutDashboard => "layout-dashboard",
            IconHint::BookOpen => "book-open",
            IconHint::Users => "users",
            IconHint::PlayCircle => "play-circle",
            IconHint::Calendar => "calendar",
            IconHint::Folder => "folder",
            IconHint::FileText => "file-text",
            IconHint::Settings => "settings",
        }
    }
}

/// A sidebar entry: which view it selects and how it is labelled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub view: ViewId,
    pub label: &'static str,
    pub icon: IconHint,
}

impl NavEntry {
    pub const fn for_view(view: ViewId) -> NavEntry {
        let (label, icon) = match view {
            ViewId::Dashboard => ("Dashboard", IconHint::LayoutDashboard),
            ViewId::Videos => ("Courses", IconHint::BookOpen),
            ViewId::Community => ("Community", IconHint::Users),
            ViewId::Live => ("My Sessions", IconHint::PlayCircle),
            ViewId::Events => ("Events", IconHint::Calendar),
            ViewId::Resources => ("Resources", IconHint::Folder),
            ViewId::Insights => ("Insights", IconHint::FileText),
            ViewId::Profile => ("Profile", IconHint::Settings),
        };
        NavEntry { view, label, icon }
    }
}

/// Sidebar display order
pub const NAV_ORDER: [ViewId; 8] = [
    ViewId::Dashboard,
    ViewId::Videos,
    ViewId::Community,
    ViewId::Live,
    ViewId::Events,
    ViewId::Resources,
    ViewId::Insights,
    ViewId::Profile,
];

/// Navigation entries in display order
pub fn nav_entries() -> impl Iterator<Item = NavEntry> {
    NAV_ORDER.into_iter().map(NavEntry::for_view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_view_is_dashboard() {
        assert_eq!(ViewId::default(), ViewId::Dashboard);
        assert!(ViewId::DEFAULT.is_default());
        assert_eq!(
            ViewId::ALL.iter().filter(|v| v.is_default()).count(),
            1,
            "exactly one default view"
        );
    }

    #[test]
    fn tags_parse_back_to_the_same_view() {
        for view in ViewId::ALL {
            assert_eq!(view.as_str().parse::<ViewId>(), Ok(view));
            assert_eq!(view.to_string(), view.as_str());
        }
    }

    #[test]
    fn parse_ignores_case_and_whitespace() {
        assert_eq!(" Community ".parse::<ViewId>(), Ok(ViewId::Community));
        assert_eq!("LIVE".parse::<ViewId>(), Ok(ViewId::Live));
    }

    #[test]
    fn parse_rejects_unknown_tags() {
        let err = "courses".parse::<ViewId>().unwrap_err();
        assert_eq!(err, ParseViewError("courses".to_string()));
        assert_eq!(err.to_string(), "unknown dashboard view: \"courses\"");
        assert!("".parse::<ViewId>().is_err());
    }

    #[test]
    fn serde_uses_symbolic_tags() {
        let json = serde_json::to_string(&ViewId::Videos).unwrap();
        assert_eq!(json, "\"videos\"");
        let parsed: ViewId = serde_json::from_str("\"resources\"").unwrap();
        assert_eq!(parsed, ViewId::Resources);
        assert!(serde_json::from_str::<ViewId>("\"settings\"").is_err());
    }

    #[test]
    fn nav_order_covers_every_view_once() {
        let listed: HashSet<ViewId> = NAV_ORDER.into_iter().collect();
        assert_eq!(listed.len(), ViewId::ALL.len());
        for view in ViewId::ALL {
            assert!(listed.contains(&view), "{view} missing from navigation");
        }
    }

    #[test]
    fn nav_entries_follow_sidebar_order() {
        let labels: Vec<&str> = nav_entries().map(|e| e.label).collect();
        assert_eq!(
            labels,
            [
                "Dashboard",
                "Courses",
                "Community",
                "My Sessions",
                "Events",
                "Resources",
                "Insights",
                "Profile"
            ]
        );
    }

    #[test]
    fn entry_points_back_at_its_view() {
        for view in ViewId::ALL {
            assert_eq!(NavEntry::for_view(view).view, view);
        }
        assert_eq!(NavEntry::for_view(ViewId::Live).icon, IconHint::PlayCircle);
        assert_eq!(IconHint::PlayCircle.name(), "play-circle");
    }
}
