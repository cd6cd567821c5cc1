//! Mapping from a dashboard view to the content unit that renders it
//!
//! The default view has no content unit. The shell renders whatever the
//! routing layer passed in as children instead.

use crate::views::ViewId;

/// Self-contained content pane for one non-default view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentUnit {
    Courses,
    LiveSessions,
    Events,
    Community,
    Resources,
    Insights,
    Profile,
}

impl ContentUnit {
    pub const ALL: [ContentUnit; 7] = [
        ContentUnit::Courses,
        ContentUnit::LiveSessions,
        ContentUnit::Events,
        ContentUnit::Community,
        ContentUnit::Resources,
        ContentUnit::Insights,
        ContentUnit::Profile,
    ];

    /// The view this unit is registered under
    pub fn view(self) -> ViewId {
        match self {
            ContentUnit::Courses => ViewId::Videos,
            ContentUnit::LiveSessions => ViewId::Live,
            ContentUnit::Events => ViewId::Events,
            ContentUnit::Community => ViewId::Community,
            ContentUnit::Resources => ViewId::Resources,
            ContentUnit::Insights => ViewId::Insights,
            ContentUnit::Profile => ViewId::Profile,
        }
    }

    /// Page heading
    pub fn title(self) -> &'static str {
        match self {
            ContentUnit::Courses => "Courses",
            ContentUnit::LiveSessions => "Live Sessions",
            ContentUnit::Events => "Events",
            ContentUnit::Community => "Community Hub",
            ContentUnit::Resources => "Resources",
            ContentUnit::Insights => "Business Insights",
            ContentUnit::Profile => "Profile",
        }
    }
}

/// Resolve a view to its content unit. `None` only for the default view.
pub fn resolve(view: ViewId) -> Option<ContentUnit> {
    match view {
        ViewId::Dashboard => None,
        ViewId::Videos => Some(ContentUnit::Courses),
        ViewId::Live => Some(ContentUnit::LiveSessions),
        ViewId::Events => Some(ContentUnit::Events),
        ViewId::Community => Some(ContentUnit::Community),
        ViewId::Resources => Some(ContentUnit::Resources),
        ViewId::Insights => Some(ContentUnit::Insights),
        ViewId::Profile => Some(ContentUnit::Profile),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::nav_entries;

    #[test]
    fn every_non_default_view_resolves() {
        for view in ViewId::ALL.into_iter().filter(|v| !v.is_default()) {
            assert!(resolve(view).is_some(), "{view} has no content unit");
        }
    }

    #[test]
    fn default_view_is_absent() {
        assert_eq!(resolve(ViewId::DEFAULT), None);
    }

    #[test]
    fn resolved_unit_maps_back_to_its_view() {
        for view in ViewId::ALL {
            if let Some(unit) = resolve(view) {
                assert_eq!(unit.view(), view);
            }
        }
        for unit in ContentUnit::ALL {
            assert_eq!(resolve(unit.view()), Some(unit));
        }
    }

    #[test]
    fn navigation_and_registry_agree() {
        let unresolved: Vec<ViewId> = nav_entries()
            .map(|entry| entry.view)
            .filter(|view| resolve(*view).is_none())
            .collect();
        assert_eq!(unresolved, [ViewId::Dashboard]);
    }

    #[test]
    fn resolve_is_repeatable() {
        assert_eq!(resolve(ViewId::Events), resolve(ViewId::Events));
        assert_eq!(ContentUnit::Insights.title(), "Business Insights");
    }
}
