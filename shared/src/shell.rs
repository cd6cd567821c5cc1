//! Dashboard shell state
//!
//! `DashboardState` holds the active view for the lifetime of a dashboard
//! session. It is not persisted and is not reflected in the URL; a new shell
//! always starts on [`ViewId::DEFAULT`].

use crate::registry::{self, ContentUnit};
use crate::views::{nav_entries, NavEntry, ViewId};

/// What the content region of the shell should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    /// A registered content unit, rendered inside the padded content region
    View(ContentUnit),
    /// Content supplied by the enclosing page (the default view)
    Fallback,
}

/// A navigation entry together with whether it is the selected one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub entry: NavEntry,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardState {
    active: ViewId,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            active: ViewId::DEFAULT,
        }
    }

    pub fn active(&self) -> ViewId {
        self.active
    }

    /// Make `view` the active view. Returns `false` if it already was.
    pub fn select_view(&mut self, view: ViewId) -> bool {
        if self.active == view {
            return false;
        }
        self.active = view;
        true
    }

    /// Select a view by its tag. Unknown tags leave the state untouched.
    pub fn select_view_key(&mut self, key: &str) -> bool {
        match key.parse::<ViewId>() {
            Ok(view) => self.select_view(view),
            Err(e) => {
                log::warn!("Ignoring view selection: {}", e);
                false
            }
        }
    }

    pub fn pane(&self) -> Pane {
        match registry::resolve(self.active) {
            Some(unit) => Pane::View(unit),
            None => Pane::Fallback,
        }
    }

    /// Sidebar items in display order, with the active one flagged
    pub fn nav_items(&self) -> impl Iterator<Item = NavItem> {
        nav_items(self.active)
    }
}

/// Navigation entries in display order, flagging the one equal to `active`
pub fn nav_items(active: ViewId) -> impl Iterator<Item = NavItem> {
    nav_entries().map(move |entry| NavItem {
        entry,
        active: entry.view == active,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_label(state: &DashboardState) -> &'static str {
        let mut active = state.nav_items().filter(|item| item.active);
        let item = active.next().expect("one active item");
        assert!(active.next().is_none(), "more than one active item");
        item.entry.label
    }

    #[test]
    fn new_shell_starts_on_fallback() {
        let state = DashboardState::new();
        assert_eq!(state.active(), ViewId::Dashboard);
        assert_eq!(state.pane(), Pane::Fallback);
        assert_eq!(active_label(&state), "Dashboard");
        assert_eq!(state, DashboardState::default());
    }

    #[test]
    fn selecting_a_registered_view_shows_its_unit() {
        for view in ViewId::ALL.into_iter().filter(|v| !v.is_default()) {
            let mut state = DashboardState::new();
            assert!(state.select_view(view));
            let expected = registry::resolve(view).expect("registered");
            assert_eq!(state.pane(), Pane::View(expected));
            assert_eq!(active_label(&state), NavEntry::for_view(view).label);
        }
    }

    #[test]
    fn selecting_the_active_view_changes_nothing() {
        let mut once = DashboardState::new();
        once.select_view(ViewId::Events);

        let mut twice = once;
        assert!(!twice.select_view(ViewId::Events));
        assert_eq!(twice, once);
        assert_eq!(twice.pane(), once.pane());

        let mut fresh = DashboardState::new();
        assert!(!fresh.select_view(ViewId::Dashboard));
    }

    #[test]
    fn community_round_trip() {
        let mut state = DashboardState::new();

        assert!(state.select_view(ViewId::Community));
        assert_eq!(active_label(&state), "Community");
        assert_eq!(state.pane(), Pane::View(ContentUnit::Community));

        assert!(!state.select_view(ViewId::Community));
        assert_eq!(state.pane(), Pane::View(ContentUnit::Community));

        assert!(state.select_view(ViewId::Dashboard));
        assert_eq!(state.pane(), Pane::Fallback);
        assert_eq!(active_label(&state), "Dashboard");
    }

    #[test]
    fn select_by_key() {
        let mut state = DashboardState::new();
        assert!(state.select_view_key("insights"));
        assert_eq!(state.active(), ViewId::Insights);
        assert!(!state.select_view_key("insights"));
    }

    #[test]
    fn unknown_key_is_a_no_op() {
        let mut state = DashboardState::new();
        state.select_view(ViewId::Profile);
        assert!(!state.select_view_key("billing"));
        assert_eq!(state.active(), ViewId::Profile);
        assert_eq!(state.pane(), Pane::View(ContentUnit::Profile));
    }
}
