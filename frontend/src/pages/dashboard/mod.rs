//! Member dashboard
//!
//! - `DashboardShell`: owns the active view, composes sidebar and content
//! - `Sidebar`: navigation surface
//! - `ViewPane`: renders a content unit or the route-supplied fallback
//! - `views`: one component per registered content unit
//! - `DashboardOverview`: default content supplied by the `/dashboard` route

mod overview;
mod shell;
mod sidebar;
mod view_pane;
mod views;

pub use overview::DashboardOverview;
pub use shell::DashboardShell;
pub use sidebar::Sidebar;
pub use view_pane::ViewPane;
