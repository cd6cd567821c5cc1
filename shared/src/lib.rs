//! Types shared by the member portal frontend
//!
//! Everything here is target-independent so the dashboard's navigation model
//! can be tested on the host without a browser.

pub mod accordion;
pub mod branding;
pub mod catalog;
pub mod format;
pub mod registry;
pub mod shell;
pub mod views;

pub use accordion::AccordionState;
pub use branding::PortalConfig;
pub use registry::{resolve, ContentUnit};
pub use shell::{nav_items, DashboardState, NavItem, Pane};
pub use views::{nav_entries, IconHint, NavEntry, ParseViewError, ViewId, NAV_ORDER};
