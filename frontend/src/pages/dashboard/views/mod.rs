//! Content units registered in the dashboard's view registry

mod community;
mod courses;
mod events;
mod insights;
mod live;
mod profile;
mod resources;

pub use community::CommunityView;
pub use courses::CoursesView;
pub use events::EventsView;
pub use insights::InsightsView;
pub use live::LiveSessionsView;
pub use profile::ProfileView;
pub use resources::ResourcesView;

use shared::ContentUnit;
use yew::prelude::*;

/// Render a content unit. Units take no props; each carries its own data.
pub fn render_content(unit: ContentUnit) -> Html {
    match unit {
        ContentUnit::Courses => html! { <CoursesView /> },
        ContentUnit::LiveSessions => html! { <LiveSessionsView /> },
        ContentUnit::Events => html! { <EventsView /> },
        ContentUnit::Community => html! { <CommunityView /> },
        ContentUnit::Resources => html! { <ResourcesView /> },
        ContentUnit::Insights => html! { <InsightsView /> },
        ContentUnit::Profile => html! { <ProfileView /> },
    }
}
