//! Sidebar component - dashboard navigation surface

use shared::shell::nav_items;
use shared::{PortalConfig, ViewId};
use yew::prelude::*;

/// Props for the Sidebar component
#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    /// Currently active view
    pub active: ViewId,
    /// Emitted with the entry's own view when a nav button is clicked
    pub on_select: Callback<ViewId>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let config = PortalConfig::DEFAULT;

    html! {
        <aside class="dashboard-sidebar">
            <div class="sidebar-brand">
                <div class="avatar">{ config.avatar_initials }</div>
                <div>
                    <div class="brand-name">{ config.portal_name }</div>
                    <div class="brand-subtitle">{ config.portal_subtitle }</div>
                </div>
            </div>
            <nav class="sidebar-nav">
                { for nav_items(props.active).map(|item| {
                    let view = item.entry.view;
                    let onclick = {
                        let on_select = props.on_select.clone();
                        Callback::from(move |_: MouseEvent| on_select.emit(view))
                    };
                    let class = classes!(
                        "nav-item",
                        format!("nav-{}", view.as_str()),
                        item.active.then_some("active"),
                    );
                    html! {
                        <button
                            key={view.as_str()}
                            {class}
                            {onclick}
                            aria-current={item.active.then_some("page")}
                        >
                            <span class={classes!("nav-icon", format!("icon-{}", item.entry.icon.name()))}>
                                { item.entry.icon.glyph() }
                            </span>
                            <span class="nav-label">{ item.entry.label }</span>
                        </button>
                    }
                }) }
            </nav>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_with;

    async fn render_active(active: ViewId) -> String {
        render_with::<Sidebar, _>(move || SidebarProps {
            active,
            on_select: Callback::noop(),
        })
        .await
    }

    #[tokio::test]
    async fn lists_every_entry_in_order() {
        let html = render_active(ViewId::Dashboard).await;
        let positions: Vec<usize> = [
            "Dashboard",
            "Courses",
            "Community",
            "My Sessions",
            "Events",
            "Resources",
            "Insights",
            "Profile",
        ]
        .iter()
        .map(|label| html.find(&format!(">{}<", label)).expect(label))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("Elite Business Coaching"));
    }

    #[tokio::test]
    async fn marks_only_the_active_entry() {
        let html = render_active(ViewId::Community).await;
        assert!(html.contains("nav-item nav-community active"));
        assert!(!html.contains("nav-item nav-dashboard active"));
        assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
    }

    #[tokio::test]
    async fn each_view_can_be_active() {
        for view in ViewId::ALL {
            let html = render_active(view).await;
            assert!(
                html.contains(&format!("nav-item nav-{} active", view)),
                "{view} not highlighted"
            );
            assert_eq!(html.matches(" active\"").count(), 1);
        }
    }
}
