//! DashboardShell component - owns the active view and composes the layout

use super::{Sidebar, ViewPane};
use shared::{DashboardState, ViewId};
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DashboardShellProps {
    /// Page content for the default view, supplied by the route
    #[prop_or_default]
    pub children: Children,
}

/// Dashboard layout: sidebar plus the content pane for the active view.
///
/// The state handle never leaves this component; the sidebar only receives
/// the active view and a callback, so `on_select` is the single writer.
#[function_component(DashboardShell)]
pub fn dashboard_shell(props: &DashboardShellProps) -> Html {
    let state = use_state(DashboardState::new);
    let main_ref = use_node_ref();

    // Start each newly selected view at the top of the pane
    {
        let main_ref = main_ref.clone();
        use_effect_with(state.active(), move |_| {
            if let Some(main) = main_ref.cast::<Element>() {
                main.set_scroll_top(0);
            }
            || ()
        });
    }

    let on_select = {
        let state = state.clone();
        Callback::from(move |view: ViewId| {
            let mut next = *state;
            if next.select_view(view) {
                log::debug!("Dashboard view {} -> {}", state.active(), view);
                state.set(next);
            }
        })
    };

    html! {
        <div class="dashboard-layout">
            <Sidebar active={state.active()} {on_select} />
            <main class="dashboard-main" ref={main_ref}>
                <ViewPane pane={state.pane()}>
                    { for props.children.iter() }
                </ViewPane>
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render;

    #[function_component(ShellWithOverview)]
    fn shell_with_overview() -> Html {
        html! {
            <DashboardShell>
                <section class="overview">{ "Supplied overview" }</section>
            </DashboardShell>
        }
    }

    #[tokio::test]
    async fn fresh_shell_shows_supplied_content() {
        let html = render::<ShellWithOverview>().await;
        assert!(html.contains("Supplied overview"));
        assert!(!html.contains("content-region"));
        assert!(html.contains("nav-item nav-dashboard active"));
    }

    #[tokio::test]
    async fn sidebar_sits_before_the_main_region() {
        let html = render::<ShellWithOverview>().await;
        let sidebar = html.find("dashboard-sidebar").expect("sidebar");
        let main = html.find("dashboard-main").expect("main");
        assert!(sidebar < main);
    }
}
