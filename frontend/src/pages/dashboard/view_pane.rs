//! ViewPane component - the dashboard's content region

use super::views::render_content;
use shared::Pane;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ViewPaneProps {
    pub pane: Pane,
    /// Content supplied by the route, shown for the default view
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ViewPane)]
pub fn view_pane(props: &ViewPaneProps) -> Html {
    match props.pane {
        Pane::View(unit) => html! {
            <div class="content-region">
                { render_content(unit) }
            </div>
        },
        Pane::Fallback => html! {
            <>{ for props.children.iter() }</>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_with;
    use shared::ContentUnit;

    async fn render_pane(pane: Pane) -> String {
        render_with::<ViewPane, _>(move || ViewPaneProps {
            pane,
            children: Children::new(vec![html! { <p class="supplied">{ "from the route" }</p> }]),
        })
        .await
    }

    #[tokio::test]
    async fn fallback_renders_supplied_children() {
        let html = render_pane(Pane::Fallback).await;
        assert!(html.contains("from the route"));
        assert!(!html.contains("content-region"));
    }

    #[tokio::test]
    async fn registered_unit_replaces_children() {
        for unit in ContentUnit::ALL {
            let html = render_pane(Pane::View(unit)).await;
            assert!(html.contains("content-region"), "{unit:?}");
            assert!(html.contains(unit.title()), "{unit:?} missing its heading");
            assert!(!html.contains("from the route"), "{unit:?}");
        }
    }
}
