//! Server-side rendering helpers for component tests

use yew::{BaseComponent, ServerRenderer};

/// Render a component with default props to an HTML string
pub async fn render<C>() -> String
where
    C: BaseComponent,
    C::Properties: Default,
{
    ServerRenderer::<C>::new().hydratable(false).render().await
}

/// Render a component with the props produced by `props`
pub async fn render_with<C, F>(props: F) -> String
where
    C: BaseComponent,
    F: 'static + Send + FnOnce() -> C::Properties,
{
    ServerRenderer::<C>::with_props(props)
        .hydratable(false)
        .render()
        .await
}
