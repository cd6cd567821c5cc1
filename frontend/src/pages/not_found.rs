use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="not-found">
            <h1>{ "404" }</h1>
            <p class="muted">{ "This page does not exist." }</p>
            <Link<Route> to={Route::Home} classes="button">{ "Back to Home" }</Link<Route>>
        </div>
    }
}
