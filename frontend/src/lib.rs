mod components;
mod pages;
#[cfg(test)]
mod test_support;

use pages::{
    about::AboutPage,
    community::CommunityPage,
    dashboard::{DashboardOverview, DashboardShell},
    faq::FaqPage,
    home::HomePage,
    insights::InsightsPage,
    not_found::NotFoundPage,
};
use shared::PortalConfig;
use yew::prelude::*;
use yew_router::prelude::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/faq")]
    Faq,
    #[at("/dashboard")]
    Dashboard,
    #[at("/community")]
    Community,
    #[at("/insights")]
    Insights,
    #[not_found]
    #[at("/404")]
    NotFound,
}

// Member routes share the dashboard shell; the route only picks what the
// shell shows for its default view.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::About => html! { <AboutPage /> },
        Route::Faq => html! { <FaqPage /> },
        Route::Dashboard => html! {
            <DashboardShell><DashboardOverview /></DashboardShell>
        },
        Route::Community => html! {
            <DashboardShell><CommunityPage /></DashboardShell>
        },
        Route::Insights => html! {
            <DashboardShell><InsightsPage /></DashboardShell>
        },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    let config = PortalConfig::DEFAULT;
    wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    log::info!("{} v{}", config.site_name, VERSION);
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_routes_are_recognised() {
        assert_eq!(Route::recognize("/dashboard"), Some(Route::Dashboard));
        assert_eq!(Route::recognize("/community"), Some(Route::Community));
        assert_eq!(Route::recognize("/insights"), Some(Route::Insights));
    }

    #[test]
    fn not_found_is_the_fallback_route() {
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
        assert_eq!(Route::Faq.to_path(), "/faq");
    }
}
