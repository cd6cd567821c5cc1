use crate::Route;
use shared::PortalConfig;
use yew::prelude::*;
use yew_router::prelude::*;

/// Top bar for the public pages
#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    html! {
        <header class="site-header">
            <div class="container header-inner">
                <Link<Route> to={Route::Home} classes="brand">
                    { PortalConfig::DEFAULT.site_name }
                </Link<Route>>
                <nav class="header-links">
                    <a href="/#pricing">{ "Pricing" }</a>
                    <Link<Route> to={Route::About}>{ "About" }</Link<Route>>
                    <Link<Route> to={Route::Faq}>{ "FAQ" }</Link<Route>>
                </nav>
                <nav class="header-actions">
                    <Link<Route> to={Route::Dashboard}>{ "Sign In" }</Link<Route>>
                    <Link<Route> to={Route::Dashboard} classes="button button-small">
                        { "Get Started" }
                    </Link<Route>>
                </nav>
            </div>
        </header>
    }
}
