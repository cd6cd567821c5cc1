use crate::{Route, VERSION};
use shared::PortalConfig;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    html! {
        <footer class="site-footer">
            <span class="version">{ format!("{} v{}", PortalConfig::DEFAULT.site_name, VERSION) }</span>
            <Link<Route> to={Route::About} classes="footer-link">{ "About" }</Link<Route>>
            <Link<Route> to={Route::Faq} classes="footer-link">{ "FAQ" }</Link<Route>>
            <Link<Route> to={Route::Dashboard} classes="footer-link">{ "Member Portal" }</Link<Route>>
        </footer>
    }
}
