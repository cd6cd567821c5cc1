use crate::components::{SiteFooter, SiteHeader};
use crate::Route;
use shared::catalog::marketing::{HERO_TAGLINE, HERO_TITLE, HOME_FEATURES, PLANS};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <>
            <SiteHeader />
            <main class="marketing container">
                <section class="hero">
                    <h1>{ HERO_TITLE }</h1>
                    <p class="tagline">{ HERO_TAGLINE }</p>
                    <div class="button-row centered">
                        <Link<Route> to={Route::Dashboard} classes="button">
                            { "Open Member Portal" }
                        </Link<Route>>
                        <Link<Route> to={Route::About} classes="button button-outline">
                            { "Learn More" }
                        </Link<Route>>
                    </div>
                </section>

                <section class="feature-grid">
                    { for HOME_FEATURES.iter().map(|feature| html! {
                        <div class="card feature">
                            <h3>{ feature.title }</h3>
                            <p class="muted">{ feature.body }</p>
                        </div>
                    }) }
                </section>

                <section id="pricing" class="pricing">
                    <h2>{ "Plans" }</h2>
                    <div class="card-grid three-col">
                        { for PLANS.iter().map(|plan| html! {
                            <div class="card plan">
                                <h3>{ plan.name }</h3>
                                <p class="stat-value">{ plan.price }</p>
                                <p class="muted">{ plan.members }</p>
                            </div>
                        }) }
                    </div>
                    <p class="muted small">{ "14-day free trial, no credit card required." }</p>
                </section>
            </main>
            <SiteFooter />
        </>
    }
}
