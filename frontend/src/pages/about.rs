use crate::components::{FaqAccordion, SiteFooter, SiteHeader};
use crate::Route;
use shared::catalog::marketing::{
    ABOUT_FAQ_ITEMS, ABOUT_INTRO, ABOUT_STATS, ABOUT_TITLE, MISSION, TEAMS, VALUES,
};
use shared::PortalConfig;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <>
            <SiteHeader />
            <main class="marketing container">
                <section class="page-intro">
                    <span class="badge badge-secondary">{ "About Us" }</span>
                    <h1>{ ABOUT_TITLE }</h1>
                    <p class="tagline">{ ABOUT_INTRO }</p>
                </section>

                <div class="card-grid two-col">
                    <div class="card">
                        <h2>{ "🎯 Our Mission" }</h2>
                        <p class="muted">{ MISSION }</p>
                    </div>
                    <div class="card">
                        <h2>{ "♥ Our Values" }</h2>
                        <p class="muted">{ VALUES }</p>
                    </div>
                </div>

                <div class="stat-grid">
                    { for ABOUT_STATS.iter().map(|stat| html! {
                        <div class="card stat-tile centered">
                            <div class="stat-value accent">{ stat.value }</div>
                            <p class="muted small">{ stat.label }</p>
                        </div>
                    }) }
                </div>

                <section class="card">
                    <h2>{ "Meet Our Team" }</h2>
                    <p class="muted">
                        { format!("The passionate people behind {}", PortalConfig::DEFAULT.site_name) }
                    </p>
                    <div class="card-grid three-col">
                        { for TEAMS.iter().map(|team| html! {
                            <div class="team centered">
                                <h3>{ team.title }</h3>
                                <p class="muted small">{ team.body }</p>
                            </div>
                        }) }
                    </div>
                </section>

                <section class="card">
                    <h2>{ "Frequently Asked Questions" }</h2>
                    <p class="muted">{ "Common questions about our membership platform" }</p>
                    <FaqAccordion items={ABOUT_FAQ_ITEMS} />
                </section>

                <section class="card cta centered">
                    <h2>{ "Ready to Get Started?" }</h2>
                    <p class="muted">{ "Join thousands of creators building successful membership platforms" }</p>
                    <div class="button-row centered">
                        <Link<Route> to={Route::Dashboard} classes="button">{ "Start Free Trial" }</Link<Route>>
                        <Link<Route> to={Route::Faq} classes="button button-outline">{ "Contact Sales" }</Link<Route>>
                    </div>
                </section>
            </main>
            <SiteFooter />
        </>
    }
}
