use crate::components::{FaqAccordion, SiteFooter, SiteHeader};
use shared::catalog::marketing::{FAQ_INTRO, FAQ_ITEMS, SUPPORT_CHANNELS};
use yew::prelude::*;

#[function_component(FaqPage)]
pub fn faq_page() -> Html {
    html! {
        <>
            <SiteHeader />
            <main class="marketing container narrow">
                <section class="page-intro">
                    <span class="badge badge-secondary">{ "FAQ" }</span>
                    <h1>{ "Frequently Asked Questions" }</h1>
                    <p class="tagline">{ FAQ_INTRO }</p>
                </section>

                <section class="card">
                    <h2>{ "Common Questions" }</h2>
                    <p class="muted">{ "Everything you need to know about our membership platform" }</p>
                    <FaqAccordion items={FAQ_ITEMS} />
                </section>

                <section class="card">
                    <h2>{ "Still Need Help?" }</h2>
                    <p class="muted">
                        { "Can't find what you're looking for? Our support team is here to help." }
                    </p>
                    <div class="card-grid three-col">
                        { for SUPPORT_CHANNELS.iter().map(|channel| html! {
                            <div class="support-channel centered">
                                <h3>{ channel.title }</h3>
                                <p class="muted small">{ channel.body }</p>
                                if let Some(href) = channel.href {
                                    <a class="button button-outline button-small" {href}>{ channel.action }</a>
                                } else {
                                    <button class="button button-outline button-small">{ channel.action }</button>
                                }
                            </div>
                        }) }
                    </div>
                </section>
            </main>
            <SiteFooter />
        </>
    }
}
