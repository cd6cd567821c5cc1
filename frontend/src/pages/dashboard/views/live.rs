use crate::components::{SessionCard, VideoTile};
use shared::catalog::library::{LIVE_SESSIONS, RECORDINGS};
use shared::ContentUnit;
use yew::prelude::*;

#[function_component(LiveSessionsView)]
pub fn live_sessions_view() -> Html {
    html! {
        <div class="view live-view">
            <div class="view-header">
                <div>
                    <h1>{ ContentUnit::LiveSessions.title() }</h1>
                    <p class="muted">{ "Your coaching calls, masterminds and workshops" }</p>
                </div>
                <button class="button">{ "Book a Session" }</button>
            </div>

            <section>
                <h2>{ "Upcoming" }</h2>
                <div class="card-grid two-col">
                    { for LIVE_SESSIONS.iter().map(|session| html! {
                        <SessionCard session={*session} />
                    }) }
                </div>
            </section>

            <section>
                <h2>{ "Recordings" }</h2>
                <div class="card-grid two-col">
                    { for RECORDINGS.iter().map(|video| html! { <VideoTile video={*video} /> }) }
                </div>
            </section>
        </div>
    }
}
