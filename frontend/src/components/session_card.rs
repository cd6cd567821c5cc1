use shared::catalog::member::ScheduledSession;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SessionCardProps {
    pub session: ScheduledSession,
}

/// Card for a scheduled coaching call, mastermind or workshop
#[function_component(SessionCard)]
pub fn session_card(props: &SessionCardProps) -> Html {
    let session = &props.session;

    let who = match (session.host, session.seats) {
        (Some(host), _) => format!("with {}", host),
        (None, Some((registered, capacity))) => format!("{}/{} attendees", registered, capacity),
        (None, None) => String::new(),
    };

    html! {
        <div class="card session-card">
            <div class="card-header">
                <span class="badge badge-outline">{ session.kind.label() }</span>
                <span class={classes!("badge", format!("status-{}", session.status))}>
                    { session.status }
                </span>
            </div>
            <h3>{ session.title }</h3>
            <p class="muted">{ session.description }</p>
            <div class="meta-row small">
                <span>{ format!("📅 {}", session.date) }</span>
                <span>{ format!("🕑 {} · {}", session.time, session.duration) }</span>
            </div>
            <p class="muted small">{ who }</p>
        </div>
    }
}
