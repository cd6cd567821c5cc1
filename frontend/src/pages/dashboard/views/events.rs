use shared::catalog::library::{EventListing, EVENTS};
use shared::ContentUnit;
use yew::prelude::*;

#[function_component(EventsView)]
pub fn events_view() -> Html {
    html! {
        <div class="view events-view">
            <div class="view-header">
                <div>
                    <h1>{ ContentUnit::Events.title() }</h1>
                    <p class="muted">{ "Summits, workshops and retreats for members" }</p>
                </div>
            </div>
            <div class="event-list">
                { for EVENTS.iter().map(event_row) }
            </div>
        </div>
    }
}

fn event_row(event: &EventListing) -> Html {
    let seats_left = event.seats_left();
    let (registered, capacity) = event.seats;

    html! {
        <div class="card event-card">
            <div class="event-date">{ event.date }</div>
            <div class="event-body">
                <h3>{ event.title }</h3>
                <p class="muted">{ event.description }</p>
                <div class="meta-row">
                    <span class="badge badge-outline">{ event.format }</span>
                    <span>{ event.location }</span>
                    <span class="muted">{ format!("{}/{} registered", registered, capacity) }</span>
                </div>
            </div>
            <div class="event-actions">
                if seats_left == 0 {
                    <span class="badge badge-secondary">{ "Waitlist" }</span>
                } else {
                    <span class="seats-left">{ format!("{} seats left", seats_left) }</span>
                    <button class="button button-small">{ "Register" }</button>
                }
            </div>
        </div>
    }
}
