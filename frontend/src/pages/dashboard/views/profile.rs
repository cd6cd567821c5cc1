use crate::components::{Avatar, ProgressBar};
use shared::catalog::library::{NOTIFICATION_PREFERENCES, PROFILE};
use shared::catalog::member::MEMBERSHIP;
use shared::ContentUnit;
use yew::prelude::*;

#[function_component(ProfileView)]
pub fn profile_view() -> Html {
    let details = [
        ("Email", PROFILE.email),
        ("Location", PROFILE.location),
        ("Business", PROFILE.business),
    ];

    html! {
        <div class="view profile-view">
            <div class="view-header">
                <h1>{ ContentUnit::Profile.title() }</h1>
                <button class="button button-outline">{ "Edit Profile" }</button>
            </div>

            <div class="split">
                <div class="split-main card">
                    <div class="profile-summary">
                        <Avatar name={PROFILE.name} large={true} />
                        <div>
                            <h2>{ PROFILE.name }</h2>
                            <p class="muted">{ PROFILE.bio }</p>
                        </div>
                    </div>
                    <dl class="detail-list">
                        { for details.iter().map(|(label, value)| html! {
                            <>
                                <dt>{ *label }</dt>
                                <dd>{ *value }</dd>
                            </>
                        }) }
                    </dl>
                </div>

                <aside class="split-side">
                    <div class="card">
                        <h2>{ "Membership" }</h2>
                        <p>
                            <span class="badge badge-secondary">{ MEMBERSHIP.tier }</span>
                            <span class="muted">{ format!(" since {}", MEMBERSHIP.since) }</span>
                        </p>
                        <ProgressBar percent={f32::from(MEMBERSHIP.progress_to_next)} />
                        <p class="muted small">
                            { format!("{}% to {}", MEMBERSHIP.progress_to_next, MEMBERSHIP.next_tier) }
                        </p>
                    </div>
                    <div class="card">
                        <h2>{ "Notifications" }</h2>
                        { for NOTIFICATION_PREFERENCES.iter().map(|(label, enabled)| html! {
                            <div class="preference">
                                <span>{ *label }</span>
                                <span class={classes!("toggle", enabled.then_some("on"))}>
                                    { if *enabled { "On" } else { "Off" } }
                                </span>
                            </div>
                        }) }
                    </div>
                </aside>
            </div>
        </div>
    }
}
