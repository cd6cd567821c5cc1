//! DashboardOverview - the member home supplied by the `/dashboard` route

use crate::components::{Avatar, ProgressBar, SessionCard, StatsCard, VideoTile};
use shared::catalog::member::{
    ACHIEVEMENTS, COMMUNITY_ACTIVITY, CURRENT_COURSE, MEMBERSHIP, MEMBER_FIRST_NAME,
    MEMBER_STATS, RECOMMENDED, UPCOMING_SESSIONS,
};
use yew::prelude::*;

#[function_component(DashboardOverview)]
pub fn dashboard_overview() -> Html {
    html! {
        <div class="content-region overview">
            <section class="welcome">
                <h1>{ format!("Welcome back, {}!", MEMBER_FIRST_NAME) }</h1>
                <p class="muted">
                    { "Ready to accelerate your business growth? Here's your personalized learning journey." }
                </p>
                <div class="meta-row">
                    <span class="badge badge-secondary">
                        { format!("{} since {}", MEMBERSHIP.tier, MEMBERSHIP.since) }
                    </span>
                    <span class="muted small">
                        { format!("• {}% to {}", MEMBERSHIP.progress_to_next, MEMBERSHIP.next_tier) }
                    </span>
                </div>
            </section>

            <div class="stat-grid">
                { for MEMBER_STATS.iter().map(|stat| html! { <StatsCard stat={*stat} /> }) }
            </div>

            <div class="split">
                <div class="split-main">
                    <div class="card current-course">
                        <div class="card-header">
                            <h2>{ "Continue Learning" }</h2>
                            <span class="badge badge-outline">{ CURRENT_COURSE.category }</span>
                        </div>
                        <h3>{ CURRENT_COURSE.title }</h3>
                        <p class="muted">{ CURRENT_COURSE.description }</p>
                        <div class="meta-row small">
                            <span>{ "Progress" }</span>
                            <span>{ format!("{}%", CURRENT_COURSE.progress) }</span>
                        </div>
                        <ProgressBar percent={f32::from(CURRENT_COURSE.progress)} />
                        <div class="next-lesson">
                            <div>
                                <p class="strong small">{ format!("Next: {}", CURRENT_COURSE.next_lesson) }</p>
                                <p class="muted small">{ format!("~{}", CURRENT_COURSE.estimated_time) }</p>
                            </div>
                            <button class="button button-small">{ "Continue →" }</button>
                        </div>
                    </div>

                    <section>
                        <h2>{ "📅 Upcoming for Me" }</h2>
                        <div class="card-grid two-col">
                            { for UPCOMING_SESSIONS.iter().map(|session| html! {
                                <SessionCard session={*session} />
                            }) }
                        </div>
                    </section>

                    <section>
                        <h2>{ "📖 Recommended for You" }</h2>
                        <div class="card-grid two-col">
                            { for RECOMMENDED.iter().map(|video| html! { <VideoTile video={*video} /> }) }
                        </div>
                    </section>
                </div>

                <aside class="split-side">
                    <div class="card">
                        <h2>{ "My Community Activity" }</h2>
                        { for COMMUNITY_ACTIVITY.iter().map(|activity| html! {
                            <div class="activity">
                                <Avatar name={activity.user} />
                                <div>
                                    <p class="small">
                                        <strong>{ activity.user }</strong>
                                        { format!(" {} ", activity.action) }
                                        <strong>{ activity.target }</strong>
                                        if activity.direct {
                                            <span class="star">{ " ★" }</span>
                                        }
                                    </p>
                                    <p class="muted small">{ activity.time }</p>
                                </div>
                            </div>
                        }) }
                    </div>

                    <div class="card">
                        <h2>{ "Recent Achievements" }</h2>
                        { for ACHIEVEMENTS.iter().map(|achievement| html! {
                            <div class="achievement">
                                <span class="achievement-icon">{ achievement.icon }</span>
                                <div>
                                    <p class="strong small">{ achievement.title }</p>
                                    <p class="muted small">{ achievement.description }</p>
                                    <p class="muted small">{ format!("Earned {}", achievement.earned) }</p>
                                </div>
                            </div>
                        }) }
                    </div>

                    <div class="card">
                        <h2>{ "Your Membership" }</h2>
                        <p class="strong">{ MEMBERSHIP.tier }</p>
                        <ProgressBar percent={f32::from(MEMBERSHIP.progress_to_next)} />
                        <p class="muted small">
                            { format!("{}% to {}", MEMBERSHIP.progress_to_next, MEMBERSHIP.next_tier) }
                        </p>
                        <ul class="benefits">
                            { for MEMBERSHIP.benefits.iter().map(|benefit| html! { <li>{ format!("✓ {}", benefit) }</li> }) }
                        </ul>
                    </div>
                </aside>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render;

    #[tokio::test]
    async fn greets_the_member() {
        let html = render::<DashboardOverview>().await;
        assert!(html.contains("Welcome back, John!"));
        assert!(html.contains("Advanced Sales Funnel Optimization"));
        assert_eq!(html.matches("stats-card").count(), MEMBER_STATS.len());
    }
}
