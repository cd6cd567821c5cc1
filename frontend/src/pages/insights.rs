//! Standalone insights page, rendered inside the dashboard shell

use crate::components::{ProgressBar, StatsCard};
use shared::catalog::insights::{
    Goal, BENCHMARKS, KPI_METRICS, MEMBERSHIP_TIERS, MONTHLY_GOALS, TOP_CONTENT,
};
use shared::format::{format_count, format_dollars};
use yew::prelude::*;

fn goal_figure(goal: &Goal, value: u64) -> String {
    if goal.dollars {
        format_dollars(value)
    } else {
        format_count(value)
    }
}

#[function_component(InsightsPage)]
pub fn insights_page() -> Html {
    html! {
        <div class="content-region insights-page">
            <div class="view-header">
                <div>
                    <h1>{ "Insights" }</h1>
                    <p class="muted">{ "How your membership business is performing this month" }</p>
                </div>
                <div class="button-row">
                    <button class="button button-outline">{ "Export" }</button>
                    <button class="button button-outline">{ "Share" }</button>
                </div>
            </div>

            <div class="stat-grid">
                { for KPI_METRICS.iter().map(|stat| html! { <StatsCard stat={*stat} /> }) }
            </div>

            <div class="card-grid two-col">
                <div class="card">
                    <h2>{ "Monthly Goals" }</h2>
                    { for MONTHLY_GOALS.iter().map(|goal| html! {
                        <div class="goal">
                            <div class="meta-row">
                                <span class="strong">{ goal.title }</span>
                                <span class="muted small">
                                    { format!("{} / {}", goal_figure(goal, goal.current), goal_figure(goal, goal.target)) }
                                </span>
                            </div>
                            <ProgressBar percent={goal.percentage} />
                            <p class="muted small">{ format!("{}% of target", goal.percentage) }</p>
                        </div>
                    }) }
                </div>

                <div class="card">
                    <h2>{ "Membership Tiers" }</h2>
                    { for MEMBERSHIP_TIERS.iter().map(|tier| html! {
                        <div class="tier-row">
                            <div>
                                <div class="strong">{ tier.name }</div>
                                <div class="muted small">{ format!("{} members", format_count(tier.members)) }</div>
                            </div>
                            <div class="right">
                                <div class="strong">{ format_dollars(tier.revenue) }</div>
                                <div class="trend trend-up small">{ tier.growth }</div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>

            <div class="card">
                <h2>{ "Top Performing Content" }</h2>
                { for TOP_CONTENT.iter().map(|content| html! {
                    <div class="content-row">
                        <div>
                            <h3>{ content.title }</h3>
                            <span class="badge badge-outline">{ content.kind }</span>
                        </div>
                        <div class="metric">
                            <div class="strong">{ format_count(content.views) }</div>
                            <div class="muted small">{ "views" }</div>
                        </div>
                        <div class="metric">
                            <div class="strong">{ format!("{}%", content.engagement) }</div>
                            <div class="muted small">{ "engagement" }</div>
                        </div>
                        <div class="metric">
                            <div class="strong">{ format_dollars(content.revenue) }</div>
                            <div class="muted small">{ "revenue" }</div>
                        </div>
                    </div>
                }) }
            </div>

            <div class="card">
                <h2>{ "Industry Benchmarks" }</h2>
                <table class="benchmark-table">
                    <thead>
                        <tr>
                            <th>{ "Metric" }</th>
                            <th>{ "You" }</th>
                            <th>{ "Industry" }</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        { for BENCHMARKS.iter().map(|row| html! {
                            <tr>
                                <td>{ row.metric }</td>
                                <td class="strong">{ row.yours }</td>
                                <td class="muted">{ row.industry }</td>
                                <td>
                                    <span class={classes!("badge", format!("status-{}", row.status))}>
                                        { row.status }
                                    </span>
                                </td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_figures_use_dollars_only_for_revenue() {
        assert_eq!(goal_figure(&MONTHLY_GOALS[0], 47890), "$47,890");
        assert_eq!(goal_figure(&MONTHLY_GOALS[1], 1200), "1,200");
    }
}
