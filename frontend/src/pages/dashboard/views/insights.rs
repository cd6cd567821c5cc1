use shared::catalog::insights::{Insight, INSIGHTS, INSIGHT_CATEGORIES, KEY_METRICS};
use shared::ContentUnit;
use yew::prelude::*;

#[function_component(InsightsView)]
pub fn insights_view() -> Html {
    html! {
        <div class="view insights-view">
            <div class="view-header">
                <div>
                    <h1>{ ContentUnit::Insights.title() }</h1>
                    <p class="muted">
                        { "Data-driven insights and analytics to accelerate your business growth" }
                    </p>
                </div>
                <button class="button button-outline">{ "Filter Insights" }</button>
            </div>

            <div class="stat-grid">
                { for KEY_METRICS.iter().map(|(value, label)| html! {
                    <div class="card stat-tile">
                        <div class="stat-value">{ *value }</div>
                        <div class="muted">{ *label }</div>
                    </div>
                }) }
            </div>

            <div class="badge-row">
                { for INSIGHT_CATEGORIES.iter().enumerate().map(|(i, (name, count))| html! {
                    <span class={classes!("badge", if i == 0 { "badge-solid" } else { "badge-outline" })}>
                        { format!("{} ({})", name, count) }
                    </span>
                }) }
            </div>

            <div class="card-grid two-col">
                { for INSIGHTS.iter().map(insight_card) }
            </div>
        </div>
    }
}

fn insight_card(insight: &Insight) -> Html {
    html! {
        <div class="card insight-card">
            <h3>{ insight.title }</h3>
            <div class="badge-row">
                <span class="badge badge-secondary">{ insight.kind }</span>
                <span class="badge badge-outline">{ insight.category }</span>
                if insight.is_new {
                    <span class="badge badge-new">{ "New" }</span>
                }
            </div>
            <p class="muted">{ insight.excerpt }</p>
            <div class="metric-row">
                { for insight.metrics.iter().map(|(label, value)| html! {
                    <div class="metric">
                        <div class="strong">{ *value }</div>
                        <div class="muted small">{ *label }</div>
                    </div>
                }) }
            </div>
            <div class="card-footer muted small">
                <span>{ insight.date }</span>
                <span>{ insight.read_time }</span>
            </div>
        </div>
    }
}
