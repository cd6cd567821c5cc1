use shared::catalog::StatCard;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatsCardProps {
    pub stat: StatCard,
}

#[function_component(StatsCard)]
pub fn stats_card(props: &StatsCardProps) -> Html {
    let stat = &props.stat;
    html! {
        <div class="card stats-card">
            <div>
                <p class="muted small">{ stat.title }</p>
                <p class="stat-value">{ stat.value }</p>
                if let Some(description) = stat.description {
                    <p class="muted small">{ description }</p>
                }
            </div>
            if let Some(trend) = stat.trend {
                <div class={classes!("trend", trend.class())}>{ trend.label() }</div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_with;
    use shared::catalog::Trend;

    #[tokio::test]
    async fn shows_trend_when_present() {
        let html = render_with::<StatsCard, _>(|| StatsCardProps {
            stat: StatCard {
                title: "Conversion Rate",
                value: "3.2%",
                description: None,
                trend: Some(Trend::down(-0.8)),
            },
        })
        .await;
        assert!(html.contains("Conversion Rate"));
        assert!(html.contains("trend trend-down"));
        assert!(html.contains("-0.8%"));
    }

    #[tokio::test]
    async fn omits_missing_parts() {
        let html = render_with::<StatsCard, _>(|| StatsCardProps {
            stat: StatCard {
                title: "Badges",
                value: "8",
                description: None,
                trend: None,
            },
        })
        .await;
        assert!(!html.contains("trend"));
    }
}
