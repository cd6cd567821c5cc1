use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    /// 0-100; values outside the range are clamped
    pub percent: f32,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let percent = props.percent.clamp(0.0, 100.0);
    html! {
        <div class="progress" role="progressbar" aria-valuenow={percent.to_string()}>
            <div class="progress-fill" style={format!("width: {}%", percent)}></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_with;

    #[tokio::test]
    async fn clamps_fill_width() {
        let html = render_with::<ProgressBar, _>(|| ProgressBarProps { percent: 140.0 }).await;
        assert!(html.contains("width: 100%"));
        let html = render_with::<ProgressBar, _>(|| ProgressBarProps { percent: 65.0 }).await;
        assert!(html.contains("width: 65%"));
    }
}
