//! Single-open, collapsible FAQ accordion

use shared::catalog::FaqItem;
use shared::AccordionState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FaqAccordionProps {
    pub items: &'static [FaqItem],
    /// Item expanded on first render
    #[prop_or(Some(0))]
    pub default_open: Option<usize>,
}

#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqAccordionProps) -> Html {
    let default_open = props.default_open;
    let state = use_state(move || AccordionState::new(default_open));

    html! {
        <div class="accordion">
            { for props.items.iter().enumerate().map(|(index, item)| {
                let open = state.is_open(index);
                let on_toggle = {
                    let state = state.clone();
                    Callback::from(move |_: MouseEvent| {
                        let mut next = *state;
                        next.toggle(index);
                        state.set(next);
                    })
                };
                html! {
                    <div class={classes!("accordion-item", open.then_some("open"))}>
                        <button
                            class="accordion-trigger"
                            onclick={on_toggle}
                            aria-expanded={if open { "true" } else { "false" }}
                        >
                            <span>{ item.question }</span>
                            <span class="chevron">{ if open { "−" } else { "+" } }</span>
                        </button>
                        if open {
                            <div class="accordion-content">
                                { for item.answer.iter().map(|paragraph| html! { <p>{ *paragraph }</p> }) }
                            </div>
                        }
                    </div>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_with;

    const ITEMS: &[FaqItem] = &[
        FaqItem {
            question: "First question",
            answer: &["First answer"],
        },
        FaqItem {
            question: "Second question",
            answer: &["Second answer"],
        },
    ];

    #[tokio::test]
    async fn first_item_starts_open() {
        let html = render_with::<FaqAccordion, _>(|| FaqAccordionProps {
            items: ITEMS,
            default_open: Some(0),
        })
        .await;
        assert!(html.contains("First answer"));
        assert!(!html.contains("Second answer"));
        assert!(html.contains("Second question"));
        assert_eq!(html.matches("accordion-item open").count(), 1);
    }

    #[tokio::test]
    async fn can_start_collapsed() {
        let html = render_with::<FaqAccordion, _>(|| FaqAccordionProps {
            items: ITEMS,
            default_open: None,
        })
        .await;
        assert!(!html.contains("accordion-content"));
    }
}
