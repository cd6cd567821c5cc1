use shared::format::initials;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AvatarProps {
    pub name: &'static str,
    #[prop_or_default]
    pub large: bool,
}

/// Initials badge standing in for a profile picture
#[function_component(Avatar)]
pub fn avatar(props: &AvatarProps) -> Html {
    html! {
        <span class={classes!("avatar", props.large.then_some("avatar-large"))} title={props.name}>
            { initials(props.name) }
        </span>
    }
}
