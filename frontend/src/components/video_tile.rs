use shared::catalog::member::VideoCard;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VideoTileProps {
    pub video: VideoCard,
}

#[function_component(VideoTile)]
pub fn video_tile(props: &VideoTileProps) -> Html {
    let video = &props.video;
    html! {
        <div class="card video-tile">
            <div class="video-thumb">
                <span class="play">{ "▶" }</span>
                <span class="duration">{ video.duration }</span>
            </div>
            <div class="badge-row">
                <span class="badge badge-outline">{ video.category }</span>
                <span class={classes!("badge", format!("badge-{}", video.badge))}>{ video.badge }</span>
            </div>
            <h3>{ video.title }</h3>
            <p class="muted">{ video.description }</p>
        </div>
    }
}
