use crate::components::Avatar;
use shared::catalog::community::{
    FORUM_CATEGORIES, HUB_STATS, RECENT_DISCUSSIONS, TOP_CONTRIBUTORS,
};
use shared::format::format_count;
use shared::ContentUnit;
use yew::prelude::*;

#[function_component(CommunityView)]
pub fn community_view() -> Html {
    html! {
        <div class="view community-view">
            <div class="view-header">
                <div>
                    <h1>{ ContentUnit::Community.title() }</h1>
                    <p class="muted">
                        { "Connect, learn, and grow with like-minded business leaders and entrepreneurs" }
                    </p>
                </div>
                <div class="button-row">
                    <button class="button button-outline">{ "Search" }</button>
                    <button class="button">{ "+ New Post" }</button>
                </div>
            </div>

            <div class="stat-grid">
                { for HUB_STATS.iter().map(|stat| html! {
                    <div class="card stat-tile">
                        <div class="stat-value">{ stat.value }</div>
                        <div class="muted">{ stat.label }</div>
                        <div class="stat-change">{ stat.change }</div>
                    </div>
                }) }
            </div>

            <div class="split">
                <div class="split-main">
                    <div class="section-header">
                        <h2>{ "Forum Categories" }</h2>
                        <span class="badge badge-outline">
                            { format!("{} categories", FORUM_CATEGORIES.len()) }
                        </span>
                    </div>
                    { for FORUM_CATEGORIES.iter().map(|category| html! {
                        <div class="card forum-category">
                            <h3>{ category.name }</h3>
                            <p class="muted">{ category.description }</p>
                            <div class="meta-row">
                                <span>{ format!("💬 {} posts", format_count(category.posts)) }</span>
                                <span>{ format!("👥 {} members", format_count(category.members)) }</span>
                            </div>
                        </div>
                    }) }

                    <h2>{ "Recent Activity" }</h2>
                    { for RECENT_DISCUSSIONS.iter().map(|post| html! {
                        <div class="card discussion">
                            <Avatar name={post.user} />
                            <div>
                                <p>
                                    <strong>{ post.user }</strong>
                                    { format!(" {} ", post.action) }
                                    <strong>{ post.target }</strong>
                                </p>
                                <h3>{ post.title }</h3>
                                <div class="meta-row muted">
                                    <span>{ post.time }</span>
                                    <span>{ format!("♥ {}", post.likes) }</span>
                                    <span>{ format!("💬 {}", post.replies) }</span>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>

                <aside class="split-side">
                    <div class="card">
                        <h2>{ "Top Contributors" }</h2>
                        { for TOP_CONTRIBUTORS.iter().map(|member| html! {
                            <div class="contributor">
                                <Avatar name={member.name} />
                                <div>
                                    <div class="strong">{ member.name }</div>
                                    <div class="muted small">
                                        { format!("{} posts · {} rep", member.posts, format_count(member.reputation)) }
                                    </div>
                                </div>
                                <span class="badge badge-secondary">{ member.badge }</span>
                            </div>
                        }) }
                    </div>
                </aside>
            </div>
        </div>
    }
}
