//! Standalone community page, rendered inside the dashboard shell

use crate::components::Avatar;
use crate::Route;
use shared::catalog::community::{PAGE_CATEGORIES, PAGE_CONTRIBUTORS, PAGE_STATS, RECENT_POSTS};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(CommunityPage)]
pub fn community_page() -> Html {
    html! {
        <div class="content-region community-page">
            <nav class="breadcrumb muted small">
                <Link<Route> to={Route::Home}>{ "Home" }</Link<Route>>
                <span>{ " / " }</span>
                <Link<Route> to={Route::Dashboard}>{ "Dashboard" }</Link<Route>>
                <span>{ " / " }</span>
                <span class="current">{ "Community" }</span>
            </nav>

            <div class="view-header">
                <div>
                    <h1>{ "Community" }</h1>
                    <p class="muted">{ "Connect, share, and learn with fellow business leaders" }</p>
                </div>
                <button class="button">{ "+ New Post" }</button>
            </div>

            <div class="stat-grid">
                { for PAGE_STATS.iter().map(|stat| html! {
                    <div class="card stat-tile">
                        <div class="stat-value">{ stat.value }</div>
                        <div class="muted small">{ stat.label }</div>
                    </div>
                }) }
            </div>

            <div class="split">
                <div class="split-main card">
                    <h2>{ "Recent Posts" }</h2>
                    <p class="muted">{ "Latest discussions from your community" }</p>
                    { for RECENT_POSTS.iter().map(|post| html! {
                        <div class="post">
                            <Avatar name={post.author} />
                            <div>
                                <div class="meta-row">
                                    <span class="strong">{ post.author }</span>
                                    <span class="badge badge-outline">{ post.category }</span>
                                    <span class="muted small">{ post.time }</span>
                                </div>
                                <h3>{ post.title }</h3>
                                <p class="muted small">{ post.excerpt }</p>
                                <div class="meta-row muted small">
                                    <button class="link-button">{ format!("♥ {}", post.likes) }</button>
                                    <button class="link-button">{ format!("💬 {}", post.comments) }</button>
                                    <button class="link-button">{ "Share" }</button>
                                </div>
                            </div>
                        </div>
                    }) }
                    <button class="button button-outline full-width">{ "Load More Posts" }</button>
                </div>

                <aside class="split-side">
                    <div class="card">
                        <h2>{ "Community Categories" }</h2>
                        <p class="muted small">{ "Browse discussions by topic" }</p>
                        { for PAGE_CATEGORIES.iter().map(|(name, posts, colour)| html! {
                            <div class="category-row">
                                <span class={classes!("dot", *colour)}></span>
                                <span class="strong">{ *name }</span>
                                <span class="badge badge-secondary">{ *posts }</span>
                            </div>
                        }) }
                    </div>
                    <div class="card">
                        <h2>{ "Top Contributors" }</h2>
                        <p class="muted small">{ "Most active community members this month" }</p>
                        { for PAGE_CONTRIBUTORS.iter().enumerate().map(|(rank, (name, posts))| html! {
                            <div class="contributor">
                                <span class="rank">{ rank + 1 }</span>
                                <Avatar name={*name} />
                                <div>
                                    <div class="strong small">{ *name }</div>
                                    <div class="muted small">{ format!("{} posts", posts) }</div>
                                </div>
                            </div>
                        }) }
                    </div>
                </aside>
            </div>
        </div>
    }
}
