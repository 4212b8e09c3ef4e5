use leptos::prelude::*;
use leptos_icons::Icon;

use super::css;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::{DetailContent, is_single_page};
use crate::models::Route;
use crate::utils::format::{detail_subtitle, display_title};
use crate::utils::safe_problem_url;

/// Title block with back/home buttons and external links.
///
/// Renders from the path right away; header metadata from the source file
/// fills in once `content` arrives.
#[component]
pub fn DetailHeader(path: Vec<String>, content: ReadSignal<Option<DetailContent>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let platform = path.first().cloned().unwrap_or_default();
    let fallback_title = path.last().map(|n| display_title(n)).unwrap_or_default();
    let subtitle = detail_subtitle(&platform);

    let repo = ctx.repo.get_value();
    let github_url = if is_single_page(&path) {
        repo.blob_url(&path.join("/"))
    } else {
        repo.tree_url(&path.join("/"))
    };

    let back = Route::view(path.clone()).parent();

    let title = move || {
        content.with(|c| {
            c.as_ref()
                .and_then(|c| c.header.title.clone())
                .unwrap_or_else(|| fallback_title.clone())
        })
    };
    let problem_url = move || {
        content.with(|c| {
            c.as_ref()
                .and_then(|c| c.header.link.as_deref())
                .and_then(safe_problem_url)
        })
    };
    let kind = move || content.with(|c| c.as_ref().and_then(|c| c.item.as_ref()).map(|i| i.kind));
    let tags = move || {
        content.with(|c| c.as_ref().map(|c| c.header.tags.clone()).unwrap_or_default())
    };
    let date = move || content.with(|c| c.as_ref().and_then(|c| c.header.date.clone()));

    view! {
        <header class=css::header>
            <nav class=css::nav>
                <button class=css::navLink on:click=move |_| back.push()>
                    <Icon icon=ic::CHEVRON_LEFT />
                    <span>"Back"</span>
                </button>
                <button class=css::navLink on:click=move |_| Route::Root.push()>
                    <Icon icon=ic::HOME />
                    <span>"Home"</span>
                </button>
                {move || problem_url().map(|url| view! {
                    <a class=css::navLink href=url target="_blank" rel="noopener noreferrer">
                        <Icon icon=ic::PROBLEM_LINK />
                        <span>"Problem"</span>
                    </a>
                })}
                <a class=css::navLink href=github_url target="_blank" rel="noopener noreferrer">
                    <Icon icon=ic::GITHUB />
                    <span>"GitHub"</span>
                    <Icon icon=ic::EXTERNAL_LINK />
                </a>
            </nav>
            <div class=css::titleRow>
                <h1 class=css::title>{title}</h1>
                {move || kind().map(|kind| view! {
                    <span class=css::kindBadge>
                        <Icon icon=ic::for_kind(kind) />
                        <span>{kind.badge()}</span>
                    </span>
                })}
            </div>
            <p class=css::subtitle>
                {subtitle}
                {move || date().map(|date| view! { <span class=css::date>{date}</span> })}
            </p>
            <ul class=css::tags>
                {move || tags()
                    .into_iter()
                    .map(|tag| view! { <li class=css::tag>{tag}</li> })
                    .collect_view()}
            </ul>
        </header>
    }
}
