//! Platform grid (root view).

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, APP_TAGLINE};
use crate::utils::format::{count_label, platform_label};

stylance::import_crate_style!(css, "src/components/platforms.module.css");

/// Card data for one platform.
#[derive(Clone, PartialEq)]
struct PlatformCard {
    key: String,
    count: usize,
    image: Option<String>,
}

#[component]
pub fn PlatformList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let cards = Memo::new(move |_| {
        ctx.tree.with(|tree| {
            tree.as_ref()
                .map(|tree| {
                    tree.platforms()
                        .iter()
                        .map(|&id| {
                            let node = tree.node(id);
                            PlatformCard {
                                key: node.name.clone(),
                                count: node.item_count,
                                image: node.image.clone(),
                            }
                        })
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    });

    view! {
        <section>
            <div class=css::intro>
                <h1 class=css::title>{APP_NAME}</h1>
                <p class=css::tagline>{APP_TAGLINE}</p>
            </div>
            <Show
                when=move || !cards.with(Vec::is_empty)
                fallback=|| view! {
                    <p class=css::empty>"No platforms found in this repository."</p>
                }
            >
                <div class=css::grid>
                    <For
                        each=move || cards.get()
                        key=|card| card.key.clone()
                        children=move |card| {
                            let key = card.key.clone();
                            view! {
                                <button
                                    class=css::card
                                    on:click=move |_| ctx.navigate_to(vec![key.clone()])
                                >
                                    {match card.image {
                                        Some(src) => view! {
                                            <img class=css::image src=src alt=platform_label(&card.key) />
                                        }.into_any(),
                                        None => view! {
                                            <span class=css::icon><Icon icon=ic::FOLDER /></span>
                                        }.into_any(),
                                    }}
                                    <span class=css::name>{platform_label(&card.key)}</span>
                                    <span class=css::count>{count_label(card.count, &card.key)}</span>
                                </button>
                            }
                        }
                    />
                </div>
            </Show>
        </section>
    }
}
