//! Problem detail view.
//!
//! - [`header`] - Title, navigation and external links
//! - [`panels`] - Page frame, image and source panels

mod header;
mod panels;

use leptos::logging::log;
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::loading::Loading;
use crate::config::NARROW_VIEWPORT_QUERY;
use crate::core::{DetailContent, DetailLayout, NodeId, assemble_detail};

use header::DetailHeader;
use panels::{CodePanel, ImagePanel, PagePanel};

stylance::import_crate_style!(css, "src/components/detail/detail.module.css");

/// Detail view for the leaf item at `path`.
///
/// The listing and files are fetched on mount. A result that arrives after
/// the user navigated elsewhere is dropped.
#[component]
pub fn ProblemDetail(path: Vec<String>, node: NodeId) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let narrow = use_media_query(NARROW_VIEWPORT_QUERY);

    let (content, set_content) = signal::<Option<DetailContent>>(None);

    {
        let path = path.clone();
        Effect::new(move |_| {
            let token = ctx.current_token();
            let fetcher = ctx.fetcher();
            let path = path.clone();
            set_content.set(None);

            spawn_local(async move {
                let assembled = assemble_detail(&fetcher, &path).await;
                if ctx.is_current(token) {
                    set_content.set(Some(assembled));
                } else {
                    log!("Dropping stale detail for '{}'", path.join("/"));
                }
            });
        });
    }

    // Nested items (e.g. a puzzle part living inside a solved day)
    let nested = Memo::new(move |_| {
        ctx.tree.with(|tree| {
            let Some(tree) = tree.as_ref() else {
                return Vec::new();
            };
            tree.get(node)
                .map(|node| node.children.iter().map(|&child| tree.path_of(child)).collect())
                .unwrap_or_default()
        })
    });

    let header_path = path.clone();

    view! {
        <article class=css::detail>
            <DetailHeader path=header_path content=content />
            {move || match content.get() {
                None => view! { <Loading message="Loading solution..." /> }.into_any(),
                Some(content) => view! { <DetailBody content=content narrow=narrow /> }.into_any(),
            }}
            <Show when=move || !nested.with(Vec::is_empty)>
                <section class=css::nested>
                    <h3 class=css::nestedTitle>"Also in this folder"</h3>
                    <div class=css::nestedList>
                        <For
                            each=move || nested.get()
                            key=|path| path.join("/")
                            children=move |path| {
                                let label = path.last().cloned().unwrap_or_default();
                                view! {
                                    <button
                                        class=css::nestedLink
                                        on:click=move |_| ctx.navigate_to(path.clone())
                                    >
                                        <Icon icon=ic::FOLDER />
                                        <span>{label}</span>
                                    </button>
                                }
                            }
                        />
                    </div>
                </section>
            </Show>
        </article>
    }
}

/// Content panels in the layout chosen for the item.
#[component]
fn DetailBody(content: DetailContent, narrow: Signal<bool>) -> impl IntoView {
    let Some(item) = content.item.clone() else {
        return view! {
            <p class=css::notice>
                <Icon icon=ic::INFO />
                " No solution files found in this folder."
            </p>
        }
        .into_any();
    };

    let has_source = content.has_source();
    let source = content.source.clone().unwrap_or_default();
    let source_name = item
        .primary_source()
        .map(|s| s.name.clone())
        .unwrap_or_default();

    let body = move || {
        let layout = item.layout(has_source, narrow.get());
        let code = has_source.then(|| {
            view! { <CodePanel file_name=source_name.clone() source=source.clone() /> }
        });

        match layout {
            DetailLayout::Page => {
                let page = item.page().cloned();
                view! { <PagePanel page=page markup=content.page_markup.clone() /> }.into_any()
            }
            DetailLayout::SideBySide => view! {
                <div class=css::sideBySide>
                    <div class=css::visualColumn>
                        <ImagePanel images=item.images.clone() />
                    </div>
                    <div class=css::codeColumn>{code}</div>
                </div>
            }
            .into_any(),
            DetailLayout::Stacked => view! {
                <div class=css::stacked>
                    {(!item.images.is_empty()).then(|| view! {
                        <ImagePanel images=item.images.clone() />
                    })}
                    {code}
                </div>
            }
            .into_any(),
        }
    };

    body.into_any()
}
