//! Application router component.
//!
//! Handles URL-based routing with hash history.
//! Uses native hashchange events instead of leptos_router for true hash routing.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the screen is derived from the
//!   fragment and the loaded tree, never stored on its own
//! - **hashchange events**: browser back/forward buttons work automatically
//! - **Every fragment change starts a navigation generation**, which
//!   invalidates detail fetches still in flight

use leptos::prelude::*;
use leptos_icons::Icon;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::breadcrumb::Breadcrumb;
use crate::components::detail::ProblemDetail;
use crate::components::folder::FolderList;
use crate::components::icons as ic;
use crate::components::loading::Loading;
use crate::components::platforms::PlatformList;
use crate::config::APP_NAME;
use crate::core::resolve;
use crate::models::{Route, ViewState};
#[cfg(target_arch = "wasm32")]
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/router.module.css");

/// Main application router.
///
/// Fragment grammar:
/// - `#` → platform list
/// - `#kattis/graphs` → folder listing
/// - `#view/kattis/graphs/bfs` → problem detail
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            ctx.begin_navigation();
            ctx.route.set(Route::current());
            dom::scroll_to_top();
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    // Re-derived when either the fragment or the loaded data changes
    let view_state = Memo::new(move |_| {
        let route = ctx.route.get();
        ctx.tree.with(|tree| resolve(&route, tree.as_ref()))
    });

    view! {
        <div class=css::layout>
            <AppHeader />
            <Breadcrumb view_state=view_state />
            <main class=css::content>
                {move || match view_state.get() {
                    ViewState::Loading => view! { <Loading /> }.into_any(),
                    ViewState::PlatformList => view! { <PlatformList /> }.into_any(),
                    ViewState::FolderList { path } => view! { <FolderList path=path /> }.into_any(),
                    ViewState::ProblemDetail { path, node } => {
                        view! { <ProblemDetail path=path node=node /> }.into_any()
                    }
                }}
            </main>
        </div>
    }
}

/// Top bar with the site title, a refresh action and the repository link.
#[component]
fn AppHeader() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let repo = ctx.repo.get_value();
    let repo_url = repo.tree_url("");
    let repo_label = repo.to_string();

    view! {
        <header class=css::header>
            <button class=css::brand on:click=move |_| Route::Root.push()>
                <Icon icon=ic::HOME />
                <span>{APP_NAME}</span>
            </button>
            <div class=css::actions>
                <button
                    class=css::action
                    title="Reload listings"
                    disabled=move || ctx.tree.with(Option::is_none)
                    on:click=move |_| ctx.reload()
                >
                    <Icon icon=ic::REFRESH />
                </button>
                <a class=css::action href=repo_url target="_blank" rel="noopener noreferrer">
                    <Icon icon=ic::GITHUB />
                    <span class=css::repoName>{repo_label}</span>
                </a>
            </div>
        </header>
    }
}
