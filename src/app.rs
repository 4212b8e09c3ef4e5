//! Root application module.
//!
//! Contains the main App component and the AppContext shared by every view.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::AppRouter;
use crate::core::{ContentFetcher, NavGeneration, NavToken, SolutionTree, load_tree, route_for};
use crate::models::{RepositoryPath, Route};

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read with
/// `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because every field is an arena handle.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Route parsed from the URL fragment. Only the `hashchange` listener
    /// writes it after startup.
    pub route: RwSignal<Route>,

    /// Solution tree, `None` until loaded.
    pub tree: RwSignal<Option<SolutionTree>>,

    /// Repository the site browses.
    pub repo: StoredValue<RepositoryPath>,

    fetcher: StoredValue<ContentFetcher, LocalStorage>,
    generation: StoredValue<NavGeneration>,
}

impl AppContext {
    /// Creates the context for the repository named by the page location.
    pub fn new() -> Self {
        let repo = RepositoryPath::current();
        Self {
            route: RwSignal::new(Route::current()),
            tree: RwSignal::new(None),
            fetcher: StoredValue::new_local(ContentFetcher::new(repo.clone())),
            repo: StoredValue::new(repo),
            generation: StoredValue::new(NavGeneration::new()),
        }
    }

    pub fn fetcher(&self) -> ContentFetcher {
        self.fetcher.get_value()
    }

    /// Start a navigation generation; pending detail fetches become stale.
    pub fn begin_navigation(&self) -> NavToken {
        self.generation.update_value(|g| {
            g.begin();
        });
        self.current_token()
    }

    pub fn current_token(&self) -> NavToken {
        self.generation.with_value(NavGeneration::token)
    }

    pub fn is_current(&self, token: NavToken) -> bool {
        self.generation.with_value(|g| g.is_current(token))
    }

    /// Navigate to `path`: leaves open the detail view, branches the folder
    /// view, the empty path the platform list.
    ///
    /// Only the fragment is written; the `hashchange` listener updates
    /// [`route`](Self::route).
    pub fn navigate_to(&self, path: Vec<String>) {
        let route = self.tree.with_untracked(|tree| match tree {
            Some(tree) => route_for(path, tree),
            None => Route::folder(path),
        });
        route.push();
    }

    /// Load the solution tree in the background.
    pub fn load(&self) {
        let ctx = *self;
        spawn_local(async move {
            let tree = load_tree(&ctx.fetcher()).await;
            ctx.tree.set(Some(tree));
        });
    }

    /// Drop cached listings and the manifest, then load again.
    pub fn reload(&self) {
        self.fetcher().clear_caches();
        self.tree.set(None);
        self.begin_navigation();
        self.load();
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Starts loading the solution tree
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);
    ctx.load();

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::crash>
                    <div class=css::crashBody>
                        <h1 class=css::crashTitle>"Something went wrong"</h1>
                        <p class=css::crashText>
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details class=css::crashDetails>
                            <summary>"Error details"</summary>
                            <ul>
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            class=css::crashButton
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
