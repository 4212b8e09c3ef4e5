use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/loading.module.css");

/// Placeholder shown until the solution tree is loaded.
#[component]
pub fn Loading(#[prop(default = "Loading solutions...")] message: &'static str) -> impl IntoView {
    view! {
        <div class=css::loading role="status">
            <div class=css::spinner></div>
            <p class=css::message>{message}</p>
        </div>
    }
}
