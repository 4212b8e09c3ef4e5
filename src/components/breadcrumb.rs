//! Breadcrumb bar.
//!
//! Displays the current path under the header with clickable ancestors.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::ViewState;
use crate::utils::format::{display_title, platform_label};

stylance::import_crate_style!(css, "src/components/breadcrumb.module.css");

/// Segment data for breadcrumb rendering.
#[derive(Clone)]
struct PathSegment {
    label: String,
    icon: icondata::Icon,
    /// Path to navigate to (None = current segment)
    target: Option<Vec<String>>,
}

/// Build the segments for `path`: home, the platform, then each folder.
fn segments_for(path: &[String], is_detail: bool) -> Vec<PathSegment> {
    let mut segments = vec![PathSegment {
        label: "Home".to_string(),
        icon: ic::HOME,
        target: (!path.is_empty()).then(Vec::new),
    }];

    for (idx, name) in path.iter().enumerate() {
        let is_last = idx + 1 == path.len();
        segments.push(PathSegment {
            label: if idx == 0 {
                platform_label(name)
            } else {
                display_title(name)
            },
            icon: if is_last && is_detail {
                ic::FILE_CODE
            } else {
                ic::FOLDER
            },
            target: (!is_last).then(|| path[..=idx].to_vec()),
        });
    }

    segments
}

#[component]
pub fn Breadcrumb(view_state: Memo<ViewState>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <nav class=css::breadcrumb aria-label="Breadcrumb">
            {move || {
                let state = view_state.get();
                let is_detail = matches!(state, ViewState::ProblemDetail { .. });

                segments_for(state.path(), is_detail)
                    .into_iter()
                    .enumerate()
                    .map(|(idx, seg)| {
                        view! {
                            <>
                                {(idx > 0).then(|| view! {
                                    <span class=css::separator>
                                        <Icon icon=ic::CHEVRON_RIGHT />
                                    </span>
                                })}
                                {match seg.target {
                                    Some(target) => view! {
                                        <button
                                            class=css::segment
                                            on:click=move |_| ctx.navigate_to(target.clone())
                                        >
                                            <span class=css::icon><Icon icon=seg.icon /></span>
                                            <span class=css::label>{seg.label}</span>
                                        </button>
                                    }.into_any(),
                                    None => view! {
                                        <span class=format!("{} {}", css::segment, css::segmentCurrent)>
                                            <span class=css::icon><Icon icon=seg.icon /></span>
                                            <span class=css::label>{seg.label}</span>
                                        </span>
                                    }.into_any(),
                                }}
                            </>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
