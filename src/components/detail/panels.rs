use leptos::prelude::*;
use leptos_icons::Icon;

use super::css;
use crate::components::icons as ic;
use crate::core::SequenceImage;
use crate::models::DirectoryEntry;

/// Standalone page rendered in a sandboxed frame.
#[component]
pub fn PagePanel(page: Option<DirectoryEntry>, markup: Option<String>) -> impl IntoView {
    let standalone = page.as_ref().map(DirectoryEntry::site_url);

    view! {
        <section class=css::pagePanel>
            {match markup {
                Some(markup) => view! {
                    <iframe
                        class=css::pageFrame
                        sandbox="allow-scripts"
                        srcdoc=markup
                        title="Solution page"
                    ></iframe>
                }.into_any(),
                None => view! {
                    <p class=css::notice>"The page could not be loaded."</p>
                }.into_any(),
            }}
            {standalone.map(|href| view! {
                <a class=css::pageLink href=href target="_blank" rel="noopener noreferrer">
                    <Icon icon=ic::EXTERNAL_LINK />
                    <span>"Open standalone page"</span>
                </a>
            })}
        </section>
    }
}

/// Visualization images, labeled by step when there is more than one.
#[component]
pub fn ImagePanel(images: Vec<SequenceImage>) -> impl IntoView {
    let multiple = images.len() > 1;

    let boxes = images
        .into_iter()
        .enumerate()
        .map(|(idx, image)| {
            let label = if multiple {
                format!("Step {}", idx + 1)
            } else {
                "Solution Visualization".to_string()
            };
            view! {
                <figure class=css::imageBox>
                    <img src=image.entry.display_url() alt=label.clone() loading="lazy" />
                    <figcaption class=css::imageLabel>{label}</figcaption>
                </figure>
            }
        })
        .collect_view();

    view! {
        <div class={if multiple { css::imageGrid } else { css::imageSingle }}>{boxes}</div>
    }
}

/// Source file in a code block.
#[component]
pub fn CodePanel(file_name: String, source: String) -> impl IntoView {
    view! {
        <section class=css::codeBox>
            <div class=css::codeHeader>
                <Icon icon=ic::FILE_CODE />
                <span>"Python Solution"</span>
                <span class=css::codeFile>{file_name}</span>
            </div>
            <pre class=css::codeWrapper>
                <code class="language-python">{source}</code>
            </pre>
        </section>
    }
}
