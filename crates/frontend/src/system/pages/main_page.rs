use crate::layout::top_header::TopHeader;
use crate::shared::data::use_store;
use leptos::prelude::*;

/// Image shown above the tagline, looked up in the image manifest
const MAIN_IMAGE: &str = "main";

#[component]
pub fn MainPage() -> impl IntoView {
    let store = use_store();
    let image = store.images.image_url(MAIN_IMAGE);
    let summary = format!(
        "{} images · {} assets indexed",
        store.images.len(),
        store.assets.len()
    );

    view! {
        <TopHeader />
        <div class="MainPage-root">
            <div class="MainPage-image-container">
                {image.map(|src| view! { <img class="MainPage-image" src=src alt="" /> })}
            </div>
            <span class="MainPage-caption">"lookup the information you need!"</span>
            <span class="MainPage-summary">{summary}</span>
        </div>
    }
}
