use crate::layout::top_header::TopHeader;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <TopHeader />
        <div class="page">
            <h1 class="header__title">"Page not found"</h1>
            <A href="/dungeons">"Back to the dungeon list"</A>
        </div>
    }
}
