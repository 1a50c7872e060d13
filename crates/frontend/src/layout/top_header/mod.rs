//! TopHeader component - application top navigation bar.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn TopHeader() -> impl IntoView {
    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <A href="/">
                    <span class="top-header__title">"Dungeon Browser"</span>
                </A>
            </div>
            <nav class="top-header__actions">
                <A href="/dungeons">"Dungeons"</A>
            </nav>
        </div>
    }
}
