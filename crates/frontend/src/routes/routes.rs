use crate::domain::a001_dungeon::ui::list::DungeonList;
use crate::system::pages::main_page::MainPage;
use crate::system::pages::not_found::NotFoundPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// `/dungeons` with optional dungeon and floor segments stays one route, so
/// moving between dungeons updates the mounted list instead of remounting it.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=MainPage />
                <Route path=path!("/dungeons/:dungeon?/:floor?") view=DungeonList />
            </Routes>
        </Router>
    }
}
