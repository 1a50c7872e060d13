pub mod model;
pub mod selection;
pub mod tabs;
pub mod view_model;

use crate::layout::top_header::TopHeader;
use crate::shared::data::use_store;
use leptos::html::Div;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use selection::RenderStep;
use tabs::TABS;
use thaw::*;
use view_model::DungeonListVm;
use web_sys::{ScrollIntoViewOptions, ScrollLogicalPosition};

/// Scrolls the selected row into view, moving as little as possible and not
/// at all when it is already visible.
fn scroll_selected_into_view(list_ref: NodeRef<Div>) {
    let Some(root) = list_ref.get_untracked() else {
        return;
    };
    request_animation_frame(move || {
        let Ok(Some(item)) = root.query_selector(".DungeonList-item-selected") else {
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_block(ScrollLogicalPosition::Nearest);
        options.set_inline(ScrollLogicalPosition::Nearest);
        item.scroll_into_view_with_scroll_into_view_options(&options);
    });
}

/// Dungeon browser: tabs by dungeon type, dungeons of the active tab and the
/// floors of the selected dungeon.
#[component]
#[allow(non_snake_case)]
pub fn DungeonList() -> impl IntoView {
    let store = use_store();
    let params = use_params_map();
    let route_param = Memo::new(move |_| params.with(|p| p.get("dungeon")));
    let floor_param = Memo::new(move |_| params.with(|p| p.get("floor")));

    let vm = DungeonListVm::new(
        store.game_data.catalog(),
        route_param.into(),
        floor_param.into(),
    );
    let list_ref = NodeRef::<Div>::new();

    // Value bound to the TabList; user clicks land here first
    let tab_value = RwSignal::new(vm.active_tab.get_untracked().label.to_string());

    // Sync tab_value -> selection
    Effect::new(move |prev: Option<String>| {
        let current = tab_value.get();
        if prev.is_some() {
            vm.click_tab(&current);
        }
        current
    });

    // Sync selection -> tab_value
    Effect::new(move |_| {
        let label = vm.active_tab.get().label;
        if tab_value.with_untracked(|value| value != label) {
            tab_value.set(label.to_string());
        }
    });

    Effect::new(move |_| {
        if vm.after_render() == RenderStep::Scroll {
            scroll_selected_into_view(list_ref);
        }
    });

    view! {
        <TopHeader />
        <TabList selected_value=tab_value>
            {TABS
                .iter()
                .map(|tab| view! { <Tab value=tab.label>{tab.label}</Tab> })
                .collect_view()}
        </TabList>
        <div class="DungeonList-root" node_ref=list_ref>
            <ul class="DungeonList-list">
                {move || {
                    vm.rows
                        .get()
                        .into_iter()
                        .map(|row| {
                            let class = row.class();
                            let style = format!("--dungeon-color: {}", row.color);
                            view! {
                                <li class=class style=style>
                                    <A href=row.href>
                                        <span class="DungeonList-item-text">
                                            {row.name}
                                            {row.badge.map(|badge| view! {
                                                <Badge appearance=BadgeAppearance::Tint>{badge}</Badge>
                                            })}
                                        </span>
                                    </A>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
            <ul class="DungeonList-list">
                {move || {
                    vm.floors
                        .get()
                        .into_iter()
                        .map(|floor| {
                            let class = floor.class();
                            let style = format!("--dungeon-color: {}", floor.color);
                            view! {
                                <li class=class style=style>
                                    <A href=floor.href>
                                        <span class="DungeonList-item-text">{floor.name}</span>
                                    </A>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
