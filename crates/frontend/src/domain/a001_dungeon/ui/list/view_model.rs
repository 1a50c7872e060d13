use super::model::{all_dungeons, dungeon_rows, floor_rows, parse_route_id, DungeonRow, FloorRow};
use super::selection::{RenderStep, TabSelection};
use super::tabs::Tab;
use contracts::domain::a001_dungeon::{Dungeon, GameCatalog};
use leptos::prelude::*;
use std::sync::Arc;

/// ViewModel for the dungeon list: derived rows plus the tab state machine
#[derive(Clone, Copy)]
pub struct DungeonListVm {
    pub selection: RwSignal<TabSelection>,
    pub route_param: Signal<Option<String>>,
    pub selected_dungeon: Memo<Option<Dungeon>>,
    pub all_dungeons: Memo<Vec<Dungeon>>,
    pub active_tab: Memo<&'static Tab>,
    pub visible_selected_dungeon: Memo<Option<Dungeon>>,
    pub rows: Memo<Vec<DungeonRow>>,
    pub floors: Memo<Vec<FloorRow>>,
}

impl DungeonListVm {
    pub fn new(
        catalog: Signal<Arc<GameCatalog>>,
        route_param: Signal<Option<String>>,
        floor_param: Signal<Option<String>>,
    ) -> Self {
        let selected_dungeon = Memo::new(move |_| {
            route_param
                .with(|route| parse_route_id(route.as_deref()))
                .and_then(|id| catalog.with(|catalog| catalog.dungeon(id).cloned()))
        });

        let all_dungeons = Memo::new(move |_| catalog.with(|catalog| all_dungeons(catalog)));

        let selection = RwSignal::new(TabSelection::mount(
            route_param.get_untracked(),
            selected_dungeon.with_untracked(|d| d.as_ref().map(|d| d.dungeon_type)),
        ));

        let active_tab = Memo::new(move |_| selection.with(|s| s.active()));

        let visible_selected_dungeon = Memo::new(move |_| {
            let tab = active_tab.get();
            selected_dungeon
                .get()
                .filter(|dungeon| tab.contains(dungeon.dungeon_type))
        });

        let rows = Memo::new(move |_| {
            let selected = visible_selected_dungeon.with(|d| d.as_ref().map(|d| d.id));
            all_dungeons.with(|all| dungeon_rows(all, active_tab.get(), selected))
        });

        let floors = Memo::new(move |_| {
            let current = floor_param.with(|floor| parse_route_id(floor.as_deref()));
            visible_selected_dungeon.with(|dungeon| {
                dungeon
                    .as_ref()
                    .map(|dungeon| floor_rows(dungeon, current))
                    .unwrap_or_default()
            })
        });

        Self {
            selection,
            route_param,
            selected_dungeon,
            all_dungeons,
            active_tab,
            visible_selected_dungeon,
            rows,
            floors,
        }
    }

    /// Runs after each render. Tracks the route and the active tab, so an
    /// effect calling it re-runs on either. A changed route regroups the list;
    /// anything else asks for the selected row to be scrolled into view.
    pub fn after_render(&self) -> RenderStep {
        let route = self.route_param.get();
        self.active_tab.track();

        let step = self
            .selection
            .with_untracked(|s| s.after_render(route.as_deref()));
        if step == RenderStep::Regroup {
            let selected_type = self
                .selected_dungeon
                .with_untracked(|d| d.as_ref().map(|d| d.dungeon_type));
            log::debug!("Route changed to {:?}, regrouping", route);
            self.selection
                .update(|s| s.route_changed(route, selected_type));
        }
        step
    }

    /// User picked a tab. Route and selected dungeon stay as they are.
    pub fn click_tab(&self, label: &str) {
        let unchanged = self.selection.with_untracked(|s| s.active().label == label);
        if unchanged {
            return;
        }
        let mut known = false;
        self.selection.update(|s| known = s.click_tab(label));
        if !known {
            log::warn!("Unknown tab label: {}", label);
        }
    }
}
