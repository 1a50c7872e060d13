//! Active tab of the dungeon list.
//!
//! Two transitions change it: the route moving to another dungeon (or to
//! none), and the user picking a tab. The route always wins: whatever tab the
//! user chose, navigating regroups the list around the routed dungeon.

use super::tabs::{first_tab, tab_by_label, tab_for_type, Tab};

/// What the list does after a render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStep {
    /// Route changed: switch to the routed dungeon's tab, leave scroll alone
    Regroup,
    /// Local change only: bring the selected row into view
    Scroll,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSelection {
    active: &'static Tab,
    route: Option<String>,
}

fn tab_for_selection(selected_type: Option<u32>) -> &'static Tab {
    selected_type
        .and_then(tab_for_type)
        .unwrap_or_else(first_tab)
}

impl TabSelection {
    /// State at mount: the routed dungeon's tab, else the first tab
    pub fn mount(route: Option<String>, selected_type: Option<u32>) -> Self {
        Self {
            active: tab_for_selection(selected_type),
            route,
        }
    }

    pub fn active(&self) -> &'static Tab {
        self.active
    }

    /// Route value the current tab was last derived from
    pub fn route(&self) -> Option<&str> {
        self.route.as_deref()
    }

    pub fn after_render(&self, route: Option<&str>) -> RenderStep {
        if route == self.route() {
            RenderStep::Scroll
        } else {
            RenderStep::Regroup
        }
    }

    pub fn route_changed(&mut self, route: Option<String>, selected_type: Option<u32>) {
        self.active = tab_for_selection(selected_type);
        self.route = route;
    }

    /// Returns false for a label that names no tab (state unchanged)
    pub fn click_tab(&mut self, label: &str) -> bool {
        match tab_by_label(label) {
            Some(tab) => {
                self.active = tab;
                true
            }
            None => false,
        }
    }
}
