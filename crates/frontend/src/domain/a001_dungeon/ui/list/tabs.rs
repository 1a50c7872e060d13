//! Tab groups of the dungeon list.

/// Named group of dungeon type codes
#[derive(Debug, PartialEq, Eq)]
pub struct Tab {
    pub label: &'static str,
    pub types: &'static [u32],
}

impl Tab {
    pub fn contains(&self, dungeon_type: u32) -> bool {
        self.types.contains(&dungeon_type)
    }
}

/// Display order of the tabs. Every dungeon type belongs to exactly one.
pub static TABS: [Tab; 6] = [
    Tab { label: "Special", types: &[1] },
    Tab { label: "Gift", types: &[3] },
    Tab { label: "Technical", types: &[2] },
    Tab { label: "Normal", types: &[0] },
    Tab { label: "Ranking", types: &[4] },
    Tab { label: "Multiplayer", types: &[5, 7] },
];

pub fn first_tab() -> &'static Tab {
    &TABS[0]
}

pub fn tab_for_type(dungeon_type: u32) -> Option<&'static Tab> {
    TABS.iter().find(|tab| tab.contains(dungeon_type))
}

pub fn tab_by_label(label: &str) -> Option<&'static Tab> {
    TABS.iter().find(|tab| tab.label == label)
}

pub fn is_type_covered(dungeon_type: u32) -> bool {
    tab_for_type(dungeon_type).is_some()
}
