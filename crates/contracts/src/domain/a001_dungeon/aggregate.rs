use serde::{Deserialize, Serialize};

pub type DungeonId = u32;
pub type FloorId = u32;

// ============================================================================
// Aggregate Root
// ============================================================================

/// Dungeon (game level) as shipped in `gamedata.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dungeon {
    pub id: DungeonId,

    /// Raw name, still carrying colour/badge markup
    pub name: String,

    #[serde(rename = "type")]
    pub dungeon_type: u32,

    #[serde(default)]
    pub weekday: u8,

    #[serde(default)]
    pub once: bool,

    #[serde(default)]
    pub order: Option<i32>,

    #[serde(default)]
    pub floors: Vec<Floor>,
}

impl Dungeon {
    /// Manual sort priority. `0` in the data means "not set".
    pub fn manual_order(&self) -> Option<i32> {
        self.order.filter(|order| *order != 0)
    }

    pub fn floor(&self, id: FloorId) -> Option<&Floor> {
        self.floors.iter().find(|floor| floor.id == id)
    }
}

/// Floor of a dungeon; ids are unique only inside the owning dungeon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    pub id: FloorId,
    pub name: String,
}
