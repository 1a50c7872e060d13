pub mod aggregate;
pub mod catalog;

pub use aggregate::{Dungeon, DungeonId, Floor, FloorId};
pub use catalog::{CatalogError, GameCatalog, GameDataFile};
