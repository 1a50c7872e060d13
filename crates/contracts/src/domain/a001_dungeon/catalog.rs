use super::aggregate::{Dungeon, DungeonId};
use crate::domain::a002_wave::Wave;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Shape of `gamedata.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameDataFile {
    #[serde(default)]
    pub dungeons: Vec<Dungeon>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("dungeon {dungeon} has type {dungeon_type} which no tab groups")]
    UncoveredType {
        dungeon: DungeonId,
        dungeon_type: u32,
    },

    #[error("wave references unknown dungeon {0}")]
    UnknownWaveDungeon(DungeonId),
}

/// Immutable game catalog: dungeons indexed by id plus the wave schedule.
#[derive(Debug, Clone, Default)]
pub struct GameCatalog {
    dungeons: Vec<Dungeon>,
    index: HashMap<DungeonId, usize>,
    waves: Vec<Wave>,
}

impl GameCatalog {
    pub fn new(dungeons: Vec<Dungeon>, waves: Vec<Wave>) -> Self {
        let index = dungeons
            .iter()
            .enumerate()
            .map(|(pos, dungeon)| (dungeon.id, pos))
            .collect();
        Self {
            dungeons,
            index,
            waves,
        }
    }

    pub fn dungeon(&self, id: DungeonId) -> Option<&Dungeon> {
        self.index.get(&id).map(|&pos| &self.dungeons[pos])
    }

    pub fn dungeons(&self) -> &[Dungeon] {
        &self.dungeons
    }

    pub fn waves(&self) -> &[Wave] {
        &self.waves
    }

    /// Distinct dungeons referenced by waves, in order of first reference.
    /// Waves pointing at unknown ids are skipped.
    pub fn wave_dungeons(&self) -> Vec<&Dungeon> {
        let mut seen = HashSet::new();
        self.waves
            .iter()
            .filter(|wave| seen.insert(wave.dungeon))
            .filter_map(|wave| self.dungeon(wave.dungeon))
            .collect()
    }

    /// Rejects catalogs the browser cannot group: every dungeon type must be
    /// covered and every wave must point at a known dungeon.
    pub fn validate(&self, is_covered: impl Fn(u32) -> bool) -> Result<(), CatalogError> {
        if let Some(dungeon) = self.dungeons.iter().find(|d| !is_covered(d.dungeon_type)) {
            return Err(CatalogError::UncoveredType {
                dungeon: dungeon.id,
                dungeon_type: dungeon.dungeon_type,
            });
        }
        if let Some(wave) = self.waves.iter().find(|w| !self.index.contains_key(&w.dungeon)) {
            return Err(CatalogError::UnknownWaveDungeon(wave.dungeon));
        }
        Ok(())
    }
}
