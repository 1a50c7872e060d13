use crate::domain::a001_dungeon::DungeonId;
use serde::{Deserialize, Serialize};

/// One scheduled occurrence of a dungeon (`waves.json`).
///
/// Only the referenced dungeon matters for browsing; the remaining schedule
/// fields are ignored on decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wave {
    pub dungeon: DungeonId,
}
