pub mod a001_dungeon;
pub mod a002_wave;
pub mod a003_asset;
