pub mod a001_dungeon;
