pub mod aggregate;

pub use aggregate::{AssetEntry, AssetManifest};
