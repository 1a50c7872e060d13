pub mod game_data;
pub mod manifest;
pub mod registry;

use crate::shared::config::DataConfig;
use game_data::GameDataStore;
use leptos::prelude::*;
use manifest::{AssetStore, ImageStore};
use registry::SourceRegistry;
use std::sync::Arc;

/// Application store: the fixed set of data sources and their combined
/// readiness. Constructed once in `App` and shared through context.
#[derive(Clone)]
pub struct Store {
    pub assets: AssetStore,
    pub game_data: GameDataStore,
    pub images: ImageStore,
    registry: Arc<SourceRegistry>,
}

impl Store {
    pub fn new(config: &DataConfig) -> Self {
        let assets = AssetStore::new(config);
        let game_data = GameDataStore::new(config);
        let images = ImageStore::new(config);

        let registry = SourceRegistry::builder()
            .register(assets)
            .register(game_data)
            .register(images)
            .build();

        Self {
            assets,
            game_data,
            images,
            registry: Arc::new(registry),
        }
    }

    pub fn is_loaded(&self) -> Memo<bool> {
        self.registry.is_loaded()
    }

    pub async fn load(&self) {
        self.registry.load().await
    }
}

/// Store provided by `App`
pub fn use_store() -> Store {
    use_context::<Store>().expect("Store not found in context")
}
