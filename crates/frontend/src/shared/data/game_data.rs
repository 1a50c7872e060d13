use super::registry::DataSource;
use crate::domain::a001_dungeon::ui::list::tabs::is_type_covered;
use crate::shared::api_utils::{fetch_json, LoadError};
use crate::shared::config::DataConfig;
use contracts::domain::a001_dungeon::{GameCatalog, GameDataFile};
use contracts::domain::a002_wave::Wave;
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use leptos::prelude::*;
use std::sync::Arc;

/// Game catalog source: dungeons with their floors, plus the wave schedule.
#[derive(Clone, Copy)]
pub struct GameDataStore {
    config: StoredValue<DataConfig>,
    catalog: RwSignal<Arc<GameCatalog>>,
    is_loaded: RwSignal<bool>,
}

impl GameDataStore {
    pub fn new(config: &DataConfig) -> Self {
        Self {
            config: StoredValue::new(config.clone()),
            catalog: RwSignal::new(Arc::new(GameCatalog::default())),
            is_loaded: RwSignal::new(false),
        }
    }

    pub fn catalog(&self) -> Signal<Arc<GameCatalog>> {
        self.catalog.into()
    }

    /// Installs an already validated catalog and marks the source loaded
    pub fn set_catalog(&self, catalog: GameCatalog) {
        self.catalog.set(Arc::new(catalog));
        self.is_loaded.set(true);
    }

    async fn fetch(config: DataConfig) -> Result<GameCatalog, LoadError> {
        let data: GameDataFile = fetch_json(&config.url(&config.gamedata)).await?;
        let waves: Vec<Wave> = fetch_json(&config.url(&config.waves)).await?;

        let catalog = GameCatalog::new(data.dungeons, waves);
        catalog.validate(is_type_covered)?;
        Ok(catalog)
    }
}

impl DataSource for GameDataStore {
    fn name(&self) -> &'static str {
        "gameData"
    }

    fn is_loaded(&self) -> Signal<bool> {
        self.is_loaded.into()
    }

    fn load(&self) -> LocalBoxFuture<'static, ()> {
        let this = *self;
        let config = self.config.get_value();
        async move {
            match Self::fetch(config).await {
                Ok(catalog) => {
                    log::info!(
                        "gameData: {} dungeons, {} waves",
                        catalog.dungeons().len(),
                        catalog.waves().len()
                    );
                    this.set_catalog(catalog);
                }
                Err(e) => log::error!("gameData: {}", e),
            }
        }
        .boxed_local()
    }
}
