use super::registry::DataSource;
use crate::shared::api_utils::fetch_json;
use crate::shared::config::DataConfig;
use contracts::domain::a003_asset::{AssetEntry, AssetManifest};
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use leptos::prelude::*;
use std::sync::Arc;

/// Manifest-backed source shared by the image and asset stores
#[derive(Clone, Copy)]
struct ManifestSource {
    name: &'static str,
    url: StoredValue<String>,
    base_url: StoredValue<String>,
    manifest: RwSignal<Arc<AssetManifest>>,
    is_loaded: RwSignal<bool>,
}

impl ManifestSource {
    fn new(name: &'static str, config: &DataConfig, file: &str) -> Self {
        Self {
            name,
            url: StoredValue::new(config.url(file)),
            base_url: StoredValue::new(config.base_url.clone()),
            manifest: RwSignal::new(Arc::new(AssetManifest::default())),
            is_loaded: RwSignal::new(false),
        }
    }

    fn resolve(&self, name: &str) -> Option<String> {
        let path = self
            .manifest
            .with(|manifest| manifest.get(name).map(|entry| entry.path.clone()))?;
        Some(self.base_url.with_value(|base| {
            format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
        }))
    }

    fn len(&self) -> usize {
        self.manifest.with(|manifest| manifest.len())
    }

    fn set_entries(&self, entries: Vec<AssetEntry>) {
        self.manifest.set(Arc::new(AssetManifest::new(entries)));
        self.is_loaded.set(true);
    }

    fn load(&self) -> LocalBoxFuture<'static, ()> {
        let this = *self;
        let url = self.url.get_value();
        async move {
            match fetch_json::<Vec<AssetEntry>>(&url).await {
                Ok(entries) => {
                    log::info!("{}: {} entries", this.name, entries.len());
                    this.set_entries(entries);
                }
                Err(e) => log::error!("{}: {}", this.name, e),
            }
        }
        .boxed_local()
    }
}

/// Image assets (card art, dungeon icons)
#[derive(Clone, Copy)]
pub struct ImageStore(ManifestSource);

impl ImageStore {
    pub fn new(config: &DataConfig) -> Self {
        Self(ManifestSource::new("images", config, &config.images))
    }

    /// URL of a named image, once the manifest is loaded
    pub fn image_url(&self, name: &str) -> Option<String> {
        self.0.resolve(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DataSource for ImageStore {
    fn name(&self) -> &'static str {
        self.0.name
    }

    fn is_loaded(&self) -> Signal<bool> {
        self.0.is_loaded.into()
    }

    fn load(&self) -> LocalBoxFuture<'static, ()> {
        self.0.load()
    }
}

/// Generic downloadable assets
#[derive(Clone, Copy)]
pub struct AssetStore(ManifestSource);

impl AssetStore {
    pub fn new(config: &DataConfig) -> Self {
        Self(ManifestSource::new("assets", config, &config.assets))
    }

    pub fn asset_url(&self, name: &str) -> Option<String> {
        self.0.resolve(name)
    }

    /// Number of indexed assets
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DataSource for AssetStore {
    fn name(&self) -> &'static str {
        self.0.name
    }

    fn is_loaded(&self) -> Signal<bool> {
        self.0.is_loaded.into()
    }

    fn load(&self) -> LocalBoxFuture<'static, ()> {
        self.0.load()
    }
}
