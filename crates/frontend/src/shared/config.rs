use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub data: DataConfig,
}

/// Where the data files produced by the downloader are served from
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DataConfig {
    pub base_url: String,
    pub gamedata: String,
    pub waves: String,
    pub images: String,
    pub assets: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            base_url: "/data".to_string(),
            gamedata: "gamedata.json".to_string(),
            waves: "waves.json".to_string(),
            images: "images.json".to_string(),
            assets: "assets.json".to_string(),
        }
    }
}

impl DataConfig {
    /// Full URL of a data file
    pub fn url(&self, file: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), file)
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[data]
base_url = "/data"
gamedata = "gamedata.json"
waves = "waves.json"
images = "images.json"
assets = "assets.json"
"#;

/// Build-time override for the data location
const BASE_URL_OVERRIDE: Option<&str> = option_env!("DUNGEON_DATA_BASE_URL");

/// Load configuration.
///
/// The embedded defaults are parsed first; `DUNGEON_DATA_BASE_URL` set at
/// build time replaces the data base URL.
pub fn load_config() -> Result<AppConfig, toml::de::Error> {
    let mut config: AppConfig = toml::from_str(DEFAULT_CONFIG)?;
    if let Some(base_url) = BASE_URL_OVERRIDE.filter(|url| !url.is_empty()) {
        log::info!("Using data base URL override: {}", base_url);
        config.data.base_url = base_url.to_string();
    }
    Ok(config)
}
