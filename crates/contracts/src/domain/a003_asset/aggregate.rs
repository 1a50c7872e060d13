use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Manifest entry for a downloadable image or asset file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetEntry {
    pub name: String,
    pub path: String,
}

/// Name-indexed view over a manifest file
#[derive(Debug, Clone, Default)]
pub struct AssetManifest {
    by_name: HashMap<String, AssetEntry>,
}

impl AssetManifest {
    pub fn new(entries: Vec<AssetEntry>) -> Self {
        let by_name = entries
            .into_iter()
            .map(|entry| (entry.name.clone(), entry))
            .collect();
        Self { by_name }
    }

    pub fn get(&self, name: &str) -> Option<&AssetEntry> {
        self.by_name.get(name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_lookup_keeps_last_duplicate() {
        let entries: Vec<AssetEntry> = serde_json::from_str(
            r#"[
                {"name": "icon_1", "path": "img/a.png"},
                {"name": "icon_2", "path": "img/b.png"},
                {"name": "icon_1", "path": "img/c.png"}
            ]"#,
        )
        .unwrap();
        let manifest = AssetManifest::new(entries);

        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest.get("icon_1").unwrap().path, "img/c.png");
        assert!(manifest.get("missing").is_none());
    }
}
