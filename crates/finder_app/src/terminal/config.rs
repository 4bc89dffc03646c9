use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use finder_core::{IndexVariant, SortKey};
use finder_engine::ClientSettings;
use finder_logging::{finder_info, finder_warn};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

/// Settings read from the RON config file. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinderConfig {
    pub base_url: String,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
    pub max_response_bytes: u64,
    pub default_sort: String,
    pub default_index: String,
}

impl Default for FinderConfig {
    fn default() -> Self {
        let client = ClientSettings::default();
        Self {
            base_url: client.base_url,
            connect_timeout_ms: client.connect_timeout.as_millis() as u64,
            request_timeout_ms: client.request_timeout.as_millis() as u64,
            max_response_bytes: client.max_bytes,
            default_sort: SortKey::default().as_str().to_string(),
            default_index: IndexVariant::default().as_str().to_string(),
        }
    }
}

impl FinderConfig {
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            base_url: self.base_url.clone(),
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
            max_bytes: self.max_response_bytes,
            ..ClientSettings::default()
        }
    }

    pub fn sort_key(&self) -> SortKey {
        self.default_sort.parse().unwrap_or_else(|err| {
            finder_warn!("Ignoring configured sort: {}", err);
            SortKey::default()
        })
    }

    pub fn index_variant(&self) -> IndexVariant {
        self.default_index.parse().unwrap_or_else(|err| {
            finder_warn!("Ignoring configured index: {}", err);
            IndexVariant::default()
        })
    }
}

/// Reads the config file. A missing or broken file yields defaults.
pub(crate) fn load_config(path: &Path) -> FinderConfig {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return FinderConfig::default();
        }
        Err(err) => {
            finder_warn!("Failed to read config from {:?}: {}", path, err);
            return FinderConfig::default();
        }
    };

    match ron::from_str(&content) {
        Ok(config) => {
            finder_info!("Loaded config from {:?}", path);
            config
        }
        Err(err) => {
            finder_warn!("Failed to parse config from {:?}: {}", path, err);
            FinderConfig::default()
        }
    }
}

/// Writes the config atomically (temp file in the same directory, then rename).
pub(crate) fn save_config(path: &Path, config: &FinderConfig) -> anyhow::Result<()> {
    let pretty = ron::ser::PrettyConfig::new();
    let content =
        ron::ser::to_string_pretty(config, pretty).context("failed to serialize config")?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;
    tmp.persist(path)
        .map_err(|err| err.error)
        .with_context(|| format!("failed to write {}", path.display()))?;

    finder_info!("Saved config to {:?}", path);
    Ok(())
}
