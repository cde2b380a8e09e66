//! Application configuration management

use std::path::PathBuf;

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Last opened vault path
    pub last_vault: Option<PathBuf>,
    /// Recent vaults
    pub recent_vaults: Vec<PathBuf>,
    /// Editor settings
    pub editor: EditorConfig,
    /// Comment note settings
    pub comment: CommentSettings,
}

/// Editor-specific settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Font size in pixels
    pub font_size: f32,
}

/// Settings for the comment note command.
///
/// Persisted values are merged over the defaults on load; keys this version
/// does not know about are retained verbatim and written back on save.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentSettings {
    /// Vault-relative folder where comment notes are created
    pub comment_location: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self { font_size: 14.0 }
    }
}

impl Default for CommentSettings {
    fn default() -> Self {
        Self {
            comment_location: "comments".to_string(),
            extra: serde_json::Map::new(),
        }
    }
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "marginalia", "Marginalia")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Result<Self> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        // Ensure config directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        tracing::info!("Saved config to: {}", path.display());
        Ok(())
    }

    /// Add a vault to recent vaults
    pub fn add_recent_vault(&mut self, path: PathBuf) {
        // Remove if already exists
        self.recent_vaults.retain(|p| p != &path);
        // Add to front
        self.recent_vaults.insert(0, path);
        // Keep only last 10
        self.recent_vaults.truncate(10);
    }
}
