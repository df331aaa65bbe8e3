//! Site configuration.
//!
//! One flat `config.toml` at the project root, all keys optional:
//!
//! ```toml
//! # Defaults shown
//! base_url = "https://bhagavad-gita.org"  # Absolute URL routes are built on
//! content_root = "content"                # Verse content store directory
//! videos_dir = "data/verse-videos"        # Per-language video catalogs
//! default_video_language = "te"           # Preferred player language
//! ```
//!
//! Config files are sparse — override just the values you want. Unknown keys
//! are rejected to catch typos early.

use crate::videos;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`. All fields default; user
/// files only specify overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute base URL all routes and sitemap entries are built on.
    pub base_url: String,
    /// Directory of the verse content store.
    pub content_root: String,
    /// Directory holding the per-language `<code>_videos.json` catalogs.
    pub videos_dir: String,
    /// Language the video player prefers when a verse has several.
    pub default_video_language: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://bhagavad-gita.org".to_string(),
            content_root: "content".to_string(),
            videos_dir: "data/verse-videos".to_string(),
            default_video_language: videos::DEFAULT_VIDEO_LANGUAGE.to_string(),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::Validation(format!(
                "base_url must be an absolute http(s) URL, got {:?}",
                self.base_url
            )));
        }
        if videos::language_meta(&self.default_video_language).is_none() {
            return Err(ConfigError::Validation(format!(
                "default_video_language {:?} is not a supported language",
                self.default_video_language
            )));
        }
        Ok(())
    }
}

/// Load `config.toml` from `dir`, falling back to defaults when the file
/// does not exist. A present file that fails to parse or validate is an
/// error.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let path = dir.join("config.toml");
    let config = if path.exists() {
        let content = fs::read_to_string(&path)?;
        toml::from_str(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// A documented stock `config.toml`, printed by `gen-config`.
pub fn stock_config_toml() -> String {
    let defaults = SiteConfig::default();
    format!(
        r#"# gita-gen site configuration. All keys optional — defaults shown.

# Absolute URL that routes and sitemap entries are built on.
base_url = {base_url:?}

# Directory of the verse content store (chapter-N/verse-N/*.txt).
content_root = {content_root:?}

# Directory holding per-language video catalogs (<code>_videos.json).
videos_dir = {videos_dir:?}

# Language the video player prefers when a verse has several.
default_video_language = {default_language:?}
"#,
        base_url = defaults.base_url,
        content_root = defaults.content_root,
        videos_dir = defaults.videos_dir,
        default_language = defaults.default_video_language,
    )
}
