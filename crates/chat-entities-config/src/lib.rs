use chat_entities_engine::{DEFAULT_MAX_DEPTH, VocabularyValues};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to read emote manifest at {manifest_path}: {source}")]
    ManifestReadError {
        manifest_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse emote manifest at {manifest_path}: {source}")]
    ManifestParseError {
        manifest_path: PathBuf,
        source: serde_json::Error,
    },
}

const DEFAULT_TAGS: &[&str] = &["nsfw", "weeb", "nsfl", "loud"];

const DEFAULT_MODIFIERS: &[&str] = &[
    "mirror", "flip", "rain", "snow", "rustle", "worth", "love", "spin", "wide", "lag", "hyper",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub emotes: Vec<String>,
    pub nicks: Vec<String>,
    pub tags: Vec<String>,
    pub modifiers: Vec<String>,
    /// Locally stored emote manifest whose names are added to `emotes`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emote_manifest: Option<PathBuf>,
    pub max_depth: usize,
    pub detect_links: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            emotes: Vec::new(),
            nicks: Vec::new(),
            tags: DEFAULT_TAGS.iter().map(|s| s.to_string()).collect(),
            modifiers: DEFAULT_MODIFIERS.iter().map(|s| s.to_string()).collect(),
            emote_manifest: None,
            max_depth: DEFAULT_MAX_DEPTH,
            detect_links: true,
        }
    }
}

#[derive(Debug, Deserialize)]
struct EmoteManifest {
    emotes: Vec<ManifestEmote>,
}

#[derive(Debug, Deserialize)]
struct ManifestEmote {
    name: String,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the manifest path
        config.emote_manifest = config
            .emote_manifest
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/chat-entities");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Vocabulary lists for the parser, with manifest emotes appended.
    pub fn vocabulary_values(&self) -> Result<VocabularyValues, ConfigError> {
        let mut emotes = self.emotes.clone();
        if let Some(manifest_path) = &self.emote_manifest {
            emotes.extend(Self::load_manifest(manifest_path)?);
        }

        Ok(VocabularyValues {
            emotes,
            nicks: self.nicks.clone(),
            tags: self.tags.clone(),
            modifiers: self.modifiers.clone(),
        })
    }

    fn load_manifest(manifest_path: &Path) -> Result<Vec<String>, ConfigError> {
        let content = std::fs::read_to_string(manifest_path).map_err(|source| {
            ConfigError::ManifestReadError {
                manifest_path: manifest_path.to_path_buf(),
                source,
            }
        })?;

        let manifest: EmoteManifest =
            serde_json::from_str(&content).map_err(|source| ConfigError::ManifestParseError {
                manifest_path: manifest_path.to_path_buf(),
                source,
            })?;

        Ok(manifest.emotes.into_iter().map(|e| e.name).collect())
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
