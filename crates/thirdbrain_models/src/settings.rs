//! Service endpoint settings.
//!
//! Endpoints and model identifiers come from the `[services]` tables of
//! thirdbrain.toml (bundled defaults merged under user overrides). API keys
//! never live in configuration files; adapters read them from the
//! environment.

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use thirdbrain_error::{
    ConfigError, ModelsError, ModelsErrorKind, ThirdBrainError, ThirdBrainResult,
};
use tracing::{debug, instrument};

/// Text-generation service endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TextSettings {
    /// API base URL
    pub base_url: String,
    /// Default model for short steps (titles, prompts, playlists)
    pub model: String,
    /// Model for long-form steps (summaries, manuscript chapters)
    pub long_model: String,
}

impl Default for TextSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            long_model: "gpt-3.5-turbo-16k".to_string(),
        }
    }
}

/// Few-image provider endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ImagesSettings {
    /// API base URL
    pub base_url: String,
}

impl Default for ImagesSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
        }
    }
}

/// Configurable multi-image provider endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StabilitySettings {
    /// API base URL
    pub base_url: String,
    /// Default engine identifier
    pub engine: String,
    /// Guidance preset passed through on every request
    pub clip_guidance_preset: String,
}

impl Default for StabilitySettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.stability.ai".to_string(),
            engine: "stable-diffusion-v1-5".to_string(),
            clip_guidance_preset: "FAST_BLUE".to_string(),
        }
    }
}

/// Music-streaming service endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MusicSettings {
    /// API base URL
    pub base_url: String,
}

impl Default for MusicSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.spotify.com/v1".to_string(),
        }
    }
}

/// The `[services]` tables of thirdbrain.toml.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct ServiceSettings {
    /// Text-generation service
    #[serde(default)]
    pub text: TextSettings,
    /// Few-image provider
    #[serde(default)]
    pub images: ImagesSettings,
    /// Configurable multi-image provider
    #[serde(default)]
    pub stability: StabilitySettings,
    /// Music-streaming service
    #[serde(default)]
    pub music: MusicSettings,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    services: Option<ServiceSettings>,
}

impl ServiceSettings {
    /// Load settings with precedence: user override > bundled default.
    ///
    /// Sources, later overriding earlier:
    /// 1. Bundled defaults (thirdbrain.toml shipped with the library)
    /// 2. ~/.config/thirdbrain/thirdbrain.toml
    /// 3. ./thirdbrain.toml
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be parsed.
    #[instrument]
    pub fn load() -> ThirdBrainResult<Self> {
        debug!("Loading service settings");

        const DEFAULT_CONFIG: &str = include_str!("../../../thirdbrain.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/thirdbrain/thirdbrain.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("thirdbrain").required(false));

        let file: ConfigFile = builder
            .build()
            .map_err(|e| {
                ThirdBrainError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ThirdBrainError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        Ok(file.services.unwrap_or_default())
    }
}

/// Read a required API key from the environment.
pub(crate) fn require_env(name: &str) -> ThirdBrainResult<String> {
    std::env::var(name)
        .map_err(|_| ModelsError::new(ModelsErrorKind::MissingApiKey(name.to_string())).into())
}
