//! Configuration for the bounded-retry invoker.
//!
//! Loaded from TOML with a precedence system:
//! - Bundled defaults (include_str! from thirdbrain.toml)
//! - User overrides (./thirdbrain.toml or ~/.config/thirdbrain/thirdbrain.toml)

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thirdbrain_error::{ConfigError, RetryError, RetryErrorKind, ThirdBrainError, ThirdBrainResult};
use tracing::{debug, instrument};

/// Attempt budget and delay for one class of external calls.
///
/// The observed production constants (2 attempts, 10 seconds) ship as the
/// bundled defaults.
///
/// # Example
///
/// ```
/// use thirdbrain_retry::RetryConfig;
///
/// let config = RetryConfig::default();
/// assert_eq!(config.attempts, 2);
/// assert_eq!(config.delay_secs, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct RetryConfig {
    /// Total attempts per call, first try included
    #[serde(default = "default_attempts")]
    pub attempts: u32,

    /// Fixed wait between consecutive attempts, in seconds
    #[serde(default = "default_delay_secs")]
    pub delay_secs: u64,

    /// Optional cap on a single attempt, in seconds
    #[serde(default)]
    pub attempt_timeout_secs: Option<u64>,
}

fn default_attempts() -> u32 {
    2
}

fn default_delay_secs() -> u64 {
    10
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            attempts: default_attempts(),
            delay_secs: default_delay_secs(),
            attempt_timeout_secs: None,
        }
    }
}

/// File shape: the `[retry]` table of thirdbrain.toml.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    retry: Option<RetryConfig>,
}

impl RetryConfig {
    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (thirdbrain.toml shipped with the library)
    /// 2. User config in home directory (~/.config/thirdbrain/thirdbrain.toml)
    /// 3. User config in current directory (./thirdbrain.toml)
    ///
    /// User config files are optional and silently skipped if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be parsed or the merged
    /// values are invalid.
    #[instrument]
    pub fn load() -> ThirdBrainResult<Self> {
        debug!("Loading retry configuration");

        // Bundled default configuration
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

        let config = file.retry.unwrap_or_default();
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the invoker cannot honor.
    ///
    /// # Errors
    ///
    /// Returns an error when the attempt budget is zero.
    pub fn validate(&self) -> Result<(), RetryError> {
        if self.attempts == 0 {
            return Err(RetryError::new(RetryErrorKind::InvalidConfig(
                "attempts must be at least 1".to_string(),
            )));
        }
        Ok(())
    }

    /// The inter-attempt delay as a `Duration`.
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_secs)
    }

    /// The per-attempt timeout as a `Duration`, when configured.
    pub fn attempt_timeout(&self) -> Option<Duration> {
        self.attempt_timeout_secs.map(Duration::from_secs)
    }
}
