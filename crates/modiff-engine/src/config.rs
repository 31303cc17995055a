//! Application configuration.
//!
//! Built once at startup and passed explicitly to the Nexus client and the
//! reply transports. Sources, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. a TOML file (`modiff.toml` in the working directory, or `--config`)
//! 3. `MODIFF_*` environment variables, `__` separating nested keys
//!    (`MODIFF_NEXUS__API_KEY`, `MODIFF_CHUNK_LIMIT`)
//!
//! A `.env` file, when present, is loaded into the environment first.

use config::{Config, Environment, File};
use modiff_core::chunk::{DEFAULT_CHUNK_LIMIT, TRANSPORT_MAX_CHARS};
use modiff_core::errors::{ModiffError, Result};
use modiff_core::logging_facility::Profile;
use modiff_core_types::Sensitive;
use serde::Deserialize;
use std::num::NonZeroUsize;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_NEXUS_API_URL: &str = "https://api.nexusmods.com";
pub const DEFAULT_DISCORD_API_URL: &str = "https://discord.com/api/v10";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

const ENV_PREFIX: &str = "MODIFF";
const DEFAULT_FILE_STEM: &str = "modiff";

/// Credentials and identity sent to the Nexus Mods API
#[derive(Debug, Clone)]
pub struct NexusConfig {
    pub api_key: Sensitive<String>,
    pub app_name: String,
    pub app_version: String,
    pub api_url: String,
}

#[derive(Debug, Clone)]
pub struct DiscordConfig {
    /// Absent when replies only go to stdout
    pub bot_token: Option<Sensitive<String>>,
    pub api_url: String,
}

/// Immutable process configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub nexus: NexusConfig,
    pub discord: DiscordConfig,
    /// Maximum characters per reply message
    pub chunk_limit: NonZeroUsize,
    pub request_timeout: Duration,
    pub log_profile: Profile,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    nexus: RawNexus,
    discord: RawDiscord,
    chunk_limit: usize,
    request_timeout_secs: u64,
    log_profile: Profile,
}

#[derive(Debug, Deserialize)]
struct RawNexus {
    #[serde(default)]
    api_key: Option<String>,
    app_name: String,
    app_version: String,
    api_url: String,
}

#[derive(Debug, Deserialize)]
struct RawDiscord {
    #[serde(default)]
    bot_token: Option<String>,
    api_url: String,
}

impl AppConfig {
    /// Load configuration from `.env`, the config file and the process
    /// environment.
    ///
    /// # Errors
    ///
    /// `ModiffError::Config` for a malformed `.env`, an unreadable or invalid
    /// config file, or values that fail validation.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        check_dotenv(dotenvy::dotenv().map(|_| ()))?;
        Self::load_from(path, None)
    }

    /// Load configuration with an explicit environment map in place of the
    /// process environment (`None` reads the process environment).
    pub fn load_from(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        let file = match path {
            Some(p) => File::from(p).required(true),
            None => File::with_name(DEFAULT_FILE_STEM).required(false),
        };

        let environment = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(env);

        let raw: RawConfig = Config::builder()
            .set_default("nexus.app_name", "modiff")
            .and_then(|b| b.set_default("nexus.app_version", env!("CARGO_PKG_VERSION")))
            .and_then(|b| b.set_default("nexus.api_url", DEFAULT_NEXUS_API_URL))
            .and_then(|b| b.set_default("discord.api_url", DEFAULT_DISCORD_API_URL))
            .and_then(|b| b.set_default("chunk_limit", DEFAULT_CHUNK_LIMIT as i64))
            .and_then(|b| {
                b.set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS as i64)
            })
            .and_then(|b| b.set_default("log_profile", "development"))
            .map_err(config_error)?
            .add_source(file)
            .add_source(environment)
            .build()
            .map_err(config_error)?
            .try_deserialize()
            .map_err(config_error)?;

        Self::validate(raw)
    }

    fn validate(raw: RawConfig) -> Result<Self> {
        let api_key = raw
            .nexus
            .api_key
            .filter(|k| !k.trim().is_empty())
            .map(Sensitive::new)
            .ok_or_else(|| {
                ModiffError::config("nexus.api_key is required (set MODIFF_NEXUS__API_KEY)")
            })?;

        let chunk_limit = NonZeroUsize::new(raw.chunk_limit)
            .filter(|n| n.get() <= TRANSPORT_MAX_CHARS)
            .ok_or_else(|| {
                ModiffError::config(format!(
                    "chunk_limit must be between 1 and {}, got {}",
                    TRANSPORT_MAX_CHARS, raw.chunk_limit
                ))
            })?;

        if raw.request_timeout_secs == 0 {
            return Err(ModiffError::config("request_timeout_secs must be positive"));
        }

        Ok(Self {
            nexus: NexusConfig {
                api_key,
                app_name: raw.nexus.app_name,
                app_version: raw.nexus.app_version,
                api_url: raw.nexus.api_url,
            },
            discord: DiscordConfig {
                bot_token: raw
                    .discord
                    .bot_token
                    .filter(|t| !t.trim().is_empty())
                    .map(Sensitive::new),
                api_url: raw.discord.api_url,
            },
            chunk_limit,
            request_timeout: Duration::from_secs(raw.request_timeout_secs),
            log_profile: raw.log_profile,
        })
    }
}

/// A missing `.env` is the common case; any other failure is fatal.
fn check_dotenv(loaded: dotenvy::Result<()>) -> Result<()> {
    match loaded {
        Ok(()) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(ModiffError::config(format!("failed to load .env: {}", e))),
    }
}

fn config_error(err: config::ConfigError) -> ModiffError {
    ModiffError::config(err.to_string())
}
