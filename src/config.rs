use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub tickets: TicketSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    pub acquire_timeout_secs: Option<u64>,
    pub idle_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_species_weight")]
    pub species: u32,
    #[serde(default = "default_size_weight")]
    pub size: u32,
    #[serde(default = "default_keyword_weight")]
    pub keyword: u32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            species: default_species_weight(),
            size: default_size_weight(),
            keyword: default_keyword_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            species: config.species,
            size: config.size,
            keyword: config.keyword,
        }
    }
}

fn default_species_weight() -> u32 { ScoringWeights::default().species }
fn default_size_weight() -> u32 { ScoringWeights::default().size }
fn default_keyword_weight() -> u32 { ScoringWeights::default().keyword }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_match_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_match_limit")]
    pub max_limit: u16,
    /// Candidates read per page while ranking; every page is scored
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_match_limit(),
            max_limit: default_max_match_limit(),
            page_size: default_page_size(),
        }
    }
}

fn default_match_limit() -> u16 { 20 }
fn default_max_match_limit() -> u16 { 100 }
fn default_page_size() -> usize { 500 }

#[derive(Debug, Clone, Deserialize)]
pub struct TicketSettings {
    /// Insert attempts before a contended sign-up is given up
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for TicketSettings {
    fn default() -> Self {
        Self { max_attempts: default_max_attempts() }
    }
}

fn default_max_attempts() -> u32 { 5 }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with ADOPET)
    /// 5. DATABASE_URL, if set
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., ADOPET__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        with_database_url(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        with_database_url(settings)?.try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("ADOPET")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Let the conventional DATABASE_URL win over file values
fn with_database_url(settings: Config) -> Result<Config, ConfigError> {
    apply_database_url(settings, std::env::var("DATABASE_URL").ok())
}

fn apply_database_url(settings: Config, url: Option<String>) -> Result<Config, ConfigError> {
    match url {
        Some(url) => Config::builder()
            .add_source(settings)
            .set_override("database.url", url)?
            .build(),
        None => Ok(settings),
    }
}
