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
    pub cache: CacheSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
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
pub struct CacheSettings {
    pub ttl_secs: Option<u64>,
    pub max_entries: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingSettings {
    pub max_results: Option<usize>,
    pub min_nationality_pool: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_nationality_points")]
    pub nationality: f64,
    #[serde(default = "default_language_points")]
    pub language: f64,
    #[serde(default = "default_interest_points")]
    pub interest: f64,
    #[serde(default = "default_rating_multiplier")]
    pub rating_multiplier: f64,
    #[serde(default = "default_experience_high")]
    pub experience_high: f64,
    #[serde(default = "default_experience_mid")]
    pub experience_mid: f64,
    #[serde(default = "default_experience_low")]
    pub experience_low: f64,
    #[serde(default = "default_perfect_attendance")]
    pub perfect_attendance: f64,
    #[serde(default = "default_no_show_penalty")]
    pub no_show_penalty: f64,
    #[serde(default = "default_gold_badge")]
    pub gold_badge: f64,
    #[serde(default = "default_silver_badge")]
    pub silver_badge: f64,
    #[serde(default = "default_bronze_badge")]
    pub bronze_badge: f64,
    #[serde(default = "default_acceptance_points")]
    pub acceptance: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            nationality: default_nationality_points(),
            language: default_language_points(),
            interest: default_interest_points(),
            rating_multiplier: default_rating_multiplier(),
            experience_high: default_experience_high(),
            experience_mid: default_experience_mid(),
            experience_low: default_experience_low(),
            perfect_attendance: default_perfect_attendance(),
            no_show_penalty: default_no_show_penalty(),
            gold_badge: default_gold_badge(),
            silver_badge: default_silver_badge(),
            bronze_badge: default_bronze_badge(),
            acceptance: default_acceptance_points(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            nationality: config.nationality,
            language: config.language,
            interest: config.interest,
            rating_multiplier: config.rating_multiplier,
            experience_high: config.experience_high,
            experience_mid: config.experience_mid,
            experience_low: config.experience_low,
            perfect_attendance: config.perfect_attendance,
            no_show_penalty: config.no_show_penalty,
            gold_badge: config.gold_badge,
            silver_badge: config.silver_badge,
            bronze_badge: config.bronze_badge,
            acceptance: config.acceptance,
        }
    }
}

fn default_nationality_points() -> f64 { 50.0 }
fn default_language_points() -> f64 { 20.0 }
fn default_interest_points() -> f64 { 10.0 }
fn default_rating_multiplier() -> f64 { 10.0 }
fn default_experience_high() -> f64 { 30.0 }
fn default_experience_mid() -> f64 { 15.0 }
fn default_experience_low() -> f64 { 5.0 }
fn default_perfect_attendance() -> f64 { 20.0 }
fn default_no_show_penalty() -> f64 { 30.0 }
fn default_gold_badge() -> f64 { 25.0 }
fn default_silver_badge() -> f64 { 15.0 }
fn default_bronze_badge() -> f64 { 5.0 }
fn default_acceptance_points() -> f64 { 10.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with WANDER__)
    /// 5. DATABASE_URL, if set
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., WANDER__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("WANDER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        apply_database_url(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("WANDER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }
}

/// Let the conventional DATABASE_URL variable win over file settings
fn apply_database_url(settings: Config) -> Result<Config, ConfigError> {
    match std::env::var("DATABASE_URL") {
        Ok(url) if !url.is_empty() => Config::builder()
            .add_source(settings)
            .set_override("database.url", url)?
            .build(),
        _ => Ok(settings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_match_scoring_defaults() {
        let weights = ScoringWeights::from(&WeightsConfig::default());
        assert_eq!(weights, ScoringWeights::default());
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "compact");
    }

    #[test]
    fn test_load_from_file_with_partial_weights() {
        let path = std::env::temp_dir().join("wander_match_settings_test.toml");
        std::fs::write(
            &path,
            r#"
[server]
host = "127.0.0.1"
port = 9090

[database]
url = "postgres://localhost/wander"

[matching]
max_results = 6

[scoring.weights]
nationality = 40.0
"#,
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.matching.max_results, Some(6));
        assert_eq!(settings.cache.ttl_secs, None);
        let weights = settings.scoring_weights();
        assert_eq!(weights.nationality, 40.0);
        assert_eq!(weights.language, 20.0);
    }
}
