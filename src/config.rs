use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::{
    domain::default_canonical_skills, JobScoringWeights, MatchThresholds, ShopScoringWeights,
};
use crate::core::Matcher;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_shop_threshold")]
    pub shop_threshold: u8,
    #[serde(default = "default_job_threshold")]
    pub job_threshold: u8,
    #[serde(default = "default_shop_preference")]
    pub shop_preference: u8,
    #[serde(default = "default_canonical_skills")]
    pub canonical_skills: Vec<String>,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            shop_threshold: default_shop_threshold(),
            job_threshold: default_job_threshold(),
            shop_preference: default_shop_preference(),
            canonical_skills: default_canonical_skills(),
        }
    }
}

fn default_shop_threshold() -> u8 { 40 }
fn default_job_threshold() -> u8 { 30 }
fn default_shop_preference() -> u8 { 2 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub shop: ShopWeightsConfig,
    #[serde(default)]
    pub job: JobWeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShopWeightsConfig {
    #[serde(default = "default_same_state_weight")]
    pub same_state: u32,
    #[serde(default = "default_same_city_weight")]
    pub same_city: u32,
    #[serde(default = "default_experience_met_weight")]
    pub experience_met: u32,
    #[serde(default = "default_experience_near_weight")]
    pub experience_near: u32,
    #[serde(default = "default_full_availability_weight")]
    pub full_availability: u32,
    #[serde(default = "default_part_time_weight")]
    pub part_time_availability: u32,
    #[serde(default = "default_shop_skill_point")]
    pub skill_point: u32,
    #[serde(default = "default_shop_skill_cap")]
    pub skill_cap: u32,
    #[serde(default = "default_high_rating_weight")]
    pub high_rating: u32,
    #[serde(default = "default_mid_rating_weight")]
    pub mid_rating: u32,
}

impl Default for ShopWeightsConfig {
    fn default() -> Self {
        Self {
            same_state: default_same_state_weight(),
            same_city: default_same_city_weight(),
            experience_met: default_experience_met_weight(),
            experience_near: default_experience_near_weight(),
            full_availability: default_full_availability_weight(),
            part_time_availability: default_part_time_weight(),
            skill_point: default_shop_skill_point(),
            skill_cap: default_shop_skill_cap(),
            high_rating: default_high_rating_weight(),
            mid_rating: default_mid_rating_weight(),
        }
    }
}

fn default_same_state_weight() -> u32 { 20 }
fn default_same_city_weight() -> u32 { 10 }
fn default_experience_met_weight() -> u32 { 25 }
fn default_experience_near_weight() -> u32 { 15 }
fn default_full_availability_weight() -> u32 { 20 }
fn default_part_time_weight() -> u32 { 10 }
fn default_shop_skill_point() -> u32 { 3 }
fn default_shop_skill_cap() -> u32 { 15 }
fn default_high_rating_weight() -> u32 { 10 }
fn default_mid_rating_weight() -> u32 { 5 }

#[derive(Debug, Clone, Deserialize)]
pub struct JobWeightsConfig {
    #[serde(default = "default_experience_exact_weight")]
    pub experience_exact: u32,
    #[serde(default = "default_experience_entry_weight")]
    pub experience_entry: u32,
    #[serde(default = "default_availability_weight")]
    pub availability: u32,
    #[serde(default = "default_job_skill_point")]
    pub skill_point: u32,
    #[serde(default = "default_job_skill_cap")]
    pub skill_cap: u32,
    #[serde(default = "default_location_weight")]
    pub location: u32,
}

impl Default for JobWeightsConfig {
    fn default() -> Self {
        Self {
            experience_exact: default_experience_exact_weight(),
            experience_entry: default_experience_entry_weight(),
            availability: default_availability_weight(),
            skill_point: default_job_skill_point(),
            skill_cap: default_job_skill_cap(),
            location: default_location_weight(),
        }
    }
}

fn default_experience_exact_weight() -> u32 { 30 }
fn default_experience_entry_weight() -> u32 { 25 }
fn default_availability_weight() -> u32 { 25 }
fn default_job_skill_point() -> u32 { 5 }
fn default_job_skill_cap() -> u32 { 25 }
fn default_location_weight() -> u32 { 20 }

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
    /// 4. Environment variables (prefixed with APPRENTICE_MATCH)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., APPRENTICE_MATCH__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Build a matcher from the configured weights and thresholds
    pub fn matcher(&self) -> Matcher {
        let shop = &self.scoring.shop;
        let job = &self.scoring.job;

        let shop_weights = ShopScoringWeights {
            same_state: shop.same_state,
            same_city: shop.same_city,
            experience_met: shop.experience_met,
            experience_near: shop.experience_near,
            full_availability: shop.full_availability,
            part_time_availability: shop.part_time_availability,
            skill_point: shop.skill_point,
            skill_cap: shop.skill_cap,
            high_rating: shop.high_rating,
            mid_rating: shop.mid_rating,
            shop_preference: self.matching.shop_preference,
            canonical_skills: self.matching.canonical_skills.clone(),
        };

        let job_weights = JobScoringWeights {
            experience_exact: job.experience_exact,
            experience_entry: job.experience_entry,
            availability: job.availability,
            skill_point: job.skill_point,
            skill_cap: job.skill_cap,
            location: job.location,
        };

        let thresholds = MatchThresholds {
            shop: self.matching.shop_threshold,
            job: self.matching.job_threshold,
        };

        Matcher::new(shop_weights, job_weights, thresholds)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("APPRENTICE_MATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_build_default_matcher() {
        let settings = Settings::default();
        let matcher = settings.matcher();

        assert_eq!(matcher.shop_weights(), &ShopScoringWeights::default());
        assert_eq!(matcher.job_weights(), &JobScoringWeights::default());
        assert_eq!(matcher.thresholds(), MatchThresholds::default());
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "compact");
    }

    #[test]
    fn test_load_from_shipped_defaults() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/default.toml");
        let settings = Settings::load_from(&path).expect("shipped config should load");

        assert_eq!(settings.matching.canonical_skills, default_canonical_skills());
        assert_eq!(settings.matcher().shop_weights(), &ShopScoringWeights::default());
        assert_eq!(settings.matcher().job_weights(), &JobScoringWeights::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings: Settings = Config::builder()
            .add_source(config::File::from_str(
                "[matching]\nshop_threshold = 50\n\n[scoring.shop]\nsame_city = 15\n",
                config::FileFormat::Toml,
            ))
            .build()
            .and_then(|c| c.try_deserialize())
            .expect("settings should deserialize");

        assert_eq!(settings.matching.shop_threshold, 50);
        assert_eq!(settings.matching.job_threshold, 30);
        assert_eq!(settings.scoring.shop.same_city, 15);
        assert_eq!(settings.scoring.shop.same_state, 20);
        assert_eq!(settings.server.port, 8080);
    }
}
