use crate::core::{EventPolicy, Matcher, DEFAULT_MATCH_THRESHOLD};
use crate::models::FilterCriteria;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub events: EventSettings,
    #[serde(default)]
    pub advisor: AdvisorSettings,
    #[serde(default)]
    pub cache: CacheSettings,
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

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_match_threshold")]
    pub match_threshold: usize,
    #[serde(default = "default_min_age")]
    pub default_min_age: u8,
    #[serde(default = "default_max_age")]
    pub default_max_age: u8,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            match_threshold: default_match_threshold(),
            default_min_age: default_min_age(),
            default_max_age: default_max_age(),
        }
    }
}

fn default_match_threshold() -> usize { DEFAULT_MATCH_THRESHOLD }
fn default_min_age() -> u8 { 18 }
fn default_max_age() -> u8 { 50 }

#[derive(Debug, Clone, Deserialize)]
pub struct EventSettings {
    #[serde(default = "default_organizer_can_leave")]
    pub organizer_can_leave: bool,
}

impl Default for EventSettings {
    fn default() -> Self {
        Self {
            organizer_can_leave: default_organizer_can_leave(),
        }
    }
}

fn default_organizer_can_leave() -> bool { true }

#[derive(Debug, Clone, Deserialize)]
pub struct AdvisorSettings {
    /// Gemini API key; without one every advisor call returns its fallback text
    pub api_key: Option<String>,
    #[serde(default = "default_advisor_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_advisor_model")]
    pub model: String,
    #[serde(default = "default_advisor_timeout")]
    pub timeout_secs: u64,
}

impl Default for AdvisorSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_advisor_endpoint(),
            model: default_advisor_model(),
            timeout_secs: default_advisor_timeout(),
        }
    }
}

fn default_advisor_endpoint() -> String { "https://generativelanguage.googleapis.com/v1beta".to_string() }
fn default_advisor_model() -> String { "gemini-2.5-flash".to_string() }
fn default_advisor_timeout() -> u64 { 15 }

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
    #[serde(default = "default_cache_entries")]
    pub max_entries: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl_secs: default_cache_ttl(),
            max_entries: default_cache_entries(),
        }
    }
}

fn default_cache_ttl() -> u64 { 600 }
fn default_cache_entries() -> u64 { 1000 }

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
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with F2F)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., F2F__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("F2F")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Matcher for the configured threshold; a zero threshold would match
    /// everyone, so it falls back to the default
    pub fn matcher(&self) -> Matcher {
        match self.matching.match_threshold {
            0 => {
                tracing::warn!(
                    "matching.match_threshold must be at least 1, using {}",
                    DEFAULT_MATCH_THRESHOLD
                );
                Matcher::with_default_threshold()
            }
            threshold => Matcher::new(threshold),
        }
    }

    pub fn event_policy(&self) -> EventPolicy {
        EventPolicy {
            organizer_can_leave: self.events.organizer_can_leave,
        }
    }

    pub fn default_filters(&self) -> FilterCriteria {
        FilterCriteria {
            min_age: self.matching.default_min_age,
            max_age: self.matching.default_max_age,
            ..FilterCriteria::default()
        }
    }
}

/// Apply well-known environment variables that do not follow the F2F prefix
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(api_key) = env::var("GEMINI_API_KEY").or_else(|_| env::var("API_KEY")) {
        if !api_key.trim().is_empty() {
            builder = builder.set_override("advisor.api_key", api_key)?;
        }
    }

    builder.build()
}
