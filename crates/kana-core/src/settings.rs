//! Global settings loaded from TOML, following the same OnceLock pattern as the romaji table.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::candidates::MAX_CANDIDATES;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let custom = CUSTOM_TOML.get();
        let toml_str = custom.map(|s| s.as_str()).unwrap_or(DEFAULT_SETTINGS_TOML);
        let settings = parse_settings_toml(toml_str).expect("settings TOML must be valid");
        debug!(
            custom = custom.is_some(),
            lookup_threshold = settings.composition.lookup_threshold,
            endpoint = %settings.gateway.endpoint,
            "settings loaded"
        );
        settings
    })
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub composition: CompositionSettings,
    pub gateway: GatewaySettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompositionSettings {
    pub lookup_threshold: usize,
    pub max_candidates: usize,
    pub lookup_timeout_ms: u64,
}

impl CompositionSettings {
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }
}

impl Default for CompositionSettings {
    fn default() -> Self {
        Self {
            lookup_threshold: 2,
            max_candidates: MAX_CANDIDATES,
            lookup_timeout_ms: 8000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GatewaySettings {
    pub endpoint: String,
    pub timeout_ms: u64,
    pub max_response_bytes: u64,
}

impl GatewaySettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_positive!(composition.lookup_threshold);
    check_positive!(composition.max_candidates);
    check_positive!(composition.lookup_timeout_ms);
    check_positive!(gateway.timeout_ms);
    check_positive!(gateway.max_response_bytes);

    if s.composition.max_candidates > MAX_CANDIDATES {
        return Err(SettingsError::InvalidValue {
            field: "composition.max_candidates".to_string(),
            reason: format!("must be at most {MAX_CANDIDATES}"),
        });
    }

    if !(s.gateway.endpoint.starts_with("http://") || s.gateway.endpoint.starts_with("https://")) {
        return Err(SettingsError::InvalidValue {
            field: "gateway.endpoint".to_string(),
            reason: "must be an http(s) URL".to_string(),
        });
    }

    Ok(())
}
