use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_FILE: &str = ".bellows.toml";
pub const BASE_URL_ENV: &str = "BELLOWS_BASE_URL";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Config file not found: {0}")]
    NotFound(String),
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct BellowsConfig {
    pub section: SectionConfig,
    pub http: HttpConfig,
}

/// Names the section markup is expected to use.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct SectionConfig {
    pub root_id: String,
    pub empty_suffix: String,
    pub marker_class: String,
    pub hidden_class: String,
    pub form_name: String,
    pub submit_class: String,
    pub success_message: String,
    /// Ignore submits of a form while its previous save is still pending.
    pub guard_in_flight: bool,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpConfig {
    pub base_url: String,
    pub insecure_tls: bool,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            root_id: "section".to_string(),
            empty_suffix: "Empty".to_string(),
            marker_class: "unwell".to_string(),
            hidden_class: "hidden".to_string(),
            form_name: "formItem".to_string(),
            submit_class: "btn-primary".to_string(),
            success_message: "Saved".to_string(),
            guard_in_flight: true,
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            insecure_tls: false,
        }
    }
}

impl BellowsConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let contents = fs::read_to_string(path)?;
        let config: BellowsConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Reads `path` when it exists, falls back to defaults otherwise, then
    /// applies environment overrides.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut config = match Self::from_file(path) {
            Ok(config) => config,
            Err(ConfigError::NotFound(path)) => {
                tracing::debug!("config {path} not found, using defaults");
                Self::default()
            }
            Err(e) => return Err(e),
        };
        config.apply_env();
        Ok(config)
    }

    pub fn apply_env(&mut self) {
        if envmnt::exists(BASE_URL_ENV) {
            self.http.base_url = envmnt::get_or(BASE_URL_ENV, &self.http.base_url);
        }
    }
}
