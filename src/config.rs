//! Configuration management for the comeback coach

use crate::error::{CoachError, Result};
use crate::limiter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable consulted before the config file for the service key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub limits: LimitConfig,
    pub interview: InterviewConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Model identifier sent to the generative text service.
    pub model: String,
    /// API key; the GEMINI_API_KEY environment variable takes precedence.
    pub api_key: Option<String>,
    /// Force canned demo data even when a key is configured.
    pub demo_mode: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitConfig {
    pub analysis_max_requests: usize,
    pub chat_max_requests: usize,
    pub window_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewConfig {
    /// Countdown budget for a practice interview, in seconds.
    pub duration_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                model: "gemini-pro".to_string(),
                api_key: None,
                demo_mode: false,
            },
            limits: LimitConfig {
                analysis_max_requests: limiter::ANALYSIS_MAX_REQUESTS,
                chat_max_requests: limiter::CHAT_MAX_REQUESTS,
                window_secs: limiter::WINDOW.as_secs(),
            },
            interview: InterviewConfig { duration_secs: 300 },
            output: OutputConfig {
                format: OutputFormat::Console,
                color_output: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load from an explicit path, or the default location. A missing default
    /// config is created on first run; a missing explicit path is an error.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                toml::from_str(&content).map_err(|e| {
                    CoachError::Configuration(format!("Failed to parse config: {}", e))
                })
            }
            None => {
                let config_path = Self::config_path();
                if config_path.exists() {
                    let content = std::fs::read_to_string(&config_path)?;
                    toml::from_str(&content).map_err(|e| {
                        CoachError::Configuration(format!("Failed to parse config: {}", e))
                    })
                } else {
                    let config = Self::default();
                    config.save()?;
                    Ok(config)
                }
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            CoachError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("comeback-coach")
            .join("config.toml")
    }

    /// Effective API key: environment variable first, config file second.
    pub fn resolve_api_key(&self) -> Option<String> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| self.service.api_key.clone())
            .filter(|k| !k.trim().is_empty())
    }

    /// Set a configuration value by dotted key, e.g. `service.model`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "service.model" => self.service.model = value.to_string(),
            "service.api_key" => {
                self.service.api_key = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                }
            }
            "service.demo_mode" => self.service.demo_mode = parse_value(key, value)?,
            "limits.analysis_max_requests" => {
                self.limits.analysis_max_requests = parse_value(key, value)?
            }
            "limits.chat_max_requests" => self.limits.chat_max_requests = parse_value(key, value)?,
            "limits.window_secs" => self.limits.window_secs = parse_value(key, value)?,
            "interview.duration_secs" => self.interview.duration_secs = parse_value(key, value)?,
            "output.color_output" => self.output.color_output = parse_value(key, value)?,
            "output.format" => {
                self.output.format = crate::cli::parse_output_format(value)
                    .map_err(CoachError::Configuration)?
            }
            _ => {
                return Err(CoachError::Configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| {
        CoachError::Configuration(format!("Invalid value '{}' for key '{}'", value, key))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits_match_policy_constants() {
        let config = Config::default();
        assert_eq!(config.limits.analysis_max_requests, 3);
        assert_eq!(config.limits.chat_max_requests, 5);
        assert_eq!(config.limits.window_secs, 60);
    }

    #[test]
    fn test_set_known_keys() {
        let mut config = Config::default();
        config.set("service.model", "gemini-1.5-flash").unwrap();
        config.set("service.demo_mode", "true").unwrap();
        config.set("interview.duration_secs", "120").unwrap();
        config.set("output.format", "markdown").unwrap();

        assert_eq!(config.service.model, "gemini-1.5-flash");
        assert!(config.service.demo_mode);
        assert_eq!(config.interview.duration_secs, 120);
        assert_eq!(config.output.format, OutputFormat::Markdown);
    }

    #[test]
    fn test_set_unknown_key_fails() {
        let mut config = Config::default();
        assert!(config.set("scoring.embedding_weight", "0.5").is_err());
    }

    #[test]
    fn test_set_bad_value_fails() {
        let mut config = Config::default();
        assert!(config.set("limits.window_secs", "a minute").is_err());
    }
}
