use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::CleanError;

/// Tunable thresholds for the strategy chain.
///
/// Both values are heuristics calibrated on the amazon.fr review scrape; a
/// different dataset may need retuning, which is why they load from a config
/// file instead of being baked into the logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanerConfig {
    /// Minimum character count the text after a modal delimiter must exceed
    /// to be trusted as the actual review body.
    pub min_remainder_len: usize,
    /// A leading JSON blob is only stripped when it closes before this
    /// fraction of the total text length.
    pub max_json_fraction: f64,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        CleanerConfig {
            min_remainder_len: 20,
            max_json_fraction: 0.7,
        }
    }
}

impl CleanerConfig {
    pub fn from_config(config: &str) -> Result<Self, CleanError> {
        if Path::new(config).exists() {
            let config_content = fs::read_to_string(config)?;
            if config.ends_with(".json") {
                Ok(serde_json::from_str(&config_content)?)
            } else if config.ends_with(".toml") {
                #[cfg(feature = "toml_config")]
                {
                    Ok(toml::from_str(&config_content)?)
                }
                #[cfg(not(feature = "toml_config"))]
                {
                    Err(CleanError::TomlNotEnabled)
                }
            } else {
                Err(CleanError::UnsupportedFormat)
            }
        } else {
            // Try parsing as JSON first, then TOML if that fails and the feature is enabled
            serde_json::from_str(config).or_else(|_| {
                #[cfg(feature = "toml_config")]
                {
                    toml::from_str(config).map_err(|e| e.into())
                }
                #[cfg(not(feature = "toml_config"))]
                {
                    Err(CleanError::UnsupportedFormat)
                }
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_calibrated_thresholds() {
        let config = CleanerConfig::default();
        assert_eq!(config.min_remainder_len, 20);
        assert_eq!(config.max_json_fraction, 0.7);
    }

    #[test]
    fn inline_json_overrides_defaults() {
        let config = CleanerConfig::from_config("{\"min_remainder_len\": 10}").unwrap();
        assert_eq!(config.min_remainder_len, 10);
        assert_eq!(config.max_json_fraction, 0.7);
    }

    #[cfg(feature = "toml_config")]
    #[test]
    fn inline_toml_parses_when_enabled() {
        let config = CleanerConfig::from_config("max_json_fraction = 0.5").unwrap();
        assert_eq!(config.max_json_fraction, 0.5);
    }
}
