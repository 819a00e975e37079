//! Game configuration
//!
//! Loaded from JSON or YAML, picked by file extension. Every field has a
//! default, so a partial file (or none at all) is valid.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GsError, GsResult};
use crate::payout::{DEFAULT_SLOT_COUNT, PayoutTable};
use crate::timing::TimingConfig;

/// Default session starting balance
pub const DEFAULT_STARTING_BALANCE: f64 = 100.0;

/// Upper bound on slots; the display has room for a single row
pub const MAX_SLOT_COUNT: usize = 32;

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of slots (K)
    pub slot_count: usize,
    /// Balance at session start
    pub starting_balance: f64,
    /// Reveal/fade/wave timing
    pub timing: TimingConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            slot_count: DEFAULT_SLOT_COUNT,
            starting_balance: DEFAULT_STARTING_BALANCE,
            timing: TimingConfig::default(),
        }
    }
}

impl GameConfig {
    /// Load from a `.json`, `.yaml` or `.yml` file
    pub fn load(path: impl AsRef<Path>) -> GsResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let config = match ext.as_deref() {
            Some("json") => Self::from_json_str(&text)?,
            Some("yaml") | Some("yml") => Self::from_yaml_str(&text)?,
            other => {
                log::warn!(
                    "Unrecognized config extension {:?} for {}, trying YAML",
                    other,
                    path.display()
                );
                Self::from_yaml_str(&text)?
            }
        };
        log::info!(
            "Loaded config from {}: {} slots, balance {:.2}, {} timing",
            path.display(),
            config.slot_count,
            config.starting_balance,
            config.timing.profile.display_name()
        );
        Ok(config)
    }

    /// Parse and validate JSON
    pub fn from_json_str(json: &str) -> GsResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| GsError::Serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate YAML
    pub fn from_yaml_str(yaml: &str) -> GsResult<Self> {
        let config: Self =
            serde_yml::from_str(yaml).map_err(|e| GsError::Serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> GsResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| GsError::Serialization(e.to_string()))
    }

    /// Check ranges
    pub fn validate(&self) -> GsResult<()> {
        if self.slot_count == 0 || self.slot_count > MAX_SLOT_COUNT {
            return Err(GsError::InvalidConfig(format!(
                "slot_count must be in 1..={MAX_SLOT_COUNT}, got {}",
                self.slot_count
            )));
        }
        if !self.starting_balance.is_finite() || self.starting_balance < 0.0 {
            return Err(GsError::InvalidConfig(format!(
                "starting_balance must be a finite non-negative number, got {}",
                self.starting_balance
            )));
        }
        self.timing.validate()
    }

    /// Payout table derived from the slot count
    pub fn payout_table(&self) -> PayoutTable {
        PayoutTable::for_slots(self.slot_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::TimingProfile;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.slot_count, 7);
        assert_eq!(config.starting_balance, 100.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = GameConfig::from_json_str(r#"{ "starting_balance": 250.0 }"#).unwrap();
        assert_eq!(config.starting_balance, 250.0);
        assert_eq!(config.slot_count, 7);
        assert_eq!(config.timing, TimingConfig::normal());
    }

    #[test]
    fn test_yaml_timing_override() {
        let yaml = "slot_count: 5\ntiming:\n  profile: turbo\n  spawn_delay_ms: 100.0\n";
        let config = GameConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.slot_count, 5);
        assert_eq!(config.timing.profile, TimingProfile::Turbo);
        assert_eq!(config.timing.spawn_delay_ms, 100.0);
        // Unspecified timing fields keep normal defaults
        assert_eq!(config.timing.fade_out_ms, 500.0);
        assert_eq!(config.payout_table().slot_count(), 5);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            GameConfig::from_json_str(r#"{ "slot_count": 0 }"#),
            Err(GsError::InvalidConfig(_))
        ));
        assert!(matches!(
            GameConfig::from_json_str(r#"{ "starting_balance": -5.0 }"#),
            Err(GsError::InvalidConfig(_))
        ));
        assert!(matches!(
            GameConfig::from_json_str("not json"),
            Err(GsError::Serialization(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("game.json");
        std::fs::write(&json_path, GameConfig::default().to_json().unwrap()).unwrap();
        assert_eq!(GameConfig::load(&json_path).unwrap(), GameConfig::default());

        let yaml_path = dir.path().join("game.yml");
        std::fs::write(&yaml_path, "starting_balance: 20.0\n").unwrap();
        assert_eq!(GameConfig::load(&yaml_path).unwrap().starting_balance, 20.0);

        let missing = dir.path().join("missing.json");
        assert!(matches!(GameConfig::load(&missing), Err(GsError::Io(_))));
    }
}
