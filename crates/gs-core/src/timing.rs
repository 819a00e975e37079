//! Timing profiles for the reveal sequence

use serde::{Deserialize, Serialize};

use crate::error::{GsError, GsResult};

/// Timing profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimingProfile {
    /// Normal gameplay timing
    #[default]
    Normal,
    /// Fast mode
    Turbo,
    /// No delays (testing, batch play)
    Instant,
    /// Scaled from another profile
    Custom,
}

impl TimingProfile {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Turbo => "Turbo",
            Self::Instant => "Instant",
            Self::Custom => "Custom",
        }
    }
}

impl std::str::FromStr for TimingProfile {
    type Err = GsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "turbo" => Ok(Self::Turbo),
            "instant" => Ok(Self::Instant),
            other => Err(GsError::InvalidConfig(format!(
                "unknown timing profile: {other}"
            ))),
        }
    }
}

/// Detailed timing configuration. All durations in ms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Profile type
    pub profile: TimingProfile,

    /// Stagger between consecutive slot reveals
    pub spawn_delay_ms: f64,

    /// Duration of one slot reveal
    pub spawn_duration_ms: f64,

    /// Fade-out of the previous round's symbols
    pub fade_out_ms: f64,

    /// Result banner count-up
    pub banner_duration_ms: f64,

    /// Wave phase divisor (radians advance by elapsed / period)
    pub wave_period_ms: f64,

    /// Wave vertical amplitude (px)
    pub wave_amplitude: f64,

    /// How far above its slot a symbol starts its reveal (px)
    pub drop_height: f64,
}

impl TimingConfig {
    /// Normal gameplay timing
    pub fn normal() -> Self {
        Self {
            profile: TimingProfile::Normal,
            spawn_delay_ms: 500.0,
            spawn_duration_ms: 500.0,
            fade_out_ms: 500.0,
            banner_duration_ms: 1000.0,
            wave_period_ms: 500.0,
            wave_amplitude: 10.0,
            drop_height: 50.0,
        }
    }

    /// Turbo mode
    pub fn turbo() -> Self {
        Self {
            profile: TimingProfile::Turbo,
            spawn_delay_ms: 200.0,
            spawn_duration_ms: 200.0,
            fade_out_ms: 200.0,
            banner_duration_ms: 400.0,
            ..Self::normal()
        }
    }

    /// Everything resolves on the first tick
    pub fn instant() -> Self {
        Self {
            profile: TimingProfile::Instant,
            spawn_delay_ms: 0.0,
            spawn_duration_ms: 0.0,
            fade_out_ms: 0.0,
            banner_duration_ms: 0.0,
            ..Self::normal()
        }
    }

    /// Get config for profile
    pub fn from_profile(profile: TimingProfile) -> Self {
        match profile {
            TimingProfile::Normal => Self::normal(),
            TimingProfile::Turbo => Self::turbo(),
            TimingProfile::Instant => Self::instant(),
            TimingProfile::Custom => Self::normal(),
        }
    }

    /// Scale durations by factor (< 1.0 = faster). Wave shape is unchanged.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            profile: TimingProfile::Custom,
            spawn_delay_ms: self.spawn_delay_ms * factor,
            spawn_duration_ms: self.spawn_duration_ms * factor,
            fade_out_ms: self.fade_out_ms * factor,
            banner_duration_ms: self.banner_duration_ms * factor,
            ..self.clone()
        }
    }

    /// Time from round start until the last slot has revealed
    pub fn total_reveal_duration(&self, slot_count: usize) -> f64 {
        if slot_count == 0 {
            return 0.0;
        }
        (slot_count as f64 - 1.0) * self.spawn_delay_ms + self.spawn_duration_ms
    }

    /// Reject negative or non-finite values
    pub fn validate(&self) -> GsResult<()> {
        let fields = [
            ("spawn_delay_ms", self.spawn_delay_ms),
            ("spawn_duration_ms", self.spawn_duration_ms),
            ("fade_out_ms", self.fade_out_ms),
            ("banner_duration_ms", self.banner_duration_ms),
            ("wave_amplitude", self.wave_amplitude),
            ("drop_height", self.drop_height),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(GsError::InvalidConfig(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }
        if !self.wave_period_ms.is_finite() || self.wave_period_ms <= 0.0 {
            return Err(GsError::InvalidConfig(format!(
                "wave_period_ms must be positive, got {}",
                self.wave_period_ms
            )));
        }
        Ok(())
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::normal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_profiles() {
        let normal = TimingConfig::normal();
        let turbo = TimingConfig::turbo();
        let instant = TimingConfig::instant();

        assert!(turbo.spawn_delay_ms < normal.spawn_delay_ms);
        assert!(turbo.fade_out_ms < normal.fade_out_ms);
        assert_eq!(instant.total_reveal_duration(7), 0.0);
        assert_eq!(turbo.wave_period_ms, normal.wave_period_ms);
    }

    #[test]
    fn test_total_reveal_duration() {
        let normal = TimingConfig::normal();
        // 6 staggers of 500ms plus the last 500ms reveal
        assert_eq!(normal.total_reveal_duration(7), 3500.0);
        assert_eq!(normal.total_reveal_duration(1), 500.0);
        assert_eq!(normal.total_reveal_duration(0), 0.0);
    }

    #[test]
    fn test_scaled() {
        let half = TimingConfig::normal().scaled(0.5);
        assert_eq!(half.profile, TimingProfile::Custom);
        assert_eq!(half.spawn_delay_ms, 250.0);
        assert_eq!(half.wave_amplitude, 10.0);
    }

    #[test]
    fn test_validate() {
        assert!(TimingConfig::normal().validate().is_ok());
        assert!(TimingConfig::instant().validate().is_ok());

        let mut bad = TimingConfig::normal();
        bad.fade_out_ms = -1.0;
        assert!(bad.validate().is_err());

        let mut bad = TimingConfig::normal();
        bad.wave_period_ms = 0.0;
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_profile_from_str() {
        assert_eq!("TURBO".parse::<TimingProfile>().unwrap(), TimingProfile::Turbo);
        assert!("warp".parse::<TimingProfile>().is_err());
    }
}
