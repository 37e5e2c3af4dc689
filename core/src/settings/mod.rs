//! Engine settings.
//!
//! Small, tunable thresholds that shape presentation behavior. Persisted
//! as TOML in the platform config directory; absence falls back to
//! defaults so a fresh install never errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Cooldowns at or below this many seconds display as "soon".
    pub soon_threshold_secs: f32,

    /// A frame gap longer than this snaps hide transitions instead of
    /// animating them (loading screens, suspend/resume).
    pub hysteresis_ms: u64,

    /// How long after an alert becomes visible the estimated-duration
    /// fallback may stand in for a lagging authoritative value.
    pub duration_grace_secs: f32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            soon_threshold_secs: 7.0,
            hysteresis_ms: 2000,
            duration_grace_secs: 4.0,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to load settings")]
    Load(#[source] confy::ConfyError),
    #[error("failed to save settings")]
    Store(#[source] confy::ConfyError),
}

impl EngineSettings {
    pub fn load() -> Result<Self, SettingsError> {
        confy::load("vigil", None).map_err(SettingsError::Load)
    }

    pub fn store(&self) -> Result<(), SettingsError> {
        confy::store("vigil", None, self).map_err(SettingsError::Store)
    }

    /// Load, falling back to defaults on any error.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(error = %e, "falling back to default settings");
                Self::default()
            }
        }
    }
}
