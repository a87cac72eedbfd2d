//! Configuration for the happy ghast speed plugin.
//!
//! Maps directly to `happyghast.toml`. Every section is optional; missing
//! keys fall back to the values the plugin has always shipped with.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of the modifier this plugin owns on every target entity.
pub const SPEED_MODIFIER_ID: Uuid = Uuid::from_u128(0xa3c5_f7a1_98b5_4278_9f0a_3a5f_9c8e_6d1a);

/// Display name of the modifier this plugin owns.
pub const SPEED_MODIFIER_NAME: &str = "HappyGhastSpeedBoost";

/// Top-level configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HappyGhastConfig {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Which entities count as happy ghasts.
    #[serde(default)]
    pub target: TargetConfig,
    /// Ordered host symbol candidates.
    #[serde(default)]
    pub symbols: SymbolConfig,
    /// Identity of the owned modifier.
    #[serde(default)]
    pub modifier: ModifierConfig,
}

impl HappyGhastConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `HappyGhastError::Config` if the TOML is invalid.
    pub fn from_toml(toml_str: &str) -> crate::error::Result<Self> {
        toml::from_str(toml_str).map_err(|e| crate::HappyGhastError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// General plugin settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Whether the plugin reacts to anything at all.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_level: default_log_level(),
        }
    }
}

/// Target filter settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Dedicated entity kind, matched exactly.
    #[serde(default = "default_kind")]
    pub kind: String,
    /// Related base kind used by data packs that simulate the creature.
    #[serde(default = "default_fallback_kind")]
    pub fallback_kind: String,
    /// Tag marking a fallback-kind entity as a target.
    #[serde(default = "default_marker_tag")]
    pub marker_tag: String,
    /// Phrase in the custom name (case-insensitive) marking a target.
    #[serde(default = "default_marker_phrase")]
    pub marker_phrase: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            kind: default_kind(),
            fallback_kind: default_fallback_kind(),
            marker_tag: default_marker_tag(),
            marker_phrase: default_marker_phrase(),
        }
    }
}

/// Candidate symbol names, tried in order against the host.
///
/// Older and newer host versions expose different names for the same
/// concept (`GENERIC_FLYING_SPEED` vs `FLYING_SPEED`, `SLOW` vs `SLOWNESS`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolConfig {
    /// Flying speed attribute candidates.
    #[serde(default = "default_flying_speed")]
    pub flying_speed: Vec<String>,
    /// Movement speed attribute candidates.
    #[serde(default = "default_movement_speed")]
    pub movement_speed: Vec<String>,
    /// Speed boost effect candidates.
    #[serde(default = "default_speed_effect")]
    pub speed_effect: Vec<String>,
    /// Slowness effect candidates.
    #[serde(default = "default_slow_effect")]
    pub slow_effect: Vec<String>,
}

impl Default for SymbolConfig {
    fn default() -> Self {
        Self {
            flying_speed: default_flying_speed(),
            movement_speed: default_movement_speed(),
            speed_effect: default_speed_effect(),
            slow_effect: default_slow_effect(),
        }
    }
}

/// Identity of the owned modifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifierConfig {
    /// Canonical identity.
    #[serde(default = "default_modifier_id")]
    pub id: Uuid,
    /// Display name, also matched when clearing.
    #[serde(default = "default_modifier_name")]
    pub name: String,
}

impl Default for ModifierConfig {
    fn default() -> Self {
        Self {
            id: SPEED_MODIFIER_ID,
            name: default_modifier_name(),
        }
    }
}

// ---------------------------------------------------------------------------
// Serde default helpers
// ---------------------------------------------------------------------------

fn default_true() -> bool { true }
fn default_log_level() -> String { "info".to_string() }
fn default_kind() -> String { "happy_ghast".to_string() }
fn default_fallback_kind() -> String { "ghast".to_string() }
fn default_marker_tag() -> String { "happy_ghast".to_string() }
fn default_marker_phrase() -> String { "happy ghast".to_string() }
fn default_flying_speed() -> Vec<String> { names(&["GENERIC_FLYING_SPEED", "FLYING_SPEED"]) }
fn default_movement_speed() -> Vec<String> { names(&["GENERIC_MOVEMENT_SPEED", "MOVEMENT_SPEED"]) }
fn default_speed_effect() -> Vec<String> { names(&["SPEED"]) }
fn default_slow_effect() -> Vec<String> { names(&["SLOW", "SLOWNESS"]) }
fn default_modifier_id() -> Uuid { SPEED_MODIFIER_ID }
fn default_modifier_name() -> String { SPEED_MODIFIER_NAME.to_string() }

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
