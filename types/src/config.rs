//! Icon, bar, and alert configuration records.
//!
//! A record is the "template" half of the engine: it names the action or
//! statuses to watch and how the result should be presented. The runtime
//! half (current state, transition detection) lives in `vigil-core` and is
//! rebuilt from these records whenever the job or level changes.

use serde::{Deserialize, Serialize};

use crate::jobs::PowerType;

fn default_true() -> bool {
    true
}

/// Which unit an icon or alert inspects for statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitSelector {
    /// The local player.
    #[default]
    Player,
    /// The player's current target.
    Target,
    /// The target's target.
    TargetOfTarget,
    /// The focus target.
    Focus,
    /// Scan player, target, target-of-target, focus in that order and take
    /// the first match. The order is part of the contract.
    Any,
}

/// How an instance's stack count must compare for a status gate to pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StackRule {
    /// Any stack count passes.
    #[default]
    Any,
    /// At least this many stacks.
    AtLeast(u8),
    /// Exactly this many stacks.
    Exactly(u8),
}

/// How a resource pool must compare for a resource gate to pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceRule {
    /// At least this much of the resource.
    AtLeast(u16),
    /// Exactly this much of the resource.
    Exactly(u16),
}

/// Combat-state gate for alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatGate {
    /// Show regardless of combat state.
    #[default]
    Always,
    /// Show only while in combat.
    InCombatOnly,
    /// Show only while out of combat.
    OutOfCombatOnly,
}

// ═══════════════════════════════════════════════════════════════════════════
// Icons
// ═══════════════════════════════════════════════════════════════════════════

/// Status tracking attached to an icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusTrack {
    /// Candidate status ids. With `prioritized`, earlier entries win over
    /// later ones regardless of their order on the unit.
    pub ids: Vec<u32>,

    /// Which unit to inspect.
    #[serde(default)]
    pub unit: UnitSelector,

    /// Only count instances the local player applied.
    #[serde(default = "default_true")]
    pub own_only: bool,

    /// Candidate-list order expresses priority when several ids match.
    #[serde(default)]
    pub prioritized: bool,

    /// Display the status's remaining duration in place of a recast timer
    /// while the action itself is off cooldown.
    #[serde(default)]
    pub as_cooldown: bool,
}

/// Resource requirement that downgrades `Ready` to `ReadyLackingResource`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRequirement {
    pub power: PowerType,
    pub minimum: u16,
}

/// Where an icon's glow flag comes from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlowSource {
    /// No glow.
    #[default]
    None,
    /// The game's own "this action is highlighted" flag.
    Highlight,
    /// Presence of any of these statuses on the local player.
    Status(Vec<u32>),
}

/// Glow configuration for an icon.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GlowConfig {
    #[serde(default)]
    pub source: GlowSource,

    /// Render the glow in every state instead of only `Ready`.
    #[serde(default)]
    pub regardless_of_state: bool,
}

/// One on-screen ability icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconConfig {
    /// Unique identifier for this icon (e.g., "oracle_vial_infusion").
    pub id: String,

    /// Nominal action id. The engine resolves level upgrades and combo
    /// replacement before querying recast data.
    pub action_id: u32,

    /// Optional status tracking (procs, HoTs displayed as cooldowns).
    #[serde(default)]
    pub status: Option<StatusTrack>,

    /// Optional resource requirement.
    #[serde(default)]
    pub resource: Option<ResourceRequirement>,

    #[serde(default)]
    pub glow: GlowConfig,

    /// Show the current charge/stack count next to the icon.
    #[serde(default = "default_true")]
    pub show_charges: bool,
}

/// An ordered run of icons. Order is visually meaningful and fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarConfig {
    pub id: String,
    pub icons: Vec<IconConfig>,
}

// ═══════════════════════════════════════════════════════════════════════════
// Alerts
// ═══════════════════════════════════════════════════════════════════════════

/// Status-presence gate for an alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusGate {
    pub ids: Vec<u32>,

    #[serde(default)]
    pub unit: UnitSelector,

    #[serde(default = "default_true")]
    pub own_only: bool,

    #[serde(default)]
    pub stacks: StackRule,

    /// Pass when the status is absent instead of present.
    #[serde(default)]
    pub invert: bool,
}

/// Resource-threshold gate for an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceGate {
    pub power: PowerType,
    pub rule: ResourceRule,
}

/// A condition-gated visual cue independent of any specific icon.
///
/// All gates default to "pass" when unconfigured; custom predicates are
/// attached at preset-build time in `vigil-core` and are not serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertConfig {
    /// Unique identifier for this alert (e.g., "crowd_controlled").
    pub id: String,

    #[serde(default)]
    pub combat: CombatGate,

    #[serde(default)]
    pub status: Option<StatusGate>,

    #[serde(default)]
    pub resource: Option<ResourceGate>,

    /// Estimated full duration, displayed while the authoritative value is
    /// still lagging shortly after the alert becomes visible.
    #[serde(default)]
    pub estimated_duration_secs: Option<f32>,

    /// Show a remaining-duration readout while visible.
    #[serde(default = "default_true")]
    pub show_duration: bool,
}
