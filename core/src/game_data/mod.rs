//! Game data provider interface.
//!
//! Everything the engine knows about the live game flows through
//! [`GameDataProvider`]: catalog descriptors, recast timers, gauges, status
//! lists, and unit resolution. The hook layer that actually reads game
//! memory implements this trait; the engine queries it fresh every frame
//! and caches nothing.
//!
//! Missing data is modelled with `Option`/sentinel values, never errors: a
//! player with no target is a routine frame, not a fault.

use vigil_types::{Job, PowerType};

/// The game's level cap. Recast data is queried as if at this level and
/// corrected for the current level's charge count.
pub const MAX_LEVEL: u8 = 100;

/// Concrete unit roles, in the order `UnitSelector::Any` scans them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitRole {
    Player,
    Target,
    TargetOfTarget,
    Focus,
}

/// Scan order for `UnitSelector::Any`. Part of the contract: self first,
/// then target, target-of-target, focus.
pub const UNIT_SCAN_ORDER: [UnitRole; 4] = [
    UnitRole::Player,
    UnitRole::Target,
    UnitRole::TargetOfTarget,
    UnitRole::Focus,
];

/// Static per-action metadata from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionDescriptor {
    pub id: u32,
    /// Texture id the renderer resolves to an icon asset.
    pub icon_id: u32,
    pub required_level: u8,
    pub is_role_action: bool,
}

/// Static per-status metadata from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDescriptor {
    pub id: u32,
    pub icon_id: u32,
    pub max_stacks: u8,
}

/// One buff/debuff instance on a unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusInstance {
    pub status_id: u32,
    /// Unit that applied the instance.
    pub source_unit_id: u64,
    pub stacks: u8,
    /// Remaining duration in seconds. Negative is the game's "applied but
    /// not yet ticked" sentinel and must not be read as "about to expire".
    pub remaining_secs: f32,
}

impl StatusInstance {
    /// Remaining duration, or `None` while the sentinel is in effect.
    pub fn remaining(&self) -> Option<f32> {
        (self.remaining_secs >= 0.0).then_some(self.remaining_secs)
    }
}

/// Raw, job-specific gauge fields as the game exposes them.
///
/// `gauge::read` normalizes all three shapes into a `(current, max)` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawGauge {
    /// A discrete meter (e.g., 0–100 aether).
    Meter { value: u16, max: u16 },
    /// A stack counter with a sub-stack recharge timer counting up toward
    /// the next stack.
    RegenStacks {
        stacks: u8,
        recharge_ms: u32,
        per_stack_ms: u32,
        max: u8,
    },
    /// Independent boolean sub-states (e.g., three seals).
    Flags { flags: [bool; 3] },
}

/// Read-only window onto live game state.
///
/// Implementations hand the engine a consistent snapshot per frame; any
/// asynchronous delivery is their concern, not this crate's.
pub trait GameDataProvider {
    fn action_descriptor(&self, action_id: u32) -> Option<ActionDescriptor>;
    fn status_descriptor(&self, status_id: u32) -> Option<StatusDescriptor>;

    /// Total recast time in seconds, as reported at the level cap.
    fn recast_total(&self, action_id: u32) -> f32;
    /// Elapsed recast time in seconds. Zero when no recast is running.
    fn recast_elapsed(&self, action_id: u32) -> f32;
    /// Maximum charges the action holds at the given level.
    fn max_charges(&self, action_id: u32, level: u8) -> u8;

    /// The game's own combo/upgrade resolution. `None` when the hook is
    /// unavailable; callers degrade to the unresolved id.
    fn resolve_combo_or_upgrade(&self, action_id: u32) -> Option<u32>;

    /// Raw gauge fields for a resource pool. `None` when the pool does not
    /// belong to the current job.
    fn gauge(&self, power: PowerType) -> Option<RawGauge>;

    /// All status instances currently on a unit.
    fn status_list(&self, unit_id: u64) -> Vec<StatusInstance>;

    fn player_job(&self) -> Job;
    fn player_level(&self) -> u8;
    fn local_unit(&self) -> u64;
    /// Resolve a unit role to a unit id. `None` when nothing fills the
    /// role (no target selected, no focus set).
    fn unit(&self, role: UnitRole) -> Option<u64>;

    fn is_in_combat(&self) -> bool;
    /// The game's border-highlight flag for an action (proc indicator).
    fn is_action_highlighted(&self, action_id: u32) -> bool;
}
