//! Job, role, and resource-pool identities.
//!
//! A job is the player's current specialization; every bar and alert the
//! engine builds is keyed off it. Roles group jobs that share the same set
//! of utility actions, so role-generic bars can be composed from a single
//! shared table instead of being repeated per job.

use serde::{Deserialize, Serialize};

/// Player job (class/specialization).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Job {
    Vanguard,
    Oracle,
    Duelist,
    Shadowblade,
    Ranger,
    Thaumaturge,
}

impl Job {
    /// All jobs, in display order.
    pub const ALL: [Job; 6] = [
        Job::Vanguard,
        Job::Oracle,
        Job::Duelist,
        Job::Shadowblade,
        Job::Ranger,
        Job::Thaumaturge,
    ];

    /// The role this job fills. Duelist and Shadowblade share Melee,
    /// which is what exercises the shared role table.
    pub fn role(self) -> Role {
        match self {
            Job::Vanguard => Role::Tank,
            Job::Oracle => Role::Healer,
            Job::Duelist | Job::Shadowblade => Role::Melee,
            Job::Ranger => Role::Ranged,
            Job::Thaumaturge => Role::Caster,
        }
    }

    /// The job's resource pool, if it has one.
    pub fn power(self) -> Option<PowerType> {
        match self {
            Job::Vanguard => Some(PowerType::Resolve),
            Job::Oracle => Some(PowerType::Vials),
            Job::Duelist => Some(PowerType::Seals),
            Job::Shadowblade => Some(PowerType::Momentum),
            Job::Ranger => Some(PowerType::Focus),
            Job::Thaumaturge => Some(PowerType::Aether),
        }
    }

    /// Display name shown in the configuration editor.
    pub fn display_name(self) -> &'static str {
        match self {
            Job::Vanguard => "Vanguard",
            Job::Oracle => "Oracle",
            Job::Duelist => "Duelist",
            Job::Shadowblade => "Shadowblade",
            Job::Ranger => "Ranger",
            Job::Thaumaturge => "Thaumaturge",
        }
    }
}

/// Combat role. Jobs in the same role share one utility bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Tank,
    Healer,
    Melee,
    Ranged,
    Caster,
}

/// Job-specific resource pool.
///
/// Each pool has a distinct in-game shape (a 0–100 meter, a recharging
/// stack counter, a set of flags); the engine normalizes all of them into
/// one `(current, max)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerType {
    /// Vanguard: 0–100 meter built by blocking.
    Resolve,
    /// Oracle: recharging vial stacks, one every 20 s up to 3.
    Vials,
    /// Duelist: three independent seal flags.
    Seals,
    /// Shadowblade: 0–100 meter built by weaponskills.
    Momentum,
    /// Ranger: 0–100 meter built by ranged attacks.
    Focus,
    /// Thaumaturge: 0–100 aether meter.
    Aether,
}
