//! Shared configuration types for VIGIL.
//!
//! These records describe *what* the HUD engine should track for each job:
//! which actions go on which bar, which statuses and resource pools gate an
//! alert, and how icons should glow. They are plain data: the engine in
//! `vigil-core` consumes them read-only, and the configuration editor owns
//! their persistence.

pub mod config;
pub mod formatting;
pub mod jobs;

pub use config::{
    AlertConfig, BarConfig, CombatGate, GlowConfig, GlowSource, IconConfig, ResourceGate,
    ResourceRequirement, ResourceRule, StackRule, StatusGate, StatusTrack, UnitSelector,
};
pub use jobs::{Job, PowerType, Role};
