pub mod actions;
pub mod alerts;
pub mod conditions;
pub mod cooldown;
pub mod engine;
pub mod game_data;
pub mod gauge;
pub mod icons;
pub mod ids;
pub mod presets;
pub mod settings;
pub mod status;

// Re-exports for convenience
pub use actions::{ActionResolver, UpgradeOverrides, UpgradeRow, UpgradeTableError};
pub use alerts::{AlertFrame, AlertTransition, AuraAlert};
pub use conditions::{Condition, CustomPredicate, EvalContext};
pub use cooldown::CooldownSnapshot;
pub use engine::{AlertRender, HudEngine, HudFrame, IconRender};
pub use game_data::{
    ActionDescriptor, GameDataProvider, MAX_LEVEL, RawGauge, StatusDescriptor, StatusInstance,
    UnitRole,
};
pub use gauge::ResourceSnapshot;
pub use icons::{Icon, IconFrame, IconState, IconTransition};
pub use presets::{Bar, JobPreset, PresetRegistry};
pub use settings::{EngineSettings, SettingsError};
