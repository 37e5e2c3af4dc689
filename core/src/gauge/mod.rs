//! Resource gauge normalization.
//!
//! Job gauges come in three raw shapes (discrete meter, recharging stacks,
//! boolean flags); consumers only ever see a `(current, max)` pair. Below a
//! pool's unlock level the reader always returns the `(0, 0)` sentinel.

use vigil_types::PowerType;

use crate::game_data::{GameDataProvider, RawGauge};

/// Normalized view of a job resource pool.
///
/// `(0, 0)` means "not yet unlocked at this level".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResourceSnapshot {
    pub current: u16,
    pub max: u16,
}

impl ResourceSnapshot {
    pub const LOCKED: ResourceSnapshot = ResourceSnapshot { current: 0, max: 0 };

    pub fn is_locked(&self) -> bool {
        self.max == 0
    }
}

/// Level at which a resource pool unlocks.
pub fn unlock_level(power: PowerType) -> u8 {
    match power {
        PowerType::Resolve => 10,
        PowerType::Focus => 30,
        PowerType::Aether => 30,
        PowerType::Momentum => 35,
        PowerType::Vials => 45,
        PowerType::Seals => 50,
    }
}

/// Read and normalize a resource pool.
///
/// Recharging stacks fold the sub-stack timer into the count as
/// `floor(stacks + elapsed/per_stack)`, so a consumer can show fractional
/// progress toward the next stack without tracking a second timer.
pub fn read(provider: &dyn GameDataProvider, power: PowerType, level: u8) -> ResourceSnapshot {
    if level < unlock_level(power) {
        return ResourceSnapshot::LOCKED;
    }
    let Some(raw) = provider.gauge(power) else {
        return ResourceSnapshot::LOCKED;
    };

    match raw {
        RawGauge::Meter { value, max } => ResourceSnapshot {
            current: value.min(max),
            max,
        },
        RawGauge::RegenStacks {
            stacks,
            recharge_ms,
            per_stack_ms,
            max,
        } => {
            let current = if per_stack_ms == 0 || stacks >= max {
                stacks.min(max)
            } else {
                let fractional = stacks as f32 + recharge_ms as f32 / per_stack_ms as f32;
                (fractional.floor() as u8).min(max)
            };
            ResourceSnapshot {
                current: current as u16,
                max: max as u16,
            }
        }
        RawGauge::Flags { flags } => ResourceSnapshot {
            current: flags.iter().filter(|set| **set).count() as u16,
            max: flags.len() as u16,
        },
    }
}
