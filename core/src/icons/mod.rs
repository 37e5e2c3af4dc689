//! Per-icon state machine.
//!
//! Each frame an icon collapses its inputs (recast snapshot, tracked
//! status, resource requirement) into one of four states, evaluated in a
//! fixed priority order where each stage short-circuits the ones below:
//!
//! 1. A running cooldown wins: far/soon split on the per-charge remainder.
//! 2. Otherwise a status configured "as a cooldown" mirrors the same split
//!    on its remaining duration.
//! 3. Otherwise the icon is `Ready`, downgraded to `ReadyLackingResource`
//!    when a configured resource requirement is unmet.
//!
//! State changes are surfaced as one-shot transitions for the renderer's
//! color replay; re-evaluating to the same state never re-triggers one.

use vigil_types::{GlowSource, IconConfig, UnitSelector};

use crate::actions::ActionResolver;
use crate::game_data::GameDataProvider;
use crate::settings::EngineSettings;
use crate::{cooldown, gauge, status};

/// Display state of one icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconState {
    Ready,
    ReadyLackingResource,
    CooldownFar,
    CooldownSoon,
}

/// One-shot state change, consumed by the renderer to replay the border
/// color from the previous state's color to the new one's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconTransition {
    pub from: IconState,
    pub to: IconState,
}

/// Per-frame output for one icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconFrame {
    /// The level- and combo-adjusted action id actually displayed.
    pub resolved_action: u32,
    pub state: IconState,
    pub transition: Option<IconTransition>,
    /// Countdown to display, in seconds. `None` renders blank.
    pub duration: Option<f32>,
    /// Charge or stack count to display.
    pub count: Option<u8>,
    pub glow: bool,
}

/// One tracked ability icon: configuration plus the previous state needed
/// for transition detection. Everything else is recomputed every frame.
#[derive(Debug)]
pub struct Icon {
    config: IconConfig,
    last_state: Option<IconState>,
}

impl Icon {
    pub fn new(config: IconConfig) -> Self {
        Self {
            config,
            last_state: None,
        }
    }

    pub fn config(&self) -> &IconConfig {
        &self.config
    }

    /// The nominal action id this icon tracks.
    pub fn action_id(&self) -> u32 {
        self.config.action_id
    }

    pub fn evaluate(
        &mut self,
        provider: &dyn GameDataProvider,
        resolver: &mut ActionResolver,
        settings: &EngineSettings,
        level: u8,
    ) -> IconFrame {
        let resolved = resolver.resolve(provider, self.config.action_id, level);
        let snap = cooldown::snapshot(provider, resolved, level);
        let soon = settings.soon_threshold_secs;
        let charge_count =
            (self.config.show_charges && snap.charges_max > 1).then_some(snap.charges_current);

        let (state, duration, count) = if snap.recharging() {
            let state = if snap.cooldown_remaining > soon {
                IconState::CooldownFar
            } else {
                IconState::CooldownSoon
            };
            (state, Some(snap.cooldown_remaining), charge_count)
        } else if let Some(track) = self.config.status.as_ref().filter(|t| t.as_cooldown)
            && let Some(instance) = status::find_status(
                provider,
                &track.ids,
                track.unit,
                track.own_only,
                track.prioritized,
            )
        {
            // Clamp to the catalog's stack cap; sources occasionally
            // report one above it during reapplication
            let max_stacks = provider
                .status_descriptor(instance.status_id)
                .map(|d| d.max_stacks.max(1))
                .unwrap_or(u8::MAX);
            let stacks = instance.stacks.min(max_stacks);
            let stack_count = (self.config.show_charges && stacks > 1).then_some(stacks);
            match instance.remaining() {
                Some(remaining) => {
                    let state = if remaining > soon {
                        IconState::CooldownFar
                    } else {
                        IconState::CooldownSoon
                    };
                    (state, Some(remaining), stack_count)
                }
                // Sentinel: freshly applied, duration not ticked yet.
                // Unknown is never "about to expire".
                None => (IconState::CooldownFar, None, stack_count),
            }
        } else if let Some(req) = self.config.resource
            && gauge::read(provider, req.power, level).current < req.minimum
        {
            (IconState::ReadyLackingResource, None, charge_count)
        } else {
            (IconState::Ready, None, charge_count)
        };

        let glow_active = match &self.config.glow.source {
            GlowSource::None => false,
            GlowSource::Highlight => provider.is_action_highlighted(resolved),
            GlowSource::Status(ids) => {
                status::find_status(provider, ids, UnitSelector::Player, true, false).is_some()
            }
        };
        let glow =
            glow_active && (self.config.glow.regardless_of_state || state == IconState::Ready);

        let transition = match self.last_state {
            Some(previous) if previous != state => Some(IconTransition {
                from: previous,
                to: state,
            }),
            _ => None,
        };
        self.last_state = Some(state);

        IconFrame {
            resolved_action: resolved,
            state,
            transition,
            duration,
            count,
            glow,
        }
    }
}
