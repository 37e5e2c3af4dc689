//! Frame driver and composition root.
//!
//! One `HudEngine` lives per session. Each rendered frame the host calls
//! [`HudEngine::evaluate`]; the engine reads the live `(job, level)` pair
//! exactly once, rebuilds the preset when either changed, and walks every
//! icon and alert synchronously, handing back a [`HudFrame`] for the
//! renderer. Nothing here blocks, suspends, or touches another thread.
//!
//! The frame loop may be paused or skip arbitrarily many ticks without
//! notice, so the engine tracks wall-clock elapsed time since its own last
//! evaluation rather than assuming a fixed timestep; downstream machines
//! use that gap to snap instead of animate.

use std::time::Instant;

use crate::actions::ActionResolver;
use crate::alerts::AlertTransition;
use crate::conditions::EvalContext;
use crate::game_data::GameDataProvider;
use crate::icons::{IconState, IconTransition};
use crate::presets::{JobPreset, PresetRegistry};
use crate::settings::EngineSettings;

#[cfg(test)]
pub(crate) mod test_provider;


/// Per-frame render record for one icon.
#[derive(Debug, Clone, PartialEq)]
pub struct IconRender {
    /// Bar the icon belongs to.
    pub bar: String,
    /// Icon configuration id.
    pub icon: String,
    /// Catalog texture id, when the catalog knows the resolved action.
    pub texture: Option<u32>,
    pub state: IconState,
    pub transition: Option<IconTransition>,
    pub duration: Option<f32>,
    pub count: Option<u8>,
    pub glow: bool,
}

/// Per-frame render record for one alert.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertRender {
    pub alert: String,
    pub visible: bool,
    pub transition: Option<AlertTransition>,
    pub duration: Option<f32>,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct HudFrame {
    pub icons: Vec<IconRender>,
    pub alerts: Vec<AlertRender>,
    /// Wall-clock milliseconds since the engine's previous evaluation,
    /// for the renderer's own interpolation.
    pub elapsed_ms: u64,
}

/// The per-session ability-state engine.
pub struct HudEngine {
    registry: PresetRegistry,
    resolver: ActionResolver,
    settings: EngineSettings,
    preset: Option<JobPreset>,
    last_eval: Option<Instant>,
}

impl HudEngine {
    pub fn new(registry: PresetRegistry, settings: EngineSettings) -> Self {
        Self::with_resolver(registry, settings, ActionResolver::new())
    }

    pub fn with_resolver(
        registry: PresetRegistry,
        settings: EngineSettings,
        resolver: ActionResolver,
    ) -> Self {
        Self {
            registry,
            resolver,
            settings,
            preset: None,
            last_eval: None,
        }
    }

    /// Read-only preset access for the configuration collaborator.
    pub fn registry(&self) -> &PresetRegistry {
        &self.registry
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Discard all transient per-icon/per-alert state (logout, module
    /// disable). The next evaluation rebuilds from scratch.
    pub fn reset(&mut self) {
        self.preset = None;
        self.last_eval = None;
    }

    /// Evaluate one frame at the current instant.
    pub fn evaluate(&mut self, provider: &dyn GameDataProvider) -> HudFrame {
        self.evaluate_at(Instant::now(), provider)
    }

    /// Evaluate one frame at an explicit instant.
    pub fn evaluate_at(&mut self, now: Instant, provider: &dyn GameDataProvider) -> HudFrame {
        let job = provider.player_job();
        let level = provider.player_level();

        let stale = match &self.preset {
            Some(preset) => preset.job != job || preset.level != level,
            None => true,
        };
        if stale {
            // Drop the previous preset before building the new one so any
            // in-flight animation state dies with it
            self.preset = None;
            tracing::info!(?job, level, "building job preset");
            self.preset = Some(self.registry.build(job, level));
        }

        let elapsed_ms = self
            .last_eval
            .map(|previous| now.duration_since(previous).as_millis() as u64)
            .unwrap_or(0);
        self.last_eval = Some(now);

        let in_combat = provider.is_in_combat();

        let mut icons = Vec::new();
        let mut alerts = Vec::new();

        let Some(preset) = self.preset.as_mut() else {
            return HudFrame {
                icons,
                alerts,
                elapsed_ms,
            };
        };

        for bar in &mut preset.bars {
            for icon in &mut bar.icons {
                let frame = icon.evaluate(provider, &mut self.resolver, &self.settings, level);

                // Actions the character has not unlocked yet stay off the
                // bar entirely; a missing descriptor only blanks the
                // texture and must not take the icon's siblings with it
                let descriptor = provider.action_descriptor(frame.resolved_action);
                if let Some(descriptor) = descriptor
                    && descriptor.required_level > level
                {
                    continue;
                }

                icons.push(IconRender {
                    bar: bar.id.clone(),
                    icon: icon.config().id.clone(),
                    texture: descriptor.map(|d| d.icon_id),
                    state: frame.state,
                    transition: frame.transition,
                    duration: frame.duration,
                    count: frame.count,
                    glow: frame.glow,
                });
            }
        }

        let ctx = EvalContext {
            provider,
            level,
            in_combat,
        };
        for alert in &mut preset.alerts {
            let frame = alert.evaluate(&ctx, now, elapsed_ms, &self.settings);
            alerts.push(AlertRender {
                alert: alert.config().id.clone(),
                visible: frame.visible,
                transition: frame.transition,
                duration: frame.duration,
            });
        }

        HudFrame {
            icons,
            alerts,
            elapsed_ms,
        }
    }
}
