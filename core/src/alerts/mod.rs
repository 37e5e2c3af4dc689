//! Per-alert state machine.
//!
//! An alert is visible while every attached condition passes. Transitions
//! drive the renderer's show/hide animations, with one correction: when
//! the frame loop itself was suspended (loading screen, suspend/resume),
//! a hide computed against the stale start time would visibly stick, so a
//! pass→fail transition after a long gap snaps instead of animating.

use std::time::Instant;

use vigil_types::AlertConfig;

use crate::conditions::{Condition, EvalContext};
use crate::settings::EngineSettings;
use crate::status;

/// One-shot visibility change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertTransition {
    Shown,
    Hidden {
        /// Skip the hide animation (frame gap detected).
        snap: bool,
    },
}

/// Per-frame output for one alert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertFrame {
    pub visible: bool,
    pub transition: Option<AlertTransition>,
    /// Remaining duration to display, `None` renders blank.
    pub duration: Option<f32>,
}

/// One condition-gated alert: configuration, the compiled condition chain,
/// and the visibility state needed for transition detection.
#[derive(Debug)]
pub struct AuraAlert {
    config: AlertConfig,
    conditions: Vec<Condition>,
    visible: bool,
    visible_since: Option<Instant>,
}

impl AuraAlert {
    pub fn new(config: AlertConfig) -> Self {
        let conditions = Condition::from_alert_config(&config);
        Self {
            config,
            conditions,
            visible: false,
            visible_since: None,
        }
    }

    /// Attach an extra condition (custom predicates from presets).
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn config(&self) -> &AlertConfig {
        &self.config
    }

    pub fn evaluate(
        &mut self,
        ctx: &EvalContext,
        now: Instant,
        elapsed_ms: u64,
        settings: &EngineSettings,
    ) -> AlertFrame {
        let pass = self.conditions.iter().all(|condition| condition.evaluate(ctx));

        let transition = if pass && !self.visible {
            self.visible = true;
            self.visible_since = Some(now);
            Some(AlertTransition::Shown)
        } else if !pass && self.visible {
            self.visible = false;
            self.visible_since = None;
            Some(AlertTransition::Hidden {
                snap: elapsed_ms > settings.hysteresis_ms,
            })
        } else {
            None
        };

        let duration = if self.visible && self.config.show_duration {
            self.display_duration(ctx, now, settings)
        } else {
            None
        };

        AlertFrame {
            visible: self.visible,
            transition,
            duration,
        }
    }

    /// Remaining duration for display.
    ///
    /// The authoritative value is the tracked status's remaining time.
    /// Shortly after an effect becomes active the game has not ticked it
    /// yet (negative sentinel), so for a grace window after becoming
    /// visible an estimated duration counts down instead; past the window
    /// the readout goes blank rather than lying.
    fn display_duration(
        &self,
        ctx: &EvalContext,
        now: Instant,
        settings: &EngineSettings,
    ) -> Option<f32> {
        if let Some(gate) = &self.config.status
            && !gate.invert
            && let Some(instance) =
                status::find_status(ctx.provider, &gate.ids, gate.unit, gate.own_only, false)
            && let Some(remaining) = instance.remaining()
        {
            return Some(remaining);
        }

        let estimated = self.config.estimated_duration_secs?;
        let since_visible = now.duration_since(self.visible_since?).as_secs_f32();
        (since_visible <= settings.duration_grace_secs).then(|| (estimated - since_visible).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::engine::test_provider::FakeProvider;
    use crate::game_data::StatusInstance;
    use vigil_types::{CombatGate, StackRule, StatusGate, UnitSelector};

    fn make_alert(config: AlertConfig) -> AuraAlert {
        AuraAlert::new(config)
    }

    fn make_config() -> AlertConfig {
        AlertConfig {
            id: "test_alert".into(),
            combat: CombatGate::Always,
            status: None,
            resource: None,
            estimated_duration_secs: None,
            show_duration: true,
        }
    }

    fn status_gate(id: u32) -> StatusGate {
        StatusGate {
            ids: vec![id],
            unit: UnitSelector::Player,
            own_only: true,
            stacks: StackRule::Any,
            invert: false,
        }
    }

    fn ctx<'a>(provider: &'a FakeProvider, in_combat: bool) -> EvalContext<'a> {
        EvalContext {
            provider,
            level: provider.level,
            in_combat,
        }
    }

    fn own_status(provider: &mut FakeProvider, status_id: u32, remaining: f32) {
        let local = provider.local_unit;
        provider.statuses.entry(local).or_default().push(StatusInstance {
            status_id,
            source_unit_id: local,
            stacks: 1,
            remaining_secs: remaining,
        });
    }

    #[test]
    fn combat_gate_vetoes_everything_else() {
        let settings = EngineSettings::default();
        let mut config = make_config();
        config.combat = CombatGate::OutOfCombatOnly;
        config.status = Some(status_gate(100));
        let mut alert = make_alert(config);

        let mut provider = FakeProvider::default();
        own_status(&mut provider, 100, 10.0);

        // Status gate passes, combat gate does not
        let frame = alert.evaluate(&ctx(&provider, true), Instant::now(), 16, &settings);
        assert!(!frame.visible);
    }

    #[test]
    fn show_and_hide_transitions_fire_once() {
        let settings = EngineSettings::default();
        let mut config = make_config();
        config.status = Some(status_gate(100));
        let mut alert = make_alert(config);

        let mut provider = FakeProvider::default();
        own_status(&mut provider, 100, 10.0);
        let now = Instant::now();

        let frame = alert.evaluate(&ctx(&provider, true), now, 16, &settings);
        assert_eq!(frame.transition, Some(AlertTransition::Shown));

        let frame = alert.evaluate(&ctx(&provider, true), now, 16, &settings);
        assert!(frame.transition.is_none());
        assert!(frame.visible);

        let provider = FakeProvider::default();
        let frame = alert.evaluate(&ctx(&provider, true), now, 16, &settings);
        assert_eq!(frame.transition, Some(AlertTransition::Hidden { snap: false }));
        assert!(!frame.visible);
    }

    #[test]
    fn long_frame_gap_snaps_the_hide() {
        let settings = EngineSettings::default();
        let mut config = make_config();
        config.status = Some(status_gate(100));
        let mut alert = make_alert(config);

        let mut provider = FakeProvider::default();
        own_status(&mut provider, 100, 10.0);
        let now = Instant::now();
        alert.evaluate(&ctx(&provider, true), now, 16, &settings);

        // 2.5 s since the previous evaluation: loading screen territory
        let provider = FakeProvider::default();
        let frame = alert.evaluate(&ctx(&provider, true), now, 2500, &settings);
        assert_eq!(frame.transition, Some(AlertTransition::Hidden { snap: true }));
    }

    #[test]
    fn authoritative_duration_comes_from_the_status() {
        let settings = EngineSettings::default();
        let mut config = make_config();
        config.status = Some(status_gate(100));
        let mut alert = make_alert(config);

        let mut provider = FakeProvider::default();
        own_status(&mut provider, 100, 12.5);

        let frame = alert.evaluate(&ctx(&provider, true), Instant::now(), 16, &settings);
        assert_eq!(frame.duration, Some(12.5));
    }

    #[test]
    fn sentinel_duration_falls_back_to_estimate_then_blank() {
        let settings = EngineSettings::default();
        let mut config = make_config();
        config.status = Some(status_gate(100));
        config.estimated_duration_secs = Some(5.0);
        let mut alert = make_alert(config);

        let mut provider = FakeProvider::default();
        own_status(&mut provider, 100, -1.0);
        let shown_at = Instant::now();

        let frame = alert.evaluate(&ctx(&provider, true), shown_at, 16, &settings);
        assert_eq!(frame.duration, Some(5.0));

        // Two seconds in, still within the grace window: estimate counts down
        let later = shown_at + Duration::from_secs(2);
        let frame = alert.evaluate(&ctx(&provider, true), later, 16, &settings);
        let duration = frame.duration.expect("estimate");
        assert!((duration - 3.0).abs() < 0.01);

        // Past the grace window with no authoritative value: blank
        let much_later = shown_at + Duration::from_secs(5);
        let frame = alert.evaluate(&ctx(&provider, true), much_later, 16, &settings);
        assert_eq!(frame.duration, None);
    }

    #[test]
    fn bare_alert_with_custom_condition_only() {
        use crate::conditions::CustomPredicate;

        let settings = EngineSettings::default();
        let mut alert = make_alert(make_config())
            .with_condition(Condition::Custom {
                predicate: CustomPredicate::new(|ctx| ctx.in_combat),
                invert: false,
            });

        let provider = FakeProvider::default();
        let now = Instant::now();
        assert!(alert.evaluate(&ctx(&provider, true), now, 16, &settings).visible);
        assert!(!alert.evaluate(&ctx(&provider, false), now, 16, &settings).visible);
    }
}
