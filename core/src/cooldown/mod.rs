//! Cooldown and charge arithmetic.
//!
//! The game reports recast timers as if the character were at the level
//! cap, while the number of charges an action holds varies with level. The
//! raw recast value scales with the charge count, so everything here is
//! corrected by the ratio of current-level charges to cap charges before
//! any per-charge math happens.

use crate::game_data::{GameDataProvider, MAX_LEVEL};

/// Structured view of an action's recast state at one instant.
///
/// Invariants: `charges_current <= charges_max`; whenever
/// `cooldown_per_charge > 0`, `0 <= cooldown_remaining <
/// cooldown_per_charge`; a zero `cooldown_total` means every other timing
/// field is zero and all charges are held.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CooldownSnapshot {
    pub charges_max: u8,
    pub charges_current: u8,
    /// Seconds for one charge to regenerate.
    pub cooldown_per_charge: f32,
    /// Seconds for every charge to regenerate, level-adjusted.
    pub cooldown_total: f32,
    pub cooldown_total_elapsed: f32,
    /// Seconds until the next charge is regained.
    pub cooldown_remaining: f32,
    pub cooldown_total_remaining: f32,
}

impl CooldownSnapshot {
    /// Snapshot for an action with no cooldown in effect.
    fn ready(charges_max: u8) -> Self {
        Self {
            charges_max,
            charges_current: charges_max,
            ..Default::default()
        }
    }

    /// True while at least one charge is still regenerating.
    pub fn recharging(&self) -> bool {
        self.cooldown_remaining > 0.0
    }
}

/// Compute the cooldown snapshot for a resolved action id.
pub fn snapshot(provider: &dyn GameDataProvider, action_id: u32, level: u8) -> CooldownSnapshot {
    let total_raw = provider.recast_total(action_id);
    let elapsed_raw = provider.recast_elapsed(action_id);
    let charges_at_cap = provider.max_charges(action_id, MAX_LEVEL).max(1);
    let mut charges_max = provider.max_charges(action_id, level).max(1);

    // The data source is expected to never report more charges below the
    // cap than at it; clamp rather than produce charges > max if it does.
    if charges_max > charges_at_cap {
        tracing::warn!(
            action_id,
            charges_max,
            charges_at_cap,
            "charge count at current level exceeds level-cap count, clamping"
        );
        charges_max = charges_at_cap;
    }

    let charges_mod = if charges_max == charges_at_cap {
        1.0
    } else {
        charges_max as f32 / charges_at_cap as f32
    };

    let cooldown_total = total_raw * charges_mod;
    if cooldown_total <= 0.0 {
        // Passive or no-cooldown action
        return CooldownSnapshot::ready(charges_max);
    }

    let cooldown_per_charge = cooldown_total / charges_max as f32;
    // Raw elapsed can exceed the level-adjusted total when the charge
    // counts differ, so clamp before deriving anything from it.
    let cooldown_total_elapsed = elapsed_raw.min(cooldown_total);
    let cooldown_total_remaining = cooldown_total - cooldown_total_elapsed;
    let cooldown_remaining = cooldown_total_remaining % cooldown_per_charge;
    let charges_current = if elapsed_raw > 0.0 {
        ((cooldown_total_elapsed / cooldown_per_charge).floor() as u8).min(charges_max)
    } else {
        charges_max
    };

    CooldownSnapshot {
        charges_max,
        charges_current,
        cooldown_per_charge,
        cooldown_total,
        cooldown_total_elapsed,
        cooldown_remaining,
        cooldown_total_remaining,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_provider::FakeProvider;

    fn make_provider(total: f32, elapsed: f32, charges: u8) -> FakeProvider {
        let mut provider = FakeProvider::default();
        provider.recasts.insert(1, (total, elapsed));
        provider.charges.insert((1, MAX_LEVEL), charges);
        provider.charges.insert((1, provider.level), charges);
        provider
    }

    #[test]
    fn elapsed_beyond_total_clamps_to_fully_charged() {
        let provider = make_provider(30.0, 40.0, 3);
        let snap = snapshot(&provider, 1, MAX_LEVEL);

        assert_eq!(snap.cooldown_per_charge, 10.0);
        assert_eq!(snap.cooldown_total_elapsed, 30.0);
        assert_eq!(snap.charges_current, 3);
        assert_eq!(snap.cooldown_remaining, 0.0);
        assert!(!snap.recharging());
    }

    #[test]
    fn partial_elapsed_splits_into_charges_and_remainder() {
        let provider = make_provider(30.0, 12.0, 3);
        let snap = snapshot(&provider, 1, MAX_LEVEL);

        assert_eq!(snap.cooldown_total_elapsed, 12.0);
        assert_eq!(snap.charges_current, 1);
        assert_eq!(snap.cooldown_total_remaining, 18.0);
        // Next charge completes at t=20: 8 s away
        assert_eq!(snap.cooldown_remaining, 8.0);
        assert!(snap.cooldown_remaining < snap.cooldown_per_charge);
    }

    #[test]
    fn zero_cooldown_short_circuits_to_ready() {
        let provider = make_provider(0.0, 0.0, 2);
        let snap = snapshot(&provider, 1, MAX_LEVEL);

        assert_eq!(snap.charges_current, snap.charges_max);
        assert_eq!(snap.cooldown_remaining, 0.0);
        assert_eq!(snap.cooldown_total, 0.0);
        assert_eq!(snap.cooldown_total_remaining, 0.0);
    }

    #[test]
    fn idle_recast_reports_full_charges() {
        let provider = make_provider(30.0, 0.0, 3);
        let snap = snapshot(&provider, 1, MAX_LEVEL);

        assert_eq!(snap.charges_current, 3);
        assert_eq!(snap.cooldown_remaining, 0.0);
    }

    #[test]
    fn below_cap_charge_count_scales_the_total() {
        let mut provider = FakeProvider::default();
        provider.level = 70;
        // Two charges at cap, one at level 70; the raw 60 s total scales to 30 s
        provider.recasts.insert(1, (60.0, 40.0));
        provider.charges.insert((1, MAX_LEVEL), 2);
        provider.charges.insert((1, 70), 1);

        let snap = snapshot(&provider, 1, 70);
        assert_eq!(snap.cooldown_total, 30.0);
        assert_eq!(snap.cooldown_per_charge, 30.0);
        // Raw elapsed (40) exceeds the adjusted total (30) and is clamped
        assert_eq!(snap.cooldown_total_elapsed, 30.0);
        assert_eq!(snap.charges_current, 1);
    }

    #[test]
    fn charge_count_above_cap_is_clamped() {
        let mut provider = FakeProvider::default();
        provider.level = 70;
        provider.recasts.insert(1, (60.0, 10.0));
        provider.charges.insert((1, MAX_LEVEL), 2);
        provider.charges.insert((1, 70), 5);

        let snap = snapshot(&provider, 1, 70);
        assert_eq!(snap.charges_max, 2);
        assert!(snap.charges_current <= snap.charges_max);
    }

    #[test]
    fn remaining_decays_monotonically_with_increasing_elapsed() {
        let mut last_total_remaining = f32::INFINITY;
        for elapsed in [0.0, 3.0, 9.0, 15.0, 29.0, 30.0, 45.0] {
            let provider = make_provider(30.0, elapsed, 3);
            let snap = snapshot(&provider, 1, MAX_LEVEL);
            assert!(snap.cooldown_total_remaining <= last_total_remaining);
            assert!(snap.charges_current <= snap.charges_max);
            if snap.cooldown_per_charge > 0.0 {
                assert!(snap.cooldown_remaining >= 0.0);
                assert!(snap.cooldown_remaining < snap.cooldown_per_charge);
            }
            last_total_remaining = snap.cooldown_total_remaining;
        }
    }
}
