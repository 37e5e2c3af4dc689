//! Status (buff/debuff) matching.
//!
//! Finds one instance on a unit under the configured source and priority
//! rules. A unit that cannot be resolved (no target selected) yields
//! `None`, never an error; that is a routine frame.

use vigil_types::UnitSelector;

use crate::game_data::{GameDataProvider, StatusInstance, UNIT_SCAN_ORDER, UnitRole};

fn resolve_unit(provider: &dyn GameDataProvider, role: UnitRole) -> Option<u64> {
    match role {
        UnitRole::Player => Some(provider.local_unit()),
        other => provider.unit(other),
    }
}

fn find_on_unit(
    provider: &dyn GameDataProvider,
    ids: &[u32],
    unit_id: u64,
    own_only: bool,
    prioritized: bool,
) -> Option<StatusInstance> {
    let local = provider.local_unit();
    let list = provider.status_list(unit_id);

    let mut best: Option<(usize, StatusInstance)> = None;
    for instance in list {
        if own_only && instance.source_unit_id != local {
            continue;
        }
        let Some(candidate_index) = ids.iter().position(|id| *id == instance.status_id) else {
            continue;
        };
        if !prioritized {
            // First match in the unit's own list order wins
            return Some(instance);
        }
        // Candidate-list index expresses priority, not occurrence order
        match best {
            Some((best_index, _)) if best_index <= candidate_index => {}
            _ => best = Some((candidate_index, instance)),
        }
    }
    best.map(|(_, instance)| instance)
}

/// Find a matching status instance.
///
/// With `UnitSelector::Any`, units are scanned in the fixed order self,
/// target, target-of-target, focus, and the first unit that yields a match
/// wins. With `prioritized`, the unit's status list is scanned once and
/// the match with the lowest candidate-list index is kept.
pub fn find_status(
    provider: &dyn GameDataProvider,
    ids: &[u32],
    unit: UnitSelector,
    own_only: bool,
    prioritized: bool,
) -> Option<StatusInstance> {
    if ids.is_empty() {
        return None;
    }

    let roles: &[UnitRole] = match unit {
        UnitSelector::Player => &[UnitRole::Player],
        UnitSelector::Target => &[UnitRole::Target],
        UnitSelector::TargetOfTarget => &[UnitRole::TargetOfTarget],
        UnitSelector::Focus => &[UnitRole::Focus],
        UnitSelector::Any => &UNIT_SCAN_ORDER,
    };

    roles.iter().find_map(|role| {
        let unit_id = resolve_unit(provider, *role)?;
        find_on_unit(provider, ids, unit_id, own_only, prioritized)
    })
}
