//! Scripted game data provider for tests.
//!
//! Every field is plain data the test sets up front; unknown actions get a
//! synthesized descriptor so tests only spell out what they care about.

use hashbrown::{HashMap, HashSet};

use vigil_types::{Job, PowerType};

use crate::game_data::{
    ActionDescriptor, GameDataProvider, MAX_LEVEL, RawGauge, StatusDescriptor, StatusInstance,
    UnitRole,
};

pub struct FakeProvider {
    pub job: Job,
    pub level: u8,
    pub in_combat: bool,
    pub local_unit: u64,
    pub units: HashMap<UnitRole, u64>,
    pub statuses: HashMap<u64, Vec<StatusInstance>>,
    /// action id -> (recast total, recast elapsed)
    pub recasts: HashMap<u32, (f32, f32)>,
    /// (action id, level) -> max charges; unknown pairs default to 1
    pub charges: HashMap<(u32, u8), u8>,
    /// Hook results; an absent entry means the hook is unavailable
    pub combo_results: HashMap<u32, u32>,
    pub gauges: HashMap<PowerType, RawGauge>,
    pub descriptors: HashMap<u32, ActionDescriptor>,
    pub status_descriptors: HashMap<u32, StatusDescriptor>,
    pub highlighted: HashSet<u32>,
    /// Actions the catalog genuinely does not know
    pub missing_actions: HashSet<u32>,
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self {
            job: Job::Vanguard,
            level: MAX_LEVEL,
            in_combat: false,
            local_unit: 1000,
            units: HashMap::new(),
            statuses: HashMap::new(),
            recasts: HashMap::new(),
            charges: HashMap::new(),
            combo_results: HashMap::new(),
            gauges: HashMap::new(),
            descriptors: HashMap::new(),
            status_descriptors: HashMap::new(),
            highlighted: HashSet::new(),
            missing_actions: HashSet::new(),
        }
    }
}

impl GameDataProvider for FakeProvider {
    fn action_descriptor(&self, action_id: u32) -> Option<ActionDescriptor> {
        if self.missing_actions.contains(&action_id) {
            return None;
        }
        Some(
            self.descriptors
                .get(&action_id)
                .copied()
                .unwrap_or(ActionDescriptor {
                    id: action_id,
                    icon_id: action_id,
                    required_level: 1,
                    is_role_action: false,
                }),
        )
    }

    fn status_descriptor(&self, status_id: u32) -> Option<StatusDescriptor> {
        Some(
            self.status_descriptors
                .get(&status_id)
                .copied()
                .unwrap_or(StatusDescriptor {
                    id: status_id,
                    icon_id: status_id,
                    max_stacks: 1,
                }),
        )
    }

    fn recast_total(&self, action_id: u32) -> f32 {
        self.recasts.get(&action_id).map(|(total, _)| *total).unwrap_or(0.0)
    }

    fn recast_elapsed(&self, action_id: u32) -> f32 {
        self.recasts
            .get(&action_id)
            .map(|(_, elapsed)| *elapsed)
            .unwrap_or(0.0)
    }

    fn max_charges(&self, action_id: u32, level: u8) -> u8 {
        self.charges.get(&(action_id, level)).copied().unwrap_or(1)
    }

    fn resolve_combo_or_upgrade(&self, action_id: u32) -> Option<u32> {
        self.combo_results.get(&action_id).copied()
    }

    fn gauge(&self, power: PowerType) -> Option<RawGauge> {
        self.gauges.get(&power).copied()
    }

    fn status_list(&self, unit_id: u64) -> Vec<StatusInstance> {
        self.statuses.get(&unit_id).cloned().unwrap_or_default()
    }

    fn player_job(&self) -> Job {
        self.job
    }

    fn player_level(&self) -> u8 {
        self.level
    }

    fn local_unit(&self) -> u64 {
        self.local_unit
    }

    fn unit(&self, role: UnitRole) -> Option<u64> {
        match role {
            UnitRole::Player => Some(self.local_unit),
            other => self.units.get(&other).copied(),
        }
    }

    fn is_in_combat(&self) -> bool {
        self.in_combat
    }

    fn is_action_highlighted(&self, action_id: u32) -> bool {
        self.highlighted.contains(&action_id)
    }
}
