//! Built-in job presets.
//!
//! The declarative composition root: given a job, build the ordered bars
//! and alerts that the engine evaluates each frame. Composition is
//! two-stage and table-driven: a per-job table with explicit ability ids
//! and arrangement, then one role-generic utility bar appended last (jobs
//! sharing a role share it verbatim), then alerts that apply regardless of
//! job. There is no preset inheritance; a job's contribution is data.
//!
//! A preset is rebuilt from scratch whenever the job or level changes:
//! nearly every icon and alert is job-specific, so partial reuse across a
//! job change is explicitly disallowed. Dropping the old `JobPreset` is
//! the disposal; all transient animation state lives inside it.

use vigil_types::{
    AlertConfig, BarConfig, CombatGate, GlowConfig, GlowSource, IconConfig, Job, PowerType,
    ResourceGate, ResourceRequirement, ResourceRule, Role, StackRule, StatusGate, StatusTrack,
    UnitSelector,
};

use crate::alerts::AuraAlert;
use crate::conditions::{Condition, CustomPredicate};
use crate::gauge;
use crate::icons::Icon;
use crate::ids::{action_id, status_id};

/// An ordered run of live icons.
#[derive(Debug)]
pub struct Bar {
    pub id: String,
    pub icons: Vec<Icon>,
}

impl Bar {
    fn from_config(config: BarConfig) -> Self {
        Self {
            id: config.id,
            icons: config.icons.into_iter().map(Icon::new).collect(),
        }
    }
}

/// Everything the engine evaluates for one job at one level.
#[derive(Debug)]
pub struct JobPreset {
    pub job: Job,
    pub level: u8,
    pub bars: Vec<Bar>,
    pub alerts: Vec<AuraAlert>,
}

fn icon(id: &str, action: u32) -> IconConfig {
    IconConfig {
        id: id.into(),
        action_id: action,
        status: None,
        resource: None,
        glow: GlowConfig::default(),
        show_charges: true,
    }
}

fn glow_on_status(ids: Vec<u32>) -> GlowConfig {
    GlowConfig {
        source: GlowSource::Status(ids),
        regardless_of_state: false,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Job tables
// ═══════════════════════════════════════════════════════════════════════════

fn job_bars(job: Job) -> Vec<BarConfig> {
    match job {
        Job::Vanguard => vec![BarConfig {
            id: "vanguard_defensives".into(),
            icons: vec![
                icon("vanguard_ironclad_bastion", action_id::IRONCLAD_BASTION),
                IconConfig {
                    glow: glow_on_status(vec![status_id::FORTIFIED]),
                    ..icon("vanguard_shield_surge", action_id::SHIELD_SURGE)
                },
                icon("vanguard_retaliate", action_id::RETALIATE),
                icon("vanguard_breakwater", action_id::BREAKWATER),
            ],
        }],
        Job::Oracle => vec![BarConfig {
            id: "oracle_core".into(),
            icons: vec![
                IconConfig {
                    resource: Some(ResourceRequirement {
                        power: PowerType::Vials,
                        minimum: 1,
                    }),
                    ..icon("oracle_vial_infusion", action_id::VIAL_INFUSION)
                },
                IconConfig {
                    // The HoT's remaining time doubles as the icon countdown
                    status: Some(StatusTrack {
                        ids: vec![status_id::RENEWING_GRACE_HOT],
                        unit: UnitSelector::Target,
                        own_only: true,
                        prioritized: false,
                        as_cooldown: true,
                    }),
                    ..icon("oracle_renewing_grace", action_id::RENEWING_GRACE)
                },
                icon("oracle_sanctuary_ward", action_id::SANCTUARY_WARD),
                icon("oracle_healing_burst", action_id::HEALING_BURST),
            ],
        }],
        Job::Duelist => vec![BarConfig {
            id: "duelist_offensives".into(),
            icons: vec![
                icon("duelist_cross_slash", action_id::CROSS_SLASH),
                IconConfig {
                    glow: GlowConfig {
                        source: GlowSource::Highlight,
                        regardless_of_state: false,
                    },
                    ..icon("duelist_riposte", action_id::RIPOSTE)
                },
                IconConfig {
                    resource: Some(ResourceRequirement {
                        power: PowerType::Seals,
                        minimum: 3,
                    }),
                    ..icon("duelist_sealbreaker", action_id::SEALBREAKER)
                },
            ],
        }],
        Job::Shadowblade => vec![BarConfig {
            id: "shadowblade_offensives".into(),
            icons: vec![
                icon("shadowblade_shadow_strike", action_id::SHADOW_STRIKE),
                IconConfig {
                    glow: GlowConfig {
                        source: GlowSource::Status(vec![status_id::VEILED]),
                        regardless_of_state: true,
                    },
                    ..icon("shadowblade_veil", action_id::VEIL)
                },
                icon("shadowblade_ambush", action_id::AMBUSH),
            ],
        }],
        Job::Ranger => vec![BarConfig {
            id: "ranger_core".into(),
            icons: vec![
                icon("ranger_quick_nock", action_id::QUICK_NOCK),
                icon("ranger_piercing_arrow", action_id::PIERCING_ARROW),
                IconConfig {
                    glow: glow_on_status(vec![status_id::FALCONS_FOCUS]),
                    ..icon("ranger_falcons_eye", action_id::FALCONS_EYE)
                },
            ],
        }],
        Job::Thaumaturge => vec![BarConfig {
            id: "thaumaturge_core".into(),
            icons: vec![
                icon("thaumaturge_aether_bolt", action_id::AETHER_BOLT),
                IconConfig {
                    resource: Some(ResourceRequirement {
                        power: PowerType::Aether,
                        minimum: 50,
                    }),
                    ..icon("thaumaturge_aether_surge", action_id::AETHER_SURGE)
                },
                icon("thaumaturge_aether_well", action_id::AETHER_WELL),
            ],
        }],
    }
}

fn role_bar(role: Role) -> BarConfig {
    let (id, actions): (&str, &[(&str, u32)]) = match role {
        Role::Tank => (
            "tank_utilities",
            &[
                ("role_rampart", action_id::RAMPART),
                ("role_provoke", action_id::PROVOKE),
                ("role_shield_bash", action_id::SHIELD_BASH),
            ],
        ),
        Role::Healer => (
            "healer_utilities",
            &[
                ("role_quicken", action_id::QUICKEN),
                ("role_purify", action_id::PURIFY),
            ],
        ),
        Role::Melee => (
            "melee_utilities",
            &[
                ("role_blur", action_id::BLUR),
                ("role_trip", action_id::TRIP),
            ],
        ),
        Role::Ranged => (
            "ranged_utilities",
            &[
                ("role_recuperate", action_id::RECUPERATE),
                ("role_suppressing_volley", action_id::SUPPRESSING_VOLLEY),
            ],
        ),
        Role::Caster => (
            "caster_utilities",
            &[
                ("role_mana_shell", action_id::MANA_SHELL),
                ("role_silence_sigil", action_id::SILENCE_SIGIL),
            ],
        ),
    };

    BarConfig {
        id: id.into(),
        icons: actions
            .iter()
            .map(|(icon_id, action)| icon(icon_id, *action))
            .collect(),
    }
}

fn job_alert_configs(job: Job) -> Vec<AlertConfig> {
    match job {
        Job::Vanguard => vec![AlertConfig {
            id: "vanguard_unmitigated".into(),
            combat: CombatGate::InCombatOnly,
            status: Some(StatusGate {
                ids: vec![status_id::FORTIFIED],
                unit: UnitSelector::Player,
                own_only: true,
                stacks: StackRule::Any,
                invert: true,
            }),
            resource: None,
            estimated_duration_secs: None,
            show_duration: false,
        }],
        Job::Oracle => vec![AlertConfig {
            id: "oracle_sanctuary".into(),
            combat: CombatGate::Always,
            status: Some(StatusGate {
                ids: vec![status_id::SANCTUARY],
                unit: UnitSelector::Player,
                own_only: true,
                stacks: StackRule::Any,
                invert: false,
            }),
            resource: None,
            estimated_duration_secs: Some(15.0),
            show_duration: true,
        }],
        Job::Duelist => vec![AlertConfig {
            id: "duelist_seals_primed".into(),
            combat: CombatGate::InCombatOnly,
            status: None,
            resource: None,
            estimated_duration_secs: None,
            show_duration: false,
        }],
        Job::Thaumaturge => vec![AlertConfig {
            id: "thaumaturge_aether_capped".into(),
            combat: CombatGate::InCombatOnly,
            status: None,
            resource: Some(ResourceGate {
                power: PowerType::Aether,
                rule: ResourceRule::AtLeast(80),
            }),
            estimated_duration_secs: None,
            show_duration: false,
        }],
        Job::Shadowblade | Job::Ranger => vec![],
    }
}

fn generic_alert_configs() -> Vec<AlertConfig> {
    // Major crowd control on the local player, whoever applied it
    vec![AlertConfig {
        id: "crowd_controlled".into(),
        combat: CombatGate::InCombatOnly,
        status: Some(StatusGate {
            ids: vec![status_id::STUNNED, status_id::SILENCED, status_id::TERRIFIED],
            unit: UnitSelector::Player,
            own_only: false,
            stacks: StackRule::Any,
            invert: false,
        }),
        resource: None,
        estimated_duration_secs: Some(5.0),
        show_duration: true,
    }]
}

fn build_alert(config: AlertConfig) -> AuraAlert {
    // Custom predicates are attached here; they are behavior, not config,
    // and never serialize
    let seals_primed = config.id == "duelist_seals_primed";
    let alert = AuraAlert::new(config);
    if seals_primed {
        alert.with_condition(Condition::Custom {
            predicate: CustomPredicate::new(|ctx| {
                let snap = gauge::read(ctx.provider, PowerType::Seals, ctx.level);
                !snap.is_locked() && snap.current == snap.max
            }),
            invert: false,
        })
    } else {
        alert
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Registry
// ═══════════════════════════════════════════════════════════════════════════

/// Builds presets for the engine and enumerates them for the editor.
///
/// Constructed once per session and passed in explicitly; there are no
/// process-wide statics behind it.
#[derive(Debug, Default)]
pub struct PresetRegistry;

impl PresetRegistry {
    pub fn new() -> Self {
        Self
    }

    /// Jobs with built-in presets, in display order.
    pub fn jobs(&self) -> &'static [Job] {
        &Job::ALL
    }

    /// Read-only bar configuration for editor display. Job bars first,
    /// role-generic bar last, the same order `build` uses.
    pub fn bar_configs(&self, job: Job) -> Vec<BarConfig> {
        let mut bars = job_bars(job);
        bars.push(role_bar(job.role()));
        bars
    }

    /// Read-only alert configuration for editor display.
    pub fn alert_configs(&self, job: Job) -> Vec<AlertConfig> {
        let mut alerts = job_alert_configs(job);
        alerts.extend(generic_alert_configs());
        alerts
    }

    /// Build a fresh preset. The caller drops any previous preset
    /// wholesale; nothing is carried over.
    pub fn build(&self, job: Job, level: u8) -> JobPreset {
        let bars = self.bar_configs(job).into_iter().map(Bar::from_config).collect();
        let alerts = self.alert_configs(job).into_iter().map(build_alert).collect();

        JobPreset {
            job,
            level,
            bars,
            alerts,
        }
    }
}
