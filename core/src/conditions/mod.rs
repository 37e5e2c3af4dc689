//! Condition evaluation.
//!
//! An alert is gated by a list of conditions that must all pass. The set
//! of condition kinds is closed (status presence, resource threshold,
//! combat state) plus one explicit custom variant carrying a typed
//! delegate, so the evaluator can be tested exhaustively without
//! fabricating arbitrary closures. Unconfigured gates simply never appear
//! in the list, which is how "default to pass" falls out.

use std::fmt;
use std::sync::Arc;

use vigil_types::{AlertConfig, CombatGate, PowerType, ResourceRule, StackRule, UnitSelector};

use crate::game_data::GameDataProvider;
use crate::{gauge, status};

/// Per-frame inputs shared by every condition.
pub struct EvalContext<'a> {
    pub provider: &'a dyn GameDataProvider,
    pub level: u8,
    pub in_combat: bool,
}

/// A user-supplied predicate over the evaluation context.
#[derive(Clone)]
pub struct CustomPredicate(Arc<dyn Fn(&EvalContext) -> bool + Send + Sync>);

impl CustomPredicate {
    pub fn new(predicate: impl Fn(&EvalContext) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(predicate))
    }

    pub fn call(&self, ctx: &EvalContext) -> bool {
        (self.0)(ctx)
    }
}

impl fmt::Debug for CustomPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomPredicate(..)")
    }
}

/// One gate in an alert's pass/fail chain.
#[derive(Debug, Clone)]
pub enum Condition {
    StatusPresent {
        ids: Vec<u32>,
        unit: UnitSelector,
        own_only: bool,
        stacks: StackRule,
        invert: bool,
    },
    Resource {
        power: PowerType,
        rule: ResourceRule,
    },
    Combat(CombatGate),
    Custom {
        predicate: CustomPredicate,
        invert: bool,
    },
}

fn stacks_pass(rule: StackRule, stacks: u8) -> bool {
    match rule {
        StackRule::Any => true,
        StackRule::AtLeast(n) => stacks >= n,
        StackRule::Exactly(n) => stacks == n,
    }
}

fn resource_pass(rule: ResourceRule, current: u16) -> bool {
    match rule {
        ResourceRule::AtLeast(n) => current >= n,
        ResourceRule::Exactly(n) => current == n,
    }
}

impl Condition {
    /// Build the condition list for an alert's configured gates.
    pub fn from_alert_config(config: &AlertConfig) -> Vec<Condition> {
        let mut conditions = Vec::new();
        if config.combat != CombatGate::Always {
            conditions.push(Condition::Combat(config.combat));
        }
        if let Some(gate) = &config.status {
            conditions.push(Condition::StatusPresent {
                ids: gate.ids.clone(),
                unit: gate.unit,
                own_only: gate.own_only,
                stacks: gate.stacks,
                invert: gate.invert,
            });
        }
        if let Some(gate) = &config.resource {
            conditions.push(Condition::Resource {
                power: gate.power,
                rule: gate.rule,
            });
        }
        conditions
    }

    pub fn evaluate(&self, ctx: &EvalContext) -> bool {
        match self {
            Condition::StatusPresent {
                ids,
                unit,
                own_only,
                stacks,
                invert,
            } => {
                let present = status::find_status(ctx.provider, ids, *unit, *own_only, false)
                    .is_some_and(|instance| stacks_pass(*stacks, instance.stacks));
                present != *invert
            }
            Condition::Resource { power, rule } => {
                let snap = gauge::read(ctx.provider, *power, ctx.level);
                resource_pass(*rule, snap.current)
            }
            Condition::Combat(gate) => match gate {
                CombatGate::Always => true,
                CombatGate::InCombatOnly => ctx.in_combat,
                CombatGate::OutOfCombatOnly => !ctx.in_combat,
            },
            Condition::Custom { predicate, invert } => predicate.call(ctx) != *invert,
        }
    }
}
