//! Action identity resolution.
//!
//! Icons are configured with a *nominal* action id; the id actually usable
//! right now depends on the character's level ("this skill is replaced by
//! that skill at level N") and on the game's own combo/upgrade logic.
//!
//! Resolution is two-tier. A static table guarantees a stable,
//! level-accurate answer for the enumerated ids even when third-party
//! combo tooling shadows the game's resolver hook; ids without a table row
//! fall through to the hook, degrading to "no change" when the hook is
//! unavailable.

use hashbrown::HashMap;
use phf::phf_map;
use thiserror::Error;

use crate::game_data::GameDataProvider;
use crate::ids::action_id;

/// Level-upgrade rows, sorted ascending by threshold. The row whose
/// threshold is the highest value ≤ the current level wins; below the
/// first threshold the id is not enumerated and falls through to the hook.
static UPGRADES: phf::Map<u32, &'static [(u8, u32)]> = phf_map! {
    12004u32 => &[
        // Healing Burst
        (1, action_id::HEALING_BURST),
        (64, action_id::GREATER_HEALING_BURST),
    ],
    14001u32 => &[
        // Shadow Strike
        (1, action_id::SHADOW_STRIKE),
        (72, action_id::UMBRAL_STRIKE),
    ],
    15001u32 => &[
        // Quick Nock
        (1, action_id::QUICK_NOCK),
        (76, action_id::STORM_NOCK),
    ],
};

fn pick(rows: &[(u8, u32)], level: u8) -> Option<u32> {
    rows.iter()
        .filter(|(threshold, _)| *threshold <= level)
        .max_by_key(|(threshold, _)| *threshold)
        .map(|(_, resolved)| *resolved)
}

/// A malformed user-supplied upgrade row.
#[derive(Debug, Error)]
pub enum UpgradeTableError {
    #[error("row for action {0} resolves to id 0")]
    ZeroResolvedId(u32),
    #[error("row has nominal id 0")]
    ZeroNominalId,
    #[error("duplicate row for action {nominal} at level {threshold}")]
    Duplicate { nominal: u32, threshold: u8 },
}

/// One user-supplied upgrade row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpgradeRow {
    pub nominal: u32,
    pub threshold: u8,
    pub resolved: u32,
}

impl UpgradeRow {
    fn validate(&self) -> Result<(), UpgradeTableError> {
        if self.nominal == 0 {
            return Err(UpgradeTableError::ZeroNominalId);
        }
        if self.resolved == 0 {
            return Err(UpgradeTableError::ZeroResolvedId(self.nominal));
        }
        Ok(())
    }
}

/// Runtime rows layered on top of the static table.
///
/// Rows are checked as they are added; malformed or duplicate rows are
/// skipped with a logged warning, never fatal.
#[derive(Debug, Default)]
pub struct UpgradeOverrides {
    rows: HashMap<u32, Vec<(u8, u32)>>,
}

impl UpgradeOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add rows. Returns the rows that were skipped.
    pub fn add_rows(&mut self, rows: impl IntoIterator<Item = UpgradeRow>) -> Vec<UpgradeRow> {
        let mut skipped = Vec::new();
        for row in rows {
            match self.add_row(row) {
                Ok(()) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "skipping upgrade override row");
                    skipped.push(row);
                }
            }
        }
        skipped
    }

    fn add_row(&mut self, row: UpgradeRow) -> Result<(), UpgradeTableError> {
        row.validate()?;
        let entries = self.rows.entry(row.nominal).or_default();
        if entries.iter().any(|(threshold, _)| *threshold == row.threshold) {
            return Err(UpgradeTableError::Duplicate {
                nominal: row.nominal,
                threshold: row.threshold,
            });
        }
        entries.push((row.threshold, row.resolved));
        entries.sort_by_key(|(threshold, _)| *threshold);
        Ok(())
    }

    fn lookup(&self, nominal: u32, level: u8) -> Option<u32> {
        self.rows.get(&nominal).and_then(|rows| pick(rows, level))
    }
}

/// Resolves nominal action ids to the level- and combo-adjusted id.
#[derive(Debug, Default)]
pub struct ActionResolver {
    overrides: UpgradeOverrides,
    /// The hook failure is logged once, not every frame.
    hook_warned: bool,
}

impl ActionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overrides(overrides: UpgradeOverrides) -> Self {
        Self {
            overrides,
            hook_warned: false,
        }
    }

    /// Resolve `nominal` for the given level: overrides first, then the
    /// static table, then the game's own resolver; an unavailable hook
    /// degrades to the unresolved id.
    pub fn resolve(&mut self, provider: &dyn GameDataProvider, nominal: u32, level: u8) -> u32 {
        if let Some(resolved) = self.overrides.lookup(nominal, level) {
            return resolved;
        }
        if let Some(rows) = UPGRADES.get(&nominal)
            && let Some(resolved) = pick(rows, level)
        {
            return resolved;
        }
        match provider.resolve_combo_or_upgrade(nominal) {
            Some(resolved) => resolved,
            None => {
                if !self.hook_warned {
                    tracing::warn!(
                        action_id = nominal,
                        "combo/upgrade hook unavailable, using unresolved ids"
                    );
                    self.hook_warned = true;
                }
                nominal
            }
        }
    }
}
