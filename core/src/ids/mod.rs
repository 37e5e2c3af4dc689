//! Game action and status ids referenced by the built-in presets.
//!
//! Ids are stable across patches; the catalog resolves them to icons and
//! level requirements at runtime.

pub mod action_id {
    // ─── Vanguard ───────────────────────────────────────────────────────────
    pub const IRONCLAD_BASTION: u32 = 11001;
    pub const SHIELD_SURGE: u32 = 11002;
    pub const RETALIATE: u32 = 11003;
    pub const BREAKWATER: u32 = 11010;

    // ─── Oracle ─────────────────────────────────────────────────────────────
    pub const VIAL_INFUSION: u32 = 12001;
    pub const RENEWING_GRACE: u32 = 12002;
    pub const SANCTUARY_WARD: u32 = 12003;
    pub const HEALING_BURST: u32 = 12004;
    /// Replaces Healing Burst at level 64.
    pub const GREATER_HEALING_BURST: u32 = 12014;

    // ─── Duelist ────────────────────────────────────────────────────────────
    pub const CROSS_SLASH: u32 = 13001;
    pub const RIPOSTE: u32 = 13002;
    pub const SEALBREAKER: u32 = 13003;

    // ─── Shadowblade ────────────────────────────────────────────────────────
    pub const SHADOW_STRIKE: u32 = 14001;
    /// Replaces Shadow Strike at level 72.
    pub const UMBRAL_STRIKE: u32 = 14011;
    pub const VEIL: u32 = 14002;
    pub const AMBUSH: u32 = 14003;

    // ─── Ranger ─────────────────────────────────────────────────────────────
    pub const QUICK_NOCK: u32 = 15001;
    /// Replaces Quick Nock at level 76.
    pub const STORM_NOCK: u32 = 15011;
    pub const PIERCING_ARROW: u32 = 15002;
    pub const FALCONS_EYE: u32 = 15003;

    // ─── Thaumaturge ────────────────────────────────────────────────────────
    pub const AETHER_BOLT: u32 = 16001;
    pub const AETHER_SURGE: u32 = 16002;
    pub const AETHER_WELL: u32 = 16003;

    // ─── Role actions ───────────────────────────────────────────────────────
    pub const RAMPART: u32 = 17001;
    pub const PROVOKE: u32 = 17002;
    pub const SHIELD_BASH: u32 = 17003;
    pub const QUICKEN: u32 = 17011;
    pub const PURIFY: u32 = 17012;
    pub const BLUR: u32 = 17021;
    pub const TRIP: u32 = 17022;
    pub const RECUPERATE: u32 = 17031;
    pub const SUPPRESSING_VOLLEY: u32 = 17032;
    pub const MANA_SHELL: u32 = 17041;
    pub const SILENCE_SIGIL: u32 = 17042;
}

pub mod status_id {
    // ─── Job buffs ──────────────────────────────────────────────────────────
    pub const FORTIFIED: u32 = 21002;
    pub const RENEWING_GRACE_HOT: u32 = 22002;
    pub const SANCTUARY: u32 = 22003;
    pub const KEEN_EDGE: u32 = 23001;
    pub const VEILED: u32 = 24002;
    pub const FALCONS_FOCUS: u32 = 25003;
    pub const SURGING_AETHER: u32 = 26002;

    // ─── Crowd control ──────────────────────────────────────────────────────
    pub const STUNNED: u32 = 29001;
    pub const SILENCED: u32 = 29002;
    pub const TERRIFIED: u32 = 29003;
}
