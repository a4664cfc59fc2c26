//! # Storage
//!
//! Typed helpers over the instance storage entries that make up a campaign:
//!
//! | Key        | Type             | Description                           |
//! |------------|------------------|---------------------------------------|
//! | `Config`   | `CampaignConfig` | Per-round configuration               |
//! | `Active`   | `bool`           | Live-phase flag                       |
//!
//! The contract manages exactly one campaign, replaced in place on reset, so
//! everything lives in instance storage and shares the contract's lifetime.
//! The owner address is not here — it belongs to [`crate::access`] under that
//! module's own key.
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day
//! remaining, on every read or write that goes through these helpers.
//!
//! ## Why split Config and Active?
//!
//! `set_active` and `withdraw_funds` flip the flag without touching the rest
//! of the record. Keeping the flag as its own entry means those writers never
//! rewrite the config, and a torn record (config from one round, flag from
//! another) cannot be produced by any entry point: only `initialize` and
//! `reset_fund` write the config, and both write the flag in the same
//! invocation.

use soroban_sdk::{contracttype, Env};

use crate::types::CampaignConfig;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// Campaign storage keys (instance tier).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Per-round campaign configuration.
    Config,
    /// Whether the campaign is in its live phase.
    Active,
}

// ── Helpers ──────────────────────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Return `true` once a campaign has been initialized.
pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

/// Read the current round's configuration, or `None` before `initialize`.
pub fn config(env: &Env) -> Option<CampaignConfig> {
    bump_instance(env);
    env.storage().instance().get(&DataKey::Config)
}

/// Overwrite the round configuration (initialize / reset).
pub fn set_config(env: &Env, config: &CampaignConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

/// Read the live-phase flag. Defaults to `false` before `initialize`.
pub fn active(env: &Env) -> bool {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Active)
        .unwrap_or(false)
}

/// Write the live-phase flag.
pub fn set_active(env: &Env, active: bool) {
    env.storage().instance().set(&DataKey::Active, &active);
    bump_instance(env);
}
