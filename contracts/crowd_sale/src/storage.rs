//! # Storage
//!
//! Provides typed helpers over Soroban's two storage tiers used by the sale:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key        | Type         | Description                          |
//! |------------|--------------|--------------------------------------|
//! | `Config`   | `SaleConfig` | Beneficiary and payment token        |
//! | `State`    | `SaleState`  | Deadline, ended flag, total raised   |
//!
//! The owner key lives in [`crate::ownable`].
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                  | Type   | Description                           |
//! |----------------------|--------|---------------------------------------|
//! | `Contribution(addr)` | `i128` | Cumulative amount accepted from addr  |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! Contribution entries are created on first acceptance and never removed.

use soroban_sdk::{contracttype, panic_with_error, Address, Env};

use crate::ownable;
use crate::types::{Sale, SaleConfig, SaleState};
use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Immutable sale configuration (Instance).
    Config,
    /// Mutable sale state (Instance).
    State,
    /// Cumulative accepted amount per contributor (Persistent).
    Contribution(Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn save_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

/// Load the immutable configuration.
/// Panics with `Error::NotInitialized` before `init`.
pub fn load_config(env: &Env) -> SaleConfig {
    let config = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized));
    bump_instance(env);
    config
}

pub fn save_state(env: &Env, state: &SaleState) {
    env.storage().instance().set(&DataKey::State, state);
    bump_instance(env);
}

/// Load the mutable state.
/// Panics with `Error::NotInitialized` before `init`.
pub fn load_state(env: &Env) -> SaleState {
    let state = env
        .storage()
        .instance()
        .get(&DataKey::State)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized));
    bump_instance(env);
    state
}

/// Load the full `Sale` by combining owner, config and state.
pub fn load_sale(env: &Env) -> Sale {
    let config = load_config(env);
    let state = load_state(env);
    Sale {
        owner: ownable::get_owner(env),
        beneficiary: config.beneficiary,
        payment_token: config.payment_token,
        end_time: state.end_time,
        ended: state.ended,
        total_raised: state.total_raised,
    }
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Cumulative amount accepted from `contributor`; 0 if they never contributed.
pub fn get_contribution(env: &Env, contributor: &Address) -> i128 {
    let key = DataKey::Contribution(contributor.clone());
    match env.storage().persistent().get(&key) {
        Some(amount) => {
            bump_persistent(env, &key);
            amount
        }
        None => 0,
    }
}

pub fn set_contribution(env: &Env, contributor: &Address, amount: i128) {
    let key = DataKey::Contribution(contributor.clone());
    env.storage().persistent().set(&key, &amount);
    bump_persistent(env, &key);
}

/// Add `amount` to the ledger entry of `contributor`.
/// Returns the new cumulative amount.
pub fn add_to_contribution(env: &Env, contributor: &Address, amount: i128) -> i128 {
    let current = get_contribution(env, contributor);
    let updated = current
        .checked_add(amount)
        .unwrap_or_else(|| panic_with_error!(env, Error::Overflow));
    set_contribution(env, contributor, updated);
    updated
}
