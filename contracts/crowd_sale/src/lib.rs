//! # Crowd Sale Contract
//!
//! A time-boxed crowd sale escrow. It exposes the single Soroban contract
//! `CrowdSale`, which accepts contributions in one payment token, caps what
//! each contributor may give, and forwards every accepted amount straight to
//! a fixed beneficiary:
//!
//! | Phase        | Entry Point(s)                                   |
//! |--------------|--------------------------------------------------|
//! | Bootstrap    | [`CrowdSale::init`]                              |
//! | Contribution | [`CrowdSale::contribute`]                        |
//! | Owner        | `end_sale`, `extend_sale`, `transfer_ownership`, `renounce_ownership` |
//! | Queries      | `owner`, `proceeds_address`, `contributed`, `sale_ended`, `phase`, ... |
//!
//! ## Architecture
//!
//! Admission decisions are pure and live in [`admission`]. Ownership checks
//! live in [`ownable`]. Storage access is delegated to `storage`. This file
//! holds the entry points: it plans, then applies ledger writes and token
//! transfers together within the one host invocation.
//!
//! ## Contribution flow
//!
//! ```text
//! contributor ──amount──► sale ──accepted──► beneficiary
//!                          └────refund─────► contributor
//! ```
//!
//! The sale holds no balance once `contribute` returns.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, panic_with_error, token, Address, Env};

pub mod admission;
pub mod events;
pub mod ownable;
mod storage;
mod types;

#[cfg(test)]
mod test_events;

pub use types::{
    Admission, Sale, SaleConfig, SalePhase, SaleState, MIN_CONTRIBUTION, TOTAL_CAP, UNIT,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    Unauthorized = 1,
    SaleClosed = 2,
    BelowMinimum = 3,
    CapReached = 4,
    AlreadyInitialized = 5,
    NotInitialized = 6,
    InvalidDeadline = 7,
    Overflow = 8,
    InvalidOwner = 9,
    NoOwner = 10,
}

#[contract]
pub struct CrowdSale;

#[contractimpl]
impl CrowdSale {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Initialise the sale.
    ///
    /// Must be called exactly once immediately after deployment.
    /// Subsequent calls panic with `Error::AlreadyInitialized`.
    ///
    /// - `owner` must sign the transaction.
    /// - `end_time` must lie in the future.
    pub fn init(
        env: Env,
        owner: Address,
        beneficiary: Address,
        payment_token: Address,
        end_time: u64,
    ) {
        owner.require_auth();
        if storage::is_initialized(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }
        if end_time <= env.ledger().timestamp() {
            panic_with_error!(&env, Error::InvalidDeadline);
        }

        ownable::init_owner(&env, &owner);
        storage::save_config(
            &env,
            &SaleConfig {
                beneficiary: beneficiary.clone(),
                payment_token: payment_token.clone(),
            },
        );
        storage::save_state(
            &env,
            &SaleState {
                end_time,
                ended: false,
                total_raised: 0,
            },
        );

        events::emit_sale_opened(&env, owner, beneficiary, payment_token, end_time);
    }

    // ─────────────────────────────────────────────────────────
    // Contributions
    // ─────────────────────────────────────────────────────────

    /// Contribute `amount` of the payment token and return how much was accepted.
    ///
    /// At most the contributor's remaining room under `TOTAL_CAP` is
    /// accepted; the rest is returned to them in the same call.
    ///
    /// Panics with `BelowMinimum`, `SaleClosed` or `CapReached` without any
    /// state change when the request is refused.
    pub fn contribute(env: Env, contributor: Address, amount: i128) -> i128 {
        contributor.require_auth();

        // Sampled once; every check below sees the same instant.
        let now = env.ledger().timestamp();
        let config = storage::load_config(&env);
        let mut state = storage::load_state(&env);
        let already = storage::get_contribution(&env, &contributor);

        let plan = match admission::plan_contribution(now, &state, already, amount) {
            Ok(plan) => plan,
            Err(err) => panic_with_error!(&env, err),
        };

        let total_contributed = storage::add_to_contribution(&env, &contributor, plan.accepted);
        state.total_raised = state
            .total_raised
            .checked_add(plan.accepted)
            .unwrap_or_else(|| panic_with_error!(&env, Error::Overflow));
        storage::save_state(&env, &state);

        let sale = env.current_contract_address();
        let token_client = token::Client::new(&env, &config.payment_token);
        token_client.transfer(&contributor, &sale, &amount);
        token_client.transfer(&sale, &config.beneficiary, &plan.accepted);
        if plan.refund > 0 {
            token_client.transfer(&sale, &contributor, &plan.refund);
        }

        events::emit_contribution(
            &env,
            contributor,
            amount,
            plan.accepted,
            plan.refund,
            total_contributed,
        );

        plan.accepted
    }

    // ─────────────────────────────────────────────────────────
    // Owner controls
    // ─────────────────────────────────────────────────────────

    /// Stop the sale for good. Calling it again is a no-op.
    ///
    /// - `caller` must be the owner.
    pub fn end_sale(env: Env, caller: Address) {
        ownable::require_owner(&env, &caller);

        let mut state = storage::load_state(&env);
        if state.ended {
            return;
        }
        state.ended = true;
        storage::save_state(&env, &state);

        events::emit_sale_ended(&env, caller);
    }

    /// Push the deadline back by `additional_seconds`.
    ///
    /// Works after the deadline has passed, reopening the sale if the new
    /// deadline lies in the future. Cannot reopen a sale stopped by `end_sale`.
    ///
    /// - `caller` must be the owner.
    pub fn extend_sale(env: Env, caller: Address, additional_seconds: u64) {
        ownable::require_owner(&env, &caller);

        let mut state = storage::load_state(&env);
        state.end_time = state
            .end_time
            .checked_add(additional_seconds)
            .unwrap_or_else(|| panic_with_error!(&env, Error::Overflow));
        storage::save_state(&env, &state);

        events::emit_sale_extended(&env, caller, additional_seconds, state.end_time);
    }

    /// Hand ownership to `new_owner`.
    ///
    /// - `caller` must be the owner.
    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) {
        ownable::transfer_ownership(&env, &caller, &new_owner);
    }

    /// Give up ownership for good. Owner controls become unreachable.
    ///
    /// - `caller` must be the owner.
    pub fn renounce_ownership(env: Env, caller: Address) {
        ownable::renounce_ownership(&env, &caller);
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn owner(env: Env) -> Address {
        ownable::require_owner_set(&env)
    }

    pub fn is_owner(env: Env, address: Address) -> bool {
        ownable::is_owner(&env, &address)
    }

    /// Address receiving the proceeds.
    pub fn proceeds_address(env: Env) -> Address {
        storage::load_config(&env).beneficiary
    }

    pub fn payment_token(env: Env) -> Address {
        storage::load_config(&env).payment_token
    }

    /// Cumulative amount accepted from `contributor`.
    pub fn contributed(env: Env, contributor: Address) -> i128 {
        storage::get_contribution(&env, &contributor)
    }

    pub fn sale_ended(env: Env) -> bool {
        storage::load_state(&env).ended
    }

    pub fn end_time(env: Env) -> u64 {
        storage::load_state(&env).end_time
    }

    pub fn total_raised(env: Env) -> i128 {
        storage::load_state(&env).total_raised
    }

    /// Phase of the sale at the current ledger timestamp.
    pub fn phase(env: Env) -> SalePhase {
        let state = storage::load_state(&env);
        admission::phase(env.ledger().timestamp(), state.end_time, state.ended)
    }

    pub fn get_sale(env: Env) -> Sale {
        storage::load_sale(&env)
    }
}
