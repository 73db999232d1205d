//! # Types
//!
//! Shared data structures used across all modules of the crowd sale.
//!
//! ## Design decisions
//!
//! ### Config / State split
//!
//! The sale is internally stored as two separate instance entries:
//!
//! - [`SaleConfig`] — written once at `init`; never mutated.
//! - [`SaleState`] — written on every accepted contribution and by the owner.
//!
//! The public API exposes the reconstructed [`Sale`] struct for convenience.
//!
//! ### Phase as a derived value
//!
//! [`SalePhase`] is never stored. It is recomputed on every request from
//! the ledger timestamp and the stored state (see [`crate::admission::phase`]):
//!
//! ```text
//! Open ──(now >= end_time)──► Expired
//!  ▲                            │
//!  └──(extend_sale past now)────┘
//! Open | Expired ──(end_sale)──► Ended   (terminal)
//! ```

use soroban_sdk::{contracttype, Address};

// ── Sale constants ───────────────────────────────────────────────────

/// One whole unit of the payment token (SAC tokens carry 7 decimals).
pub const UNIT: i128 = 10_000_000;

/// Maximum cumulative amount accepted from a single contributor.
pub const TOTAL_CAP: i128 = 1_000 * UNIT;

/// Smallest amount a single contribution may request.
pub const MIN_CONTRIBUTION: i128 = UNIT / 10;

/// Derived lifecycle phase of the sale.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SalePhase {
    /// Accepting contributions.
    Open,
    /// Deadline passed; the owner may still reopen it with `extend_sale`.
    Expired,
    /// Stopped by the owner. No transition leaves this phase.
    Ended,
}

/// Immutable sale configuration, written once at `init`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleConfig {
    /// Address every accepted contribution is forwarded to.
    pub beneficiary: Address,
    /// SAC token contributions are denominated in.
    pub payment_token: Address,
}

/// Mutable sale state.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleState {
    /// Ledger timestamp from which contributions are refused.
    pub end_time: u64,
    /// Set by `end_sale`; never cleared.
    pub ended: bool,
    /// Sum of every accepted contribution.
    pub total_raised: i128,
}

/// Full view of the sale, reconstructed from config, state and owner.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Sale {
    /// `None` once ownership has been renounced.
    pub owner: Option<Address>,
    pub beneficiary: Address,
    pub payment_token: Address,
    pub end_time: u64,
    pub ended: bool,
    pub total_raised: i128,
}

/// Outcome of planning a contribution: what is kept and what goes back.
///
/// `accepted + refund` always equals the requested amount.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Admission {
    pub accepted: i128,
    pub refund: i128,
}
