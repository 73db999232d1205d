//! # Admission
//!
//! Pure decision logic for contributions. Nothing here touches storage,
//! the token or the ledger clock: every input is passed in explicitly so the
//! entry points in `lib.rs` can plan a contribution first and apply it as a
//! single unit afterwards.
//!
//! ## Rejection order
//!
//! | Check                              | Error          |
//! |------------------------------------|----------------|
//! | `amount < MIN_CONTRIBUTION`        | `BelowMinimum` |
//! | phase is `Ended` or `Expired`      | `SaleClosed`   |
//! | contributor has no room left       | `CapReached`   |
//!
//! The minimum is checked first so an undersized request is reported the
//! same way whatever the phase.

use crate::types::{Admission, SalePhase, SaleState, MIN_CONTRIBUTION, TOTAL_CAP};
use crate::Error;

/// Derive the sale phase at `now`.
///
/// An explicit end always wins over the deadline.
pub fn phase(now: u64, end_time: u64, ended: bool) -> SalePhase {
    if ended {
        SalePhase::Ended
    } else if now >= end_time {
        SalePhase::Expired
    } else {
        SalePhase::Open
    }
}

/// Amount a contributor who has already given `already` may still add.
pub fn room_for(already: i128) -> i128 {
    TOTAL_CAP.saturating_sub(already).max(0)
}

/// Decide how much of `amount` the sale accepts from a contributor.
///
/// Requests larger than the remaining room are clamped and the excess is
/// reported as `refund`. A contributor with no room at all is rejected.
pub fn plan_contribution(
    now: u64,
    state: &SaleState,
    already: i128,
    amount: i128,
) -> Result<Admission, Error> {
    if amount < MIN_CONTRIBUTION {
        return Err(Error::BelowMinimum);
    }

    match phase(now, state.end_time, state.ended) {
        SalePhase::Open => {}
        SalePhase::Expired | SalePhase::Ended => return Err(Error::SaleClosed),
    }

    let room = room_for(already);
    if room == 0 {
        return Err(Error::CapReached);
    }

    let accepted = amount.min(room);
    Ok(Admission {
        accepted,
        refund: amount - accepted,
    })
}
