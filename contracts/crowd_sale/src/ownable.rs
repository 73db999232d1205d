//! # Ownable — single-owner access control
//!
//! The sale has at most one owner. Only the owner may end the sale, extend
//! its deadline, hand ownership to another address or give it up.
//!
//! ## Storage layout
//!
//! - `OwnerKey::Owner` → `Address` — the current owner (instance storage).
//!   Removed for good by `renounce_ownership`.
//!
//! ## Event emissions
//!
//! | Event topic prefix | Trigger                                   |
//! |--------------------|-------------------------------------------|
//! | `own_set`          | Owner set at `init` or transferred        |
//! | `own_del`          | Ownership renounced                       |
//!
//! Data is the previous owner, `None` on the first assignment.
//!
//! ## Threat model notes
//!
//! - The owner address authorises through `require_auth`; the stored value is
//!   compared afterwards, so a signature alone is not enough.
//! - Ownership cannot be handed to the contract itself: it can never sign as
//!   its own caller, which would leave every owner operation unreachable.

use soroban_sdk::{contracttype, panic_with_error, symbol_short, Address, Env};

use crate::storage::{bump_instance, is_initialized};
use crate::Error;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OwnerKey {
    /// The one and only owner address.
    Owner,
}

/// Read the owner, returning `None` before init.
pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&OwnerKey::Owner)
}

/// Read the owner.
/// Panics with `Error::NotInitialized` before init and `Error::NoOwner`
/// once ownership has been renounced.
pub fn require_owner_set(env: &Env) -> Address {
    match get_owner(env) {
        Some(owner) => owner,
        None if is_initialized(env) => panic_with_error!(env, Error::NoOwner),
        None => panic_with_error!(env, Error::NotInitialized),
    }
}

fn store_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&OwnerKey::Owner, owner);
    bump_instance(env);
}

// ─────────────────────────────────────────────────────────
// Initialisation
// ─────────────────────────────────────────────────────────

/// Set the initial owner. Panics with `Error::AlreadyInitialized` if an
/// owner already exists.
pub fn init_owner(env: &Env, owner: &Address) {
    if env.storage().instance().has(&OwnerKey::Owner) {
        panic_with_error!(env, Error::AlreadyInitialized);
    }
    store_owner(env, owner);
    emit_owner_set(env, owner, None);
}

// ─────────────────────────────────────────────────────────
// Access guard
// ─────────────────────────────────────────────────────────

/// Require `caller` to authorise and to be the owner.
/// Panics with `Error::Unauthorized` otherwise, including after renouncement.
pub fn require_owner(env: &Env, caller: &Address) {
    caller.require_auth();
    if get_owner(env).as_ref() == Some(caller) {
        return;
    }
    if !is_initialized(env) {
        panic_with_error!(env, Error::NotInitialized);
    }
    panic_with_error!(env, Error::Unauthorized);
}

// ─────────────────────────────────────────────────────────
// Transfer
// ─────────────────────────────────────────────────────────

/// Hand ownership from `caller` to `new_owner`.
///
/// - `caller` must authorise and be the current owner.
/// - `new_owner` must not be the contract's own address.
///
/// The previous owner loses every owner capability immediately.
pub fn transfer_ownership(env: &Env, caller: &Address, new_owner: &Address) {
    require_owner(env, caller);

    if *new_owner == env.current_contract_address() {
        panic_with_error!(env, Error::InvalidOwner);
    }

    store_owner(env, new_owner);
    emit_owner_set(env, new_owner, Some(caller.clone()));
}

/// Give up ownership. No address can pass `require_owner` afterwards.
///
/// - `caller` must authorise and be the current owner.
pub fn renounce_ownership(env: &Env, caller: &Address) {
    require_owner(env, caller);

    env.storage().instance().remove(&OwnerKey::Owner);
    bump_instance(env);
    emit_owner_removed(env, caller);
}

/// Returns `true` if `address` is the current owner.
pub fn is_owner(env: &Env, address: &Address) -> bool {
    get_owner(env).map(|o| o == *address).unwrap_or(false)
}

/// Topic: `(own_set, new_owner)`
/// Data:  `Option<previous_owner>`
fn emit_owner_set(env: &Env, owner: &Address, previous: Option<Address>) {
    env.events()
        .publish((symbol_short!("own_set"), owner.clone()), previous);
}

/// Topic: `(own_del, previous_owner)`
/// Data:  `Option<previous_owner>`
fn emit_owner_removed(env: &Env, previous: &Address) {
    env.events().publish(
        (symbol_short!("own_del"), previous.clone()),
        Some(previous.clone()),
    );
}
