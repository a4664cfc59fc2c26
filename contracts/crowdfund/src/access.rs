//! # Access control
//!
//! Holds the single owner account and exposes the guard every privileged
//! entry point runs first. Ownership storage lives entirely inside this
//! module under [`AccessKey`]; the rest of the contract only sees the three
//! functions below.
//!
//! There is no standalone ownership-transfer entry point: the owner is set at
//! initialization and may be replaced only by `reset_fund`, which overwrites
//! it unconditionally — the outgoing owner is not asked for consent and no
//! two-step handshake exists.

use soroban_sdk::{contracttype, Address, Env};

use crate::storage::bump_instance;
use crate::Error;

/// Ownership storage key (instance tier).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AccessKey {
    Owner,
}

/// Set or replace the owner. Any previous owner is overwritten.
pub fn init_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&AccessKey::Owner, owner);
    bump_instance(env);
}

/// Return the current owner, or `None` before initialization.
pub fn owner(env: &Env) -> Option<Address> {
    bump_instance(env);
    env.storage().instance().get(&AccessKey::Owner)
}

/// Abort the invoking operation unless `caller` is the owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
    let owner: Address = owner(env).ok_or(Error::NotInitialized)?;
    if *caller != owner {
        return Err(Error::NotOwner);
    }
    Ok(())
}
