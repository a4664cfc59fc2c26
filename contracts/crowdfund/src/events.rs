//! # Events
//!
//! Structured notifications published for off-chain observers (the indexer
//! under `backend/indexer` consumes these). Each event is published under a
//! single leading symbol topic with a typed struct as data; the contract
//! never reads the event stream back.
//!
//! | Topic       | Data               | Emitted by                          |
//! |-------------|--------------------|-------------------------------------|
//! | `transfer`  | [`Transfer`]       | successful fund / withdraw transfer |
//! | `xfer_fail` | [`TransferFailed`] | token gateway refused the transfer  |
//! | `reset`     | [`ResetFund`]      | `reset_fund`                        |
//! | `active`    | [`ActiveChanged`]  | `set_active`, successful withdraw, `reset_fund` |
//!
//! A `transfer`/`xfer_fail` pair is mutually exclusive per operation: exactly
//! one of them records the outcome of the single token movement an operation
//! attempts.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

/// A token movement succeeded.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transfer {
    pub from: Address,
    pub to: Address,
    pub amount: i128,
}

/// The token gateway reported failure; the surrounding operation still
/// completed. `reason` is one of `rejected` (the token contract returned an
/// error), `trapped` (the sub-invocation aborted without an error code), or
/// `decode` (the return value failed to convert).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferFailed {
    pub from: Address,
    pub to: Address,
    pub amount: i128,
    pub reason: Symbol,
}

/// The campaign was overwritten in place with a fresh round.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResetFund {
    pub token: Address,
    pub grantee: Address,
    pub target: i128,
    pub description: Symbol,
    pub deadline: u64,
    pub new_owner: Address,
}

/// The live-phase flag was written (not necessarily changed).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ActiveChanged {
    pub active: bool,
}

pub fn emit_transfer(env: &Env, from: Address, to: Address, amount: i128) {
    env.events()
        .publish((symbol_short!("transfer"),), Transfer { from, to, amount });
}

pub fn emit_transfer_failed(env: &Env, from: Address, to: Address, amount: i128, reason: Symbol) {
    env.events().publish(
        (symbol_short!("xfer_fail"),),
        TransferFailed {
            from,
            to,
            amount,
            reason,
        },
    );
}

pub fn emit_reset_fund(env: &Env, event: ResetFund) {
    env.events().publish((symbol_short!("reset"),), event);
}

pub fn emit_active_changed(env: &Env, active: bool) {
    env.events()
        .publish((symbol_short!("active"),), ActiveChanged { active });
}
