//! Test-only token gateway stub.
//!
//! Implements just the slice of the token interface the campaign calls
//! (`balance`, `allowance`, `transfer`, `transfer_from`) with two failure
//! switches: `set_refuse` makes the next transfer fail with a contract
//! error, `set_abort` makes it panic without one. Tests use them to exercise
//! both classifications of the soft-failure channel: the pre-checks pass
//! against real balances, then the transfer itself goes wrong.

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, panic_with_error, Address, Env,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum StubError {
    TransferRefused = 100,
}

#[contracttype]
#[derive(Clone)]
pub enum StubKey {
    Balance(Address),
    Allowance(Address, Address),
    Refuse,
    Abort,
}

#[contract]
pub struct StubToken;

#[contractimpl]
impl StubToken {
    pub fn mint(env: Env, to: Address, amount: i128) {
        let key = StubKey::Balance(to);
        let balance: i128 = env.storage().instance().get(&key).unwrap_or(0);
        env.storage().instance().set(&key, &(balance + amount));
    }

    /// When `true`, every subsequent transfer fails with `TransferRefused`.
    pub fn set_refuse(env: Env, refuse: bool) {
        env.storage().instance().set(&StubKey::Refuse, &refuse);
    }

    /// When `true`, every subsequent transfer aborts with a plain panic,
    /// carrying no error code at all.
    pub fn set_abort(env: Env, abort: bool) {
        env.storage().instance().set(&StubKey::Abort, &abort);
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        env.storage()
            .instance()
            .get(&StubKey::Balance(id))
            .unwrap_or(0)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        env.storage()
            .instance()
            .get(&StubKey::Allowance(from, spender))
            .unwrap_or(0)
    }

    pub fn approve(env: Env, from: Address, spender: Address, amount: i128, _live_until: u32) {
        env.storage()
            .instance()
            .set(&StubKey::Allowance(from, spender), &amount);
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        Self::do_move(&env, from, to, amount);
    }

    pub fn transfer_from(env: Env, _spender: Address, from: Address, to: Address, amount: i128) {
        Self::do_move(&env, from, to, amount);
    }

    fn do_move(env: &Env, from: Address, to: Address, amount: i128) {
        let refuse: bool = env
            .storage()
            .instance()
            .get(&StubKey::Refuse)
            .unwrap_or(false);
        if refuse {
            panic_with_error!(env, StubError::TransferRefused);
        }
        let abort: bool = env
            .storage()
            .instance()
            .get(&StubKey::Abort)
            .unwrap_or(false);
        if abort {
            panic!("stub token: aborting without an error code");
        }

        let from_key = StubKey::Balance(from);
        let to_key = StubKey::Balance(to);
        let from_balance: i128 = env.storage().instance().get(&from_key).unwrap_or(0);
        let to_balance: i128 = env.storage().instance().get(&to_key).unwrap_or(0);
        assert!(from_balance >= amount, "stub token: balance underflow");
        env.storage()
            .instance()
            .set(&from_key, &(from_balance - amount));
        env.storage().instance().set(&to_key, &(to_balance + amount));
    }
}
