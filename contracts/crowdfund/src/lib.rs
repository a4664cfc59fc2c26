//! # Crowdfund Contract
//!
//! A single-campaign crowdfunding contract: many contributors pay a SEP-41
//! token into the contract account, and the pooled balance is released to a
//! designated grantee once the campaign deadline has passed or the funding
//! target is met. One campaign exists at a time; `reset_fund` overwrites it
//! in place for the next round.
//!
//! | Phase     | Entry Point(s)                                    |
//! |-----------|---------------------------------------------------|
//! | Bootstrap | [`Crowdfund::initialize`]                         |
//! | Funding   | [`Crowdfund::fund_to_contract`]                   |
//! | Release   | [`Crowdfund::withdraw_funds`]                     |
//! | Reuse     | [`Crowdfund::reset_fund`], [`Crowdfund::set_active`] |
//! | Queries   | `get_fund_balance`, `get_fund_target`, `get_fund_description`, `get_deadline`, `get_owner`, `get_active`, `get_token_address`, `get_token_symbol`, `get_campaign` |
//!
//! ## Architecture
//!
//! Authorization is delegated to [`access`], storage access to [`storage`],
//! notifications to [`events`]. This file contains only the public entry
//! points and the error codes.
//!
//! The contract keeps no ledger of contributions: the collected balance is
//! whatever the token contract says the campaign account holds. Two failure
//! channels exist and must not be conflated. Precondition violations return
//! an [`Error`], aborting the invocation with no state change and no events.
//! A token transfer the gateway refuses is *not* an error: the operation
//! completes and records a `TransferFailed` notification instead, so callers
//! must watch the event stream to learn whether funds actually moved.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, symbol_short, token, Address, Env,
    String, Symbol,
};

mod access;
mod events;
mod storage;
mod token_meta;
mod types;

#[cfg(test)]
mod gateway_stub;
#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

pub use events::{ActiveChanged, ResetFund, Transfer, TransferFailed};
pub use types::{Campaign, CampaignConfig};

use types::CampaignConfig as Config;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// `initialize` was already called on this contract instance.
    AlreadyInitialized = 1,
    /// No campaign exists yet.
    NotInitialized = 2,
    /// Caller is not the campaign owner.
    NotOwner = 3,
    /// Contribution amount must be positive.
    InvalidAmount = 4,
    /// The contract account cannot fund itself.
    SelfFunding = 5,
    /// The campaign deadline has passed.
    CampaignExpired = 6,
    /// Contributor's token balance is below the contribution amount.
    InsufficientBalance = 7,
    /// Contributor's allowance for the contract is below the amount.
    InsufficientAllowance = 8,
    /// The campaign is not in its live phase.
    CampaignInactive = 9,
    /// Neither the deadline has passed nor the target been met.
    WithdrawIneligible = 10,
    /// Collected funds must be withdrawn before the campaign is reset.
    FundsNotWithdrawn = 11,
}

#[contract]
pub struct Crowdfund;

#[contractimpl]
impl Crowdfund {
    // ─────────────────────────────────────────────────────────
    // Bootstrap
    // ─────────────────────────────────────────────────────────

    /// Create the campaign. Must be called exactly once after deployment;
    /// subsequent calls fail with [`Error::AlreadyInitialized`].
    ///
    /// - `token` is the SEP-41 token collected this round.
    /// - `target` is the collected amount that unlocks early withdrawal.
    /// - `description` is a short packed label for the round.
    /// - `deadline` is a ledger timestamp; no validation is applied, so a
    ///   campaign may be created already expired (it then rejects all
    ///   contributions but can still be withdrawn and reset).
    /// - `owner` must sign and becomes the only account allowed to
    ///   withdraw, reset, and toggle activity.
    ///
    /// The campaign starts in the live phase (`active == true`).
    pub fn initialize(
        env: Env,
        token: Address,
        grantee: Address,
        target: i128,
        description: Symbol,
        deadline: u64,
        owner: Address,
    ) -> Result<(), Error> {
        if storage::has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        storage::set_config(
            &env,
            &Config {
                token,
                target,
                grantee,
                description,
                deadline,
            },
        );
        access::init_owner(&env, &owner);
        storage::set_active(&env, true);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Funding
    // ─────────────────────────────────────────────────────────

    /// Contribute `amount` of the campaign token.
    ///
    /// The contributor must hold at least `amount` and have granted the
    /// contract an allowance of at least `amount` beforehand. Contributions
    /// are accepted until the deadline regardless of the `active` flag; the
    /// flag gates the release side only.
    ///
    /// The transfer outcome is reported through the event stream: `transfer`
    /// when the tokens moved, `xfer_fail` when the gateway refused — in the
    /// latter case this entry point still returns `Ok`, and no funds moved.
    pub fn fund_to_contract(env: Env, contributor: Address, amount: i128) -> Result<(), Error> {
        contributor.require_auth();

        let config = storage::config(&env).ok_or(Error::NotInitialized)?;
        let contract = env.current_contract_address();

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        if contributor == contract {
            return Err(Error::SelfFunding);
        }
        if env.ledger().timestamp() > config.deadline {
            return Err(Error::CampaignExpired);
        }

        let token = token::Client::new(&env, &config.token);
        if token.balance(&contributor) < amount {
            return Err(Error::InsufficientBalance);
        }
        if token.allowance(&contributor, &contract) < amount {
            return Err(Error::InsufficientAllowance);
        }

        let reason = match token.try_transfer_from(&contract, &contributor, &contract, &amount) {
            Ok(Ok(())) => {
                events::emit_transfer(&env, contributor, contract, amount);
                return Ok(());
            }
            Ok(Err(_)) => symbol_short!("decode"),
            Err(Ok(_)) => symbol_short!("rejected"),
            Err(Err(_)) => symbol_short!("trapped"),
        };
        events::emit_transfer_failed(&env, contributor, contract, amount, reason);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Release
    // ─────────────────────────────────────────────────────────

    /// Release the entire collected balance to the grantee.
    ///
    /// Only the owner may call, the campaign must be live, and either the
    /// deadline has passed or the collected balance has reached the target.
    ///
    /// The live phase is closed *before* the external transfer so a token
    /// contract that calls back in finds the campaign inactive and cannot
    /// re-enter withdrawal. If the gateway refuses the transfer, the live
    /// phase is restored, a `xfer_fail` notification records the failure,
    /// and the call still returns `Ok` — the balance is untouched.
    pub fn withdraw_funds(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        access::require_owner(&env, &caller)?;

        let config = storage::config(&env).ok_or(Error::NotInitialized)?;
        if !storage::active(&env) {
            return Err(Error::CampaignInactive);
        }

        let contract = env.current_contract_address();
        let token = token::Client::new(&env, &config.token);
        let collected = token.balance(&contract);

        let expired = env.ledger().timestamp() > config.deadline;
        if !expired && collected < config.target {
            return Err(Error::WithdrawIneligible);
        }

        storage::set_active(&env, false);

        let reason = match token.try_transfer(&contract, &config.grantee, &collected) {
            Ok(Ok(())) => {
                events::emit_transfer(&env, contract, config.grantee.clone(), collected);
                events::emit_active_changed(&env, false);
                return Ok(());
            }
            Ok(Err(_)) => symbol_short!("decode"),
            Err(Ok(_)) => symbol_short!("rejected"),
            Err(Err(_)) => symbol_short!("trapped"),
        };
        storage::set_active(&env, true);
        events::emit_transfer_failed(&env, contract, config.grantee.clone(), collected, reason);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Reuse
    // ─────────────────────────────────────────────────────────

    /// Overwrite the campaign with a fresh round.
    ///
    /// Only the owner may call, and the collected balance of the *current*
    /// round's token must be zero — withdraw first. Every field including
    /// the owner is replaced unconditionally; `new_owner` needs no consent
    /// from the outgoing owner and takes over immediately. The new round
    /// starts live.
    #[allow(clippy::too_many_arguments)]
    pub fn reset_fund(
        env: Env,
        caller: Address,
        token: Address,
        grantee: Address,
        target: i128,
        description: Symbol,
        deadline: u64,
        new_owner: Address,
    ) -> Result<(), Error> {
        caller.require_auth();
        access::require_owner(&env, &caller)?;

        let current = storage::config(&env).ok_or(Error::NotInitialized)?;
        let collected = token::Client::new(&env, &current.token)
            .balance(&env.current_contract_address());
        if collected > 0 {
            return Err(Error::FundsNotWithdrawn);
        }

        storage::set_config(
            &env,
            &Config {
                token: token.clone(),
                target,
                grantee: grantee.clone(),
                description: description.clone(),
                deadline,
            },
        );
        access::init_owner(&env, &new_owner);
        storage::set_active(&env, true);

        events::emit_reset_fund(
            &env,
            ResetFund {
                token,
                grantee,
                target,
                description,
                deadline,
                new_owner,
            },
        );
        events::emit_active_changed(&env, true);
        Ok(())
    }

    /// Set the live-phase flag to `new_value`.
    ///
    /// Owner only. Does not consult balance, target, or deadline, and emits
    /// an `active` notification even when the value is unchanged.
    pub fn set_active(env: Env, caller: Address, new_value: bool) -> Result<(), Error> {
        caller.require_auth();
        access::require_owner(&env, &caller)?;

        storage::set_active(&env, new_value);
        events::emit_active_changed(&env, new_value);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Collected balance: the campaign token held by the contract account.
    pub fn get_fund_balance(env: Env) -> i128 {
        let config = config_or_panic(&env);
        token::Client::new(&env, &config.token).balance(&env.current_contract_address())
    }

    pub fn get_fund_target(env: Env) -> i128 {
        config_or_panic(&env).target
    }

    pub fn get_fund_description(env: Env) -> Symbol {
        config_or_panic(&env).description
    }

    pub fn get_deadline(env: Env) -> u64 {
        config_or_panic(&env).deadline
    }

    pub fn get_owner(env: Env) -> Address {
        access::owner(&env).unwrap_or_else(|| panic_with_error!(&env, Error::NotInitialized))
    }

    pub fn get_active(env: Env) -> bool {
        config_or_panic(&env);
        storage::active(&env)
    }

    pub fn get_token_address(env: Env) -> Address {
        config_or_panic(&env).token
    }

    /// Display symbol for the campaign token. The well-known mainnet assets
    /// (native XLM, USDC) resolve without a cross-contract call.
    pub fn get_token_symbol(env: Env) -> String {
        let config = config_or_panic(&env);
        token_meta::token_symbol(&env, &config.token)
    }

    /// Full campaign snapshot for clients and the indexer.
    pub fn get_campaign(env: Env) -> Campaign {
        let config = config_or_panic(&env);
        let owner =
            access::owner(&env).unwrap_or_else(|| panic_with_error!(&env, Error::NotInitialized));
        Campaign {
            token: config.token,
            target: config.target,
            grantee: config.grantee,
            description: config.description,
            deadline: config.deadline,
            owner,
            active: storage::active(&env),
        }
    }
}

/// Load the round configuration or abort with [`Error::NotInitialized`].
fn config_or_panic(env: &Env) -> Config {
    storage::config(env).unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}
