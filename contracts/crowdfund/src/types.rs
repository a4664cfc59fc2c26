//! # Types
//!
//! Shared data structures for the crowdfunding campaign.
//!
//! ## Design decisions
//!
//! ### Config / flag split
//!
//! A campaign is internally stored as two separate ledger entries:
//!
//! - [`CampaignConfig`] — written by `initialize` and `reset_fund`; never
//!   touched in between.
//! - the `active` flag — a bare `bool` entry, flipped by `set_active` and by
//!   a successful `withdraw_funds`.
//!
//! Withdrawal and activity toggles are the frequent writers, so they write a
//! single small entry instead of the whole record. The public API exposes the
//! reconstructed [`Campaign`] struct for convenience.
//!
//! ### No stored balance
//!
//! The collected balance is deliberately absent from both entries: the token
//! account balance held by the contract is the single source of truth, read
//! through the token client on demand. Nothing here can drift out of sync
//! with the funds actually held.

use soroban_sdk::{contracttype, Address, Symbol};

/// Per-round campaign configuration, overwritten wholesale on reset.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignConfig {
    /// Token contract collected by this round.
    pub token: Address,
    /// Minimum collected amount that unlocks withdrawal before the deadline.
    pub target: i128,
    /// Recipient of withdrawn funds.
    pub grantee: Address,
    /// Short label for the round, packed into a symbol.
    pub description: Symbol,
    /// Ledger timestamp after which contributions are rejected and
    /// withdrawal no longer depends on the target.
    pub deadline: u64,
}

/// Full campaign snapshot, reconstructed from the split storage entries.
///
/// Used as the return type of `get_campaign`; never stored in this shape.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    pub token: Address,
    pub target: i128,
    pub grantee: Address,
    pub description: Symbol,
    pub deadline: u64,
    /// Account authorized to withdraw, reset, and toggle activity.
    pub owner: Address,
    /// Whether the round is in its live phase.
    pub active: bool,
}
