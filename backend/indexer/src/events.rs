//! Canonical event types emitted by the crowdfund campaign contract.
//!
//! These mirror the Soroban contract events defined in
//! `contracts/crowdfund/src/events.rs`.

use serde::{Deserialize, Serialize};

/// All recognised event kinds from the campaign contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A token movement succeeded (`transfer` topic).
    Transfer,
    /// The token gateway refused a transfer (`xfer_fail` topic).
    TransferFailed,
    /// The campaign was overwritten with a fresh round (`reset` topic).
    ResetFund,
    /// The live-phase flag was written (`active` topic).
    ActiveChanged,
    /// An event from this contract that we don't recognise yet.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol string produced by Soroban into an [`EventKind`].
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "transfer" => Self::Transfer,
            "xfer_fail" => Self::TransferFailed,
            "reset" => Self::ResetFund,
            "active" => Self::ActiveChanged,
            _ => Self::Unknown,
        }
    }

    /// Return a short identifier string suitable for storage in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transfer => "transfer",
            Self::TransferFailed => "transfer_failed",
            Self::ResetFund => "reset_fund",
            Self::ActiveChanged => "active_changed",
            Self::Unknown => "unknown",
        }
    }

    /// Parse the database identifier back into an [`EventKind`].
    /// Used to validate the `/events/:kind` path segment.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "transfer" => Some(Self::Transfer),
            "transfer_failed" => Some(Self::TransferFailed),
            "reset_fund" => Some(Self::ResetFund),
            "active_changed" => Some(Self::ActiveChanged),
            _ => None,
        }
    }
}

/// A fully decoded campaign event, ready to be stored in the database.
///
/// The four contract notifications are flattened into a common shape:
/// `transfer`/`transfer_failed` fill `from_addr`/`to_addr`/`amount` (with the
/// failure reason in `detail`); `reset_fund` maps the new owner, grantee, and
/// target onto the same columns with the round description in `detail`;
/// `active_changed` carries the flag value in `detail`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignEvent {
    pub event_type: String,
    pub from_addr: Option<String>,
    pub to_addr: Option<String>,
    pub amount: Option<String>,
    pub detail: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// A raw event record as stored in / read from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_type: String,
    pub from_addr: Option<String>,
    pub to_addr: Option<String>,
    pub amount: Option<String>,
    pub detail: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}
