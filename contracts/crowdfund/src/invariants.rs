#![allow(dead_code)]

extern crate std;

use soroban_sdk::{token, Address, Env};

use crate::types::Campaign;
use crate::CrowdfundClient;

/// INV-1: The collected balance is derived, never stored — `get_fund_balance`
/// must always equal the token balance the gateway reports for the contract
/// account.
pub fn assert_balance_is_derived(env: &Env, client: &CrowdfundClient, token_addr: &Address) {
    let gateway = token::Client::new(env, token_addr).balance(&client.address);
    assert_eq!(
        client.get_fund_balance(),
        gateway,
        "INV-1 violated: get_fund_balance ({}) disagrees with the token gateway ({})",
        client.get_fund_balance(),
        gateway
    );
}

/// INV-2: The collected balance must never be negative.
pub fn assert_balance_non_negative(client: &CrowdfundClient) {
    let balance = client.get_fund_balance();
    assert!(
        balance >= 0,
        "INV-2 violated: collected balance is negative ({balance})"
    );
}

/// INV-3: Immediately after a successful withdrawal the collected balance is
/// exactly zero and the campaign has left its live phase.
pub fn assert_post_withdraw_state(client: &CrowdfundClient) {
    assert_eq!(
        client.get_fund_balance(),
        0,
        "INV-3 violated: balance nonzero after withdrawal"
    );
    assert!(
        !client.get_active(),
        "INV-3 violated: campaign still active after withdrawal"
    );
}

/// INV-4: Token conservation — no operation mints or burns: the total held
/// across the tracked accounts (contributors, contract, grantee) is constant.
pub fn assert_conservation(
    env: &Env,
    token_addr: &Address,
    accounts: &[Address],
    expected_total: i128,
) {
    let gateway = token::Client::new(env, token_addr);
    let total: i128 = accounts.iter().map(|a| gateway.balance(a)).sum();
    assert_eq!(
        total, expected_total,
        "INV-4 violated: tracked accounts hold {total}, expected {expected_total}"
    );
}

/// INV-5: Contribution invariant — after a successful contribution of
/// `amount`, the collected balance increased by exactly `amount`.
pub fn assert_contribution_invariant(balance_before: i128, balance_after: i128, amount: i128) {
    assert_eq!(
        balance_after,
        balance_before + amount,
        "INV-5 violated: {balance_before} + {amount} != {balance_after}"
    );
}

/// INV-6: Round immutability — between a reset (or initialize) and the next
/// reset, the configuration half of the campaign never changes. Only the
/// `active` flag may differ.
pub fn assert_round_immutable(original: &Campaign, current: &Campaign) {
    assert_eq!(
        original.token, current.token,
        "INV-6 violated: token changed mid-round"
    );
    assert_eq!(
        original.target, current.target,
        "INV-6 violated: target changed mid-round"
    );
    assert_eq!(
        original.grantee, current.grantee,
        "INV-6 violated: grantee changed mid-round"
    );
    assert_eq!(
        original.description, current.description,
        "INV-6 violated: description changed mid-round"
    );
    assert_eq!(
        original.deadline, current.deadline,
        "INV-6 violated: deadline changed mid-round"
    );
    assert_eq!(
        original.owner, current.owner,
        "INV-6 violated: owner changed mid-round"
    );
}

/// Run the stateless campaign invariants that hold in every reachable state.
pub fn assert_all_campaign_invariants(env: &Env, client: &CrowdfundClient, token_addr: &Address) {
    assert_balance_is_derived(env, client, token_addr);
    assert_balance_non_negative(client);
}
