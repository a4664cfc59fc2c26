extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    token, vec, Address, Env, IntoVal, TryIntoVal,
};

use crate::events::{ActiveChanged, ResetFund, Transfer, TransferFailed};
use crate::gateway_stub::{StubToken, StubTokenClient};
use crate::{Crowdfund, CrowdfundClient};

const DAY: u64 = 86_400;
const TARGET: i128 = 10_000;

fn setup() -> (Env, CrowdfundClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(Crowdfund, ());
    let client = CrowdfundClient::new(&env, &contract_id);
    (env, client)
}

fn create_token<'a>(
    env: &Env,
    admin: &Address,
) -> (token::Client<'a>, token::StellarAssetClient<'a>) {
    let addr = env.register_stellar_asset_contract_v2(admin.clone());
    (
        token::Client::new(env, &addr.address()),
        token::StellarAssetClient::new(env, &addr.address()),
    )
}

fn setup_campaign() -> (
    Env,
    CrowdfundClient<'static>,
    token::Client<'static>,
    token::StellarAssetClient<'static>,
    Address,
    Address,
) {
    let (env, client) = setup();
    let token_admin = Address::generate(&env);
    let (token, sac) = create_token(&env, &token_admin);
    let owner = Address::generate(&env);
    let grantee = Address::generate(&env);

    client.initialize(
        &token.address,
        &grantee,
        &TARGET,
        &symbol_short!("round_1"),
        &(env.ledger().timestamp() + DAY),
        &owner,
    );
    (env, client, token, sac, owner, grantee)
}

#[test]
fn test_transfer_event_on_fund() {
    let (env, client, token, sac, _owner, _grantee) = setup_campaign();
    let contributor = Address::generate(&env);
    let amount = 2_500i128;

    sac.mint(&contributor, &amount);
    token.approve(&contributor, &client.address, &amount, &1_000);
    client.fund_to_contract(&contributor, &amount);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("transfer"),)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("transfer").into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    // Data: Transfer struct, contributor → contract
    let event_data: Transfer = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        Transfer {
            from: contributor.clone(),
            to: client.address.clone(),
            amount,
        }
    );
}

#[test]
fn test_transfer_and_active_events_on_withdraw() {
    let (env, client, token, sac, owner, grantee) = setup_campaign();
    let contributor = Address::generate(&env);

    sac.mint(&contributor, &TARGET);
    token.approve(&contributor, &client.address, &TARGET, &1_000);
    client.fund_to_contract(&contributor, &TARGET);

    client.withdraw_funds(&owner);

    let all_events = env.events().all();
    let n = all_events.len();
    assert!(n >= 2, "expected transfer + active events");

    // Second to last: the Transfer, contract → grantee, for the whole pot.
    let transfer_event = all_events.get(n - 2).unwrap();
    assert_eq!(transfer_event.0, client.address);
    assert_eq!(
        transfer_event.1,
        vec![&env, symbol_short!("transfer").into_val(&env)]
    );
    let transfer_data: Transfer = transfer_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        transfer_data,
        Transfer {
            from: client.address.clone(),
            to: grantee.clone(),
            amount: TARGET,
        }
    );

    // Last: the live phase closed.
    let active_event = all_events.last().unwrap();
    assert_eq!(
        active_event.1,
        vec![&env, symbol_short!("active").into_val(&env)]
    );
    let active_data: ActiveChanged = active_event.2.try_into_val(&env).unwrap();
    assert_eq!(active_data, ActiveChanged { active: false });
}

#[test]
fn test_transfer_failed_event_on_refused_fund() {
    let (env, client) = setup();
    let stub_id = env.register(StubToken, ());
    let stub = StubTokenClient::new(&env, &stub_id);
    let owner = Address::generate(&env);
    let grantee = Address::generate(&env);

    client.initialize(
        &stub.address,
        &grantee,
        &TARGET,
        &symbol_short!("round_1"),
        &(env.ledger().timestamp() + DAY),
        &owner,
    );

    let contributor = Address::generate(&env);
    let amount = 1_000i128;
    stub.mint(&contributor, &amount);
    stub.approve(&contributor, &client.address, &amount, &1_000);
    stub.set_refuse(&true);

    client.fund_to_contract(&contributor, &amount);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("xfer_fail"),)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("xfer_fail").into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    // Data: TransferFailed with the gateway's refusal classified as rejected.
    let event_data: TransferFailed = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        TransferFailed {
            from: contributor.clone(),
            to: client.address.clone(),
            amount,
            reason: symbol_short!("rejected"),
        }
    );
}

#[test]
fn test_transfer_failed_reason_distinguishes_abort() {
    let (env, client) = setup();
    let stub_id = env.register(StubToken, ());
    let stub = StubTokenClient::new(&env, &stub_id);
    let owner = Address::generate(&env);
    let grantee = Address::generate(&env);

    client.initialize(
        &stub.address,
        &grantee,
        &TARGET,
        &symbol_short!("round_1"),
        &(env.ledger().timestamp() + DAY),
        &owner,
    );

    let contributor = Address::generate(&env);
    let amount = 1_000i128;
    stub.mint(&contributor, &amount);
    stub.approve(&contributor, &client.address, &amount, &1_000);

    // A gateway that dies without an error code is classified as trapped,
    // not rejected.
    stub.set_abort(&true);
    client.fund_to_contract(&contributor, &amount);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");
    assert_eq!(
        last_event.1,
        vec![&env, symbol_short!("xfer_fail").into_val(&env)]
    );
    let event_data: TransferFailed = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data.reason, symbol_short!("trapped"));
    assert_eq!(event_data.amount, amount);

    // No funds moved; the campaign is untouched.
    assert_eq!(client.get_fund_balance(), 0);
    assert_eq!(stub.balance(&contributor), amount);
}

#[test]
fn test_reset_fund_event_pair() {
    let (env, client, token, _sac, owner, _grantee) = setup_campaign();

    let new_grantee = Address::generate(&env);
    let new_owner = Address::generate(&env);
    let new_deadline = env.ledger().timestamp() + 2 * DAY;

    client.reset_fund(
        &owner,
        &token.address,
        &new_grantee,
        &55_555,
        &symbol_short!("round_2"),
        &new_deadline,
        &new_owner,
    );

    let all_events = env.events().all();
    let n = all_events.len();
    assert!(n >= 2, "expected reset + active events");

    // Second to last: the full ResetFund record.
    let reset_event = all_events.get(n - 2).unwrap();
    assert_eq!(reset_event.0, client.address);
    assert_eq!(
        reset_event.1,
        vec![&env, symbol_short!("reset").into_val(&env)]
    );
    let reset_data: ResetFund = reset_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        reset_data,
        ResetFund {
            token: token.address.clone(),
            grantee: new_grantee.clone(),
            target: 55_555,
            description: symbol_short!("round_2"),
            deadline: new_deadline,
            new_owner: new_owner.clone(),
        }
    );

    // Last: the new round starts live.
    let active_event = all_events.last().unwrap();
    let active_data: ActiveChanged = active_event.2.try_into_val(&env).unwrap();
    assert_eq!(active_data, ActiveChanged { active: true });
}

#[test]
fn test_active_event_emitted_even_when_unchanged() {
    let (env, client, _token, _sac, owner, _grantee) = setup_campaign();

    client.set_active(&owner, &false);
    let first = env.events().all().last().expect("No events found");
    assert_eq!(first.0, client.address);
    assert_eq!(first.1, vec![&env, symbol_short!("active").into_val(&env)]);
    let first_data: ActiveChanged = first.2.try_into_val(&env).unwrap();
    assert_eq!(first_data, ActiveChanged { active: false });

    // Writing the same value again still notifies observers.
    client.set_active(&owner, &false);
    let second = env.events().all().last().expect("No events found");
    assert_eq!(second.1, vec![&env, symbol_short!("active").into_val(&env)]);
    let second_data: ActiveChanged = second.2.try_into_val(&env).unwrap();
    assert_eq!(second_data, ActiveChanged { active: false });
}
