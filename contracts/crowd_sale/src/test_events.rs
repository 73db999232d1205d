extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    token, vec, Address, Env, IntoVal, TryIntoVal,
};

use crate::events::{ContributionAccepted, SaleEnded, SaleExtended, SaleOpened};
use crate::{CrowdSale, CrowdSaleClient, TOTAL_CAP, UNIT};

const END_TIME: u64 = 86_400;

fn setup() -> (Env, CrowdSaleClient<'static>, Address, Address, token::Client<'static>) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(CrowdSale, ());
    let client = CrowdSaleClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    let beneficiary = Address::generate(&env);
    let token = create_token(&env, &Address::generate(&env));
    client.init(&owner, &beneficiary, &token.address, &END_TIME);
    (env, client, owner, beneficiary, token)
}

fn create_token<'a>(env: &Env, admin: &Address) -> token::Client<'a> {
    let addr = env.register_stellar_asset_contract_v2(admin.clone());
    token::Client::new(env, &addr.address())
}

#[test]
fn test_sale_opened_event() {
    let (env, client, owner, beneficiary, token) = setup();

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("opened").into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: SaleOpened = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        SaleOpened {
            owner,
            beneficiary,
            payment_token: token.address.clone(),
            end_time: END_TIME,
        }
    );
}

#[test]
fn test_contribution_event_reports_refund() {
    let (env, client, _, _, token) = setup();
    let contributor = Address::generate(&env);
    let sac = token::StellarAssetClient::new(&env, &token.address);
    sac.mint(&contributor, &(2_000 * UNIT));

    client.contribute(&contributor, &(1_001 * UNIT));

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("contrib"), contributor)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("contrib").into_val(&env),
        contributor.clone().into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ContributionAccepted = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        ContributionAccepted {
            contributor: contributor.clone(),
            requested: 1_001 * UNIT,
            accepted: TOTAL_CAP,
            refunded: UNIT,
            total_contributed: TOTAL_CAP,
        }
    );
}

#[test]
fn test_sale_ended_event() {
    let (env, client, owner, _, _) = setup();

    client.end_sale(&owner);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("ended").into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: SaleEnded = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, SaleEnded { by: owner });
}

#[test]
fn test_sale_extended_event() {
    let (env, client, owner, _, _) = setup();

    client.extend_sale(&owner, &3_600);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("extended").into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: SaleExtended = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        SaleExtended {
            by: owner,
            additional_seconds: 3_600,
            end_time: END_TIME + 3_600,
        }
    );
}

#[test]
fn test_ownership_transferred_event() {
    let (env, client, owner, _, _) = setup();
    let new_owner = Address::generate(&env);

    client.transfer_ownership(&owner, &new_owner);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("own_set"), new_owner)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("own_set").into_val(&env),
        new_owner.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let previous: Option<Address> = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(previous, Some(owner));
}

#[test]
fn test_ownership_renounced_event() {
    let (env, client, owner, _, _) = setup();

    client.renounce_ownership(&owner);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("own_del"), previous_owner)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("own_del").into_val(&env),
        owner.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let previous: Option<Address> = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(previous, Some(owner));
}
