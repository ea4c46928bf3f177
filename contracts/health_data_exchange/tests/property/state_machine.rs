//! Property-based state machine tests for the access registry.
//!
//! Random operation sequences run against both the contract and a plain
//! in-memory model; after every step the two must agree.
//!
//! Invariants tested:
//! - The provider set never holds duplicates and keeps grant order
//! - `check_access` matches the model for every provider
//! - Mutations on a missing record fail with `NotFound` and change nothing
//! - Researcher reads succeed exactly when the record is shared

use health_data_exchange::{
    ContractError, HealthDataExchangeContract, HealthDataExchangeContractClient,
};
use proptest::prelude::*;
use proptest_derive::Arbitrary;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, BytesN, Env};

const PROVIDERS: usize = 3;

#[derive(Arbitrary, Clone, Debug)]
enum Op {
    Store(u8),
    Grant(u8),
    Revoke(u8),
    Share,
}

#[derive(Default)]
struct Model {
    record: Option<ModelRecord>,
}

struct ModelRecord {
    data: [u8; 32],
    providers: Vec<usize>,
    shared: bool,
}

struct Harness {
    env: Env,
    client: HealthDataExchangeContractClient<'static>,
    patient: Address,
    researcher: Address,
    providers: Vec<Address>,
}

fn setup() -> Harness {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(HealthDataExchangeContract, ());
    let client = HealthDataExchangeContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin);
    let researcher = Address::generate(&env);
    client.register_researcher(&admin, &researcher);

    let patient = Address::generate(&env);
    let providers = (0..PROVIDERS).map(|_| Address::generate(&env)).collect();

    Harness {
        env,
        client,
        patient,
        researcher,
        providers,
    }
}

fn provider_index(seed: u8) -> usize {
    usize::from(seed) % PROVIDERS
}

/// Applies `op` to both sides and checks the call outcome.
fn apply(h: &Harness, model: &mut Model, op: &Op) -> Result<(), TestCaseError> {
    match op {
        Op::Store(seed) => {
            let data = [*seed; 32];
            let res = h
                .client
                .try_store_data(&h.patient, &BytesN::from_array(&h.env, &data));
            prop_assert_eq!(res, Ok(Ok(true)));
            match model.record.as_mut() {
                Some(record) => record.data = data,
                None => {
                    model.record = Some(ModelRecord {
                        data,
                        providers: Vec::new(),
                        shared: false,
                    })
                }
            }
        }
        Op::Grant(seed) => {
            let index = provider_index(*seed);
            let res = h
                .client
                .try_grant_access(&h.patient, &h.providers[index]);
            match model.record.as_mut() {
                Some(record) => {
                    prop_assert_eq!(res, Ok(Ok(true)));
                    if !record.providers.contains(&index) {
                        record.providers.push(index);
                    }
                }
                None => prop_assert_eq!(res, Err(Ok(ContractError::NotFound))),
            }
        }
        Op::Revoke(seed) => {
            let index = provider_index(*seed);
            let res = h
                .client
                .try_revoke_access(&h.patient, &h.providers[index]);
            match model.record.as_mut() {
                Some(record) => {
                    prop_assert_eq!(res, Ok(Ok(true)));
                    record.providers.retain(|p| *p != index);
                }
                None => prop_assert_eq!(res, Err(Ok(ContractError::NotFound))),
            }
        }
        Op::Share => {
            let res = h.client.try_share_with_researchers(&h.patient);
            match model.record.as_mut() {
                Some(record) => {
                    prop_assert_eq!(res, Ok(Ok(true)));
                    record.shared = true;
                }
                None => prop_assert_eq!(res, Err(Ok(ContractError::NotFound))),
            }
        }
    }
    Ok(())
}

/// Compares every observable read against the model.
fn check(h: &Harness, model: &Model) -> Result<(), TestCaseError> {
    prop_assert_eq!(h.client.has_record(&h.patient), model.record.is_some());

    let Some(record) = model.record.as_ref() else {
        prop_assert!(!h.client.check_access(&h.patient, &h.patient));
        prop_assert!(h.client.get_authorized_providers(&h.patient).is_empty());
        return Ok(());
    };

    let expected = BytesN::from_array(&h.env, &record.data);
    prop_assert!(h.client.check_access(&h.patient, &h.patient));
    prop_assert_eq!(h.client.get_patient_data(&h.patient, &h.patient), expected.clone());

    let stored = h.client.get_authorized_providers(&h.patient);
    prop_assert_eq!(stored.len() as usize, record.providers.len());
    for (position, index) in record.providers.iter().enumerate() {
        prop_assert_eq!(stored.get(position as u32).unwrap(), h.providers[*index].clone());
    }

    for (index, provider) in h.providers.iter().enumerate() {
        let granted = record.providers.contains(&index);
        prop_assert_eq!(h.client.check_access(&h.patient, provider), granted);
        let read = h.client.try_get_patient_data(provider, &h.patient);
        if granted {
            prop_assert_eq!(read, Ok(Ok(expected.clone())));
        } else {
            prop_assert_eq!(read, Err(Ok(ContractError::NotFound)));
        }
    }

    prop_assert_eq!(h.client.is_shared_with_researchers(&h.patient), record.shared);
    let research_read = h.client.try_get_patient_data(&h.researcher, &h.patient);
    if record.shared {
        prop_assert_eq!(research_read, Ok(Ok(expected)));
    } else {
        prop_assert_eq!(research_read, Err(Ok(ContractError::NotFound)));
    }

    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Any sequence of operations keeps the contract in lockstep with the model.
    #[test]
    fn prop_operations_match_model(ops in prop::collection::vec(any::<Op>(), 1..24)) {
        let h = setup();
        let mut model = Model::default();

        for op in ops.iter() {
            apply(&h, &mut model, op)?;
            check(&h, &model)?;
        }
    }

    /// Mutations before the first store never create a record.
    #[test]
    fn prop_no_implicit_record_creation(seed in any::<u8>()) {
        let h = setup();
        let mut model = Model::default();

        for op in [Op::Grant(seed), Op::Revoke(seed), Op::Share] {
            apply(&h, &mut model, &op)?;
        }
        prop_assert!(model.record.is_none());
        check(&h, &model)?;
    }
}
