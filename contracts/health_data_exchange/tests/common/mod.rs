#![allow(dead_code)]

use health_data_exchange::{HealthDataExchangeContract, HealthDataExchangeContractClient};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{Address, BytesN, Env};

/// `0x0123456789abcdef` repeated to 32 bytes.
pub const DATA_HASH: [u8; 32] = [
    0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef,
    0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef,
];

pub struct TestContext {
    pub env: Env,
    pub client: HealthDataExchangeContractClient<'static>,
    pub admin: Address,
}

/// Creates a mocked Soroban environment, deploys the contract at ledger 1,
/// and initializes admin.
pub fn setup_test_env() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_sequence_number(1);

    let contract_id = env.register(HealthDataExchangeContract, ());
    let client = HealthDataExchangeContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin);

    TestContext { env, client, admin }
}

/// Closes the current ledger; calls made afterwards land in the next one.
/// Returns the new sequence number.
pub fn next_ledger(ctx: &TestContext) -> u32 {
    let next = ctx.env.ledger().sequence() + 1;
    ctx.env.ledger().set_sequence_number(next);
    next
}

pub fn data_hash(env: &Env) -> BytesN<32> {
    BytesN::from_array(env, &DATA_HASH)
}

/// Creates a patient that has already stored `DATA_HASH`.
pub fn create_patient(ctx: &TestContext) -> Address {
    let patient = Address::generate(&ctx.env);
    ctx.client.store_data(&patient, &data_hash(&ctx.env));
    patient
}

/// Creates a researcher registered by the admin.
pub fn create_researcher(ctx: &TestContext) -> Address {
    let researcher = Address::generate(&ctx.env);
    ctx.client.register_researcher(&ctx.admin, &researcher);
    researcher
}
