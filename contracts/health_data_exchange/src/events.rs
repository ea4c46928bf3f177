use crate::errors::ErrorContext;
use soroban_sdk::{symbol_short, Address, BytesN, Env};

/// Event published when the contract is initialized.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub ledger: u32,
}

/// Event published when a patient stores or replaces their data reference.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DataStoredEvent {
    pub patient: Address,
    pub data_reference: BytesN<32>,
    pub created: bool,
    pub ledger: u32,
}

/// Event published when a patient grants a provider access.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessGrantedEvent {
    pub patient: Address,
    pub provider: Address,
    pub ledger: u32,
}

/// Event published when a patient revokes a provider's access.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessRevokedEvent {
    pub patient: Address,
    pub provider: Address,
    pub ledger: u32,
}

/// Event published when a patient opens their record to researchers.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SharedWithResearchersEvent {
    pub patient: Address,
    pub ledger: u32,
}

/// Event published on every successful `get_patient_data`.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DataReadEvent {
    pub patient: Address,
    pub reader: Address,
    pub ledger: u32,
}

/// Event published when the researcher allow-list changes.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResearcherChangedEvent {
    pub researcher: Address,
    pub admin: Address,
    pub ledger: u32,
}

/// Event published when the circuit breaker is engaged or released.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseChangedEvent {
    pub admin: Address,
    pub ledger: u32,
}

pub fn publish_initialized(env: &Env, admin: Address) {
    let topics = (symbol_short!("INIT"),);
    let data = InitializedEvent {
        admin,
        ledger: env.ledger().sequence(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a data reference is stored.
/// `created` is true when the store created the patient's record.
pub fn publish_data_stored(
    env: &Env,
    patient: Address,
    data_reference: BytesN<32>,
    created: bool,
) {
    let topics = (symbol_short!("DATA_STR"), patient.clone());
    let data = DataStoredEvent {
        patient,
        data_reference,
        created,
        ledger: env.ledger().sequence(),
    };
    env.events().publish(topics, data);
}

pub fn publish_access_granted(env: &Env, patient: Address, provider: Address) {
    let topics = (symbol_short!("ACC_GRT"), patient.clone(), provider.clone());
    let data = AccessGrantedEvent {
        patient,
        provider,
        ledger: env.ledger().sequence(),
    };
    env.events().publish(topics, data);
}

pub fn publish_access_revoked(env: &Env, patient: Address, provider: Address) {
    let topics = (symbol_short!("ACC_REV"), patient.clone(), provider.clone());
    let data = AccessRevokedEvent {
        patient,
        provider,
        ledger: env.ledger().sequence(),
    };
    env.events().publish(topics, data);
}

pub fn publish_shared_with_researchers(env: &Env, patient: Address) {
    let topics = (symbol_short!("RSRCH_SH"), patient.clone());
    let data = SharedWithResearchersEvent {
        patient,
        ledger: env.ledger().sequence(),
    };
    env.events().publish(topics, data);
}

/// Publishes an audit event for a successful read. The reference itself is
/// not repeated in the payload.
pub fn publish_data_read(env: &Env, patient: Address, reader: Address) {
    let topics = (symbol_short!("DATA_RD"), patient.clone(), reader.clone());
    let data = DataReadEvent {
        patient,
        reader,
        ledger: env.ledger().sequence(),
    };
    env.events().publish(topics, data);
}

pub fn publish_researcher_added(env: &Env, admin: Address, researcher: Address) {
    let topics = (symbol_short!("RSR_ADD"), researcher.clone());
    let data = ResearcherChangedEvent {
        researcher,
        admin,
        ledger: env.ledger().sequence(),
    };
    env.events().publish(topics, data);
}

pub fn publish_researcher_removed(env: &Env, admin: Address, researcher: Address) {
    let topics = (symbol_short!("RSR_DEL"), researcher.clone());
    let data = ResearcherChangedEvent {
        researcher,
        admin,
        ledger: env.ledger().sequence(),
    };
    env.events().publish(topics, data);
}

pub fn publish_contract_paused(env: &Env, admin: Address) {
    let topics = (symbol_short!("PAUSED"),);
    let data = PauseChangedEvent {
        admin,
        ledger: env.ledger().sequence(),
    };
    env.events().publish(topics, data);
}

pub fn publish_contract_resumed(env: &Env, admin: Address) {
    let topics = (symbol_short!("RESUMED"),);
    let data = PauseChangedEvent {
        admin,
        ledger: env.ledger().sequence(),
    };
    env.events().publish(topics, data);
}

/// Publishes an error event for monitoring and indexing.
pub fn publish_error(env: &Env, error_code: u32, context: ErrorContext) {
    let topics = (
        symbol_short!("ERROR"),
        context.category.clone(),
        context.severity.clone(),
    );
    let data = (
        error_code,
        context.message,
        context.user,
        context.operation,
        context.retryable,
        context.ledger,
    );
    env.events().publish(topics, data);
}
