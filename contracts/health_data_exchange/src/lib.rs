#![no_std]
//! Patient health-data access registry.
//!
//! A patient stores a 32-byte reference to off-chain health data, then decides
//! which providers may read it back. Patients may also open the reference to
//! the researchers on an admin-managed allow-list.

pub mod circuit_breaker;
pub mod errors;
pub mod events;
pub mod registry;
pub mod researchers;

use soroban_sdk::{contract, contractimpl, symbol_short, Address, BytesN, Env, Symbol, Vec};

pub use errors::{
    create_error_context, log_error, ContractError, ErrorCategory, ErrorContext, ErrorSeverity,
};
pub use registry::PatientRecord;

#[contract]
pub struct HealthDataExchangeContract;

/// Loads the caller's own record, or fails with `NotFound`.
fn own_record(
    env: &Env,
    patient: &Address,
    operation: Symbol,
) -> Result<PatientRecord, ContractError> {
    registry::load(env, patient).ok_or_else(|| {
        log_error(env, ContractError::NotFound, Some(patient.clone()), operation)
    })
}

#[contractimpl]
impl HealthDataExchangeContract {
    // ======================== Lifecycle ========================

    /// Initialize the contract with an admin address
    pub fn initialize(env: Env, admin: Address) -> Result<(), ContractError> {
        admin.require_auth();

        exchange_common::set_admin(&env, &admin).map_err(|e| {
            log_error(&env, e.into(), Some(admin.clone()), symbol_short!("init"))
        })?;

        events::publish_initialized(&env, admin);

        Ok(())
    }

    /// Get the admin address
    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        exchange_common::get_admin(&env).map_err(ContractError::from)
    }

    /// Check if the contract is initialized
    pub fn is_initialized(env: Env) -> bool {
        exchange_common::is_initialized(&env)
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }

    // ======================== Patient Records ========================

    /// Store (or replace) the caller's data reference.
    ///
    /// The first call creates the record. Later calls only swap the
    /// reference; grants and the researcher flag are kept.
    pub fn store_data(
        env: Env,
        patient: Address,
        data_reference: BytesN<32>,
    ) -> Result<bool, ContractError> {
        circuit_breaker::require_not_paused(&env, &patient, symbol_short!("store"))?;
        patient.require_auth();

        let ledger = env.ledger().sequence();
        let (record, created) = match registry::load(&env, &patient) {
            Some(mut record) => {
                record.data_reference = data_reference.clone();
                record.updated_at = ledger;
                (record, false)
            }
            None => (
                PatientRecord::new(&env, data_reference.clone(), ledger),
                true,
            ),
        };
        registry::save(&env, &patient, &record);

        events::publish_data_stored(&env, patient, data_reference, created);

        Ok(true)
    }

    /// Allow `provider` to read the caller's data reference. Idempotent.
    pub fn grant_access(
        env: Env,
        patient: Address,
        provider: Address,
    ) -> Result<bool, ContractError> {
        circuit_breaker::require_not_paused(&env, &patient, symbol_short!("grant"))?;
        patient.require_auth();

        let mut record = own_record(&env, &patient, symbol_short!("grant"))?;
        if record.add_provider(&provider) {
            record.updated_at = env.ledger().sequence();
            registry::save(&env, &patient, &record);
            events::publish_access_granted(&env, patient, provider);
        }

        Ok(true)
    }

    /// Withdraw a provider's access. Revoking an absent grant succeeds.
    pub fn revoke_access(
        env: Env,
        patient: Address,
        provider: Address,
    ) -> Result<bool, ContractError> {
        circuit_breaker::require_not_paused(&env, &patient, symbol_short!("revoke"))?;
        patient.require_auth();

        let mut record = own_record(&env, &patient, symbol_short!("revoke"))?;
        if record.remove_provider(&provider) {
            record.updated_at = env.ledger().sequence();
            registry::save(&env, &patient, &record);
            events::publish_access_revoked(&env, patient, provider);
        }

        Ok(true)
    }

    /// True iff `patient` has a record and `provider` is the patient or holds
    /// a grant. Never fails.
    pub fn check_access(env: Env, patient: Address, provider: Address) -> bool {
        registry::load(&env, &patient)
            .map(|record| record.permits(&patient, &provider))
            .unwrap_or(false)
    }

    /// Open the caller's record to registered researchers.
    pub fn share_with_researchers(env: Env, patient: Address) -> Result<bool, ContractError> {
        circuit_breaker::require_not_paused(&env, &patient, symbol_short!("share"))?;
        patient.require_auth();

        let mut record = own_record(&env, &patient, symbol_short!("share"))?;
        if !record.shared_with_researchers {
            record.shared_with_researchers = true;
            record.updated_at = env.ledger().sequence();
            registry::save(&env, &patient, &record);
            events::publish_shared_with_researchers(&env, patient);
        }

        Ok(true)
    }

    /// Read a patient's data reference.
    ///
    /// A missing record and a refused caller both yield `NotFound`.
    pub fn get_patient_data(
        env: Env,
        caller: Address,
        patient: Address,
    ) -> Result<BytesN<32>, ContractError> {
        caller.require_auth();

        let record = registry::load(&env, &patient)
            .filter(|record| {
                record.permits(&patient, &caller)
                    || (record.shared_with_researchers
                        && researchers::is_researcher(&env, &caller))
            })
            .ok_or_else(|| {
                log_error(
                    &env,
                    ContractError::NotFound,
                    Some(caller.clone()),
                    symbol_short!("get_data"),
                )
            })?;

        events::publish_data_read(&env, patient, caller);

        Ok(record.data_reference)
    }

    /// Whether `patient` has stored a data reference.
    pub fn has_record(env: Env, patient: Address) -> bool {
        registry::has_record(&env, &patient)
    }

    /// Providers currently granted access, in grant order.
    pub fn get_authorized_providers(env: Env, patient: Address) -> Vec<Address> {
        registry::load(&env, &patient)
            .map(|record| record.authorized_providers)
            .unwrap_or(Vec::new(&env))
    }

    /// Whether `patient` has opened their record to researchers.
    pub fn is_shared_with_researchers(env: Env, patient: Address) -> bool {
        registry::load(&env, &patient)
            .map(|record| record.shared_with_researchers)
            .unwrap_or(false)
    }

    // ======================== Researchers ========================

    /// Add `researcher` to the allow-list. Admin only; idempotent.
    pub fn register_researcher(
        env: Env,
        caller: Address,
        researcher: Address,
    ) -> Result<bool, ContractError> {
        caller.require_auth();
        exchange_common::require_admin(&env, &caller).map_err(|e| {
            log_error(&env, e.into(), Some(caller.clone()), symbol_short!("add_rsrch"))
        })?;

        if researchers::add_researcher(&env, &researcher) {
            events::publish_researcher_added(&env, caller, researcher);
        }

        Ok(true)
    }

    /// Drop `researcher` from the allow-list. Admin only; idempotent.
    pub fn remove_researcher(
        env: Env,
        caller: Address,
        researcher: Address,
    ) -> Result<bool, ContractError> {
        caller.require_auth();
        exchange_common::require_admin(&env, &caller).map_err(|e| {
            log_error(&env, e.into(), Some(caller.clone()), symbol_short!("del_rsrch"))
        })?;

        if researchers::remove_researcher(&env, &researcher) {
            events::publish_researcher_removed(&env, caller, researcher);
        }

        Ok(true)
    }

    /// Whether `address` is on the researcher allow-list.
    pub fn is_researcher(env: Env, address: Address) -> bool {
        researchers::is_researcher(&env, &address)
    }

    // ======================== Circuit Breaker ========================

    /// Block patient mutations. Admin only.
    pub fn pause(env: Env, caller: Address) -> Result<(), ContractError> {
        caller.require_auth();
        circuit_breaker::pause_contract(&env, &caller)
    }

    /// Lift a pause. Admin only.
    pub fn resume(env: Env, caller: Address) -> Result<(), ContractError> {
        caller.require_auth();
        circuit_breaker::resume_contract(&env, &caller)
    }

    /// Whether patient mutations are currently blocked.
    pub fn is_paused(env: Env) -> bool {
        circuit_breaker::is_paused(&env)
    }
}
