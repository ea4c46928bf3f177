//! Persistent storage of [`PatientRecord`]s, one per patient address.

use exchange_common::ttl;
use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env, Symbol, Vec};

const PATIENT: Symbol = symbol_short!("PATIENT");

/// A patient's data reference and the set of providers allowed to read it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientRecord {
    /// Opaque pointer (hash) to off-chain health data.
    pub data_reference: BytesN<32>,
    /// Providers granted read access. Never holds duplicates.
    pub authorized_providers: Vec<Address>,
    pub shared_with_researchers: bool,
    /// Ledger sequence of the first `store_data`.
    pub created_at: u32,
    /// Ledger sequence of the last mutation.
    pub updated_at: u32,
}

impl PatientRecord {
    pub fn new(env: &Env, data_reference: BytesN<32>, ledger: u32) -> Self {
        Self {
            data_reference,
            authorized_providers: Vec::new(env),
            shared_with_researchers: false,
            created_at: ledger,
            updated_at: ledger,
        }
    }

    pub fn is_authorized_provider(&self, provider: &Address) -> bool {
        self.authorized_providers.contains(provider)
    }

    /// Self-access always holds; anyone else needs an explicit grant.
    pub fn permits(&self, patient: &Address, provider: &Address) -> bool {
        provider == patient || self.is_authorized_provider(provider)
    }

    /// Inserts `provider` into the set. Returns false if it was already there.
    pub fn add_provider(&mut self, provider: &Address) -> bool {
        if self.is_authorized_provider(provider) {
            return false;
        }
        self.authorized_providers.push_back(provider.clone());
        true
    }

    /// Removes `provider` from the set. Returns false if it was absent.
    pub fn remove_provider(&mut self, provider: &Address) -> bool {
        match self.authorized_providers.first_index_of(provider) {
            Some(index) => {
                self.authorized_providers.remove(index);
                true
            }
            None => false,
        }
    }
}

fn record_key(patient: &Address) -> (Symbol, Address) {
    (PATIENT, patient.clone())
}

pub fn has_record(env: &Env, patient: &Address) -> bool {
    env.storage().persistent().has(&record_key(patient))
}

pub fn load(env: &Env, patient: &Address) -> Option<PatientRecord> {
    env.storage().persistent().get(&record_key(patient))
}

/// Writes `record` and bumps its TTL.
pub fn save(env: &Env, patient: &Address, record: &PatientRecord) {
    let key = record_key(patient);
    env.storage().persistent().set(&key, record);
    ttl::extend_persistent(env, &key);
}
