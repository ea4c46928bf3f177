//! Admin-managed allow-list of researcher addresses.
//!
//! A patient who calls `share_with_researchers` opens their data reference to
//! every address on this list, and to no one else.

use exchange_common::ttl;
use soroban_sdk::{symbol_short, Address, Env, Symbol};

const RESEARCHER: Symbol = symbol_short!("RSRCHR");

fn researcher_key(researcher: &Address) -> (Symbol, Address) {
    (RESEARCHER, researcher.clone())
}

pub fn is_researcher(env: &Env, address: &Address) -> bool {
    env.storage().persistent().has(&researcher_key(address))
}

/// Returns false if `researcher` was already registered.
pub fn add_researcher(env: &Env, researcher: &Address) -> bool {
    if is_researcher(env, researcher) {
        return false;
    }
    let key = researcher_key(researcher);
    env.storage().persistent().set(&key, &true);
    ttl::extend_persistent(env, &key);
    true
}

/// Returns false if `researcher` was not registered.
pub fn remove_researcher(env: &Env, researcher: &Address) -> bool {
    if !is_researcher(env, researcher) {
        return false;
    }
    env.storage().persistent().remove(&researcher_key(researcher));
    true
}
