use crate::{ttl, CommonError};
use soroban_sdk::{symbol_short, Address, Env, Symbol};

// ── Storage Keys ─────────────────────────────────────────────────────────────

const ADMIN: Symbol = symbol_short!("ADMIN");
const INITIALIZED: Symbol = symbol_short!("INIT");

// ── Core Functions ───────────────────────────────────────────────────────────

/// Stores `admin` as the contract admin and marks the contract initialized.
///
/// Callers must have authenticated `admin` beforehand.
///
/// # Errors
/// [`CommonError::AlreadyInitialized`] if an admin is already set.
pub fn set_admin(env: &Env, admin: &Address) -> Result<(), CommonError> {
    if is_initialized(env) {
        return Err(CommonError::AlreadyInitialized);
    }

    env.storage().instance().set(&ADMIN, admin);
    env.storage().instance().set(&INITIALIZED, &true);
    ttl::extend_instance(env);

    Ok(())
}

/// Returns true once [`set_admin`] has succeeded.
pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&INITIALIZED)
}

/// Returns the admin address.
pub fn get_admin(env: &Env) -> Result<Address, CommonError> {
    env.storage()
        .instance()
        .get(&ADMIN)
        .ok_or(CommonError::NotInitialized)
}

/// Guard: fails unless `caller` is the stored admin.
///
/// Does not call `require_auth`; the entry point is expected to do so.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), CommonError> {
    let admin = get_admin(env)?;
    if admin != *caller {
        return Err(CommonError::AccessDenied);
    }
    Ok(())
}
