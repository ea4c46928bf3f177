use crate::{errors::log_error, events, ContractError};
use exchange_common::ttl;
use soroban_sdk::{symbol_short, Address, Env, Symbol};

// ── Storage Keys ─────────────────────────────────────────────

const GLOBAL_PAUSE: Symbol = symbol_short!("P_GLOB");

// ── Core Logistics ───────────────────────────────────────────

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&GLOBAL_PAUSE)
        .unwrap_or(false)
}

/// Fails with `Paused` while the breaker is engaged. Guards every
/// patient-side mutation; reads are never blocked.
pub fn require_not_paused(
    env: &Env,
    caller: &Address,
    operation: Symbol,
) -> Result<(), ContractError> {
    if is_paused(env) {
        return Err(log_error(
            env,
            ContractError::Paused,
            Some(caller.clone()),
            operation,
        ));
    }
    Ok(())
}

/// Engages the circuit breaker. Admin only.
pub fn pause_contract(env: &Env, caller: &Address) -> Result<(), ContractError> {
    set_paused(env, caller, true, symbol_short!("pause"))?;
    events::publish_contract_paused(env, caller.clone());
    Ok(())
}

/// Releases the circuit breaker. Admin only.
pub fn resume_contract(env: &Env, caller: &Address) -> Result<(), ContractError> {
    set_paused(env, caller, false, symbol_short!("resume"))?;
    events::publish_contract_resumed(env, caller.clone());
    Ok(())
}

fn set_paused(
    env: &Env,
    caller: &Address,
    paused: bool,
    operation: Symbol,
) -> Result<(), ContractError> {
    exchange_common::require_admin(env, caller)
        .map_err(|e| log_error(env, e.into(), Some(caller.clone()), operation))?;

    env.storage().instance().set(&GLOBAL_PAUSE, &paused);
    ttl::extend_instance(env);
    Ok(())
}
