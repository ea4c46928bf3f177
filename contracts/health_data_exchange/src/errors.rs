use crate::events;
use exchange_common::CommonError;
use soroban_sdk::{contracttype, log, Address, Env, String, Symbol};

/// Error categories for classifying different types of errors
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorCategory {
    /// Lifecycle errors: initialisation order
    Lifecycle = 1,
    /// Authorization errors: admin-only operations called by someone else
    Authorization = 2,
    /// Not found errors: missing record or unauthorized read
    NotFound = 3,
    /// System errors: contract-level issues like pausing
    System = 4,
}

/// Error severity levels indicating the impact and urgency of errors
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorSeverity {
    Low = 1,
    Medium = 2,
    Critical = 3,
}

/// Context attached to every published error event.
#[contracttype]
#[derive(Clone, Debug)]
pub struct ErrorContext {
    pub category: ErrorCategory,
    pub severity: ErrorSeverity,
    pub message: String,
    pub user: Option<Address>,
    pub operation: Symbol,
    pub ledger: u32,
    pub retryable: bool,
}

/// Contract errors.
///
/// Codes below 100 mirror [`CommonError`]. `NotFound` is the only
/// contract-specific code and covers both a missing record and a refused
/// reader.
#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 10,
    Paused = 40,
    NotFound = 101,
}

impl From<CommonError> for ContractError {
    fn from(err: CommonError) -> Self {
        match err {
            CommonError::NotInitialized => ContractError::NotInitialized,
            CommonError::AlreadyInitialized => ContractError::AlreadyInitialized,
            CommonError::AccessDenied => ContractError::Unauthorized,
            CommonError::Paused => ContractError::Paused,
        }
    }
}

impl ContractError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotInitialized | ContractError::AlreadyInitialized => {
                ErrorCategory::Lifecycle
            }
            ContractError::Unauthorized => ErrorCategory::Authorization,
            ContractError::NotFound => ErrorCategory::NotFound,
            ContractError::Paused => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ContractError::NotInitialized
            | ContractError::AlreadyInitialized
            | ContractError::NotFound => ErrorSeverity::Low,
            ContractError::Unauthorized => ErrorSeverity::Medium,
            ContractError::Paused => ErrorSeverity::Critical,
        }
    }

    /// Only a pause is expected to clear on its own.
    pub fn retryable(&self) -> bool {
        matches!(self, ContractError::Paused)
    }

    pub fn message(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract is already initialized",
            ContractError::Unauthorized => "Caller is not authorized for this operation",
            ContractError::Paused => "Contract operations are currently paused",
            ContractError::NotFound => "Record not found",
        }
    }
}

/// Builds the [`ErrorContext`] for `error` raised by `operation`.
pub fn create_error_context(
    env: &Env,
    error: ContractError,
    user: Option<Address>,
    operation: Symbol,
) -> ErrorContext {
    ErrorContext {
        category: error.category(),
        severity: error.severity(),
        message: String::from_str(env, error.message()),
        user,
        operation,
        ledger: env.ledger().sequence(),
        retryable: error.retryable(),
    }
}

/// Reports `error` to the debug log and as an `ERROR` event, then hands it
/// back so call sites can write `return Err(log_error(...))`.
///
/// The host discards events of a failed invocation, so the event is only
/// visible in simulation and diagnostics.
pub fn log_error(
    env: &Env,
    error: ContractError,
    user: Option<Address>,
    operation: Symbol,
) -> ContractError {
    let code = error as u32;
    log!(env, "contract error", code, operation.clone());

    let context = create_error_context(env, error, user, operation);
    events::publish_error(env, code, context);

    error
}
