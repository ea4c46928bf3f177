use soroban_sdk::{Env, IntoVal, Val};

/// Ledgers closed per day at a ~5 second close time.
pub const DAY_IN_LEDGERS: u32 = 17_280;

/// Remaining TTL below which an entry gets bumped.
pub const TTL_THRESHOLD: u32 = 30 * DAY_IN_LEDGERS;
/// TTL an entry is bumped to.
pub const TTL_EXTEND_TO: u32 = 120 * DAY_IN_LEDGERS;

/// Extends the TTL of a persistent entry. The key must already exist.
pub fn extend_persistent<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Extends the TTL of the contract instance (applies to all instance keys).
pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}
