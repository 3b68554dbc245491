use soroban_sdk::Env;

use crate::storage_types::{Error, SECONDS_PER_DAY};

/// Convert days to seconds
pub fn days_to_seconds(days: u32) -> u64 {
    days as u64 * SECONDS_PER_DAY
}

/// Get current timestamp
pub fn get_current_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}

/// True once the ledger clock has reached `deadline`
pub fn is_reached(env: &Env, deadline: u64) -> bool {
    env.ledger().timestamp() >= deadline
}

/// Seconds remaining until `deadline`, zero once reached
pub fn seconds_until(env: &Env, deadline: u64) -> u64 {
    deadline.saturating_sub(env.ledger().timestamp())
}

/// Compute `now + duration_days` as an absolute deadline
pub fn deadline_after_days(env: &Env, duration_days: u32) -> Result<u64, Error> {
    if duration_days == 0 {
        return Err(Error::InvalidDuration);
    }
    get_current_timestamp(env)
        .checked_add(days_to_seconds(duration_days))
        .ok_or(Error::Overflow)
}
