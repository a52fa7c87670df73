//! Program-wide constants.

/// Seed of the singleton wallet state PDA.
pub const WALLET_STATE_SEED: &[u8] = b"wallet_state";

/// Seed of the custody vault token account PDA.
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed of each per-investor schedule record PDA.
pub const INVESTOR_SEED: &[u8] = b"investor";

/// Max schedules stored on a single investor record.
pub const MAX_SCHEDULES_PER_INVESTOR: usize = 32;

/// Upper bound on `vesting_duration / vesting_interval`.
pub const MAX_DURATION_PERIODS: u64 = 240;
