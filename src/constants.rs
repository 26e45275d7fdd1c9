//! Application-wide constants for tuning and configuration
//!
//! Centralizes magic numbers to make them discoverable and configurable.

/// Maximum number of retry attempts for remote provider requests.
pub const PROVIDER_MAX_RETRIES: u32 = 3;

/// Initial delay in milliseconds before the first provider retry.
/// Doubles on each attempt.
pub const PROVIDER_INITIAL_RETRY_DELAY_MS: u64 = 500;

/// Placeholder the phrase banks use for the sender's name.
/// Replaced with the configured signature when one is set.
pub const SIGNATURE_PLACEHOLDER: &str = "[Your Name]";
