use std::time::Duration;

/// Default tick interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// How long a status notice stays on screen, in milliseconds
pub const NOTICE_LIFETIME_MS: u64 = 3000;

/// Get tick duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

/// Get notice lifetime
pub fn notice_lifetime() -> Duration {
    Duration::from_millis(NOTICE_LIFETIME_MS)
}
