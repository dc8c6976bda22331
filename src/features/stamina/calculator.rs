use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

/// Power cap.
pub const MAX_POWER: u32 = 240;
/// Minutes to regenerate a single unit of power.
pub const REGEN_RATE_MINUTES: i64 = 6;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StaminaError {
    #[error("no stamina number given")]
    Missing,

    #[error("'{0}' is not a valid stamina number")]
    Invalid(String),

    #[error("stamina number {0} out of range (0-240)")]
    OutOfRange(u64),
}

/// Current power, always within `0..=MAX_POWER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StaminaValue(u32);

impl StaminaValue {
    pub fn new(value: u32) -> Result<Self, StaminaError> {
        if value > MAX_POWER {
            return Err(StaminaError::OutOfRange(u64::from(value)));
        }
        Ok(StaminaValue(value))
    }

    /// Parse the digit run the matcher pulled out of a reminder request.
    pub fn parse(raw: &str) -> Result<Self, StaminaError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(StaminaError::Missing);
        }
        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(StaminaError::Invalid(raw.to_string()));
        }

        // Only overflow can fail here; anything that big is out of range anyway
        let value: u64 = raw
            .parse()
            .map_err(|_| StaminaError::Invalid(raw.to_string()))?;
        if value > u64::from(MAX_POWER) {
            return Err(StaminaError::OutOfRange(value));
        }
        Self::new(value as u32)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

/// Power still missing until the cap.
pub fn remaining_power(current: StaminaValue) -> u32 {
    MAX_POWER - current.get()
}

/// Instant at which `remaining` units will have regenerated, counted from `now`.
pub fn regen_timestamp(now: DateTime<Utc>, remaining: u32) -> DateTime<Utc> {
    now + Duration::minutes(i64::from(remaining) * REGEN_RATE_MINUTES)
}
