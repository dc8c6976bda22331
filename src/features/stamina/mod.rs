//! # Stamina Feature
//!
//! Power bookkeeping for the reminder command: validation of the number the
//! user typed and the time at which power is full again.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.2.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Regeneration no longer wraps for large deficits
//! - 1.0.0: Initial release

pub mod calculator;

pub use calculator::{
    regen_timestamp, remaining_power, StaminaError, StaminaValue, MAX_POWER, REGEN_RATE_MINUTES,
};
