//! # Features
//!
//! Command-independent building blocks: dice rolls, stamina math, the daily
//! reset clock and one-shot reminders.

pub mod daily_reset;
pub mod dice;
pub mod reminders;
pub mod stamina;

pub use daily_reset::{next_reset, ResetError};
pub use dice::roll_percent;
pub use reminders::{ReminderScheduler, ScheduledReminder};
pub use stamina::{StaminaError, StaminaValue, MAX_POWER, REGEN_RATE_MINUTES};
