//! # Reminders Feature
//!
//! Fire-and-forget "stamina is full" reminders. Pending reminders live only
//! in spawned tasks; a restart drops them.
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.2.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 2.0.0: One-shot timer per reminder instead of a polling loop
//! - 1.0.0: Initial release

pub mod scheduler;

pub use scheduler::{schedule_once, ReminderScheduler, ScheduledReminder};
