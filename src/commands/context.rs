//! Shared context for command handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 2.0.0

use std::sync::Arc;

use crate::core::messenger::Messenger;
use crate::features::reminders::ReminderScheduler;

/// Services every handler may need.
///
/// Holds no per-message state, so one instance serves all concurrent
/// message events.
#[derive(Clone)]
pub struct CommandContext {
    pub messenger: Arc<dyn Messenger>,
    pub scheduler: ReminderScheduler,
    pub reset_timezone: String,
}

impl CommandContext {
    pub fn new(messenger: Arc<dyn Messenger>, reset_timezone: impl Into<String>) -> Self {
        Self {
            scheduler: ReminderScheduler::new(Arc::clone(&messenger)),
            messenger,
            reset_timezone: reset_timezone.into(),
        }
    }
}
