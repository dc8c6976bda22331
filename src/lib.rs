// Core layer - shared types, configuration and the messaging seam
pub mod core;

// Features layer - dice, stamina, daily reset, reminders
pub mod features;

// Transport layer - Discord implementation of the messaging seam
pub mod discord;

// Application layer
pub mod command_handler;
pub mod commands;

pub use crate::core::{Config, IncomingMessage, Messenger};

pub use features::{
    next_reset, roll_percent, ReminderScheduler, ResetError, ScheduledReminder, StaminaError,
    StaminaValue, MAX_POWER, REGEN_RATE_MINUTES,
};

pub use command_handler::CommandHandler;
pub use commands::{classify, CommandKind};
pub use discord::DiscordMessenger;
