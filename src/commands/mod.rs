//! # Command System
//!
//! Plain-text trigger handling for channel messages.
//!
//! - **Version**: 3.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 3.0.0: Classification split from dispatch; one handler per command
//! - 2.0.0: Handlers receive a shared context instead of the gateway session
//! - 1.0.0: Initial trigger commands

pub mod context;
pub mod handlers;
pub mod matcher;

// Re-export the CommandHandler from the handler module
pub use crate::command_handler::CommandHandler;

pub use context::CommandContext;
pub use matcher::{classify, CommandKind};
