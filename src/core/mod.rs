//! # Core Module
//!
//! Core domain types, configuration, and the outbound messaging seam.
//!
//! - **Version**: 1.2.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.2.0: Add messenger module so handlers never touch the gateway directly
//! - 1.1.0: Add response module with reply templates and length limits
//! - 1.0.0: Initial creation with config module

pub mod config;
pub mod messenger;
pub mod response;

// Re-export commonly used items
pub use config::Config;
pub use messenger::{IncomingMessage, Messenger};
pub use response::{discord_relative_time, truncate_for_message, MESSAGE_LIMIT};
