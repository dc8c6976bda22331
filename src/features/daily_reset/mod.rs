//! # Daily Reset Feature
//!
//! Next occurrence of the 06:00 server reset in the reference timezone.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod calculator;

pub use calculator::{next_reset, ResetError, RESET_HOUR};
