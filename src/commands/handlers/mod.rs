//! Per-command handler implementations
//!
//! - **Version**: 1.0.0
//! - **Since**: 3.0.0

pub mod dice;
pub mod exh;
pub mod remind;
pub mod reset;

pub use dice::DiceHandler;
pub use exh::ExhHandler;
pub use remind::RemindHandler;
pub use reset::ResetHandler;
