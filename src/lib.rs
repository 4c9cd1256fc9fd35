//! Ironsim: a state machine simulation of home ironing appliances.
//!
//! Every iron shares one state machine. Models differ only in how hot they
//! get and in two maintenance policies: what happens when the iron is due
//! for cleaning, and whether it reminds the user to refill water.
//!
//! # Core Concepts
//!
//! - **Programs**: fabric presets mapping to inclusive temperature ranges
//! - **Irons**: power, steam, usage counters and the six operations on them
//! - **Reports**: every operation returns the notices it produced; nothing fails
//! - **History**: immutable record of phase changes (Off, Idle, Steaming)
//!
//! # Example
//!
//! ```rust
//! use ironsim::{Iron, Notice};
//! use ironsim::program::FabricProgram;
//!
//! let mut iron = Iron::linen();
//! iron.turn_on();
//!
//! let report = iron.iron_at_temperature(210);
//! assert!(matches!(
//!     report.ironing(),
//!     Some(Notice::Ironed { program: Some(FabricProgram::Linen), with_steam: true, .. })
//! ));
//! assert_eq!(iron.steam_count(), 1);
//! assert!(!iron.is_steaming());
//! ```

pub mod builder;
pub mod core;
pub mod iron;
pub mod policy;
pub mod program;
pub mod report;

// Re-export commonly used types
pub use builder::{BuildError, IronBuilder};
pub use self::core::{IronPhase, Operation, State, StateHistory, StateTransition};
pub use iron::{Iron, IronConfig, IronModel, IronStatus};
pub use program::{Celsius, FabricProgram};
pub use report::{Notice, Report};
