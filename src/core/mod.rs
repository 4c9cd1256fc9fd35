//! Core state types.
//!
//! This module contains the pieces shared by every iron:
//! - The `State` trait and the `IronPhase` it is implemented for
//! - Immutable history of phase transitions

mod history;
mod state;

pub use history::{Operation, StateHistory, StateTransition};
pub use state::{IronPhase, State};
