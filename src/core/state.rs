//! Coarse phases an iron moves through.
//!
//! The `State` trait gives phases a stable name for logging and history;
//! `IronPhase` is the only implementor the simulation needs.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. States are small values that describe where a
/// machine currently is.
///
/// # Required Traits
///
/// - `Clone`: states are copied into history records
/// - `PartialEq`: only real changes are recorded
/// - `Serialize` + `Deserialize`: history can be dumped for inspection
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// Phase of a single iron, derived from its power and steam flags.
///
/// # Example
///
/// ```rust
/// use ironsim::core::{IronPhase, State};
///
/// assert_eq!(IronPhase::from_flags(false, true), IronPhase::Off);
/// assert_eq!(IronPhase::from_flags(true, false), IronPhase::Idle);
/// assert_eq!(IronPhase::from_flags(true, true).name(), "Steaming");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum IronPhase {
    Off,
    Idle,
    Steaming,
}

impl IronPhase {
    /// Power wins over steam: an unpowered iron is `Off` even with the
    /// steam flag set.
    pub fn from_flags(powered: bool, steaming: bool) -> Self {
        match (powered, steaming) {
            (false, _) => Self::Off,
            (true, false) => Self::Idle,
            (true, true) => Self::Steaming,
        }
    }
}

impl State for IronPhase {
    fn name(&self) -> &str {
        match self {
            Self::Off => "Off",
            Self::Idle => "Idle",
            Self::Steaming => "Steaming",
        }
    }
}
