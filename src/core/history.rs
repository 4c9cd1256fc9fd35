//! Phase transition history.
//!
//! Every time an iron changes phase, the change is appended to an
//! immutable history together with the operation that caused it.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Public operation of an iron that can trigger a phase change.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Operation {
    TurnOn,
    TurnOff,
    UseSteam,
    Descale,
    IronAtTemperature,
    IronByProgram,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::TurnOn => "turn_on",
            Self::TurnOff => "turn_off",
            Self::UseSteam => "use_steam",
            Self::Descale => "descale",
            Self::IronAtTemperature => "iron_at_temperature",
            Self::IronByProgram => "iron_by_program",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use ironsim::core::{IronPhase, Operation, StateTransition};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: IronPhase::Off,
///     to: IronPhase::Idle,
///     timestamp: Utc::now(),
///     trigger: Operation::TurnOn,
/// };
/// assert_eq!(transition.trigger, Operation::TurnOn);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// The operation that caused it
    pub trigger: Operation,
}

/// Ordered history of state transitions.
///
/// `record` returns a new history with the transition appended; the
/// original is left untouched.
///
/// # Example
///
/// ```rust
/// use ironsim::core::{IronPhase, Operation, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: IronPhase::Off,
///         to: IronPhase::Idle,
///         timestamp: Utc::now(),
///         trigger: Operation::TurnOn,
///     })
///     .record(StateTransition {
///         from: IronPhase::Idle,
///         to: IronPhase::Steaming,
///         timestamp: Utc::now(),
///         trigger: Operation::UseSteam,
///     });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&IronPhase::Off, &IronPhase::Idle, &IronPhase::Steaming]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: initial state, then
    /// the `to` state of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Duration between the first and last transition, `None` when empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    /// Transitions caused by a given operation.
    pub fn triggered_by(&self, operation: Operation) -> impl Iterator<Item = &StateTransition<S>> {
        self.transitions
            .iter()
            .filter(move |transition| transition.trigger == operation)
    }
}
