//! Irons and the models they are built from.
//!
//! All models share one state machine ([`Iron`]); a model only picks the
//! temperature limit and the two maintenance policies.

mod machine;
mod model;

pub use machine::{Iron, IronStatus};
pub use model::{IronConfig, IronModel};
