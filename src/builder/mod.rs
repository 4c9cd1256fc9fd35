//! Builder API for assembling irons outside the three presets.

pub mod error;
pub mod iron;

pub use error::BuildError;
pub use iron::IronBuilder;
