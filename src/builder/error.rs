//! Build errors for the iron builder.

use crate::program::Celsius;
use thiserror::Error;

/// Problems found while validating an iron configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Iron name is empty. Call .name(name) with a non-empty name")]
    EmptyName,

    #[error("Maximum temperature not specified. Call .max_temperature(celsius)")]
    MissingMaxTemperature,

    #[error("Maximum temperature {max_temperature}°C is outside the supported {min}..={max}°C")]
    MaxTemperatureOutOfRange {
        max_temperature: Celsius,
        min: Celsius,
        max: Celsius,
    },
}
