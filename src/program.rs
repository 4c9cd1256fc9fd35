//! Fabric programs and the temperature table they map to.
//!
//! The table is fixed at compile time and shared read-only by every iron.
//! Lookups scan it in declaration order: Linen, Cotton, Silk, Synthetics.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use thiserror::Error;

/// Temperature in degrees Celsius.
pub type Celsius = i32;

/// Lowest temperature any program accepts.
pub const MIN_TEMPERATURE: Celsius = 90;

/// Highest temperature any program accepts.
pub const MAX_TEMPERATURE: Celsius = 230;

/// Below this temperature steam cannot be used.
pub const MIN_STEAM_TEMPERATURE: Celsius = 120;

/// A named ironing preset.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum FabricProgram {
    Linen,
    Cotton,
    Silk,
    Synthetics,
}

/// The program table, in lookup order.
pub const PROGRAM_TABLE: [FabricProgram; 4] = [
    FabricProgram::Linen,
    FabricProgram::Cotton,
    FabricProgram::Silk,
    FabricProgram::Synthetics,
];

impl FabricProgram {
    /// Program name as shown to the user.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linen => "Linen",
            Self::Cotton => "Cotton",
            Self::Silk => "Silk",
            Self::Synthetics => "Synthetics",
        }
    }

    /// Inclusive temperature range for this program.
    pub fn range(&self) -> RangeInclusive<Celsius> {
        match self {
            Self::Linen => 200..=230,
            Self::Cotton => 150..=199,
            Self::Silk => 120..=149,
            Self::Synthetics => 90..=119,
        }
    }

    pub fn min_temperature(&self) -> Celsius {
        *self.range().start()
    }

    pub fn max_temperature(&self) -> Celsius {
        *self.range().end()
    }

    /// Find the first program whose range contains `temperature`.
    ///
    /// Returns `None` when no program covers it, which the ironing report
    /// shows as the "Invalid" program.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ironsim::program::FabricProgram;
    ///
    /// assert_eq!(FabricProgram::for_temperature(170), Some(FabricProgram::Cotton));
    /// assert_eq!(FabricProgram::for_temperature(200), Some(FabricProgram::Linen));
    /// assert_eq!(FabricProgram::for_temperature(40), None);
    /// ```
    pub fn for_temperature(temperature: Celsius) -> Option<Self> {
        PROGRAM_TABLE
            .iter()
            .copied()
            .find(|program| program.range().contains(&temperature))
    }
}

impl fmt::Display for FabricProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors from looking up a program by name.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProgramError {
    #[error("Unknown ironing program '{0}'")]
    Unknown(String),
}

impl FromStr for FabricProgram {
    type Err = ProgramError;

    /// Names match exactly; "linen" is not "Linen".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PROGRAM_TABLE
            .iter()
            .copied()
            .find(|program| program.name() == s)
            .ok_or_else(|| ProgramError::Unknown(s.to_string()))
    }
}

/// Whether `temperature` lies within the bounds of the whole table.
pub fn is_supported_temperature(temperature: Celsius) -> bool {
    (MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&temperature)
}
