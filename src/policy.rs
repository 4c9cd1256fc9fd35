//! Model-specific maintenance policies.
//!
//! Irons differ in two small behaviours: what happens when they are due
//! for cleaning, and whether they track water use for steam. Both are
//! selected per model as plain enums. Evaluation is pure; the iron
//! applies the verdict.

use serde::{Deserialize, Serialize};

/// Ironing count at which the cleaning policy kicks in.
pub const USES_BEFORE_CLEANING: u32 = 3;

/// Steam count at which the water light comes on.
pub const STEAM_USES_BEFORE_REFILL: u32 = 2;

/// What an iron does once it is due for cleaning.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum CleaningPolicy {
    /// Refuse to iron until the user descales.
    #[default]
    Manual,
    /// Descale on its own, skipping the ironing that triggered it.
    AutoDescale,
}

/// Outcome of checking the cleaning policy before ironing.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CleaningVerdict {
    Proceed,
    /// Due for cleaning; the user has to descale.
    Blocked,
    /// Due for cleaning; descale now and skip this ironing.
    DescaleAndSkip,
}

impl CleaningPolicy {
    /// Check the policy against the current ironing count.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ironsim::policy::{CleaningPolicy, CleaningVerdict};
    ///
    /// assert_eq!(CleaningPolicy::Manual.evaluate(2), CleaningVerdict::Proceed);
    /// assert_eq!(CleaningPolicy::Manual.evaluate(3), CleaningVerdict::Blocked);
    /// assert_eq!(CleaningPolicy::AutoDescale.evaluate(3), CleaningVerdict::DescaleAndSkip);
    /// ```
    pub fn evaluate(&self, ironing_count: u32) -> CleaningVerdict {
        if ironing_count != USES_BEFORE_CLEANING {
            return CleaningVerdict::Proceed;
        }
        match self {
            Self::Manual => CleaningVerdict::Blocked,
            Self::AutoDescale => CleaningVerdict::DescaleAndSkip,
        }
    }
}

/// Whether an iron reminds the user to refill water after steaming.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum SteamLightPolicy {
    #[default]
    Disabled,
    WaterReminder,
}

impl SteamLightPolicy {
    /// Returns `true` when the water light should come on for this count.
    pub fn evaluate(&self, steam_count: u32) -> bool {
        match self {
            Self::Disabled => false,
            Self::WaterReminder => steam_count == STEAM_USES_BEFORE_REFILL,
        }
    }
}
