//! The three appliance models and the configuration they share.

use crate::policy::{CleaningPolicy, SteamLightPolicy};
use crate::program::Celsius;
use serde::{Deserialize, Serialize};

/// Fixed description of an iron: what it is called, how hot it gets and
/// which maintenance policies it follows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IronConfig {
    pub name: String,
    pub max_temperature: Celsius,
    #[serde(default)]
    pub cleaning: CleaningPolicy,
    #[serde(default)]
    pub steam_light: SteamLightPolicy,
}

/// Preset appliance models.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum IronModel {
    /// Everyday iron, tops out at Cotton.
    Regular,
    /// Regular limits, but descales itself and watches its water tank.
    Premium,
    /// Reaches Linen temperatures.
    Linen,
}

impl IronModel {
    pub const ALL: [IronModel; 3] = [Self::Regular, Self::Premium, Self::Linen];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Premium => "Premium",
            Self::Linen => "Linen",
        }
    }

    pub fn max_temperature(&self) -> Celsius {
        match self {
            Self::Regular | Self::Premium => 199,
            Self::Linen => 230,
        }
    }

    pub fn config(&self) -> IronConfig {
        let (cleaning, steam_light) = match self {
            Self::Premium => (CleaningPolicy::AutoDescale, SteamLightPolicy::WaterReminder),
            Self::Regular | Self::Linen => (CleaningPolicy::Manual, SteamLightPolicy::Disabled),
        };
        IronConfig {
            name: self.name().to_string(),
            max_temperature: self.max_temperature(),
            cleaning,
            steam_light,
        }
    }
}
