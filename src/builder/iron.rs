//! Builder for constructing irons from explicit settings.

use crate::builder::error::BuildError;
use crate::iron::{Iron, IronConfig};
use crate::policy::{CleaningPolicy, SteamLightPolicy};
use crate::program::{is_supported_temperature, Celsius, MAX_TEMPERATURE, MIN_TEMPERATURE};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<BuildError>>;

/// Builder for irons with a fluent API.
///
/// Validation collects every problem instead of stopping at the first.
///
/// # Example
///
/// ```rust
/// use ironsim::builder::IronBuilder;
/// use ironsim::policy::CleaningPolicy;
///
/// let iron = IronBuilder::new()
///     .name("Travel")
///     .max_temperature(160)
///     .cleaning(CleaningPolicy::AutoDescale)
///     .build();
///
/// assert!(iron.is_ok());
/// ```
#[derive(Clone, Debug, Default)]
pub struct IronBuilder {
    name: String,
    max_temperature: Option<Celsius>,
    cleaning: CleaningPolicy,
    steam_light: SteamLightPolicy,
}

impl IronBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration, e.g. a model preset.
    pub fn from_config(config: IronConfig) -> Self {
        Self {
            name: config.name,
            max_temperature: Some(config.max_temperature),
            cleaning: config.cleaning,
            steam_light: config.steam_light,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn max_temperature(mut self, celsius: Celsius) -> Self {
        self.max_temperature = Some(celsius);
        self
    }

    pub fn cleaning(mut self, policy: CleaningPolicy) -> Self {
        self.cleaning = policy;
        self
    }

    pub fn steam_light(mut self, policy: SteamLightPolicy) -> Self {
        self.steam_light = policy;
        self
    }

    /// Check every setting, accumulating all violations.
    pub fn validate(&self) -> Check {
        let checks = vec![self.check_name(), self.check_max_temperature()];
        Validation::all_vec(checks).map(|_| ())
    }

    /// Build the iron.
    /// Returns every violation found if the settings are invalid.
    pub fn build(self) -> Result<Iron, NonEmptyVec<BuildError>> {
        match (self.validate(), self.max_temperature) {
            (Validation::Failure(errors), _) => Err(errors),
            (Validation::Success(_), None) => {
                Err(NonEmptyVec::singleton(BuildError::MissingMaxTemperature))
            }
            (Validation::Success(_), Some(max_temperature)) => Ok(Iron::from_config(IronConfig {
                name: self.name,
                max_temperature,
                cleaning: self.cleaning,
                steam_light: self.steam_light,
            })),
        }
    }

    fn check_name(&self) -> Check {
        if self.name.trim().is_empty() {
            Validation::fail(BuildError::EmptyName)
        } else {
            Validation::success(())
        }
    }

    fn check_max_temperature(&self) -> Check {
        match self.max_temperature {
            None => Validation::fail(BuildError::MissingMaxTemperature),
            Some(celsius) if !is_supported_temperature(celsius) => {
                Validation::fail(BuildError::MaxTemperatureOutOfRange {
                    max_temperature: celsius,
                    min: MIN_TEMPERATURE,
                    max: MAX_TEMPERATURE,
                })
            }
            Some(_) => Validation::success(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iron::IronModel;

    #[test]
    fn builder_validates_required_fields() {
        let result = IronBuilder::new().build();

        let Err(errors) = result else {
            panic!("expected build to fail");
        };
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| matches!(e, BuildError::EmptyName)));
        assert!(errors
            .iter()
            .any(|e| matches!(e, BuildError::MissingMaxTemperature)));
    }

    #[test]
    fn builder_rejects_unreachable_limits() {
        for celsius in [40, 300] {
            let result = IronBuilder::new().name("Odd").max_temperature(celsius).build();

            let Err(errors) = result else {
                panic!("expected {celsius}°C to be rejected");
            };
            assert_eq!(errors.len(), 1);
            assert!(errors.iter().any(|e| matches!(
                e,
                BuildError::MaxTemperatureOutOfRange { max_temperature, .. } if *max_temperature == celsius
            )));
        }
    }

    #[test]
    fn missing_limit_is_reported_not_defaulted() {
        let result = IronBuilder::new().name("Travel").build();

        let Err(errors) = result else {
            panic!("an iron without a limit must not build");
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.head(), &BuildError::MissingMaxTemperature);
    }

    #[test]
    fn whitespace_name_is_empty() {
        let builder = IronBuilder::new().name("   ").max_temperature(150);
        assert!(builder.validate().is_failure());
    }

    #[test]
    fn fluent_api_builds_iron() {
        let result = IronBuilder::new()
            .name("Travel")
            .max_temperature(160)
            .cleaning(CleaningPolicy::AutoDescale)
            .steam_light(SteamLightPolicy::WaterReminder)
            .build();

        let Ok(iron) = result else {
            panic!("expected build to succeed");
        };
        assert_eq!(iron.name(), "Travel");
        assert_eq!(iron.max_temperature(), 160);
        assert_eq!(iron.config().cleaning, CleaningPolicy::AutoDescale);
        assert_eq!(iron.config().steam_light, SteamLightPolicy::WaterReminder);
    }

    #[test]
    fn presets_round_trip_through_builder() {
        for model in IronModel::ALL {
            let builder = IronBuilder::from_config(model.config());
            assert!(builder.validate().is_success());

            let Ok(iron) = builder.build() else {
                panic!("preset {} should build", model.name());
            };
            assert_eq!(iron.config(), &model.config());
        }
    }
}
