//! The iron state machine.

use crate::core::{IronPhase, Operation, StateHistory, StateTransition};
use crate::iron::model::{IronConfig, IronModel};
use crate::policy::CleaningVerdict;
use crate::program::{is_supported_temperature, Celsius, FabricProgram, MIN_STEAM_TEMPERATURE};
use crate::report::{Notice, Report};
use chrono::Utc;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Point-in-time view of an iron's flags and counters.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IronStatus {
    pub serial: Uuid,
    pub name: String,
    pub max_temperature: Celsius,
    pub phase: IronPhase,
    pub powered: bool,
    pub steaming: bool,
    pub ironing_count: u32,
    pub steam_count: u32,
    pub needs_water: bool,
}

/// A single simulated iron.
///
/// Every operation takes `&mut self`, returns a [`Report`] and leaves the
/// iron usable; nothing here fails.
///
/// # Example
///
/// ```rust
/// use ironsim::Iron;
///
/// let mut iron = Iron::regular();
/// iron.turn_on();
/// let report = iron.iron_at_temperature(170);
///
/// assert!(report.ironed());
/// assert_eq!(iron.ironing_count(), 1);
/// assert!(!iron.is_steaming());
/// ```
#[derive(Clone, Debug)]
pub struct Iron {
    serial: Uuid,
    config: IronConfig,
    powered: bool,
    steaming: bool,
    ironing_count: u32,
    steam_count: u32,
    needs_water: bool,
    history: StateHistory<IronPhase>,
}

impl Iron {
    /// Create an iron from an already validated configuration.
    pub(crate) fn from_config(config: IronConfig) -> Self {
        let iron = Self {
            serial: Uuid::new_v4(),
            config,
            powered: false,
            steaming: false,
            ironing_count: 0,
            steam_count: 0,
            needs_water: false,
            history: StateHistory::new(),
        };
        debug!(
            serial = %iron.serial,
            iron = %iron.config.name,
            max_temperature = iron.config.max_temperature,
            "iron created"
        );
        iron
    }

    pub fn model(model: IronModel) -> Self {
        Self::from_config(model.config())
    }

    /// Regular iron: up to 199°C, manual cleaning, no water light.
    pub fn regular() -> Self {
        Self::model(IronModel::Regular)
    }

    /// Premium iron: up to 199°C, descales itself, reminds about water.
    pub fn premium() -> Self {
        Self::model(IronModel::Premium)
    }

    /// Linen iron: up to 230°C, manual cleaning, no water light.
    pub fn linen() -> Self {
        Self::model(IronModel::Linen)
    }

    pub fn serial(&self) -> Uuid {
        self.serial
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &IronConfig {
        &self.config
    }

    pub fn max_temperature(&self) -> Celsius {
        self.config.max_temperature
    }

    pub fn is_powered(&self) -> bool {
        self.powered
    }

    pub fn is_steaming(&self) -> bool {
        self.steaming
    }

    pub fn ironing_count(&self) -> u32 {
        self.ironing_count
    }

    pub fn steam_count(&self) -> u32 {
        self.steam_count
    }

    /// Water light. Only irons with a water reminder ever set it, and
    /// nothing clears it.
    pub fn needs_water(&self) -> bool {
        self.needs_water
    }

    pub fn phase(&self) -> IronPhase {
        IronPhase::from_flags(self.powered, self.steaming)
    }

    pub fn history(&self) -> &StateHistory<IronPhase> {
        &self.history
    }

    pub fn status(&self) -> IronStatus {
        IronStatus {
            serial: self.serial,
            name: self.config.name.clone(),
            max_temperature: self.config.max_temperature,
            phase: self.phase(),
            powered: self.powered,
            steaming: self.steaming,
            ironing_count: self.ironing_count,
            steam_count: self.steam_count,
            needs_water: self.needs_water,
        }
    }

    pub fn turn_on(&mut self) -> Report {
        self.set_flags(true, self.steaming, Operation::TurnOn);
        let mut report = Report::new();
        report.push(Notice::PoweredOn {
            iron: self.config.name.clone(),
        });
        self.log_operation(Operation::TurnOn);
        report
    }

    pub fn turn_off(&mut self) -> Report {
        self.set_flags(false, self.steaming, Operation::TurnOff);
        let mut report = Report::new();
        report.push(Notice::PoweredOff {
            iron: self.config.name.clone(),
        });
        self.log_operation(Operation::TurnOff);
        report
    }

    pub fn use_steam(&mut self) -> Report {
        let mut report = Report::new();
        self.activate_steam(Operation::UseSteam, &mut report);
        self.log_operation(Operation::UseSteam);
        report
    }

    /// Reset both usage counters. Power, steam and the water light are
    /// left alone.
    pub fn descale(&mut self) -> Report {
        let mut report = Report::new();
        self.clean(&mut report);
        self.log_operation(Operation::Descale);
        report
    }

    /// Iron at an explicit temperature.
    ///
    /// The program is picked from the temperature. A temperature above
    /// this model's limit is refused after the use has been counted.
    pub fn iron_at_temperature(&mut self, temperature: Celsius) -> Report {
        let mut report = Report::new();
        self.iron_at(temperature, &mut report);
        self.log_operation(Operation::IronAtTemperature);
        report
    }

    /// Iron with a named program at a random temperature from its range.
    pub fn iron_by_program(&mut self, program: &str) -> Report {
        self.iron_by_program_with(program, &mut rand::thread_rng())
    }

    /// Same as [`Iron::iron_by_program`], drawing the temperature from `rng`.
    pub fn iron_by_program_with<R: Rng>(&mut self, program: &str, rng: &mut R) -> Report {
        let mut report = Report::new();
        self.iron_with_program(program, rng, &mut report);
        self.log_operation(Operation::IronByProgram);
        report
    }

    fn iron_at(&mut self, temperature: Celsius, report: &mut Report) {
        if !is_supported_temperature(temperature) {
            info!(serial = %self.serial, temperature, "temperature outside every program");
            report.push(Notice::TemperatureOutOfRange {
                requested: temperature,
            });
            return;
        }

        if !self.check_cleaning(report) {
            return;
        }
        self.ironing_count += 1;

        if temperature > self.config.max_temperature {
            info!(
                serial = %self.serial,
                temperature,
                max_temperature = self.config.max_temperature,
                "temperature above model limit"
            );
            report.push(Notice::TemperatureNotSupported {
                iron: self.config.name.clone(),
                requested: temperature,
            });
            return;
        }

        let program = FabricProgram::for_temperature(temperature);
        self.press(program, temperature, Operation::IronAtTemperature, report);
    }

    fn iron_with_program<R: Rng>(&mut self, program: &str, rng: &mut R, report: &mut Report) {
        if !self.check_cleaning(report) {
            return;
        }
        self.ironing_count += 1;

        let Ok(fabric) = program.parse::<FabricProgram>() else {
            info!(serial = %self.serial, program, "unknown program");
            report.push(self.program_not_supported(program));
            return;
        };

        let temperature = rng.gen_range(fabric.range());

        if fabric.max_temperature() > self.config.max_temperature {
            info!(
                serial = %self.serial,
                program,
                max_temperature = self.config.max_temperature,
                "program hotter than model limit"
            );
            report.push(self.program_not_supported(program));
            return;
        }

        self.press(Some(fabric), temperature, Operation::IronByProgram, report);
    }

    fn log_operation(&self, operation: Operation) {
        debug!(
            serial = %self.serial,
            iron = %self.config.name,
            %operation,
            powered = self.powered,
            steaming = self.steaming,
            ironing_count = self.ironing_count,
            steam_count = self.steam_count,
            needs_water = self.needs_water,
            "operation finished"
        );
    }

    fn program_not_supported(&self, program: &str) -> Notice {
        Notice::ProgramNotSupported {
            iron: self.config.name.clone(),
            program: program.to_string(),
        }
    }

    /// Returns `false` when this call must not iron.
    fn check_cleaning(&mut self, report: &mut Report) -> bool {
        match self.config.cleaning.evaluate(self.ironing_count) {
            CleaningVerdict::Proceed => true,
            CleaningVerdict::Blocked => {
                warn!(serial = %self.serial, uses = self.ironing_count, "cleaning required");
                report.push(Notice::NeedsCleaning {
                    uses: self.ironing_count,
                });
                false
            }
            CleaningVerdict::DescaleAndSkip => {
                warn!(serial = %self.serial, uses = self.ironing_count, "descaling automatically");
                report.push(Notice::NeedsCleaning {
                    uses: self.ironing_count,
                });
                self.clean(report);
                false
            }
        }
    }

    /// Steam handling and the actual ironing, once temperature and
    /// program are settled.
    fn press(
        &mut self,
        program: Option<FabricProgram>,
        temperature: Celsius,
        trigger: Operation,
        report: &mut Report,
    ) {
        if self.steaming && temperature < MIN_STEAM_TEMPERATURE {
            info!(serial = %self.serial, temperature, "too cold for steam, switching steam off");
            self.set_flags(self.powered, false, trigger);
            report.push(Notice::SteamTooCold {
                attempted: temperature,
            });
            return;
        }

        if program == Some(FabricProgram::Linen) {
            if !self.steaming {
                self.activate_steam(trigger, report);
            }
            report.push(self.ironed(program, temperature, true));
            self.set_flags(self.powered, false, trigger);
            self.check_steam_light(report);
            self.steam_count += 1;
        } else {
            let with_steam = self.steaming;
            if with_steam {
                self.steam_count += 1;
            }
            report.push(self.ironed(program, temperature, with_steam));
            self.check_steam_light(report);
            self.set_flags(self.powered, false, trigger);
        }
    }

    fn ironed(&self, program: Option<FabricProgram>, temperature: Celsius, with_steam: bool) -> Notice {
        Notice::Ironed {
            iron: self.config.name.clone(),
            program,
            temperature,
            with_steam,
        }
    }

    fn check_steam_light(&mut self, report: &mut Report) {
        if self.config.steam_light.evaluate(self.steam_count) {
            warn!(serial = %self.serial, steam_count = self.steam_count, "water light on");
            self.needs_water = true;
            report.push(Notice::RefillWater);
        }
    }

    fn activate_steam(&mut self, trigger: Operation, report: &mut Report) {
        if self.steaming {
            report.push(Notice::SteamAlreadyOn);
        } else {
            self.set_flags(self.powered, true, trigger);
            report.push(Notice::SteamOn);
        }
    }

    fn clean(&mut self, report: &mut Report) {
        self.ironing_count = 0;
        self.steam_count = 0;
        debug!(serial = %self.serial, "descaled");
        report.push(Notice::Descaled {
            iron: self.config.name.clone(),
        });
    }

    /// Update the flags, recording a history entry if the phase changed.
    fn set_flags(&mut self, powered: bool, steaming: bool, trigger: Operation) {
        let from = self.phase();
        self.powered = powered;
        self.steaming = steaming;
        let to = self.phase();

        if from != to {
            debug!(serial = %self.serial, ?from, ?to, %trigger, "phase changed");
            self.history = self.history.record(StateTransition {
                from,
                to,
                timestamp: Utc::now(),
                trigger,
            });
        }
    }
}
