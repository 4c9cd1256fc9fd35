//! Human-readable outcomes of iron operations.
//!
//! Operations never fail. Each one returns a [`Report`]: the notices it
//! produced, in order. A notice renders as a single status line.

use crate::program::{Celsius, FabricProgram, MAX_TEMPERATURE, MIN_STEAM_TEMPERATURE, MIN_TEMPERATURE};
use serde::Serialize;
use std::fmt;

/// One status line emitted by an iron.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Notice {
    PoweredOn { iron: String },
    PoweredOff { iron: String },
    SteamOn,
    SteamAlreadyOn,
    Descaled { iron: String },
    NeedsCleaning { uses: u32 },
    /// Requested temperature lies outside every program.
    TemperatureOutOfRange { requested: Celsius },
    /// Temperature is valid in general but above this model's limit.
    TemperatureNotSupported { iron: String, requested: Celsius },
    ProgramNotSupported { iron: String, program: String },
    /// Steam was on and the target was below the steam threshold.
    SteamTooCold { attempted: Celsius },
    Ironed {
        iron: String,
        program: Option<FabricProgram>,
        temperature: Celsius,
        with_steam: bool,
    },
    RefillWater,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PoweredOn { iron } => write!(f, "{iron} iron is turned on."),
            Self::PoweredOff { iron } => write!(f, "{iron} iron is turned off."),
            Self::SteamOn => write!(f, "Steam is now on."),
            Self::SteamAlreadyOn => write!(f, "Steam is already on."),
            Self::Descaled { iron } => write!(f, "{iron} iron is cleaned."),
            Self::NeedsCleaning { uses } => {
                write!(f, "Machine has been used {uses} times and needs cleaning.")
            }
            Self::TemperatureOutOfRange { requested } => write!(
                f,
                "Invalid temperature {requested}°C. Irons work between {MIN_TEMPERATURE}°C and {MAX_TEMPERATURE}°C."
            ),
            Self::TemperatureNotSupported { iron, requested } => write!(
                f,
                "The temperature you entered ({requested}°C) is not within the supported range for the {iron} iron."
            ),
            Self::ProgramNotSupported { iron, program } => {
                write!(f, "The {iron} iron does not support the {program} ironing mode.")
            }
            Self::SteamTooCold { attempted } => write!(
                f,
                "Attempted to iron at {attempted}°C. Not ironing. Turning off steam first. \
                 To iron with steam, make sure the temperature is at least {MIN_STEAM_TEMPERATURE}°C."
            ),
            Self::Ironed {
                iron,
                program,
                temperature,
                with_steam,
            } => {
                let program = program.map_or("Invalid", |p| p.name());
                write!(
                    f,
                    "{iron} iron is ironing using the {program} program at {temperature}°C"
                )?;
                if *with_steam {
                    write!(f, " with steam")?;
                }
                write!(f, ".")
            }
            Self::RefillWater => write!(f, "You need to add water to the ironing machine."),
        }
    }
}

/// Everything one operation reported, in emission order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Report {
    notices: Vec<Notice>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    /// Check if any notice matches the predicate.
    pub fn contains<F>(&self, predicate: F) -> bool
    where
        F: Fn(&Notice) -> bool,
    {
        self.notices.iter().any(predicate)
    }

    /// The ironing notice, if this call actually ironed.
    pub fn ironing(&self) -> Option<&Notice> {
        self.notices
            .iter()
            .find(|notice| matches!(notice, Notice::Ironed { .. }))
    }

    pub fn ironed(&self) -> bool {
        self.ironing().is_some()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, notice) in self.notices.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{notice}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a Notice;
    type IntoIter = std::slice::Iter<'a, Notice>;

    fn into_iter(self) -> Self::IntoIter {
        self.notices.iter()
    }
}
