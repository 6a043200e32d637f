// Copyright (C) 2026 Michael Wilson <mike@mdwn.dev>
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, version 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{ANALOG_PINS, UNWIRED};
use crate::error::KitError;

/// The analog input a drum pad's sensor is wired to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub enum SensorPin {
    /// No physical sensor for this voice.
    #[default]
    Unwired,
    /// Analog input `A<n>`.
    Analog(u8),
}

impl SensorPin {
    /// Gets the header value: the pin number, or -1 when unwired.
    pub fn raw(&self) -> i16 {
        match self {
            SensorPin::Unwired => i16::from(UNWIRED),
            SensorPin::Analog(pin) => i16::from(*pin),
        }
    }

    /// Checks that an analog pin exists on the controller.
    pub fn validate(self) -> Result<SensorPin, KitError> {
        match self {
            SensorPin::Analog(pin) if pin >= ANALOG_PINS => {
                Err(KitError::InvalidSensorPin(i16::from(pin)))
            }
            _ => Ok(self),
        }
    }

    /// Gets the pin number if a sensor is wired.
    pub fn pin(&self) -> Option<u8> {
        match self {
            SensorPin::Unwired => None,
            SensorPin::Analog(pin) => Some(*pin),
        }
    }

    pub fn is_wired(&self) -> bool {
        matches!(self, SensorPin::Analog(_))
    }

    /// Wraps a value from the built-in sensor tables.
    pub(crate) fn from_table(raw: i8) -> SensorPin {
        SensorPin::try_from(i16::from(raw)).unwrap_or_default()
    }
}

impl TryFrom<i16> for SensorPin {
    type Error = KitError;

    fn try_from(raw: i16) -> Result<Self, Self::Error> {
        if raw == i16::from(UNWIRED) {
            return Ok(SensorPin::Unwired);
        }
        u8::try_from(raw)
            .map_err(|_| KitError::InvalidSensorPin(raw))
            .and_then(|pin| SensorPin::Analog(pin).validate())
    }
}

impl From<SensorPin> for i16 {
    fn from(pin: SensorPin) -> i16 {
        pin.raw()
    }
}

impl fmt::Display for SensorPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorPin::Unwired => write!(f, "-"),
            SensorPin::Analog(pin) => write!(f, "A{}", pin),
        }
    }
}
