//! Typed selectors for the attoDRY interface.
//!
//! The vendor bindings dispatched on bare strings and integers and silently
//! did nothing for unrecognised values. Here every selector is an enum; the
//! original spellings are still accepted through fallible `TryFrom`
//! conversions that fail with [`AttodryError::InvalidArgument`].

use crate::error::AttodryError;
use serde::{Deserialize, Serialize};

/// attoDRY device family loaded by the interface server at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Device {
    AttoDry1100,
    AttoDry2100,
    AttoDry800,
}

impl Device {
    /// Raw selector value passed to the native `begin` call.
    pub fn as_raw(self) -> u16 {
        match self {
            Device::AttoDry1100 => 0,
            Device::AttoDry2100 => 1,
            Device::AttoDry800 => 2,
        }
    }
}

/// Sampling interval for the controller's log file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogInterval {
    OneSecond,
    FiveSeconds,
    ThirtySeconds,
    OneMinute,
    FiveMinutes,
}

impl LogInterval {
    pub(crate) fn as_raw(self) -> i32 {
        match self {
            LogInterval::OneSecond => 0,
            LogInterval::FiveSeconds => 1,
            LogInterval::ThirtySeconds => 2,
            LogInterval::OneMinute => 3,
            LogInterval::FiveMinutes => 4,
        }
    }
}

/// Magnet axis on split-coil systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldAxis {
    X,
    Z,
}

impl TryFrom<char> for FieldAxis {
    type Error = AttodryError;

    fn try_from(axis: char) -> Result<Self, Self::Error> {
        match axis.to_ascii_uppercase() {
            'X' => Ok(FieldAxis::X),
            'Z' => Ok(FieldAxis::Z),
            _ => Err(AttodryError::InvalidArgument {
                what: "field axis",
                value: axis.to_string(),
            }),
        }
    }
}

/// Pressure gauge channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressureChannel {
    P1,
    P2,
}

impl TryFrom<u8> for PressureChannel {
    type Error = AttodryError;

    fn try_from(channel: u8) -> Result<Self, Self::Error> {
        match channel {
            1 => Ok(PressureChannel::P1),
            2 => Ok(PressureChannel::P2),
            _ => Err(AttodryError::InvalidArgument {
                what: "pressure channel",
                value: channel.to_string(),
            }),
        }
    }
}

/// Valves whose state can be read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValveSensor {
    Helium,
    Pump800,
    SampleSpace,
    Valve2,
}

impl TryFrom<&str> for ValveSensor {
    type Error = AttodryError;

    fn try_from(valve: &str) -> Result<Self, Self::Error> {
        match valve {
            "He" => Ok(ValveSensor::Helium),
            "Pump800" => Ok(ValveSensor::Pump800),
            "SampleSpace" => Ok(ValveSensor::SampleSpace),
            "Valve2" => Ok(ValveSensor::Valve2),
            _ => Err(AttodryError::InvalidArgument {
                what: "valve",
                value: valve.to_owned(),
            }),
        }
    }
}

/// Valves that can be toggled open/closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValveControl {
    SampleSpace,
    Pump800,
    BreakVacuum,
    Helium800,
}

impl TryFrom<&str> for ValveControl {
    type Error = AttodryError;

    fn try_from(valve: &str) -> Result<Self, Self::Error> {
        match valve {
            "SampleSpace" => Ok(ValveControl::SampleSpace),
            "Pump800" => Ok(ValveControl::Pump800),
            "BreakVac" => Ok(ValveControl::BreakVacuum),
            "Helium800" => Ok(ValveControl::Helium800),
            _ => Err(AttodryError::InvalidArgument {
                what: "valve",
                value: valve.to_owned(),
            }),
        }
    }
}

/// State reported for a valve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValveState {
    Closed,
    Open,
}

impl ValveState {
    /// Convert from the raw 0/1 value the library reports.
    pub fn from_raw(raw: i32) -> Self {
        if raw == 0 {
            ValveState::Closed
        } else {
            ValveState::Open
        }
    }

    pub fn is_open(self) -> bool {
        self == ValveState::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_raw_values() {
        assert_eq!(Device::AttoDry1100.as_raw(), 0);
        assert_eq!(Device::AttoDry2100.as_raw(), 1);
        assert_eq!(Device::AttoDry800.as_raw(), 2);
    }

    #[test]
    #[cfg(not(feature = "hardware"))]
    fn raw_values_match_vendor_constants() {
        use attodry_sys as sys;
        assert_eq!(Device::AttoDry800.as_raw(), sys::AttoDRY_Interface_Device_attoDRY800);
        assert_eq!(LogInterval::OneSecond.as_raw(), sys::Enum__1Second);
        assert_eq!(LogInterval::FiveMinutes.as_raw(), sys::Enum__5Minutes);
    }

    #[test]
    fn field_axis_accepts_original_spellings() {
        assert_eq!(FieldAxis::try_from('x').ok(), Some(FieldAxis::X));
        assert_eq!(FieldAxis::try_from('Z').ok(), Some(FieldAxis::Z));
        assert!(FieldAxis::try_from('Y').is_err());
    }

    #[test]
    fn pressure_channel_rejects_unknown() {
        assert_eq!(PressureChannel::try_from(1).ok(), Some(PressureChannel::P1));
        assert_eq!(PressureChannel::try_from(2).ok(), Some(PressureChannel::P2));
        assert!(matches!(
            PressureChannel::try_from(3),
            Err(AttodryError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn valve_spellings_match_vendor_bindings() {
        assert_eq!(ValveSensor::try_from("He").ok(), Some(ValveSensor::Helium));
        assert_eq!(
            ValveControl::try_from("BreakVac").ok(),
            Some(ValveControl::BreakVacuum)
        );
        assert!(ValveSensor::try_from("Vent").is_err());
    }

    #[test]
    fn valve_state_from_raw() {
        assert_eq!(ValveState::from_raw(0), ValveState::Closed);
        assert!(ValveState::from_raw(1).is_open());
    }
}
