//! Gas-handling: valves, pressures, and pumps.
//!
//! Pressures are in mbar. Toggling a valve opens it if closed and closes it
//! if open; there is no absolute set operation in the native surface.

use std::os::raw::c_int;

use attodry_sys as sys;

use super::AttodryInterface;
use crate::error::Result;
use crate::types::{PressureChannel, ValveControl, ValveSensor, ValveState};

impl AttodryInterface {
    /// Toggle the Cryostat In valve.
    pub fn toggle_cryostat_in_valve(&self) -> Result<()> {
        self.command(
            "toggleCryostatInValve",
            sys::AttoDRY_Interface_toggleCryostatInValve,
        )
    }

    /// Toggle the Cryostat Out valve.
    pub fn toggle_cryostat_out_valve(&self) -> Result<()> {
        self.command(
            "toggleCryostatOutValve",
            sys::AttoDRY_Interface_toggleCryostatOutValve,
        )
    }

    /// Toggle the inner volume (Dump In) valve.
    pub fn toggle_dump_in_valve(&self) -> Result<()> {
        self.command(
            "toggleDumpInValve",
            sys::AttoDRY_Interface_toggleDumpInValve,
        )
    }

    /// Toggle the outer volume (Dump Out) valve.
    pub fn toggle_dump_out_valve(&self) -> Result<()> {
        self.command(
            "toggleDumpOutValve",
            sys::AttoDRY_Interface_toggleDumpOutValve,
        )
    }

    /// State of the Cryostat In valve.
    pub fn cryostat_in_valve(&self) -> Result<ValveState> {
        Ok(ValveState::from_raw(self.read_i32(
            "getCryostatInValve",
            sys::AttoDRY_Interface_getCryostatInValve,
        )?))
    }

    /// State of the Cryostat Out valve.
    pub fn cryostat_out_valve(&self) -> Result<ValveState> {
        Ok(ValveState::from_raw(self.read_i32(
            "getCryostatOutValve",
            sys::AttoDRY_Interface_getCryostatOutValve,
        )?))
    }

    /// State of the Dump In valve.
    pub fn dump_in_valve(&self) -> Result<ValveState> {
        Ok(ValveState::from_raw(self.read_i32(
            "getDumpInValve",
            sys::AttoDRY_Interface_getDumpInValve,
        )?))
    }

    /// State of the Dump Out valve.
    pub fn dump_out_valve(&self) -> Result<ValveState> {
        Ok(ValveState::from_raw(self.read_i32(
            "getDumpOutValve",
            sys::AttoDRY_Interface_getDumpOutValve,
        )?))
    }

    /// State of one of the monitorable 800-series valves.
    pub fn valve_state(&self, valve: ValveSensor) -> Result<ValveState> {
        let (function, call): (_, unsafe extern "C" fn(*mut c_int) -> c_int) = match valve {
            ValveSensor::Helium => ("getHeValve", sys::AttoDRY_Interface_getHeValve),
            ValveSensor::Pump800 => ("getPump800Valve", sys::AttoDRY_Interface_getPump800Valve),
            ValveSensor::SampleSpace => (
                "getSampleSpaceValve",
                sys::AttoDRY_Interface_getSampleSpaceValve,
            ),
            ValveSensor::Valve2 => ("getValve2", sys::AttoDRY_Interface_getValve2),
        };
        Ok(ValveState::from_raw(self.read_i32(function, call)?))
    }

    /// Toggle one of the controllable 800-series valves.
    pub fn toggle_valve(&self, valve: ValveControl) -> Result<()> {
        let (function, call): (_, unsafe extern "C" fn() -> c_int) = match valve {
            ValveControl::SampleSpace => (
                "toggleValveSampleSpace",
                sys::AttoDRY_Interface_toggleValveSampleSpace,
            ),
            ValveControl::Pump800 => (
                "togglePump800Valve",
                sys::AttoDRY_Interface_togglePump800Valve,
            ),
            ValveControl::BreakVacuum => (
                "toggleValveBreakVac",
                sys::AttoDRY_Interface_toggleValveBreakVac,
            ),
            ValveControl::Helium800 => (
                "toggleHelium800Valve",
                sys::AttoDRY_Interface_toggleHelium800Valve,
            ),
        };
        self.command(function, call)
    }

    /// Pressure at the cryostat inlet.
    pub fn cryostat_in_pressure(&self) -> Result<f32> {
        self.read_f32(
            "getCryostatInPressure",
            sys::AttoDRY_Interface_getCryostatInPressure,
        )
    }

    /// Pressure at the cryostat outlet.
    pub fn cryostat_out_pressure(&self) -> Result<f32> {
        self.read_f32(
            "getCryostatOutPressure",
            sys::AttoDRY_Interface_getCryostatOutPressure,
        )
    }

    /// Pressure at the dump.
    pub fn dump_pressure(&self) -> Result<f32> {
        self.read_f32("getDumpPressure", sys::AttoDRY_Interface_getDumpPressure)
    }

    /// Pressure on the selected gauge channel.
    pub fn pressure(&self, channel: PressureChannel) -> Result<f32> {
        match channel {
            PressureChannel::P1 => {
                self.read_f32("getPressure1", sys::AttoDRY_Interface_getPressure1)
            }
            PressureChannel::P2 => {
                self.read_f32("getPressure2", sys::AttoDRY_Interface_getPressure2)
            }
        }
    }

    /// Toggle the system pump.
    pub fn toggle_pump(&self) -> Result<()> {
        self.command("togglePump", sys::AttoDRY_Interface_togglePump)
    }

    /// Whether the system is currently pumping.
    pub fn is_pumping(&self) -> Result<bool> {
        self.read_flag("isPumping", sys::AttoDRY_Interface_isPumping)
    }

    /// Turbopump rotation frequency, in Hz.
    pub fn turbopump_frequency(&self) -> Result<u16> {
        self.read_u16(
            "GetTurbopumpFrequ800",
            sys::AttoDRY_Interface_GetTurbopumpFrequ800,
        )
    }

    /// Power currently delivered by the reservoir heater, in Watts.
    pub fn reservoir_heater_power(&self) -> Result<f32> {
        self.read_f32(
            "getReservoirHeaterPower",
            sys::AttoDRY_Interface_getReservoirHeaterPower,
        )
    }
}
