//! Temperature readings and temperature-control operations.
//!
//! All temperatures are in Kelvin, ramp rates in K/min, heater powers in
//! Watts, resistances in Ohms. Readings are live values from the controller
//! on every call; nothing is cached.

use attodry_sys as sys;

use super::AttodryInterface;
use crate::error::Result;

impl AttodryInterface {
    /// Temperature of the 4 K stage.
    pub fn stage_temperature(&self) -> Result<f32> {
        self.read_f32(
            "get4KStageTemperature",
            sys::AttoDRY_Interface_get4KStageTemperature,
        )
    }

    /// Temperature of the helium reservoir.
    pub fn reservoir_temperature(&self) -> Result<f32> {
        self.read_f32(
            "getReservoirTemperature",
            sys::AttoDRY_Interface_getReservoirTemperature,
        )
    }

    /// Temperature of the variable temperature insert.
    pub fn vti_temperature(&self) -> Result<f32> {
        self.read_f32("getVtiTemperature", sys::AttoDRY_Interface_getVtiTemperature)
    }

    /// Temperature of the sample sensor, if one is connected.
    pub fn sample_temperature(&self) -> Result<f32> {
        self.read_f32(
            "getSampleTemperature",
            sys::AttoDRY_Interface_getSampleTemperature,
        )
    }

    /// The user temperature set-point.
    ///
    /// The controller applies set-point writes asynchronously; a read
    /// immediately after [`set_user_temperature`](Self::set_user_temperature)
    /// usually still reports the previous value until the next status
    /// message arrives.
    pub fn user_temperature(&self) -> Result<f32> {
        self.read_f32(
            "getUserTemperature",
            sys::AttoDRY_Interface_getUserTemperature,
        )
    }

    /// Set the user temperature set-point.
    pub fn set_user_temperature(&self, kelvin: f32) -> Result<()> {
        self.write_f32(
            "setUserTemperature",
            sys::AttoDRY_Interface_setUserTemperature,
            kelvin,
        )
    }

    /// Current set-point of the sample temperature controller.
    pub fn temperature_setpoint(&self) -> Result<f32> {
        self.read_f32(
            "getTemperatureSetpoint",
            sys::AttoDRY_Interface_getTemperatureSetpoint,
        )
    }

    /// Maximum allowed temperature set-point.
    pub fn temperature_setpoint_limit(&self) -> Result<f32> {
        self.read_f32(
            "getTemperatureSetpointLimit",
            sys::AttoDRY_Interface_getTemperatureSetpointLimit,
        )
    }

    /// Set the sample temperature set-point.
    pub fn set_temperature_setpoint(&self, kelvin: f32) -> Result<()> {
        self.write_f32(
            "setTemperatureSetpoint",
            sys::AttoDRY_Interface_setTemperatureSetpoint,
            kelvin,
        )
    }

    /// Temperature ramp rate, in K/min.
    pub fn temperature_ramp_rate(&self) -> Result<f32> {
        self.read_f32(
            "getTemperatureRampRate",
            sys::AttoDRY_Interface_getTemperatureRampRate,
        )
    }

    /// Set the temperature ramp rate, in K/min.
    pub fn set_temperature_ramp_rate(&self, rate: f32) -> Result<()> {
        self.write_f32(
            "setTemperatureRampRate",
            sys::AttoDRY_Interface_setTemperatureRampRate,
            rate,
        )
    }

    /// Heater output, in percent of range.
    pub fn heater_output(&self) -> Result<f32> {
        self.read_f32("getHeaterOutput", sys::AttoDRY_Interface_getHeaterOutput)
    }

    /// Heater range setting (0 = off, then increasing ranges).
    pub fn heater_range(&self) -> Result<i32> {
        self.read_i32("getHeaterRange", sys::AttoDRY_Interface_getHeaterRange)
    }

    /// Set the heater range.
    pub fn set_heater_range(&self, range: i32) -> Result<()> {
        self.write_i32(
            "setHeaterRange",
            sys::AttoDRY_Interface_setHeaterRange,
            range,
        )
    }

    /// Proportional gain of the temperature controller.
    pub fn proportional_gain(&self) -> Result<f32> {
        self.read_f32(
            "getProportionalGain",
            sys::AttoDRY_Interface_getProportionalGain,
        )
    }

    /// Integral gain of the temperature controller.
    pub fn integral_gain(&self) -> Result<f32> {
        self.read_f32("getIntegralGain", sys::AttoDRY_Interface_getIntegralGain)
    }

    /// Derivative gain of the temperature controller.
    pub fn derivative_gain(&self) -> Result<f32> {
        self.read_f32(
            "getDerivativeGain",
            sys::AttoDRY_Interface_getDerivativeGain,
        )
    }

    /// Set the proportional gain of the temperature controller.
    pub fn set_proportional_gain(&self, gain: f32) -> Result<()> {
        self.write_f32(
            "setProportionalGain",
            sys::AttoDRY_Interface_setProportionalGain,
            gain,
        )
    }

    /// Set the integral gain of the temperature controller.
    pub fn set_integral_gain(&self, gain: f32) -> Result<()> {
        self.write_f32(
            "setIntegralGain",
            sys::AttoDRY_Interface_setIntegralGain,
            gain,
        )
    }

    /// Set the derivative gain of the temperature controller.
    pub fn set_derivative_gain(&self, gain: f32) -> Result<()> {
        self.write_f32(
            "setDerivativeGain",
            sys::AttoDRY_Interface_setDerivativeGain,
            gain,
        )
    }

    /// Power currently delivered to the sample heater, in Watts.
    pub fn sample_heater_power(&self) -> Result<f32> {
        self.read_f32(
            "getSampleHeaterPower",
            sys::AttoDRY_Interface_getSampleHeaterPower,
        )
    }

    /// Set a constant sample heater power, in Watts.
    pub fn set_sample_heater_power(&self, watts: f32) -> Result<()> {
        self.write_f32(
            "setSampleHeaterPower",
            sys::AttoDRY_Interface_setSampleHeaterPower,
            watts,
        )
    }

    /// Maximum power the sample heater may deliver, in Watts.
    pub fn sample_heater_maximum_power(&self) -> Result<f32> {
        self.read_f32(
            "getSampleHeaterMaximumPower",
            sys::AttoDRY_Interface_getSampleHeaterMaximumPower,
        )
    }

    /// Set the maximum sample heater power, in Watts.
    pub fn set_sample_heater_maximum_power(&self, watts: f32) -> Result<()> {
        self.write_f32(
            "setSampleHeaterMaximumPower",
            sys::AttoDRY_Interface_setSampleHeaterMaximumPower,
            watts,
        )
    }

    /// Resistance of the sample heater element, in Ohms.
    pub fn sample_heater_resistance(&self) -> Result<f32> {
        self.read_f32(
            "getSampleHeaterResistance",
            sys::AttoDRY_Interface_getSampleHeaterResistance,
        )
    }

    /// Set the sample heater element resistance, in Ohms.
    pub fn set_sample_heater_resistance(&self, ohms: f32) -> Result<()> {
        self.write_f32(
            "setSampleHeaterResistance",
            sys::AttoDRY_Interface_setSampleHeaterResistance,
            ohms,
        )
    }

    /// Resistance of the sample heater wiring, in Ohms.
    pub fn sample_heater_wire_resistance(&self) -> Result<f32> {
        self.read_f32(
            "getSampleHeaterWireResistance",
            sys::AttoDRY_Interface_getSampleHeaterWireResistance,
        )
    }

    /// Set the sample heater wiring resistance, in Ohms.
    pub fn set_sample_heater_wire_resistance(&self, ohms: f32) -> Result<()> {
        self.write_f32(
            "setSampleHeaterWireResistance",
            sys::AttoDRY_Interface_setSampleHeaterWireResistance,
            ohms,
        )
    }

    /// Power currently delivered to the VTI heater, in Watts.
    pub fn vti_heater_power(&self) -> Result<f32> {
        self.read_f32(
            "getVtiHeaterPower",
            sys::AttoDRY_Interface_getVtiHeaterPower,
        )
    }

    /// Set a constant VTI heater power, in Watts.
    pub fn set_vti_heater_power(&self, watts: f32) -> Result<()> {
        self.write_f32(
            "setVTIHeaterPower",
            sys::AttoDRY_Interface_setVTIHeaterPower,
            watts,
        )
    }

    /// Ask the controller to re-report the sample heater's maximum power.
    pub fn query_sample_heater_maximum_power(&self) -> Result<()> {
        self.command(
            "querySampleHeaterMaximumPower",
            sys::AttoDRY_Interface_querySampleHeaterMaximumPower,
        )
    }

    /// Ask the controller to re-report the sample heater resistance.
    pub fn query_sample_heater_resistance(&self) -> Result<()> {
        self.command(
            "querySampleHeaterResistance",
            sys::AttoDRY_Interface_querySampleHeaterResistance,
        )
    }

    /// Ask the controller to re-report the sample heater wire resistance.
    pub fn query_sample_heater_wire_resistance(&self) -> Result<()> {
        self.command(
            "querySampleHeaterWireResistance",
            sys::AttoDRY_Interface_querySampleHeaterWireResistance,
        )
    }

    /// Toggle the exchange/VTI temperature controller. If a sample sensor
    /// is connected it is controlled, otherwise the exchange tube
    /// temperature is used.
    pub fn toggle_exchange_heater_control(&self) -> Result<()> {
        self.command(
            "toggleExchangeHeaterControl",
            sys::AttoDRY_Interface_toggleExchangeHeaterControl,
        )
    }

    /// Toggle full system temperature control.
    pub fn toggle_full_temperature_control(&self) -> Result<()> {
        self.command(
            "toggleFullTemperatureControl",
            sys::AttoDRY_Interface_toggleFullTemperatureControl,
        )
    }

    /// Toggle temperature control of the sample heater only.
    pub fn toggle_sample_temperature_control(&self) -> Result<()> {
        self.command(
            "toggleSampleTemperatureControl",
            sys::AttoDRY_Interface_toggleSampleTemperatureControl,
        )
    }

    /// Whether the exchange/VTI heater is on. 'On' means PID control is
    /// active or a constant heater power is set.
    pub fn is_exchange_heater_on(&self) -> Result<bool> {
        self.read_flag(
            "isExchangeHeaterOn",
            sys::AttoDRY_Interface_isExchangeHeaterOn,
        )
    }

    /// Whether the heater is on.
    pub fn is_heater_on(&self) -> Result<bool> {
        self.read_flag("isHeaterOn", sys::AttoDRY_Interface_isHeaterOn)
    }

    /// Whether the sample heater is on.
    pub fn is_sample_heater_on(&self) -> Result<bool> {
        self.read_flag("isSampleHeaterOn", sys::AttoDRY_Interface_isSampleHeaterOn)
    }
}
