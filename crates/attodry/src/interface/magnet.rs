//! Magnet field readings, set-points, and sweep control.
//!
//! Fields are in Tesla, sweep rates in T/min. Single-axis systems use the
//! plain field methods; split-coil systems address the X and Z coils
//! through [`FieldAxis`].

use std::os::raw::{c_float, c_int};

use attodry_sys as sys;

use super::AttodryInterface;
use crate::error::Result;
use crate::types::FieldAxis;

impl AttodryInterface {
    /// Current magnetic field.
    pub fn magnet_field(&self) -> Result<f32> {
        self.read_f32("getMagnetField", sys::AttoDRY_Interface_getMagnetField)
    }

    /// Magnetic field set-point.
    pub fn magnet_setpoint(&self) -> Result<f32> {
        self.read_f32(
            "getMagnetSetpoint",
            sys::AttoDRY_Interface_getMagnetSetpoint,
        )
    }

    /// Set the magnetic field set-point.
    pub fn set_magnet_setpoint(&self, tesla: f32) -> Result<()> {
        self.write_f32(
            "setMagnetSetpoint",
            sys::AttoDRY_Interface_setMagnetSetpoint,
            tesla,
        )
    }

    /// Field sweep rate, in T/min.
    pub fn magnet_sweep_rate(&self) -> Result<f32> {
        self.read_f32(
            "getMagnetSweepRate",
            sys::AttoDRY_Interface_getMagnetSweepRate,
        )
    }

    /// Set the field sweep rate, in T/min.
    pub fn set_magnet_sweep_rate(&self, rate: f32) -> Result<()> {
        self.write_f32(
            "setMagnetSweepRate",
            sys::AttoDRY_Interface_setMagnetSweepRate,
            rate,
        )
    }

    /// Start sweeping the field to the set-point.
    pub fn start_magnet_sweep(&self) -> Result<()> {
        self.command("magnetSweep", sys::AttoDRY_Interface_magnetSweep)
    }

    /// Cancel an ongoing field sweep.
    pub fn cancel_magnet_sweep(&self) -> Result<()> {
        self.command(
            "magnetSweepCancel",
            sys::AttoDRY_Interface_magnetSweepCancel,
        )
    }

    /// Raw magnet status code.
    pub fn magnet_status(&self) -> Result<i32> {
        self.read_i32("getMagnetStatus", sys::AttoDRY_Interface_getMagnetStatus)
    }

    /// Sweep the field to 0 T.
    pub fn sweep_field_to_zero(&self) -> Result<()> {
        self.command("sweepFieldToZero", sys::AttoDRY_Interface_sweepFieldToZero)
    }

    /// Whether the field is currently being swept to zero.
    pub fn is_zeroing_field(&self) -> Result<bool> {
        self.read_flag("isZeroingField", sys::AttoDRY_Interface_isZeroingField)
    }

    /// Toggle magnetic field control.
    pub fn toggle_magnetic_field_control(&self) -> Result<()> {
        self.command(
            "toggleMagneticFieldControl",
            sys::AttoDRY_Interface_toggleMagneticFieldControl,
        )
    }

    /// Toggle persistent mode: once the set-point is reached the switch
    /// heater is turned off and the field persists without current drive.
    pub fn toggle_persistent_mode(&self) -> Result<()> {
        self.command(
            "togglePersistentMode",
            sys::AttoDRY_Interface_togglePersistentMode,
        )
    }

    /// Whether the magnet is in persistent mode.
    pub fn is_persistent_mode_set(&self) -> Result<bool> {
        self.read_flag(
            "isPersistentModeSet",
            sys::AttoDRY_Interface_isPersistentModeSet,
        )
    }

    /// Set the user field set-point on both axes at once.
    pub fn set_user_magnetic_field(&self, tesla: f32) -> Result<()> {
        self.write_f32(
            "setUserMagneticField",
            sys::AttoDRY_Interface_setUserMagneticField,
            tesla,
        )
    }

    /// Current field along one axis of a split-coil magnet.
    pub fn magnetic_field(&self, axis: FieldAxis) -> Result<f32> {
        let (function, call): (_, unsafe extern "C" fn(*mut c_float) -> c_int) = match axis {
            FieldAxis::X => ("getMagneticFieldX", sys::AttoDRY_Interface_getMagneticFieldX),
            FieldAxis::Z => ("getMagneticFieldZ", sys::AttoDRY_Interface_getMagneticFieldZ),
        };
        self.read_f32(function, call)
    }

    /// Field set-point along one axis of a split-coil magnet.
    pub fn magnetic_field_setpoint(&self, axis: FieldAxis) -> Result<f32> {
        let (function, call): (_, unsafe extern "C" fn(*mut c_float) -> c_int) = match axis {
            FieldAxis::X => (
                "getMagneticFieldSetPointX",
                sys::AttoDRY_Interface_getMagneticFieldSetPointX,
            ),
            FieldAxis::Z => (
                "getMagneticFieldSetPointZ",
                sys::AttoDRY_Interface_getMagneticFieldSetPointZ,
            ),
        };
        self.read_f32(function, call)
    }

    /// Set the user field set-point along one axis of a split-coil magnet.
    pub fn set_user_magnetic_field_axis(&self, axis: FieldAxis, tesla: f32) -> Result<()> {
        let (function, call): (_, unsafe extern "C" fn(c_float) -> c_int) = match axis {
            FieldAxis::X => (
                "setUserMagneticFieldX",
                sys::AttoDRY_Interface_setUserMagneticFieldX,
            ),
            FieldAxis::Z => (
                "setUserMagneticFieldZ",
                sys::AttoDRY_Interface_setUserMagneticFieldZ,
            ),
        };
        self.write_f32(function, call, tesla)
    }
}
