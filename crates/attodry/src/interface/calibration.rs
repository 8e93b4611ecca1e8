//! Temperature sensor calibration curve transfers.
//!
//! Curves are opaque byte streams in the vendor's format, addressed either
//! by a user curve number or as the dedicated sample sensor curve.
//! Transfers are one-shot with no resumability; the path is forwarded as-is
//! with no existence or format checks.

use std::path::Path;

use attodry_sys as sys;

use super::AttodryInterface;
use crate::error::Result;

impl AttodryInterface {
    /// Download the sample temperature sensor calibration curve to `path`.
    pub fn download_sample_calibration_curve(&self, path: impl AsRef<Path>) -> Result<()> {
        self.send_path(
            "downloadSampleTemperatureSensorCalibrationCurve",
            sys::AttoDRY_Interface_downloadSampleTemperatureSensorCalibrationCurve,
            path.as_ref(),
        )
    }

    /// Download the curve stored on the given user curve channel to `path`.
    pub fn download_calibration_curve(
        &self,
        user_curve_number: u8,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        self.send_curve(
            "downloadTemperatureSensorCalibrationCurve",
            sys::AttoDRY_Interface_downloadTemperatureSensorCalibrationCurve,
            user_curve_number,
            path.as_ref(),
        )
    }

    /// Upload a calibration curve for the sample temperature sensor.
    pub fn upload_sample_calibration_curve(&self, path: impl AsRef<Path>) -> Result<()> {
        self.send_path(
            "uploadSampleTemperatureCalibrationCurve",
            sys::AttoDRY_Interface_uploadSampleTemperatureCalibrationCurve,
            path.as_ref(),
        )
    }

    /// Upload a calibration curve to the given user curve channel.
    pub fn upload_calibration_curve(
        &self,
        curve_number: u8,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        self.send_curve(
            "uploadTemperatureCalibrationCurve",
            sys::AttoDRY_Interface_uploadTemperatureCalibrationCurve,
            curve_number,
            path.as_ref(),
        )
    }
}
