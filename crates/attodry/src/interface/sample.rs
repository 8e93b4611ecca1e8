//! Sample exchange and system startup/shutdown.

use attodry_sys as sys;

use super::AttodryInterface;
use crate::error::Result;

impl AttodryInterface {
    /// Start the sample exchange procedure.
    pub fn start_sample_exchange(&self) -> Result<()> {
        self.command(
            "startSampleExchange",
            sys::AttoDRY_Interface_startSampleExchange,
        )
    }

    /// Whether a sample exchange is currently in progress.
    pub fn is_sample_exchange_in_progress(&self) -> Result<bool> {
        self.read_flag(
            "isSampleExchangeInProgress",
            sys::AttoDRY_Interface_isSampleExchangeInProgress,
        )
    }

    /// Whether the sample space is ready for an exchange.
    pub fn is_sample_ready_to_exchange(&self) -> Result<bool> {
        self.read_flag(
            "isSampleReadyToExchange",
            sys::AttoDRY_Interface_isSampleReadyToExchange,
        )
    }

    /// Toggle the system start-up or shutdown sequence.
    pub fn toggle_startup_shutdown(&self) -> Result<()> {
        self.command(
            "toggleStartUpShutdown",
            sys::AttoDRY_Interface_toggleStartUpShutdown,
        )
    }

    /// Whether the system is running.
    pub fn is_system_running(&self) -> Result<bool> {
        self.read_flag("isSystemRunning", sys::AttoDRY_Interface_isSystemRunning)
    }
}
