//! System status, the error/warning queues, and controller-side logging.
//!
//! The controller keeps FIFO queues of error and warning messages; each
//! read dequeues and clears the oldest entry. The one-at-a-time primitives
//! mirror the native surface, and [`drain_errors`](AttodryInterface::drain_errors)/
//! [`drain_warnings`](AttodryInterface::drain_warnings) empty a queue into a
//! `Vec` in FIFO order for inspection.

use std::os::raw::{c_char, c_int, c_void};
use std::path::Path;

use attodry_sys as sys;

use super::{check, AttodryInterface};
use crate::error::Result;
use crate::types::LogInterval;

/// Buffer size for the error/warning/action message getters.
const MESSAGE_CAPACITY: usize = 256;

/// Buffer size for the controller error message and the runtime status
/// string.
const LONG_MESSAGE_CAPACITY: usize = 512;

impl AttodryInterface {
    /// Raw bitmask of system status flags.
    pub fn system_status(&self) -> Result<i32> {
        self.read_i32("getSystemStatus", sys::AttoDRY_Interface_getSystemStatus)
    }

    /// Number of unread errors queued on the controller.
    pub fn error_count(&self) -> Result<i32> {
        self.read_i32("getErrorCount", sys::AttoDRY_Interface_getErrorCount)
    }

    /// Dequeue and return the oldest error message.
    pub fn pop_error(&self) -> Result<String> {
        self.read_string("getError", sys::AttoDRY_Interface_getError, MESSAGE_CAPACITY)
    }

    /// Empty the error queue, oldest first.
    pub fn drain_errors(&self) -> Result<Vec<String>> {
        let count = self.error_count()?;
        let mut messages = Vec::with_capacity(count.max(0) as usize);
        for _ in 0..count {
            messages.push(self.pop_error()?);
        }
        Ok(messages)
    }

    /// Number of unread warnings queued on the controller.
    pub fn warning_count(&self) -> Result<i32> {
        self.read_i32("getWarningCount", sys::AttoDRY_Interface_getWarningCount)
    }

    /// Dequeue and return the oldest warning message.
    pub fn pop_warning(&self) -> Result<String> {
        self.read_string(
            "getWarning",
            sys::AttoDRY_Interface_getWarning,
            MESSAGE_CAPACITY,
        )
    }

    /// Empty the warning queue, oldest first.
    pub fn drain_warnings(&self) -> Result<Vec<String>> {
        let count = self.warning_count()?;
        let mut messages = Vec::with_capacity(count.max(0) as usize);
        for _ in 0..count {
            messages.push(self.pop_warning()?);
        }
        Ok(messages)
    }

    /// Text of the action the controller is currently performing.
    pub fn action_message(&self) -> Result<String> {
        self.read_string(
            "getActionMessage",
            sys::AttoDRY_Interface_getActionMessage,
            MESSAGE_CAPACITY,
        )
    }

    /// Raw error status byte of the controller.
    pub fn controller_error_status(&self) -> Result<u8> {
        self.read_u8(
            "getAttodryErrorStatus",
            sys::AttoDRY_Interface_getAttodryErrorStatus,
        )
    }

    /// Text of the current controller error, if any.
    pub fn controller_error_message(&self) -> Result<String> {
        self.read_string(
            "getAttodryErrorMessage",
            sys::AttoDRY_Interface_getAttodryErrorMessage,
            LONG_MESSAGE_CAPACITY,
        )
    }

    /// Lower the current error condition, if any.
    pub fn lower_error(&self) -> Result<()> {
        self.command("lowerError", sys::AttoDRY_Interface_lowerError)
    }

    /// Status string of the LabVIEW runtime hosting the interface library.
    ///
    /// This query is served by the runtime wrapper itself, not the
    /// controller, so it is valid in any session state.
    pub fn dll_status(&self) -> Result<String> {
        let _guard = self.ffi_lock.lock();
        let mut buffer = vec![0u8; LONG_MESSAGE_CAPACITY];
        let mut module: *mut c_void = std::ptr::null_mut();
        // SAFETY: buffer is writable for its stated capacity; module is a
        // valid out pointer.
        let code = unsafe {
            sys::LVDLLStatus(
                buffer.as_mut_ptr() as *mut c_char,
                buffer.len() as c_int,
                &mut module,
            )
        };
        check("LVDLLStatus", code)?;
        let end = buffer.iter().position(|&b| b == 0).unwrap_or(buffer.len());
        Ok(String::from_utf8_lossy(&buffer[..end]).into_owned())
    }

    /// Start logging controller data to `path` at the given interval.
    ///
    /// With `append` false an existing file is replaced. The log format is
    /// owned by the vendor library.
    pub fn start_logging(
        &self,
        path: impl AsRef<Path>,
        interval: LogInterval,
        append: bool,
    ) -> Result<()> {
        self.expect_connected("startLogging")?;
        let path = super::c_path(path.as_ref())?;
        let _guard = self.ffi_lock.lock();
        // SAFETY: path is a valid null-terminated string that outlives the
        // call; the remaining arguments are scalars.
        let code = unsafe {
            sys::AttoDRY_Interface_startLogging(
                path.as_ptr() as *mut c_char,
                interval.as_raw(),
                append as c_int,
            )
        };
        check("startLogging", code)
    }

    /// Stop the current controller logging session.
    pub fn stop_logging(&self) -> Result<()> {
        self.command("stopLogging", sys::AttoDRY_Interface_stopLogging)
    }
}
