//! Error types for attoDRY operations.
//!
//! The interface library reports failures as non-zero integer status codes;
//! [`AttodryError::NativeCall`] carries that code verbatim. Every native
//! call in this driver is checked, including the handful the vendor's own
//! bindings left unchecked.

use crate::interface::ConnectionState;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for attoDRY operations.
pub type Result<T> = std::result::Result<T, AttodryError>;

/// Errors that can occur when driving an attoDRY controller.
#[derive(Error, Debug)]
pub enum AttodryError {
    /// A native interface call returned a non-zero status code.
    ///
    /// The code is the raw value from the library. Codes in the VISA range
    /// (e.g. `-1073807246`) usually mean the COM port is held by another
    /// program.
    #[error("native call '{function}' failed with status code {code}")]
    NativeCall { function: &'static str, code: i32 },

    /// `begin` was called while the interface server was already running.
    ///
    /// The server is process-global inside the vendor library; only one
    /// session may drive it at a time.
    #[error("attoDRY interface server is already running in this process")]
    ServerAlreadyRunning,

    /// An operation was issued in a session state that does not allow it.
    #[error("'{operation}' is not valid while the session is {state:?}")]
    OutOfOrder {
        operation: &'static str,
        state: ConnectionState,
    },

    /// The controller did not report initialised within the configured
    /// timeout.
    #[error("device did not initialise within {timeout:?}")]
    InitTimeout { timeout: Duration },

    /// A selector, port, or path argument could not be marshalled.
    #[error("invalid {what}: '{value}'")]
    InvalidArgument { what: &'static str, value: String },

    /// Configuration file loading or parsing failed.
    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_call_display_includes_code() {
        let err = AttodryError::NativeCall {
            function: "Connect",
            code: -1073807246,
        };
        assert!(err.to_string().contains("Connect"));
        assert!(err.to_string().contains("-1073807246"));
    }

    #[test]
    fn out_of_order_display_names_state() {
        let err = AttodryError::OutOfOrder {
            operation: "Connect",
            state: ConnectionState::Unstarted,
        };
        assert!(err.to_string().contains("Unstarted"));
    }
}
