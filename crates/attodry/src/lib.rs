//! Safe Rust driver for attocube attoDRY cryostat controllers.
//!
//! This crate wraps the low-level FFI bindings from `attodry-sys` with
//! proper error handling, explicit connection-lifecycle tracking, and typed
//! selectors. The vendor library (`attoDRYLib`) owns the serial protocol,
//! the PID loops, and the calibration-curve formats; this driver is a
//! one-to-one typed surface over its entry points.
//!
//! # Architecture
//!
//! - [`AttodryInterface`] - the interface session: lifecycle calls, the
//!   connection state machine, and one method per native operation
//! - [`AttodryConfig`] - device selection, COM port, initialisation polling
//! - [`AttodryError`] - uniform error reporting, including the numeric
//!   status code of any failed native call
//!
//! Unlike the vendor examples, which forward calls in whatever order the
//! caller issues them, every operation here is checked against the session
//! state first: `begin` before `connect`, a live connection before any
//! device operation, `disconnect` before `end`. Out-of-order calls fail
//! with [`AttodryError::OutOfOrder`] instead of reaching the library.
//!
//! # Example
//!
//! ```no_run
//! use attodry::{AttodryConfig, AttodryInterface};
//!
//! # fn example() -> attodry::Result<()> {
//! let mut dry = AttodryInterface::new(AttodryConfig::default());
//! dry.begin()?;
//! dry.connect()?;
//! dry.wait_until_initialised()?;
//!
//! println!("VTI temperature: {} K", dry.vti_temperature()?);
//! dry.set_user_temperature(4.0)?;
//! dry.toggle_full_temperature_control()?;
//!
//! dry.disconnect()?;
//! dry.end()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - `hardware`: link against the vendor SDK via `attodry-sys/attodry-sdk`.
//!   Without it, calls are served by the scriptable stub layer in
//!   `attodry-sys`, which is what the contract tests run against.

pub mod config;
pub mod error;
pub mod interface;
pub mod types;

pub use config::AttodryConfig;
pub use error::{AttodryError, Result};
pub use interface::{AttodryInterface, ConnectionState};
pub use types::{
    Device, FieldAxis, LogInterval, PressureChannel, ValveControl, ValveSensor, ValveState,
};
