//! Connection lifecycle and call marshalling for the attoDRY interface.
//!
//! The vendor library expects a strict call order: `begin` starts the
//! interface server, `Connect` opens the COM port, device operations need a
//! live connection, `Disconnect` must precede `end`. The vendor's example
//! bindings forward calls in whatever order the caller issues them and
//! defer to whatever the library does; here the order is tracked as an
//! explicit state machine and violations
//! fail with [`AttodryError::OutOfOrder`] before any native call is made.
//!
//! ```text
//! Unstarted --begin--> Started --connect--> Connected
//!                         ^                     |
//!                         |   connect      disconnect
//!                         |      v              v
//!                        end <-- Disconnected <-+
//!                         |
//!                         v
//!                       Ended
//! ```
//!
//! Every native call is serialized through an FFI lock (the LabVIEW runtime
//! behind the DLL is not re-entrant) and its integer status code is checked,
//! including the calls the vendor bindings silently ignored failures from.

use std::ffi::CString;
use std::os::raw::{c_char, c_float, c_int, c_uchar, c_ushort};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Instant;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::config::AttodryConfig;
use crate::error::{AttodryError, Result};

mod calibration;
mod gas;
mod magnet;
mod sample;
mod status;
mod temperature;

/// Lifecycle state of an interface session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Created; no native call made yet.
    Unstarted,
    /// Interface server running, no controller connection.
    Started,
    /// Connected to the controller; device operations are allowed.
    Connected,
    /// Connection closed; the server is still running.
    Disconnected,
    /// Server stopped. The session is finished.
    Ended,
}

/// The interface server is process-global inside the vendor library; only
/// one session may drive it at a time.
static SERVER_ACTIVE: AtomicBool = AtomicBool::new(false);

/// A session against an attoDRY controller.
///
/// Construction makes no native call; [`begin`](Self::begin) and
/// [`connect`](Self::connect) bring the session up, and
/// [`disconnect`](Self::disconnect)/[`end`](Self::end) tear it down. If a
/// session is dropped while still up, `Drop` performs a best-effort
/// teardown so the server and COM port are released on every exit path.
pub struct AttodryInterface {
    config: AttodryConfig,
    state: ConnectionState,
    /// Serializes native calls; the LabVIEW runtime is not re-entrant.
    ffi_lock: Mutex<()>,
}

impl AttodryInterface {
    /// Create a session from the given configuration.
    pub fn new(config: AttodryConfig) -> Self {
        Self {
            config,
            state: ConnectionState::Unstarted,
            ffi_lock: Mutex::new(()),
        }
    }

    /// The configuration this session was created with.
    pub fn config(&self) -> &AttodryConfig {
        &self.config
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Start the interface server for the configured device.
    ///
    /// Must run before any other call. Fails with
    /// [`AttodryError::ServerAlreadyRunning`] if another session in this
    /// process holds the server.
    pub fn begin(&mut self) -> Result<()> {
        self.expect_state(ConnectionState::Unstarted, "begin")?;
        if SERVER_ACTIVE
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(AttodryError::ServerAlreadyRunning);
        }

        let device = self.config.device;
        let result = {
            let _guard = self.ffi_lock.lock();
            // SAFETY: begin takes the device selector by value.
            let code = unsafe { attodry_sys::AttoDRY_Interface_begin(device.as_raw() as c_ushort) };
            check("begin", code)
        };

        match result {
            Ok(()) => {
                self.state = ConnectionState::Started;
                info!(?device, "attoDRY interface server started");
                Ok(())
            }
            Err(e) => {
                // Release the server slot so a later begin can retry.
                SERVER_ACTIVE.store(false, Ordering::SeqCst);
                Err(e)
            }
        }
    }

    /// Connect to the controller on the configured COM port.
    ///
    /// Valid after [`begin`](Self::begin), and again after
    /// [`disconnect`](Self::disconnect) to re-open the port without
    /// restarting the server.
    pub fn connect(&mut self) -> Result<()> {
        match self.state {
            ConnectionState::Started | ConnectionState::Disconnected => {}
            state => {
                return Err(AttodryError::OutOfOrder {
                    operation: "Connect",
                    state,
                })
            }
        }

        let port = c_string("COM port", &self.config.com_port)?;
        {
            let _guard = self.ffi_lock.lock();
            // SAFETY: port is a valid null-terminated string that outlives
            // the call; the library copies it before returning.
            let code =
                unsafe { attodry_sys::AttoDRY_Interface_Connect(port.as_ptr() as *mut c_char) };
            check("Connect", code)?;
        }

        self.state = ConnectionState::Connected;
        info!(port = %self.config.com_port, "connected to attoDRY controller");
        Ok(())
    }

    /// Close the controller connection. The server keeps running.
    pub fn disconnect(&mut self) -> Result<()> {
        self.expect_state(ConnectionState::Connected, "Disconnect")?;
        {
            let _guard = self.ffi_lock.lock();
            // SAFETY: no arguments.
            let code = unsafe { attodry_sys::AttoDRY_Interface_Disconnect() };
            check("Disconnect", code)?;
        }
        self.state = ConnectionState::Disconnected;
        info!("disconnected from attoDRY controller");
        Ok(())
    }

    /// Stop the interface server. [`disconnect`](Self::disconnect) must run
    /// first if a connection is open.
    pub fn end(&mut self) -> Result<()> {
        match self.state {
            ConnectionState::Started | ConnectionState::Disconnected => {}
            state => {
                return Err(AttodryError::OutOfOrder {
                    operation: "end",
                    state,
                })
            }
        }
        {
            let _guard = self.ffi_lock.lock();
            // SAFETY: no arguments.
            let code = unsafe { attodry_sys::AttoDRY_Interface_end() };
            check("end", code)?;
        }
        self.state = ConnectionState::Ended;
        SERVER_ACTIVE.store(false, Ordering::SeqCst);
        info!("attoDRY interface server stopped");
        Ok(())
    }

    /// Send a 'Cancel' command: abort an ongoing action or answer a
    /// controller prompt negatively.
    pub fn cancel(&self) -> Result<()> {
        self.command("Cancel", attodry_sys::AttoDRY_Interface_Cancel)
    }

    /// Send a 'Confirm' command: answer a controller prompt positively.
    pub fn confirm(&self) -> Result<()> {
        self.command("Confirm", attodry_sys::AttoDRY_Interface_Confirm)
    }

    /// Whether the library reports an open controller connection.
    pub fn is_connected(&self) -> Result<bool> {
        self.expect_running("isDeviceConnected")?;
        let value = self.raw_read_i32(
            "isDeviceConnected",
            attodry_sys::AttoDRY_Interface_isDeviceConnected,
        )?;
        Ok(value != 0)
    }

    /// Whether the controller has finished its startup handshake.
    pub fn is_initialised(&self) -> Result<bool> {
        self.expect_running("isDeviceInitialised")?;
        let value = self.raw_read_i32(
            "isDeviceInitialised",
            attodry_sys::AttoDRY_Interface_isDeviceInitialised,
        )?;
        Ok(value != 0)
    }

    /// Poll [`is_initialised`](Self::is_initialised) until the controller is
    /// ready, sleeping `init_poll_interval` between polls and giving up with
    /// [`AttodryError::InitTimeout`] after `init_timeout`.
    pub fn wait_until_initialised(&self) -> Result<()> {
        let deadline = Instant::now() + self.config.init_timeout;
        loop {
            if self.is_initialised()? {
                debug!("attoDRY controller initialised");
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(AttodryError::InitTimeout {
                    timeout: self.config.init_timeout,
                });
            }
            thread::sleep(self.config.init_poll_interval);
        }
    }

    /// Best-effort teardown: disconnect if connected, then stop the server
    /// if it is still running. Safe to call in any state.
    pub fn shutdown(&mut self) -> Result<()> {
        if self.state == ConnectionState::Connected {
            self.disconnect()?;
        }
        if matches!(
            self.state,
            ConnectionState::Started | ConnectionState::Disconnected
        ) {
            self.end()?;
        }
        Ok(())
    }

    // -----------------------------------------------------------------
    // Marshalling helpers. One per argument shape of the native surface;
    // the per-operation methods in the sibling modules are thin calls into
    // these.
    // -----------------------------------------------------------------

    fn expect_state(&self, expected: ConnectionState, operation: &'static str) -> Result<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(AttodryError::OutOfOrder {
                operation,
                state: self.state,
            })
        }
    }

    /// Device operations need a live connection.
    fn expect_connected(&self, operation: &'static str) -> Result<()> {
        self.expect_state(ConnectionState::Connected, operation)
    }

    /// Connection queries only need the server to be running.
    fn expect_running(&self, operation: &'static str) -> Result<()> {
        match self.state {
            ConnectionState::Started
            | ConnectionState::Connected
            | ConnectionState::Disconnected => Ok(()),
            state => Err(AttodryError::OutOfOrder { operation, state }),
        }
    }

    /// Read through an `f32` out-cell.
    pub(super) fn read_f32(
        &self,
        function: &'static str,
        call: unsafe extern "C" fn(*mut c_float) -> c_int,
    ) -> Result<f32> {
        self.expect_connected(function)?;
        let _guard = self.ffi_lock.lock();
        let mut value: c_float = 0.0;
        // SAFETY: value is a valid out cell for the duration of the call.
        let code = unsafe { call(&mut value) };
        check(function, code)?;
        Ok(value)
    }

    fn raw_read_i32(
        &self,
        function: &'static str,
        call: unsafe extern "C" fn(*mut c_int) -> c_int,
    ) -> Result<i32> {
        let _guard = self.ffi_lock.lock();
        let mut value: c_int = 0;
        // SAFETY: value is a valid out cell for the duration of the call.
        let code = unsafe { call(&mut value) };
        check(function, code)?;
        Ok(value)
    }

    /// Read through an `i32` out-cell.
    pub(super) fn read_i32(
        &self,
        function: &'static str,
        call: unsafe extern "C" fn(*mut c_int) -> c_int,
    ) -> Result<i32> {
        self.expect_connected(function)?;
        self.raw_read_i32(function, call)
    }

    /// Read a 0/1 status flag.
    pub(super) fn read_flag(
        &self,
        function: &'static str,
        call: unsafe extern "C" fn(*mut c_int) -> c_int,
    ) -> Result<bool> {
        Ok(self.read_i32(function, call)? != 0)
    }

    /// Read through a `u8` out-cell.
    pub(super) fn read_u8(
        &self,
        function: &'static str,
        call: unsafe extern "C" fn(*mut c_uchar) -> c_int,
    ) -> Result<u8> {
        self.expect_connected(function)?;
        let _guard = self.ffi_lock.lock();
        let mut value: c_uchar = 0;
        // SAFETY: value is a valid out cell for the duration of the call.
        let code = unsafe { call(&mut value) };
        check(function, code)?;
        Ok(value)
    }

    /// Read through a `u16` out-cell.
    pub(super) fn read_u16(
        &self,
        function: &'static str,
        call: unsafe extern "C" fn(*mut c_ushort) -> c_int,
    ) -> Result<u16> {
        self.expect_connected(function)?;
        let _guard = self.ffi_lock.lock();
        let mut value: c_ushort = 0;
        // SAFETY: value is a valid out cell for the duration of the call.
        let code = unsafe { call(&mut value) };
        check(function, code)?;
        Ok(value)
    }

    /// Forward an `f32` by value.
    pub(super) fn write_f32(
        &self,
        function: &'static str,
        call: unsafe extern "C" fn(c_float) -> c_int,
        value: f32,
    ) -> Result<()> {
        self.expect_connected(function)?;
        let _guard = self.ffi_lock.lock();
        // SAFETY: scalar passed by value.
        let code = unsafe { call(value) };
        check(function, code)
    }

    /// Forward an `i32` by value.
    pub(super) fn write_i32(
        &self,
        function: &'static str,
        call: unsafe extern "C" fn(c_int) -> c_int,
        value: i32,
    ) -> Result<()> {
        self.expect_connected(function)?;
        let _guard = self.ffi_lock.lock();
        // SAFETY: scalar passed by value.
        let code = unsafe { call(value) };
        check(function, code)
    }

    /// Fire an argument-less command.
    pub(super) fn command(
        &self,
        function: &'static str,
        call: unsafe extern "C" fn() -> c_int,
    ) -> Result<()> {
        self.expect_connected(function)?;
        let _guard = self.ffi_lock.lock();
        // SAFETY: no arguments.
        let code = unsafe { call() };
        check(function, code)
    }

    /// Read a text message into a fixed buffer and decode up to the
    /// terminator.
    pub(super) fn read_string(
        &self,
        function: &'static str,
        call: unsafe extern "C" fn(*mut c_char, c_int) -> c_int,
        capacity: usize,
    ) -> Result<String> {
        self.expect_connected(function)?;
        let _guard = self.ffi_lock.lock();
        let mut buffer = vec![0u8; capacity];
        // SAFETY: buffer is writable for `capacity` bytes and the stated
        // capacity is passed alongside; the library always terminates
        // within it.
        let code = unsafe { call(buffer.as_mut_ptr() as *mut c_char, capacity as c_int) };
        check(function, code)?;
        let end = buffer.iter().position(|&b| b == 0).unwrap_or(buffer.len());
        Ok(String::from_utf8_lossy(&buffer[..end]).into_owned())
    }

    /// Forward a file-system path. The path is not checked for existence;
    /// the library owns all file handling.
    pub(super) fn send_path(
        &self,
        function: &'static str,
        call: unsafe extern "C" fn(*mut c_char) -> c_int,
        path: &Path,
    ) -> Result<()> {
        self.expect_connected(function)?;
        let path = c_path(path)?;
        let _guard = self.ffi_lock.lock();
        // SAFETY: path is a valid null-terminated string that outlives the
        // call.
        let code = unsafe { call(path.as_ptr() as *mut c_char) };
        check(function, code)
    }

    /// Forward a curve number and a file-system path.
    pub(super) fn send_curve(
        &self,
        function: &'static str,
        call: unsafe extern "C" fn(c_uchar, *mut c_char) -> c_int,
        curve_number: u8,
        path: &Path,
    ) -> Result<()> {
        self.expect_connected(function)?;
        let path = c_path(path)?;
        let _guard = self.ffi_lock.lock();
        // SAFETY: path is a valid null-terminated string that outlives the
        // call; the curve number is passed by value.
        let code = unsafe { call(curve_number, path.as_ptr() as *mut c_char) };
        check(function, code)
    }
}

impl Drop for AttodryInterface {
    fn drop(&mut self) {
        if matches!(
            self.state,
            ConnectionState::Started | ConnectionState::Connected | ConnectionState::Disconnected
        ) {
            debug!(state = ?self.state, "closing attoDRY session on drop");
            if let Err(e) = self.shutdown() {
                warn!(error = %e, "error while closing attoDRY session");
            }
        }
    }
}

impl std::fmt::Debug for AttodryInterface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttodryInterface")
            .field("device", &self.config.device)
            .field("com_port", &self.config.com_port)
            .field("state", &self.state)
            .finish()
    }
}

pub(super) fn check(function: &'static str, code: c_int) -> Result<()> {
    if code == 0 {
        Ok(())
    } else {
        Err(AttodryError::NativeCall { function, code })
    }
}

fn c_string(what: &'static str, value: &str) -> Result<CString> {
    CString::new(value).map_err(|_| AttodryError::InvalidArgument {
        what,
        value: value.to_owned(),
    })
}

fn c_path(path: &Path) -> Result<CString> {
    let text = path.to_str().ok_or_else(|| AttodryError::InvalidArgument {
        what: "path",
        value: path.display().to_string(),
    })?;
    c_string("path", text)
}
