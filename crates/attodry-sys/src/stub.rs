//! Functional stand-ins for the attoDRY interface library.
//!
//! Compiled when the `attodry-sdk` feature is disabled. Every entry point
//! keeps the signature of the real library but operates on a process-global
//! [`StubState`]: scalar out-cells, FIFO error/warning queues, per-function
//! return-code overrides, an initialise-after-N-polls counter, and a call
//! log. Tests script the state through the `set_*`/`push_*` functions and
//! assert against [`calls`]/[`take_calls`].
//!
//! The state is shared per process; tests that use it must be serialized
//! (e.g. with `serial_test`) and should start with [`reset`].

use once_cell::sync::Lazy;
use std::collections::{HashMap, VecDeque};
use std::ffi::CStr;
use std::os::raw::{c_char, c_float, c_int, c_uchar, c_ushort, c_void};
use std::sync::{Mutex, MutexGuard};

// Vendor enum constants, spelled as in the interface header. In SDK mode
// bindgen generates these from the header; the stub declares them flat.
pub const AttoDRY_Interface_Device_attoDRY1100: c_ushort = 0;
pub const AttoDRY_Interface_Device_attoDRY2100: c_ushort = 1;
pub const AttoDRY_Interface_Device_attoDRY800: c_ushort = 2;

pub const Enum__1Second: c_int = 0;
pub const Enum__5Seconds: c_int = 1;
pub const Enum__30Seconds: c_int = 2;
pub const Enum__1Minute: c_int = 3;
pub const Enum__5Minutes: c_int = 4;

/// A single argument captured in the call log.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    I32(i32),
    U8(u8),
    U16(u16),
    F32(f32),
    Str(String),
}

/// One recorded native call, in issue order.
#[derive(Debug, Clone, PartialEq)]
pub struct CallRecord {
    pub function: &'static str,
    pub args: Vec<Arg>,
}

#[derive(Default)]
struct StubState {
    return_codes: HashMap<&'static str, c_int>,
    f32_cells: HashMap<&'static str, f32>,
    i32_cells: HashMap<&'static str, i32>,
    u8_cells: HashMap<&'static str, u8>,
    u16_cells: HashMap<&'static str, u16>,
    string_cells: HashMap<&'static str, String>,
    errors: VecDeque<String>,
    warnings: VecDeque<String>,
    init_polls_required: u32,
    init_polls_seen: u32,
    calls: Vec<CallRecord>,
}

static STATE: Lazy<Mutex<StubState>> = Lazy::new(|| Mutex::new(StubState::default()));

fn state() -> MutexGuard<'static, StubState> {
    match STATE.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

// ---------------------------------------------------------------------------
// Control surface for tests
// ---------------------------------------------------------------------------

/// Clear all scripted values, queues, counters, and the call log.
pub fn reset() {
    *state() = StubState::default();
}

/// Make `function` return `code` instead of 0.
pub fn set_return_code(function: &'static str, code: i32) {
    state().return_codes.insert(function, code);
}

/// Seed the out-cell of a float getter.
pub fn set_f32(function: &'static str, value: f32) {
    state().f32_cells.insert(function, value);
}

/// Seed the out-cell of an int getter or status flag.
pub fn set_i32(function: &'static str, value: i32) {
    state().i32_cells.insert(function, value);
}

/// Seed the out-cell of a u8 getter.
pub fn set_u8(function: &'static str, value: u8) {
    state().u8_cells.insert(function, value);
}

/// Seed the out-cell of a u16 getter.
pub fn set_u16(function: &'static str, value: u16) {
    state().u16_cells.insert(function, value);
}

/// Seed the buffer contents of a string getter.
pub fn set_string(function: &'static str, value: &str) {
    state().string_cells.insert(function, value.to_owned());
}

/// Enqueue an error message; `getErrorCount` reflects the queue length and
/// `getError` dequeues oldest-first.
pub fn push_error(message: &str) {
    state().errors.push_back(message.to_owned());
}

/// Enqueue a warning message, analogous to [`push_error`].
pub fn push_warning(message: &str) {
    state().warnings.push_back(message.to_owned());
}

/// Report not-initialised until `isDeviceInitialised` has been polled
/// `polls` times (0 means initialised immediately).
pub fn set_initialised_after(polls: u32) {
    let mut s = state();
    s.init_polls_required = polls;
    s.init_polls_seen = 0;
}

/// Snapshot of the call log.
pub fn calls() -> Vec<CallRecord> {
    state().calls.clone()
}

/// Drain and return the call log.
pub fn take_calls() -> Vec<CallRecord> {
    std::mem::take(&mut state().calls)
}

// ---------------------------------------------------------------------------
// Shared behavior
// ---------------------------------------------------------------------------

fn code_for(s: &StubState, function: &'static str) -> c_int {
    s.return_codes.get(function).copied().unwrap_or(0)
}

fn record(s: &mut StubState, function: &'static str, args: Vec<Arg>) -> c_int {
    s.calls.push(CallRecord { function, args });
    code_for(s, function)
}

unsafe fn capture(ptr: *mut c_char) -> String {
    if ptr.is_null() {
        String::new()
    } else {
        CStr::from_ptr(ptr).to_string_lossy().into_owned()
    }
}

/// Copy `text` into `buffer`, truncating to `capacity - 1` and always
/// writing the terminator, the way the LabVIEW string marshaller does.
unsafe fn fill_c_string(buffer: *mut c_char, capacity: usize, text: &str) {
    if capacity == 0 {
        return;
    }
    let bytes = text.as_bytes();
    let n = bytes.len().min(capacity - 1);
    for (i, b) in bytes[..n].iter().enumerate() {
        *buffer.add(i) = *b as c_char;
    }
    *buffer.add(n) = 0;
}

unsafe fn read_f32(function: &'static str, out: *mut c_float) -> c_int {
    let mut s = state();
    let code = record(&mut s, function, Vec::new());
    if code == 0 && !out.is_null() {
        *out = s.f32_cells.get(function).copied().unwrap_or(0.0);
    }
    code
}

unsafe fn read_i32(function: &'static str, out: *mut c_int) -> c_int {
    let mut s = state();
    let code = record(&mut s, function, Vec::new());
    if code == 0 && !out.is_null() {
        *out = s.i32_cells.get(function).copied().unwrap_or(0);
    }
    code
}

unsafe fn read_u8(function: &'static str, out: *mut c_uchar) -> c_int {
    let mut s = state();
    let code = record(&mut s, function, Vec::new());
    if code == 0 && !out.is_null() {
        *out = s.u8_cells.get(function).copied().unwrap_or(0);
    }
    code
}

unsafe fn read_u16(function: &'static str, out: *mut c_ushort) -> c_int {
    let mut s = state();
    let code = record(&mut s, function, Vec::new());
    if code == 0 && !out.is_null() {
        *out = s.u16_cells.get(function).copied().unwrap_or(0);
    }
    code
}

unsafe fn read_string(function: &'static str, buffer: *mut c_char, length: c_int) -> c_int {
    let mut s = state();
    let code = record(&mut s, function, vec![Arg::I32(length)]);
    if code == 0 && !buffer.is_null() && length > 0 {
        let text = s.string_cells.get(function).cloned().unwrap_or_default();
        fill_c_string(buffer, length as usize, &text);
    }
    code
}

fn write_f32(function: &'static str, value: c_float) -> c_int {
    record(&mut state(), function, vec![Arg::F32(value)])
}

fn write_i32(function: &'static str, value: c_int) -> c_int {
    record(&mut state(), function, vec![Arg::I32(value)])
}

fn command(function: &'static str) -> c_int {
    record(&mut state(), function, Vec::new())
}

unsafe fn queue_count(function: &'static str, out: *mut c_int, warning: bool) -> c_int {
    let mut s = state();
    let code = record(&mut s, function, Vec::new());
    if code == 0 && !out.is_null() {
        let queue = if warning { &s.warnings } else { &s.errors };
        *out = queue.len() as c_int;
    }
    code
}

unsafe fn queue_pop(
    function: &'static str,
    buffer: *mut c_char,
    length: c_int,
    warning: bool,
) -> c_int {
    let mut s = state();
    let code = record(&mut s, function, vec![Arg::I32(length)]);
    if code == 0 && !buffer.is_null() && length > 0 {
        let queue = if warning { &mut s.warnings } else { &mut s.errors };
        let text = queue.pop_front().unwrap_or_default();
        fill_c_string(buffer, length as usize, &text);
    }
    code
}

unsafe fn transfer_path(function: &'static str, path: *mut c_char) -> c_int {
    let path = capture(path);
    record(&mut state(), function, vec![Arg::Str(path)])
}

unsafe fn transfer_curve(function: &'static str, curve: c_uchar, path: *mut c_char) -> c_int {
    let path = capture(path);
    record(&mut state(), function, vec![Arg::U8(curve), Arg::Str(path)])
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

pub unsafe extern "C" fn AttoDRY_Interface_begin(device: c_ushort) -> c_int {
    record(&mut state(), "begin", vec![Arg::U16(device)])
}

pub unsafe extern "C" fn AttoDRY_Interface_Connect(com_port: *mut c_char) -> c_int {
    let port = capture(com_port);
    record(&mut state(), "Connect", vec![Arg::Str(port)])
}

pub unsafe extern "C" fn AttoDRY_Interface_Disconnect() -> c_int {
    command("Disconnect")
}

pub unsafe extern "C" fn AttoDRY_Interface_end() -> c_int {
    command("end")
}

pub unsafe extern "C" fn AttoDRY_Interface_Cancel() -> c_int {
    command("Cancel")
}

pub unsafe extern "C" fn AttoDRY_Interface_Confirm() -> c_int {
    command("Confirm")
}

pub unsafe extern "C" fn AttoDRY_Interface_isDeviceConnected(status: *mut c_int) -> c_int {
    read_i32("isDeviceConnected", status)
}

pub unsafe extern "C" fn AttoDRY_Interface_isDeviceInitialised(status: *mut c_int) -> c_int {
    let mut s = state();
    let code = record(&mut s, "isDeviceInitialised", Vec::new());
    if code == 0 && !status.is_null() {
        s.init_polls_seen += 1;
        *status = (s.init_polls_seen >= s.init_polls_required) as c_int;
    }
    code
}

// ---------------------------------------------------------------------------
// Status flags
// ---------------------------------------------------------------------------

pub unsafe extern "C" fn AttoDRY_Interface_isExchangeHeaterOn(status: *mut c_int) -> c_int {
    read_i32("isExchangeHeaterOn", status)
}

pub unsafe extern "C" fn AttoDRY_Interface_isHeaterOn(status: *mut c_int) -> c_int {
    read_i32("isHeaterOn", status)
}

pub unsafe extern "C" fn AttoDRY_Interface_isPersistentModeSet(status: *mut c_int) -> c_int {
    read_i32("isPersistentModeSet", status)
}

pub unsafe extern "C" fn AttoDRY_Interface_isPumping(status: *mut c_int) -> c_int {
    read_i32("isPumping", status)
}

pub unsafe extern "C" fn AttoDRY_Interface_isSampleExchangeInProgress(status: *mut c_int) -> c_int {
    read_i32("isSampleExchangeInProgress", status)
}

pub unsafe extern "C" fn AttoDRY_Interface_isSampleHeaterOn(status: *mut c_int) -> c_int {
    read_i32("isSampleHeaterOn", status)
}

pub unsafe extern "C" fn AttoDRY_Interface_isSampleReadyToExchange(status: *mut c_int) -> c_int {
    read_i32("isSampleReadyToExchange", status)
}

pub unsafe extern "C" fn AttoDRY_Interface_isSystemRunning(status: *mut c_int) -> c_int {
    read_i32("isSystemRunning", status)
}

pub unsafe extern "C" fn AttoDRY_Interface_isZeroingField(status: *mut c_int) -> c_int {
    read_i32("isZeroingField", status)
}

// ---------------------------------------------------------------------------
// Temperature readings and control
// ---------------------------------------------------------------------------

pub unsafe extern "C" fn AttoDRY_Interface_get4KStageTemperature(temperature: *mut c_float) -> c_int {
    read_f32("get4KStageTemperature", temperature)
}

pub unsafe extern "C" fn AttoDRY_Interface_getReservoirTemperature(temperature: *mut c_float) -> c_int {
    read_f32("getReservoirTemperature", temperature)
}

pub unsafe extern "C" fn AttoDRY_Interface_getVtiTemperature(temperature: *mut c_float) -> c_int {
    read_f32("getVtiTemperature", temperature)
}

pub unsafe extern "C" fn AttoDRY_Interface_getSampleTemperature(temperature: *mut c_float) -> c_int {
    read_f32("getSampleTemperature", temperature)
}

pub unsafe extern "C" fn AttoDRY_Interface_getUserTemperature(temperature: *mut c_float) -> c_int {
    read_f32("getUserTemperature", temperature)
}

pub unsafe extern "C" fn AttoDRY_Interface_setUserTemperature(temperature: c_float) -> c_int {
    write_f32("setUserTemperature", temperature)
}

pub unsafe extern "C" fn AttoDRY_Interface_getTemperatureSetpoint(temperature: *mut c_float) -> c_int {
    read_f32("getTemperatureSetpoint", temperature)
}

pub unsafe extern "C" fn AttoDRY_Interface_getTemperatureSetpointLimit(temperature: *mut c_float) -> c_int {
    read_f32("getTemperatureSetpointLimit", temperature)
}

pub unsafe extern "C" fn AttoDRY_Interface_setTemperatureSetpoint(temperature: c_float) -> c_int {
    write_f32("setTemperatureSetpoint", temperature)
}

pub unsafe extern "C" fn AttoDRY_Interface_getTemperatureRampRate(rate: *mut c_float) -> c_int {
    read_f32("getTemperatureRampRate", rate)
}

pub unsafe extern "C" fn AttoDRY_Interface_setTemperatureRampRate(rate: c_float) -> c_int {
    write_f32("setTemperatureRampRate", rate)
}

pub unsafe extern "C" fn AttoDRY_Interface_getHeaterOutput(output: *mut c_float) -> c_int {
    read_f32("getHeaterOutput", output)
}

pub unsafe extern "C" fn AttoDRY_Interface_getHeaterRange(range: *mut c_int) -> c_int {
    read_i32("getHeaterRange", range)
}

pub unsafe extern "C" fn AttoDRY_Interface_setHeaterRange(range: c_int) -> c_int {
    write_i32("setHeaterRange", range)
}

pub unsafe extern "C" fn AttoDRY_Interface_getProportionalGain(gain: *mut c_float) -> c_int {
    read_f32("getProportionalGain", gain)
}

pub unsafe extern "C" fn AttoDRY_Interface_getIntegralGain(gain: *mut c_float) -> c_int {
    read_f32("getIntegralGain", gain)
}

pub unsafe extern "C" fn AttoDRY_Interface_getDerivativeGain(gain: *mut c_float) -> c_int {
    read_f32("getDerivativeGain", gain)
}

pub unsafe extern "C" fn AttoDRY_Interface_setProportionalGain(gain: c_float) -> c_int {
    write_f32("setProportionalGain", gain)
}

pub unsafe extern "C" fn AttoDRY_Interface_setIntegralGain(gain: c_float) -> c_int {
    write_f32("setIntegralGain", gain)
}

pub unsafe extern "C" fn AttoDRY_Interface_setDerivativeGain(gain: c_float) -> c_int {
    write_f32("setDerivativeGain", gain)
}

pub unsafe extern "C" fn AttoDRY_Interface_getSampleHeaterPower(power: *mut c_float) -> c_int {
    read_f32("getSampleHeaterPower", power)
}

pub unsafe extern "C" fn AttoDRY_Interface_setSampleHeaterPower(power: c_float) -> c_int {
    write_f32("setSampleHeaterPower", power)
}

pub unsafe extern "C" fn AttoDRY_Interface_getSampleHeaterMaximumPower(power: *mut c_float) -> c_int {
    read_f32("getSampleHeaterMaximumPower", power)
}

pub unsafe extern "C" fn AttoDRY_Interface_setSampleHeaterMaximumPower(power: c_float) -> c_int {
    write_f32("setSampleHeaterMaximumPower", power)
}

pub unsafe extern "C" fn AttoDRY_Interface_getSampleHeaterResistance(resistance: *mut c_float) -> c_int {
    read_f32("getSampleHeaterResistance", resistance)
}

pub unsafe extern "C" fn AttoDRY_Interface_setSampleHeaterResistance(resistance: c_float) -> c_int {
    write_f32("setSampleHeaterResistance", resistance)
}

pub unsafe extern "C" fn AttoDRY_Interface_getSampleHeaterWireResistance(resistance: *mut c_float) -> c_int {
    read_f32("getSampleHeaterWireResistance", resistance)
}

pub unsafe extern "C" fn AttoDRY_Interface_setSampleHeaterWireResistance(resistance: c_float) -> c_int {
    write_f32("setSampleHeaterWireResistance", resistance)
}

pub unsafe extern "C" fn AttoDRY_Interface_getVtiHeaterPower(power: *mut c_float) -> c_int {
    read_f32("getVtiHeaterPower", power)
}

pub unsafe extern "C" fn AttoDRY_Interface_setVTIHeaterPower(power: c_float) -> c_int {
    write_f32("setVTIHeaterPower", power)
}

pub unsafe extern "C" fn AttoDRY_Interface_querySampleHeaterMaximumPower() -> c_int {
    command("querySampleHeaterMaximumPower")
}

pub unsafe extern "C" fn AttoDRY_Interface_querySampleHeaterResistance() -> c_int {
    command("querySampleHeaterResistance")
}

pub unsafe extern "C" fn AttoDRY_Interface_querySampleHeaterWireResistance() -> c_int {
    command("querySampleHeaterWireResistance")
}

pub unsafe extern "C" fn AttoDRY_Interface_toggleExchangeHeaterControl() -> c_int {
    command("toggleExchangeHeaterControl")
}

pub unsafe extern "C" fn AttoDRY_Interface_toggleFullTemperatureControl() -> c_int {
    command("toggleFullTemperatureControl")
}

pub unsafe extern "C" fn AttoDRY_Interface_toggleSampleTemperatureControl() -> c_int {
    command("toggleSampleTemperatureControl")
}

// ---------------------------------------------------------------------------
// Magnet
// ---------------------------------------------------------------------------

pub unsafe extern "C" fn AttoDRY_Interface_getMagnetField(field: *mut c_float) -> c_int {
    read_f32("getMagnetField", field)
}

pub unsafe extern "C" fn AttoDRY_Interface_getMagnetSetpoint(setpoint: *mut c_float) -> c_int {
    read_f32("getMagnetSetpoint", setpoint)
}

pub unsafe extern "C" fn AttoDRY_Interface_setMagnetSetpoint(setpoint: c_float) -> c_int {
    write_f32("setMagnetSetpoint", setpoint)
}

pub unsafe extern "C" fn AttoDRY_Interface_getMagnetSweepRate(rate: *mut c_float) -> c_int {
    read_f32("getMagnetSweepRate", rate)
}

pub unsafe extern "C" fn AttoDRY_Interface_setMagnetSweepRate(rate: c_float) -> c_int {
    write_f32("setMagnetSweepRate", rate)
}

pub unsafe extern "C" fn AttoDRY_Interface_magnetSweep() -> c_int {
    command("magnetSweep")
}

pub unsafe extern "C" fn AttoDRY_Interface_magnetSweepCancel() -> c_int {
    command("magnetSweepCancel")
}

pub unsafe extern "C" fn AttoDRY_Interface_getMagnetStatus(status: *mut c_int) -> c_int {
    read_i32("getMagnetStatus", status)
}

pub unsafe extern "C" fn AttoDRY_Interface_sweepFieldToZero() -> c_int {
    command("sweepFieldToZero")
}

pub unsafe extern "C" fn AttoDRY_Interface_toggleMagneticFieldControl() -> c_int {
    command("toggleMagneticFieldControl")
}

pub unsafe extern "C" fn AttoDRY_Interface_togglePersistentMode() -> c_int {
    command("togglePersistentMode")
}

pub unsafe extern "C" fn AttoDRY_Interface_setUserMagneticField(field: c_float) -> c_int {
    write_f32("setUserMagneticField", field)
}

pub unsafe extern "C" fn AttoDRY_Interface_getMagneticFieldX(field: *mut c_float) -> c_int {
    read_f32("getMagneticFieldX", field)
}

pub unsafe extern "C" fn AttoDRY_Interface_getMagneticFieldZ(field: *mut c_float) -> c_int {
    read_f32("getMagneticFieldZ", field)
}

pub unsafe extern "C" fn AttoDRY_Interface_getMagneticFieldSetPointX(setpoint: *mut c_float) -> c_int {
    read_f32("getMagneticFieldSetPointX", setpoint)
}

pub unsafe extern "C" fn AttoDRY_Interface_getMagneticFieldSetPointZ(setpoint: *mut c_float) -> c_int {
    read_f32("getMagneticFieldSetPointZ", setpoint)
}

pub unsafe extern "C" fn AttoDRY_Interface_setUserMagneticFieldX(field: c_float) -> c_int {
    write_f32("setUserMagneticFieldX", field)
}

pub unsafe extern "C" fn AttoDRY_Interface_setUserMagneticFieldZ(field: c_float) -> c_int {
    write_f32("setUserMagneticFieldZ", field)
}

// ---------------------------------------------------------------------------
// Gas handling: valves, pressures, pumps
// ---------------------------------------------------------------------------

pub unsafe extern "C" fn AttoDRY_Interface_toggleCryostatInValve() -> c_int {
    command("toggleCryostatInValve")
}

pub unsafe extern "C" fn AttoDRY_Interface_toggleCryostatOutValve() -> c_int {
    command("toggleCryostatOutValve")
}

pub unsafe extern "C" fn AttoDRY_Interface_toggleDumpInValve() -> c_int {
    command("toggleDumpInValve")
}

pub unsafe extern "C" fn AttoDRY_Interface_toggleDumpOutValve() -> c_int {
    command("toggleDumpOutValve")
}

pub unsafe extern "C" fn AttoDRY_Interface_getCryostatInValve(status: *mut c_int) -> c_int {
    read_i32("getCryostatInValve", status)
}

pub unsafe extern "C" fn AttoDRY_Interface_getCryostatOutValve(status: *mut c_int) -> c_int {
    read_i32("getCryostatOutValve", status)
}

pub unsafe extern "C" fn AttoDRY_Interface_getDumpInValve(status: *mut c_int) -> c_int {
    read_i32("getDumpInValve", status)
}

pub unsafe extern "C" fn AttoDRY_Interface_getDumpOutValve(status: *mut c_int) -> c_int {
    read_i32("getDumpOutValve", status)
}

pub unsafe extern "C" fn AttoDRY_Interface_getHeValve(status: *mut c_int) -> c_int {
    read_i32("getHeValve", status)
}

pub unsafe extern "C" fn AttoDRY_Interface_getPump800Valve(status: *mut c_int) -> c_int {
    read_i32("getPump800Valve", status)
}

pub unsafe extern "C" fn AttoDRY_Interface_getSampleSpaceValve(status: *mut c_int) -> c_int {
    read_i32("getSampleSpaceValve", status)
}

pub unsafe extern "C" fn AttoDRY_Interface_getValve2(status: *mut c_int) -> c_int {
    read_i32("getValve2", status)
}

pub unsafe extern "C" fn AttoDRY_Interface_toggleValveSampleSpace() -> c_int {
    command("toggleValveSampleSpace")
}

pub unsafe extern "C" fn AttoDRY_Interface_togglePump800Valve() -> c_int {
    command("togglePump800Valve")
}

pub unsafe extern "C" fn AttoDRY_Interface_toggleValveBreakVac() -> c_int {
    command("toggleValveBreakVac")
}

pub unsafe extern "C" fn AttoDRY_Interface_toggleHelium800Valve() -> c_int {
    command("toggleHelium800Valve")
}

pub unsafe extern "C" fn AttoDRY_Interface_getCryostatInPressure(pressure: *mut c_float) -> c_int {
    read_f32("getCryostatInPressure", pressure)
}

pub unsafe extern "C" fn AttoDRY_Interface_getCryostatOutPressure(pressure: *mut c_float) -> c_int {
    read_f32("getCryostatOutPressure", pressure)
}

pub unsafe extern "C" fn AttoDRY_Interface_getDumpPressure(pressure: *mut c_float) -> c_int {
    read_f32("getDumpPressure", pressure)
}

pub unsafe extern "C" fn AttoDRY_Interface_getPressure1(pressure: *mut c_float) -> c_int {
    read_f32("getPressure1", pressure)
}

pub unsafe extern "C" fn AttoDRY_Interface_getPressure2(pressure: *mut c_float) -> c_int {
    read_f32("getPressure2", pressure)
}

pub unsafe extern "C" fn AttoDRY_Interface_togglePump() -> c_int {
    command("togglePump")
}

pub unsafe extern "C" fn AttoDRY_Interface_GetTurbopumpFrequ800(frequency: *mut c_ushort) -> c_int {
    read_u16("GetTurbopumpFrequ800", frequency)
}

pub unsafe extern "C" fn AttoDRY_Interface_getReservoirHeaterPower(power: *mut c_float) -> c_int {
    read_f32("getReservoirHeaterPower", power)
}

// ---------------------------------------------------------------------------
// Sample exchange and system control
// ---------------------------------------------------------------------------

pub unsafe extern "C" fn AttoDRY_Interface_startSampleExchange() -> c_int {
    command("startSampleExchange")
}

pub unsafe extern "C" fn AttoDRY_Interface_toggleStartUpShutdown() -> c_int {
    command("toggleStartUpShutdown")
}

// ---------------------------------------------------------------------------
// Status, events, and logging
// ---------------------------------------------------------------------------

pub unsafe extern "C" fn AttoDRY_Interface_getSystemStatus(status: *mut c_int) -> c_int {
    read_i32("getSystemStatus", status)
}

pub unsafe extern "C" fn AttoDRY_Interface_getErrorCount(count: *mut c_int) -> c_int {
    queue_count("getErrorCount", count, false)
}

pub unsafe extern "C" fn AttoDRY_Interface_getError(buffer: *mut c_char, length: c_int) -> c_int {
    queue_pop("getError", buffer, length, false)
}

pub unsafe extern "C" fn AttoDRY_Interface_getWarningCount(count: *mut c_int) -> c_int {
    queue_count("getWarningCount", count, true)
}

pub unsafe extern "C" fn AttoDRY_Interface_getWarning(buffer: *mut c_char, length: c_int) -> c_int {
    queue_pop("getWarning", buffer, length, true)
}

pub unsafe extern "C" fn AttoDRY_Interface_getActionMessage(buffer: *mut c_char, length: c_int) -> c_int {
    read_string("getActionMessage", buffer, length)
}

pub unsafe extern "C" fn AttoDRY_Interface_getAttodryErrorStatus(status: *mut c_uchar) -> c_int {
    read_u8("getAttodryErrorStatus", status)
}

pub unsafe extern "C" fn AttoDRY_Interface_getAttodryErrorMessage(
    buffer: *mut c_char,
    length: c_int,
) -> c_int {
    read_string("getAttodryErrorMessage", buffer, length)
}

pub unsafe extern "C" fn AttoDRY_Interface_lowerError() -> c_int {
    command("lowerError")
}

pub unsafe extern "C" fn AttoDRY_Interface_startLogging(
    path: *mut c_char,
    time_selection: c_int,
    append: c_int,
) -> c_int {
    let path = capture(path);
    record(
        &mut state(),
        "startLogging",
        vec![Arg::Str(path), Arg::I32(time_selection), Arg::I32(append)],
    )
}

pub unsafe extern "C" fn AttoDRY_Interface_stopLogging() -> c_int {
    command("stopLogging")
}

pub unsafe extern "C" fn LVDLLStatus(
    err_str: *mut c_char,
    err_str_len: c_int,
    module: *mut *mut c_void,
) -> c_int {
    let _ = module;
    read_string("LVDLLStatus", err_str, err_str_len)
}

// ---------------------------------------------------------------------------
// Calibration curve transfers
// ---------------------------------------------------------------------------

pub unsafe extern "C" fn AttoDRY_Interface_downloadSampleTemperatureSensorCalibrationCurve(
    path: *mut c_char,
) -> c_int {
    transfer_path("downloadSampleTemperatureSensorCalibrationCurve", path)
}

pub unsafe extern "C" fn AttoDRY_Interface_downloadTemperatureSensorCalibrationCurve(
    user_curve_number: c_uchar,
    path: *mut c_char,
) -> c_int {
    transfer_curve(
        "downloadTemperatureSensorCalibrationCurve",
        user_curve_number,
        path,
    )
}

pub unsafe extern "C" fn AttoDRY_Interface_uploadSampleTemperatureCalibrationCurve(
    path: *mut c_char,
) -> c_int {
    transfer_path("uploadSampleTemperatureCalibrationCurve", path)
}

pub unsafe extern "C" fn AttoDRY_Interface_uploadTemperatureCalibrationCurve(
    curve_number: c_uchar,
    path: *mut c_char,
) -> c_int {
    transfer_curve("uploadTemperatureCalibrationCurve", curve_number, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::ffi::CString;

    #[test]
    #[serial]
    fn scalar_cell_roundtrip() {
        reset();
        set_f32("getVtiTemperature", 4.2);
        let mut value: c_float = 0.0;
        let code = unsafe { AttoDRY_Interface_getVtiTemperature(&mut value) };
        assert_eq!(code, 0);
        assert_eq!(value, 4.2);
    }

    #[test]
    #[serial]
    fn return_code_override_skips_write() {
        reset();
        set_f32("getVtiTemperature", 4.2);
        set_return_code("getVtiTemperature", -7);
        let mut value: c_float = 1.0;
        let code = unsafe { AttoDRY_Interface_getVtiTemperature(&mut value) };
        assert_eq!(code, -7);
        assert_eq!(value, 1.0);
    }

    #[test]
    #[serial]
    fn error_queue_pops_oldest_first() {
        reset();
        push_error("first");
        push_error("second");

        let mut count: c_int = -1;
        assert_eq!(unsafe { AttoDRY_Interface_getErrorCount(&mut count) }, 0);
        assert_eq!(count, 2);

        let mut buffer = [0 as c_char; 256];
        assert_eq!(
            unsafe { AttoDRY_Interface_getError(buffer.as_mut_ptr(), buffer.len() as c_int) },
            0
        );
        let text = unsafe { CStr::from_ptr(buffer.as_ptr()) }.to_string_lossy();
        assert_eq!(text, "first");

        assert_eq!(unsafe { AttoDRY_Interface_getErrorCount(&mut count) }, 0);
        assert_eq!(count, 1);
    }

    #[test]
    #[serial]
    fn string_fill_truncates_and_terminates() {
        reset();
        set_string("getActionMessage", "Cooling down the sample space");
        let mut buffer = [0x55 as c_char; 8];
        let code = unsafe {
            AttoDRY_Interface_getActionMessage(buffer.as_mut_ptr(), buffer.len() as c_int)
        };
        assert_eq!(code, 0);
        let text = unsafe { CStr::from_ptr(buffer.as_ptr()) }.to_string_lossy();
        assert_eq!(text, "Cooling"); // 7 bytes + terminator
    }

    #[test]
    #[serial]
    fn call_log_records_arguments() {
        reset();
        let port = CString::new("COM3").unwrap();
        unsafe {
            AttoDRY_Interface_begin(1);
            AttoDRY_Interface_Connect(port.as_ptr() as *mut c_char);
            AttoDRY_Interface_setUserTemperature(4.0);
        }
        let calls = take_calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0].function, "begin");
        assert_eq!(calls[0].args, vec![Arg::U16(1)]);
        assert_eq!(calls[1].args, vec![Arg::Str("COM3".into())]);
        assert_eq!(calls[2].function, "setUserTemperature");
        assert_eq!(calls[2].args, vec![Arg::F32(4.0)]);
    }

    #[test]
    fn device_selectors_match_vendor_header() {
        assert_eq!(AttoDRY_Interface_Device_attoDRY1100, 0);
        assert_eq!(AttoDRY_Interface_Device_attoDRY2100, 1);
        assert_eq!(AttoDRY_Interface_Device_attoDRY800, 2);
        assert_eq!(Enum__1Second, 0);
        assert_eq!(Enum__5Minutes, 4);
    }

    #[test]
    #[serial]
    fn initialised_after_configured_polls() {
        reset();
        set_initialised_after(3);
        let mut status: c_int = 0;
        for expected in [0, 0, 1] {
            unsafe { AttoDRY_Interface_isDeviceInitialised(&mut status) };
            assert_eq!(status, expected);
        }
    }
}
