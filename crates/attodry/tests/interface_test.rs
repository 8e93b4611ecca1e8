//! Contract tests for the call marshalling layer.
//!
//! These run against the scriptable stub implementation in `attodry-sys`
//! (the default feature set): the stub seeds out-cells, overrides return
//! codes, and records every native call with its arguments, so each
//! marshalling contract can be checked without hardware.
//!
//! The stub state is process-global, so every test is `#[serial]` and
//! starts from `stub::reset()`.

#![cfg(not(feature = "hardware"))]

use attodry::{
    AttodryConfig, AttodryError, AttodryInterface, FieldAxis, LogInterval, PressureChannel,
    ValveControl, ValveSensor, ValveState,
};
use attodry_sys::stub::{self, Arg};
use serial_test::serial;
use std::time::Duration;

fn test_config() -> AttodryConfig {
    AttodryConfig {
        com_port: "COM3".to_owned(),
        init_poll_interval: Duration::from_millis(1),
        init_timeout: Duration::from_millis(250),
        ..AttodryConfig::default()
    }
}

/// Reset the stub and bring a session to the Connected state.
fn connected() -> AttodryInterface {
    stub::reset();
    let mut dry = AttodryInterface::new(test_config());
    dry.begin().unwrap();
    dry.connect().unwrap();
    dry
}

#[test]
#[serial]
fn float_getters_return_seeded_values() {
    let dry = connected();
    for value in [0.0_f32, -273.15, 4.2, f32::MIN, f32::MAX] {
        stub::set_f32("getVtiTemperature", value);
        assert_eq!(dry.vti_temperature().unwrap(), value);
    }
}

#[test]
#[serial]
fn narrow_getters_return_seeded_values() {
    let dry = connected();

    stub::set_u8("getAttodryErrorStatus", 255);
    assert_eq!(dry.controller_error_status().unwrap(), 255);

    stub::set_u16("GetTurbopumpFrequ800", u16::MAX);
    assert_eq!(dry.turbopump_frequency().unwrap(), u16::MAX);

    stub::set_i32("getMagnetStatus", -3);
    assert_eq!(dry.magnet_status().unwrap(), -3);

    stub::set_i32("isPumping", 1);
    assert!(dry.is_pumping().unwrap());
    stub::set_i32("isPumping", 0);
    assert!(!dry.is_pumping().unwrap());
}

#[test]
#[serial]
fn setters_forward_exact_values() {
    let dry = connected();
    stub::take_calls();

    dry.set_temperature_setpoint(4.0).unwrap();
    dry.set_user_temperature(1.5625).unwrap();
    dry.set_heater_range(2).unwrap();

    let calls = stub::take_calls();
    assert_eq!(calls[0].function, "setTemperatureSetpoint");
    assert_eq!(calls[0].args, vec![Arg::F32(4.0)]);
    assert_eq!(calls[1].function, "setUserTemperature");
    assert_eq!(calls[1].args, vec![Arg::F32(1.5625)]);
    assert_eq!(calls[2].function, "setHeaterRange");
    assert_eq!(calls[2].args, vec![Arg::I32(2)]);
}

#[test]
#[serial]
fn nonzero_codes_surface_as_native_call_errors() {
    let dry = connected();

    stub::set_return_code("getVtiTemperature", 259);
    match dry.vti_temperature() {
        Err(AttodryError::NativeCall { function, code }) => {
            assert_eq!(function, "getVtiTemperature");
            assert_eq!(code, 259);
        }
        other => panic!("expected NativeCall error, got {:?}", other),
    }

    // VISA-style negative codes come through unmodified.
    stub::set_return_code("getPressure2", -1073807246);
    match dry.pressure(PressureChannel::P2) {
        Err(AttodryError::NativeCall { code, .. }) => assert_eq!(code, -1073807246),
        other => panic!("expected NativeCall error, got {:?}", other),
    }
}

#[test]
#[serial]
fn calls_unchecked_in_vendor_bindings_are_checked_here() {
    let dry = connected();

    stub::set_return_code("isPersistentModeSet", 7);
    assert!(matches!(
        dry.is_persistent_mode_set(),
        Err(AttodryError::NativeCall { code: 7, .. })
    ));

    stub::set_return_code("lowerError", -3);
    assert!(matches!(
        dry.lower_error(),
        Err(AttodryError::NativeCall { code: -3, .. })
    ));
}

#[test]
#[serial]
fn string_getter_decodes_without_trailing_garbage() {
    let dry = connected();
    stub::set_string("getActionMessage", "Cooling down");
    assert_eq!(dry.action_message().unwrap(), "Cooling down");
}

#[test]
#[serial]
fn string_getter_at_capacity_does_not_overrun() {
    let dry = connected();

    // 255 bytes + terminator exactly fills the 256-byte buffer.
    let at_capacity = "a".repeat(255);
    stub::set_string("getActionMessage", &at_capacity);
    assert_eq!(dry.action_message().unwrap(), at_capacity);

    // Anything longer is truncated at the capacity, never past it.
    let over_capacity = "b".repeat(300);
    stub::set_string("getActionMessage", &over_capacity);
    assert_eq!(dry.action_message().unwrap().len(), 255);
}

#[test]
#[serial]
fn pressure_channels_dispatch_to_distinct_entry_points() {
    let dry = connected();
    stub::set_f32("getPressure1", 10.0);
    stub::set_f32("getPressure2", 1.0e-3);
    stub::take_calls();

    assert_eq!(dry.pressure(PressureChannel::P1).unwrap(), 10.0);
    assert_eq!(dry.pressure(PressureChannel::P2).unwrap(), 1.0e-3);

    let names: Vec<_> = stub::take_calls().into_iter().map(|c| c.function).collect();
    assert_eq!(names, vec!["getPressure1", "getPressure2"]);
}

#[test]
#[serial]
fn field_axes_dispatch_to_distinct_entry_points() {
    let dry = connected();
    stub::take_calls();

    dry.magnetic_field(FieldAxis::X).unwrap();
    dry.magnetic_field(FieldAxis::Z).unwrap();
    dry.set_user_magnetic_field_axis(FieldAxis::Z, 0.01).unwrap();

    let calls = stub::take_calls();
    let names: Vec<_> = calls.iter().map(|c| c.function).collect();
    assert_eq!(
        names,
        vec![
            "getMagneticFieldX",
            "getMagneticFieldZ",
            "setUserMagneticFieldZ"
        ]
    );
    assert_eq!(calls[2].args, vec![Arg::F32(0.01)]);
}

#[test]
#[serial]
fn unrecognised_selectors_fail_instead_of_noop() {
    assert!(matches!(
        PressureChannel::try_from(3),
        Err(AttodryError::InvalidArgument { .. })
    ));
    assert!(FieldAxis::try_from('Y').is_err());
    assert!(ValveSensor::try_from("Vent").is_err());
    assert!(ValveControl::try_from("Exhaust").is_err());
}

#[test]
#[serial]
fn valve_dispatch_covers_all_selectors() {
    let dry = connected();
    stub::set_i32("getHeValve", 1);
    stub::take_calls();

    assert_eq!(dry.valve_state(ValveSensor::Helium).unwrap(), ValveState::Open);
    assert_eq!(
        dry.valve_state(ValveSensor::Pump800).unwrap(),
        ValveState::Closed
    );
    dry.valve_state(ValveSensor::SampleSpace).unwrap();
    dry.valve_state(ValveSensor::Valve2).unwrap();
    dry.toggle_valve(ValveControl::SampleSpace).unwrap();
    dry.toggle_valve(ValveControl::Pump800).unwrap();
    dry.toggle_valve(ValveControl::BreakVacuum).unwrap();
    dry.toggle_valve(ValveControl::Helium800).unwrap();

    let names: Vec<_> = stub::take_calls().into_iter().map(|c| c.function).collect();
    assert_eq!(
        names,
        vec![
            "getHeValve",
            "getPump800Valve",
            "getSampleSpaceValve",
            "getValve2",
            "toggleValveSampleSpace",
            "togglePump800Valve",
            "toggleValveBreakVac",
            "toggleHelium800Valve"
        ]
    );
}

#[test]
#[serial]
fn calibration_curve_numbers_forward_unmodified() {
    let dry = connected();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("curve.crv");
    let path_text = path.to_str().unwrap().to_owned();

    for curve in [0u8, 1, 8, 255] {
        stub::take_calls();
        dry.download_calibration_curve(curve, &path).unwrap();
        dry.upload_calibration_curve(curve, &path).unwrap();

        let calls = stub::take_calls();
        assert_eq!(calls[0].function, "downloadTemperatureSensorCalibrationCurve");
        assert_eq!(
            calls[0].args,
            vec![Arg::U8(curve), Arg::Str(path_text.clone())]
        );
        assert_eq!(calls[1].function, "uploadTemperatureCalibrationCurve");
        assert_eq!(
            calls[1].args,
            vec![Arg::U8(curve), Arg::Str(path_text.clone())]
        );
    }
}

#[test]
#[serial]
fn sample_curve_transfers_forward_the_path() {
    let dry = connected();
    stub::take_calls();

    dry.download_sample_calibration_curve("sample.crv").unwrap();
    dry.upload_sample_calibration_curve("sample.crv").unwrap();

    let calls = stub::take_calls();
    assert_eq!(
        calls[0].function,
        "downloadSampleTemperatureSensorCalibrationCurve"
    );
    assert_eq!(calls[0].args, vec![Arg::Str("sample.crv".into())]);
    assert_eq!(calls[1].function, "uploadSampleTemperatureCalibrationCurve");
}

#[test]
#[serial]
fn start_logging_forwards_path_interval_and_append() {
    let dry = connected();
    stub::take_calls();

    dry.start_logging("run.log", LogInterval::OneSecond, false)
        .unwrap();
    dry.stop_logging().unwrap();
    dry.start_logging("run.log", LogInterval::FiveMinutes, true)
        .unwrap();

    let calls = stub::take_calls();
    assert_eq!(calls[0].function, "startLogging");
    assert_eq!(
        calls[0].args,
        vec![Arg::Str("run.log".into()), Arg::I32(0), Arg::I32(0)]
    );
    assert_eq!(calls[1].function, "stopLogging");
    assert_eq!(
        calls[2].args,
        vec![Arg::Str("run.log".into()), Arg::I32(4), Arg::I32(1)]
    );
}

#[test]
#[serial]
fn event_queues_drain_in_fifo_order() {
    let dry = connected();
    stub::push_error("compressor fault");
    stub::push_error("vacuum lost");
    stub::push_warning("reservoir low");

    assert_eq!(dry.error_count().unwrap(), 2);
    assert_eq!(
        dry.drain_errors().unwrap(),
        vec!["compressor fault".to_owned(), "vacuum lost".to_owned()]
    );
    assert_eq!(dry.error_count().unwrap(), 0);

    assert_eq!(dry.drain_warnings().unwrap(), vec!["reservoir low".to_owned()]);
    assert_eq!(dry.warning_count().unwrap(), 0);
}

#[test]
#[serial]
fn dll_status_is_available_in_any_state() {
    stub::reset();
    stub::set_string("LVDLLStatus", "no error");
    let dry = AttodryInterface::new(test_config());
    // No begin/connect; the runtime status query must still work.
    assert_eq!(dry.dll_status().unwrap(), "no error");
}

#[test]
#[serial]
fn nul_in_path_is_rejected_before_the_native_call() {
    let dry = connected();
    stub::take_calls();

    let result = dry.upload_sample_calibration_curve("bad\0path");
    assert!(matches!(
        result,
        Err(AttodryError::InvalidArgument { what: "path", .. })
    ));
    assert!(stub::take_calls().is_empty());
}
