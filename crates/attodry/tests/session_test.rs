//! Session lifecycle tests: the connection state machine, the bounded
//! initialisation poll, and the end-to-end call ordering of a full run.
//!
//! Stub state is process-global, so every test is `#[serial]` and starts
//! from `stub::reset()`.

#![cfg(not(feature = "hardware"))]

use attodry::{AttodryConfig, AttodryError, AttodryInterface, ConnectionState};
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

#[test]
#[serial]
fn full_session_preserves_call_order() {
    stub::reset();
    stub::set_initialised_after(3);
    stub::set_f32("getVtiTemperature", 4.2);

    let mut dry = AttodryInterface::new(test_config());
    dry.begin().unwrap();
    dry.connect().unwrap();
    dry.wait_until_initialised().unwrap();

    assert_eq!(dry.vti_temperature().unwrap(), 4.2);
    dry.set_temperature_setpoint(4.0).unwrap();

    dry.disconnect().unwrap();
    dry.end().unwrap();
    assert_eq!(dry.state(), ConnectionState::Ended);

    let calls = stub::take_calls();
    let names: Vec<_> = calls.iter().map(|c| c.function).collect();
    assert_eq!(
        names,
        vec![
            "begin",
            "Connect",
            "isDeviceInitialised",
            "isDeviceInitialised",
            "isDeviceInitialised",
            "getVtiTemperature",
            "setTemperatureSetpoint",
            "Disconnect",
            "end"
        ]
    );
    // AttoDry2100 selector and the configured port go through verbatim.
    assert_eq!(calls[0].args, vec![Arg::U16(1)]);
    assert_eq!(calls[1].args, vec![Arg::Str("COM3".into())]);
    assert_eq!(calls[6].args, vec![Arg::F32(4.0)]);
}

#[test]
#[serial]
fn operations_are_rejected_before_begin() {
    stub::reset();
    let mut dry = AttodryInterface::new(test_config());

    match dry.connect() {
        Err(AttodryError::OutOfOrder { operation, state }) => {
            assert_eq!(operation, "Connect");
            assert_eq!(state, ConnectionState::Unstarted);
        }
        other => panic!("expected OutOfOrder, got {:?}", other),
    }
    assert!(dry.vti_temperature().is_err());
    assert!(dry.end().is_err());

    // Nothing reached the native layer.
    assert!(stub::take_calls().is_empty());
}

#[test]
#[serial]
fn device_operations_require_a_connection() {
    stub::reset();
    let mut dry = AttodryInterface::new(test_config());
    dry.begin().unwrap();

    assert!(matches!(
        dry.vti_temperature(),
        Err(AttodryError::OutOfOrder {
            state: ConnectionState::Started,
            ..
        })
    ));
    assert!(dry.cancel().is_err());
    assert!(dry.confirm().is_err());

    // Connection queries only need the server, not a connection.
    stub::set_i32("isDeviceConnected", 0);
    assert!(!dry.is_connected().unwrap());

    dry.end().unwrap();
}

#[test]
#[serial]
fn disconnect_is_required_before_end() {
    stub::reset();
    let mut dry = AttodryInterface::new(test_config());
    dry.begin().unwrap();
    dry.connect().unwrap();

    assert!(matches!(
        dry.end(),
        Err(AttodryError::OutOfOrder {
            operation: "end",
            state: ConnectionState::Connected,
        })
    ));

    dry.disconnect().unwrap();
    dry.end().unwrap();
}

#[test]
#[serial]
fn reconnect_after_disconnect_is_allowed() {
    stub::reset();
    let mut dry = AttodryInterface::new(test_config());
    dry.begin().unwrap();
    dry.connect().unwrap();
    dry.disconnect().unwrap();

    dry.connect().unwrap();
    assert_eq!(dry.state(), ConnectionState::Connected);

    dry.disconnect().unwrap();
    dry.end().unwrap();
}

#[test]
#[serial]
fn ended_sessions_reject_further_use() {
    stub::reset();
    let mut dry = AttodryInterface::new(test_config());
    dry.begin().unwrap();
    dry.end().unwrap();

    assert!(matches!(
        dry.vti_temperature(),
        Err(AttodryError::OutOfOrder {
            state: ConnectionState::Ended,
            ..
        })
    ));
    assert!(dry.begin().is_err());
    assert!(dry.connect().is_err());
}

#[test]
#[serial]
fn second_session_cannot_begin_while_first_holds_the_server() {
    stub::reset();
    let mut first = AttodryInterface::new(test_config());
    first.begin().unwrap();

    let mut second = AttodryInterface::new(test_config());
    assert!(matches!(
        second.begin(),
        Err(AttodryError::ServerAlreadyRunning)
    ));

    first.end().unwrap();
    second.begin().unwrap();
    second.end().unwrap();
}

#[test]
#[serial]
fn failed_begin_releases_the_server_slot() {
    stub::reset();
    stub::set_return_code("begin", 5);

    let mut dry = AttodryInterface::new(test_config());
    assert!(matches!(
        dry.begin(),
        Err(AttodryError::NativeCall {
            function: "begin",
            code: 5,
        })
    ));
    assert_eq!(dry.state(), ConnectionState::Unstarted);

    // With the native failure gone, the same session can start.
    stub::reset();
    dry.begin().unwrap();
    dry.end().unwrap();
}

#[test]
#[serial]
fn initialisation_poll_times_out_instead_of_spinning() {
    stub::reset();
    stub::set_initialised_after(u32::MAX);

    let mut dry = AttodryInterface::new(test_config());
    dry.begin().unwrap();
    dry.connect().unwrap();

    match dry.wait_until_initialised() {
        Err(AttodryError::InitTimeout { timeout }) => {
            assert_eq!(timeout, Duration::from_millis(250));
        }
        other => panic!("expected InitTimeout, got {:?}", other),
    }

    dry.disconnect().unwrap();
    dry.end().unwrap();
}

#[test]
#[serial]
fn initialisation_poll_failure_propagates() {
    stub::reset();
    stub::set_return_code("isDeviceInitialised", -9);

    let mut dry = AttodryInterface::new(test_config());
    dry.begin().unwrap();
    dry.connect().unwrap();

    assert!(matches!(
        dry.wait_until_initialised(),
        Err(AttodryError::NativeCall { code: -9, .. })
    ));

    dry.disconnect().unwrap();
    dry.end().unwrap();
}

#[test]
#[serial]
fn drop_closes_the_session_on_every_exit_path() {
    stub::reset();
    {
        let mut dry = AttodryInterface::new(test_config());
        dry.begin().unwrap();
        dry.connect().unwrap();
        // Dropped while connected.
    }

    let names: Vec<_> = stub::take_calls().into_iter().map(|c| c.function).collect();
    assert_eq!(names, vec!["begin", "Connect", "Disconnect", "end"]);

    // The server slot is free again.
    let mut next = AttodryInterface::new(test_config());
    next.begin().unwrap();
    next.end().unwrap();
}

#[test]
#[serial]
fn shutdown_is_idempotent() {
    stub::reset();
    let mut dry = AttodryInterface::new(test_config());
    dry.begin().unwrap();
    dry.connect().unwrap();

    dry.shutdown().unwrap();
    assert_eq!(dry.state(), ConnectionState::Ended);
    dry.shutdown().unwrap();

    let names: Vec<_> = stub::take_calls().into_iter().map(|c| c.function).collect();
    assert_eq!(names, vec!["begin", "Connect", "Disconnect", "end"]);
}
