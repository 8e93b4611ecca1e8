//! Session script: a short logged run against the controller.
//!
//! Mirrors the vendor's C demo: set a user temperature, exercise the sample
//! space valve, read the PID proportional gain, log controller data for ten
//! seconds, and report the controller error state on the way out.
//!
//! ```bash
//! cargo run --example logging_session -- --port COM6 --log /tmp/attodry.log
//! ```

use anyhow::Result;
use attodry::{AttodryConfig, AttodryInterface, LogInterval, ValveControl};
use clap::Parser;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(about = "Run a short logged attoDRY session")]
struct Args {
    /// COM port the controller is attached to
    #[arg(long, default_value = "COM3")]
    port: String,

    /// File the controller log is written to
    #[arg(long, default_value = "attodry.log")]
    log: PathBuf,

    /// User temperature set-point in Kelvin (4 to 300)
    #[arg(long, default_value_t = 4.0)]
    setpoint: f32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = AttodryConfig {
        com_port: args.port,
        ..AttodryConfig::default()
    };

    let mut dry = AttodryInterface::new(config);
    dry.begin()?;
    println!("Begin");
    dry.connect()?;
    println!("Connected");
    dry.wait_until_initialised()?;
    println!("Running");

    dry.set_user_temperature(args.setpoint)?;

    // The set-point takes a couple of seconds to reach the controller and
    // come back in a status message; this read shows the old value.
    println!("User temperature: {} K", dry.user_temperature()?);

    dry.toggle_valve(ValveControl::SampleSpace)?;
    thread::sleep(Duration::from_secs(1));
    dry.toggle_valve(ValveControl::SampleSpace)?;
    thread::sleep(Duration::from_secs(1));

    println!("Proportional gain: {}", dry.proportional_gain()?);

    dry.start_logging(&args.log, LogInterval::OneSecond, false)?;
    println!("Controller error status: {}", dry.controller_error_status()?);

    // Let some data accumulate in the log file.
    thread::sleep(Duration::from_secs(10));

    println!("User temperature: {} K", dry.user_temperature()?);
    dry.stop_logging()?;

    println!(
        "Controller error message: {}",
        dry.controller_error_message()?
    );

    dry.disconnect()?;
    println!("Disconnected");
    dry.end()?;
    println!("Ended");
    Ok(())
}
