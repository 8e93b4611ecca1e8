//! Session script: bring the cryostat to a temperature set-point.
//!
//! Connects, waits for the controller to initialise, reads the current
//! temperatures, writes the user set-point, hands control to the cryostat,
//! and re-reads after a short settling period. Optionally writes a field
//! set-point to both coils of a split-coil magnet.
//!
//! ```bash
//! cargo run --example set_temperature -- --port COM3 --setpoint 4.0
//! ```

use anyhow::Result;
use attodry::{AttodryConfig, AttodryInterface, FieldAxis};
use clap::Parser;
use std::thread;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(about = "Set the attoDRY user temperature and enable temperature control")]
struct Args {
    /// COM port the controller is attached to
    #[arg(long, default_value = "COM3")]
    port: String,

    /// Temperature set-point in Kelvin
    #[arg(long, default_value_t = 4.0)]
    setpoint: f32,

    /// Optional field set-point in Tesla, applied to the X and Z coils
    #[arg(long)]
    field: Option<f32>,
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
    dry.connect()?;
    dry.wait_until_initialised()?;
    println!("Connected and initialised");

    println!("VTI temperature:    {} K", dry.vti_temperature()?);
    println!("User set-point:     {} K", dry.user_temperature()?);
    println!("Sample temperature: {} K", dry.sample_temperature()?);

    dry.set_user_temperature(args.setpoint)?;
    dry.toggle_full_temperature_control()?;

    // Give the controller a moment to pick up the new set-point.
    thread::sleep(Duration::from_secs(5));

    println!("User set-point:     {} K", dry.user_temperature()?);
    println!("Sample temperature: {} K", dry.sample_temperature()?);

    if let Some(field) = args.field {
        dry.set_user_magnetic_field_axis(FieldAxis::X, field)?;
        dry.set_user_magnetic_field_axis(FieldAxis::Z, field)?;
        println!(
            "Field set-point X:  {} T",
            dry.magnetic_field_setpoint(FieldAxis::X)?
        );
        println!(
            "Field set-point Z:  {} T",
            dry.magnetic_field_setpoint(FieldAxis::Z)?
        );
    }

    dry.disconnect()?;
    dry.end()?;
    println!("Script done");
    Ok(())
}
