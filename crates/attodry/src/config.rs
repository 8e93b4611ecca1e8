//! Driver configuration.
//!
//! The vendor bindings kept the DLL path and default COM port as
//! module-level globals; here everything a session needs is an explicit
//! [`AttodryConfig`] handed to the interface constructor. The library
//! itself is resolved at build time through the `attodry-sdk` feature of
//! `attodry-sys` (`ATTODRY_SDK_DIR`).

use crate::error::Result;
use crate::types::Device;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Configuration for one interface session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AttodryConfig {
    /// Device family the interface server should load support for.
    pub device: Device,

    /// COM port the controller is attached to (e.g. "COM3").
    pub com_port: String,

    /// Delay between initialisation polls in
    /// [`wait_until_initialised`](crate::AttodryInterface::wait_until_initialised).
    #[serde(with = "humantime_serde")]
    pub init_poll_interval: Duration,

    /// Upper bound on the whole initialisation wait. The controller needs a
    /// few seconds after connecting before it starts answering; a minute is
    /// generous.
    #[serde(with = "humantime_serde")]
    pub init_timeout: Duration,
}

impl Default for AttodryConfig {
    fn default() -> Self {
        Self {
            device: Device::AttoDry2100,
            com_port: "COM3".to_owned(),
            init_poll_interval: Duration::from_millis(250),
            init_timeout: Duration::from_secs(60),
        }
    }
}

impl AttodryConfig {
    /// Load configuration from a TOML file, with `ATTODRY_`-prefixed
    /// environment variables taking precedence over file values.
    ///
    /// Missing keys fall back to the defaults, so a partial file such as
    /// `com_port = "COM6"` is enough.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let config = Figment::from(Serialized::defaults(AttodryConfig::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("ATTODRY_"))
            .extract()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_vendor_examples() {
        let config = AttodryConfig::default();
        assert_eq!(config.device, Device::AttoDry2100);
        assert_eq!(config.com_port, "COM3");
        assert_eq!(config.init_poll_interval, Duration::from_millis(250));
        assert_eq!(config.init_timeout, Duration::from_secs(60));
    }

    #[test]
    fn partial_toml_overrides_defaults() {
        let config: AttodryConfig =
            Figment::from(Serialized::defaults(AttodryConfig::default()))
                .merge(Toml::string(
                    r#"
                    device = "AttoDry800"
                    com_port = "COM6"
                    init_timeout = "90s"
                    "#,
                ))
                .extract()
                .unwrap();
        assert_eq!(config.device, Device::AttoDry800);
        assert_eq!(config.com_port, "COM6");
        assert_eq!(config.init_timeout, Duration::from_secs(90));
        // untouched key keeps its default
        assert_eq!(config.init_poll_interval, Duration::from_millis(250));
    }
}
