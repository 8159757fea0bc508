use crate::core::flight::FlightLimits;
use crate::input::control::ChannelConfig;
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use thiserror::Error;

pub const CONTROL_ADDR_VAR: &str = "FLY_CONTROL_ADDR";
pub const TICK_HZ_VAR: &str = "FLY_TICK_HZ";
pub const MAX_FRAMES_VAR: &str = "FLY_MAX_FRAMES";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a valid {expected}")]
    Invalid {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Everything the host binary needs to run: where to listen, how to fly, how long.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HostConfig {
    pub channel: ChannelConfig,
    pub limits: FlightLimits,
    /// Stop after this many simulation ticks. `None` runs until the process is killed.
    pub max_frames: Option<u64>,
}

impl HostConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from defaults, overridden by whatever `lookup` returns.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Self::default();

        let bind_addr = parse_var::<SocketAddr, _>(&lookup, CONTROL_ADDR_VAR, "socket address")?;
        if let Some(addr) = bind_addr {
            config.channel.bind_addr = addr;
        }
        if let Some(tick_hz) = parse_var::<u32, _>(&lookup, TICK_HZ_VAR, "tick rate")? {
            config.limits.tick_hz = tick_hz;
            // the integrator is only stable for ticks no longer than max_step_secs
            if !config.limits.tick_is_stable() {
                return Err(ConfigError::Invalid {
                    var: TICK_HZ_VAR,
                    value: tick_hz.to_string(),
                    expected: "tick rate (too slow for a stable step)",
                });
            }
        }
        config.max_frames = parse_var::<u64, _>(&lookup, MAX_FRAMES_VAR, "frame count")?;

        Ok(config)
    }
}

fn parse_var<T, F>(
    lookup: &F,
    var: &'static str,
    expected: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&'static str) -> Option<String>,
{
    let Some(value) = lookup(var) else {
        return Ok(None);
    };

    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::Invalid {
            var,
            value,
            expected,
        })
}
