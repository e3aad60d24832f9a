//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use tactics_runtime::RuntimeConfig;

/// Configuration required to bootstrap the runtime and the text shell.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Directory holding `config.toml` and `scenario.ron`.
    pub data_dir: PathBuf,
    pub tick_interval: Duration,
    pub enable_clock: bool,
    pub session_id: Option<String>,
    /// Overrides the platform log directory.
    pub log_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            tick_interval: Duration::from_secs(1),
            enable_clock: true,
            session_id: None,
            log_dir: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CHRONO_DATA_DIR` - Content directory (default: `data`)
    /// - `CHRONO_TICK_MS` - Milliseconds per countdown second (default: 1000)
    /// - `CHRONO_DISABLE_CLOCK` - Stop the countdown entirely (default: false)
    /// - `CHRONO_SESSION_ID` - Session identifier for log files (default: auto-generated)
    /// - `CHRONO_LOG_DIR` - Log directory (default: platform-specific)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = env::var_os("CHRONO_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(millis) = read_env::<u64>("CHRONO_TICK_MS") {
            config.tick_interval = Duration::from_millis(millis.max(1));
        }

        if let Some(disable) = read_env_bool("CHRONO_DISABLE_CLOCK") {
            config.enable_clock = !disable;
        }

        config.session_id = env::var("CHRONO_SESSION_ID").ok();
        config.log_dir = env::var_os("CHRONO_LOG_DIR").map(PathBuf::from);

        config
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            tick_interval: self.tick_interval,
            enable_clock: self.enable_clock,
            ..RuntimeConfig::default()
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_config_carries_clock_settings() {
        let config = ClientConfig {
            tick_interval: Duration::from_millis(250),
            enable_clock: false,
            ..ClientConfig::default()
        };

        let runtime = config.runtime_config();
        assert_eq!(runtime.tick_interval, Duration::from_millis(250));
        assert!(!runtime.enable_clock);
        assert_eq!(runtime.command_buffer_size, RuntimeConfig::default().command_buffer_size);
    }
}
