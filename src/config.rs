use std::env;

use lazy_static::lazy_static;

use crate::log::LogLevel;

/// names the minimum [`LogLevel`] written by the process wide logger
pub const LOG_LEVEL_VAR: &str = "RANGEKIT_LOG";

/// disables ansi color when set to any value, see <https://no-color.org>
pub const NO_COLOR_VAR: &str = "NO_COLOR";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// use ansi color for log output
    pub use_ansi_color: bool,

    /// messages below this level are dropped
    pub minimum_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            use_ansi_color: true,
            minimum_level: LogLevel::Warn,
        }
    }
}

lazy_static! {
    /// configuration read once from the environment on first use
    pub static ref CONFIG: Config = Config::from_env();
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var(LOG_LEVEL_VAR).ok().as_deref(),
            env::var_os(NO_COLOR_VAR).is_some(),
        )
    }

    /// build a config from raw variable values, unknown levels fall back to the default
    pub fn from_vars(level: Option<&str>, no_color: bool) -> Self {
        let default = Self::default();

        Self {
            use_ansi_color: default.use_ansi_color && !no_color,
            minimum_level: level
                .and_then(|level| level.parse().ok())
                .unwrap_or(default.minimum_level),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{config::Config, log::LogLevel};

    #[test]
    fn defaults_without_vars() {
        assert_eq!(Config::from_vars(None, false), Config::default());
    }

    #[test]
    fn reads_level_and_color() {
        let config = Config::from_vars(Some("verbose"), true);

        assert!(config.minimum_level == LogLevel::Verbose);
        assert!(!config.use_ansi_color);
    }

    #[test]
    fn unknown_level_keeps_default() {
        let config = Config::from_vars(Some("everything"), false);
        assert!(config.minimum_level == Config::default().minimum_level);
    }
}
