//! Selector configuration parsed from environment variables.

use std::env::VarError;

use crate::consts::DEFAULT_TOLERANCE_PX;

pub const TOLERANCE_ENV: &str = "MARQUEE_TOLERANCE_PX";
pub const DEBUG_ENV: &str = "MARQUEE_DEBUG";

/// Error returned by [`SelectorConfig::from_env`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid {var}={value:?}: {reason}")]
    Invalid { var: &'static str, value: String, reason: &'static str },
}

/// Settings injected into a [`crate::universal::MarqueeSelector`] once, at
/// construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectorConfig {
    /// Screen-pixel size below which an item counts as degenerate in window mode.
    pub tolerance_px: f64,
    /// Attach a [`crate::universal::DebugInfo`] to every result.
    pub collect_debug: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self { tolerance_px: DEFAULT_TOLERANCE_PX, collect_debug: false }
    }
}

impl SelectorConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `MARQUEE_TOLERANCE_PX`: non-negative number, default 5
    /// - `MARQUEE_DEBUG`: `1`/`true`/`yes`/`on` or `0`/`false`/`no`/`off`, default off
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let tolerance = env_value(TOLERANCE_ENV, std::env::var(TOLERANCE_ENV))?;
        let debug = env_value(DEBUG_ENV, std::env::var(DEBUG_ENV))?;
        Self::from_lookup(|key| match key {
            TOLERANCE_ENV => tolerance.clone(),
            DEBUG_ENV => debug.clone(),
            _ => None,
        })
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a present value is unparseable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(raw) = lookup(TOLERANCE_ENV) {
            config.tolerance_px = parse_tolerance(&raw)?;
        }
        if let Some(raw) = lookup(DEBUG_ENV) {
            config.collect_debug = parse_flag(DEBUG_ENV, &raw)?;
        }
        Ok(config)
    }

    #[must_use]
    pub fn with_tolerance(mut self, tolerance_px: f64) -> Self {
        self.tolerance_px = tolerance_px;
        self
    }

    #[must_use]
    pub fn with_debug(mut self, collect_debug: bool) -> Self {
        self.collect_debug = collect_debug;
        self
    }
}

fn parse_tolerance(raw: &str) -> Result<f64, ConfigError> {
    let invalid = |reason| ConfigError::Invalid { var: TOLERANCE_ENV, value: raw.to_owned(), reason };
    let value = raw.trim().parse::<f64>().map_err(|_| invalid("not a number"))?;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid("must be a finite, non-negative number"));
    }
    Ok(value)
}

fn env_value(var: &'static str, result: Result<String, VarError>) -> Result<Option<String>, ConfigError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => {
            Err(ConfigError::Invalid { var, value: raw.to_string_lossy().into_owned(), reason: "not valid UTF-8" })
        }
    }
}

fn parse_flag(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid { var, value: raw.to_owned(), reason: "expected a boolean flag" }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
