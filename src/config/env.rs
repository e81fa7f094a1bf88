//! Environment variable configuration
//!
//! Provides environment variable overrides for CLI defaults.

use std::env;

use crate::models::StressError;

/// Environment variable prefix
const ENV_PREFIX: &str = "STRESS";

/// Configuration overrides read from the environment.
#[derive(Clone, Debug, Default)]
pub struct EnvConfig {
    /// Run count from STRESS_RUNS
    pub runs: Option<usize>,
    /// Parallelism from STRESS_PARALLEL
    pub parallel: Option<usize>,
    /// Output format from STRESS_FORMAT
    pub format: Option<String>,
    /// Drain policy from STRESS_DRAIN
    pub drain: Option<bool>,
    /// Progress bar suppression from STRESS_NO_PROGRESS
    pub no_progress: Option<bool>,
    /// Verbose logging from STRESS_VERBOSE
    pub verbose: Option<bool>,
}

impl EnvConfig {
    /// Load overrides from the environment. A set-but-unparsable numeric
    /// value is an error rather than a silent fallback to the default.
    pub fn load() -> Result<Self, StressError> {
        Ok(Self {
            runs: get_env_parse("RUNS")?,
            parallel: get_env_parse("PARALLEL")?,
            format: get_env("FORMAT"),
            drain: get_env_bool("DRAIN"),
            no_progress: get_env_bool("NO_PROGRESS"),
            verbose: get_env_bool("VERBOSE"),
        })
    }

    /// Check if any override is set.
    pub fn has_any(&self) -> bool {
        self.runs.is_some()
            || self.parallel.is_some()
            || self.format.is_some()
            || self.drain.is_some()
            || self.no_progress.is_some()
            || self.verbose.is_some()
    }
}

/// Get environment variable with prefix
fn get_env(name: &str) -> Option<String> {
    env::var(format!("{ENV_PREFIX}_{name}")).ok()
}

/// Get environment variable and parse to type
fn get_env_parse<T: std::str::FromStr>(name: &str) -> Result<Option<T>, StressError> {
    match get_env(name) {
        None => Ok(None),
        Some(raw) => match raw.parse() {
            Ok(value) => Ok(Some(value)),
            Err(_) => Err(StressError::InvalidEnvValue {
                var: format!("{ENV_PREFIX}_{name}"),
                value: raw,
            }),
        },
    }
}

/// Get environment variable as boolean
fn get_env_bool(name: &str) -> Option<bool> {
    get_env(name).map(|v| {
        matches!(
            v.to_lowercase().as_str(),
            "1" | "true" | "yes" | "on" | "enabled"
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric_override() {
        env::set_var("STRESS_PROBE_RUNS", "42");
        let parsed: Option<usize> = get_env_parse("PROBE_RUNS").unwrap();
        assert_eq!(parsed, Some(42));
        env::remove_var("STRESS_PROBE_RUNS");
    }

    #[test]
    fn test_invalid_numeric_is_rejected() {
        env::set_var("STRESS_PROBE_BAD", "lots");
        let result: Result<Option<usize>, _> = get_env_parse("PROBE_BAD");
        assert!(matches!(
            result,
            Err(StressError::InvalidEnvValue { .. })
        ));
        env::remove_var("STRESS_PROBE_BAD");
    }

    #[test]
    fn test_bool_values() {
        env::set_var("STRESS_PROBE_FLAG", "yes");
        assert_eq!(get_env_bool("PROBE_FLAG"), Some(true));

        env::set_var("STRESS_PROBE_FLAG", "0");
        assert_eq!(get_env_bool("PROBE_FLAG"), Some(false));

        env::remove_var("STRESS_PROBE_FLAG");
        assert_eq!(get_env_bool("PROBE_FLAG"), None);
    }

    #[test]
    fn test_unset_is_none() {
        let parsed: Option<usize> = get_env_parse("PROBE_UNSET").unwrap();
        assert_eq!(parsed, None);
        assert!(!EnvConfig::default().has_any());
    }
}
