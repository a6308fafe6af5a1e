//! Runtime settings: environment overrides plus command-line flags.
//!
//! Environment variables:
//! - `STRMATCH_CASE_SENSITIVE`: compare case-sensitively (default: false)
//! - `STRMATCH_PARALLEL_THRESHOLD`: candidate count for parallel ranking (default: 1000)
//! - `RUST_LOG`: logging filter (default: from `--log-level`)

use strmatch_core::{MatchingOptions, Ranker, RankerConfig};

use crate::error::{Error, Result};

pub const ENV_CASE_SENSITIVE: &str = "STRMATCH_CASE_SENSITIVE";
pub const ENV_PARALLEL_THRESHOLD: &str = "STRMATCH_PARALLEL_THRESHOLD";

#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub case_sensitive: bool,
    pub ranker: RankerConfig,
}

impl Settings {
    /// Read overrides from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through `lookup`, so tests need not touch the real environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(raw) = lookup(ENV_CASE_SENSITIVE) {
            settings.case_sensitive = parse_bool(ENV_CASE_SENSITIVE, &raw)?;
        }

        if let Some(raw) = lookup(ENV_PARALLEL_THRESHOLD) {
            settings.ranker.parallel_threshold = raw.trim().parse().map_err(|_| {
                Error::Config(format!(
                    "{} must be a non-negative integer, got '{}'",
                    ENV_PARALLEL_THRESHOLD, raw
                ))
            })?;
        }

        Ok(settings)
    }

    /// `--case-sensitive` can only turn sensitivity on
    pub fn with_case_sensitive_flag(mut self, flag: bool) -> Self {
        self.case_sensitive |= flag;
        self
    }

    pub fn options(&self) -> MatchingOptions {
        MatchingOptions::new().with_case_sensitive(self.case_sensitive)
    }

    pub fn ranker(&self) -> Ranker {
        Ranker::with_config(Some(&self.options()), self.ranker.clone())
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(Error::Config(format!(
            "{} must be a boolean, got '{}'",
            key, raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(lookup(&[])).unwrap();
        assert!(!settings.case_sensitive);
        assert_eq!(settings.ranker.parallel_threshold, 1000);
    }

    #[test]
    fn test_env_overrides() {
        let settings = Settings::from_lookup(lookup(&[
            (ENV_CASE_SENSITIVE, "TRUE"),
            (ENV_PARALLEL_THRESHOLD, " 64 "),
        ]))
        .unwrap();
        assert!(settings.case_sensitive);
        assert_eq!(settings.ranker.parallel_threshold, 64);
        assert!(settings.ranker().comparator().is_case_sensitive());
    }

    #[test]
    fn test_invalid_values() {
        let err = Settings::from_lookup(lookup(&[(ENV_CASE_SENSITIVE, "maybe")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = Settings::from_lookup(lookup(&[(ENV_PARALLEL_THRESHOLD, "-1")])).unwrap_err();
        assert!(err.to_string().contains(ENV_PARALLEL_THRESHOLD));
    }

    #[test]
    fn test_flag_only_enables() {
        let settings = Settings::default().with_case_sensitive_flag(true);
        assert!(settings.case_sensitive);

        let settings = settings.with_case_sensitive_flag(false);
        assert!(settings.case_sensitive);
    }
}
