//! Property-test run profile parsing for CI and local overrides.
//!
//! Suites read case counts and forking from one place so a CI job can scale
//! every property suite with a single variable.

use std::env;

use thiserror::Error;

/// Environment variable controlling proptest case counts.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const KUMO_PBT_FORK_ENV_KEY: &str = "KUMO_PBT_FORK";

/// Reasons an override is ignored.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum OverrideError {
    /// The case count is not an unsigned integer.
    #[error("not a case count: {0}")]
    NotANumber(String),
    /// A case count of zero would skip the property entirely.
    #[error("cases must be > 0")]
    ZeroCases,
    /// The fork flag is not a recognised boolean spelling.
    #[error("expected one of: true/false/1/0/yes/no/on/off")]
    NotABool,
}

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads a profile from the process environment with the given defaults.
    ///
    /// Invalid overrides are logged and replaced by the default.
    ///
    /// # Examples
    ///
    /// ```
    /// use kumo_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self::from_lookup(default_cases, default_fork, |key| env::var(key).ok())
    }

    /// Loads a profile from an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup(
        default_cases: u32,
        default_fork: bool,
        lookup: impl Fn(&'static str) -> Option<String>,
    ) -> Self {
        Self {
            cases: resolve(PROGTEST_CASES_ENV_KEY, default_cases, &lookup, parse_cases),
            fork: resolve(KUMO_PBT_FORK_ENV_KEY, default_fork, &lookup, parse_bool),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    #[rustfmt::skip]
    pub fn cases(&self) -> u32 { self.cases }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    #[rustfmt::skip]
    pub fn fork(&self) -> bool { self.fork }
}

fn resolve<T: Copy>(
    key: &'static str,
    default: T,
    lookup: &impl Fn(&'static str) -> Option<String>,
    parser: fn(&str) -> Result<T, OverrideError>,
) -> T {
    let Some(raw) = lookup(key) else {
        return default;
    };
    parser(&raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason = %reason,
            "invalid property-test profile override; using default",
        );
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, OverrideError> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(OverrideError::ZeroCases),
        Ok(cases) => Ok(cases),
        Err(error) => Err(OverrideError::NotANumber(error.to_string())),
    }
}

fn parse_bool(raw: &str) -> Result<bool, OverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::NotABool),
    }
}
