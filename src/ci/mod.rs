//! # CI Environment Detection
//!
//! Provenance is generated from facts exposed by the CI vendor through the
//! process environment. To keep statement construction deterministic and
//! testable, the environment is captured once as an immutable [`Environment`]
//! value and passed explicitly into the core functions rather than read from
//! the process on demand.
//!
//! [`Vendor::detect`] classifies the executing CI system by the presence of
//! its marker variable, matching the detection used by the `ci-info` family
//! of tools: `GITHUB_ACTIONS` for GitHub Actions, `GITLAB_CI` for GitLab CI.

use std::collections::HashMap;

/// Immutable snapshot of the key/value environment a CI vendor exposes.
///
/// The snapshot is never mutated by statement generation; it is borrowed for
/// the duration of one `generate_provenance` call.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    /// Capture the current process environment.
    pub fn from_process() -> Self {
        Environment {
            vars: std::env::vars().collect(),
        }
    }

    /// Look up a variable, `None` if absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Look up a variable, degrading to the empty string if absent.
    ///
    /// Used when interpolating environment values into URIs, where a missing
    /// variable yields an empty segment rather than an error.
    pub fn var(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    /// Whether the variable is present at all (its value is irrelevant).
    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }
}

impl<K, V> FromIterator<(K, V)> for Environment
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Environment {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// The CI vendors a statement can be generated for. The set is closed: each
/// supported vendor has its own predicate schema, and anything unrecognized
/// is a hard error at generation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vendor {
    GitHubActions,
    GitLab,
    Unknown,
}

impl Vendor {
    /// Classify the executing CI system. First match wins; detection is
    /// stateless and recomputed per call.
    ///
    /// # Examples
    ///
    /// ```
    /// use provenance_cli::ci::{Environment, Vendor};
    ///
    /// let env: Environment = [("GITLAB_CI", "true")].into_iter().collect();
    /// assert_eq!(Vendor::detect(&env), Vendor::GitLab);
    /// ```
    pub fn detect(env: &Environment) -> Vendor {
        if env.contains("GITHUB_ACTIONS") {
            Vendor::GitHubActions
        } else if env.contains("GITLAB_CI") {
            Vendor::GitLab
        } else {
            Vendor::Unknown
        }
    }
}
