use crate::PersonProfile;
use crate::error::TrackerError;

pub const WEIGHT_ENV: &str = "STEP_TRACKER_WEIGHT_KG";
pub const HEIGHT_ENV: &str = "STEP_TRACKER_HEIGHT";

/// Person profile defaults read from the environment. Values are kept raw
/// and only parsed when no explicit override replaces them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    pub weight: Option<String>,
    pub height: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function instead of the process environment.
    pub fn from_env_with<F>(mut get: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        Self {
            weight: get(WEIGHT_ENV),
            height: get(HEIGHT_ENV),
        }
    }

    /// Fill gaps from `self` with explicit overrides taking precedence.
    /// Positivity is left to the calculator's validation.
    pub fn profile(
        &self,
        weight: Option<f64>,
        height: Option<f64>,
    ) -> Result<PersonProfile, TrackerError> {
        let weight = resolve(weight, self.weight.as_deref(), WEIGHT_ENV, "weight")?;
        let height = resolve(height, self.height.as_deref(), HEIGHT_ENV, "height")?;
        Ok(PersonProfile::new(weight, height))
    }
}

fn resolve(
    explicit: Option<f64>,
    env_value: Option<&str>,
    key: &str,
    what: &str,
) -> Result<f64, TrackerError> {
    if let Some(v) = explicit {
        return Ok(v);
    }
    let raw = env_value.ok_or_else(|| TrackerError::Config(format!("{what} missing (set {key})")))?;
    raw.trim()
        .parse()
        .map_err(|_| TrackerError::Config(format!("{key} is not a number: {raw:?}")))
}
