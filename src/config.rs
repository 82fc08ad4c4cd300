use crate::core::DEFAULT_DELAY;
use crate::error::{PlannerError, Result};
use std::time::Duration;

pub const ENV_CITY: &str = "CHINATRIP_CITY";
pub const ENV_DAYS: &str = "CHINATRIP_DAYS";
pub const ENV_INTERESTS: &str = "CHINATRIP_INTERESTS";
pub const ENV_DELAY_MS: &str = "CHINATRIP_DELAY_MS";

/// Trip length bounds offered to users
pub const MIN_DAYS: u32 = 1;
pub const MAX_DAYS: u32 = 7;

/// Defaults for a planning session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    pub city: String,
    pub days: u32,
    pub interests: Vec<String>,
    pub delay: Duration,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            city: "Shanghai".to_string(),
            days: 3,
            interests: vec!["Food".to_string()],
            delay: DEFAULT_DELAY,
        }
    }
}

impl PlannerConfig {
    /// Load from the process environment (after `.env`, if present).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(city) = lookup(ENV_CITY) {
            let city = city.trim();
            if city.is_empty() {
                return Err(PlannerError::Config(format!("{} must not be empty", ENV_CITY)));
            }
            config.city = city.to_string();
        }

        if let Some(days) = lookup(ENV_DAYS) {
            let days: u32 = days.trim().parse().map_err(|_| {
                PlannerError::Config(format!("{} must be a whole number, got {:?}", ENV_DAYS, days))
            })?;
            config.days = validate_days(days).map_err(|err| match err {
                PlannerError::InvalidInput(message) => {
                    PlannerError::Config(format!("{}: {}", ENV_DAYS, message))
                }
                other => other,
            })?;
        }

        if let Some(raw) = lookup(ENV_INTERESTS) {
            let interests = normalize_interests(raw.split(','));
            if interests.is_empty() {
                return Err(PlannerError::Config(format!(
                    "{} must name at least one interest",
                    ENV_INTERESTS
                )));
            }
            config.interests = interests;
        }

        if let Some(delay) = lookup(ENV_DELAY_MS) {
            let millis: u64 = delay.trim().parse().map_err(|_| {
                PlannerError::Config(format!(
                    "{} must be milliseconds, got {:?}",
                    ENV_DELAY_MS, delay
                ))
            })?;
            config.delay = Duration::from_millis(millis);
        }

        Ok(config)
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    pub fn with_interests(mut self, interests: Vec<String>) -> Self {
        self.interests = interests;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Check a trip length against the offered range
pub fn validate_days(days: u32) -> Result<u32> {
    if (MIN_DAYS..=MAX_DAYS).contains(&days) {
        Ok(days)
    } else {
        Err(PlannerError::InvalidInput(format!(
            "trip length must be between {} and {} days, got {}",
            MIN_DAYS, MAX_DAYS, days
        )))
    }
}

/// Trim, drop blanks and de-duplicate interest tags, keeping first occurrence.
pub fn normalize_interests<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut interests: Vec<String> = Vec::new();
    for tag in raw {
        let tag = tag.as_ref().trim();
        if !tag.is_empty() && !interests.iter().any(|existing| existing == tag) {
            interests.push(tag.to_string());
        }
    }
    interests
}
