//! Assistant flow configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Assistant flow configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantConfig {
    /// Delay before the next question is shown, in milliseconds
    #[serde(default = "default_pacing_ms")]
    pub pacing_ms: u64,

    /// Ceiling on the terminal advisory call, in seconds
    #[serde(default = "default_submit_timeout")]
    pub submit_timeout_secs: u64,
}

impl AssistantConfig {
    /// Get question pacing as Duration
    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.pacing_ms)
    }

    /// Get submit timeout as Duration
    pub fn submit_timeout(&self) -> Duration {
        Duration::from_secs(self.submit_timeout_secs)
    }

    /// Validate assistant configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.pacing_ms > 10_000 {
            return Err(ValidationError::InvalidPacing);
        }
        if self.submit_timeout_secs == 0 || self.submit_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            pacing_ms: default_pacing_ms(),
            submit_timeout_secs: default_submit_timeout(),
        }
    }
}

fn default_pacing_ms() -> u64 {
    500
}

fn default_submit_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assistant_config_defaults() {
        let config = AssistantConfig::default();
        assert_eq!(config.pacing_ms, 500);
        assert_eq!(config.submit_timeout_secs, 30);
    }

    #[test]
    fn test_durations() {
        let config = AssistantConfig {
            pacing_ms: 250,
            submit_timeout_secs: 10,
        };
        assert_eq!(config.pacing(), Duration::from_millis(250));
        assert_eq!(config.submit_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_zero_pacing_is_valid() {
        let config = AssistantConfig {
            pacing_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_excessive_pacing() {
        let config = AssistantConfig {
            pacing_ms: 60_000,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_submit_timeout() {
        let config = AssistantConfig {
            submit_timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
