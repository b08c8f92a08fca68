//! Replay pacing configuration.

use std::time::Duration;

/// Configuration for a path replay.
#[derive(Debug, Clone)]
pub struct ReplayConfig {
    /// Pause between consecutive step events. Zero is allowed and
    /// makes the replay effectively synchronous.
    pub step_delay: Duration,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            step_delay: Duration::from_millis(50),
        }
    }
}

impl ReplayConfig {
    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }

    pub fn with_step_delay_ms(mut self, millis: u64) -> Self {
        self.step_delay = Duration::from_millis(millis);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReplayConfig::default();
        assert_eq!(config.step_delay, Duration::from_millis(50));
    }

    #[test]
    fn test_builder() {
        let config = ReplayConfig::default().with_step_delay_ms(5);
        assert_eq!(config.step_delay, Duration::from_millis(5));
    }
}
