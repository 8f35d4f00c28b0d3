//! Scheduler configuration for the background tasks

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Policy for ticks that fall due while a run is still in flight.
///
/// Runs themselves never overlap; the policy only decides whether the
/// missed ticks are made up afterwards or dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OverlapPolicy {
    /// Missed ticks fire back-to-back once the long run finishes
    #[default]
    Queue,
    /// Missed ticks are dropped; the next run waits for a fresh tick
    Skip,
}

/// Scheduler configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SchedulerConfig {
    /// Seconds between summary collection runs
    #[serde(default = "default_collection_interval")]
    pub collection_interval_secs: u64,

    /// Seconds between alert evaluation runs
    #[serde(default = "default_evaluation_interval")]
    pub evaluation_interval_secs: u64,

    /// What to do with ticks missed during a long run
    #[serde(default)]
    pub overlap_policy: OverlapPolicy,
}

impl SchedulerConfig {
    /// Get the collection interval as Duration
    pub fn collection_interval(&self) -> Duration {
        Duration::from_secs(self.collection_interval_secs)
    }

    /// Get the evaluation interval as Duration
    pub fn evaluation_interval(&self) -> Duration {
        Duration::from_secs(self.evaluation_interval_secs)
    }

    /// Validate scheduler configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.collection_interval_secs == 0 || self.evaluation_interval_secs == 0 {
            return Err(ValidationError::InvalidInterval);
        }
        Ok(())
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            collection_interval_secs: default_collection_interval(),
            evaluation_interval_secs: default_evaluation_interval(),
            overlap_policy: OverlapPolicy::default(),
        }
    }
}

fn default_collection_interval() -> u64 {
    24 * 60 * 60
}

fn default_evaluation_interval() -> u64 {
    5 * 60
}
