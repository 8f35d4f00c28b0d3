//! PeriodicTask - fixed-interval runner for the background loops.
//!
//! Each task runs immediately once, then on every interval tick. The tick
//! body is awaited inside the loop, so two runs of the same task can never
//! overlap; the configured [`OverlapPolicy`] decides whether ticks that fell
//! due during a long run are made up afterwards or dropped.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::config::OverlapPolicy;

/// A named fixed-interval background task.
pub struct PeriodicTask {
    name: &'static str,
    interval: Duration,
    policy: OverlapPolicy,
}

impl PeriodicTask {
    /// Creates a new task description.
    pub fn new(name: &'static str, interval: Duration, policy: OverlapPolicy) -> Self {
        Self {
            name,
            interval,
            policy,
        }
    }

    /// Spawns the task onto the runtime. The first run happens immediately.
    pub fn spawn<F, Fut>(self, mut tick: F) -> JoinHandle<()>
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        info!(
            task = self.name,
            interval_secs = self.interval.as_secs(),
            policy = ?self.policy,
            "starting periodic task"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.interval);
            interval.set_missed_tick_behavior(missed_tick_behavior(self.policy));

            loop {
                interval.tick().await;
                debug!(task = self.name, "periodic task tick");
                tick().await;
            }
        })
    }
}

fn missed_tick_behavior(policy: OverlapPolicy) -> MissedTickBehavior {
    match policy {
        OverlapPolicy::Queue => MissedTickBehavior::Burst,
        OverlapPolicy::Skip => MissedTickBehavior::Skip,
    }
}
