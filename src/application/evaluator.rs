//! AlertEvaluator - checks current weather against stored subscriptions.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::AlertSubscription;
use crate::ports::{AlertMailer, AlertStore, WeatherProvider};

/// Evaluates all stored subscriptions against live weather and emails on
/// breach.
///
/// Subscriptions are processed sequentially. A per-subscription failure
/// (fetch or send) is logged and does not stop the remaining subscriptions.
/// There is no de-duplication: a breach still in effect on the next cycle
/// re-sends the email every cycle.
pub struct AlertEvaluator {
    provider: Arc<dyn WeatherProvider>,
    alerts: Arc<dyn AlertStore>,
    mailer: Arc<dyn AlertMailer>,
}

impl AlertEvaluator {
    pub fn new(
        provider: Arc<dyn WeatherProvider>,
        alerts: Arc<dyn AlertStore>,
        mailer: Arc<dyn AlertMailer>,
    ) -> Self {
        Self {
            provider,
            alerts,
            mailer,
        }
    }

    /// One evaluation pass over all subscriptions. Returns the number of
    /// emails sent.
    pub async fn run_once(&self) -> usize {
        let subscriptions = match self.alerts.list_all().await {
            Ok(subscriptions) => subscriptions,
            Err(e) => {
                warn!(error = %e, "failed to load subscriptions, skipping evaluation run");
                return 0;
            }
        };

        let mut sent = 0;

        for subscription in &subscriptions {
            match self.evaluate(subscription).await {
                Ok(true) => sent += 1,
                Ok(false) => {}
                Err(reason) => {
                    warn!(
                        city = %subscription.city,
                        email = %subscription.email,
                        error = %reason,
                        "skipping subscription in evaluation run"
                    );
                }
            }
        }

        sent
    }

    /// Checks one subscription; returns whether an email went out.
    async fn evaluate(
        &self,
        subscription: &AlertSubscription,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        let current = self.provider.fetch_current(&subscription.city).await?;

        if !subscription.is_breached_by(current.temp) {
            return Ok(false);
        }

        let subject = format!("Weather Alert for {}", subscription.city);
        let body = format!(
            "Alert: The temperature in {} has exceeded {}\u{b0}C! Current temperature: {}\u{b0}C.",
            subscription.city, subscription.temperature_threshold, current.temp
        );

        self.mailer
            .send(&subscription.email, &subject, &body)
            .await?;

        info!(
            city = %subscription.city,
            email = %subscription.email,
            threshold = subscription.temperature_threshold,
            current = current.temp,
            "alert email sent"
        );

        Ok(true)
    }
}
