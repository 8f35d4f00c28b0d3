//! Alert subscription entity and breach check.

use serde::{Deserialize, Serialize};

/// A stored (email, city, threshold) triple used to drive alerting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertSubscription {
    pub id: i32,
    pub email: String,
    pub city: String,
    pub temperature_threshold: f64,
}

impl AlertSubscription {
    /// A breach is the current temperature strictly exceeding the threshold.
    /// A temperature exactly at the threshold does not alert.
    pub fn is_breached_by(&self, current_temp: f64) -> bool {
        current_temp > self.temperature_threshold
    }
}

/// A subscription about to be inserted (no id yet).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewAlertSubscription {
    pub email: String,
    pub city: String,
    pub temperature_threshold: f64,
}

impl NewAlertSubscription {
    /// Exact duplicate check over the whole triple, used to reject repeated
    /// registrations.
    pub fn matches(&self, existing: &AlertSubscription) -> bool {
        self.email == existing.email
            && self.city == existing.city
            && self.temperature_threshold == existing.temperature_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subscription(threshold: f64) -> AlertSubscription {
        AlertSubscription {
            id: 1,
            email: "user@example.com".to_string(),
            city: "Delhi".to_string(),
            temperature_threshold: threshold,
        }
    }

    #[test]
    fn breach_requires_strictly_greater_temperature() {
        let sub = subscription(35.0);
        assert!(sub.is_breached_by(36.0));
        assert!(!sub.is_breached_by(35.0));
        assert!(!sub.is_breached_by(34.9));
    }

    #[test]
    fn duplicate_match_is_exact_on_all_three_fields() {
        let existing = subscription(35.0);

        let same = NewAlertSubscription {
            email: "user@example.com".to_string(),
            city: "Delhi".to_string(),
            temperature_threshold: 35.0,
        };
        assert!(same.matches(&existing));

        let different_threshold = NewAlertSubscription {
            temperature_threshold: 36.0,
            ..same.clone()
        };
        assert!(!different_threshold.matches(&existing));

        let different_city = NewAlertSubscription {
            city: "Mumbai".to_string(),
            ..same
        };
        assert!(!different_city.matches(&existing));
    }
}
