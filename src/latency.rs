use std::time::Duration;

use tracing::debug;

/// Artificial processing delays for the simulated models. Scoring itself never
/// waits; stages call [`Latency::pause`] around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub highlight: Duration,
    pub clinical: Duration,
    pub image: Duration,
}

impl Latency {
    pub fn none() -> Self {
        Self {
            highlight: Duration::ZERO,
            clinical: Duration::ZERO,
            image: Duration::ZERO,
        }
    }

    pub fn simulated() -> Self {
        Self {
            highlight: Duration::from_millis(2000),
            clinical: Duration::from_millis(1500),
            image: Duration::from_millis(2000),
        }
    }

    pub async fn pause(delay: Duration, what: &'static str) {
        if delay.is_zero() {
            return;
        }
        debug!(what, delay_ms = delay.as_millis() as u64, "simulated delay");
        tokio::time::sleep(delay).await;
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::none()
    }
}
