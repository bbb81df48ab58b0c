//! Pacing between consecutive creation requests.
//!
//! The target API enforces a requests-per-second ceiling. The translator
//! pauses through a [`Pacer`] after every request so the wait can be swapped
//! out: [`TokioPacer`] really sleeps, [`InstantPacer`] only records.

use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;

/// Scheduler capability used to wait between requests.
#[async_trait]
pub trait Pacer: Send + Sync {
    /// Suspend the caller for `delay`.
    async fn pause(&self, delay: Duration);
}

/// Sleeps on the tokio timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioPacer;

#[async_trait]
impl Pacer for TokioPacer {
    async fn pause(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Returns immediately and remembers every requested pause.
///
/// Used for dry runs, where nothing remote needs protecting.
#[derive(Debug, Default)]
pub struct InstantPacer {
    pauses: Mutex<Vec<Duration>>,
}

impl InstantPacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pauses requested so far, in order.
    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Sum of all requested pauses.
    pub fn total(&self) -> Duration {
        self.pauses().iter().sum()
    }
}

#[async_trait]
impl Pacer for InstantPacer {
    async fn pause(&self, delay: Duration) {
        self.pauses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_tokio_pacer_waits() {
        let start = tokio::time::Instant::now();
        TokioPacer.pause(Duration::from_millis(400)).await;
        assert!(start.elapsed() >= Duration::from_millis(400));
    }

    #[tokio::test]
    async fn test_instant_pacer_records() {
        let pacer = InstantPacer::new();
        pacer.pause(Duration::from_millis(100)).await;
        pacer.pause(Duration::from_millis(250)).await;

        assert_eq!(
            pacer.pauses(),
            vec![Duration::from_millis(100), Duration::from_millis(250)]
        );
        assert_eq!(pacer.total(), Duration::from_millis(350));
    }
}
