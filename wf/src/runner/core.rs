//! Runner implementation

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinHandle;
use tokio::time::{Instant, timeout_at};
use tracing::{debug, warn};

use crate::domain::{City, Outcome, TaskError};
use crate::fetch::Fetcher;

use super::config::RunnerConfig;

/// Batch-fatal configuration errors
///
/// Everything else that can go wrong is localized to a single city's
/// outcome and never aborts the batch.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum RunnerError {
    /// The admission gate cannot be built with zero capacity
    #[error("concurrency must be at least 1 (got {0})")]
    InvalidConcurrency(usize),
}

/// Bounded fan-out/fan-in runner
pub struct Runner {
    config: RunnerConfig,
}

impl Runner {
    /// Create a runner with the given configuration
    pub fn new(config: RunnerConfig) -> Self {
        debug!(?config, "Runner::new: called");
        Self { config }
    }

    /// Execute every city against the fetcher and aggregate one outcome each
    ///
    /// Validates the gate capacity before anything is spawned; an invalid
    /// gate fails the whole batch without a single fetch. Each task acquires
    /// the gate and performs its round trip under the shared deadline. The
    /// drain waits for all tasks until deadline + grace, then backfills any
    /// straggler with a timeout outcome and aborts its task, so a stuck
    /// transport cannot hold the report hostage.
    pub async fn run(&self, cities: Vec<City>, fetcher: Arc<dyn Fetcher>) -> Result<Vec<Outcome>, RunnerError> {
        debug!(
            count = cities.len(),
            concurrency = self.config.concurrency,
            timeout_ms = self.config.timeout_ms,
            "Runner::run: called"
        );

        if self.config.concurrency < 1 {
            warn!(concurrency = self.config.concurrency, "Runner::run: invalid gate capacity");
            return Err(RunnerError::InvalidConcurrency(self.config.concurrency));
        }

        let deadline = Instant::now() + self.config.timeout();
        let gate = Arc::new(Semaphore::new(self.config.concurrency));
        let (tx, mut rx) = mpsc::channel::<(usize, Outcome)>(cities.len().max(1));

        let mut handles: Vec<JoinHandle<()>> = Vec::with_capacity(cities.len());
        for (idx, city) in cities.iter().cloned().enumerate() {
            let gate = gate.clone();
            let fetcher = fetcher.clone();
            let tx = tx.clone();
            handles.push(tokio::spawn(async move {
                let outcome = run_one(city, gate, deadline, fetcher).await;
                // The receiver closes once the grace window expires; the
                // straggler was already recorded as a timeout by then.
                if tx.send((idx, outcome)).await.is_err() {
                    debug!(idx, "Runner task: receiver closed before outcome delivery");
                }
            }));
        }
        // Every live sender now belongs to a task; dropping ours lets the
        // drain observe the channel closing once all tasks have reported.
        drop(tx);

        // Single writer per slot: each index is written by exactly one task.
        let mut slots: Vec<Option<Outcome>> = cities.iter().map(|_| None).collect();
        let drain_deadline = deadline + self.config.grace();
        loop {
            match timeout_at(drain_deadline, rx.recv()).await {
                Ok(Some((idx, outcome))) => {
                    debug!(idx, "Runner::run: outcome received");
                    slots[idx] = Some(outcome);
                }
                Ok(None) => {
                    debug!("Runner::run: all tasks reported");
                    break;
                }
                Err(_elapsed) => {
                    warn!("Runner::run: grace window expired with stragglers outstanding");
                    break;
                }
            }
        }

        for handle in &handles {
            handle.abort();
        }

        let outcomes: Vec<Outcome> = slots
            .into_iter()
            .zip(cities)
            .map(|(slot, city)| {
                slot.unwrap_or_else(|| {
                    debug!(state = %city.state, "Runner::run: backfilling straggler as timeout");
                    Outcome::timeout(city)
                })
            })
            .collect();

        debug!(count = outcomes.len(), "Runner::run: complete");
        Ok(outcomes)
    }
}

/// Run a single city task: admission gate, fetch, one outcome
async fn run_one(city: City, gate: Arc<Semaphore>, deadline: Instant, fetcher: Arc<dyn Fetcher>) -> Outcome {
    debug!(state = %city.state, "run_one: called");

    // Waiting for admission is itself bounded by the shared deadline; a
    // task that never gets past the gate never calls the fetcher.
    let permit = match timeout_at(deadline, gate.acquire_owned()).await {
        Ok(Ok(permit)) => permit,
        Ok(Err(_closed)) => {
            // The gate is never closed while tasks are running.
            debug!(state = %city.state, "run_one: gate closed");
            return Outcome::failure(city, TaskError::Execution("admission gate closed".to_string()));
        }
        Err(_elapsed) => {
            debug!(state = %city.state, "run_one: deadline expired at the gate");
            return Outcome::timeout(city);
        }
    };

    let result = timeout_at(deadline, fetcher.fetch(&city)).await;
    // Dropping the owned permit releases the gate on every path out of the
    // fetch, including cancellation.
    drop(permit);

    match result {
        Ok(Ok(current)) => {
            debug!(state = %city.state, "run_one: fetch succeeded");
            Outcome::success(city, current)
        }
        Ok(Err(e)) => {
            debug!(state = %city.state, error = %e, "run_one: fetch failed");
            let message = e.to_string();
            Outcome::failure(city, TaskError::Execution(message))
        }
        Err(_elapsed) => {
            debug!(state = %city.state, "run_one: deadline expired mid-fetch");
            Outcome::timeout(city)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CurrentConditions;
    use crate::fetch::mock::MockFetcher;
    use crate::fetch::FetchError;
    use async_trait::async_trait;
    use std::time::Duration;

    fn cities(n: usize) -> Vec<City> {
        (0..n)
            .map(|i| City::new(&format!("State{:02}", i), &format!("Capital{:02}", i), 0.0, 0.0))
            .collect()
    }

    fn fast_config(concurrency: usize) -> RunnerConfig {
        RunnerConfig {
            concurrency,
            timeout_ms: 5_000,
            grace_ms: 500,
        }
    }

    /// Fetcher that fails for one state and succeeds for the rest
    struct FlakyFetcher {
        bad_state: String,
    }

    #[async_trait]
    impl Fetcher for FlakyFetcher {
        async fn fetch(&self, city: &City) -> Result<CurrentConditions, FetchError> {
            if city.state == self.bad_state {
                return Err(FetchError::Status(503));
            }
            Ok(CurrentConditions {
                time: "2026-08-05T12:00".to_string(),
                ..Default::default()
            })
        }
    }

    #[tokio::test]
    async fn test_every_city_reports_once() {
        let mock = Arc::new(MockFetcher::new(CurrentConditions {
            time: "2026-08-05T12:00".to_string(),
            ..Default::default()
        }));
        let runner = Runner::new(fast_config(4));

        let outcomes = runner.run(cities(12), mock.clone()).await.unwrap();

        assert_eq!(outcomes.len(), 12);
        assert_eq!(mock.call_count(), 12);
        for (i, outcome) in outcomes.iter().enumerate() {
            assert_eq!(outcome.city.state, format!("State{:02}", i));
            assert!(outcome.result.is_ok());
        }
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let mock = Arc::new(MockFetcher::new(CurrentConditions::default()));
        let runner = Runner::new(fast_config(2));

        let outcomes = runner.run(Vec::new(), mock.clone()).await.unwrap();

        assert!(outcomes.is_empty());
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_concurrency_fails_before_dispatch() {
        let mock = Arc::new(MockFetcher::new(CurrentConditions::default()));
        let runner = Runner::new(fast_config(0));

        let result = runner.run(cities(5), mock.clone()).await;

        assert_eq!(result.unwrap_err(), RunnerError::InvalidConcurrency(0));
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_one_failure_does_not_abort_siblings() {
        let fetcher = Arc::new(FlakyFetcher {
            bad_state: "State02".to_string(),
        });
        let runner = Runner::new(fast_config(3));

        let outcomes = runner.run(cities(5), fetcher).await.unwrap();

        assert_eq!(outcomes.len(), 5);
        for outcome in &outcomes {
            if outcome.city.state == "State02" {
                match &outcome.result {
                    Err(TaskError::Execution(msg)) => assert!(msg.contains("503")),
                    other => panic!("expected execution error, got {:?}", other),
                }
            } else {
                assert!(outcome.result.is_ok());
            }
        }
    }

    #[tokio::test]
    async fn test_gate_wait_respects_deadline() {
        /// Fetcher slow enough that with K=1 only the first city can finish
        struct SlowFetcher;

        #[async_trait]
        impl Fetcher for SlowFetcher {
            async fn fetch(&self, _city: &City) -> Result<CurrentConditions, FetchError> {
                tokio::time::sleep(Duration::from_millis(400)).await;
                Ok(CurrentConditions {
                    time: "2026-08-05T12:00".to_string(),
                    ..Default::default()
                })
            }
        }

        let runner = Runner::new(RunnerConfig {
            concurrency: 1,
            timeout_ms: 500,
            grace_ms: 200,
        });

        let outcomes = runner.run(cities(3), Arc::new(SlowFetcher)).await.unwrap();

        assert_eq!(outcomes.len(), 3);
        let ok = outcomes.iter().filter(|o| o.result.is_ok()).count();
        let timed_out = outcomes
            .iter()
            .filter(|o| o.result == Err(TaskError::Timeout))
            .count();
        assert_eq!(ok, 1, "only the first admission fits inside the deadline");
        assert_eq!(timed_out, 2);
    }
}
