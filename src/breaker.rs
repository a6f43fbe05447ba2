//! Circuit breaker guarding handler execution.
//!
//! ```text
//! Closed   -> Open:     consecutive failures reach the threshold
//! Open     -> HalfOpen: reset timeout elapsed since the last failure
//! HalfOpen -> Closed:   the single trial call succeeds
//! HalfOpen -> Open:     the trial call fails
//! ```
//!
//! The breaker is a gate, not a retry policy. A rejected call surfaces as
//! [`BreakerError::Open`] and the caller decides whether to try again later.

use std::future::Future;
use std::time::Duration;

use parking_lot::Mutex;
use thiserror::Error;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Default number of consecutive failures that opens the breaker.
pub const DEFAULT_FAILURE_THRESHOLD: u32 = 5;

/// Default cooldown before an open breaker admits a trial call.
pub const DEFAULT_RESET_TIMEOUT: Duration = Duration::from_secs(60);

/// Breaker state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakerState {
    /// Calls pass through.
    Closed,
    /// Calls are rejected until the reset timeout elapses.
    Open,
    /// One trial call is in flight.
    HalfOpen,
}

/// Tuning for one guarded resource class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakerConfig {
    /// Consecutive failures before opening. Must be at least 1.
    pub failure_threshold: u32,
    /// Cooldown measured from the most recent failure.
    pub reset_timeout: Duration,
}

impl Default for BreakerConfig {
    fn default() -> Self {
        Self {
            failure_threshold: DEFAULT_FAILURE_THRESHOLD,
            reset_timeout: DEFAULT_RESET_TIMEOUT,
        }
    }
}

/// Error returned by [`CircuitBreaker::call`].
#[derive(Debug, Error)]
pub enum BreakerError<E> {
    /// The breaker rejected the call without running it.
    #[error("circuit breaker '{name}' is open")]
    Open {
        /// Name of the breaker.
        name: String,
    },

    /// The operation ran and failed. Counted as a breaker failure.
    #[error("{0}")]
    Failed(E),
}

#[derive(Debug)]
struct BreakerRecord {
    state: BreakerState,
    consecutive_failures: u32,
    last_failure_at: Option<Instant>,
}

/// A named three-state circuit breaker.
#[derive(Debug)]
pub struct CircuitBreaker {
    name: String,
    config: BreakerConfig,
    record: Mutex<BreakerRecord>,
}

impl CircuitBreaker {
    /// Creates a closed breaker.
    #[must_use]
    pub fn new(name: impl Into<String>, config: BreakerConfig) -> Self {
        let name = name.into();
        debug!(
            breaker = %name,
            failure_threshold = config.failure_threshold,
            reset_timeout_secs = config.reset_timeout.as_secs(),
            "Circuit breaker initialised"
        );

        Self {
            name,
            config,
            record: Mutex::new(BreakerRecord {
                state: BreakerState::Closed,
                consecutive_failures: 0,
                last_failure_at: None,
            }),
        }
    }

    /// Returns the breaker name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> BreakerState {
        self.record.lock().state
    }

    /// Returns the current consecutive failure count.
    #[must_use]
    pub fn consecutive_failures(&self) -> u32 {
        self.record.lock().consecutive_failures
    }

    /// Runs `operation` if the breaker admits it and records the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`BreakerError::Open`] without running the operation when the
    /// breaker is open (or half-open with a trial already in flight), and
    /// [`BreakerError::Failed`] when the operation itself fails.
    pub async fn call<F, Fut, T, E>(&self, operation: F) -> Result<T, BreakerError<E>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let mut guard = self.admit()?;

        let result = operation().await;
        guard.completed = true;

        match result {
            Ok(value) => {
                self.record_success(guard.is_trial);
                Ok(value)
            }
            Err(e) => {
                self.record_failure(guard.is_trial);
                Err(BreakerError::Failed(e))
            }
        }
    }

    /// Decides whether a call may proceed, moving Open to HalfOpen once the
    /// cooldown has elapsed.
    fn admit<E>(&self) -> Result<TrialGuard<'_>, BreakerError<E>> {
        let mut record = self.record.lock();

        match record.state {
            BreakerState::Closed => Ok(TrialGuard::passive(self)),
            BreakerState::Open => {
                let cooled_down = record
                    .last_failure_at
                    .map_or(true, |at| at.elapsed() >= self.config.reset_timeout);

                if cooled_down {
                    record.state = BreakerState::HalfOpen;
                    info!(breaker = %self.name, "Circuit breaker half-open, admitting trial call");
                    Ok(TrialGuard::trial(self))
                } else {
                    Err(self.open_error())
                }
            }
            // Single flight: the trial call already holds the half-open slot.
            BreakerState::HalfOpen => Err(self.open_error()),
        }
    }

    /// Only the trial may move the breaker out of `Open`/`HalfOpen`. A call
    /// admitted while still closed that finishes later is ignored there.
    fn record_success(&self, is_trial: bool) {
        let mut record = self.record.lock();
        if !is_trial && record.state != BreakerState::Closed {
            debug!(breaker = %self.name, "Ignoring success of a call admitted before opening");
            return;
        }
        if record.state == BreakerState::HalfOpen {
            info!(breaker = %self.name, "Circuit breaker closed after successful trial");
        }
        record.state = BreakerState::Closed;
        record.consecutive_failures = 0;
    }

    fn record_failure(&self, is_trial: bool) {
        let mut record = self.record.lock();
        if !is_trial && record.state != BreakerState::Closed {
            // Must not push the cooldown forward or settle a pending trial.
            debug!(breaker = %self.name, "Ignoring failure of a call admitted before opening");
            return;
        }
        record.consecutive_failures = record.consecutive_failures.saturating_add(1);
        record.last_failure_at = Some(Instant::now());

        let should_open = match record.state {
            BreakerState::HalfOpen => true,
            BreakerState::Closed => record.consecutive_failures >= self.config.failure_threshold,
            BreakerState::Open => false,
        };

        if should_open {
            // Open implies failures >= threshold.
            record.consecutive_failures = record
                .consecutive_failures
                .max(self.config.failure_threshold);
            record.state = BreakerState::Open;
            warn!(
                breaker = %self.name,
                consecutive_failures = record.consecutive_failures,
                reset_timeout_secs = self.config.reset_timeout.as_secs(),
                "Circuit breaker opened"
            );
        }
    }

    fn open_error<E>(&self) -> BreakerError<E> {
        BreakerError::Open {
            name: self.name.clone(),
        }
    }
}

/// Tracks an admitted call. A half-open trial dropped before completing
/// (e.g. its future was cancelled) counts as a failed trial so the breaker
/// cannot stay stuck in `HalfOpen`.
struct TrialGuard<'a> {
    breaker: &'a CircuitBreaker,
    is_trial: bool,
    completed: bool,
}

impl<'a> TrialGuard<'a> {
    const fn passive(breaker: &'a CircuitBreaker) -> Self {
        Self {
            breaker,
            is_trial: false,
            completed: false,
        }
    }

    const fn trial(breaker: &'a CircuitBreaker) -> Self {
        Self {
            breaker,
            is_trial: true,
            completed: false,
        }
    }
}

impl Drop for TrialGuard<'_> {
    fn drop(&mut self) {
        if self.is_trial && !self.completed {
            self.breaker.record_failure(true);
        }
    }
}
