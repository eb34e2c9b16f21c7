//! Poll loop driving a Judge0 submission to a terminal status

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::Instant;

use crate::judge0::{ExecutionBackend, SubmissionResult, TransportError};

/// Bounds of one poll sequence. `None` leaves a bound off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_attempts: Option<u32>,
    pub deadline: Option<Duration>,
}

impl PollPolicy {
    /// Poll forever at the given interval
    pub fn unbounded(interval: Duration) -> Self {
        Self {
            interval,
            max_attempts: None,
            deadline: None,
        }
    }
}

/// Sender side of a [`CancelSignal`]
#[derive(Debug)]
pub struct CancelHandle(watch::Sender<bool>);

/// Receiver checked by the poll loop around every wait and fetch
#[derive(Debug, Clone)]
pub struct CancelSignal(watch::Receiver<bool>);

/// Create a linked handle/signal pair
pub fn cancel_pair() -> (CancelHandle, CancelSignal) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle(tx), CancelSignal(rx))
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.send_replace(true);
    }
}

impl CancelSignal {
    /// A signal that never fires
    pub fn never() -> Self {
        let (_, rx) = watch::channel(false);
        Self(rx)
    }

    pub fn is_cancelled(&self) -> bool {
        *self.0.borrow()
    }

    /// Resolve once cancelled; pend forever if the handle is gone
    pub async fn cancelled(&mut self) {
        loop {
            if *self.0.borrow_and_update() {
                return;
            }
            if self.0.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }
}

/// Poll `token` until Judge0 reports anything other than queued/processing.
///
/// The job is assumed queued right after submission, so the first fetch
/// happens one interval in. Fetch errors end the loop immediately.
pub async fn poll_until_terminal<B>(
    backend: &B,
    token: &str,
    policy: &PollPolicy,
    mut cancel: CancelSignal,
) -> Result<SubmissionResult, TransportError>
where
    B: ExecutionBackend + ?Sized,
{
    let started = Instant::now();
    let polling = poll_loop(backend, token, policy, &mut cancel);

    match policy.deadline {
        Some(deadline) => match tokio::time::timeout(deadline, polling).await {
            Ok(outcome) => outcome,
            Err(_) => {
                let elapsed = started.elapsed();
                tracing::warn!(
                    token,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "Judge0 polling deadline exceeded"
                );
                Err(TransportError::DeadlineExceeded { elapsed })
            }
        },
        None => polling.await,
    }
}

async fn poll_loop<B>(
    backend: &B,
    token: &str,
    policy: &PollPolicy,
    cancel: &mut CancelSignal,
) -> Result<SubmissionResult, TransportError>
where
    B: ExecutionBackend + ?Sized,
{
    let mut attempts: u32 = 0;

    loop {
        if let Some(max_attempts) = policy.max_attempts {
            if attempts >= max_attempts {
                tracing::warn!(token, attempts, "Judge0 polling attempts exhausted");
                return Err(TransportError::AttemptsExhausted { attempts });
            }
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::info!(token, attempts, "Judge0 polling cancelled");
                return Err(TransportError::Cancelled);
            }
            _ = tokio::time::sleep(policy.interval) => {}
        }

        attempts += 1;
        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::info!(token, attempts, "Judge0 polling cancelled");
                return Err(TransportError::Cancelled);
            }
            fetched = backend.fetch(token) => fetched?,
        };

        tracing::info!(
            token,
            attempt = attempts,
            status_id = result.status.id,
            status = %result.status.description,
            has_stdout = result.stdout.is_some(),
            has_stderr = result.stderr.is_some(),
            "Judge0 polling result"
        );

        if result.status.kind().is_terminal() {
            return Ok(result);
        }
    }
}
