use common::TimeoutSecs;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("deadline of {0:?} exceeded")]
pub struct DeadlineExceeded(pub Duration);

/// Bounds a single future with a deadline.
///
/// The timer lives only as long as the guarded call: it is dropped as soon as
/// the future resolves, and on expiry the future itself is dropped, which
/// aborts any in-flight request it owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeoutGuard {
    deadline: Option<Duration>,
}

impl TimeoutGuard {
    pub fn new(deadline: Option<Duration>) -> Self {
        TimeoutGuard { deadline }
    }
    pub fn from_secs(timeout: TimeoutSecs) -> Self {
        match timeout {
            0 => TimeoutGuard::new(None),
            secs => TimeoutGuard::new(Some(Duration::from_secs(secs))),
        }
    }
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }
    pub async fn run<F>(&self, future: F) -> Result<F::Output, DeadlineExceeded>
    where
        F: Future,
    {
        match self.deadline {
            Some(deadline) => tokio::time::timeout(deadline, future)
                .await
                .map_err(|_| DeadlineExceeded(deadline)),
            None => Ok(future.await),
        }
    }
}
