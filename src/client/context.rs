//! # Resolve Context
//!
//! Cancellation and deadline signal carried through a credential resolution.
//! Every object store call made while resolving runs under [`ResolveContext::run`].

use super::error::StoreError;
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Calling context for a credential resolution
#[derive(Debug, Clone, Default)]
pub struct ResolveContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl ResolveContext {
    /// Context with no deadline, cancelled only through [`ResolveContext::cancel`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Context tied to an existing cancellation token
    pub fn with_token(token: CancellationToken) -> Self {
        Self {
            token,
            deadline: None,
        }
    }

    /// Same context, expiring `timeout` from now
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Same context, expiring at `deadline` (the earlier deadline wins)
    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(current) => current.min(deadline),
            None => deadline,
        });
        self
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.token.is_cancelled() {
            return Err(StoreError::Cancelled);
        }
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            return Err(StoreError::DeadlineExceeded);
        }
        Ok(())
    }

    /// Run a store call under this context
    ///
    /// A context that is already done fails without invoking `call`. Otherwise
    /// the call's future is dropped as soon as the token is cancelled or the
    /// deadline passes.
    pub async fn run<T, F, Fut>(&self, call: F) -> Result<T, StoreError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, StoreError>>,
    {
        self.check()?;
        let call = call();

        let guarded = async {
            tokio::select! {
                biased;
                () = self.token.cancelled() => Err(StoreError::Cancelled),
                result = call => result,
            }
        };

        match self.deadline {
            Some(deadline) => tokio::time::timeout_at(deadline, guarded)
                .await
                .unwrap_or(Err(StoreError::DeadlineExceeded)),
            None => guarded.await,
        }
    }
}
