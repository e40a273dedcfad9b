//! Cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::OptimizeError;

/// A cloneable flag the caller sets to abandon an in-flight optimization.
///
/// The engine polls it between container assignments, between savings
/// merges, and between 2-opt passes.
///
/// # Examples
///
/// ```
/// use u_dispatch::CancelToken;
///
/// let token = CancelToken::new();
/// let handle = token.clone();
/// assert!(token.check().is_ok());
/// handle.cancel();
/// assert!(token.is_cancelled());
/// assert!(token.check().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Visible to every clone.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Returns `true` once [`cancel`](Self::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Returns [`OptimizeError::Cancelled`] if cancellation was requested.
    pub fn check(&self) -> Result<(), OptimizeError> {
        if self.is_cancelled() {
            Err(OptimizeError::Cancelled)
        } else {
            Ok(())
        }
    }
}
