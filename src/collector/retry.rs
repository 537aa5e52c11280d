// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Immediate retry of fallible async operations
//!
//! Device GUIs either answer again right away or not at all within one
//! request, so attempts are repeated back to back without any delay.

/// Result of [`retry_immediately`] together with every failed attempt
#[derive(Debug)]
pub struct RetryOutcome<T, E> {
    result: Result<T, E>,
    earlier_errors: Vec<E>,
}

impl<T, E> RetryOutcome<T, E> {
    /// Successful value, if any attempt succeeded
    pub fn value(&self) -> Option<&T> {
        self.result.as_ref().ok()
    }

    /// Error of the final attempt when all attempts failed
    pub fn last_error(&self) -> Option<&E> {
        self.result.as_ref().err()
    }

    /// All errors in the order they were encountered
    pub fn errors(&self) -> impl Iterator<Item = &E> {
        self.earlier_errors.iter().chain(self.last_error())
    }

    /// Number of failed attempts
    pub fn error_count(&self) -> usize {
        self.earlier_errors.len() + usize::from(self.result.is_err())
    }

    /// Total number of attempts made
    pub fn attempts(&self) -> usize {
        self.earlier_errors.len() + 1
    }

    /// Most recent error, including failures before a success
    pub fn latest_error(&self) -> Option<&E> {
        self.last_error().or_else(|| self.earlier_errors.last())
    }

    /// Drops the history and keeps the final result
    pub fn into_result(self) -> Result<T, E> {
        self.result
    }
}

/// Runs `operation` up to `max_attempts` times until it succeeds
///
/// # Panics
///
/// Panics when `max_attempts` is zero.
pub async fn retry_immediately<T, E, F, Fut>(
    max_attempts: usize,
    mut operation: F,
) -> RetryOutcome<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    assert!(max_attempts >= 1, "max_attempts must be at least 1");

    let mut earlier_errors = Vec::new();
    loop {
        match operation().await {
            Ok(value) => {
                return RetryOutcome {
                    result: Ok(value),
                    earlier_errors,
                };
            }
            Err(e) if earlier_errors.len() + 1 < max_attempts => {
                tracing::trace!(
                    "Attempt {} of {} failed",
                    earlier_errors.len() + 1,
                    max_attempts
                );
                earlier_errors.push(e);
            }
            Err(e) => {
                return RetryOutcome {
                    result: Err(e),
                    earlier_errors,
                };
            }
        }
    }
}
