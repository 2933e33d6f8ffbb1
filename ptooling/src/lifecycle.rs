//! Completion tracking for tool-driven runs.
//!
//! ```rust
//! use ptooling::{LifeCycle, LifeCycleHandler};
//!
//! let mut tracker = LifeCycle::new();
//! assert!(tracker.incomplete());
//!
//! let error = tracker.abort("disk full").unwrap_err();
//! assert_eq!(error.message(), "disk full");
//! assert!(!tracker.incomplete());
//! ```

use std::convert::Infallible;

use crate::AbortError;

/// Two-state tracker: active until the first completion, then completed for good.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LifeCycle {
    completed: bool,
    message: Option<String>,
}

impl LifeCycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Message passed to the first `complete` call.
    pub fn completion_message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn record_completion(&mut self, message: String) {
        if !self.completed {
            self.completed = true;
            self.message = Some(message);
        }
    }
}

/// Lifecycle operations for any type that owns a [`LifeCycle`].
pub trait LifeCycleHandler {
    fn lifecycle(&self) -> &LifeCycle;

    fn lifecycle_mut(&mut self) -> &mut LifeCycle;

    fn complete(&mut self, message: impl Into<String>) {
        self.lifecycle_mut().record_completion(message.into());
    }

    /// Completes with `"Abort: {content}"`, then fails with `content`.
    fn abort(&mut self, content: impl Into<String>) -> Result<Infallible, AbortError> {
        let content = content.into();
        self.complete(format!("Abort: {content}"));
        Err(AbortError::new(content))
    }

    fn incomplete(&self) -> bool {
        !self.lifecycle().is_completed()
    }
}

impl LifeCycleHandler for LifeCycle {
    fn lifecycle(&self) -> &LifeCycle {
        self
    }

    fn lifecycle_mut(&mut self) -> &mut LifeCycle {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_tracker_is_incomplete() {
        let tracker = LifeCycle::new();

        assert!(tracker.incomplete());
        assert!(!tracker.is_completed());
        assert_eq!(tracker.completion_message(), None);
    }

    #[test]
    fn complete_is_terminal_and_keeps_first_message() {
        let mut tracker = LifeCycle::new();

        tracker.complete("done");
        tracker.complete("again");

        assert!(!tracker.incomplete());
        assert_eq!(tracker.completion_message(), Some("done"));
    }

    #[test]
    fn abort_completes_before_failing() {
        let mut tracker = LifeCycle::new();

        let error = tracker.abort("bad").expect_err("abort always fails");

        assert_eq!(error.message(), "bad");
        assert_eq!(error.to_string(), "bad");
        assert!(tracker.is_completed());
        assert_eq!(tracker.completion_message(), Some("Abort: bad"));
    }

    #[test]
    fn abort_after_complete_still_fails_without_rewriting_message() {
        let mut tracker = LifeCycle::new();
        tracker.complete("done");

        let error = tracker.abort("late").expect_err("abort always fails");

        assert_eq!(error.message(), "late");
        assert_eq!(tracker.completion_message(), Some("done"));
    }
}
