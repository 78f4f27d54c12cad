//! Operation status tracking with stale-response guarding.
//!
//! Every remote operation shares one status surface: a loading flag and the
//! last error message. Concurrent operations are not queued or cancelled, so
//! without a guard the slowest response would own the flags. [`OpStatus`]
//! hands each `begin` a fresh generation number; a completion carrying an
//! older generation is ignored.

use crate::Generation;
use serde::{Deserialize, Serialize};

/// Fallback error message when a failure carries no text.
pub const GENERIC_FAILURE: &str = "operation failed";

/// Phase of the most recent operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OpPhase {
    /// No operation issued yet
    #[default]
    Idle,
    /// An operation is in flight
    Pending,
    /// The newest operation completed
    Succeeded,
    /// The newest operation failed
    Failed,
}

/// Shared loading/error surface for remote operations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpStatus {
    phase: OpPhase,
    error: Option<String>,
    generation: Generation,
}

impl OpStatus {
    /// Create an idle status.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current phase.
    pub fn phase(&self) -> OpPhase {
        self.phase
    }

    /// Whether the newest operation is still in flight.
    pub fn is_loading(&self) -> bool {
        self.phase == OpPhase::Pending
    }

    /// Message of the newest failure, if the newest operation failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Generation of the newest operation.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Start an operation: pending, error cleared, fresh generation.
    ///
    /// The returned generation must be passed back to [`OpStatus::succeed`]
    /// or [`OpStatus::fail`].
    pub fn begin(&mut self) -> Generation {
        self.generation += 1;
        self.phase = OpPhase::Pending;
        self.error = None;
        self.generation
    }

    /// Record success for the given generation.
    ///
    /// Returns `false` without touching the flags when a newer operation has
    /// begun since.
    pub fn succeed(&mut self, generation: Generation) -> bool {
        if generation != self.generation {
            return false;
        }
        self.phase = OpPhase::Succeeded;
        self.error = None;
        true
    }

    /// Record failure for the given generation.
    ///
    /// An empty message degrades to [`GENERIC_FAILURE`], so the error
    /// surface is never an empty string. Returns `false` without touching
    /// the flags when a newer operation has begun since.
    pub fn fail(&mut self, generation: Generation, message: impl Into<String>) -> bool {
        if generation != self.generation {
            return false;
        }
        let message = message.into();
        self.phase = OpPhase::Failed;
        self.error = Some(if message.is_empty() {
            GENERIC_FAILURE.to_string()
        } else {
            message
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_status_is_idle() {
        let status = OpStatus::new();
        assert_eq!(status.phase(), OpPhase::Idle);
        assert!(!status.is_loading());
        assert!(status.error().is_none());
        assert_eq!(status.generation(), 0);
    }

    #[test]
    fn begin_sets_pending_and_clears_error() {
        let mut status = OpStatus::new();
        let gen1 = status.begin();
        status.fail(gen1, "boom");
        assert_eq!(status.error(), Some("boom"));

        let gen2 = status.begin();
        assert!(status.is_loading());
        assert!(status.error().is_none());
        assert_eq!(gen2, gen1 + 1);
    }

    #[test]
    fn succeed_lifecycle() {
        let mut status = OpStatus::new();
        let generation = status.begin();

        assert!(status.succeed(generation));
        assert_eq!(status.phase(), OpPhase::Succeeded);
        assert!(!status.is_loading());
        assert!(status.error().is_none());
    }

    #[test]
    fn fail_records_message() {
        let mut status = OpStatus::new();
        let generation = status.begin();

        assert!(status.fail(generation, "network unreachable"));
        assert_eq!(status.phase(), OpPhase::Failed);
        assert_eq!(status.error(), Some("network unreachable"));
    }

    #[test]
    fn empty_failure_message_gets_fallback() {
        let mut status = OpStatus::new();
        let generation = status.begin();

        status.fail(generation, "");
        assert_eq!(status.error(), Some(GENERIC_FAILURE));
    }

    #[test]
    fn stale_success_is_ignored() {
        let mut status = OpStatus::new();
        let stale = status.begin();
        let fresh = status.begin();

        assert!(!status.succeed(stale));
        assert!(status.is_loading()); // still owned by the fresh op

        assert!(status.succeed(fresh));
        assert_eq!(status.phase(), OpPhase::Succeeded);
    }

    #[test]
    fn stale_failure_cannot_overwrite_fresh_success() {
        let mut status = OpStatus::new();
        let stale = status.begin();
        let fresh = status.begin();
        status.succeed(fresh);

        assert!(!status.fail(stale, "too late"));
        assert_eq!(status.phase(), OpPhase::Succeeded);
        assert!(status.error().is_none());
    }

    #[test]
    fn serialization_roundtrip() {
        let mut status = OpStatus::new();
        let generation = status.begin();
        status.fail(generation, "rejected");

        let json = serde_json::to_string(&status).unwrap();
        let parsed: OpStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(status, parsed);
    }
}
