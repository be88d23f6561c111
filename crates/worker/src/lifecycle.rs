//! Worker lifecycle states.
//!
//! The browser drives a worker through install and activation before it may
//! intercept fetches. Transitions are guarded by the worker's operations: a
//! failed install leaves the worker in `Installing` and the previously
//! active worker keeps serving.

/// Worker lifecycle states, in transition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    /// Precache batch in progress (or failed and awaiting a retry).
    Installing,
    /// Precache complete; about to claim open pages.
    Activating,
    /// Controlling pages and intercepting fetches.
    Active,
}

impl WorkerState {
    /// Check if this state allows fetch interception.
    pub fn can_intercept_fetch(&self) -> bool {
        matches!(self, WorkerState::Active)
    }
}

impl std::fmt::Display for WorkerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkerState::Installing => write!(f, "installing"),
            WorkerState::Activating => write!(f, "activating"),
            WorkerState::Active => write!(f, "active"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_active_intercepts() {
        assert!(!WorkerState::Installing.can_intercept_fetch());
        assert!(!WorkerState::Activating.can_intercept_fetch());
        assert!(WorkerState::Active.can_intercept_fetch());
    }

    #[test]
    fn test_display() {
        assert_eq!(WorkerState::Installing.to_string(), "installing");
        assert_eq!(WorkerState::Active.to_string(), "active");
    }
}
