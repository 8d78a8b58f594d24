//! Leave confirmation.
//!
//! The guard starts armed and is disarmed for good by the first Save or
//! Preview click, since both submit the form and navigate away on purpose.

/// Explicit form submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitAction {
    Save,
    Preview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardState {
    #[default]
    Armed,
    /// Disarmed by the recorded action. Terminal.
    Disarmed(SubmitAction),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NavigationGuard {
    state: GuardState,
}

impl NavigationGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    pub fn is_armed(&self) -> bool {
        self.state == GuardState::Armed
    }

    /// Disarm the guard. Returns `false` if it was already disarmed, in which
    /// case the original action is kept.
    pub fn disarm(&mut self, action: SubmitAction) -> bool {
        match self.state {
            GuardState::Armed => {
                self.state = GuardState::Disarmed(action);
                true
            }
            GuardState::Disarmed(_) => false,
        }
    }

    /// The message to prompt with, if leaving should be confirmed.
    pub fn prompt<'a>(&self, dirty: bool, message: &'a str) -> Option<&'a str> {
        (self.is_armed() && dirty).then_some(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MSG: &str = "leave?";

    #[test]
    fn test_prompts_only_when_dirty() {
        let guard = NavigationGuard::new();
        assert_eq!(guard.prompt(false, MSG), None);
        assert_eq!(guard.prompt(true, MSG), Some(MSG));
    }

    #[test]
    fn test_disarm_is_permanent() {
        let mut guard = NavigationGuard::new();
        assert!(guard.disarm(SubmitAction::Preview));
        assert!(!guard.disarm(SubmitAction::Save));

        assert_eq!(guard.state(), GuardState::Disarmed(SubmitAction::Preview));
        assert_eq!(guard.prompt(true, MSG), None);
    }
}
