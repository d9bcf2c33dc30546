use vocab_game::Notification;

use super::setup::TestSetup;

// ============================================================================
// Notification Assertions
// ============================================================================

pub struct NotificationAssertion {
    sent: Vec<Notification>,
}

impl NotificationAssertion {
    pub async fn for_chat(setup: &TestSetup) -> Self {
        Self {
            sent: setup.notifier.sent().await,
        }
    }

    pub fn received_nothing(self) -> Self {
        assert!(
            self.sent.is_empty(),
            "expected no notifications, got {:?}",
            self.sent
        );
        self
    }

    pub fn received_count(self, expected: usize) -> Self {
        assert_eq!(
            self.sent.len(),
            expected,
            "unexpected notifications: {:?}",
            self.sent
        );
        self
    }

    pub fn received(self, expected: &Notification) -> Self {
        assert!(
            self.sent.contains(expected),
            "expected {:?} in {:?}",
            expected,
            self.sent
        );
        self
    }

    pub fn last_is(self, expected: &Notification) -> Self {
        assert_eq!(self.sent.last(), Some(expected));
        self
    }

    pub fn last_text_contains(self, needle: &str) -> Self {
        let text = self
            .sent
            .last()
            .map(Notification::render)
            .unwrap_or_default();
        assert!(
            text.contains(needle),
            "expected last notification to contain {needle:?}, got {text:?}"
        );
        self
    }

    pub fn rounds_started(self, expected: usize) -> Self {
        let started = self
            .sent
            .iter()
            .filter(|n| matches!(n, Notification::RoundStarted { .. }))
            .count();
        assert_eq!(started, expected, "notifications: {:?}", self.sent);
        self
    }
}
