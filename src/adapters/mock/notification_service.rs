use crate::ports::notification_service::{NotificationService as NotificationServiceTrait, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// Mock implementation of NotificationService
///
/// Does not show anything.
/// Records each success message so tests can count toasts.
#[allow(dead_code)]
pub struct NotificationService {
    messages: Mutex<Vec<String>>,
    failing: bool,
}

#[allow(dead_code)]
impl NotificationService {
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            failing: false,
        }
    }

    /// Records the message, then reports a delivery failure
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::new()
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationServiceTrait for NotificationService {
    async fn success(&self, message: &str) -> Result<()> {
        self.messages.lock().unwrap().push(message.to_string());

        if self.failing {
            return Err("toast surface unavailable".into());
        }
        Ok(())
    }
}
