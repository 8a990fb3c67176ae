use crate::ports::notification_service::{NotificationService as NotificationServiceTrait, Result};
use async_trait::async_trait;
use tokio::io::{AsyncWriteExt, Stdout};
use tokio::sync::Mutex;

/// Terminal implementation of NotificationService
///
/// Prints toasts as a single line on stdout.
pub struct NotificationService {
    out: Mutex<Stdout>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            out: Mutex::new(tokio::io::stdout()),
        }
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
        let mut out = self.out.lock().await;
        out.write_all(format!("[ok] {}\n", message).as_bytes()).await?;
        out.flush().await?;
        Ok(())
    }
}
