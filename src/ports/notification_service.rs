use async_trait::async_trait;

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Notification Service port for the global toast surface.
///
/// Implementation could be a browser toast, a terminal line, a desktop
/// notification, etc.
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Show a success notification.
    ///
    /// Called once after a reservation has been placed.
    async fn success(&self, message: &str) -> Result<()>;
}
