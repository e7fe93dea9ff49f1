//! No-op notification adapter
//!
//! Used when desktop notifications are disabled; failures still reach the
//! user through the terminal presenter.

use async_trait::async_trait;

use crate::application::ports::{NotificationError, NotificationIcon, Notifier};

/// Notifier that discards every notification
pub struct NoOpNotifier;

#[async_trait]
impl Notifier for NoOpNotifier {
    async fn notify(
        &self,
        _title: &str,
        _message: &str,
        _icon: NotificationIcon,
    ) -> Result<(), NotificationError> {
        Ok(())
    }
}
