//! Notification collaborator.
//!
//! The cart reports outcomes ("\"Ring\" added to cart!") through a
//! [`Notifier`]. Delivery is fire-and-forget: nothing the notifier does can
//! affect cart state.

use luxe_core::NotificationKind;

/// Receives user-facing messages from the cart.
pub trait Notifier {
    /// Deliver a message.
    fn notify(&mut self, message: &str, kind: NotificationKind);
}

/// A delivered message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

/// Forwards notifications to the `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, message: &str, kind: NotificationKind) {
        match kind {
            NotificationKind::Success => tracing::info!(%kind, "{message}"),
            NotificationKind::Error => tracing::warn!(%kind, "{message}"),
        }
    }
}

/// Keeps every notification in order so the caller can show or inspect them.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    notifications: Vec<Notification>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications received so far, oldest first.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Count of notifications of one kind.
    #[must_use]
    pub fn count(&self, kind: NotificationKind) -> usize {
        self.notifications.iter().filter(|n| n.kind == kind).count()
    }

    /// Take all pending notifications, leaving the recorder empty.
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str, kind: NotificationKind) {
        tracing::debug!(%kind, message, "notification recorded");
        self.notifications.push(Notification {
            message: message.to_owned(),
            kind,
        });
    }
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, message: &str, kind: NotificationKind) {
        (**self).notify(message, kind);
    }
}
