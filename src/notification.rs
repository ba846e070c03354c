use serde::Serialize;

use crate::{Error, ParticipantId};

/// Emitted when the store already holds a different alternative for a participant than the one
/// the client asked for. The store's value wins and replaces the client's cached value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictEvent {
    /// Split test identifier.
    pub split_test: String,
    /// Participant identifier.
    pub participant: ParticipantId,
    /// Alternative the client wanted.
    #[serde(rename = "conflict")]
    pub desired: u32,
    /// Alternative stored on the server.
    #[serde(rename = "alternative")]
    pub actual: u32,
}

/// Outcome of a fire-and-forget request that nobody awaited.
#[derive(Debug, Clone)]
pub enum Notification {
    /// A request failed.
    Error(Error),
    /// The store overrode the alternative the client sent.
    Conflict(ConflictEvent),
}

impl Notification {
    /// Event name: `"error"` or `"conflict"`.
    pub fn name(&self) -> &'static str {
        match self {
            Notification::Error(_) => "error",
            Notification::Conflict(_) => "conflict",
        }
    }
}

/// Receives errors and conflicts of fire-and-forget requests.
///
/// A handler must be chosen when creating a [`Client`](crate::Client). Closures taking a
/// [`Notification`] are handlers, which makes forwarding into a channel a one-liner:
///
/// ```
/// # use vanity::{ClientConfig, Notification};
/// let client = ClientConfig::disconnected()
///     .to_client(|notification: Notification| {
///         eprintln!("vanity {}: {:?}", notification.name(), notification);
///     })
///     .unwrap();
/// ```
pub trait NotificationHandler {
    /// Handle a single notification. Called from the task that ran the request.
    fn notify(&self, notification: Notification);
}

/// Discards all notifications.
///
/// Use only when you really don't care about failed requests.
pub struct NoopNotificationHandler;

impl NotificationHandler for NoopNotificationHandler {
    fn notify(&self, _notification: Notification) {}
}

impl<T: Fn(Notification)> NotificationHandler for T {
    fn notify(&self, notification: Notification) {
        self(notification);
    }
}
