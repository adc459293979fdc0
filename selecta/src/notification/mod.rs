//! # Notification Sending (Open Form)
//!
//! Senders are built once, registered with a [`Registry`] and looked up by
//! the kind they report. A request for a kind without a sender fails with
//! [`ResolveError::UnsupportedKind`]; there is no fallback sender.
//!
//! [`Registry`]: crate::Registry
//! [`ResolveError::UnsupportedKind`]: crate::ResolveError::UnsupportedKind

mod endpoint;
mod request;
mod senders;

pub use endpoint::{NotificationEndpoint, NotificationRegistry, default_registry};
pub use request::NotificationRequest;
pub use senders::{EmailSender, PushSender, SmsSender};

use crate::Kind;
use serde::{Deserialize, Serialize};

/// The delivery channel of a notification.
#[derive(Kind, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    /// Delivered by [`EmailSender`].
    Email,
    /// Delivered by [`SmsSender`].
    Sms,
    /// Delivered by [`PushSender`].
    Push,
    /// Declared without a sender on purpose: [`default_registry`] leaves it
    /// unhandled, so requests for it fail with `UnsupportedKind`.
    Fax,
}
