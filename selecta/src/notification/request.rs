use super::NotificationKind;
use crate::Payload;
use serde::{Deserialize, Serialize};

/// A request to send one notification.
///
/// On the wire the discriminator is the `type` field; `kind` is accepted as
/// an alias.
///
/// ```json
/// { "to": "x@example.com", "type": "SMS" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    /// Destination address.
    pub to: String,
    /// Which channel to deliver through.
    #[serde(rename = "type", alias = "kind")]
    pub kind: NotificationKind,
}

impl NotificationRequest {
    /// Create a request for `kind` addressed to `to`.
    pub fn new(kind: NotificationKind, to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            kind,
        }
    }
}

impl Payload for NotificationRequest {}
