use super::{NotificationKind, NotificationRequest};
use crate::{Handler, KindHandler};

/// Sends notifications by email.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailSender;

impl Handler<NotificationRequest> for EmailSender {
    type Output = String;

    fn handle(&self, request: &NotificationRequest) -> String {
        format!("Email notification sent to {}", request.to)
    }
}

impl KindHandler<NotificationKind, NotificationRequest> for EmailSender {
    fn kind(&self) -> NotificationKind {
        NotificationKind::Email
    }
}

/// Sends notifications by SMS.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmsSender;

impl Handler<NotificationRequest> for SmsSender {
    type Output = String;

    fn handle(&self, request: &NotificationRequest) -> String {
        format!("Sms notification sent to {}", request.to)
    }
}

impl KindHandler<NotificationKind, NotificationRequest> for SmsSender {
    fn kind(&self) -> NotificationKind {
        NotificationKind::Sms
    }
}

/// Sends push notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct PushSender;

impl Handler<NotificationRequest> for PushSender {
    type Output = String;

    fn handle(&self, request: &NotificationRequest) -> String {
        format!("Push notification sent to {}", request.to)
    }
}

impl KindHandler<NotificationKind, NotificationRequest> for PushSender {
    fn kind(&self) -> NotificationKind {
        NotificationKind::Push
    }
}

#[cfg(test)]
mod tests {
    use super::{EmailSender, PushSender, SmsSender};
    use crate::notification::{NotificationKind, NotificationRequest};
    use crate::{Handler, KindHandler};

    #[test]
    fn test_senders_ignore_request_kind() {
        // The registry guarantees a sender only sees its own kind, but the
        // sender itself formats purely from the destination.
        let request = NotificationRequest::new(NotificationKind::Fax, "ops@example.com");

        assert_eq!(
            EmailSender.handle(&request),
            "Email notification sent to ops@example.com"
        );
        assert_eq!(
            SmsSender.handle(&request),
            "Sms notification sent to ops@example.com"
        );
        assert_eq!(
            PushSender.handle(&request),
            "Push notification sent to ops@example.com"
        );
    }

    #[test]
    fn test_senders_report_their_kind() {
        assert_eq!(EmailSender.kind(), NotificationKind::Email);
        assert_eq!(SmsSender.kind(), NotificationKind::Sms);
        assert_eq!(PushSender.kind(), NotificationKind::Push);
    }
}
