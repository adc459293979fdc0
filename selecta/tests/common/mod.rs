#![allow(dead_code)]

use selecta::auth::{AuthEndpoint, InMemoryUserStore, RegisterRequest, TwoFactorKind};
use selecta::notification::NotificationKind;
use std::sync::Arc;

// ============================================================================
// Expected Messages
// ============================================================================

pub fn sent_message(kind: NotificationKind, to: &str) -> String {
    let channel = match kind {
        NotificationKind::Email => "Email",
        NotificationKind::Sms => "Sms",
        NotificationKind::Push => "Push",
        NotificationKind::Fax => "Fax",
    };
    format!("{channel} notification sent to {to}")
}

pub fn challenge_message(kind: TwoFactorKind) -> &'static str {
    match kind {
        TwoFactorKind::Passkey => "User authenticating via Passkey...",
        TwoFactorKind::Email => "User authenticating via Email...",
        TwoFactorKind::Sms => "User authenticating via SMS...",
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn demo_endpoint() -> AuthEndpoint {
    AuthEndpoint::new(Arc::new(InMemoryUserStore::with_demo_users()))
}

pub fn empty_endpoint() -> (AuthEndpoint, Arc<InMemoryUserStore>) {
    let store = Arc::new(InMemoryUserStore::new());
    (AuthEndpoint::new(store.clone()), store)
}

pub fn register_request(username: &str, kind: Option<TwoFactorKind>) -> RegisterRequest {
    RegisterRequest::new(
        username,
        format!("{username}-secret"),
        format!("{username}@example.com"),
        "5550100",
        kind,
    )
}
