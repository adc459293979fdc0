//! Open-form dispatch through the notification endpoint.

mod common;

use common::sent_message;
use selecta::notification::{
    EmailSender, NotificationEndpoint, NotificationKind, NotificationRequest, SmsSender,
};
use selecta::testing::{CountingHandler, RecordingHandler};
use selecta::{BuildError, DuplicatePolicy, Kind, Registry, ResolveError};

#[test]
fn test_sms_request_reaches_sms_sender() {
    let endpoint = NotificationEndpoint::with_default_senders().unwrap();
    let request = NotificationRequest::new(NotificationKind::Sms, "x@example.com");

    assert_eq!(
        endpoint.send(&request).unwrap(),
        "Sms notification sent to x@example.com"
    );
}

#[test]
fn test_every_registered_kind_resolves_to_its_sender() {
    let endpoint = NotificationEndpoint::with_default_senders().unwrap();

    for kind in endpoint.registry().kinds() {
        let handler = endpoint.registry().resolve(kind).unwrap();
        assert_eq!(handler.kind(), kind);

        let request = NotificationRequest::new(kind, "ops@example.com");
        assert_eq!(
            endpoint.send(&request).unwrap(),
            sent_message(kind, "ops@example.com")
        );
    }
}

#[test]
fn test_fax_is_unsupported() {
    let endpoint = NotificationEndpoint::with_default_senders().unwrap();
    let request = NotificationRequest::new(NotificationKind::Fax, "x@example.com");

    let err = endpoint.send(&request).unwrap_err();
    assert_eq!(err, ResolveError::UnsupportedKind { kind: "FAX" });
    assert_eq!(err.to_string(), "unsupported kind: FAX");
    assert_eq!(
        endpoint.registry().unhandled_kinds(),
        vec![NotificationKind::Fax]
    );
}

#[test]
fn test_failed_resolution_invokes_nothing() {
    let email = RecordingHandler::new(NotificationKind::Email, "email".to_string());
    let sms = CountingHandler::new(NotificationKind::Sms, "sms".to_string());

    let registry: Registry<NotificationKind, NotificationRequest, String> = Registry::builder()
        .register(email.clone())
        .register(sms.clone())
        .build()
        .unwrap();

    let fax = NotificationRequest::new(NotificationKind::Fax, "x@example.com");
    assert!(registry.dispatch(fax.kind, &fax).is_err());
    assert_eq!(email.call_count(), 0);
    assert_eq!(sms.call_count(), 0);

    let mail = NotificationRequest::new(NotificationKind::Email, "y@example.com");
    assert_eq!(registry.dispatch(mail.kind, &mail).unwrap(), "email");
    assert_eq!(email.payloads(), vec![mail]);
    assert_eq!(sms.call_count(), 0);
}

#[test]
fn test_resolution_returns_the_registered_instance() {
    let registry: Registry<NotificationKind, NotificationRequest, String> = Registry::builder()
        .register(EmailSender)
        .register(SmsSender)
        .build()
        .unwrap();

    let first = registry.resolve(NotificationKind::Sms).unwrap();
    let second = registry.resolve(NotificationKind::Sms).unwrap();
    assert!(std::ptr::addr_eq(first, second));
}

#[test]
fn test_duplicate_sender_policies() {
    let rejected = Registry::<NotificationKind, NotificationRequest, String>::builder()
        .register(EmailSender)
        .register(CountingHandler::new(NotificationKind::Email, "late".to_string()))
        .build();
    assert!(matches!(rejected, Err(BuildError::DuplicateKind("EMAIL"))));

    let late = CountingHandler::new(NotificationKind::Email, "late".to_string());
    let registry = Registry::<NotificationKind, NotificationRequest, String>::builder()
        .duplicate_policy(DuplicatePolicy::FirstWins)
        .register(EmailSender)
        .register(late.clone())
        .build()
        .unwrap();

    let request = NotificationRequest::new(NotificationKind::Email, "z@example.com");
    assert_eq!(
        registry.dispatch(request.kind, &request).unwrap(),
        sent_message(NotificationKind::Email, "z@example.com")
    );
    assert_eq!(late.call_count(), 0);
}

#[test]
fn test_require_complete_reports_missing_kinds() {
    let result = Registry::<NotificationKind, NotificationRequest, String>::builder()
        .register(EmailSender)
        .require_complete()
        .build();

    match result {
        Err(BuildError::Incomplete(missing)) => assert_eq!(missing, vec!["SMS", "PUSH", "FAX"]),
        other => panic!("expected incomplete registry, got {other:?}"),
    }
}

// ============================================================================
// JSON boundary
// ============================================================================

#[test]
fn test_json_request_is_sent() {
    let endpoint = NotificationEndpoint::with_default_senders().unwrap();

    let response = endpoint.handle_json(r#"{"to": "x@example.com", "type": "SMS"}"#);
    assert_eq!(response.status, 200);
    assert_eq!(response.json().unwrap(), "Sms notification sent to x@example.com");

    let aliased = endpoint.handle_json(r#"{"to": "x@example.com", "kind": "PUSH"}"#);
    assert_eq!(aliased.json().unwrap(), "Push notification sent to x@example.com");
}

#[test]
fn test_json_unsupported_kind() {
    let endpoint = NotificationEndpoint::with_default_senders().unwrap();

    let response = endpoint.handle_json(r#"{"to": "x@example.com", "type": "FAX"}"#);
    assert_eq!(response.status, 400);

    let body = response.json().unwrap();
    assert_eq!(body["error"], "unsupported_kind");
    assert_eq!(body["message"], "unsupported kind: FAX");
}

#[test]
fn test_json_unknown_kind_name_is_bad_request() {
    let endpoint = NotificationEndpoint::with_default_senders().unwrap();

    let response = endpoint.handle_json(r#"{"to": "x@example.com", "type": "PIGEON"}"#);
    assert_eq!(response.status, 400);
    assert_eq!(response.json().unwrap()["error"], "bad_request");

    let missing = endpoint.handle_json(r#"{"to": "x@example.com"}"#);
    assert_eq!(missing.json().unwrap()["error"], "bad_request");
}

#[test]
fn test_kind_names_match_wire_names() {
    for kind in NotificationKind::ALL {
        let wire = serde_json::to_value(kind).unwrap();
        assert_eq!(wire, kind.name());
    }
}
