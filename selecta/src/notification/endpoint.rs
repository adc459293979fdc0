use super::{EmailSender, NotificationKind, NotificationRequest, PushSender, SmsSender};
use crate::{
    BuildError, Dispatch, Registry, RegistryBuilder, ResolveError,
    endpoint::{Response, respond},
    handlers::LoggingHandler,
};

/// Open-form registry of notification senders.
pub type NotificationRegistry = Registry<NotificationKind, NotificationRequest, String>;

/// Assemble the standard senders (email, SMS, push), each wrapped in a
/// [`LoggingHandler`].
pub fn default_registry() -> Result<NotificationRegistry, BuildError> {
    RegistryBuilder::new()
        .register(LoggingHandler::new(EmailSender, "email"))
        .register(LoggingHandler::new(SmsSender, "sms"))
        .register(LoggingHandler::new(PushSender, "push"))
        .build()
}

/// Entry point for sending notifications.
///
/// # Example
///
/// ```rust,ignore
/// let endpoint = NotificationEndpoint::with_default_senders()?;
///
/// let response = endpoint.handle_json(r#"{"to": "x@example.com", "type": "SMS"}"#);
/// assert_eq!(response.status, 200);
/// ```
#[derive(Debug)]
pub struct NotificationEndpoint {
    registry: NotificationRegistry,
}

impl NotificationEndpoint {
    /// Create an endpoint over an assembled registry.
    pub fn new(registry: NotificationRegistry) -> Self {
        Self { registry }
    }

    /// Create an endpoint over [`default_registry`].
    pub fn with_default_senders() -> Result<Self, BuildError> {
        default_registry().map(Self::new)
    }

    /// The registry this endpoint resolves against.
    pub fn registry(&self) -> &NotificationRegistry {
        &self.registry
    }

    /// Send `request` through the sender registered for its kind.
    pub fn send(&self, request: &NotificationRequest) -> Result<String, ResolveError> {
        self.registry.dispatch(request.kind, request)
    }

    /// Deserialize a JSON body, send it and serialize the outcome.
    pub fn handle_json(&self, body: &str) -> Response {
        respond(body, |request: NotificationRequest| self.send(&request))
    }
}

impl Dispatch<NotificationRequest> for NotificationEndpoint {
    type Output = String;
    type Error = ResolveError;

    fn dispatch(&self, request: &NotificationRequest) -> Result<String, ResolveError> {
        self.send(request)
    }
}
