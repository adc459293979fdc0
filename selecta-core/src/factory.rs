//! Closed-form handler construction.

use crate::kind::Kind;

/// A kind that constructs its own handler.
///
/// Implement this with a `match` over `self` that has no wildcard arm. The
/// compiler then rejects any new enum member that lacks a construction
/// branch, which is what makes closed-form resolution total: every member
/// resolves, and no "kind not found" error exists.
///
/// The `Default` member is the documented fallback used when a request
/// carries no kind at all.
///
/// # Example
///
/// ```rust,ignore
/// impl HandlerFactory for Channel {
///     type Handler = ChannelHandler;
///
///     fn create(self) -> Self::Handler {
///         match self {
///             Channel::Email => EmailHandler.into(),
///             Channel::Sms => SmsHandler.into(),
///         }
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot construct its own handler",
    label = "missing `HandlerFactory` implementation",
    note = "Implement `create` with an exhaustive `match` over every member of `{Self}`."
)]
pub trait HandlerFactory: Kind + Default {
    /// The handler type produced for every member.
    type Handler;

    /// Construct a fresh handler for this kind. Must not have side effects.
    fn create(self) -> Self::Handler;
}
