//! Payload trait for request types.

/// A marker trait for request payloads handed to handlers.
///
/// Payloads must be `Send + Sync + 'static` so that one registry can serve
/// concurrent callers.
///
/// # Example
///
/// ```rust,ignore
/// struct SendRequest { to: String }
///
/// impl Payload for SendRequest {}
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Payload",
    label = "must be `Send + Sync + 'static`",
    note = "All payloads in Selecta must be thread-safe and static."
)]
pub trait Payload: Send + Sync + 'static {}

// Common Payload implementations
impl Payload for () {}
impl Payload for String {}
impl Payload for &'static str {}
impl<T: Payload> Payload for Box<T> {}
impl<T: Payload> Payload for std::sync::Arc<T> {}
impl<T: Payload> Payload for Vec<T> {}
impl<T: Payload> Payload for Option<T> {}
