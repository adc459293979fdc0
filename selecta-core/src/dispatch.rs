use crate::payload::Payload;

/// The single integration point tying payload to handler to result.
///
/// Implementors resolve a handler for the payload, invoke it and return its
/// output unchanged. Resolution failures are returned as-is; a dispatcher
/// never retries and never substitutes a different handler for an
/// unrecognized kind.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot dispatch payloads of type `{P}`",
    label = "missing `Dispatch` implementation",
    note = "Implement `Dispatch<{P}>` to route this payload to a handler."
)]
pub trait Dispatch<P: Payload>: Send + Sync {
    /// The handler result type.
    type Output;

    /// The error returned when no handler can be resolved.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Resolve a handler for `payload` and invoke it.
    fn dispatch(&self, payload: &P) -> Result<Self::Output, Self::Error>;
}
