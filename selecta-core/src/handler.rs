//! # Handlers
//!
//! A handler performs exactly one stateless action for its kind and returns
//! a result. It receives the whole request payload and may ignore the
//! fields that don't concern it.
//!
//! # Usage Patterns
//!
//! 1. **Struct implementation**: `impl Handler<MyRequest> for MySender`
//! 2. **Direct closure**: `|request: &MyRequest| format!("...")`
//! 3. **Keyed closure**: `Keyed::new(MyKind::Sms, |request: &MyRequest| ...)`
//!    for registering a closure with the open registry.

use crate::{kind::Kind, payload::Payload};

/// A stateless unit of behavior for one kind of request.
///
/// Handlers must not retain per-call state: the same instance is shared by
/// every caller of a registry, possibly from many threads at once.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle payloads of type `{P}`",
    label = "missing `Handler<{P}>` implementation",
    note = "Handlers must implement the `handle` method for the payload type `{P}`."
)]
pub trait Handler<P: Payload>: Send + Sync + 'static {
    /// The result produced for every request.
    type Output;

    /// Executes the handler logic.
    fn handle(&self, payload: &P) -> Self::Output;
}

// Blanket impl for closures
impl<F, P, O> Handler<P> for F
where
    P: Payload,
    F: Fn(&P) -> O + Send + Sync + 'static,
{
    type Output = O;

    fn handle(&self, payload: &P) -> Self::Output {
        (self)(payload)
    }
}

/// A handler that reports the single kind it serves.
///
/// This is what the open registry scans: the first handler whose
/// [`kind`](KindHandler::kind) equals the requested discriminator wins.
/// The reported kind must not change over the handler's lifetime.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not serve a kind of `{K}`",
    label = "missing `KindHandler<{K}, {P}>` implementation",
    note = "Implement `kind` to report which `{K}` member this handler serves, or wrap it in `Keyed`."
)]
pub trait KindHandler<K: Kind, P: Payload>: Handler<P> {
    /// The kind this handler serves.
    fn kind(&self) -> K;
}

/// Binds a plain handler (often a closure) to a kind.
#[derive(Debug, Clone, Copy)]
pub struct Keyed<K, H> {
    kind: K,
    handler: H,
}

impl<K, H> Keyed<K, H> {
    /// Bind `handler` to `kind`.
    pub const fn new(kind: K, handler: H) -> Self {
        Self { kind, handler }
    }

    /// Get the wrapped handler.
    pub fn inner(&self) -> &H {
        &self.handler
    }

    /// Unwrap the handler.
    pub fn into_inner(self) -> H {
        self.handler
    }
}

impl<K, P, H> Handler<P> for Keyed<K, H>
where
    K: Kind,
    P: Payload,
    H: Handler<P>,
{
    type Output = H::Output;

    fn handle(&self, payload: &P) -> Self::Output {
        self.handler.handle(payload)
    }
}

impl<K, P, H> KindHandler<K, P> for Keyed<K, H>
where
    K: Kind,
    P: Payload,
    H: Handler<P>,
{
    fn kind(&self) -> K {
        self.kind
    }
}
