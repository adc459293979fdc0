//! Closed-form resolution.
//!
//! The kind enumeration is fixed at compile time and every member maps to a
//! handler through [`HandlerFactory::create`]. Resolution is a pure function:
//! no handler collection is stored, nothing can be missing, and a fresh
//! handler value is built on every call.
//!
//! Handler sets for this form are usually a tagged union of the concrete
//! handlers, generated with [`enum_handler!`](crate::enum_handler).

use selecta_core::{Handler, HandlerFactory, Payload};
use std::{fmt, marker::PhantomData};

/// A stateless registry that resolves kinds by exhaustive construction.
///
/// # Example
///
/// ```rust,ignore
/// let registry = ClosedRegistry::<Channel>::new();
///
/// // Absent kind: the enum's `Default` member is used.
/// let message = registry.dispatch(None, &request);
/// ```
pub struct ClosedRegistry<K> {
    _phantom: PhantomData<fn() -> K>,
}

impl<K> ClosedRegistry<K> {
    /// Create a new closed registry.
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<K: HandlerFactory> ClosedRegistry<K> {
    /// The kind substituted for an absent discriminator.
    pub fn default_kind(&self) -> K {
        K::default()
    }

    /// Construct the handler for `kind`, or for the default kind when
    /// `kind` is `None`.
    pub fn resolve(&self, kind: Option<K>) -> K::Handler {
        let kind = match kind {
            Some(kind) => kind,
            None => {
                let fallback = K::default();
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    kind = selecta_core::Kind::name(&fallback),
                    "no kind requested, using default"
                );
                fallback
            }
        };
        kind.create()
    }

    /// Resolve a handler and invoke it with `payload`.
    pub fn dispatch<P>(&self, kind: Option<K>, payload: &P) -> <K::Handler as Handler<P>>::Output
    where
        P: Payload,
        K::Handler: Handler<P>,
    {
        self.resolve(kind).handle(payload)
    }
}

impl<K> Default for ClosedRegistry<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Clone for ClosedRegistry<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for ClosedRegistry<K> {}

impl<K> fmt::Debug for ClosedRegistry<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClosedRegistry")
            .field("kind", &std::any::type_name::<K>())
            .finish()
    }
}

/// Define a tagged union of handlers that is itself a handler.
///
/// Each variant wraps one concrete handler. The generated enum gets a
/// `From` impl per variant and a [`Handler`] impl that delegates through an
/// exhaustive `match`, so no vtable is involved.
///
/// # Example
///
/// ```rust,ignore
/// enum_handler! {
///     /// Every channel handler.
///     #[derive(Debug, Clone, Copy)]
///     pub enum ChannelHandler<Request, Output = String> {
///         Email(EmailHandler),
///         Sms(SmsHandler),
///     }
/// }
/// ```
#[macro_export]
macro_rules! enum_handler {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident<$payload:ty, Output = $output:ty> {
            $($variant:ident($inner:ty)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                #[allow(missing_docs)]
                $variant($inner),
            )+
        }

        $(
            impl ::core::convert::From<$inner> for $name {
                fn from(handler: $inner) -> Self {
                    $name::$variant(handler)
                }
            }
        )+

        impl $crate::selecta_core::Handler<$payload> for $name {
            type Output = $output;

            fn handle(&self, payload: &$payload) -> $output {
                match self {
                    $(
                        $name::$variant(handler) => {
                            $crate::selecta_core::Handler::<$payload>::handle(handler, payload)
                        }
                    )+
                }
            }
        }
    };
}
