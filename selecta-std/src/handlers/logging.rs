//! Logging wrapper for handler invocations.

use selecta_core::{Handler, Kind, KindHandler, Payload};
use std::fmt::Debug;

/// A handler wrapper that logs every invocation.
///
/// With the `tracing` feature enabled, each call emits an `info` event
/// carrying the label and the payload. Without it, the wrapper only
/// delegates. The wrapper reports the same kind as the inner handler, so
/// it can be registered in place of it.
#[derive(Debug, Clone, Copy)]
pub struct LoggingHandler<H> {
    inner: H,
    label: &'static str,
}

impl<H> LoggingHandler<H> {
    /// Wrap `inner`, logging under `label`.
    pub const fn new(inner: H, label: &'static str) -> Self {
        Self { inner, label }
    }

    /// The label used in log events.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Get the wrapped handler.
    pub fn inner(&self) -> &H {
        &self.inner
    }
}

impl<P, H> Handler<P> for LoggingHandler<H>
where
    P: Payload + Debug,
    H: Handler<P>,
{
    type Output = H::Output;

    fn handle(&self, payload: &P) -> Self::Output {
        #[cfg(feature = "tracing")]
        {
            tracing::info!(handler = self.label, ?payload, "handling request");
        }
        self.inner.handle(payload)
    }
}

impl<K, P, H> KindHandler<K, P> for LoggingHandler<H>
where
    K: Kind,
    P: Payload + Debug,
    H: KindHandler<K, P>,
{
    fn kind(&self) -> K {
        self.inner.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::LoggingHandler;
    use selecta_core::{Handler, Keyed, Kind, KindHandler};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Case {
        Upper,
    }

    impl Kind for Case {
        const ALL: &'static [Self] = &[Case::Upper];

        fn name(&self) -> &'static str {
            "UPPER"
        }
    }

    #[test]
    fn test_logging_handler_passthrough() {
        let inner = Keyed::new(Case::Upper, |text: &String| text.to_uppercase());
        let handler = LoggingHandler::new(inner, "upper");

        assert_eq!(handler.label(), "upper");
        assert_eq!(KindHandler::<Case, String>::kind(&handler), Case::Upper);
        assert_eq!(handler.handle(&"quiet".to_string()), "QUIET");
    }
}
