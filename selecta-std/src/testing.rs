//! Testing utilities for Selecta.
//!
//! This module provides handler doubles that make it easy to verify which
//! handler a registry picked, and that nothing ran when resolution failed.
//!
//! # Features
//!
//! - [`RecordingHandler`]: records every payload it receives
//! - [`CountingHandler`]: counts invocations without looking at payloads

use selecta_core::{Handler, Kind, KindHandler, Payload};
use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recording Handler
// ============================================================================

/// A handler that records every payload it receives and answers with a
/// fixed reply.
///
/// Clones share the same recording, so keep one clone for assertions and
/// register the other.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingHandler::new(Channel::Sms, "sent".to_string());
/// let registry = RegistryBuilder::new().register(recorder.clone()).build()?;
///
/// registry.dispatch(Channel::Sms, &request)?;
/// assert_eq!(recorder.payloads(), vec![request]);
/// ```
pub struct RecordingHandler<K, P, O> {
    kind: K,
    reply: O,
    payloads: Arc<Mutex<Vec<P>>>,
}

impl<K, P, O> RecordingHandler<K, P, O> {
    /// Create a recorder serving `kind` that answers every call with `reply`.
    pub fn new(kind: K, reply: O) -> Self {
        Self {
            kind,
            reply,
            payloads: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a clone of the recorded payloads.
    pub fn payloads(&self) -> Vec<P>
    where
        P: Clone,
    {
        self.payloads
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Get the number of recorded calls.
    pub fn call_count(&self) -> usize {
        self.payloads
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl<K: Clone, P, O: Clone> Clone for RecordingHandler<K, P, O> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind.clone(),
            reply: self.reply.clone(),
            payloads: Arc::clone(&self.payloads),
        }
    }
}

impl<K, P, O> Handler<P> for RecordingHandler<K, P, O>
where
    K: Send + Sync + 'static,
    P: Payload + Clone,
    O: Clone + Send + Sync + 'static,
{
    type Output = O;

    fn handle(&self, payload: &P) -> O {
        self.payloads
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(payload.clone());
        self.reply.clone()
    }
}

impl<K, P, O> KindHandler<K, P> for RecordingHandler<K, P, O>
where
    K: Kind,
    P: Payload + Clone,
    O: Clone + Send + Sync + 'static,
{
    fn kind(&self) -> K {
        self.kind
    }
}

// ============================================================================
// Counting Handler
// ============================================================================

/// A handler that counts its invocations and answers with a fixed reply.
#[derive(Clone)]
pub struct CountingHandler<K, O> {
    kind: K,
    reply: O,
    calls: Arc<AtomicUsize>,
}

impl<K, O> CountingHandler<K, O> {
    /// Create a counter serving `kind` that answers every call with `reply`.
    pub fn new(kind: K, reply: O) -> Self {
        Self {
            kind,
            reply,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the number of invocations so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<K, P, O> Handler<P> for CountingHandler<K, O>
where
    K: Send + Sync + 'static,
    P: Payload,
    O: Clone + Send + Sync + 'static,
{
    type Output = O;

    fn handle(&self, _payload: &P) -> O {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone()
    }
}

impl<K, P, O> KindHandler<K, P> for CountingHandler<K, O>
where
    K: Kind,
    P: Payload,
    O: Clone + Send + Sync + 'static,
{
    fn kind(&self) -> K {
        self.kind
    }
}
