//! Registry of self-reporting handlers.
//!
//! This module provides a builder for assembling handlers and a frozen
//! registry for immutable, thread-safe resolution.

use selecta_core::{BuildError, Kind, KindHandler, Payload, ResolveError};
use std::{fmt, sync::Arc};

/// A handler shared by the registry and every caller that resolved it.
pub type SharedHandler<K, P, O> = Arc<dyn KindHandler<K, P, Output = O>>;

/// What to do when two handlers report the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Fail the build with [`BuildError::DuplicateKind`] (default).
    #[default]
    Reject,
    /// Keep the first-registered handler and drop later ones.
    FirstWins,
}

// ============================================================================
// RegistryBuilder - for assembling registries
// ============================================================================

/// Builder for constructing a [`Registry`].
///
/// Register handlers, then call `.build()` to freeze them into an
/// immutable registry. Registration order carries no meaning unless
/// [`DuplicatePolicy::FirstWins`] is selected.
///
/// # Example
/// ```ignore
/// let registry = RegistryBuilder::new()
///     .register(EmailSender)
///     .register(SmsSender)
///     .require_complete()
///     .build()?;
/// ```
pub struct RegistryBuilder<K: Kind, P: Payload, O: 'static> {
    handlers: Vec<SharedHandler<K, P, O>>,
    duplicates: DuplicatePolicy,
    require_complete: bool,
}

impl<K, P, O> RegistryBuilder<K, P, O>
where
    K: Kind,
    P: Payload,
    O: 'static,
{
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            duplicates: DuplicatePolicy::default(),
            require_complete: false,
        }
    }

    /// Register a handler.
    pub fn register<H>(mut self, handler: H) -> Self
    where
        H: KindHandler<K, P, Output = O>,
    {
        self.register_mut(handler);
        self
    }

    /// Register a handler (mutable version).
    pub fn register_mut<H>(&mut self, handler: H)
    where
        H: KindHandler<K, P, Output = O>,
    {
        self.handlers.push(Arc::new(handler));
    }

    /// Register a handler that the caller keeps a handle to.
    pub fn register_shared(mut self, handler: SharedHandler<K, P, O>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Choose how duplicate kinds are treated at build time.
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    /// Fail the build unless every declared kind has a handler.
    pub fn require_complete(mut self) -> Self {
        self.require_complete = true;
        self
    }

    /// Get the number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if the builder has no handlers.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Build the immutable registry.
    ///
    /// Checks the one-handler-per-kind invariant according to the
    /// configured [`DuplicatePolicy`], then checks coverage of
    /// [`Kind::ALL`].
    pub fn build(self) -> Result<Registry<K, P, O>, BuildError> {
        let mut handlers: Vec<SharedHandler<K, P, O>> = Vec::with_capacity(self.handlers.len());

        for handler in self.handlers {
            let kind = handler.kind();
            if handlers.iter().any(|existing| existing.kind() == kind) {
                match self.duplicates {
                    DuplicatePolicy::Reject => {
                        return Err(BuildError::DuplicateKind(kind.name()));
                    }
                    DuplicatePolicy::FirstWins => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(kind = kind.name(), "dropping duplicate handler");
                        continue;
                    }
                }
            }
            handlers.push(handler);
        }

        let registry = Registry { handlers };

        let unhandled = registry.unhandled_kinds();
        if !unhandled.is_empty() {
            let names: Vec<&'static str> = unhandled.iter().map(Kind::name).collect();
            if self.require_complete {
                return Err(BuildError::Incomplete(names));
            }
            #[cfg(feature = "tracing")]
            tracing::warn!(kinds = ?names, "declared kinds have no handler");
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(handlers = registry.len(), "registry built");

        Ok(registry)
    }
}

impl<K, P, O> Default for RegistryBuilder<K, P, O>
where
    K: Kind,
    P: Payload,
    O: 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Registry - immutable, thread-safe handler storage
// ============================================================================

/// An immutable, thread-safe registry of handlers keyed by the kind they
/// report.
///
/// Created by calling [`RegistryBuilder::build`]. Holds at most one handler
/// per kind and is never mutated afterward, so it can be shared across
/// threads without locking.
///
/// # Example
/// ```ignore
/// let registry = Arc::new(registry);
///
/// match registry.dispatch(Channel::Sms, &request) {
///     Ok(message) => println!("{message}"),
///     Err(ResolveError::UnsupportedKind { kind }) => eprintln!("no handler for {kind}"),
/// }
/// ```
pub struct Registry<K: Kind, P: Payload, O: 'static> {
    handlers: Vec<SharedHandler<K, P, O>>,
}

impl<K, P, O> Registry<K, P, O>
where
    K: Kind,
    P: Payload,
    O: 'static,
{
    /// Start assembling a registry.
    pub fn builder() -> RegistryBuilder<K, P, O> {
        RegistryBuilder::new()
    }

    /// Find the handler that serves `kind`.
    ///
    /// Returns a reference to the registered handler itself, not a copy.
    pub fn resolve(&self, kind: K) -> Result<&dyn KindHandler<K, P, Output = O>, ResolveError> {
        match self.handlers.iter().find(|handler| handler.kind() == kind) {
            Some(handler) => Ok(&**handler),
            None => {
                #[cfg(feature = "tracing")]
                tracing::warn!(kind = kind.name(), "no handler registered for kind");
                Err(ResolveError::UnsupportedKind { kind: kind.name() })
            }
        }
    }

    /// Resolve the handler for `kind` and invoke it with `payload`.
    ///
    /// No handler runs when resolution fails.
    pub fn dispatch(&self, kind: K, payload: &P) -> Result<O, ResolveError> {
        let handler = self.resolve(kind)?;
        Ok(handler.handle(payload))
    }

    /// Check whether a handler serves `kind`.
    pub fn contains(&self, kind: K) -> bool {
        self.handlers.iter().any(|handler| handler.kind() == kind)
    }

    /// Iterate over the served kinds in registration order.
    pub fn kinds(&self) -> impl Iterator<Item = K> + '_ {
        self.handlers.iter().map(|handler| handler.kind())
    }

    /// Declared kinds that no registered handler serves, in declaration order.
    pub fn unhandled_kinds(&self) -> Vec<K> {
        K::ALL
            .iter()
            .copied()
            .filter(|kind| !self.contains(*kind))
            .collect()
    }

    /// Get the number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<K, P, O> fmt::Debug for Registry<K, P, O>
where
    K: Kind,
    P: Payload,
    O: 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("kinds", &self.kinds().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{DuplicatePolicy, Registry, RegistryBuilder, SharedHandler};
    use selecta_core::{BuildError, Keyed, Kind, Payload, ResolveError};
    use std::sync::Arc;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Op {
        Add,
        Sub,
        Mul,
    }

    impl Kind for Op {
        const ALL: &'static [Self] = &[Op::Add, Op::Sub, Op::Mul];

        fn name(&self) -> &'static str {
            match self {
                Op::Add => "ADD",
                Op::Sub => "SUB",
                Op::Mul => "MUL",
            }
        }
    }

    #[derive(Debug)]
    struct Pair(i64, i64);

    impl Payload for Pair {}

    fn add(pair: &Pair) -> i64 {
        pair.0 + pair.1
    }

    fn sub(pair: &Pair) -> i64 {
        pair.0 - pair.1
    }

    fn builder() -> RegistryBuilder<Op, Pair, i64> {
        RegistryBuilder::new()
            .register(Keyed::new(Op::Add, add))
            .register(Keyed::new(Op::Sub, sub))
    }

    #[test]
    fn test_resolves_each_registered_kind() {
        let registry = builder().build().unwrap();

        assert_eq!(registry.dispatch(Op::Add, &Pair(7, 3)), Ok(10));
        assert_eq!(registry.dispatch(Op::Sub, &Pair(7, 3)), Ok(4));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_missing_kind_is_unsupported() {
        let registry = builder().build().unwrap();

        let err = registry.dispatch(Op::Mul, &Pair(7, 3)).unwrap_err();
        assert_eq!(err, ResolveError::UnsupportedKind { kind: "MUL" });
        assert!(registry.resolve(Op::Mul).is_err());
    }

    #[test]
    fn test_resolve_returns_registered_instance() {
        let shared: SharedHandler<Op, Pair, i64> = Arc::new(Keyed::new(Op::Add, add));
        let registry = Registry::builder()
            .register_shared(shared.clone())
            .build()
            .unwrap();

        let resolved = registry.resolve(Op::Add).unwrap();
        assert!(std::ptr::addr_eq(resolved, Arc::as_ptr(&shared)));
    }

    #[test]
    fn test_duplicate_kind_rejected_by_default() {
        let result = builder().register(Keyed::new(Op::Add, sub)).build();

        assert_eq!(result.unwrap_err(), BuildError::DuplicateKind("ADD"));
    }

    #[test]
    fn test_duplicate_kind_first_wins() {
        let registry = builder()
            .register(Keyed::new(Op::Add, sub))
            .duplicate_policy(DuplicatePolicy::FirstWins)
            .build()
            .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.dispatch(Op::Add, &Pair(7, 3)), Ok(10));
    }

    #[test]
    fn test_require_complete() {
        let result = builder().require_complete().build();
        assert_eq!(result.unwrap_err(), BuildError::Incomplete(vec!["MUL"]));

        let registry = builder()
            .register(Keyed::new(Op::Mul, |pair: &Pair| pair.0 * pair.1))
            .require_complete()
            .build()
            .unwrap();
        assert_eq!(registry.dispatch(Op::Mul, &Pair(7, 3)), Ok(21));
    }

    #[test]
    fn test_introspection() {
        let registry = builder().build().unwrap();

        assert_eq!(registry.kinds().collect::<Vec<_>>(), vec![Op::Add, Op::Sub]);
        assert!(registry.contains(Op::Sub));
        assert!(!registry.contains(Op::Mul));
        assert_eq!(registry.unhandled_kinds(), vec![Op::Mul]);
    }

    #[test]
    fn test_empty_registry_resolves_nothing() {
        let registry: Registry<Op, Pair, i64> = RegistryBuilder::new().build().unwrap();

        assert!(registry.is_empty());
        for kind in Op::ALL {
            assert!(registry.resolve(*kind).is_err());
        }
    }
}
