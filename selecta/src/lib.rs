//! # selecta - Kind-Keyed Handler Dispatch
//!
//! `selecta` resolves a request to exactly one handler by looking at the
//! request's *kind*, an enumerated discriminator. Two resolution strategies
//! are offered and they carry different error models:
//!
//! | Strategy | Type | Resolution | Missing kind |
//! |----------|------|------------|--------------|
//! | Closed form | [`ClosedRegistry`] | exhaustive `match`, fresh handler per call | impossible; absent kind uses the `Default` member |
//! | Open form | [`Registry`] | scan of handlers registered at startup | [`ResolveError::UnsupportedKind`] |
//!
//! Adding a kind never touches dispatch logic: the closed form gains a
//! `match` arm (the compiler insists), the open form gains a registration.
//!
//! ## Quick Start (Open Form)
//!
//! ```rust,ignore
//! use selecta::notification::{NotificationEndpoint, NotificationKind, NotificationRequest};
//!
//! let endpoint = NotificationEndpoint::with_default_senders()?;
//! let request = NotificationRequest::new(NotificationKind::Sms, "x@example.com");
//!
//! assert_eq!(endpoint.send(&request)?, "Sms notification sent to x@example.com");
//! ```
//!
//! ## Quick Start (Closed Form)
//!
//! ```rust,ignore
//! use selecta::auth::{AuthEndpoint, InMemoryUserStore, RegisterRequest};
//!
//! let endpoint = AuthEndpoint::new(Arc::new(InMemoryUserStore::new()));
//! // No two-factor kind given: the default (EMAIL) handler answers.
//! let message = endpoint.register(&RegisterRequest::new("ada", "pw", "ada@example.com", "555", None));
//! assert_eq!(message, "User authenticating via Email...");
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Lets `#[derive(Kind)]` refer to `::selecta` from inside this crate.
extern crate self as selecta;

pub use selecta_core::{
    // Error types
    BuildError,
    // Entry point
    Dispatch,
    // Handler
    Handler,
    HandlerFactory,
    Keyed,
    // Discriminator
    Kind,
    KindHandler,
    ParseKindError,
    // Payload
    Payload,
    ResolveError,
};

pub use selecta_macros::Kind;

// Closed Form
pub use selecta_std::{closed::ClosedRegistry, enum_handler};

// Open Form
pub use selecta_std::open::{DuplicatePolicy, Registry, RegistryBuilder, SharedHandler};

pub mod auth;
pub mod endpoint;
pub mod notification;

/// Standard handler wrappers.
pub mod handlers {
    pub use selecta_std::handlers::LoggingHandler;
}

/// Testing utilities.
pub mod testing {
    pub use selecta_std::testing::{CountingHandler, RecordingHandler};
}

/// Prelude module - common imports for Selecta.
///
/// # Usage
///
/// ```rust,ignore
/// use selecta::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        ClosedRegistry, Dispatch, Handler, HandlerFactory, Keyed, Kind, KindHandler, Payload,
        Registry, RegistryBuilder, ResolveError,
    };
}
