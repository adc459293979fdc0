//! # Two-Factor Authentication (Closed Form)
//!
//! The set of second factors is fixed, so every [`TwoFactorKind`] member
//! builds its authenticator through an exhaustive `match`
//! ([`HandlerFactory`]). A request without a kind is served by the default
//! member, [`TwoFactorKind::Email`].
//!
//! Registration and login sit on top of that: both look up or store a
//! [`UserRecord`] through a [`UserStore`] and then let the resolved
//! authenticator answer.
//!
//! [`HandlerFactory`]: crate::HandlerFactory

mod authenticators;
mod endpoint;
mod request;
mod service;
mod store;

pub use authenticators::{
    EmailAuthenticator, PasskeyAuthenticator, SmsAuthenticator, TwoFactorAuthenticator,
};
pub use endpoint::AuthEndpoint;
pub use request::{LoginRequest, RegisterRequest};
pub use service::{LoginService, RegisterService};
pub use store::{InMemoryUserStore, UserRecord, UserStore};

use crate::Kind;
use serde::{Deserialize, Serialize};

/// The second factor a user authenticates with.
#[derive(Kind, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TwoFactorKind {
    /// Platform passkey.
    Passkey,
    /// Code sent by email. Used when a request names no kind.
    #[default]
    Email,
    /// Code sent by SMS.
    Sms,
}
