//! # selecta-core
//!
//! Core traits for the Selecta kind-keyed dispatch framework.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! handler crates that don't need the registries in `selecta-std`.
//!
//! # Building Blocks
//!
//! Selecta resolves a request to exactly one handler by looking at a
//! discriminator value, the request's *kind*.
//!
//! ## Discriminator ([`Kind`])
//!
//! A closed enumeration known at compile time. Every member has a stable
//! wire name and the full member list is available as [`Kind::ALL`].
//!
//! ## Handler ([`Handler`], [`KindHandler`])
//!
//! A stateless unit of behavior. It receives the full request payload by
//! reference and always produces an output. Handlers used with the open
//! registry also report the single kind they serve through [`KindHandler`].
//!
//! ## Resolution
//!
//! Two strategies exist, and they differ in their error model:
//!
//! - **Closed form** ([`HandlerFactory`]): the kind enum itself maps every
//!   member to a freshly constructed handler through an exhaustive `match`.
//!   Resolution is total. An absent kind falls back to the enum's
//!   `Default` member.
//! - **Open form**: handlers are registered up front and scanned at call
//!   time. Resolution is partial and fails with
//!   [`ResolveError::UnsupportedKind`].
//!
//! ## Entry Point ([`Dispatch`])
//!
//! The caller-facing contract: payload in, handler result out.
//!
//! # Error Types
//!
//! - [`ResolveError`] - Open-form resolution errors
//! - [`BuildError`] - Registry assembly errors
//! - [`ParseKindError`] - Unknown wire names

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod dispatch;
mod error;
mod factory;
mod handler;
mod kind;
mod payload;

// Re-exports
pub use dispatch::Dispatch;
pub use error::{BuildError, ParseKindError, ResolveError};
pub use factory::HandlerFactory;
pub use handler::{Handler, KindHandler, Keyed};
pub use kind::Kind;
pub use payload::Payload;
