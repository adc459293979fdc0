//! # selecta-std
//!
//! Standard implementations for the Selecta dispatch framework.
//!
//! This crate provides:
//! - **Closed-form resolution**: [`ClosedRegistry`], [`enum_handler!`] macro
//! - **Open-form resolution**: [`Registry`], [`RegistryBuilder`]
//! - **Standard handlers**: [`LoggingHandler`]
//! - **Testing doubles**: [`testing`]
//!
//! [`ClosedRegistry`]: closed::ClosedRegistry
//! [`Registry`]: open::Registry
//! [`RegistryBuilder`]: open::RegistryBuilder
//! [`LoggingHandler`]: handlers::LoggingHandler

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use selecta_core;

// Modules
pub mod closed;
pub mod handlers;
pub mod open;
pub mod testing;
