//! Open-form resolution.
//!
//! Handlers are built up front, handed to a [`RegistryBuilder`] and frozen
//! into a [`Registry`]. Each handler reports the kind it serves; resolution
//! scans the collection for a match and fails when none exists. Use this
//! form when the handler set is assembled at startup rather than spelled
//! out in a `match`.

pub mod registry;

pub use registry::{DuplicatePolicy, Registry, RegistryBuilder, SharedHandler};
