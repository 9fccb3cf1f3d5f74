//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: read-only listing of the directory under inspection
//!
//! The use case depends on these traits only, never on a concrete adapter.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
