//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`verify`]: one verification pass of the output directory
//!
//! Use cases depend on the domain and the ports, never on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod verify;

pub use verify::{VerificationPlan, VerifyOutputs};
