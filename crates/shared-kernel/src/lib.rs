// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{DomainError, DomainResult, InfrastructureError, Result, VerifyError};

pub mod error;
pub mod value_objects;

pub use value_objects::{FileMode, FileSize, ModificationTime};
