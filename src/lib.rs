// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod args;
pub mod config;
pub mod presentation;
pub mod telemetry;
pub mod version;

pub use app::run;
pub use version::VERSION;
