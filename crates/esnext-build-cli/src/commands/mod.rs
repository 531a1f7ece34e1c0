//! Command implementations.
//!
//! The binary has a single action, [`generate`]: load the spec, compile it
//! and emit the configs.

pub mod generate;

pub use generate::{execute as generate_execute, GenerateOptions};
