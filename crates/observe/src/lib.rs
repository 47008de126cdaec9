//! This crate contains the initialization logic for the logging of the
//! binaries in this workspace.
pub mod panic_hook;
pub mod tracing;
