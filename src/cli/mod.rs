//! Command-line interface for the `adjg` tool.

pub mod commands;
