//! Command implementations behind the `kanadrill` binary.

pub mod commands;
pub mod trace_init;
