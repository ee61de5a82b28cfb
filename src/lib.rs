//! Grover search simulated with dense real matrices.
//!
//! The simulation lives in [`core`]; `cli`, `commands` and `config` back the
//! `grover` binary and are exported so integration tests can reach them.
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
