//! PIN Activator CLI
//!
//! Interactive front end, one-shot activation and a local mock of the
//! southbound system.

pub mod args;
pub mod commands;
pub mod config;
pub mod mock;
pub mod output;
pub mod prompt;
