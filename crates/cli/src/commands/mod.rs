//! Subcommand implementations.

pub mod check;
pub mod customers;
pub mod dashboard;
pub mod replay;
pub mod setup;
