//! Core value types for the workshop console.
//!
//! This module provides type-safe wrappers for identifiers and staff emails.

pub mod email;
pub mod id;

pub use email::{Email, EmailError};
pub use id::*;
