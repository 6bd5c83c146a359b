//! Core types for the OmniWorld portal.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod phone;

pub use email::{Email, EmailError};
pub use phone::{Phone, PhoneError};
