//! OmniWorld Core - Shared types library.
//!
//! This crate provides common types used across the OmniWorld portal:
//! - `storefront` - Public-facing multi-division site
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! HTTP, no templating. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for validated emails and phone numbers
//! - [`pricing`] - Display-currency conversion and formatting

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod pricing;
pub mod types;

pub use types::*;
