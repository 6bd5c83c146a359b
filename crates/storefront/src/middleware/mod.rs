//! HTTP middleware stack for the storefront.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. `TraceLayer` (request tracing)
//! 2. Security headers (CSP, frame and sniffing protection)

pub mod security_headers;

pub use security_headers::security_headers_middleware;
