//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - REST adapters for the petition backend
//! - `auth` - auth session implementations
//! - `mock` - in-memory test doubles for every backend port

pub mod auth;
pub mod http;
pub mod mock;
