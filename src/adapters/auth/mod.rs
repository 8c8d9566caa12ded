//! Authentication adapters.
//!
//! Implementations of the `AuthSession` port:
//!
//! - `static_token` - a long-lived configured API token

mod static_token;

pub use static_token::StaticTokenSession;
