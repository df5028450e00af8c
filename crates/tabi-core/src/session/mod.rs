//! Session management module
//!
//! In-memory conversation history per (user, city) pair. Process-lifetime
//! only; idle sessions are dropped by a per-key expiry timer.

mod store;
mod types;

pub use store::SessionStore;
pub use types::{Session, SessionKey};
