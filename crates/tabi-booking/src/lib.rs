//! tabi-booking: booking service integration for tabi-gateway
//!
//! Fetches user travel-survey answers. Callers treat this service as
//! best-effort; failures degrade to empty preferences.

pub mod client;
pub mod error;
pub mod models;

pub use client::BookingClient;
pub use error::{BookingError, Result};
pub use models::{BookingServiceConfig, Survey};
