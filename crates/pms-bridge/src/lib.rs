//! Resilient client layer for third-party Property Management System APIs.
//!
//! [`ApiClient`] executes GET requests against a real HTTP service and
//! classifies every failure into the four-kind [`Error`] taxonomy.
//! [`PmsClient`] exposes the same contract over a simulated PMS backend,
//! with injectable latency and failure behavior for deterministic tests.
//!
//! # Example
//!
//! ```rust,no_run
//! use pms_bridge::PmsClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), pms_bridge::Error> {
//!     let client = PmsClient::builder("https://pms.example.com").build();
//!
//!     for booking in client.fetch_bookings().await? {
//!         println!("{} — {}", booking.id, booking.guest);
//!     }
//!
//!     let booking = client.fetch_booking_by_id("1001").await?;
//!     println!("guest: {}", booking.guest);
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
pub mod mapping;
mod pms;
mod seed;
mod types;

pub use client::ApiClient;
pub use config::{Config, DEFAULT_TIMEOUT};
pub use error::Error;
pub use pms::{
    FixedSimulation, NetworkSimulation, PmsClient, PmsClientBuilder, Simulation,
    DEFAULT_FAILURE_RATE,
};
pub use types::{Booking, BookingStatus};
