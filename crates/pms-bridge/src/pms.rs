//! Client for the Property Management System (PMS) API.
//!
//! The PMS integration is simulated: requests never leave the process, but
//! the client preserves the caller-visible contract of a real HTTP client —
//! latency, transient upstream failure, and not-found lookups all surface
//! exactly as [`ApiClient::get`](crate::ApiClient::get) would surface them.

use crate::seed::seed_bookings;
use crate::types::Booking;
use crate::Error;
use rand::Rng;
use std::time::Duration;
use tracing::{debug, warn};

/// Default probability that a simulated call fails with an upstream error.
pub const DEFAULT_FAILURE_RATE: f64 = 0.2;

/// Randomness and delay source for the simulated transport.
///
/// Injected at construction so tests can substitute deterministic values
/// instead of patching global state.
pub trait Simulation: Send + Sync {
    /// Duration the next call blocks for, simulating a network round-trip.
    fn latency(&self) -> Duration;

    /// A value in `[0, 1)` compared against the failure rate.
    fn roll(&self) -> f64;
}

/// Default [`Simulation`]: latency uniform in 100–300 ms, uniform rolls.
#[derive(Debug, Default)]
pub struct NetworkSimulation;

impl Simulation for NetworkSimulation {
    fn latency(&self) -> Duration {
        Duration::from_millis(rand::thread_rng().gen_range(100..=300))
    }

    fn roll(&self) -> f64 {
        rand::thread_rng().gen()
    }
}

/// Deterministic [`Simulation`] returning fixed values.
///
/// Intended for tests: a zero latency with a roll of `1.0` never fails,
/// a roll of `0.0` always fails.
#[derive(Debug, Clone)]
pub struct FixedSimulation {
    pub latency: Duration,
    pub roll: f64,
}

impl Simulation for FixedSimulation {
    fn latency(&self) -> Duration {
        self.latency
    }

    fn roll(&self) -> f64 {
        self.roll
    }
}

/// Client for the PMS bookings API.
///
/// Stateless between calls: every call draws its own latency and failure
/// roll, and the backing collection is read-only, so concurrent calls on
/// one instance interleave safely. No retries are made — a failure is
/// classified once and surfaced to the caller.
pub struct PmsClient {
    base_url: String,
    failure_rate: f64,
    simulation: Box<dyn Simulation>,
    bookings: Vec<Booking>,
}

impl PmsClient {
    /// Create a builder bound to the configured PMS base URL.
    pub fn builder(base_url: impl Into<String>) -> PmsClientBuilder {
        PmsClientBuilder {
            base_url: base_url.into(),
            failure_rate: DEFAULT_FAILURE_RATE,
            simulation: None,
        }
    }

    /// Get the normalized base URL this client is bound to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch all bookings, in the backing collection's fixed order.
    pub async fn fetch_bookings(&self) -> Result<Vec<Booking>, Error> {
        let value = self.get("/bookings/").await?;
        serde_json::from_value(value).map_err(decode_error)
    }

    /// Fetch a single booking by its identifier.
    ///
    /// Identifiers match by exact string equality; a miss surfaces as
    /// [`Error::NotFound`].
    pub async fn fetch_booking_by_id(&self, booking_id: &str) -> Result<Booking, Error> {
        let value = self.get(&format!("/bookings/{booking_id}/")).await?;
        serde_json::from_value(value).map_err(decode_error)
    }

    /// Simulated GET entry point, mirroring the wire contract of
    /// [`ApiClient::get`](crate::ApiClient::get).
    ///
    /// `/bookings/` returns the full collection as a JSON array,
    /// `/bookings/<id>/` returns one record as a JSON object, and any other
    /// path fails with a 400 [`Error::Response`].
    pub async fn get(&self, path: &str) -> Result<serde_json::Value, Error> {
        debug!(path = %path, "simulated PMS GET");

        self.simulate_round_trip().await?;

        if path == "/bookings/" {
            return serde_json::to_value(&self.bookings).map_err(decode_error);
        }

        if path.starts_with("/bookings/") {
            let booking_id = path
                .trim_end_matches('/')
                .rsplit('/')
                .next()
                .unwrap_or_default();
            return match self.bookings.iter().find(|b| b.id == booking_id) {
                Some(booking) => serde_json::to_value(booking).map_err(decode_error),
                None => Err(Error::NotFound(format!(
                    "Booking ID '{booking_id}' not found."
                ))),
            };
        }

        Err(Error::response(400, format!("Invalid endpoint: {path}")))
    }

    /// Block for the drawn latency, then roll for transient failure.
    async fn simulate_round_trip(&self) -> Result<(), Error> {
        tokio::time::sleep(self.simulation.latency()).await;

        if self.simulation.roll() < self.failure_rate {
            warn!(base_url = %self.base_url, "simulated PMS failure");
            return Err(Error::response(502, "Simulated PMS API failure."));
        }

        Ok(())
    }
}

fn decode_error(err: serde_json::Error) -> Error {
    Error::Connection(format!("PMS payload could not be decoded: {err}"))
}

/// Builder for [`PmsClient`].
pub struct PmsClientBuilder {
    base_url: String,
    failure_rate: f64,
    simulation: Option<Box<dyn Simulation>>,
}

impl PmsClientBuilder {
    /// Set the transient failure probability, a value in `[0, 1]`.
    pub fn failure_rate(mut self, rate: f64) -> Self {
        self.failure_rate = rate;
        self
    }

    /// Replace the default randomness/delay source.
    pub fn simulation(mut self, simulation: impl Simulation + 'static) -> Self {
        self.simulation = Some(Box::new(simulation));
        self
    }

    /// Build the client.
    pub fn build(self) -> PmsClient {
        PmsClient {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            failure_rate: self.failure_rate,
            simulation: self
                .simulation
                .unwrap_or_else(|| Box::new(NetworkSimulation)),
            bookings: seed_bookings(),
        }
    }
}
