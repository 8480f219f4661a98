//! Behavioral tests for the simulated PMS client.
//!
//! All tests inject a `FixedSimulation` so latency is zero and the failure
//! roll is deterministic.

use pms_bridge::{BookingStatus, Error, FixedSimulation, PmsClient};
use std::time::Duration;

const BASE_URL: &str = "https://pms.example.com";

fn client(roll: f64, failure_rate: f64) -> PmsClient {
    PmsClient::builder(BASE_URL)
        .failure_rate(failure_rate)
        .simulation(FixedSimulation {
            latency: Duration::ZERO,
            roll,
        })
        .build()
}

fn reliable_client() -> PmsClient {
    client(0.99, 0.0)
}

#[tokio::test]
async fn test_fetch_bookings_returns_full_collection_in_order() {
    let bookings = reliable_client().fetch_bookings().await.unwrap();

    assert_eq!(bookings.len(), 5);
    let ids: Vec<_> = bookings.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, ["1001", "1002", "1003", "1004", "1005"]);
}

#[tokio::test]
async fn test_fetch_booking_by_id_returns_matching_record() {
    let booking = reliable_client()
        .fetch_booking_by_id("1001")
        .await
        .unwrap();

    assert_eq!(booking.guest, "Alice Johnson");
    assert_eq!(booking.room.as_deref(), Some("107"));
    assert_eq!(booking.booking_status, BookingStatus::Confirmed);
    assert_eq!(booking.total_price, Some(850.00));
}

#[tokio::test]
async fn test_fetch_booking_by_id_unknown_id_is_not_found() {
    let err = reliable_client()
        .fetch_booking_by_id("9999")
        .await
        .unwrap_err();

    match err {
        Error::NotFound(message) => {
            assert!(message.contains("9999"), "message was {message:?}");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_not_found_maps_to_public_404() {
    let err = reliable_client()
        .fetch_booking_by_id("9999")
        .await
        .unwrap_err();
    assert_eq!(err.public_status(), 404);
}

#[tokio::test]
async fn test_forced_failure_always_yields_502() {
    let client = client(0.0, 1.0);

    for _ in 0..10 {
        let err = client.fetch_bookings().await.unwrap_err();
        match err {
            Error::Response {
                status_code,
                message,
            } => {
                assert_eq!(status_code, 502);
                assert_eq!(message, "Simulated PMS API failure.");
            }
            other => panic!("expected Response error, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_forced_failure_applies_to_detail_path() {
    let err = client(0.0, 1.0).fetch_booking_by_id("1001").await.unwrap_err();
    assert_eq!(err.status_code(), Some(502));
}

#[tokio::test]
async fn test_zero_failure_rate_always_succeeds() {
    let client = client(0.0, 0.0);

    for _ in 0..10 {
        assert!(client.fetch_bookings().await.is_ok());
    }
}

#[tokio::test]
async fn test_invalid_endpoint_yields_400_with_path() {
    let err = reliable_client()
        .get("/invalid/endpoint/")
        .await
        .unwrap_err();

    match err {
        Error::Response {
            status_code,
            message,
        } => {
            assert_eq!(status_code, 400);
            assert!(
                message.contains("/invalid/endpoint/"),
                "message was {message:?}"
            );
        }
        other => panic!("expected Response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_raw_get_list_returns_json_array() {
    let value = reliable_client().get("/bookings/").await.unwrap();

    let records = value.as_array().expect("list response is an array");
    assert_eq!(records.len(), 5);
    assert_eq!(records[0]["id"], "1001");
}

#[tokio::test]
async fn test_raw_get_detail_returns_json_object() {
    let value = reliable_client().get("/bookings/1002/").await.unwrap();

    assert_eq!(value["id"], "1002");
    assert_eq!(value["booking_status"], "pending");
}

#[tokio::test]
async fn test_detail_path_without_trailing_slash() {
    let value = reliable_client().get("/bookings/1001").await.unwrap();
    assert_eq!(value["guest"], "Alice Johnson");
}

#[tokio::test]
async fn test_latency_draw_blocks_the_call() {
    let client = PmsClient::builder(BASE_URL)
        .failure_rate(0.0)
        .simulation(FixedSimulation {
            latency: Duration::from_millis(50),
            roll: 0.99,
        })
        .build();

    let start = std::time::Instant::now();
    client.fetch_bookings().await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(50));
}

#[tokio::test]
async fn test_concurrent_calls_on_shared_client() {
    let client = std::sync::Arc::new(reliable_client());

    let mut handles = Vec::new();
    for _ in 0..8 {
        let c = client.clone();
        handles.push(tokio::spawn(async move { c.fetch_bookings().await }));
    }

    for handle in handles {
        let bookings = handle.await.unwrap().unwrap();
        assert_eq!(bookings.len(), 5);
    }
}
