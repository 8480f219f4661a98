//! Seed collection backing the simulated PMS.

use crate::types::{Booking, BookingStatus};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // The seed dates are compile-time constants and always valid.
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// The fixed, read-only booking collection the simulated PMS serves.
///
/// Identifiers are unique and the order is stable; list responses return
/// the records exactly in this order.
pub(crate) fn seed_bookings() -> Vec<Booking> {
    vec![
        Booking {
            id: "1001".into(),
            guest: "Alice Johnson".into(),
            check_in_date: date(2025, 6, 10),
            check_out_date: date(2025, 6, 15),
            room: Some("107".into()),
            booking_status: BookingStatus::Confirmed,
            total_price: Some(850.00),
        },
        Booking {
            id: "1002".into(),
            guest: "Bruno Keller".into(),
            check_in_date: date(2025, 6, 12),
            check_out_date: date(2025, 6, 14),
            room: Some("212".into()),
            booking_status: BookingStatus::Pending,
            total_price: Some(420.00),
        },
        Booking {
            id: "1003".into(),
            guest: "Chloe Martin".into(),
            check_in_date: date(2025, 6, 20),
            check_out_date: date(2025, 6, 22),
            room: None,
            booking_status: BookingStatus::Cancelled,
            total_price: None,
        },
        Booking {
            id: "1004".into(),
            guest: "Daniel Okafor".into(),
            check_in_date: date(2025, 7, 1),
            check_out_date: date(2025, 7, 8),
            room: Some("305".into()),
            booking_status: BookingStatus::Confirmed,
            total_price: Some(1290.00),
        },
        Booking {
            id: "1005".into(),
            guest: "Emma Larsen".into(),
            check_in_date: date(2025, 7, 3),
            check_out_date: date(2025, 7, 5),
            room: Some("118".into()),
            booking_status: BookingStatus::Pending,
            total_price: Some(380.00),
        },
    ]
}
