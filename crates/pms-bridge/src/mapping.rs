//! Mapping from raw PMS booking fields to the public response shape.
//!
//! An explicit struct-to-struct mapping plus a validation pass. The
//! presentation layer owns routing and status codes; this module only
//! supplies the mapped shape and its field-level errors.

use crate::types::{Booking, BookingStatus};
use chrono::NaiveDate;
use serde::Serialize;

/// A booking in the public response shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingView {
    pub booking_id: String,
    pub guest_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
    pub status: BookingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

/// A validation failure on one field of a [`BookingView`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Map a raw PMS booking to the public response shape.
pub fn map_booking(booking: &Booking) -> BookingView {
    BookingView {
        booking_id: booking.id.clone(),
        guest_name: booking.guest.clone(),
        check_in: booking.check_in_date,
        check_out: booking.check_out_date,
        room_number: booking.room.clone(),
        status: booking.booking_status,
        amount: booking.total_price,
    }
}

/// Validate a mapped booking, returning every field-level error found.
///
/// An empty vec means the view is valid.
pub fn validate(view: &BookingView) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if view.booking_id.is_empty() {
        errors.push(FieldError {
            field: "booking_id",
            message: "booking identifier must not be empty".to_string(),
        });
    }

    if view.guest_name.is_empty() {
        errors.push(FieldError {
            field: "guest_name",
            message: "guest name must not be empty".to_string(),
        });
    }

    if view.check_out < view.check_in {
        errors.push(FieldError {
            field: "check_out",
            message: format!(
                "check-out {} precedes check-in {}",
                view.check_out, view.check_in
            ),
        });
    }

    if let Some(amount) = view.amount {
        if amount < 0.0 {
            errors.push(FieldError {
                field: "amount",
                message: format!("amount must be non-negative, got {amount}"),
            });
        }
    }

    errors
}
