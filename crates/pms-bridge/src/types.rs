//! Booking record types as the PMS wire format exposes them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Booking lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

/// A booking record in the raw shape returned by the PMS.
///
/// Identifiers are strings end-to-end; lookups use exact string equality
/// with no numeric coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub guest: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    pub booking_status: BookingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,
}
