use super::customer::{self, Customer};
use super::pricing::{self, Nights};
use super::room::{Room, RoomStatus, RoomType};
use super::timestamp;
use super::validation::{self, ValidationError};
use crate::error::{HotelError, Result};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Guest count bounds accepted at the front desk.
pub const MIN_GUESTS: u32 = 1;
pub const MAX_GUESTS: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdProof {
    #[serde(rename = "Aadhar Card")]
    AadharCard,
    #[serde(rename = "PAN Card")]
    PanCard,
    #[serde(rename = "Driving License")]
    DrivingLicense,
    Passport,
}

impl IdProof {
    pub fn as_str(self) -> &'static str {
        match self {
            IdProof::AadharCard => "Aadhar Card",
            IdProof::PanCard => "PAN Card",
            IdProof::DrivingLicense => "Driving License",
            IdProof::Passport => "Passport",
        }
    }
}

impl fmt::Display for IdProof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdProof {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().replace(['-', '_'], " ");
        [
            IdProof::AadharCard,
            IdProof::PanCard,
            IdProof::DrivingLicense,
            IdProof::Passport,
        ]
        .into_iter()
        .find(|p| p.as_str().eq_ignore_ascii_case(&wanted))
        .ok_or_else(|| format!("unknown ID proof '{s}'"))
    }
}

pub fn check_guest_count(guests: u32) -> std::result::Result<(), ValidationError> {
    if (MIN_GUESTS..=MAX_GUESTS).contains(&guests) {
        Ok(())
    } else {
        Err(ValidationError::GuestCount {
            min: MIN_GUESTS,
            max: MAX_GUESTS,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BookingStatus {
    #[default]
    Confirmed,
}

/// What a guest asks for at the front desk.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookingRequest {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    #[serde(default)]
    pub customer_address: String,
    #[serde(default)]
    pub id_proof: Option<IdProof>,
    #[serde(default)]
    pub id_number: String,
    pub room_type: RoomType,
    pub guests: u32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(default)]
    pub special_requests: String,
}

impl BookingRequest {
    /// Runs every check and returns all failures, or the length of stay.
    pub fn validate(&self) -> std::result::Result<Nights, Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.customer_name.trim().is_empty() {
            errors.push(ValidationError::MissingName);
        }
        if self.customer_email.trim().is_empty()
            || !validation::is_valid_email(&self.customer_email)
        {
            errors.push(ValidationError::InvalidEmail);
        }
        if self.customer_phone.trim().is_empty()
            || !validation::is_valid_phone(&self.customer_phone)
        {
            errors.push(ValidationError::InvalidPhone);
        }
        let nights = Nights::between(self.check_in, self.check_out);
        if let Err(e) = &nights {
            errors.push(e.clone());
        }
        if let Err(e) = check_guest_count(self.guests) {
            errors.push(e);
        }

        match nights {
            Ok(nights) if errors.is_empty() => Ok(nights),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(rename = "booking_id")]
    pub id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    #[serde(default)]
    pub customer_address: String,
    #[serde(default)]
    pub id_proof: Option<IdProof>,
    #[serde(default)]
    pub id_number: String,
    pub room_number: String,
    pub room_type: RoomType,
    pub guests: u32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: u32,
    pub total_amount: Decimal,
    #[serde(default)]
    pub special_requests: String,
    #[serde(with = "timestamp")]
    pub booking_date: NaiveDateTime,
    #[serde(default)]
    pub status: BookingStatus,
}

pub fn new_booking_id() -> String {
    format!("BK-{}", uuid::Uuid::new_v4().simple())
}

/// Result of a successful booking against in-memory snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingOutcome {
    pub booking: Booking,
    /// Whether a new customer record was appended.
    pub customer_created: bool,
}

/// Books the first free room of the requested type.
///
/// Mutates the snapshots only on success: the booking is appended, the
/// chosen room is flipped to `Occupied` and, for an unknown email, a customer
/// is registered. On failure all three slices are left untouched.
pub fn submit_booking(
    request: &BookingRequest,
    rooms: &mut [Room],
    bookings: &mut Vec<Booking>,
    customers: &mut Vec<Customer>,
    id: String,
    now: NaiveDateTime,
) -> Result<BookingOutcome> {
    let nights = request.validate().map_err(HotelError::Validation)?;
    let total_amount = pricing::compute_price(request.room_type, nights, request.guests);

    let room = rooms
        .iter_mut()
        .find(|r| r.room_type == request.room_type && r.is_available())
        .ok_or(HotelError::NoRoomAvailable(request.room_type))?;

    let booking = Booking {
        id,
        customer_name: request.customer_name.clone(),
        customer_email: request.customer_email.clone(),
        customer_phone: request.customer_phone.clone(),
        customer_address: request.customer_address.clone(),
        id_proof: request.id_proof,
        id_number: request.id_number.clone(),
        room_number: room.number.clone(),
        room_type: request.room_type,
        guests: request.guests,
        check_in: request.check_in,
        check_out: request.check_out,
        nights: nights.get(),
        total_amount,
        special_requests: request.special_requests.clone(),
        booking_date: now,
        status: BookingStatus::Confirmed,
    };

    bookings.push(booking.clone());
    room.status = RoomStatus::Occupied;
    let customer_created = customer::register_if_new(
        customers,
        Customer {
            name: request.customer_name.clone(),
            email: request.customer_email.clone(),
            phone: request.customer_phone.clone(),
            address: request.customer_address.clone(),
            registration_date: now,
        },
    );

    Ok(BookingOutcome {
        booking,
        customer_created,
    })
}
