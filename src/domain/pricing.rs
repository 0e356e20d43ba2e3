//! Booking price computation.
//!
//! All arithmetic is done in `Decimal` so discounts never introduce binary
//! floating point error; the result is rounded once, at the end.

use super::room::RoomType;
use super::validation::ValidationError;
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Guests included in the nightly rate.
pub const INCLUDED_GUESTS: u32 = 2;
/// Surcharge per additional guest per night.
pub const EXTRA_GUEST_RATE: Decimal = dec!(500);
/// Rate used when a room type label is not recognised.
pub const DEFAULT_BASE_PRICE: Decimal = dec!(2500);

/// A strictly positive number of nights.
///
/// `compute_price` only accepts this type, so a zero or negative stay has to
/// be rejected by whoever builds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Nights(u32);

impl Nights {
    pub fn new(nights: u32) -> Result<Self, ValidationError> {
        if nights > 0 {
            Ok(Self(nights))
        } else {
            Err(ValidationError::InvalidStayDates)
        }
    }

    /// Nights between check-in and check-out. Check-out must be later.
    pub fn between(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, ValidationError> {
        let days = (check_out - check_in).num_days();
        u32::try_from(days)
            .map_err(|_| ValidationError::InvalidStayDates)
            .and_then(Self::new)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

/// Long-stay discount rate for the given length of stay.
pub fn discount_rate(nights: Nights) -> Decimal {
    match nights.get() {
        n if n >= 7 => dec!(0.15),
        n if n >= 3 => dec!(0.10),
        _ => Decimal::ZERO,
    }
}

pub fn extra_guest_charge(nights: Nights, guests: u32) -> Decimal {
    let extra = guests.saturating_sub(INCLUDED_GUESTS);
    Decimal::from(extra) * EXTRA_GUEST_RATE * Decimal::from(nights.get())
}

/// Total amount for a stay, rounded to 2 decimal places (half away from zero).
pub fn compute_price(room_type: RoomType, nights: Nights, guests: u32) -> Decimal {
    price_with_base(room_type.base_price(), nights, guests)
}

/// Same as [`compute_price`] but keyed by a free-form room type label.
/// Unknown labels are charged at [`DEFAULT_BASE_PRICE`].
pub fn quote_by_label(room_type: &str, nights: Nights, guests: u32) -> Decimal {
    let base = room_type
        .parse::<RoomType>()
        .map(RoomType::base_price)
        .unwrap_or(DEFAULT_BASE_PRICE);
    price_with_base(base, nights, guests)
}

fn price_with_base(base_price: Decimal, nights: Nights, guests: u32) -> Decimal {
    let subtotal = base_price * Decimal::from(nights.get()) + extra_guest_charge(nights, guests);
    let total = subtotal * (Decimal::ONE - discount_rate(nights));
    total.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
