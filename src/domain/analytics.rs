//! Read-only aggregations over stored collections.

use super::booking::Booking;
use super::feedback::{Feedback, ServiceArea};
use super::room::{Room, RoomStatus, RoomType};
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::collections::BTreeMap;

/// How many bookings the dashboard lists as recent.
pub const RECENT_BOOKINGS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomAvailability {
    pub room_type: RoomType,
    pub available: usize,
    pub price: Decimal,
    pub capacity: u32,
}

/// Free rooms per type, for types with at least one free room.
///
/// Price and capacity come from the first free room of each type.
pub fn room_availability(rooms: &[Room]) -> Vec<RoomAvailability> {
    let mut by_type: BTreeMap<RoomType, RoomAvailability> = BTreeMap::new();
    for room in rooms.iter().filter(|r| r.is_available()) {
        by_type
            .entry(room.room_type)
            .and_modify(|a| a.available += 1)
            .or_insert(RoomAvailability {
                room_type: room.room_type,
                available: 1,
                price: room.price,
                capacity: room.capacity,
            });
    }
    by_type.into_values().collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub total_bookings: usize,
    pub total_revenue: Decimal,
    /// Percentage of rooms currently occupied.
    pub occupancy_rate: f64,
    pub total_customers: usize,
    pub rooms_by_status: BTreeMap<RoomStatus, usize>,
    pub bookings_by_room_type: BTreeMap<RoomType, usize>,
    /// Revenue keyed by check-in month (`YYYY-MM`).
    pub monthly_revenue: BTreeMap<String, Decimal>,
    pub recent_bookings: Vec<Booking>,
}

pub fn dashboard(rooms: &[Room], bookings: &[Booking], total_customers: usize) -> Dashboard {
    let occupied = rooms
        .iter()
        .filter(|r| r.status == RoomStatus::Occupied)
        .count();
    let occupancy_rate = if rooms.is_empty() {
        0.0
    } else {
        occupied as f64 / rooms.len() as f64 * 100.0
    };

    let mut monthly_revenue = BTreeMap::new();
    for booking in bookings {
        *monthly_revenue
            .entry(booking.check_in.format("%Y-%m").to_string())
            .or_insert(Decimal::ZERO) += booking.total_amount;
    }

    let mut recent_bookings = bookings.to_vec();
    recent_bookings.sort_by(|a, b| b.booking_date.cmp(&a.booking_date));
    recent_bookings.truncate(RECENT_BOOKINGS);

    Dashboard {
        total_bookings: bookings.len(),
        total_revenue: bookings.iter().map(|b| b.total_amount).sum(),
        occupancy_rate,
        total_customers,
        rooms_by_status: count_by(rooms.iter().map(|r| r.status)),
        bookings_by_room_type: count_by(bookings.iter().map(|b| b.room_type)),
        monthly_revenue,
        recent_bookings,
    }
}

/// Which bookings an analytics report covers.
///
/// Date bounds apply to the check-in date and are inclusive. Unset bounds
/// default to the earliest/latest check-in on record; an empty room type
/// list means every type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyticsFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub room_types: Vec<RoomType>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analytics {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub total_bookings: usize,
    pub total_revenue: Decimal,
    pub average_booking_value: Decimal,
    pub average_nights: f64,
    pub daily_revenue: BTreeMap<NaiveDate, Decimal>,
    pub bookings_by_room_type: BTreeMap<RoomType, usize>,
    pub guest_distribution: BTreeMap<u32, usize>,
    pub stay_durations: BTreeMap<u32, usize>,
    pub satisfaction: Option<Satisfaction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Satisfaction {
    pub responses: usize,
    pub average_rating: f64,
    pub rating_distribution: BTreeMap<u8, usize>,
    pub service_areas: BTreeMap<ServiceArea, usize>,
}

/// Returns `None` when there are no bookings or none match the filter.
pub fn analytics(
    bookings: &[Booking],
    feedback: &[Feedback],
    filter: &AnalyticsFilter,
) -> Option<Analytics> {
    let earliest = bookings.iter().map(|b| b.check_in).min()?;
    let latest = bookings.iter().map(|b| b.check_in).max()?;
    let from = filter.from.unwrap_or(earliest);
    let to = filter.to.unwrap_or(latest);

    let selected: Vec<&Booking> = bookings
        .iter()
        .filter(|b| b.check_in >= from && b.check_in <= to)
        .filter(|b| filter.room_types.is_empty() || filter.room_types.contains(&b.room_type))
        .collect();
    if selected.is_empty() {
        return None;
    }

    let count = selected.len();
    let total_revenue: Decimal = selected.iter().map(|b| b.total_amount).sum();
    let total_nights: u64 = selected.iter().map(|b| u64::from(b.nights)).sum();

    let mut daily_revenue = BTreeMap::new();
    for booking in &selected {
        *daily_revenue
            .entry(booking.check_in)
            .or_insert(Decimal::ZERO) += booking.total_amount;
    }

    Some(Analytics {
        from,
        to,
        total_bookings: count,
        total_revenue,
        average_booking_value: (total_revenue / Decimal::from(count))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        average_nights: total_nights as f64 / count as f64,
        daily_revenue,
        bookings_by_room_type: count_by(selected.iter().map(|b| b.room_type)),
        guest_distribution: count_by(selected.iter().map(|b| b.guests)),
        stay_durations: count_by(selected.iter().map(|b| b.nights)),
        satisfaction: satisfaction(feedback),
    })
}

/// Rating summary across all feedback, or `None` if there is none.
pub fn satisfaction(feedback: &[Feedback]) -> Option<Satisfaction> {
    if feedback.is_empty() {
        return None;
    }
    let rating_sum: u32 = feedback.iter().map(|f| u32::from(f.rating)).sum();
    Some(Satisfaction {
        responses: feedback.len(),
        average_rating: f64::from(rating_sum) / feedback.len() as f64,
        rating_distribution: count_by(feedback.iter().map(|f| f.rating)),
        service_areas: count_by(feedback.iter().flat_map(|f| f.service_areas.iter().copied())),
    })
}

fn count_by<K: Ord>(keys: impl Iterator<Item = K>) -> BTreeMap<K, usize> {
    let mut counts = BTreeMap::new();
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}
