//! Hotel domain: records, pricing and the rules that tie a booking to a room.
//!
//! Everything here is synchronous and free of I/O; persistence is reached
//! only through the [`ports`] traits.

pub mod analytics;
pub mod booking;
pub mod customer;
pub mod feedback;
pub mod ports;
pub mod pricing;
pub mod room;
pub mod timestamp;
pub mod validation;
