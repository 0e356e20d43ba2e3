//! Application layer orchestrating the domain rules over the stores.
//!
//! [`engine::HotelEngine`] is the single entry point used by the CLI. It
//! serializes every read-modify-write cycle behind one async mutex; the
//! reporting queries in `reports` only read.

pub mod engine;
pub mod reports;
