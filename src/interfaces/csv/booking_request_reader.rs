use crate::domain::booking::BookingRequest;
use crate::error::{HotelError, Result};
use std::io::Read;

/// Reads booking requests from a CSV source.
///
/// Expected header: `customer_name, customer_email, customer_phone,
/// customer_address, id_proof, id_number, room_type, guests, check_in,
/// check_out, special_requests`. The address, ID and special request columns
/// may be omitted or left blank.
pub struct BookingRequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> BookingRequestReader<R> {
    /// Creates a new `BookingRequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes requests.
    ///
    /// Each item carries the line the record starts on, counting the header as
    /// line 1. A malformed row yields an error for that row only; the following
    /// rows are still read.
    pub fn requests(mut self) -> Result<impl Iterator<Item = (u64, Result<BookingRequest>)>> {
        let headers = self.reader.headers()?.clone();
        Ok(self.reader.into_records().map(move |record| match record {
            Ok(record) => {
                let line = record.position().map_or(0, csv::Position::line);
                let request = record
                    .deserialize::<BookingRequest>(Some(&headers))
                    .map_err(HotelError::from);
                (line, request)
            }
            Err(e) => (
                e.position().map_or(0, csv::Position::line),
                Err(HotelError::from(e)),
            ),
        }))
    }
}
