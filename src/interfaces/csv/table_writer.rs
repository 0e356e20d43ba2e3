use crate::domain::analytics::RoomAvailability;
use crate::domain::booking::Booking;
use crate::domain::customer::Customer;
use crate::domain::feedback::Feedback;
use crate::domain::room::Room;
use crate::domain::timestamp;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// Writes collections as CSV tables, one header row per table.
pub struct TableWriter<W: Write> {
    writer: csv::Writer<W>,
}

#[derive(Serialize)]
struct FeedbackRow<'a> {
    feedback_id: &'a str,
    date: String,
    customer_name: &'a str,
    customer_email: &'a str,
    booking_id: &'a str,
    rating: u8,
    service_areas: String,
    feedback: &'a str,
    suggestions: &'a str,
}

impl<'a> From<&'a Feedback> for FeedbackRow<'a> {
    fn from(f: &'a Feedback) -> Self {
        Self {
            feedback_id: &f.id,
            date: f.date.format(timestamp::FORMAT).to_string(),
            customer_name: &f.customer_name,
            customer_email: &f.customer_email,
            booking_id: f.booking_id.as_deref().unwrap_or_default(),
            rating: f.rating,
            service_areas: f
                .service_areas
                .iter()
                .map(|a| a.as_str())
                .collect::<Vec<_>>()
                .join("; "),
            feedback: &f.feedback,
            suggestions: &f.suggestions,
        }
    }
}

impl<W: Write> TableWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_rooms(&mut self, rooms: &[Room]) -> Result<()> {
        self.write_all(rooms)
    }

    pub fn write_bookings(&mut self, bookings: &[Booking]) -> Result<()> {
        self.write_all(bookings)
    }

    pub fn write_customers(&mut self, customers: &[Customer]) -> Result<()> {
        self.write_all(customers)
    }

    pub fn write_availability(&mut self, availability: &[RoomAvailability]) -> Result<()> {
        self.write_all(availability)
    }

    pub fn write_feedback(&mut self, feedback: &[Feedback]) -> Result<()> {
        let rows: Vec<FeedbackRow<'_>> = feedback.iter().map(FeedbackRow::from).collect();
        self.write_all(&rows)
    }

    fn write_all<T: Serialize>(&mut self, records: &[T]) -> Result<()> {
        for record in records {
            self.writer.serialize(record)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
