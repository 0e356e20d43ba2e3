use chrono::NaiveDate;
use hotel_desk::domain::booking::BookingRequest;
use hotel_desk::domain::room::RoomType;
use std::fs::File;
use std::io::Error;
use std::path::Path;

pub const HEADER: [&str; 11] = [
    "customer_name",
    "customer_email",
    "customer_phone",
    "customer_address",
    "id_proof",
    "id_number",
    "room_type",
    "guests",
    "check_in",
    "check_out",
    "special_requests",
];

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn booking_request(email: &str, room_type: RoomType) -> BookingRequest {
    BookingRequest {
        customer_name: "Test Guest".to_string(),
        customer_email: email.to_string(),
        customer_phone: "9876543210".to_string(),
        customer_address: String::new(),
        id_proof: None,
        id_number: String::new(),
        room_type,
        guests: 2,
        check_in: date(2025, 6, 1),
        check_out: date(2025, 6, 3),
        special_requests: String::new(),
    }
}

/// Writes `rows` one-night Standard requests, each from a different guest.
pub fn generate_requests_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(HEADER)?;

    for i in 1..=rows {
        let email = format!("guest{i}@example.com");
        wtr.write_record([
            "Guest",
            &email,
            "9876543210",
            "",
            "",
            "",
            "Standard",
            "2",
            "2025-07-01",
            "2025-07-02",
            "",
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
