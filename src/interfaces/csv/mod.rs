pub mod booking_request_reader;
pub mod table_writer;
