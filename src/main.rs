use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use hotel_desk::application::engine::HotelEngine;
use hotel_desk::config::{AppConfig, LogFormat};
use hotel_desk::domain::analytics::AnalyticsFilter;
use hotel_desk::domain::booking::{BookingRequest, IdProof};
use hotel_desk::domain::feedback::{FeedbackRequest, ServiceArea};
use hotel_desk::domain::room::{RoomStatus, RoomType};
use hotel_desk::interfaces::csv::booking_request_reader::BookingRequestReader;
use hotel_desk::interfaces::csv::table_writer::TableWriter;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Front-desk tool for rooms, bookings and guest feedback",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    config: AppConfig,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Seed the room inventory if none is stored yet
    Init,
    /// List rooms as CSV
    Rooms {
        /// Only rooms that can be booked right now
        #[arg(long)]
        available: bool,
    },
    /// Change the status of a room
    RoomStatus { number: String, status: RoomStatus },
    /// Free rooms per room type, as CSV
    Availability,
    /// Price a stay without booking it
    Quote {
        #[arg(long)]
        room_type: String,
        #[arg(long)]
        check_in: NaiveDate,
        #[arg(long)]
        check_out: NaiveDate,
        #[arg(long, default_value_t = 2)]
        guests: u32,
    },
    /// Book the first free room of a type
    Book(BookArgs),
    /// Book every request in a CSV file
    Import {
        /// Input booking requests CSV file
        input: PathBuf,
    },
    /// List bookings as CSV
    Bookings,
    /// List customers as CSV
    Customers,
    /// Guest feedback
    #[command(subcommand)]
    Feedback(FeedbackCommand),
    /// Headline metrics as JSON
    Dashboard,
    /// Booking and satisfaction analytics as JSON
    Analytics {
        /// Earliest check-in date to include
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Latest check-in date to include
        #[arg(long)]
        to: Option<NaiveDate>,
        /// Restrict to these room types (repeatable)
        #[arg(long = "room-type")]
        room_types: Vec<RoomType>,
    },
}

#[derive(Args)]
struct BookArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    phone: String,
    #[arg(long, default_value = "")]
    address: String,
    #[arg(long)]
    id_proof: Option<IdProof>,
    #[arg(long, default_value = "")]
    id_number: String,
    #[arg(long)]
    room_type: RoomType,
    #[arg(long, default_value_t = 2)]
    guests: u32,
    #[arg(long)]
    check_in: NaiveDate,
    #[arg(long)]
    check_out: NaiveDate,
    #[arg(long, default_value = "")]
    special_requests: String,
}

impl From<BookArgs> for BookingRequest {
    fn from(args: BookArgs) -> Self {
        Self {
            customer_name: args.name,
            customer_email: args.email,
            customer_phone: args.phone,
            customer_address: args.address,
            id_proof: args.id_proof,
            id_number: args.id_number,
            room_type: args.room_type,
            guests: args.guests,
            check_in: args.check_in,
            check_out: args.check_out,
            special_requests: args.special_requests,
        }
    }
}

#[derive(Subcommand)]
enum FeedbackCommand {
    /// Record guest feedback
    Submit {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        booking_id: Option<String>,
        #[arg(long, default_value_t = 5)]
        rating: u8,
        /// Service areas being rated (repeatable)
        #[arg(long = "service-area")]
        service_areas: Vec<ServiceArea>,
        #[arg(long)]
        text: String,
        #[arg(long, default_value = "")]
        suggestions: String,
    },
    /// Most recent feedback as CSV
    List {
        #[arg(long, default_value_t = 3)]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.config.log_format);

    let engine = cli.config.engine();
    engine.initialize().await?;
    run(&engine, cli.command).await
}

async fn run(engine: &HotelEngine, command: Command) -> Result<()> {
    let stdout = io::stdout();
    match command {
        Command::Init => {
            let rooms = engine.rooms().await?;
            println!("{} rooms on record", rooms.len());
        }
        Command::Rooms { available } => {
            let mut rooms = engine.rooms().await?;
            if available {
                rooms.retain(|r| r.is_available());
            }
            TableWriter::new(stdout.lock()).write_rooms(&rooms)?;
        }
        Command::RoomStatus { number, status } => {
            let room = engine.update_room_status(&number, status).await?;
            println!("Room {} status updated to {}", room.number, room.status);
        }
        Command::Availability => {
            let availability = engine.availability().await?;
            TableWriter::new(stdout.lock()).write_availability(&availability)?;
        }
        Command::Quote {
            room_type,
            check_in,
            check_out,
            guests,
        } => {
            let total = engine.quote(&room_type, check_in, check_out, guests)?;
            let nights = (check_out - check_in).num_days();
            println!("Total Amount: {total:.2} for {nights} night(s)");
        }
        Command::Book(args) => {
            let booking = engine.submit_booking(args.into()).await?;
            println!(
                "Booking confirmed! Booking ID: {} (room {}, {} night(s), total {:.2})",
                booking.id, booking.room_number, booking.nights, booking.total_amount
            );
        }
        Command::Import { input } => {
            let file = File::open(input).into_diagnostic()?;
            let reader = BookingRequestReader::new(file);
            let (mut booked, mut failed) = (0usize, 0usize);
            for (line, request) in reader.requests()? {
                let result = match request {
                    Ok(request) => engine.submit_booking(request).await,
                    Err(e) => Err(e),
                };
                match result {
                    Ok(booking) => {
                        booked += 1;
                        println!("{},{},{}", booking.id, booking.room_number, booking.total_amount);
                    }
                    Err(e) => {
                        failed += 1;
                        tracing::error!("Error processing booking request on line {line}: {e}");
                    }
                }
            }
            tracing::info!(booked, failed, "import finished");
        }
        Command::Bookings => {
            let bookings = engine.bookings().await?;
            TableWriter::new(stdout.lock()).write_bookings(&bookings)?;
        }
        Command::Customers => {
            let customers = engine.customers().await?;
            TableWriter::new(stdout.lock()).write_customers(&customers)?;
        }
        Command::Feedback(FeedbackCommand::Submit {
            name,
            email,
            booking_id,
            rating,
            service_areas,
            text,
            suggestions,
        }) => {
            let entry = engine
                .submit_feedback(FeedbackRequest {
                    customer_name: name,
                    customer_email: email,
                    booking_id,
                    rating,
                    service_areas,
                    feedback: text,
                    suggestions,
                })
                .await?;
            println!("Thank you for your feedback! Reference: {}", entry.id);
        }
        Command::Feedback(FeedbackCommand::List { limit }) => {
            let entries = engine.recent_feedback(limit).await?;
            TableWriter::new(stdout.lock()).write_feedback(&entries)?;
        }
        Command::Dashboard => {
            let dashboard = engine.dashboard().await?;
            serde_json::to_writer_pretty(stdout.lock(), &dashboard).into_diagnostic()?;
            println!();
        }
        Command::Analytics {
            from,
            to,
            room_types,
        } => {
            let filter = AnalyticsFilter {
                from,
                to,
                room_types,
            };
            match engine.analytics(&filter).await? {
                Some(report) => {
                    serde_json::to_writer_pretty(stdout.lock(), &report).into_diagnostic()?;
                    println!();
                }
                None => tracing::warn!("No booking data available for the selected filters."),
            }
        }
    }
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(io::stderr)
                    .with_ansi(io::stderr().is_terminal()),
            )
            .init(),
    }
}
