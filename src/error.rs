use crate::domain::ports::Collection;
use crate::domain::room::RoomType;
use crate::domain::validation::ValidationError;
use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HotelError>;

#[derive(Error, Diagnostic, Debug)]
pub enum HotelError {
    #[error("{}", join_errors(.0))]
    #[diagnostic(code(hotel::validation))]
    Validation(Vec<ValidationError>),

    #[error("No {0} room is available")]
    #[diagnostic(
        code(hotel::availability),
        help("check `hotel-desk availability` for room types with free rooms")
    )]
    NoRoomAvailable(RoomType),

    #[error("Room {0} not found")]
    #[diagnostic(code(hotel::room_not_found))]
    RoomNotFound(String),

    #[error("Storage error on {collection} collection: {source}")]
    #[diagnostic(code(hotel::storage))]
    Storage {
        collection: Collection,
        #[source]
        source: StorageError,
    },

    #[error("CSV error: {0}")]
    #[diagnostic(code(hotel::csv))]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    #[diagnostic(code(hotel::io))]
    Io(#[from] std::io::Error),
}

/// Failure reading or writing one persisted collection.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed data: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("background task failed: {0}")]
    Task(String),
}

impl HotelError {
    pub fn storage(collection: Collection, source: impl Into<StorageError>) -> Self {
        Self::Storage {
            collection,
            source: source.into(),
        }
    }

    pub fn invalid(error: ValidationError) -> Self {
        Self::Validation(vec![error])
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
