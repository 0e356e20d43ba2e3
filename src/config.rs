use crate::application::engine::HotelEngine;
use crate::domain::ports::Stores;
use crate::infrastructure::json_file::JsonFileStore;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// What to do when a collection cannot be read or written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StoragePolicy {
    /// Abort the operation and report the error.
    #[default]
    FailFast,
    /// Log the error, treat unreadable collections as empty and keep going.
    Degrade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Runtime settings, taken from flags or `HOTEL_*` environment variables.
#[derive(Debug, Clone, Args)]
pub struct AppConfig {
    /// Directory holding rooms.json, bookings.json, customers.json and feedback.json
    #[arg(long, env = "HOTEL_DATA_DIR", default_value = "hotel_data", global = true)]
    pub data_dir: PathBuf,

    /// Behaviour when a data file cannot be read or written
    #[arg(
        long,
        env = "HOTEL_STORAGE_POLICY",
        value_enum,
        default_value_t = StoragePolicy::FailFast,
        global = true
    )]
    pub storage_policy: StoragePolicy,

    /// Log output format (logs go to stderr)
    #[arg(
        long,
        env = "HOTEL_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Text,
        global = true
    )]
    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn stores(&self) -> Stores {
        Stores::from_backend(JsonFileStore::open(&self.data_dir))
    }

    /// Builds an engine over the JSON files in `data_dir`.
    pub fn engine(&self) -> HotelEngine {
        HotelEngine::with_policy(self.stores(), self.storage_policy)
    }
}
