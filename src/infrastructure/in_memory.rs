use crate::domain::booking::Booking;
use crate::domain::customer::Customer;
use crate::domain::feedback::Feedback;
use crate::domain::ports::CollectionStore;
use crate::domain::room::Room;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory backend for all four collections.
///
/// Clones share the same underlying data, so one instance can be handed to
/// [`Stores::from_backend`](crate::domain::ports::Stores::from_backend) and
/// inspected afterwards. Nothing survives the process.
#[derive(Default, Clone)]
pub struct InMemoryStore {
    rooms: Arc<RwLock<Vec<Room>>>,
    bookings: Arc<RwLock<Vec<Booking>>>,
    customers: Arc<RwLock<Vec<Customer>>>,
    feedback: Arc<RwLock<Vec<Feedback>>>,
}

impl InMemoryStore {
    /// Creates a new, empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with the given room inventory.
    pub fn with_rooms(rooms: Vec<Room>) -> Self {
        Self {
            rooms: Arc::new(RwLock::new(rooms)),
            ..Self::default()
        }
    }
}

macro_rules! in_memory_collection {
    ($record:ty, $field:ident) => {
        #[async_trait]
        impl CollectionStore<$record> for InMemoryStore {
            async fn load(&self) -> Result<Vec<$record>> {
                Ok(self.$field.read().await.clone())
            }

            async fn save(&self, records: &[$record]) -> Result<()> {
                *self.$field.write().await = records.to_vec();
                Ok(())
            }
        }
    };
}

in_memory_collection!(Room, rooms);
in_memory_collection!(Booking, bookings);
in_memory_collection!(Customer, customers);
in_memory_collection!(Feedback, feedback);
