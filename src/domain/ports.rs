use super::booking::Booking;
use super::customer::Customer;
use super::feedback::Feedback;
use super::room::Room;
use crate::error::Result;
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;

/// The persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Rooms,
    Bookings,
    Customers,
    Feedback,
}

impl Collection {
    pub fn name(self) -> &'static str {
        match self {
            Collection::Rooms => "rooms",
            Collection::Bookings => "bookings",
            Collection::Customers => "customers",
            Collection::Feedback => "feedback",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A record type stored as one whole collection.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const COLLECTION: Collection;
}

impl Record for Room {
    const COLLECTION: Collection = Collection::Rooms;
}

impl Record for Booking {
    const COLLECTION: Collection = Collection::Bookings;
}

impl Record for Customer {
    const COLLECTION: Collection = Collection::Customers;
}

impl Record for Feedback {
    const COLLECTION: Collection = Collection::Feedback;
}

/// Whole-collection persistence: every save replaces what was there.
#[async_trait]
pub trait CollectionStore<T: Record>: Send + Sync {
    /// Returns the stored records, or an empty list if nothing was saved yet.
    async fn load(&self) -> Result<Vec<T>>;
    async fn save(&self, records: &[T]) -> Result<()>;
}

pub type CollectionStoreBox<T> = Box<dyn CollectionStore<T>>;
pub type RoomStoreBox = CollectionStoreBox<Room>;
pub type BookingStoreBox = CollectionStoreBox<Booking>;
pub type CustomerStoreBox = CollectionStoreBox<Customer>;
pub type FeedbackStoreBox = CollectionStoreBox<Feedback>;

/// The four collections an engine works against.
pub struct Stores {
    pub rooms: RoomStoreBox,
    pub bookings: BookingStoreBox,
    pub customers: CustomerStoreBox,
    pub feedback: FeedbackStoreBox,
}

impl Stores {
    /// Uses one backend for every collection.
    pub fn from_backend<S>(backend: S) -> Self
    where
        S: CollectionStore<Room>
            + CollectionStore<Booking>
            + CollectionStore<Customer>
            + CollectionStore<Feedback>
            + Clone
            + 'static,
    {
        Self {
            rooms: Box::new(backend.clone()),
            bookings: Box::new(backend.clone()),
            customers: Box::new(backend.clone()),
            feedback: Box::new(backend),
        }
    }
}
