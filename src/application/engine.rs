use crate::config::StoragePolicy;
use crate::domain::analytics::{self, RoomAvailability};
use crate::domain::booking::{self, Booking, BookingRequest};
use crate::domain::customer::Customer;
use crate::domain::feedback::{self, Feedback, FeedbackRequest};
use crate::domain::ports::{CollectionStoreBox, Record, Stores};
use crate::domain::pricing::{self, Nights};
use crate::domain::room::{self, Room, RoomStatus};
use crate::domain::timestamp;
use crate::error::{HotelError, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tokio::sync::Mutex;

/// A collection read at the start of an update.
struct Snapshot<T> {
    records: Vec<T>,
    /// The read failed and `records` is an empty stand-in.
    unreadable: bool,
}

/// The main entry point for front-desk operations.
///
/// `HotelEngine` owns the collection stores. Every operation that reads a
/// collection, changes it and writes it back runs while holding `write_lock`,
/// so two bookings can never both claim the last free room of a type.
/// Read-only queries do not take the lock.
pub struct HotelEngine {
    pub(crate) stores: Stores,
    policy: StoragePolicy,
    write_lock: Mutex<()>,
}

impl HotelEngine {
    /// Creates an engine that fails fast on storage errors.
    pub fn new(stores: Stores) -> Self {
        Self::with_policy(stores, StoragePolicy::FailFast)
    }

    pub fn with_policy(stores: Stores, policy: StoragePolicy) -> Self {
        Self {
            stores,
            policy,
            write_lock: Mutex::new(()),
        }
    }

    /// Writes the seed inventory if no rooms are stored yet.
    ///
    /// Safe to call on every start. Returns `true` if rooms were seeded. A rooms
    /// collection that cannot be read is never overwritten, whatever the policy.
    pub async fn initialize(&self) -> Result<bool> {
        let _guard = self.write_lock.lock().await;
        let rooms = match self.stores.rooms.load().await {
            Ok(rooms) => rooms,
            Err(e) if self.policy == StoragePolicy::Degrade => {
                tracing::warn!(error = %e, "rooms unreadable, skipping seed");
                return Ok(false);
            }
            Err(e) => return Err(e),
        };
        if !rooms.is_empty() {
            return Ok(false);
        }

        let seed = room::seed_rooms();
        self.save(&self.stores.rooms, &seed).await?;
        tracing::info!(rooms = seed.len(), "seeded room inventory");
        Ok(true)
    }

    pub async fn rooms(&self) -> Result<Vec<Room>> {
        self.load(&self.stores.rooms).await
    }

    pub async fn bookings(&self) -> Result<Vec<Booking>> {
        self.load(&self.stores.bookings).await
    }

    pub async fn customers(&self) -> Result<Vec<Customer>> {
        self.load(&self.stores.customers).await
    }

    pub async fn availability(&self) -> Result<Vec<RoomAvailability>> {
        Ok(analytics::room_availability(&self.rooms().await?))
    }

    /// Sets a room's status by hand (cleaning, maintenance, check-out).
    pub async fn update_room_status(&self, number: &str, status: RoomStatus) -> Result<Room> {
        let _guard = self.write_lock.lock().await;
        let mut rooms = self.load_for_update(&self.stores.rooms).await?;
        let room = rooms
            .records
            .iter_mut()
            .find(|r| r.number == number)
            .ok_or_else(|| HotelError::RoomNotFound(number.to_string()))?;
        let previous = room.status;
        room.status = status;
        let updated = room.clone();

        self.store_back(&self.stores.rooms, &rooms).await?;
        tracing::info!(room = number, from = %previous, to = %status, "room status updated");
        Ok(updated)
    }

    /// Price preview for a stay. Unknown room type labels use the standard rate.
    ///
    /// Rejects the same stay lengths and guest counts a booking would.
    pub fn quote(
        &self,
        room_type: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
        guests: u32,
    ) -> Result<Decimal> {
        match (
            Nights::between(check_in, check_out),
            booking::check_guest_count(guests),
        ) {
            (Ok(nights), Ok(())) => Ok(pricing::quote_by_label(room_type, nights, guests)),
            (nights_check, guests_check) => Err(HotelError::Validation(
                nights_check.err().into_iter().chain(guests_check.err()).collect(),
            )),
        }
    }

    /// Validates the request, assigns a room and records the booking.
    ///
    /// Bookings, rooms and (for a new email) customers are written one after
    /// the other; the writes are not transactional. A collection that could
    /// not be read is never written back.
    pub async fn submit_booking(&self, request: BookingRequest) -> Result<Booking> {
        let _guard = self.write_lock.lock().await;
        let mut rooms = self.load_for_update(&self.stores.rooms).await?;
        let mut bookings = self.load_for_update(&self.stores.bookings).await?;
        let mut customers = self.load_for_update(&self.stores.customers).await?;

        let outcome = booking::submit_booking(
            &request,
            &mut rooms.records,
            &mut bookings.records,
            &mut customers.records,
            booking::new_booking_id(),
            timestamp::now(),
        )
        .inspect_err(|e| {
            tracing::warn!(email = %request.customer_email, error = %e, "booking rejected")
        })?;

        self.store_back(&self.stores.bookings, &bookings).await?;
        self.store_back(&self.stores.rooms, &rooms).await?;
        if outcome.customer_created {
            self.store_back(&self.stores.customers, &customers).await?;
        }

        let booking = outcome.booking;
        tracing::info!(
            booking_id = %booking.id,
            room = %booking.room_number,
            nights = booking.nights,
            amount = %booking.total_amount,
            new_customer = outcome.customer_created,
            "booking confirmed"
        );
        Ok(booking)
    }

    pub async fn submit_feedback(&self, request: FeedbackRequest) -> Result<Feedback> {
        request.validate().map_err(HotelError::invalid)?;

        let _guard = self.write_lock.lock().await;
        let mut entries = self.load_for_update(&self.stores.feedback).await?;
        let entry = request.into_feedback(feedback::new_feedback_id(), timestamp::now());
        entries.records.push(entry.clone());
        self.store_back(&self.stores.feedback, &entries).await?;

        tracing::info!(feedback_id = %entry.id, rating = entry.rating, "feedback recorded");
        Ok(entry)
    }

    pub async fn feedback(&self) -> Result<Vec<Feedback>> {
        self.load(&self.stores.feedback).await
    }

    /// Newest feedback first.
    pub async fn recent_feedback(&self, limit: usize) -> Result<Vec<Feedback>> {
        let mut entries = self.feedback().await?;
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries.truncate(limit);
        Ok(entries)
    }

    pub(crate) async fn load<T: Record>(&self, store: &CollectionStoreBox<T>) -> Result<Vec<T>> {
        Ok(self.load_for_update(store).await?.records)
    }

    async fn load_for_update<T: Record>(
        &self,
        store: &CollectionStoreBox<T>,
    ) -> Result<Snapshot<T>> {
        match store.load().await {
            Ok(records) => Ok(Snapshot {
                records,
                unreadable: false,
            }),
            Err(e) if self.policy == StoragePolicy::Degrade => {
                tracing::warn!(error = %e, "continuing with an empty {} collection", T::COLLECTION);
                Ok(Snapshot {
                    records: Vec::new(),
                    unreadable: true,
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Saves a snapshot unless it stands in for a collection that could not be
    /// read; writing it would replace the stored records with a partial list.
    async fn store_back<T: Record>(
        &self,
        store: &CollectionStoreBox<T>,
        snapshot: &Snapshot<T>,
    ) -> Result<()> {
        if snapshot.unreadable {
            tracing::warn!("{} collection was unreadable, leaving it untouched", T::COLLECTION);
            return Ok(());
        }
        self.save(store, &snapshot.records).await
    }

    async fn save<T: Record>(&self, store: &CollectionStoreBox<T>, records: &[T]) -> Result<()> {
        match store.save(records).await {
            Ok(()) => Ok(()),
            Err(e) if self.policy == StoragePolicy::Degrade => {
                tracing::warn!(error = %e, "{} changes were not persisted", T::COLLECTION);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
