mod common;

use hotel_desk::application::engine::HotelEngine;
use hotel_desk::domain::ports::Stores;
use hotel_desk::domain::room::{RoomStatus, RoomType};
use hotel_desk::error::HotelError;
use hotel_desk::infrastructure::in_memory::InMemoryStore;
use hotel_desk::infrastructure::json_file::JsonFileStore;
use std::sync::Arc;

async fn race_for_presidential(engine: Arc<HotelEngine>, contenders: usize) {
    engine.initialize().await.unwrap();

    let handles: Vec<_> = (0..contenders)
        .map(|i| {
            let engine = Arc::clone(&engine);
            tokio::spawn(async move {
                let email = format!("guest{i}@example.com");
                let request = common::booking_request(&email, RoomType::Presidential);
                engine.submit_booking(request).await
            })
        })
        .collect();

    let mut booked = 0;
    let mut sold_out = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(booking) => {
                assert_eq!(booking.room_number, "401");
                booked += 1;
            }
            Err(HotelError::NoRoomAvailable(RoomType::Presidential)) => sold_out += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(booked, 1);
    assert_eq!(sold_out, contenders - 1);

    let bookings = engine.bookings().await.unwrap();
    assert_eq!(bookings.len(), 1);
    let rooms = engine.rooms().await.unwrap();
    let occupied: Vec<_> = rooms
        .iter()
        .filter(|r| r.status == RoomStatus::Occupied)
        .collect();
    assert_eq!(occupied.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_last_room_is_booked_once_in_memory() {
    let engine = Arc::new(HotelEngine::new(Stores::from_backend(InMemoryStore::new())));
    race_for_presidential(engine, 2).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_last_room_is_booked_once_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let engine = Arc::new(HotelEngine::new(Stores::from_backend(JsonFileStore::open(
        dir.path(),
    ))));
    race_for_presidential(engine, 8).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_bookings_fill_distinct_rooms() {
    let engine = Arc::new(HotelEngine::new(Stores::from_backend(InMemoryStore::new())));
    engine.initialize().await.unwrap();

    let handles: Vec<_> = (0..3)
        .map(|i| {
            let engine = Arc::clone(&engine);
            tokio::spawn(async move {
                let email = format!("s{i}@example.com");
                let request = common::booking_request(&email, RoomType::Standard);
                engine.submit_booking(request).await
            })
        })
        .collect();

    let mut rooms_taken = Vec::new();
    for handle in handles {
        if let Ok(booking) = handle.await.unwrap() {
            rooms_taken.push(booking.room_number);
        }
    }
    rooms_taken.sort();
    assert_eq!(rooms_taken, vec!["101".to_string(), "102".to_string()]);
}
