use super::engine::HotelEngine;
use crate::domain::analytics::{self, Analytics, AnalyticsFilter, Dashboard};
use crate::error::Result;

impl HotelEngine {
    /// Headline metrics over everything on record.
    pub async fn dashboard(&self) -> Result<Dashboard> {
        let rooms = self.load(&self.stores.rooms).await?;
        let bookings = self.load(&self.stores.bookings).await?;
        let customers = self.load(&self.stores.customers).await?;
        Ok(analytics::dashboard(&rooms, &bookings, customers.len()))
    }

    /// Filtered booking and satisfaction analytics.
    ///
    /// `Ok(None)` means there was nothing to report on, which is not an error.
    pub async fn analytics(&self, filter: &AnalyticsFilter) -> Result<Option<Analytics>> {
        let bookings = self.load(&self.stores.bookings).await?;
        let feedback = self.load(&self.stores.feedback).await?;
        Ok(analytics::analytics(&bookings, &feedback, filter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::booking::BookingRequest;
    use crate::domain::ports::Stores;
    use crate::domain::room::RoomType;
    use crate::infrastructure::in_memory::InMemoryStore;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn request(email: &str, room_type: RoomType, day: u32, nights: u32) -> BookingRequest {
        let check_in = NaiveDate::from_ymd_opt(2025, 5, day).unwrap();
        BookingRequest {
            customer_name: "Guest".to_string(),
            customer_email: email.to_string(),
            customer_phone: "9123456789".to_string(),
            customer_address: String::new(),
            id_proof: None,
            id_number: String::new(),
            room_type,
            guests: 2,
            check_in,
            check_out: check_in + chrono::Days::new(u64::from(nights)),
            special_requests: String::new(),
        }
    }

    #[tokio::test]
    async fn test_dashboard_after_bookings() {
        let engine = HotelEngine::new(Stores::from_backend(InMemoryStore::new()));
        engine.initialize().await.unwrap();
        engine
            .submit_booking(request("a@example.com", RoomType::Standard, 1, 1))
            .await
            .unwrap();
        engine
            .submit_booking(request("b@example.com", RoomType::Deluxe, 3, 3))
            .await
            .unwrap();

        let dash = engine.dashboard().await.unwrap();
        assert_eq!(dash.total_bookings, 2);
        assert_eq!(dash.total_customers, 2);
        assert_eq!(dash.total_revenue, dec!(13300.00));
        assert!((dash.occupancy_rate - 200.0 / 7.0).abs() < 1e-9);
        assert_eq!(dash.monthly_revenue["2025-05"], dec!(13300.00));
    }

    #[tokio::test]
    async fn test_analytics_without_bookings() {
        let engine = HotelEngine::new(Stores::from_backend(InMemoryStore::new()));
        engine.initialize().await.unwrap();
        let report = engine.analytics(&AnalyticsFilter::default()).await.unwrap();
        assert!(report.is_none());
    }

    #[tokio::test]
    async fn test_analytics_by_room_type() {
        let engine = HotelEngine::new(Stores::from_backend(InMemoryStore::new()));
        engine.initialize().await.unwrap();
        for (email, room_type, day) in [
            ("a@example.com", RoomType::Suite, 1),
            ("b@example.com", RoomType::Suite, 2),
            ("c@example.com", RoomType::Standard, 2),
        ] {
            engine
                .submit_booking(request(email, room_type, day, 2))
                .await
                .unwrap();
        }

        let filter = AnalyticsFilter {
            room_types: vec![RoomType::Suite],
            ..AnalyticsFilter::default()
        };
        let report = engine.analytics(&filter).await.unwrap().unwrap();
        assert_eq!(report.total_bookings, 2);
        assert_eq!(report.total_revenue, dec!(30000.00));
        assert_eq!(report.average_nights, 2.0);
    }
}
