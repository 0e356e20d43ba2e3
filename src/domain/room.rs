use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Room category. Determines the nightly base rate and capacity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoomType {
    Standard,
    Deluxe,
    Suite,
    Presidential,
}

impl RoomType {
    pub const ALL: [RoomType; 4] = [
        RoomType::Standard,
        RoomType::Deluxe,
        RoomType::Suite,
        RoomType::Presidential,
    ];

    /// Nightly rate charged by the pricing engine.
    pub fn base_price(self) -> Decimal {
        match self {
            RoomType::Standard => dec!(2500),
            RoomType::Deluxe => dec!(4000),
            RoomType::Suite => dec!(7500),
            RoomType::Presidential => dec!(15000),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RoomType::Standard => "Standard",
            RoomType::Deluxe => "Deluxe",
            RoomType::Suite => "Suite",
            RoomType::Presidential => "Presidential",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoomType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown room type '{s}'"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
    Cleaning,
}

impl RoomStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RoomStatus::Available => "Available",
            RoomStatus::Occupied => "Occupied",
            RoomStatus::Maintenance => "Maintenance",
            RoomStatus::Cleaning => "Cleaning",
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            RoomStatus::Available,
            RoomStatus::Occupied,
            RoomStatus::Maintenance,
            RoomStatus::Cleaning,
        ]
        .into_iter()
        .find(|st| st.as_str().eq_ignore_ascii_case(s.trim()))
        .ok_or_else(|| format!("unknown room status '{s}'"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(rename = "room_number")]
    pub number: String,
    pub room_type: RoomType,
    pub price: Decimal,
    pub capacity: u32,
    pub status: RoomStatus,
}

impl Room {
    pub fn new(number: impl Into<String>, room_type: RoomType, capacity: u32) -> Self {
        Self {
            number: number.into(),
            room_type,
            price: room_type.base_price(),
            capacity,
            status: RoomStatus::Available,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == RoomStatus::Available
    }
}

/// The room inventory written on first start.
pub fn seed_rooms() -> Vec<Room> {
    vec![
        Room::new("101", RoomType::Standard, 2),
        Room::new("102", RoomType::Standard, 2),
        Room::new("201", RoomType::Deluxe, 3),
        Room::new("202", RoomType::Deluxe, 3),
        Room::new("301", RoomType::Suite, 4),
        Room::new("302", RoomType::Suite, 4),
        Room::new("401", RoomType::Presidential, 6),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_inventory() {
        let rooms = seed_rooms();
        assert_eq!(rooms.len(), 7);
        assert!(rooms.iter().all(Room::is_available));

        let capacities: Vec<u32> = rooms.iter().map(|r| r.capacity).collect();
        assert_eq!(capacities, vec![2, 2, 3, 3, 4, 4, 6]);

        let presidential: Vec<&Room> = rooms
            .iter()
            .filter(|r| r.room_type == RoomType::Presidential)
            .collect();
        assert_eq!(presidential.len(), 1);
        assert_eq!(presidential[0].price, dec!(15000));
    }

    #[test]
    fn test_room_type_parsing() {
        assert_eq!("deluxe".parse::<RoomType>(), Ok(RoomType::Deluxe));
        assert_eq!(" Suite ".parse::<RoomType>(), Ok(RoomType::Suite));
        assert!("Penthouse".parse::<RoomType>().is_err());
        assert_eq!("cleaning".parse::<RoomStatus>(), Ok(RoomStatus::Cleaning));
    }

    #[test]
    fn test_room_json_layout() {
        let room = Room::new("101", RoomType::Standard, 2);
        let json = serde_json::to_value(&room).unwrap();
        assert_eq!(json["room_number"], "101");
        assert_eq!(json["room_type"], "Standard");
        assert_eq!(json["price"], 2500.0);
        assert_eq!(json["status"], "Available");

        let parsed: Room = serde_json::from_str(
            r#"{"room_number": "102", "room_type": "Standard", "price": 2500, "capacity": 2, "status": "Occupied"}"#,
        )
        .unwrap();
        assert_eq!(parsed.status, RoomStatus::Occupied);
        assert_eq!(parsed.price, dec!(2500));
    }
}
