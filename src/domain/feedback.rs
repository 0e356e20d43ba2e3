use super::timestamp;
use super::validation::{self, ValidationError};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ServiceArea {
    #[serde(rename = "Room Quality")]
    RoomQuality,
    #[serde(rename = "Staff Behavior")]
    StaffBehavior,
    #[serde(rename = "Food Service")]
    FoodService,
    Cleanliness,
    Amenities,
    #[serde(rename = "Check-in/Check-out")]
    CheckInOut,
}

impl ServiceArea {
    pub const ALL: [ServiceArea; 6] = [
        ServiceArea::RoomQuality,
        ServiceArea::StaffBehavior,
        ServiceArea::FoodService,
        ServiceArea::Cleanliness,
        ServiceArea::Amenities,
        ServiceArea::CheckInOut,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ServiceArea::RoomQuality => "Room Quality",
            ServiceArea::StaffBehavior => "Staff Behavior",
            ServiceArea::FoodService => "Food Service",
            ServiceArea::Cleanliness => "Cleanliness",
            ServiceArea::Amenities => "Amenities",
            ServiceArea::CheckInOut => "Check-in/Check-out",
        }
    }
}

impl fmt::Display for ServiceArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceArea {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ServiceArea::ALL
            .into_iter()
            .find(|a| {
                a.as_str().eq_ignore_ascii_case(wanted)
                    || format!("{a:?}").eq_ignore_ascii_case(&wanted.replace(['-', '_', ' '], ""))
            })
            .ok_or_else(|| format!("unknown service area '{s}'"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackRequest {
    pub customer_name: String,
    pub customer_email: String,
    pub booking_id: Option<String>,
    pub rating: u8,
    pub service_areas: Vec<ServiceArea>,
    pub feedback: String,
    pub suggestions: String,
}

impl FeedbackRequest {
    /// Stops at the first problem, in form order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.customer_name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.customer_email.trim().is_empty()
            || !validation::is_valid_email(&self.customer_email)
        {
            return Err(ValidationError::InvalidEmail);
        }
        if self.feedback.trim().is_empty() {
            return Err(ValidationError::EmptyFeedback);
        }
        if !(1..=5).contains(&self.rating) {
            return Err(ValidationError::InvalidRating);
        }
        Ok(())
    }

    pub fn into_feedback(self, id: String, date: NaiveDateTime) -> Feedback {
        Feedback {
            id,
            customer_name: self.customer_name,
            customer_email: self.customer_email,
            booking_id: self.booking_id.filter(|b| !b.trim().is_empty()),
            rating: self.rating,
            service_areas: self.service_areas,
            feedback: self.feedback,
            suggestions: self.suggestions,
            date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(rename = "feedback_id")]
    pub id: String,
    pub customer_name: String,
    pub customer_email: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub booking_id: Option<String>,
    pub rating: u8,
    #[serde(default)]
    pub service_areas: Vec<ServiceArea>,
    pub feedback: String,
    #[serde(default)]
    pub suggestions: String,
    #[serde(with = "timestamp")]
    pub date: NaiveDateTime,
}

pub fn new_feedback_id() -> String {
    format!("FB-{}", uuid::Uuid::new_v4().simple())
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}
