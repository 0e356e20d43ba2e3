use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern")
});

// Country code is fixed to India (+91); subscriber numbers start with 6-9.
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+91[-\s]?)?[6-9][0-9]{9}$").expect("phone pattern"));

/// A single user-facing reason why a request was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Customer name is required")]
    MissingName,
    #[error("Valid email address is required")]
    InvalidEmail,
    #[error("Valid phone number is required")]
    InvalidPhone,
    #[error("Check-out date must be after check-in date")]
    InvalidStayDates,
    #[error("Number of guests must be between {min} and {max}")]
    GuestCount { min: u32, max: u32 },
    #[error("Feedback cannot be empty")]
    EmptyFeedback,
    #[error("Rating must be between 1 and 5")]
    InvalidRating,
}

/// Checks the `local@domain.tld` shape. Does not resolve the domain.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Checks a mobile number, optionally prefixed with `+91`.
///
/// Surrounding whitespace is ignored.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE.is_match(phone.trim())
}
