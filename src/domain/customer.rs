use super::timestamp;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A guest known to the hotel, keyed by email.
///
/// Created from the details of the first booking made with that email and
/// never updated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(with = "timestamp")]
    pub registration_date: NaiveDateTime,
}

/// Appends a customer unless one with the same email exists.
///
/// Returns `true` if the collection changed.
pub fn register_if_new(customers: &mut Vec<Customer>, candidate: Customer) -> bool {
    if customers.iter().any(|c| c.email == candidate.email) {
        return false;
    }
    customers.push(candidate);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(name: &str, email: &str) -> Customer {
        Customer {
            name: name.to_string(),
            email: email.to_string(),
            phone: "9876543210".to_string(),
            address: String::new(),
            registration_date: timestamp::now(),
        }
    }

    #[test]
    fn test_register_keeps_first_record() {
        let mut customers = Vec::new();
        assert!(register_if_new(&mut customers, customer("Asha", "asha@example.com")));
        assert!(!register_if_new(&mut customers, customer("Asha K", "asha@example.com")));
        assert!(register_if_new(&mut customers, customer("Ravi", "ravi@example.com")));

        assert_eq!(customers.len(), 2);
        assert_eq!(customers[0].name, "Asha");
    }
}
