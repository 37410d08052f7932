//! Shared types for roster core logic.
//!
//! These types define the contracts between the roster manager, validation,
//! and whatever renders them. They carry no I/O and no global state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// System-assigned student identifier.
pub type StudentId = u32;

/// A committed student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub email: String,
    pub age: u32,
    pub course: String,
    pub phone: String,
    pub address: String,
}

/// Editable form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Age,
    Course,
    Phone,
    Address,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Email,
        Field::Age,
        Field::Course,
        Field::Phone,
        Field::Address,
    ];

    /// Stable key used in commands and serialized error maps.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Age => "age",
            Field::Course => "course",
            Field::Phone => "phone",
            Field::Address => "address",
        }
    }

    /// Human-facing label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email Address",
            Field::Age => "Age",
            Field::Course => "Course",
            Field::Phone => "Phone Number",
            Field::Address => "Address",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Field::ALL
            .into_iter()
            .find(|field| field.key() == needle)
            .ok_or_else(|| {
                let keys: Vec<&str> = Field::ALL.iter().map(|field| field.key()).collect();
                format!("unknown field '{}' (expected one of: {})", s.trim(), keys.join(", "))
            })
    }
}

/// The records a fresh session starts with.
pub fn default_roster() -> Vec<Student> {
    vec![
        Student {
            id: 1,
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            age: 20,
            course: "Computer Science".to_string(),
            phone: "+1234567890".to_string(),
            address: "123 Main St, City".to_string(),
        },
        Student {
            id: 2,
            name: "Jane Smith".to_string(),
            email: "jane.smith@example.com".to_string(),
            age: 22,
            course: "Mathematics".to_string(),
            phone: "+1987654321".to_string(),
            address: "456 Oak Ave, Town".to_string(),
        },
    ]
}
