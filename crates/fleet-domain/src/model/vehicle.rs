//! Vehicle record and the form input used to create one

use std::fmt;

use fleet_types::ValidationError;
use serde::{Deserialize, Serialize};

/// A car in the rental fleet.
///
/// Field order matches the column order of the fleet CSV file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub seats: u32,
    /// Whether the car can currently be rented
    pub available: bool,
    /// Assigned by the store at creation, never changed afterwards
    pub code: String,
}

impl VehicleRecord {
    /// Marker shown in vehicle lists
    pub fn status_icon(&self) -> &'static str {
        if self.available {
            "✅"
        } else {
            "⛔"
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.available {
            "Available"
        } else {
            "Rented"
        }
    }
}

impl fmt::Display for VehicleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} {} ({}) | {} seats | {}",
            self.code,
            self.brand,
            self.model,
            self.year,
            self.seats,
            self.status_label()
        )
    }
}

/// Form input for a vehicle that has not been added yet.
///
/// Brand and model are trimmed on construction, so what gets stored matches
/// what the CSV reader gives back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVehicle {
    brand: String,
    model: String,
    year: i32,
    seats: u32,
}

impl NewVehicle {
    pub fn new(brand: impl Into<String>, model: impl Into<String>, year: i32, seats: u32) -> Self {
        Self {
            brand: brand.into().trim().to_string(),
            model: model.into().trim().to_string(),
            year,
            seats,
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn seats(&self) -> u32 {
        self.seats
    }

    /// Parse a year typed into a text field
    pub fn parse_year(text: &str) -> Result<i32, ValidationError> {
        text.trim()
            .parse()
            .map_err(|_| ValidationError::InvalidYear(text.trim().to_string()))
    }

    /// Turn validated input into a record carrying the given code
    pub fn into_record(self, code: String) -> VehicleRecord {
        VehicleRecord {
            brand: self.brand,
            model: self.model,
            year: self.year,
            seats: self.seats,
            available: true,
            code,
        }
    }
}
