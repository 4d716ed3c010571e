//! Error types for fleet-manager

use std::path::PathBuf;

use thiserror::Error;

/// First year a production automobile existed
pub const FIRST_CAR_YEAR: i32 = 1886;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

/// Rejected input when adding a vehicle.
///
/// The `Display` text is meant to be shown to the user as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Enter a brand and a model: a car cannot be added without them")]
    MissingBrandOrModel,

    #[error("Enter a year between 1886 and {current_year}: cars only exist in that period (got {year})")]
    YearOutOfRange { year: i32, current_year: i32 },

    #[error("The year must be a whole number (got \"{0}\")")]
    InvalidYear(String),
}

/// Failure to read the persisted fleet file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Fleet file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read fleet file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing or misplaced column in header: expected \"{expected}\", found \"{found}\"")]
    BadHeader { expected: String, found: String },

    #[error("Malformed row {row}: {reason}")]
    Malformed { row: u64, reason: String },

    #[error("Duplicate vehicle code \"{code}\" in row {row}")]
    DuplicateCode { row: u64, code: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Vehicle not found: {0}")]
    VehicleNotFound(String),

    #[error(
        "Refusing to overwrite {}: it could not be loaded at startup ({reason}). Fix or move the file first",
        .path.display()
    )]
    SaveBlocked { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
