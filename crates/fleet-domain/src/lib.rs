//! Domain models, validation rules, and repository traits

pub mod model;
pub mod repository;
pub mod service;

pub use model::{NewVehicle, VehicleRecord};
pub use repository::FleetRepository;
pub use service::{current_year, validate};
