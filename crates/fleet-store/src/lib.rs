//! Persistent store for a rental company's fleet

pub mod codes;
pub mod csv_codec;
mod repository;

pub use codes::CodeSequence;
pub use repository::CsvFleetRepository;

use std::collections::HashSet;
use std::path::Path;

use fleet_domain::{current_year, validate, FleetRepository, NewVehicle, VehicleRecord};
use fleet_types::{LoadError, Result, ValidationError};
use tracing::{debug, info};

/// In-memory fleet of one rental company, backed by a CSV file
#[derive(Debug, Clone)]
pub struct FleetStore {
    name: String,
    manager: String,
    vehicles: Vec<VehicleRecord>,
    codes: CodeSequence,
}

impl FleetStore {
    /// Create an empty fleet
    pub fn new(name: impl Into<String>, manager: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            manager: manager.into(),
            vehicles: Vec::new(),
            codes: CodeSequence::default(),
        }
    }

    /// Company name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn manager(&self) -> &str {
        &self.manager
    }

    pub fn set_manager(&mut self, manager: impl Into<String>) {
        self.manager = manager.into();
        debug!(manager = %self.manager, "manager changed");
    }

    /// Vehicles in insertion order
    pub fn vehicles(&self) -> &[VehicleRecord] {
        &self.vehicles
    }

    pub fn get(&self, code: &str) -> Option<&VehicleRecord> {
        self.vehicles.iter().find(|v| v.code == code)
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn available_count(&self) -> usize {
        self.vehicles.iter().filter(|v| v.available).count()
    }

    /// Replace the fleet with the contents of a CSV file.
    ///
    /// On error the current vehicles are left untouched.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> std::result::Result<usize, LoadError> {
        let path = path.as_ref();
        let vehicles = csv_codec::load_vehicles(path)?;
        self.replace_vehicles(vehicles)?;
        info!(path = %path.display(), count = self.vehicles.len(), "fleet loaded");
        Ok(self.vehicles.len())
    }

    /// Write the fleet to a CSV file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        csv_codec::save_vehicles(path, &self.vehicles)?;
        info!(path = %path.display(), count = self.vehicles.len(), "fleet saved");
        Ok(())
    }

    /// Replace the fleet with the records held by a repository
    pub fn load_from(&mut self, repo: &impl FleetRepository) -> Result<usize> {
        let vehicles = repo.load()?;
        self.replace_vehicles(vehicles)?;
        Ok(self.vehicles.len())
    }

    pub fn save_to(&self, repo: &impl FleetRepository) -> Result<()> {
        repo.save(&self.vehicles)
    }

    /// Replace the fleet with records read elsewhere.
    ///
    /// Fails on the first repeated code, reported by its 1-based position,
    /// and leaves the current vehicles untouched.
    pub fn replace_vehicles(
        &mut self,
        vehicles: Vec<VehicleRecord>,
    ) -> std::result::Result<(), LoadError> {
        let mut seen = HashSet::new();
        for (idx, vehicle) in vehicles.iter().enumerate() {
            if !seen.insert(vehicle.code.as_str()) {
                return Err(LoadError::DuplicateCode {
                    row: idx as u64 + 1,
                    code: vehicle.code.clone(),
                });
            }
        }

        self.codes = CodeSequence::after(vehicles.iter().map(|v| v.code.as_str()));
        self.vehicles = vehicles;
        Ok(())
    }

    /// Validate and append a new vehicle, checking the year against today's date
    pub fn add(&mut self, draft: NewVehicle) -> std::result::Result<VehicleRecord, ValidationError> {
        self.add_as_of(draft, current_year())
    }

    /// Same as [`FleetStore::add`] with an explicit current year
    pub fn add_as_of(
        &mut self,
        draft: NewVehicle,
        current_year: i32,
    ) -> std::result::Result<VehicleRecord, ValidationError> {
        validate(&draft, current_year)?;

        let mut code = self.codes.next_code();
        while self.get(&code).is_some() {
            code = self.codes.next_code();
        }

        let record = draft.into_record(code);
        debug!(code = %record.code, brand = %record.brand, model = %record.model, "vehicle added");
        self.vehicles.push(record.clone());
        Ok(record)
    }

    /// Vehicles ordered by brand, ties kept in insertion order
    pub fn sorted_by_brand(&self) -> Vec<&VehicleRecord> {
        let mut vehicles: Vec<_> = self.vehicles.iter().collect();
        vehicles.sort_by(|a, b| a.brand.cmp(&b.brand));
        vehicles
    }
}
