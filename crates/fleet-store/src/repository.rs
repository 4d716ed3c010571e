//! File-based implementation of FleetRepository

use std::path::{Path, PathBuf};

use fleet_domain::{FleetRepository, VehicleRecord};
use fleet_types::Result;

use crate::csv_codec;

/// Fleet records kept in a CSV file
pub struct CsvFleetRepository {
    csv_path: PathBuf,
}

impl CsvFleetRepository {
    pub fn new(csv_path: impl Into<PathBuf>) -> Self {
        Self {
            csv_path: csv_path.into(),
        }
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }
}

impl FleetRepository for CsvFleetRepository {
    fn load(&self) -> Result<Vec<VehicleRecord>> {
        Ok(csv_codec::load_vehicles(&self.csv_path)?)
    }

    fn save(&self, vehicles: &[VehicleRecord]) -> Result<()> {
        csv_codec::save_vehicles(&self.csv_path, vehicles)
    }
}
