//! Repository trait definitions for data persistence

use fleet_types::Result;

use crate::model::VehicleRecord;

/// Persistent backing for a fleet's vehicle records
pub trait FleetRepository {
    /// Read every stored record, in stored order
    fn load(&self) -> Result<Vec<VehicleRecord>>;

    /// Replace the stored records
    fn save(&self, vehicles: &[VehicleRecord]) -> Result<()>;
}
