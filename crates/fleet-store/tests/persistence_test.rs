//! Save/load tests against real files

use std::fs;

use fleet_domain::{FleetRepository, NewVehicle, VehicleRecord};
use fleet_store::{CsvFleetRepository, FleetStore};
use fleet_types::{Error, LoadError, Result};
use tempfile::tempdir;

fn sample_fleet() -> FleetStore {
    let mut fleet = FleetStore::new("Polito Rent", "Alessandro Visconti");
    fleet.add(NewVehicle::new("Fiat", "Panda", 2015, 4)).unwrap();
    fleet.add(NewVehicle::new("Audi", "A4", 2018, 5)).unwrap();
    fleet.add(NewVehicle::new("Ford", "Model T", 1900, 2)).unwrap();
    fleet
}

#[test]
fn test_save_then_load_reproduces_records() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("automobili.csv");

    let fleet = sample_fleet();
    fleet.save(&path).unwrap();

    let mut reloaded = FleetStore::new("Polito Rent", "Someone Else");
    let count = reloaded.load(&path).unwrap();
    assert_eq!(count, 3);
    assert_eq!(reloaded.vehicles(), fleet.vehicles());
}

#[test]
fn test_codes_stay_unique_after_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("automobili.csv");
    sample_fleet().save(&path).unwrap();

    let mut reloaded = FleetStore::new("Polito Rent", "Alessandro Visconti");
    reloaded.load(&path).unwrap();
    let added = reloaded.add(NewVehicle::new("Lancia", "Delta", 1990, 5)).unwrap();
    assert_eq!(added.code, "A4");
}

#[test]
fn test_missing_file_is_load_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.csv");

    let mut fleet = FleetStore::new("Polito Rent", "Alessandro Visconti");
    let err = fleet.load(&path).unwrap_err();
    assert!(matches!(err, LoadError::NotFound(ref p) if *p == path));
    assert!(fleet.is_empty());
}

#[test]
fn test_bad_row_keeps_previous_contents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("automobili.csv");
    fs::write(
        &path,
        "brand,model,year,seats,available,code\n\
         Fiat,Panda,2015,4,true,A1\n\
         Audi,A4,not-a-year,5,true,A2\n",
    )
    .unwrap();

    let mut fleet = sample_fleet();
    let before = fleet.vehicles().to_vec();
    let err = fleet.load(&path).unwrap_err();
    assert!(matches!(err, LoadError::Malformed { row: 3, .. }));
    assert_eq!(fleet.vehicles(), before.as_slice());
}

#[test]
fn test_repository_round_trip() {
    let dir = tempdir().unwrap();
    let repo = CsvFleetRepository::new(dir.path().join("fleet.csv"));

    let fleet = sample_fleet();
    fleet.save_to(&repo).unwrap();
    assert_eq!(repo.load().unwrap(), fleet.vehicles());

    let mut other = FleetStore::new("Polito Rent", "Alessandro Visconti");
    assert_eq!(other.load_from(&repo).unwrap(), 3);
    assert_eq!(other.sorted_by_brand()[0].brand, "Audi");
}

#[test]
fn test_repository_missing_file() {
    let dir = tempdir().unwrap();
    let repo = CsvFleetRepository::new(dir.path().join("absent.csv"));
    assert!(matches!(repo.load(), Err(Error::Load(LoadError::NotFound(_)))));
}

#[test]
fn test_padded_input_survives_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("automobili.csv");

    let mut fleet = FleetStore::new("Polito Rent", "Alessandro Visconti");
    let added = fleet.add(NewVehicle::new(" Fiat", "Panda ", 2015, 4)).unwrap();
    fleet.add(NewVehicle::new("Audi", "\tA4", 2018, 5)).unwrap();
    assert_eq!(added.brand, "Fiat");
    assert_eq!(added.model, "Panda");
    fleet.save(&path).unwrap();

    let mut reloaded = FleetStore::new("Polito Rent", "Alessandro Visconti");
    reloaded.load(&path).unwrap();
    assert_eq!(reloaded.vehicles(), fleet.vehicles());
    assert_eq!(reloaded.sorted_by_brand(), fleet.sorted_by_brand());
}

/// Repository that hands back whatever it was built with
struct MemoryRepository(Vec<VehicleRecord>);

impl FleetRepository for MemoryRepository {
    fn load(&self) -> Result<Vec<VehicleRecord>> {
        Ok(self.0.clone())
    }

    fn save(&self, _vehicles: &[VehicleRecord]) -> Result<()> {
        Ok(())
    }
}

#[test]
fn test_load_from_any_repository_rejects_duplicate_codes() {
    let panda = VehicleRecord {
        brand: "Fiat".to_string(),
        model: "Panda".to_string(),
        year: 2015,
        seats: 4,
        available: true,
        code: "A1".to_string(),
    };
    let repo = MemoryRepository(vec![panda.clone(), panda]);

    let mut fleet = sample_fleet();
    let err = fleet.load_from(&repo).unwrap_err();
    assert!(matches!(
        err,
        Error::Load(LoadError::DuplicateCode { row: 2, ref code }) if code == "A1"
    ));
    assert_eq!(fleet.len(), 3);
}
