//! Output formatting module

use fleet_domain::VehicleRecord;
use fleet_store::FleetStore;
use fleet_types::{OutputFormat, Result};
use serde::Serialize;

#[derive(Serialize)]
struct FleetView<'a> {
    name: &'a str,
    manager: &'a str,
    vehicles: &'a [&'a VehicleRecord],
}

pub fn output_fleet(
    output_format: OutputFormat,
    store: &FleetStore,
    vehicles: &[&VehicleRecord],
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let view = FleetView {
            name: store.name(),
            manager: store.manager(),
            vehicles,
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("\n{}", store.name());
    println!("{}", "=".repeat(store.name().chars().count()));
    println!("Manager: {}", store.manager());
    println!();

    if vehicles.is_empty() {
        println!("No vehicles.");
    } else {
        for vehicle in vehicles {
            println!("{} {}", vehicle.status_icon(), vehicle);
        }
    }

    println!();
    println!(
        "{} vehicles, {} available",
        store.len(),
        store.available_count()
    );
    Ok(())
}

pub fn output_vehicle(output_format: OutputFormat, vehicle: &VehicleRecord) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(vehicle)?);
    } else {
        println!("{} {}", vehicle.status_icon(), vehicle);
    }
    Ok(())
}

pub fn output_manager(output_format: OutputFormat, store: &FleetStore) -> Result<()> {
    if output_format == OutputFormat::Json {
        let value = serde_json::json!({ "name": store.name(), "manager": store.manager() });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("Manager: {}", store.manager());
    }
    Ok(())
}
