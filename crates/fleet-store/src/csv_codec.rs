//! Fleet CSV file format
//!
//! One header row followed by one row per vehicle:
//! brand,model,year,seats,available,code

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use fleet_domain::VehicleRecord;
use fleet_types::{LoadError, Result};

/// Column order of the fleet file
pub const HEADER: [&str; 6] = ["brand", "model", "year", "seats", "available", "code"];

/// Load vehicles from a fleet CSV file.
///
/// Stops at the first bad row; nothing is returned for a partially valid file.
pub fn load_vehicles<P: AsRef<Path>>(path: P) -> std::result::Result<Vec<VehicleRecord>, LoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    let file = File::open(path)?;
    read_vehicles(file)
}

/// Parse fleet CSV from any reader
pub fn read_vehicles<R: Read>(input: R) -> std::result::Result<Vec<VehicleRecord>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| LoadError::Malformed {
            row: 1,
            reason: e.to_string(),
        })?
        .clone();
    validate_headers(&headers)?;

    let mut vehicles = Vec::new();
    let mut seen = HashSet::new();
    for (row_idx, result) in reader.records().enumerate() {
        let row = row_idx as u64 + 2; // header is row 1
        let record = result.map_err(|e| LoadError::Malformed {
            row,
            reason: describe_csv_error(&e),
        })?;

        let vehicle: VehicleRecord =
            record
                .deserialize(Some(&headers))
                .map_err(|e| LoadError::Malformed {
                    row,
                    reason: describe_csv_error(&e),
                })?;

        if vehicle.brand.is_empty() || vehicle.model.is_empty() || vehicle.code.is_empty() {
            return Err(LoadError::Malformed {
                row,
                reason: "brand, model and code must not be empty".to_string(),
            });
        }
        if !seen.insert(vehicle.code.clone()) {
            return Err(LoadError::DuplicateCode {
                row,
                code: vehicle.code,
            });
        }
        vehicles.push(vehicle);
    }

    Ok(vehicles)
}

fn validate_headers(headers: &csv::StringRecord) -> std::result::Result<(), LoadError> {
    for (idx, expected) in HEADER.iter().enumerate() {
        let found = headers.get(idx).unwrap_or("");
        if found != *expected {
            return Err(LoadError::BadHeader {
                expected: expected.to_string(),
                found: found.to_string(),
            });
        }
    }
    if headers.len() != HEADER.len() {
        return Err(LoadError::BadHeader {
            expected: HEADER.join(","),
            found: headers.iter().collect::<Vec<_>>().join(","),
        });
    }
    Ok(())
}

fn describe_csv_error(error: &csv::Error) -> String {
    match error.kind() {
        csv::ErrorKind::UnequalLengths { expected_len, len, .. } => {
            format!("expected {} fields, found {}", expected_len, len)
        }
        csv::ErrorKind::Deserialize { err, .. } => match err.field() {
            Some(idx) => format!(
                "bad value in column \"{}\": {}",
                HEADER.get(idx as usize).unwrap_or(&"?"),
                err.kind()
            ),
            None => err.kind().to_string(),
        },
        _ => error.to_string(),
    }
}

/// Write vehicles to a fleet CSV file, creating parent directories
pub fn save_vehicles<P: AsRef<Path>>(path: P, vehicles: &[VehicleRecord]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    write_vehicles(file, vehicles)
}

/// Serialize vehicles as fleet CSV, header included even when empty
pub fn write_vehicles<W: Write>(output: W, vehicles: &[VehicleRecord]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);
    writer.write_record(HEADER)?;
    for vehicle in vehicles {
        writer.serialize(vehicle)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> std::result::Result<Vec<VehicleRecord>, LoadError> {
        read_vehicles(text.as_bytes())
    }

    #[test]
    fn test_read_valid_rows() {
        let vehicles = parse(
            "brand,model,year,seats,available,code\n\
             Fiat,Panda,2015,4,true,A1\n\
             Audi, A4 ,2018,5,false,A2\n",
        )
        .unwrap();
        assert_eq!(vehicles.len(), 2);
        assert_eq!(vehicles[0].brand, "Fiat");
        assert_eq!(vehicles[1].model, "A4");
        assert!(!vehicles[1].available);
        assert_eq!(vehicles[1].code, "A2");
    }

    #[test]
    fn test_header_only_is_empty_fleet() {
        let vehicles = parse("brand,model,year,seats,available,code\n").unwrap();
        assert!(vehicles.is_empty());
    }

    #[test]
    fn test_rejects_wrong_header() {
        let err = parse("code,brand,model,year,seats,available\n").unwrap_err();
        assert!(matches!(err, LoadError::BadHeader { .. }));

        let err = parse("").unwrap_err();
        assert!(matches!(err, LoadError::BadHeader { .. }));
    }

    #[test]
    fn test_rejects_wrong_field_count() {
        let err = parse(
            "brand,model,year,seats,available,code\n\
             Fiat,Panda,2015,4,true,A1\n\
             Audi,A4,2018,5\n",
        )
        .unwrap_err();
        match err {
            LoadError::Malformed { row, reason } => {
                assert_eq!(row, 3);
                assert!(reason.contains("expected 6 fields"), "{}", reason);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_non_numeric_year() {
        let err = parse(
            "brand,model,year,seats,available,code\n\
             Fiat,Panda,duemila,4,true,A1\n",
        )
        .unwrap_err();
        match err {
            LoadError::Malformed { row, reason } => {
                assert_eq!(row, 2);
                assert!(reason.contains("year"), "{}", reason);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_negative_seats() {
        let err = parse(
            "brand,model,year,seats,available,code\n\
             Fiat,Panda,2015,-1,true,A1\n",
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::Malformed { row: 2, .. }));
    }

    #[test]
    fn test_rejects_duplicate_code() {
        let err = parse(
            "brand,model,year,seats,available,code\n\
             Fiat,Panda,2015,4,true,A1\n\
             Audi,A4,2018,5,true,A1\n",
        )
        .unwrap_err();
        match err {
            LoadError::DuplicateCode { row, code } => {
                assert_eq!(row, 3);
                assert_eq!(code, "A1");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_write_empty_fleet_keeps_header() {
        let mut out = Vec::new();
        write_vehicles(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "brand,model,year,seats,available,code\n");
    }

    #[test]
    fn test_write_then_read() {
        let vehicles = vec![VehicleRecord {
            brand: "Lancia".to_string(),
            model: "Ypsilon, Gold".to_string(),
            year: 2011,
            seats: 5,
            available: false,
            code: "A3".to_string(),
        }];
        let mut out = Vec::new();
        write_vehicles(&mut out, &vehicles).unwrap();
        assert_eq!(parse(std::str::from_utf8(&out).unwrap()).unwrap(), vehicles);
    }
}
