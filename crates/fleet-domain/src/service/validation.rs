//! Input rules for new vehicles

use chrono::{Datelike, Local};
use fleet_types::{ValidationError, FIRST_CAR_YEAR};

use crate::model::NewVehicle;

/// Current calendar year from the local clock
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Check a draft vehicle against the add rules.
///
/// Brand and model must be non-empty, and the year must lie strictly between
/// the first automobile year and `current_year`. Missing text is reported
/// before a bad year.
pub fn validate(draft: &NewVehicle, current_year: i32) -> Result<(), ValidationError> {
    if draft.brand().is_empty() || draft.model().is_empty() {
        return Err(ValidationError::MissingBrandOrModel);
    }

    let year = draft.year();
    if year <= FIRST_CAR_YEAR || year >= current_year {
        return Err(ValidationError::YearOutOfRange {
            year,
            current_year,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i32 = 2026;

    fn draft(brand: &str, model: &str, year: i32) -> NewVehicle {
        NewVehicle::new(brand, model, year, 4)
    }

    #[test]
    fn test_accepts_valid_input() {
        assert!(validate(&draft("Fiat", "Panda", 2015), NOW).is_ok());
        assert!(validate(&draft("Ford", "Model T", 1900), NOW).is_ok());
        assert!(validate(&draft("Ford", "Model T", 1887), NOW).is_ok());
        assert!(validate(&draft("Tesla", "Model Y", NOW - 1), NOW).is_ok());
    }

    #[test]
    fn test_rejects_empty_brand_or_model() {
        assert_eq!(
            validate(&draft("", "Model3", 2020), NOW),
            Err(ValidationError::MissingBrandOrModel)
        );
        assert_eq!(
            validate(&draft("Tesla", "   ", 2020), NOW),
            Err(ValidationError::MissingBrandOrModel)
        );
    }

    #[test]
    fn test_missing_text_reported_before_year() {
        assert_eq!(
            validate(&draft("", "", 1700), NOW),
            Err(ValidationError::MissingBrandOrModel)
        );
    }

    #[test]
    fn test_rejects_years_outside_range() {
        for year in [1800, FIRST_CAR_YEAR, NOW, NOW + 1, 0, -5] {
            assert_eq!(
                validate(&draft("Ford", "OldCar", year), NOW),
                Err(ValidationError::YearOutOfRange { year, current_year: NOW }),
                "year {} should be rejected",
                year
            );
        }
    }

    #[test]
    fn test_upper_bound_follows_given_year() {
        let car = draft("Fiat", "600e", 2030);
        assert!(validate(&car, 2030).is_err());
        assert!(validate(&car, 2031).is_ok());
    }

    #[test]
    fn test_messages_differ() {
        let missing = ValidationError::MissingBrandOrModel.to_string();
        let range = ValidationError::YearOutOfRange { year: 1800, current_year: NOW }.to_string();
        assert_ne!(missing, range);
        assert!(range.contains("1886"));
        assert!(range.contains("2026"));
    }
}
