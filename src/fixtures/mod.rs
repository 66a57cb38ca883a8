//! Fixtures
//!
//! Seed hotels for the local store, read from YAML.

use std::{fs, path::Path};

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::hotels::{HotelId, HotelRecord, RoomType, dates::parse_check_in_date};

/// Hotels bundled with the crate.
pub const DEFAULT_HOTELS_YAML: &str = include_str!("../../fixtures/hotels.yml");

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid decimal format
    #[error("Invalid decimal in {field}: {value}")]
    InvalidDecimal {
        /// Fixture field
        field: &'static str,

        /// Offending value
        value: String,
    },

    /// Invalid date format
    #[error("Invalid check-in date: {0}")]
    InvalidDate(String),
}

/// Wrapper for hotels in YAML
#[derive(Debug, Deserialize)]
pub struct HotelsFixture {
    /// Hotels in display order
    pub hotels: Vec<HotelFixture>,
}

/// Hotel fixture from YAML
#[derive(Debug, Deserialize)]
pub struct HotelFixture {
    /// Identifier
    pub id: String,

    /// Hotel name
    pub name: String,

    /// Location
    pub location: String,

    /// Room type label
    #[serde(default)]
    pub room_type: RoomType,

    /// Nightly price, e.g. "250.00"
    pub price_per_night: String,

    /// Rooms still bookable
    pub available_rooms: u32,

    /// Rating, e.g. "4.5"
    pub rating: String,

    /// Check-in date, `YYYY-MM-DD`
    pub check_in_date: String,

    /// Pets allowed
    #[serde(default)]
    pub pet_friendly: bool,

    /// Amenity labels
    #[serde(default)]
    pub amenities: Vec<String>,
}

impl TryFrom<HotelFixture> for HotelRecord {
    type Error = FixtureError;

    fn try_from(fixture: HotelFixture) -> Result<Self, Self::Error> {
        let check_in_date = parse_check_in_date(&fixture.check_in_date)
            .map_err(|_err| FixtureError::InvalidDate(fixture.check_in_date.clone()))?;

        Ok(HotelRecord {
            id: HotelId::new(fixture.id),
            price_per_night: parse_decimal("price_per_night", &fixture.price_per_night)?,
            rating: parse_decimal("rating", &fixture.rating)?,
            name: fixture.name,
            location: fixture.location,
            room_type: fixture.room_type,
            available_rooms: fixture.available_rooms,
            check_in_date,
            is_pet_friendly: fixture.pet_friendly,
            amenities: fixture.amenities.into_iter().collect(),
        })
    }
}

fn parse_decimal(field: &'static str, value: &str) -> Result<Decimal, FixtureError> {
    value
        .trim()
        .parse()
        .map_err(|_err| FixtureError::InvalidDecimal {
            field,
            value: value.to_string(),
        })
}

/// Parse hotels from YAML text.
///
/// # Errors
///
/// Returns an error if the YAML is malformed or a price, rating or date does not parse.
pub fn parse_hotels(yaml: &str) -> Result<Vec<HotelRecord>, FixtureError> {
    let fixture: HotelsFixture = serde_norway::from_str(yaml)?;

    fixture.hotels.into_iter().map(HotelRecord::try_from).collect()
}

/// Load hotels from a YAML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_hotels(path: impl AsRef<Path>) -> Result<Vec<HotelRecord>, FixtureError> {
    let contents = fs::read_to_string(path)?;

    parse_hotels(&contents)
}

/// The bundled seed hotels.
///
/// # Errors
///
/// Returns an error if the bundled YAML does not parse.
pub fn default_hotels() -> Result<Vec<HotelRecord>, FixtureError> {
    parse_hotels(DEFAULT_HOTELS_YAML)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use jiff::civil::date;
    use tempfile::NamedTempFile;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn bundled_hotels_parse() -> TestResult {
        let hotels = default_hotels()?;

        let names: Vec<&str> = hotels.iter().map(|hotel| hotel.name.as_str()).collect();

        assert_eq!(
            names,
            [
                "Grand Plaza Hotel",
                "Sunset Beach Resort",
                "Mountain View Lodge"
            ]
        );

        let sunset = hotels.get(1).ok_or("missing second hotel")?;

        assert_eq!(sunset.room_type, RoomType::Suite);
        assert_eq!(sunset.price_per_night, Decimal::new(35000, 2));
        assert_eq!(sunset.rating, Decimal::new(48, 1));
        assert_eq!(sunset.check_in_date, date(2027, 10, 20));
        assert!(!sunset.is_pet_friendly);
        assert_eq!(sunset.amenities.len(), 5);

        Ok(())
    }

    #[test]
    fn loads_hotels_from_file() -> TestResult {
        let mut file = NamedTempFile::new()?;

        writeln!(
            file,
            r#"hotels:
  - id: harbour
    name: Harbour Inn
    location: Portland, ME
    price_per_night: "120"
    available_rooms: 4
    rating: "3.9"
    check_in_date: "2027-05-01"
"#
        )?;

        let hotels = load_hotels(file.path())?;
        let harbour = hotels.first().ok_or("missing hotel")?;

        assert_eq!(harbour.id.as_str(), "harbour");
        assert_eq!(harbour.room_type, RoomType::Single);
        assert!(harbour.amenities.is_empty());

        Ok(())
    }

    #[test]
    fn rejects_bad_rating() {
        let result = parse_hotels(
            r#"hotels:
  - id: x
    name: Broken
    location: Nowhere
    price_per_night: "10"
    available_rooms: 1
    rating: "four"
    check_in_date: "2027-05-01"
"#,
        );

        assert!(matches!(
            result,
            Err(FixtureError::InvalidDecimal { field: "rating", .. })
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_hotels("/definitely/not/here.yml");

        assert!(matches!(result, Err(FixtureError::Io(_))));
    }
}
