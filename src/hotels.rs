//! Hotels

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod amenities;
pub mod dates;
pub mod room_type;

pub use amenities::Amenities;
pub use room_type::{ParseRoomTypeError, RoomType};

/// Hotel identifier, assigned by the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HotelId(String);

impl HotelId {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for HotelId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<String> for HotelId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for HotelId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Hotel payload without an identifier, as sent on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHotel {
    /// Hotel name
    pub name: String,

    /// Free-text location, e.g. "Miami, FL"
    pub location: String,

    /// Room category on offer
    pub room_type: RoomType,

    /// Nightly price
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price_per_night: Decimal,

    /// Rooms still bookable
    pub available_rooms: u32,

    /// Guest rating between 1 and 5
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub rating: Decimal,

    /// First bookable night
    #[serde(with = "dates::check_in")]
    pub check_in_date: Date,

    /// Whether pets are allowed
    #[serde(default)]
    pub is_pet_friendly: bool,

    /// Amenity labels in display order
    #[serde(default)]
    pub amenities: Amenities,
}

/// Persisted hotel listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "HotelRecordWire")]
pub struct HotelRecord {
    /// Identifier assigned on creation
    pub id: HotelId,

    /// Hotel name
    pub name: String,

    /// Free-text location
    pub location: String,

    /// Room category on offer
    pub room_type: RoomType,

    /// Nightly price
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price_per_night: Decimal,

    /// Rooms still bookable
    pub available_rooms: u32,

    /// Guest rating between 1 and 5
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub rating: Decimal,

    /// First bookable night
    #[serde(serialize_with = "dates::check_in::serialize")]
    pub check_in_date: Date,

    /// Whether pets are allowed
    pub is_pet_friendly: bool,

    /// Amenity labels in display order
    pub amenities: Amenities,
}

impl HotelRecord {
    /// Attach an identifier to a hotel payload.
    #[must_use]
    pub fn from_new(id: HotelId, hotel: NewHotel) -> Self {
        Self {
            id,
            name: hotel.name,
            location: hotel.location,
            room_type: hotel.room_type,
            price_per_night: hotel.price_per_night,
            available_rooms: hotel.available_rooms,
            rating: hotel.rating,
            check_in_date: hotel.check_in_date,
            is_pet_friendly: hotel.is_pet_friendly,
            amenities: hotel.amenities,
        }
    }

    /// Copy of the record without its identifier.
    #[must_use]
    pub fn to_new_hotel(&self) -> NewHotel {
        NewHotel {
            name: self.name.clone(),
            location: self.location.clone(),
            room_type: self.room_type,
            price_per_night: self.price_per_night,
            available_rooms: self.available_rooms,
            rating: self.rating,
            check_in_date: self.check_in_date,
            is_pet_friendly: self.is_pet_friendly,
            amenities: self.amenities.clone(),
        }
    }
}

/// Errors raised while reading a hotel record off the wire.
#[derive(Debug, Error)]
pub enum HotelRecordError {
    /// Neither `_id` nor `id` was present.
    #[error("hotel record is missing an identifier")]
    MissingId,
}

/// Incoming record shape. Document stores send `_id`, other backends send `id`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HotelRecordWire {
    #[serde(rename = "_id")]
    object_id: Option<HotelId>,
    id: Option<HotelId>,
    name: String,
    location: String,
    room_type: RoomType,
    price_per_night: Decimal,
    available_rooms: u32,
    rating: Decimal,
    #[serde(with = "dates::check_in")]
    check_in_date: Date,
    #[serde(default)]
    is_pet_friendly: bool,
    #[serde(default)]
    amenities: Amenities,
}

impl TryFrom<HotelRecordWire> for HotelRecord {
    type Error = HotelRecordError;

    fn try_from(wire: HotelRecordWire) -> Result<Self, Self::Error> {
        let id = wire
            .object_id
            .or(wire.id)
            .ok_or(HotelRecordError::MissingId)?;

        Ok(Self {
            id,
            name: wire.name,
            location: wire.location,
            room_type: wire.room_type,
            price_per_night: wire.price_per_night,
            available_rooms: wire.available_rooms,
            rating: wire.rating,
            check_in_date: wire.check_in_date,
            is_pet_friendly: wire.is_pet_friendly,
            amenities: wire.amenities,
        })
    }
}
