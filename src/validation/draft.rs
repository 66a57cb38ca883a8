//! Hotel Drafts

use crate::hotels::{Amenities, HotelRecord, NewHotel, RoomType};

/// Hotel form contents as typed by a user.
///
/// Text inputs stay raw strings until [`validate`](crate::validation::validate) accepts them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotelDraft {
    /// Hotel name
    pub name: String,

    /// Location
    pub location: String,

    /// Selected room type
    pub room_type: RoomType,

    /// Price per night
    pub price_per_night: String,

    /// Available rooms
    pub available_rooms: String,

    /// Rating
    pub rating: String,

    /// Check-in date, `YYYY-MM-DD`
    pub check_in_date: String,

    /// Pet friendly checkbox
    pub is_pet_friendly: bool,

    /// Checked amenities
    pub amenities: Amenities,
}

impl From<&NewHotel> for HotelDraft {
    fn from(hotel: &NewHotel) -> Self {
        Self {
            name: hotel.name.clone(),
            location: hotel.location.clone(),
            room_type: hotel.room_type,
            price_per_night: hotel.price_per_night.to_string(),
            available_rooms: hotel.available_rooms.to_string(),
            rating: hotel.rating.to_string(),
            check_in_date: hotel.check_in_date.to_string(),
            is_pet_friendly: hotel.is_pet_friendly,
            amenities: hotel.amenities.clone(),
        }
    }
}

impl From<&HotelRecord> for HotelDraft {
    fn from(hotel: &HotelRecord) -> Self {
        Self::from(&hotel.to_new_hotel())
    }
}
