//! Collection filtering
//!
//! Filtering keeps hotels whose name or location contains the search term (ignoring case) and
//! whose room type matches the selector. The result preserves the input order.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use crate::hotels::{HotelRecord, ParseRoomTypeError, RoomType};

/// Room type selector for the list view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RoomTypeFilter {
    /// No restriction.
    #[default]
    All,

    /// Only hotels offering this room type.
    Only(RoomType),
}

impl RoomTypeFilter {
    /// Label of the "no restriction" option.
    pub const ALL_LABEL: &'static str = "All";

    /// Whether a hotel with `room_type` passes the selector.
    #[must_use]
    pub fn matches(self, room_type: RoomType) -> bool {
        match self {
            RoomTypeFilter::All => true,
            RoomTypeFilter::Only(selected) => selected == room_type,
        }
    }

    /// The selected room type, if any.
    #[must_use]
    pub fn room_type(self) -> Option<RoomType> {
        match self {
            RoomTypeFilter::All => None,
            RoomTypeFilter::Only(selected) => Some(selected),
        }
    }
}

impl From<RoomType> for RoomTypeFilter {
    fn from(room_type: RoomType) -> Self {
        RoomTypeFilter::Only(room_type)
    }
}

impl From<Option<RoomType>> for RoomTypeFilter {
    fn from(room_type: Option<RoomType>) -> Self {
        room_type.map_or(RoomTypeFilter::All, RoomTypeFilter::Only)
    }
}

impl Display for RoomTypeFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            RoomTypeFilter::All => f.write_str(Self::ALL_LABEL),
            RoomTypeFilter::Only(room_type) => Display::fmt(room_type, f),
        }
    }
}

impl FromStr for RoomTypeFilter {
    type Err = ParseRoomTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL_LABEL {
            return Ok(RoomTypeFilter::All);
        }

        s.parse().map(RoomTypeFilter::Only)
    }
}

/// Search term and room type selector applied to the hotel list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotelFilter {
    /// Free-text search over name and location
    pub search: String,

    /// Room type selector
    pub room_type: RoomTypeFilter,
}

impl HotelFilter {
    /// Create a filter.
    pub fn new(search: impl Into<String>, room_type: RoomTypeFilter) -> Self {
        Self {
            search: search.into(),
            room_type,
        }
    }

    /// Search term as matched, trimmed. The same term is sent as the `search` query parameter.
    pub fn search_term(&self) -> &str {
        self.search.trim()
    }

    /// Whether `hotel` passes both the search term and the room type selector.
    pub fn matches(&self, hotel: &HotelRecord) -> bool {
        matches_search(&self.search_term().to_lowercase(), hotel)
            && self.room_type.matches(hotel.room_type)
    }

    /// Hotels passing the filter, in their original order.
    pub fn apply<'a>(&self, hotels: &'a [HotelRecord]) -> Vec<&'a HotelRecord> {
        let needle = self.search_term().to_lowercase();

        hotels
            .iter()
            .filter(|hotel| matches_search(&needle, hotel) && self.room_type.matches(hotel.room_type))
            .collect()
    }

    /// Whether any restriction is in effect.
    pub fn is_active(&self) -> bool {
        !self.search_term().is_empty() || self.room_type != RoomTypeFilter::All
    }

    /// Drop the search term and the room type restriction.
    pub fn clear(&mut self) {
        self.search.clear();
        self.room_type = RoomTypeFilter::All;
    }
}

fn matches_search(needle: &str, hotel: &HotelRecord) -> bool {
    needle.is_empty()
        || hotel.name.to_lowercase().contains(needle)
        || hotel.location.to_lowercase().contains(needle)
}
