//! Collection statistics

use rust_decimal::{Decimal, RoundingStrategy};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::hotels::{HotelRecord, RoomType};

/// Number of hotels offering one room type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomTypeCount {
    /// Room type
    #[serde(rename = "_id")]
    pub room_type: RoomType,

    /// Hotels offering it
    pub count: u64,
}

/// Summary figures for a hotel collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelStats {
    /// Number of hotels
    pub total_hotels: u64,

    /// Sum of available rooms across hotels
    pub total_available_rooms: u64,

    /// Mean rating, unrounded; zero for an empty collection
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub average_rating: Decimal,

    /// Hotels per room type, in room type order, zero counts omitted
    #[serde(default)]
    pub room_type_distribution: Vec<RoomTypeCount>,
}

impl HotelStats {
    /// Aggregate a collection of hotels.
    pub fn from_hotels<'a, I>(hotels: I) -> Self
    where
        I: IntoIterator<Item = &'a HotelRecord>,
    {
        let mut total_hotels = 0_u64;
        let mut total_available_rooms = 0_u64;
        let mut rating_sum = Decimal::ZERO;
        let mut counts = FxHashMap::<RoomType, u64>::default();

        for hotel in hotels {
            total_hotels = total_hotels.saturating_add(1);
            total_available_rooms =
                total_available_rooms.saturating_add(u64::from(hotel.available_rooms));
            rating_sum = rating_sum.saturating_add(hotel.rating);

            let count = counts.entry(hotel.room_type).or_default();
            *count = count.saturating_add(1);
        }

        let average_rating = rating_sum
            .checked_div(Decimal::from(total_hotels))
            .unwrap_or(Decimal::ZERO);

        let room_type_distribution = RoomType::ALL
            .into_iter()
            .filter_map(|room_type| {
                counts
                    .get(&room_type)
                    .map(|&count| RoomTypeCount { room_type, count })
            })
            .collect();

        Self {
            total_hotels,
            total_available_rooms,
            average_rating,
            room_type_distribution,
        }
    }

    /// Average rating rounded to one decimal place, for display.
    pub fn display_average_rating(&self) -> String {
        let rounded = self
            .average_rating
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);

        format!("{rounded:.1}")
    }
}
