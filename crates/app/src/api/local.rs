//! In-memory hotel store.

use std::path::Path;

use async_trait::async_trait;
use hotelier::{
    fixtures::{FixtureError, default_hotels, load_hotels},
    hotels::{HotelId, HotelRecord, NewHotel},
    stats::HotelStats,
};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::api::{ApiError, HotelsApi, ListHotelsQuery};

const NOT_FOUND: &str = "Hotel not found";

/// Hotel store kept in process memory, for running without a backend.
#[derive(Debug, Default)]
pub struct LocalHotelsApi {
    hotels: RwLock<Vec<HotelRecord>>,
}

impl LocalHotelsApi {
    /// Store holding `hotels`.
    pub fn new(hotels: Vec<HotelRecord>) -> Self {
        Self {
            hotels: RwLock::new(hotels),
        }
    }

    /// Store seeded with the bundled hotels.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled fixture does not parse.
    pub fn seeded() -> Result<Self, FixtureError> {
        default_hotels().map(Self::new)
    }

    /// Store seeded from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_seed_file(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        load_hotels(path).map(Self::new)
    }
}

fn new_hotel_id() -> HotelId {
    HotelId::new(Uuid::now_v7().to_string())
}

#[async_trait]
impl HotelsApi for LocalHotelsApi {
    async fn list_hotels(&self, query: ListHotelsQuery) -> Result<Vec<HotelRecord>, ApiError> {
        let hotels = self.hotels.read().await;

        Ok(hotels
            .iter()
            .filter(|hotel| query.matches(hotel))
            .cloned()
            .collect())
    }

    async fn get_hotel(&self, id: HotelId) -> Result<HotelRecord, ApiError> {
        let hotels = self.hotels.read().await;

        hotels
            .iter()
            .find(|hotel| hotel.id == id)
            .cloned()
            .ok_or_else(|| ApiError::remote(NOT_FOUND))
    }

    async fn create_hotel(&self, hotel: NewHotel) -> Result<HotelRecord, ApiError> {
        let record = HotelRecord::from_new(new_hotel_id(), hotel);

        debug!(id = %record.id, "storing new hotel");

        self.hotels.write().await.push(record.clone());

        Ok(record)
    }

    async fn update_hotel(&self, id: HotelId, hotel: NewHotel) -> Result<HotelRecord, ApiError> {
        let mut hotels = self.hotels.write().await;

        let slot = hotels
            .iter_mut()
            .find(|existing| existing.id == id)
            .ok_or_else(|| ApiError::remote(NOT_FOUND))?;

        *slot = HotelRecord::from_new(id, hotel);

        Ok(slot.clone())
    }

    async fn delete_hotel(&self, id: HotelId) -> Result<(), ApiError> {
        let mut hotels = self.hotels.write().await;

        let position = hotels
            .iter()
            .position(|hotel| hotel.id == id)
            .ok_or_else(|| ApiError::remote(NOT_FOUND))?;

        hotels.remove(position);

        Ok(())
    }

    async fn hotel_stats(&self) -> Result<HotelStats, ApiError> {
        let hotels = self.hotels.read().await;

        Ok(HotelStats::from_hotels(hotels.iter()))
    }
}
