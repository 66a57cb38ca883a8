//! Hotels API trait.

use async_trait::async_trait;
use hotelier::{
    hotels::{HotelId, HotelRecord, NewHotel},
    stats::HotelStats,
};
use mockall::automock;

use crate::api::{ApiError, ListHotelsQuery};

/// Hotel store behind the REST boundary.
#[automock]
#[async_trait]
pub trait HotelsApi: Send + Sync {
    /// Hotels matching `query`, in server order.
    async fn list_hotels(&self, query: ListHotelsQuery) -> Result<Vec<HotelRecord>, ApiError>;

    /// A single hotel.
    async fn get_hotel(&self, id: HotelId) -> Result<HotelRecord, ApiError>;

    /// Persist a new hotel and return it with its assigned identifier.
    async fn create_hotel(&self, hotel: NewHotel) -> Result<HotelRecord, ApiError>;

    /// Replace every field of an existing hotel.
    async fn update_hotel(&self, id: HotelId, hotel: NewHotel) -> Result<HotelRecord, ApiError>;

    /// Remove a hotel.
    async fn delete_hotel(&self, id: HotelId) -> Result<(), ApiError>;

    /// Summary figures over every stored hotel.
    async fn hotel_stats(&self) -> Result<HotelStats, ApiError>;
}
