//! Application state.

use hotelier::{
    filter::HotelFilter,
    hotels::{HotelId, HotelRecord},
    stats::HotelStats,
    validation::ValidationErrors,
};

/// Everything the list view renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// Hotels as last returned by the store
    pub hotels: Vec<HotelRecord>,

    /// Hotel the form is editing, `None` while creating
    pub editing: Option<HotelId>,

    /// Search term and room type selector
    pub filter: HotelFilter,

    /// Dismissible message from the last failed remote operation
    pub banner: Option<String>,

    /// Field errors from the last rejected submission
    pub form_errors: ValidationErrors,
}

impl AppState {
    /// State holding `hotels` and nothing else.
    pub fn with_hotels(hotels: Vec<HotelRecord>) -> Self {
        Self {
            hotels,
            ..Self::default()
        }
    }

    /// Hotels passing the current filter, in collection order.
    pub fn visible_hotels(&self) -> Vec<&HotelRecord> {
        self.filter.apply(&self.hotels)
    }

    /// Summary figures over the whole collection.
    pub fn stats(&self) -> HotelStats {
        HotelStats::from_hotels(&self.hotels)
    }

    /// Hotel with `id`, if loaded.
    pub fn find(&self, id: &HotelId) -> Option<&HotelRecord> {
        self.hotels.iter().find(|hotel| &hotel.id == id)
    }

    /// Replace the hotel with the same id in place, or append it.
    pub fn upsert(&mut self, record: HotelRecord) {
        match self.hotels.iter_mut().find(|hotel| hotel.id == record.id) {
            Some(existing) => *existing = record,
            None => self.hotels.push(record),
        }
    }

    /// Drop the hotel with `id`. Returns whether it was present.
    pub fn remove(&mut self, id: &HotelId) -> bool {
        let before = self.hotels.len();

        self.hotels.retain(|hotel| &hotel.id != id);

        self.hotels.len() != before
    }
}
