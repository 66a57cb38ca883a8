//! List query parameters.

use hotelier::{
    filter::{HotelFilter, RoomTypeFilter},
    hotels::{HotelRecord, RoomType},
};
use rust_decimal::Decimal;
use serde::Serialize;

/// Server-side filters for `GET /api/hotels`. Unset parameters are left off the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListHotelsQuery {
    /// Substring of name or location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    /// Exact room type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_type: Option<RoomType>,

    /// Lowest nightly price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<Decimal>,

    /// Highest nightly price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<Decimal>,

    /// Lowest rating
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<Decimal>,
}

impl ListHotelsQuery {
    /// Query pushing down a list-view filter.
    pub fn from_filter(filter: &HotelFilter) -> Self {
        Self {
            search: Some(filter.search_term())
                .filter(|search| !search.is_empty())
                .map(str::to_string),
            room_type: filter.room_type.room_type(),
            ..Self::default()
        }
    }

    /// Whether `hotel` satisfies every set parameter.
    pub fn matches(&self, hotel: &HotelRecord) -> bool {
        let filter = HotelFilter::new(
            self.search.clone().unwrap_or_default(),
            RoomTypeFilter::from(self.room_type),
        );

        filter.matches(hotel)
            && self.min_price.is_none_or(|min| hotel.price_per_night >= min)
            && self.max_price.is_none_or(|max| hotel.price_per_night <= max)
            && self.min_rating.is_none_or(|min| hotel.rating >= min)
    }
}

#[cfg(test)]
mod tests {
    use hotelier::fixtures::default_hotels;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn empty_filter_sets_nothing() {
        let query = ListHotelsQuery::from_filter(&HotelFilter::default());

        assert_eq!(query, ListHotelsQuery::default());
    }

    #[test]
    fn filter_pushes_down_search_and_room_type() {
        let query = ListHotelsQuery::from_filter(&HotelFilter::new(" beach ", RoomType::Suite.into()));

        assert_eq!(query.search.as_deref(), Some("beach"));
        assert_eq!(query.room_type, Some(RoomType::Suite));
    }

    #[test]
    fn pushed_down_query_agrees_with_local_filter() -> TestResult {
        let filter = HotelFilter::new(" Miami ", RoomTypeFilter::All);
        let query = ListHotelsQuery::from_filter(&filter);

        for hotel in default_hotels()? {
            assert_eq!(query.matches(&hotel), filter.matches(&hotel), "{}", hotel.name);
        }

        assert_eq!(query.search.as_deref(), Some("Miami"));

        Ok(())
    }

    #[test]
    fn serializes_camel_case_and_skips_unset() -> TestResult {
        let query = ListHotelsQuery {
            room_type: Some(RoomType::Deluxe),
            min_rating: Some(Decimal::new(45, 1)),
            ..ListHotelsQuery::default()
        };

        let value = serde_json::to_value(&query)?;

        assert_eq!(
            value,
            serde_json::json!({ "roomType": "Deluxe", "minRating": "4.5" })
        );

        Ok(())
    }

    #[test]
    fn matches_applies_price_and_rating_bounds() -> TestResult {
        let hotels = default_hotels()?;

        let query = ListHotelsQuery {
            max_price: Some(Decimal::from(300)),
            min_rating: Some(Decimal::new(43, 1)),
            ..ListHotelsQuery::default()
        };

        let names: Vec<&str> = hotels
            .iter()
            .filter(|hotel| query.matches(hotel))
            .map(|hotel| hotel.name.as_str())
            .collect();

        assert_eq!(names, ["Grand Plaza Hotel"]);

        Ok(())
    }
}
