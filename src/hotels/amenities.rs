//! Amenities
//!
//! An ordered list of amenity labels. Order is insertion order and is kept for display.

use std::string::ToString;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Amenity labels attached to a hotel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amenities {
    labels: SmallVec<[String; 7]>,
}

impl Amenities {
    /// Amenities offered as checkboxes on the hotel form.
    pub const OPTIONS: [&'static str; 7] = [
        "WiFi",
        "Pool",
        "Gym",
        "Spa",
        "Restaurant",
        "Parking",
        "Room Service",
    ];

    /// Wrap labels as given. Duplicates are kept.
    #[must_use]
    pub fn new(labels: SmallVec<[String; 7]>) -> Self {
        Self { labels }
    }

    /// Build from string slices.
    pub fn from_strs(labels: &[&str]) -> Self {
        Self::new(labels.iter().map(ToString::to_string).collect())
    }

    /// Remove `label` if present, otherwise append it.
    pub fn toggle(&mut self, label: &str) {
        if let Some(pos) = self.labels.iter().position(|existing| existing == label) {
            self.labels.remove(pos);
        } else {
            self.labels.push(label.to_string());
        }
    }

    /// Whether `label` is present.
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|existing| existing == label)
    }

    /// Labels in display order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether there are no labels.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl FromIterator<String> for Amenities {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_appends_missing_label() {
        let mut amenities = Amenities::from_strs(&["WiFi"]);

        amenities.toggle("Pool");

        assert_eq!(amenities.iter().collect::<Vec<_>>(), ["WiFi", "Pool"]);
    }

    #[test]
    fn toggle_removes_present_label_and_keeps_order() {
        let mut amenities = Amenities::from_strs(&["WiFi", "Pool", "Gym"]);

        amenities.toggle("Pool");

        assert_eq!(amenities.iter().collect::<Vec<_>>(), ["WiFi", "Gym"]);
    }

    #[test]
    fn toggling_twice_restores_original() {
        let original = Amenities::from_strs(&["Spa"]);
        let mut amenities = original.clone();

        amenities.toggle("Parking");
        amenities.toggle("Parking");

        assert_eq!(amenities, original);
    }

    #[test]
    fn duplicates_from_input_are_kept() {
        let amenities = Amenities::from_strs(&["WiFi", "WiFi"]);

        assert_eq!(amenities.len(), 2);
    }
}
