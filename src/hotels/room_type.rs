//! Room Types

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Room category a hotel listing offers.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum RoomType {
    /// Single room
    #[default]
    Single,

    /// Double room
    Double,

    /// Suite
    Suite,

    /// Deluxe room
    Deluxe,

    /// Presidential suite
    Presidential,
}

impl RoomType {
    /// Every room type, in the order the form lists them.
    pub const ALL: [RoomType; 5] = [
        RoomType::Single,
        RoomType::Double,
        RoomType::Suite,
        RoomType::Deluxe,
        RoomType::Presidential,
    ];

    /// Display label, identical to the wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RoomType::Single => "Single",
            RoomType::Double => "Double",
            RoomType::Suite => "Suite",
            RoomType::Deluxe => "Deluxe",
            RoomType::Presidential => "Presidential",
        }
    }
}

impl Display for RoomType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Unknown room type label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown room type: {0}")]
pub struct ParseRoomTypeError(pub String);

impl FromStr for RoomType {
    type Err = ParseRoomTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoomType::ALL
            .into_iter()
            .find(|room_type| room_type.as_str() == s)
            .ok_or_else(|| ParseRoomTypeError(s.to_string()))
    }
}
