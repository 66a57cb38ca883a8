//! API errors.

use std::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error;

/// Remote operation, used to pick the message shown when the server gives none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `GET /api/hotels`
    ListHotels,

    /// `GET /api/hotels/{id}`
    GetHotel,

    /// `POST /api/hotels`
    CreateHotel,

    /// `PUT /api/hotels/{id}`
    UpdateHotel,

    /// `DELETE /api/hotels/{id}`
    DeleteHotel,

    /// `GET /api/hotels/stats`
    HotelStats,
}

impl Operation {
    /// Message used when the server does not supply one.
    #[must_use]
    pub const fn fallback_message(self) -> &'static str {
        match self {
            Operation::ListHotels => "Failed to fetch hotels",
            Operation::GetHotel => "Failed to fetch hotel",
            Operation::CreateHotel => "Failed to create hotel",
            Operation::UpdateHotel => "Failed to update hotel",
            Operation::DeleteHotel => "Failed to delete hotel",
            Operation::HotelStats => "Failed to fetch statistics",
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Operation::ListHotels => "list_hotels",
            Operation::GetHotel => "get_hotel",
            Operation::CreateHotel => "create_hotel",
            Operation::UpdateHotel => "update_hotel",
            Operation::DeleteHotel => "delete_hotel",
            Operation::HotelStats => "hotel_stats",
        })
    }
}

/// Errors crossing the REST boundary.
///
/// The display text of every variant is fit to show to a user as-is.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server rejected the request.
    #[error("{message}")]
    Remote {
        /// Server-provided message, or the operation's fallback
        message: String,
    },

    /// The request never produced a response.
    #[error("{}", operation.fallback_message())]
    Transport {
        /// Failed operation
        operation: Operation,

        /// Underlying HTTP error
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not the expected JSON.
    #[error("{}", operation.fallback_message())]
    Decode {
        /// Failed operation
        operation: Operation,

        /// Underlying decoding error
        #[source]
        source: serde_json::Error,
    },

    /// A success response carried no `data`.
    #[error("{}", operation.fallback_message())]
    MissingData {
        /// Failed operation
        operation: Operation,
    },

    /// The configured base URL cannot carry API paths.
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),
}

impl ApiError {
    /// Remote error carrying `message` verbatim.
    pub fn remote(message: impl Into<String>) -> Self {
        ApiError::Remote {
            message: message.into(),
        }
    }

    /// Remote error carrying the server's message, or the operation's fallback.
    pub fn remote_or_fallback(message: Option<String>, operation: Operation) -> Self {
        ApiError::Remote {
            message: message.unwrap_or_else(|| operation.fallback_message().to_string()),
        }
    }
}
