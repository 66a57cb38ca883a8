//! Response envelope.
//!
//! Every response body has the shape `{success, data?, message?, error?, errors?, count?}`.
//! It is decoded into [`ApiResponse`] before anything reads it.

use reqwest::StatusCode;
use serde::{Deserialize, de::DeserializeOwned, de::IgnoredAny};

use crate::api::{ApiError, Operation};

/// Decoded response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse<T> {
    /// `success: true`
    Success {
        /// Payload, absent for delete
        data: Option<T>,

        /// Number of records, sent with lists
        count: Option<u64>,
    },

    /// `success: false`
    Failure {
        /// Server explanation, if any
        message: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
struct RawEnvelope<T> {
    success: bool,
    data: Option<T>,
    message: Option<String>,
    error: Option<String>,
    #[serde(default)]
    errors: Vec<String>,
    count: Option<u64>,
}

impl<T> RawEnvelope<T> {
    fn failure_message(self) -> Option<String> {
        self.message.or(self.error).or_else(|| {
            if self.errors.is_empty() {
                None
            } else {
                Some(self.errors.join("; "))
            }
        })
    }
}

impl<T> From<RawEnvelope<T>> for ApiResponse<T> {
    fn from(raw: RawEnvelope<T>) -> Self {
        if raw.success {
            ApiResponse::Success {
                data: raw.data,
                count: raw.count,
            }
        } else {
            ApiResponse::Failure {
                message: raw.failure_message(),
            }
        }
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Decode a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not a response envelope carrying `T`.
    pub fn decode(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice::<RawEnvelope<T>>(body).map(Self::from)
    }
}

impl<T> ApiResponse<T> {
    /// The payload of a successful response.
    ///
    /// # Errors
    ///
    /// Returns the server's message on failure, or [`ApiError::MissingData`] when a success
    /// carries nothing.
    pub fn into_data(self, operation: Operation) -> Result<T, ApiError> {
        match self {
            ApiResponse::Success {
                data: Some(data), ..
            } => Ok(data),
            ApiResponse::Success { data: None, .. } => Err(ApiError::MissingData { operation }),
            ApiResponse::Failure { message } => {
                Err(ApiError::remote_or_fallback(message, operation))
            }
        }
    }
}

impl ApiResponse<IgnoredAny> {
    /// Discard the payload of a successful response.
    ///
    /// # Errors
    ///
    /// Returns the server's message on failure.
    pub fn into_unit(self, operation: Operation) -> Result<(), ApiError> {
        match self {
            ApiResponse::Success { .. } => Ok(()),
            ApiResponse::Failure { message } => {
                Err(ApiError::remote_or_fallback(message, operation))
            }
        }
    }
}

/// Turn a status code and body into a decoded response.
///
/// Non-2xx statuses are errors carrying the body's message when it has one. An empty 2xx body
/// reads as a success without data.
///
/// # Errors
///
/// Returns [`ApiError::Remote`] for non-2xx statuses and [`ApiError::Decode`] for bodies that
/// are not envelopes.
pub fn read_response<T: DeserializeOwned>(
    status: StatusCode,
    body: &[u8],
    operation: Operation,
) -> Result<ApiResponse<T>, ApiError> {
    if !status.is_success() {
        let message = serde_json::from_slice::<RawEnvelope<IgnoredAny>>(body)
            .ok()
            .and_then(RawEnvelope::failure_message);

        return Err(ApiError::remote_or_fallback(message, operation));
    }

    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ApiResponse::Success {
            data: None,
            count: None,
        });
    }

    ApiResponse::decode(body).map_err(|source| ApiError::Decode { operation, source })
}

#[cfg(test)]
mod tests {
    use hotelier::hotels::HotelRecord;
    use testresult::TestResult;

    use super::*;

    const HOTEL_JSON: &str = r#"{
        "_id": "665f1c",
        "name": "Grand Plaza Hotel",
        "location": "New York, NY",
        "roomType": "Deluxe",
        "pricePerNight": 250,
        "availableRooms": 15,
        "rating": 4.5,
        "checkInDate": "2027-10-15T00:00:00.000Z",
        "isPetFriendly": true,
        "amenities": ["WiFi", "Pool"]
    }"#;

    #[test]
    fn decodes_list_with_count() -> TestResult {
        let body = format!(r#"{{"success": true, "count": 1, "data": [{HOTEL_JSON}]}}"#);

        let response: ApiResponse<Vec<HotelRecord>> =
            read_response(StatusCode::OK, body.as_bytes(), Operation::ListHotels)?;

        let (data, count) = match response {
            ApiResponse::Success { data, count } => Some((data, count)),
            ApiResponse::Failure { .. } => None,
        }
        .ok_or("expected success")?;

        let hotels = data.ok_or("missing data")?;

        assert_eq!(count, Some(1));
        assert_eq!(hotels.len(), 1);
        assert_eq!(hotels.first().map(|hotel| hotel.id.as_str()), Some("665f1c"));

        Ok(())
    }

    #[test]
    fn failure_envelope_on_ok_status_is_remote_error() -> TestResult {
        let response: ApiResponse<HotelRecord> = read_response(
            StatusCode::OK,
            br#"{"success": false, "message": "Hotel not found"}"#,
            Operation::GetHotel,
        )?;

        let error = response.into_data(Operation::GetHotel).err().ok_or("expected error")?;

        assert_eq!(error.to_string(), "Hotel not found");

        Ok(())
    }

    #[test]
    fn error_status_prefers_body_message() {
        let result: Result<ApiResponse<HotelRecord>, _> = read_response(
            StatusCode::BAD_REQUEST,
            br#"{"success": false, "error": "Validation failed"}"#,
            Operation::CreateHotel,
        );

        assert!(matches!(
            result,
            Err(ApiError::Remote { ref message }) if message == "Validation failed"
        ));
    }

    #[test]
    fn error_status_joins_error_list() {
        let result: Result<ApiResponse<HotelRecord>, _> = read_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            br#"{"success": false, "errors": ["name is required", "rating too high"]}"#,
            Operation::UpdateHotel,
        );

        assert!(matches!(
            result,
            Err(ApiError::Remote { ref message }) if message == "name is required; rating too high"
        ));
    }

    #[test]
    fn error_status_without_json_uses_fallback() {
        let result: Result<ApiResponse<HotelRecord>, _> = read_response(
            StatusCode::BAD_GATEWAY,
            b"<html>bad gateway</html>",
            Operation::ListHotels,
        );

        assert!(matches!(
            result,
            Err(ApiError::Remote { ref message }) if message == "Failed to fetch hotels"
        ));
    }

    #[test]
    fn malformed_success_body_is_decode_error() {
        let result: Result<ApiResponse<HotelRecord>, _> =
            read_response(StatusCode::OK, b"{\"data\": 3}", Operation::GetHotel);

        assert!(matches!(
            result,
            Err(ApiError::Decode {
                operation: Operation::GetHotel,
                ..
            })
        ));
    }

    #[test]
    fn success_without_data_is_missing_data() -> TestResult {
        let response: ApiResponse<HotelRecord> =
            read_response(StatusCode::OK, br#"{"success": true}"#, Operation::CreateHotel)?;

        assert!(matches!(
            response.into_data(Operation::CreateHotel),
            Err(ApiError::MissingData { .. })
        ));

        Ok(())
    }

    #[test]
    fn empty_delete_body_is_success() -> TestResult {
        let response: ApiResponse<IgnoredAny> =
            read_response(StatusCode::NO_CONTENT, b"", Operation::DeleteHotel)?;

        response.into_unit(Operation::DeleteHotel)?;

        Ok(())
    }
}
