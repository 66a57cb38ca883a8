//! REST client for the hotels service.

use std::time::Duration;

use async_trait::async_trait;
use hotelier::{
    hotels::{HotelId, HotelRecord, NewHotel},
    stats::HotelStats,
};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::{DeserializeOwned, IgnoredAny};
use tracing::{debug, error};

use crate::api::{ApiError, ApiResponse, HotelsApi, ListHotelsQuery, Operation, read_response};

const HOTELS_PATH: [&str; 2] = ["api", "hotels"];

/// HTTP client for `{base_url}/api/hotels`.
#[derive(Debug, Clone)]
pub struct HttpHotelsApi {
    base_url: Url,
    http: Client,
}

impl HttpHotelsApi {
    /// Create a client for the service at `base_url`, e.g. `"http://localhost:5000"`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute http(s) URL or the client cannot be
    /// built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let parsed =
            Url::parse(base_url).map_err(|_err| ApiError::InvalidBaseUrl(base_url.to_string()))?;

        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            base_url: parsed,
            http,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(HOTELS_PATH)
            .extend(segments);

        Ok(url)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        operation: Operation,
    ) -> Result<ApiResponse<T>, ApiError> {
        let response = request.send().await.map_err(|source| {
            error!(%operation, error = %source, "request failed");

            ApiError::Transport { operation, source }
        })?;

        let status = response.status();

        let body = response.bytes().await.map_err(|source| {
            error!(%operation, %status, error = %source, "failed to read response body");

            ApiError::Transport { operation, source }
        })?;

        debug!(%operation, %status, bytes = body.len(), "received response");

        read_response(status, &body, operation)
    }
}

#[async_trait]
impl HotelsApi for HttpHotelsApi {
    #[tracing::instrument(skip(self), err)]
    async fn list_hotels(&self, query: ListHotelsQuery) -> Result<Vec<HotelRecord>, ApiError> {
        let operation = Operation::ListHotels;
        let request = self.http.get(self.endpoint(&[])?).query(&query);

        self.send(request, operation).await?.into_data(operation)
    }

    #[tracing::instrument(skip(self), err)]
    async fn get_hotel(&self, id: HotelId) -> Result<HotelRecord, ApiError> {
        let operation = Operation::GetHotel;
        let request = self.http.get(self.endpoint(&[id.as_str()])?);

        self.send(request, operation).await?.into_data(operation)
    }

    #[tracing::instrument(skip(self, hotel), fields(name = %hotel.name), err)]
    async fn create_hotel(&self, hotel: NewHotel) -> Result<HotelRecord, ApiError> {
        let operation = Operation::CreateHotel;
        let request = self.http.post(self.endpoint(&[])?).json(&hotel);

        self.send(request, operation).await?.into_data(operation)
    }

    #[tracing::instrument(skip(self, hotel), fields(name = %hotel.name), err)]
    async fn update_hotel(&self, id: HotelId, hotel: NewHotel) -> Result<HotelRecord, ApiError> {
        let operation = Operation::UpdateHotel;
        let request = self.http.put(self.endpoint(&[id.as_str()])?).json(&hotel);

        self.send(request, operation).await?.into_data(operation)
    }

    #[tracing::instrument(skip(self), err)]
    async fn delete_hotel(&self, id: HotelId) -> Result<(), ApiError> {
        let operation = Operation::DeleteHotel;
        let request = self.http.delete(self.endpoint(&[id.as_str()])?);

        self.send::<IgnoredAny>(request, operation)
            .await?
            .into_unit(operation)
    }

    #[tracing::instrument(skip(self), err)]
    async fn hotel_stats(&self) -> Result<HotelStats, ApiError> {
        let operation = Operation::HotelStats;
        let request = self.http.get(self.endpoint(&["stats"])?);

        self.send(request, operation).await?.into_data(operation)
    }
}
