//! Hotels controller
//!
//! Drives [`AppState`] through the hotels API. Remote failures are recorded in the banner and
//! leave the collection untouched; the collection only changes after the store confirms.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    future::Future,
    sync::Arc,
    time::Duration,
};

use hotelier::{
    filter::RoomTypeFilter,
    hotels::{HotelId, HotelRecord, NewHotel},
    validation::{self, HotelDraft, ValidationErrors},
};
use jiff::civil::Date;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    api::{ApiError, HotelsApi, ListHotelsQuery},
    search::{LiveSearch, SEARCH_DEBOUNCE, SearchOutcome},
    state::AppState,
};

/// Why a submission did not persist.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The draft failed validation; nothing was sent.
    #[error("{0}")]
    Invalid(ValidationErrors),

    /// The store rejected the hotel or could not be reached.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Application controller owning the list view state.
pub struct HotelsController {
    api: Arc<dyn HotelsApi>,
    live_search: LiveSearch,
    state: AppState,
}

impl Debug for HotelsController {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("HotelsController")
            .field("live_search", &self.live_search)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl HotelsController {
    /// Controller over `api` using the default search debounce.
    pub fn new(api: Arc<dyn HotelsApi>) -> Self {
        Self::with_debounce(api, SEARCH_DEBOUNCE)
    }

    /// Controller over `api` waiting `debounce` before each live search.
    pub fn with_debounce(api: Arc<dyn HotelsApi>, debounce: Duration) -> Self {
        Self {
            live_search: LiveSearch::new(Arc::clone(&api), debounce),
            api,
            state: AppState::default(),
        }
    }

    /// Current state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Reload the collection with the current filter pushed down to the store.
    ///
    /// # Errors
    ///
    /// Returns the API error after recording it in the banner.
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        let query = ListHotelsQuery::from_filter(&self.state.filter);

        self.refresh_query(query).await
    }

    /// Reload the collection with an explicit query, e.g. one carrying price bounds.
    ///
    /// # Errors
    ///
    /// Returns the API error after recording it in the banner.
    pub async fn refresh_query(&mut self, query: ListHotelsQuery) -> Result<(), ApiError> {
        let outcome = self.live_search.immediate(query).await;

        self.apply_search(outcome).map(|_| ())
    }

    /// Open an empty form.
    pub fn begin_create(&mut self) -> HotelDraft {
        self.state.editing = None;
        self.state.form_errors = ValidationErrors::default();

        HotelDraft::default()
    }

    /// Open the form prefilled with the hotel `id`.
    ///
    /// # Errors
    ///
    /// Returns the API error when the hotel is not loaded and cannot be fetched.
    pub async fn begin_edit(&mut self, id: &HotelId) -> Result<HotelDraft, ApiError> {
        let draft = match self.state.find(id) {
            Some(hotel) => HotelDraft::from(hotel),
            None => {
                let result = self.api.get_hotel(id.clone()).await;
                let hotel = self.record(result)?;

                HotelDraft::from(&hotel)
            }
        };

        self.state.editing = Some(id.clone());
        self.state.form_errors = ValidationErrors::default();

        Ok(draft)
    }

    /// Close the form without saving.
    pub fn cancel_edit(&mut self) {
        self.state.editing = None;
        self.state.form_errors = ValidationErrors::default();
    }

    /// Validate and persist `draft`, checking the date against today.
    ///
    /// # Errors
    ///
    /// See [`submit_on`](Self::submit_on).
    pub async fn submit(&mut self, draft: &HotelDraft) -> Result<HotelRecord, SubmitError> {
        let validated = validation::validate_today(draft);

        self.persist(validated).await
    }

    /// Validate `draft` as of `today`, then create it or update the hotel being edited.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Invalid`] without contacting the store when validation fails,
    /// and [`SubmitError::Api`] when the store fails.
    pub async fn submit_on(
        &mut self,
        draft: &HotelDraft,
        today: Date,
    ) -> Result<HotelRecord, SubmitError> {
        let validated = validation::validate(draft, today);

        self.persist(validated).await
    }

    async fn persist(
        &mut self,
        validated: Result<NewHotel, ValidationErrors>,
    ) -> Result<HotelRecord, SubmitError> {
        let hotel = match validated {
            Ok(hotel) => hotel,
            Err(errors) => {
                debug!(rejected = errors.len(), "draft failed validation");

                self.state.form_errors = errors.clone();

                return Err(SubmitError::Invalid(errors));
            }
        };

        self.state.form_errors = ValidationErrors::default();

        let result = match self.state.editing.clone() {
            Some(id) => self.api.update_hotel(id, hotel).await,
            None => self.api.create_hotel(hotel).await,
        };

        let record = self.record(result)?;

        self.state.upsert(record.clone());
        self.state.editing = None;

        Ok(record)
    }

    /// Delete the hotel `id` once the user has confirmed.
    ///
    /// # Errors
    ///
    /// Returns the API error after recording it in the banner.
    pub async fn delete(&mut self, id: &HotelId) -> Result<(), ApiError> {
        let result = self.api.delete_hotel(id.clone()).await;

        self.record(result)?;
        self.state.remove(id);

        if self.state.editing.as_ref() == Some(id) {
            self.state.editing = None;
        }

        Ok(())
    }

    /// Set the search term and return the debounced request for it.
    ///
    /// The returned future owns everything it needs, so several searches can be in flight at
    /// once; hand each outcome to [`apply_search`](Self::apply_search).
    pub fn begin_search(
        &mut self,
        term: String,
    ) -> impl Future<Output = SearchOutcome> + Send + use<> {
        self.state.filter.search = term;

        let query = ListHotelsQuery::from_filter(&self.state.filter);
        let live_search = self.live_search.clone();

        async move { live_search.run(query).await }
    }

    /// Apply a live search outcome. Returns whether the collection changed.
    ///
    /// # Errors
    ///
    /// Returns the API error of the latest request after recording it in the banner.
    pub fn apply_search(&mut self, outcome: SearchOutcome) -> Result<bool, ApiError> {
        match outcome {
            SearchOutcome::Superseded => Ok(false),
            SearchOutcome::Completed(result) => {
                self.state.hotels = self.record(result)?;

                Ok(true)
            }
        }
    }

    /// Set the search term and wait for the debounced search.
    ///
    /// # Errors
    ///
    /// Returns the API error after recording it in the banner.
    pub async fn search(&mut self, term: impl Into<String>) -> Result<bool, ApiError> {
        let outcome = self.begin_search(term.into()).await;

        self.apply_search(outcome)
    }

    /// Set the search term without sending a request.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.state.filter.search = term.into();
    }

    /// Select a room type for the list view.
    pub fn set_room_type(&mut self, room_type: RoomTypeFilter) {
        self.state.filter.room_type = room_type;
    }

    /// Reset the search term and room type selector.
    pub fn clear_filters(&mut self) {
        self.state.filter.clear();
    }

    /// Hide the banner.
    pub fn dismiss_banner(&mut self) {
        self.state.banner = None;
    }

    fn record<T>(&mut self, result: Result<T, ApiError>) -> Result<T, ApiError> {
        result.inspect_err(|error| {
            warn!(%error, "remote operation failed");

            self.state.banner = Some(error.to_string());
        })
    }
}
