//! App Context

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    path::PathBuf,
    sync::Arc,
    time::Duration,
};

use hotelier::fixtures::FixtureError;
use thiserror::Error;
use tracing::info;

use crate::{
    api::{ApiError, HotelsApi, HttpHotelsApi, LocalHotelsApi},
    controller::HotelsController,
    search::SEARCH_DEBOUNCE,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to configure the hotels API")]
    Api(#[source] ApiError),

    #[error("failed to load seed hotels")]
    Seed(#[source] FixtureError),
}

/// Where hotels are stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    /// REST service at `base_url`.
    Http {
        /// Service root, e.g. `http://localhost:5000`
        base_url: String,

        /// Per-request timeout
        timeout: Duration,
    },

    /// In-process store seeded from a YAML file, or the bundled hotels.
    Local {
        /// Seed file, bundled hotels when `None`
        seed_file: Option<PathBuf>,
    },
}

#[derive(Clone)]
pub struct AppContext {
    pub hotels: Arc<dyn HotelsApi>,
    pub search_debounce: Duration,
}

impl Debug for AppContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AppContext")
            .field("search_debounce", &self.search_debounce)
            .finish_non_exhaustive()
    }
}

impl AppContext {
    /// Build application context for `backend`.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built or the seed hotels cannot be
    /// loaded.
    pub fn from_backend(backend: Backend) -> Result<Self, AppInitError> {
        let hotels: Arc<dyn HotelsApi> = match backend {
            Backend::Http { base_url, timeout } => {
                info!(%base_url, "using hotels service");

                Arc::new(HttpHotelsApi::new(&base_url, timeout).map_err(AppInitError::Api)?)
            }
            Backend::Local { seed_file: Some(path) } => {
                info!(path = %path.display(), "using local store");

                Arc::new(LocalHotelsApi::from_seed_file(path).map_err(AppInitError::Seed)?)
            }
            Backend::Local { seed_file: None } => {
                info!("using local store with bundled hotels");

                Arc::new(LocalHotelsApi::seeded().map_err(AppInitError::Seed)?)
            }
        };

        Ok(Self {
            hotels,
            search_debounce: SEARCH_DEBOUNCE,
        })
    }

    /// Use `debounce` for live searches.
    #[must_use]
    pub fn with_search_debounce(mut self, debounce: Duration) -> Self {
        self.search_debounce = debounce;

        self
    }

    /// A controller over this context's store.
    pub fn controller(&self) -> HotelsController {
        HotelsController::with_debounce(Arc::clone(&self.hotels), self.search_debounce)
    }
}
