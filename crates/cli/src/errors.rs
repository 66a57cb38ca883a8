//! CLI Errors

use std::io;

use hotelier::validation::ValidationErrors;
use hotelier_app::{api::ApiError, controller::SubmitError};
use thiserror::Error;
use tokio::task::JoinError;

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("hotel was not saved: {} field(s) rejected", .0.len())]
    Invalid(ValidationErrors),

    #[error("search task failed")]
    Search(#[from] JoinError),

    #[error("failed to read confirmation")]
    Input(#[source] io::Error),

    #[error("failed to write output")]
    Output(#[from] io::Error),
}

impl From<SubmitError> for CliError {
    fn from(error: SubmitError) -> Self {
        match error {
            SubmitError::Invalid(errors) => Self::Invalid(errors),
            SubmitError::Api(error) => Self::Api(error),
        }
    }
}
