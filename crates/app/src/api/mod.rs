//! REST boundary: the [`HotelsApi`] trait, its HTTP and in-memory implementations, and the
//! response envelope every reply is decoded through.

mod envelope;
mod errors;
mod http;
mod local;
mod query;
mod service;

pub use envelope::{ApiResponse, read_response};
pub use errors::{ApiError, Operation};
pub use http::HttpHotelsApi;
pub use local::LocalHotelsApi;
pub use query::ListHotelsQuery;
pub use service::{HotelsApi, MockHotelsApi};
