//! Hotel inventory application layer: the REST boundary, debounced live search, and the
//! controller that keeps the list view state.

pub mod api;
pub mod context;
pub mod controller;
pub mod search;
pub mod state;
