//! Hotelier
//!
//! Hotelier is the domain core of a hotel inventory manager: the hotel record model, the form
//! validator that guards records before they cross the API boundary, and the filtering and
//! statistics helpers used to render a hotel collection.

pub mod filter;
pub mod fixtures;
pub mod hotels;
pub mod stats;
pub mod validation;
