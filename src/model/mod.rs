//! Data transfer objects shared by the JSON API surface.

pub mod api;
pub mod upload;
