//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository or service boundary
//! and rendered by the view layer. Parameter types describe the inputs of service
//! operations independently of how the controller received them.

pub mod admin;
pub mod curriculum;
pub mod pagination;
pub mod staff;
pub mod summer_school;
pub mod thesis;
pub mod upload;
