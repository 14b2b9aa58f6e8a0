//! HTTP request handlers.
//!
//! Handlers extract request data, call the service layer and render the result through
//! [`crate::view`]. Moderation and admin handlers check basic authentication first.

pub mod admin;
pub mod curriculum;
pub mod moderation;
pub mod page;
pub mod sitemap;
pub mod staff;
pub mod summer_school;
pub mod thesis;
pub mod upload;

#[cfg(test)]
pub(crate) mod test;
