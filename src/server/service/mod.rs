//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing rules such as the thesis search filter resolution
//!   and the upload checks
//! - **Orchestration**: Coordinating repository calls with the thesis file storage
//! - **Domain Models**: Working with domain models rather than entity models

pub mod admin;
pub mod curriculum;
pub mod moderation;
pub mod sitemap;
pub mod staff;
pub mod summer_school;
pub mod thesis;
pub mod upload;
