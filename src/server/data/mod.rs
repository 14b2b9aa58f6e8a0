//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! entity or domain models to the service layer, which resolves lookups for display. All
//! database queries, inserts, updates and deletes are performed through these repositories.

pub mod admin;
pub mod courses;
pub mod curriculum;
pub mod staff;
pub mod summer_school;
pub mod thesis;
pub mod users;
pub mod worktype;

#[cfg(test)]
mod test;
