//! SeaORM entities for the department website database.

pub mod prelude;

pub mod courses;
pub mod curriculum;
pub mod staff;
pub mod summer_school;
pub mod thesis;
pub mod users;
pub mod worktype;
