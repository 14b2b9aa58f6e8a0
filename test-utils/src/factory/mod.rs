//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` builder for customization and a
//! `create_*` convenience function for quick default creation. Factories that reference other
//! tables take the parent ids explicitly; `helpers` creates whole dependency chains.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::users::create_user(&db).await?;
//! let staff = factory::staff::create_staff(&db, user.id).await?;
//!
//! let (staff, worktype, course, thesis) =
//!     factory::helpers::create_thesis_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let thesis = factory::thesis::ThesisFactory::new(&db, worktype.id, course.id, staff.id)
//!     .publish_year(2019)
//!     .temporary(true)
//!     .build()
//!     .await?;
//! ```

pub mod courses;
pub mod curriculum;
pub mod helpers;
pub mod staff;
pub mod summer_school;
pub mod thesis;
pub mod users;
pub mod worktype;

pub use courses::create_course;
pub use curriculum::create_curriculum;
pub use staff::create_staff;
pub use summer_school::create_project;
pub use thesis::create_thesis;
pub use users::create_user;
pub use worktype::create_worktype;
