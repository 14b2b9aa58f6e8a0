pub use super::courses::Entity as Courses;
pub use super::curriculum::Entity as Curriculum;
pub use super::staff::Entity as Staff;
pub use super::summer_school::Entity as SummerSchool;
pub use super::thesis::Entity as Thesis;
pub use super::users::Entity as Users;
pub use super::worktype::Entity as Worktype;
