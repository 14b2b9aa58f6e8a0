//! Page components, one per site section.
//!
//! Every root component takes a props struct and is rendered by [`crate::view::render`].

pub mod admin;
pub mod bachelor;
pub mod department;
pub mod error;
pub mod home;
pub mod master;
pub mod students;
pub mod summer_school;
pub mod theses;

use dioxus::prelude::*;

use crate::view::PageContext;

/// Props of pages without dynamic content.
#[derive(Props, Clone, PartialEq)]
pub struct StaticPageProps {
    pub ctx: PageContext,
}
