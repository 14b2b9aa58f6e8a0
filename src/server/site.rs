//! Table of the site's public pages.

/// Pages listed in the sitemap and written by the static site build.
pub const PUBLIC_PAGES: [&str; 14] = [
    "/",
    "/contacts.html",
    "/students/index.html",
    "/students/scholarships.html",
    "/bachelor/application.html",
    "/bachelor/admission.html",
    "/bachelor/programming-technology.html",
    "/bachelor/software-engineering.html",
    "/master/information-systems-administration.html",
    "/master/software-engineering.html",
    "/department/staff.html",
    "/frequently-asked-questions.html",
    "/theses.html",
    "/summer_school_2021.html",
];

/// Built alongside the public pages but kept out of the sitemap.
///
/// `/fetch_theses` is frozen with its default results for the thesis search script.
pub const UNLISTED_PAGES: [&str; 4] = [
    "/404.html",
    "/nooffer.html",
    "/sitemap.xml",
    "/fetch_theses",
];

/// Every path written by the static site build.
pub fn frozen_paths() -> impl Iterator<Item = &'static str> {
    PUBLIC_PAGES.into_iter().chain(UNLISTED_PAGES)
}
