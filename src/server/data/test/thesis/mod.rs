use crate::server::{
    data::thesis::ThesisRepository,
    model::{thesis::ThesisQueryParam, upload::CreateTemporaryThesisParam},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create_temporary;
mod delete;
mod exists_by_text_uri;
mod find_temporary;
mod get_course_ids;
mod get_publish_years;
mod get_random_recommended;
mod mark_published;
mod search;
