use crate::server::data::curriculum::CurriculumRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_course_and_year;
