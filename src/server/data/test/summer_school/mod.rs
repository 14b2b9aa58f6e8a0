use crate::server::data::summer_school::SummerSchoolRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_year;
