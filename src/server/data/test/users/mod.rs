use crate::server::data::users::UserRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_last_name;
