use crate::server::data::staff::StaffRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_user_id;
mod get_by_ids;
mod get_working;
