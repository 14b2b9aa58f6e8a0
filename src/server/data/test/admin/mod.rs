use crate::server::data::admin::AdminRepository;
use entity::prelude::Courses;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_paginated;
