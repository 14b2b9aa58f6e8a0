mod admin;
mod curriculum;
mod staff;
mod summer_school;
mod thesis;
mod users;
