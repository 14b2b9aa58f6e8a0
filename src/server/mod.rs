//! Server-side implementation of the department website.
//!
//! The server renders every page on request, answers the thesis upload API and hosts the
//! admin backend. The backend uses Axum as the web framework and SeaORM for database
//! operations; pages are rendered by [`crate::view`].
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and access control
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Basic authentication guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, configuration, file storage)
//! - **Startup** (`startup`) - Database connection, migrations and storage directories
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Storage** (`storage`) - Staged and published thesis files
//! - **Site** (`site`) - Table of public pages
//! - **Freeze** (`freeze`) - Static site build
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** checks credentials where required and calls a service
//! 3. **Service** executes business logic and orchestrates data operations
//! 4. **Data** queries the database
//! 5. **Controller** renders the result as HTML, or JSON for the upload API

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod freeze;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod site;
pub mod startup;
pub mod state;
pub mod storage;
pub mod util;
