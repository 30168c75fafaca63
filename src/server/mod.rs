//! Server-side API backend.
//!
//! The backend uses Axum as the web framework and SeaORM over SQLite as the character
//! document store.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Store calls under the per-request budget
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, schema validation and parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Access logging
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (store handle and policies)
//! - **Startup** (`startup`) - Logging, database initialization and shutdown signal
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Assets** (`assets`) - Static front end with single-page history fallback
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to the appropriate controller
//! 2. **Controller** parses the id and body, validates into params, calls service
//! 3. **Service** runs the repository call within the store budget
//! 4. **Data** queries the database, converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and returns the response
//!
//! Any failure along the way becomes an `AppError`, which always renders a JSON body.

pub mod assets;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
