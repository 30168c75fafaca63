//! Character API Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the character
//! API. This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases and factories for seeding character documents.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Character;
//!
//! #[tokio::test]
//! async fn test_character_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Character)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
