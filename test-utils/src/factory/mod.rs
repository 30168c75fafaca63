//! Factory methods for creating test data.
//!
//! Factories insert entities directly through SeaORM with sensible defaults, bypassing the
//! application's repositories so tests can seed state independently of the code under test.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let character = factory::create_character(&db).await?;
//!
//! let wizard = factory::character::CharacterFactory::new(&db)
//!     .name("Merlin")
//!     .attribute("class", "wizard")
//!     .build()
//!     .await?;
//! ```

pub mod character;
pub mod helpers;

pub use character::create_character;
