//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models so the
//! data layer stays separate from business logic.

pub mod character;
