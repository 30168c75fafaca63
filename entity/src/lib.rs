//! SeaORM entity definitions for the character document store.

pub mod character;
pub mod prelude;
