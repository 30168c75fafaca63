//! HTTP request handlers.
//!
//! Controllers convert request bodies and path parameters into parameter models, call the
//! service layer and convert domain models back into DTOs.

pub mod character;
pub mod fallback;

#[cfg(test)]
mod test;
