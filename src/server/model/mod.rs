//! Server-side domain and parameter models.
//!
//! These models sit between the data layer and the service/controller layers, with
//! conversion methods to and from entity models and DTOs.

pub mod character;
