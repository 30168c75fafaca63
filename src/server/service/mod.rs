//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Orchestration**: Calling repositories on behalf of controllers
//! - **Budgets**: Bounding every store call with the configured timeout
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod character;
