//! Domain Layer - page model and business rules
//!
//! This layer contains:
//! - **Entities**: Document tree, window, notifications, vehicle records
//! - **Value Objects**: Theme, Price, PagePath, Rect
//! - **Repository Interfaces**: Preference storage abstraction
//! - **Domain Services**: Price table, active-link resolution, reveal geometry
//! - **Domain Errors**: Error types for domain operations

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
