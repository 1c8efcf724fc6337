//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Product, Order, Wallet, ledger entries, ...)
//! - Domain value objects (statuses, commission rate, reference strings)
//! - Domain services (commission split)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
