//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Contains use case implementations.

pub mod complete_order;
pub mod config;
pub mod create_order;
pub mod payment_request;
pub mod record_transaction;
