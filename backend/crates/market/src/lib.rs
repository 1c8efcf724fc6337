//! Market (Marketplace) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and configuration
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Product catalog with categories, reviews, and featured listings
//! - Escrow orders: funds stay locked until the buyer confirms delivery
//! - Per-user wallets with an append-only transaction ledger
//! - Payment requests (deposits/withdrawals) with unique references
//! - Key-value admin settings with upsert semantics
//!
//! ## Consistency Model
//! - Order creation claims stock with a conditional update inside one
//!   transaction, so the last unit can never be sold twice
//! - Escrow release row-locks the order, credits the seller, and appends
//!   exactly one ledger row, all in one transaction
//! - Ledger rows are immutable once inserted

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::MarketConfig;
pub use error::{MarketError, MarketResult};
pub use infra::postgres::PgMarketRepository;
pub use presentation::router::market_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgMarketRepository as MarketStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}

#[cfg(test)]
mod tests;
