//! Market Error Types
//!
//! This module provides marketplace-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Market-specific result type alias
pub type MarketResult<T> = Result<T, MarketError>;

/// Market-specific error variants
///
/// The two domain errors (`ProductUnavailable`, `InvalidOrderState`) are
/// raised mid-transaction; the repository rolls back fully before they
/// propagate, so callers never observe partial state.
#[derive(Debug, Error)]
pub enum MarketError {
    /// Product missing, unapproved, or out of stock
    #[error("Product not found or out of stock")]
    ProductUnavailable,

    /// Order missing or not in the status the transition requires
    #[error("Invalid order")]
    InvalidOrderState,

    /// Generic missing resource (profile, wallet, category, ...)
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Malformed request input
    #[error("{0}")]
    BadRequest(&'static str),

    /// Payment amount not positive
    #[error("Invalid amount")]
    InvalidAmount,

    /// Withdrawal amount outside the configured bounds
    #[error("Withdrawal amount must be between {min} and {max}")]
    WithdrawalOutOfRange { min: i64, max: i64 },

    /// Wallet balance cannot cover the requested amount plus fee
    #[error("Insufficient balance")]
    InsufficientBalance,

    /// Platform is in maintenance mode
    #[error("Marketplace is under maintenance")]
    Maintenance,

    /// CSRF token missing or mismatched
    #[error("CSRF token verification failed")]
    CsrfRejected,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl MarketError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            MarketError::ProductUnavailable => StatusCode::CONFLICT,
            MarketError::InvalidOrderState => StatusCode::UNPROCESSABLE_ENTITY,
            MarketError::NotFound(_) => StatusCode::NOT_FOUND,
            MarketError::BadRequest(_) => StatusCode::BAD_REQUEST,
            MarketError::InvalidAmount | MarketError::WithdrawalOutOfRange { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            MarketError::InsufficientBalance => StatusCode::PAYMENT_REQUIRED,
            MarketError::Maintenance => StatusCode::SERVICE_UNAVAILABLE,
            MarketError::CsrfRejected => StatusCode::FORBIDDEN,
            MarketError::Database(_) | MarketError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            MarketError::ProductUnavailable => ErrorKind::Conflict,
            MarketError::InvalidOrderState => ErrorKind::UnprocessableEntity,
            MarketError::NotFound(_) => ErrorKind::NotFound,
            MarketError::BadRequest(_) => ErrorKind::BadRequest,
            MarketError::InvalidAmount | MarketError::WithdrawalOutOfRange { .. } => {
                ErrorKind::UnprocessableEntity
            }
            MarketError::InsufficientBalance => ErrorKind::PaymentRequired,
            MarketError::Maintenance => ErrorKind::ServiceUnavailable,
            MarketError::CsrfRejected => ErrorKind::Forbidden,
            MarketError::Database(_) | MarketError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            MarketError::Database(e) => {
                tracing::error!(error = %e, "Market database error");
            }
            MarketError::Internal(msg) => {
                tracing::error!(message = %msg, "Market internal error");
            }
            MarketError::ProductUnavailable => {
                tracing::warn!("Order attempt on unavailable product");
            }
            MarketError::InvalidOrderState => {
                tracing::warn!("Escrow release attempt on order in wrong state");
            }
            MarketError::CsrfRejected => {
                tracing::warn!("CSRF verification failed");
            }
            _ => {
                tracing::debug!(error = %self, "Market error");
            }
        }
    }
}

impl IntoResponse for MarketError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for MarketError {
    fn from(err: AppError) -> Self {
        MarketError::Internal(err.to_string())
    }
}
