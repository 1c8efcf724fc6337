//! Market Router

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::application::config::MarketConfig;
use crate::infra::postgres::PgMarketRepository;
use crate::presentation::handlers::{self, MarketAppState, MarketRepository};
use crate::presentation::middleware::{
    MarketMiddlewareState, check_maintenance, enforce_https, verify_csrf,
};

/// Create the market router with PostgreSQL repository
pub fn market_router(repo: PgMarketRepository, config: MarketConfig) -> Router {
    market_router_generic(repo, config)
}

/// Create a generic market router for any repository implementation
pub fn market_router_generic<R>(repo: R, config: MarketConfig) -> Router
where
    R: MarketRepository,
{
    let state = MarketAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    let middleware_state = MarketMiddlewareState {
        repo: state.repo.clone(),
        config: state.config.clone(),
    };

    let csrf_config = state.config.clone();
    let https_config = state.config.clone();

    Router::new()
        .route("/profile/{user_id}", get(handlers::get_profile::<R>))
        .route("/wallet/{user_id}", get(handlers::get_wallet::<R>))
        .route(
            "/users/{user_id}/transactions",
            get(handlers::list_transactions::<R>),
        )
        .route(
            "/users/{user_id}/orders",
            get(handlers::list_orders::<R>),
        )
        .route("/products", get(handlers::list_products::<R>))
        .route("/products/{product_id}", get(handlers::get_product::<R>))
        .route("/categories", get(handlers::list_categories::<R>))
        .route("/orders", post(handlers::create_order::<R>))
        .route(
            "/orders/{order_id}/complete",
            post(handlers::complete_order::<R>),
        )
        .route("/payments", post(handlers::create_payment::<R>))
        .route(
            "/transactions",
            post(handlers::record_transaction::<R>),
        )
        .route("/sellers/{user_id}", get(handlers::get_seller::<R>))
        .route(
            "/sellers/{user_id}/products",
            get(handlers::list_seller_products::<R>),
        )
        // Layer order (outer to inner): HTTPS redirect, maintenance, CSRF
        .layer(middleware::from_fn(move |req, next| {
            verify_csrf(csrf_config.clone(), req, next)
        }))
        .layer(middleware::from_fn(move |req, next| {
            check_maintenance(middleware_state.clone(), req, next)
        }))
        .layer(middleware::from_fn(move |req, next| {
            enforce_https(https_config.clone(), req, next)
        }))
        .with_state(state)
}
