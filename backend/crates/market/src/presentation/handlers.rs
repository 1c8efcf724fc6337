//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use kernel::envelope::Envelope;
use uuid::Uuid;

use crate::application::complete_order::{CompleteOrderInput, CompleteOrderUseCase};
use crate::application::config::MarketConfig;
use crate::application::create_order::{CreateOrderInput, CreateOrderUseCase};
use crate::application::payment_request::{PaymentRequestInput, PaymentRequestUseCase};
use crate::application::record_transaction::{RecordTransactionInput, RecordTransactionUseCase};
use crate::domain::repository::{
    CatalogRepository, OrderRepository, Page, PaymentRepository, ProductFilter, ProfileRepository,
    SettingsRepository, WalletRepository,
};
use crate::domain::value_objects::{LedgerEntryKind, OrderRole, PaymentType, WalletKind};
use crate::error::{MarketError, MarketResult};
use crate::presentation::dto::{
    CategoryResponse, CompleteOrderRequest, CreateOrderRequest, EscrowReleaseResponse,
    OrderListQuery, OrderResponse, OrderViewResponse, PageQuery, PaymentRequestBody,
    PaymentResponse, ProductDetailResponse, ProductListQuery, ProductSummaryResponse,
    ProfileResponse, SellerInfoResponse, TransactionCreatedResponse, TransactionRequestBody,
    TransactionResponse, WalletResponse,
};

/// Hard cap on listing page sizes
const MAX_PAGE_SIZE: i64 = 100;
const DEFAULT_PAGE_SIZE: i64 = 20;

/// Full repository surface the HTTP layer needs
pub trait MarketRepository:
    ProfileRepository
    + CatalogRepository
    + WalletRepository
    + OrderRepository
    + PaymentRepository
    + SettingsRepository
    + Clone
    + Send
    + Sync
    + 'static
{
}

impl<T> MarketRepository for T where
    T: ProfileRepository
        + CatalogRepository
        + WalletRepository
        + OrderRepository
        + PaymentRepository
        + SettingsRepository
        + Clone
        + Send
        + Sync
        + 'static
{
}

/// Shared state for marketplace handlers
#[derive(Clone)]
pub struct MarketAppState<R>
where
    R: MarketRepository,
{
    pub repo: Arc<R>,
    pub config: Arc<MarketConfig>,
}

fn clamp_page(limit: Option<i64>, offset: Option<i64>) -> (i64, i64) {
    let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    let offset = offset.unwrap_or(0).max(0);
    (limit, offset)
}

/// GET /api/market/profile/{user_id}
pub async fn get_profile<R>(
    State(state): State<MarketAppState<R>>,
    Path(user_id): Path<Uuid>,
) -> MarketResult<Envelope<ProfileResponse>>
where
    R: MarketRepository,
{
    let profile = state
        .repo
        .profile(user_id.into())
        .await?
        .ok_or(MarketError::NotFound("Profile"))?;

    Ok(Envelope::ok(profile.into()))
}

/// GET /api/market/wallet/{user_id}
pub async fn get_wallet<R>(
    State(state): State<MarketAppState<R>>,
    Path(user_id): Path<Uuid>,
) -> MarketResult<Envelope<WalletResponse>>
where
    R: MarketRepository,
{
    let wallet = state
        .repo
        .wallet(user_id.into())
        .await?
        .ok_or(MarketError::NotFound("Wallet"))?;

    Ok(Envelope::ok(wallet.into()))
}

/// GET /api/market/users/{user_id}/transactions
pub async fn list_transactions<R>(
    State(state): State<MarketAppState<R>>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<PageQuery>,
) -> MarketResult<Envelope<Vec<TransactionResponse>>>
where
    R: MarketRepository,
{
    let (limit, offset) = clamp_page(query.limit, query.offset);

    let entries = state
        .repo
        .transactions(user_id.into(), Page { limit, offset })
        .await?;

    Ok(Envelope::ok(entries.into_iter().map(Into::into).collect()))
}

/// GET /api/market/products
pub async fn list_products<R>(
    State(state): State<MarketAppState<R>>,
    Query(query): Query<ProductListQuery>,
) -> MarketResult<Envelope<Vec<ProductSummaryResponse>>>
where
    R: MarketRepository,
{
    let (limit, offset) = clamp_page(query.limit, query.offset);

    let filter = ProductFilter {
        category_id: query.category.map(Into::into),
        search: query.search.filter(|s| !s.trim().is_empty()),
        limit,
        offset,
    };

    let products = state.repo.products(&filter).await?;

    Ok(Envelope::ok(products.into_iter().map(Into::into).collect()))
}

/// GET /api/market/products/{product_id}
pub async fn get_product<R>(
    State(state): State<MarketAppState<R>>,
    Path(product_id): Path<Uuid>,
) -> MarketResult<Envelope<ProductDetailResponse>>
where
    R: MarketRepository,
{
    let product = state
        .repo
        .product(product_id.into())
        .await?
        .ok_or(MarketError::NotFound("Product"))?;

    Ok(Envelope::ok(product.into()))
}

/// GET /api/market/categories
pub async fn list_categories<R>(
    State(state): State<MarketAppState<R>>,
) -> MarketResult<Envelope<Vec<CategoryResponse>>>
where
    R: MarketRepository,
{
    let categories = state.repo.categories().await?;

    Ok(Envelope::ok(
        categories.into_iter().map(Into::into).collect(),
    ))
}

/// GET /api/market/users/{user_id}/orders
pub async fn list_orders<R>(
    State(state): State<MarketAppState<R>>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<OrderListQuery>,
) -> MarketResult<Envelope<Vec<OrderViewResponse>>>
where
    R: MarketRepository,
{
    let role = match query.role.as_deref() {
        None | Some("buyer") => OrderRole::Buyer,
        Some("seller") => OrderRole::Seller,
        Some(_) => return Err(MarketError::BadRequest("Unknown order role")),
    };

    let orders = state.repo.orders_for_user(user_id.into(), role).await?;

    Ok(Envelope::ok(orders.into_iter().map(Into::into).collect()))
}

/// POST /api/market/orders
pub async fn create_order<R>(
    State(state): State<MarketAppState<R>>,
    Json(req): Json<CreateOrderRequest>,
) -> MarketResult<Envelope<OrderResponse>>
where
    R: MarketRepository,
{
    let use_case =
        CreateOrderUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let order = use_case
        .execute(CreateOrderInput {
            buyer_id: req.buyer_id.into(),
            product_id: req.product_id.into(),
        })
        .await?;

    Ok(Envelope::created(order.into()))
}

/// POST /api/market/orders/{order_id}/complete
pub async fn complete_order<R>(
    State(state): State<MarketAppState<R>>,
    Path(order_id): Path<Uuid>,
    Json(req): Json<CompleteOrderRequest>,
) -> MarketResult<Envelope<EscrowReleaseResponse>>
where
    R: MarketRepository,
{
    let use_case = CompleteOrderUseCase::new(state.repo.clone());

    let release = use_case
        .execute(CompleteOrderInput {
            buyer_id: req.buyer_id.into(),
            order_id: order_id.into(),
        })
        .await?;

    Ok(Envelope::ok(release.into()))
}

/// POST /api/market/payments
pub async fn create_payment<R>(
    State(state): State<MarketAppState<R>>,
    Json(req): Json<PaymentRequestBody>,
) -> MarketResult<Envelope<PaymentResponse>>
where
    R: MarketRepository,
{
    let payment_type = PaymentType::parse(&req.payment_type)
        .ok_or(MarketError::BadRequest("Unknown payment type"))?;

    let use_case =
        PaymentRequestUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let payment = use_case
        .execute(PaymentRequestInput {
            user_id: req.user_id.into(),
            amount: req.amount,
            payment_type,
            order_id: req.order_id.map(Into::into),
        })
        .await?;

    Ok(Envelope::created(payment.into()))
}

/// POST /api/market/transactions
pub async fn record_transaction<R>(
    State(state): State<MarketAppState<R>>,
    Json(req): Json<TransactionRequestBody>,
) -> MarketResult<Envelope<TransactionCreatedResponse>>
where
    R: MarketRepository,
{
    let wallet =
        WalletKind::parse(&req.wallet_type).ok_or(MarketError::BadRequest("Unknown wallet type"))?;
    let kind = LedgerEntryKind::parse(&req.tx_type)
        .ok_or(MarketError::BadRequest("Unknown transaction type"))?;

    let use_case = RecordTransactionUseCase::new(state.repo.clone());

    let entry_id = use_case
        .execute(RecordTransactionInput {
            user_id: req.user_id.into(),
            wallet,
            kind,
            amount: req.amount,
            order_id: req.order_id.map(Into::into),
            product_id: req.product_id.map(Into::into),
        })
        .await?;

    Ok(Envelope::created(TransactionCreatedResponse {
        tx_id: entry_id.into_uuid(),
    }))
}

/// GET /api/market/sellers/{user_id}
pub async fn get_seller<R>(
    State(state): State<MarketAppState<R>>,
    Path(user_id): Path<Uuid>,
) -> MarketResult<Envelope<SellerInfoResponse>>
where
    R: MarketRepository,
{
    let info = state
        .repo
        .seller_info(user_id.into())
        .await?
        .ok_or(MarketError::NotFound("Seller"))?;

    Ok(Envelope::ok(info.into()))
}

/// GET /api/market/sellers/{user_id}/products
pub async fn list_seller_products<R>(
    State(state): State<MarketAppState<R>>,
    Path(user_id): Path<Uuid>,
) -> MarketResult<Envelope<Vec<ProductSummaryResponse>>>
where
    R: MarketRepository,
{
    let products = state.repo.seller_products(user_id.into()).await?;

    Ok(Envelope::ok(products.into_iter().map(Into::into).collect()))
}
