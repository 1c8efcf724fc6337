//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{CategoryId, LedgerEntryId, OrderId, ProductId, UserId};

use crate::domain::entities::{
    Category, EscrowRelease, LedgerEntry, NewLedgerEntry, NewPaymentRequest, Order, OrderView,
    Payment, Profile, ProductDetail, ProductSummary, SellerInfo, Wallet,
};
use crate::domain::value_objects::{CommissionRate, OrderRole};
use crate::error::MarketResult;

/// Listing filter for the public product catalog
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category_id: Option<CategoryId>,
    /// Case-insensitive substring match on the title
    pub search: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

/// Pagination window for ledger history
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: 20,
            offset: 0,
        }
    }
}

/// User profile and premium seller reads
#[trait_variant::make(ProfileRepository: Send)]
pub trait LocalProfileRepository {
    /// Fetch a user profile joined with wallet balances
    async fn profile(&self, user_id: UserId) -> MarketResult<Option<Profile>>;

    /// Fetch premium seller info; `None` unless the user is flagged premium
    async fn seller_info(&self, user_id: UserId) -> MarketResult<Option<SellerInfo>>;
}

/// Product catalog reads
#[trait_variant::make(CatalogRepository: Send)]
pub trait LocalCatalogRepository {
    /// Approved, in-stock products; featured first, then newest
    async fn products(&self, filter: &ProductFilter) -> MarketResult<Vec<ProductSummary>>;

    /// One approved product with seller, category, and reviews
    async fn product(&self, product_id: ProductId) -> MarketResult<Option<ProductDetail>>;

    /// Active categories, alphabetical
    async fn categories(&self) -> MarketResult<Vec<Category>>;

    /// A seller's own products, newest first (any status)
    async fn seller_products(&self, seller_id: UserId) -> MarketResult<Vec<ProductSummary>>;
}

/// Wallet and ledger access
#[trait_variant::make(WalletRepository: Send)]
pub trait LocalWalletRepository {
    /// Fetch the wallet for a user
    async fn wallet(&self, user_id: UserId) -> MarketResult<Option<Wallet>>;

    /// Ledger history for a user, newest first
    async fn transactions(&self, user_id: UserId, page: Page) -> MarketResult<Vec<LedgerEntry>>;

    /// Append one immutable ledger entry (`status = completed`)
    async fn log_transaction(&self, entry: &NewLedgerEntry) -> MarketResult<LedgerEntryId>;
}

/// Order lifecycle: creation and escrow release
#[trait_variant::make(OrderRepository: Send)]
pub trait LocalOrderRepository {
    /// Create an order in one transaction: claim a stock unit, split the
    /// commission, insert the order. Fails with `ProductUnavailable` when
    /// the product is missing, unapproved, or out of stock.
    async fn create_order(
        &self,
        buyer_id: UserId,
        product_id: ProductId,
        rate: CommissionRate,
    ) -> MarketResult<Order>;

    /// Release escrow in one transaction: row-lock the order, require
    /// `paid`, mark completed/confirmed/released, credit the seller's
    /// earnings, append one `sale` ledger entry.
    async fn complete_order(
        &self,
        order_id: OrderId,
        buyer_id: UserId,
    ) -> MarketResult<EscrowRelease>;

    /// A user's orders as buyer or seller, newest first
    async fn orders_for_user(
        &self,
        user_id: UserId,
        role: OrderRole,
    ) -> MarketResult<Vec<OrderView>>;
}

/// Payment request persistence (no gateway interaction)
#[trait_variant::make(PaymentRepository: Send)]
pub trait LocalPaymentRepository {
    /// Insert a `pending` payment request with a unique reference
    async fn create_payment_request(&self, request: &NewPaymentRequest) -> MarketResult<Payment>;
}

/// Key-value admin settings
#[trait_variant::make(SettingsRepository: Send)]
pub trait LocalSettingsRepository {
    /// Look up a setting value
    async fn get_setting(&self, key: &str) -> MarketResult<Option<String>>;

    /// Insert or update a setting (upsert on the key)
    async fn set_setting(&self, key: &str, value: &str) -> MarketResult<()>;
}
