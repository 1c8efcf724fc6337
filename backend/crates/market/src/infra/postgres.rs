//! PostgreSQL Repository Implementations
//!
//! All multi-statement operations run inside a single transaction; an
//! early return drops the transaction, which rolls it back, so domain
//! errors never leave partial state behind.

use chrono::{DateTime, Utc};
use kernel::id::{LedgerEntryId, OrderId, PaymentId, ProductId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{
    Category, EscrowRelease, LedgerEntry, NewLedgerEntry, NewPaymentRequest, Order, OrderView,
    Payment, Profile, ProductDetail, ProductSummary, Review, SellerInfo, Wallet,
};
use crate::domain::repository::{
    CatalogRepository, OrderRepository, Page, PaymentRepository, ProductFilter, ProfileRepository,
    SettingsRepository, WalletRepository,
};
use crate::domain::value_objects::{
    CommissionRate, DeliveryStatus, EscrowStatus, LedgerEntryKind, OrderNumber, OrderRole,
    OrderStatus, PaymentReference, WalletKind,
};
use crate::error::{MarketError, MarketResult};

/// PostgreSQL-backed marketplace repository
#[derive(Clone)]
pub struct PgMarketRepository {
    pool: PgPool,
}

impl PgMarketRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Single insert statement shared by the standalone ledger append and
    /// the escrow-release transaction.
    async fn insert_ledger_entry<'e, E>(
        executor: E,
        entry_id: LedgerEntryId,
        entry: &NewLedgerEntry,
    ) -> MarketResult<()>
    where
        E: sqlx::PgExecutor<'e>,
    {
        sqlx::query(
            r#"
            INSERT INTO transactions (
                tx_id, user_id, wallet_type, tx_type, amount,
                order_id, product_id, status
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, 'completed')
            "#,
        )
        .bind(entry_id.as_uuid())
        .bind(entry.user_id.as_uuid())
        .bind(entry.wallet.as_str())
        .bind(entry.kind.as_str())
        .bind(entry.amount)
        .bind(entry.order_id.map(|id| id.into_uuid()))
        .bind(entry.product_id.map(|id| id.into_uuid()))
        .execute(executor)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Profile Repository Implementation
// ============================================================================

impl ProfileRepository for PgMarketRepository {
    async fn profile(&self, user_id: UserId) -> MarketResult<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT
                u.user_id,
                u.first_name,
                u.last_name,
                u.username,
                u.is_verified,
                u.is_premium_seller,
                COALESCE(w.main_balance, 0) AS main_balance,
                COALESCE(w.earnings_balance, 0) AS earnings_balance,
                u.created_at
            FROM users u
            LEFT JOIN wallets w ON u.user_id = w.user_id
            WHERE u.user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_profile()))
    }

    async fn seller_info(&self, user_id: UserId) -> MarketResult<Option<SellerInfo>> {
        let row = sqlx::query_as::<_, SellerInfoRow>(
            r#"
            SELECT
                u.user_id,
                u.first_name,
                sp.name AS plan_name,
                sp.product_limit,
                sp.commission_discount
            FROM users u
            JOIN seller_plans sp ON u.seller_plan_id = sp.plan_id
            WHERE u.user_id = $1 AND u.is_premium_seller = TRUE
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_seller_info()))
    }
}

// ============================================================================
// Catalog Repository Implementation
// ============================================================================

impl CatalogRepository for PgMarketRepository {
    async fn products(&self, filter: &ProductFilter) -> MarketResult<Vec<ProductSummary>> {
        let rows = sqlx::query_as::<_, ProductSummaryRow>(
            r#"
            SELECT
                p.product_id,
                p.seller_id,
                u.first_name AS seller_name,
                p.category_id,
                c.name AS category_name,
                p.title,
                p.price,
                p.stock,
                p.sales_count,
                p.is_featured,
                p.created_at
            FROM products p
            JOIN users u ON p.seller_id = u.user_id
            JOIN categories c ON p.category_id = c.category_id
            WHERE p.status = 'approved'
              AND p.stock > 0
              AND ($1::uuid IS NULL OR p.category_id = $1)
              AND ($2::text IS NULL OR p.title ILIKE '%' || $2 || '%')
            ORDER BY p.is_featured DESC, p.created_at DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(filter.category_id.map(|id| id.into_uuid()))
        .bind(filter.search.as_deref())
        .bind(filter.limit)
        .bind(filter.offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_summary()).collect())
    }

    async fn product(&self, product_id: ProductId) -> MarketResult<Option<ProductDetail>> {
        let row = sqlx::query_as::<_, ProductDetailRow>(
            r#"
            SELECT
                p.product_id,
                p.seller_id,
                u.first_name AS seller_name,
                u.is_verified AS seller_verified,
                c.name AS category_name,
                p.title,
                p.description,
                p.price,
                p.stock,
                p.sales_count,
                p.is_featured,
                p.created_at
            FROM products p
            JOIN users u ON p.seller_id = u.user_id
            JOIN categories c ON p.category_id = c.category_id
            WHERE p.product_id = $1 AND p.status = 'approved'
            "#,
        )
        .bind(product_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let reviews = sqlx::query_as::<_, ReviewRow>(
            r#"
            SELECT
                r.review_id,
                r.product_id,
                r.buyer_id,
                u.first_name AS buyer_name,
                r.rating,
                r.comment,
                r.created_at
            FROM reviews r
            JOIN users u ON r.buyer_id = u.user_id
            WHERE r.product_id = $1
            ORDER BY r.created_at DESC
            "#,
        )
        .bind(product_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(row.into_detail(
            reviews.into_iter().map(|r| r.into_review()).collect(),
        )))
    }

    async fn categories(&self) -> MarketResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT category_id, name, status, created_at
            FROM categories
            WHERE status = 'active'
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_category()).collect())
    }

    async fn seller_products(&self, seller_id: UserId) -> MarketResult<Vec<ProductSummary>> {
        let rows = sqlx::query_as::<_, ProductSummaryRow>(
            r#"
            SELECT
                p.product_id,
                p.seller_id,
                u.first_name AS seller_name,
                p.category_id,
                c.name AS category_name,
                p.title,
                p.price,
                p.stock,
                p.sales_count,
                p.is_featured,
                p.created_at
            FROM products p
            JOIN users u ON p.seller_id = u.user_id
            JOIN categories c ON p.category_id = c.category_id
            WHERE p.seller_id = $1
            ORDER BY p.created_at DESC
            "#,
        )
        .bind(seller_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_summary()).collect())
    }
}

// ============================================================================
// Wallet Repository Implementation
// ============================================================================

impl WalletRepository for PgMarketRepository {
    async fn wallet(&self, user_id: UserId) -> MarketResult<Option<Wallet>> {
        let row = sqlx::query_as::<_, WalletRow>(
            r#"
            SELECT user_id, main_balance, earnings_balance, total_earned, updated_at
            FROM wallets
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_wallet()))
    }

    async fn transactions(&self, user_id: UserId, page: Page) -> MarketResult<Vec<LedgerEntry>> {
        let rows = sqlx::query_as::<_, LedgerRow>(
            r#"
            SELECT
                tx_id, user_id, wallet_type, tx_type, amount,
                order_id, product_id, status, created_at
            FROM transactions
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_entry()).collect()
    }

    async fn log_transaction(&self, entry: &NewLedgerEntry) -> MarketResult<LedgerEntryId> {
        let entry_id = LedgerEntryId::new();

        Self::insert_ledger_entry(&self.pool, entry_id, entry).await?;

        tracing::info!(
            entry_id = %entry_id,
            user_id = %entry.user_id,
            kind = entry.kind.as_str(),
            amount = entry.amount,
            "Ledger entry appended"
        );

        Ok(entry_id)
    }
}

// ============================================================================
// Order Repository Implementation
// ============================================================================

impl OrderRepository for PgMarketRepository {
    async fn create_order(
        &self,
        buyer_id: UserId,
        product_id: ProductId,
        rate: CommissionRate,
    ) -> MarketResult<Order> {
        let mut tx = self.pool.begin().await?;

        // Conditional claim closes the stock race: a second buyer of the
        // last unit matches zero rows here and the whole transaction
        // rolls back without touching anything.
        let claimed = sqlx::query_as::<_, StockClaimRow>(
            r#"
            UPDATE products
            SET stock = stock - 1,
                sales_count = sales_count + 1,
                updated_at = NOW()
            WHERE product_id = $1 AND status = 'approved' AND stock > 0
            RETURNING product_id, seller_id, price
            "#,
        )
        .bind(product_id.as_uuid())
        .fetch_optional(&mut *tx)
        .await?;

        let claimed = claimed.ok_or(MarketError::ProductUnavailable)?;

        let order = Order::place(
            buyer_id,
            UserId::from_uuid(claimed.seller_id),
            product_id,
            claimed.price,
            rate,
        );

        sqlx::query(
            r#"
            INSERT INTO orders (
                order_id, order_number, buyer_id, seller_id, product_id,
                amount, commission_amount, seller_amount,
                status, escrow_status, delivery_status, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(order.order_id.as_uuid())
        .bind(order.order_number.as_str())
        .bind(order.buyer_id.as_uuid())
        .bind(order.seller_id.as_uuid())
        .bind(order.product_id.as_uuid())
        .bind(order.amount)
        .bind(order.commission_amount)
        .bind(order.seller_amount)
        .bind(order.status.as_str())
        .bind(order.escrow_status.as_str())
        .bind(order.delivery_status.as_str())
        .bind(order.created_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(
            order_id = %order.order_id,
            order_number = order.order_number.as_str(),
            buyer_id = %buyer_id,
            product_id = %product_id,
            amount = order.amount,
            commission = order.commission_amount,
            "Order created, escrow locked"
        );

        Ok(order)
    }

    async fn complete_order(
        &self,
        order_id: OrderId,
        buyer_id: UserId,
    ) -> MarketResult<EscrowRelease> {
        let mut tx = self.pool.begin().await?;

        // Row lock serializes concurrent release attempts for the same order
        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT
                order_id, order_number, buyer_id, seller_id, product_id,
                amount, commission_amount, seller_amount,
                status, escrow_status, delivery_status, confirmed_at, created_at
            FROM orders
            WHERE order_id = $1 AND buyer_id = $2
            FOR UPDATE
            "#,
        )
        .bind(order_id.as_uuid())
        .bind(buyer_id.as_uuid())
        .fetch_optional(&mut *tx)
        .await?;

        let order = row.ok_or(MarketError::InvalidOrderState)?.into_order()?;

        if !order.can_complete() {
            return Err(MarketError::InvalidOrderState);
        }

        let confirmed_at = Utc::now();

        sqlx::query(
            r#"
            UPDATE orders
            SET status = 'completed',
                delivery_status = 'confirmed',
                escrow_status = 'released',
                confirmed_at = $2
            WHERE order_id = $1
            "#,
        )
        .bind(order_id.as_uuid())
        .bind(confirmed_at)
        .execute(&mut *tx)
        .await?;

        let credited = sqlx::query(
            r#"
            UPDATE wallets
            SET earnings_balance = earnings_balance + $1,
                total_earned = total_earned + $1,
                updated_at = NOW()
            WHERE user_id = $2
            "#,
        )
        .bind(order.seller_amount)
        .bind(order.seller_id.as_uuid())
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if credited != 1 {
            return Err(MarketError::Internal(format!(
                "Seller wallet missing for user {}",
                order.seller_id
            )));
        }

        let ledger_entry_id = LedgerEntryId::new();
        let sale_entry = NewLedgerEntry {
            user_id: order.seller_id,
            wallet: WalletKind::Earnings,
            kind: LedgerEntryKind::Sale,
            amount: order.seller_amount,
            order_id: Some(order.order_id),
            product_id: Some(order.product_id),
        };

        Self::insert_ledger_entry(&mut *tx, ledger_entry_id, &sale_entry).await?;

        tx.commit().await?;

        tracing::info!(
            order_id = %order_id,
            seller_id = %order.seller_id,
            seller_amount = order.seller_amount,
            ledger_entry_id = %ledger_entry_id,
            "Escrow released, seller credited"
        );

        Ok(EscrowRelease {
            order_id,
            seller_id: order.seller_id,
            seller_amount: order.seller_amount,
            ledger_entry_id,
            confirmed_at,
        })
    }

    async fn orders_for_user(
        &self,
        user_id: UserId,
        role: OrderRole,
    ) -> MarketResult<Vec<OrderView>> {
        let rows = match role {
            OrderRole::Buyer => {
                sqlx::query_as::<_, OrderViewRow>(
                    r#"
                    SELECT
                        o.order_id,
                        o.order_number,
                        o.product_id,
                        p.title AS product_title,
                        u.first_name AS counterpart_name,
                        o.amount,
                        o.status,
                        o.escrow_status,
                        o.delivery_status,
                        o.created_at
                    FROM orders o
                    JOIN products p ON o.product_id = p.product_id
                    JOIN users u ON o.seller_id = u.user_id
                    WHERE o.buyer_id = $1
                    ORDER BY o.created_at DESC
                    "#,
                )
                .bind(user_id.as_uuid())
                .fetch_all(&self.pool)
                .await?
            }
            OrderRole::Seller => {
                sqlx::query_as::<_, OrderViewRow>(
                    r#"
                    SELECT
                        o.order_id,
                        o.order_number,
                        o.product_id,
                        p.title AS product_title,
                        u.first_name AS counterpart_name,
                        o.amount,
                        o.status,
                        o.escrow_status,
                        o.delivery_status,
                        o.created_at
                    FROM orders o
                    JOIN products p ON o.product_id = p.product_id
                    JOIN users u ON o.buyer_id = u.user_id
                    WHERE o.seller_id = $1
                    ORDER BY o.created_at DESC
                    "#,
                )
                .bind(user_id.as_uuid())
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.into_iter().map(|r| r.into_view()).collect()
    }
}

// ============================================================================
// Payment Repository Implementation
// ============================================================================

impl PaymentRepository for PgMarketRepository {
    async fn create_payment_request(&self, request: &NewPaymentRequest) -> MarketResult<Payment> {
        let payment = Payment {
            payment_id: PaymentId::new(),
            user_id: request.user_id,
            amount: request.amount,
            payment_type: request.payment_type,
            order_id: request.order_id,
            reference: PaymentReference::generate(),
            status: "pending".to_string(),
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO payments (
                payment_id, user_id, amount, payment_type,
                order_id, reference, status, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(payment.payment_id.as_uuid())
        .bind(payment.user_id.as_uuid())
        .bind(payment.amount)
        .bind(payment.payment_type.as_str())
        .bind(payment.order_id.map(|id| id.into_uuid()))
        .bind(payment.reference.as_str())
        .bind(&payment.status)
        .bind(payment.created_at)
        .execute(&self.pool)
        .await?;

        tracing::info!(
            payment_id = %payment.payment_id,
            user_id = %payment.user_id,
            reference = payment.reference.as_str(),
            amount = payment.amount,
            "Payment request created"
        );

        Ok(payment)
    }
}

// ============================================================================
// Settings Repository Implementation
// ============================================================================

impl SettingsRepository for PgMarketRepository {
    async fn get_setting(&self, key: &str) -> MarketResult<Option<String>> {
        let value = sqlx::query_scalar::<_, String>(
            "SELECT setting_value FROM admin_settings WHERE setting_key = $1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(value)
    }

    async fn set_setting(&self, key: &str, value: &str) -> MarketResult<()> {
        sqlx::query(
            r#"
            INSERT INTO admin_settings (setting_key, setting_value, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (setting_key)
            DO UPDATE SET setting_value = EXCLUDED.setting_value, updated_at = NOW()
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct ProfileRow {
    user_id: Uuid,
    first_name: String,
    last_name: Option<String>,
    username: Option<String>,
    is_verified: bool,
    is_premium_seller: bool,
    main_balance: i64,
    earnings_balance: i64,
    created_at: DateTime<Utc>,
}

impl ProfileRow {
    fn into_profile(self) -> Profile {
        Profile {
            user_id: UserId::from_uuid(self.user_id),
            first_name: self.first_name,
            last_name: self.last_name,
            username: self.username,
            is_verified: self.is_verified,
            is_premium_seller: self.is_premium_seller,
            main_balance: self.main_balance,
            earnings_balance: self.earnings_balance,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SellerInfoRow {
    user_id: Uuid,
    first_name: String,
    plan_name: String,
    product_limit: i32,
    commission_discount: i32,
}

impl SellerInfoRow {
    fn into_seller_info(self) -> SellerInfo {
        SellerInfo {
            user_id: UserId::from_uuid(self.user_id),
            first_name: self.first_name,
            plan_name: self.plan_name,
            product_limit: self.product_limit,
            commission_discount: self.commission_discount,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CategoryRow {
    category_id: Uuid,
    name: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl CategoryRow {
    fn into_category(self) -> Category {
        Category {
            category_id: self.category_id.into(),
            name: self.name,
            status: self.status,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ProductSummaryRow {
    product_id: Uuid,
    seller_id: Uuid,
    seller_name: String,
    category_id: Uuid,
    category_name: String,
    title: String,
    price: i64,
    stock: i32,
    sales_count: i32,
    is_featured: bool,
    created_at: DateTime<Utc>,
}

impl ProductSummaryRow {
    fn into_summary(self) -> ProductSummary {
        ProductSummary {
            product_id: self.product_id.into(),
            seller_id: self.seller_id.into(),
            seller_name: self.seller_name,
            category_id: self.category_id.into(),
            category_name: self.category_name,
            title: self.title,
            price: self.price,
            stock: self.stock,
            sales_count: self.sales_count,
            is_featured: self.is_featured,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ProductDetailRow {
    product_id: Uuid,
    seller_id: Uuid,
    seller_name: String,
    seller_verified: bool,
    category_name: String,
    title: String,
    description: Option<String>,
    price: i64,
    stock: i32,
    sales_count: i32,
    is_featured: bool,
    created_at: DateTime<Utc>,
}

impl ProductDetailRow {
    fn into_detail(self, reviews: Vec<Review>) -> ProductDetail {
        ProductDetail {
            product_id: self.product_id.into(),
            seller_id: self.seller_id.into(),
            seller_name: self.seller_name,
            seller_verified: self.seller_verified,
            category_name: self.category_name,
            title: self.title,
            description: self.description,
            price: self.price,
            stock: self.stock,
            sales_count: self.sales_count,
            is_featured: self.is_featured,
            created_at: self.created_at,
            reviews,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ReviewRow {
    review_id: Uuid,
    product_id: Uuid,
    buyer_id: Uuid,
    buyer_name: String,
    rating: i16,
    comment: Option<String>,
    created_at: DateTime<Utc>,
}

impl ReviewRow {
    fn into_review(self) -> Review {
        Review {
            review_id: self.review_id.into(),
            product_id: self.product_id.into(),
            buyer_id: self.buyer_id.into(),
            buyer_name: self.buyer_name,
            rating: self.rating,
            comment: self.comment,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct WalletRow {
    user_id: Uuid,
    main_balance: i64,
    earnings_balance: i64,
    total_earned: i64,
    updated_at: DateTime<Utc>,
}

impl WalletRow {
    fn into_wallet(self) -> Wallet {
        Wallet {
            user_id: self.user_id.into(),
            main_balance: self.main_balance,
            earnings_balance: self.earnings_balance,
            total_earned: self.total_earned,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct StockClaimRow {
    #[allow(dead_code)]
    product_id: Uuid,
    seller_id: Uuid,
    price: i64,
}

#[derive(sqlx::FromRow)]
struct OrderRow {
    order_id: Uuid,
    order_number: String,
    buyer_id: Uuid,
    seller_id: Uuid,
    product_id: Uuid,
    amount: i64,
    commission_amount: i64,
    seller_amount: i64,
    status: String,
    escrow_status: String,
    delivery_status: String,
    confirmed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl OrderRow {
    fn into_order(self) -> MarketResult<Order> {
        let status = OrderStatus::parse(&self.status)
            .ok_or_else(|| MarketError::Internal(format!("Invalid order status: {}", self.status)))?;
        let escrow_status = EscrowStatus::parse(&self.escrow_status).ok_or_else(|| {
            MarketError::Internal(format!("Invalid escrow status: {}", self.escrow_status))
        })?;
        let delivery_status = DeliveryStatus::parse(&self.delivery_status).ok_or_else(|| {
            MarketError::Internal(format!("Invalid delivery status: {}", self.delivery_status))
        })?;

        Ok(Order {
            order_id: self.order_id.into(),
            order_number: OrderNumber::from_db(self.order_number),
            buyer_id: self.buyer_id.into(),
            seller_id: self.seller_id.into(),
            product_id: self.product_id.into(),
            amount: self.amount,
            commission_amount: self.commission_amount,
            seller_amount: self.seller_amount,
            status,
            escrow_status,
            delivery_status,
            confirmed_at: self.confirmed_at,
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct OrderViewRow {
    order_id: Uuid,
    order_number: String,
    product_id: Uuid,
    product_title: String,
    counterpart_name: String,
    amount: i64,
    status: String,
    escrow_status: String,
    delivery_status: String,
    created_at: DateTime<Utc>,
}

impl OrderViewRow {
    fn into_view(self) -> MarketResult<OrderView> {
        let status = OrderStatus::parse(&self.status)
            .ok_or_else(|| MarketError::Internal(format!("Invalid order status: {}", self.status)))?;
        let escrow_status = EscrowStatus::parse(&self.escrow_status).ok_or_else(|| {
            MarketError::Internal(format!("Invalid escrow status: {}", self.escrow_status))
        })?;
        let delivery_status = DeliveryStatus::parse(&self.delivery_status).ok_or_else(|| {
            MarketError::Internal(format!("Invalid delivery status: {}", self.delivery_status))
        })?;

        Ok(OrderView {
            order_id: self.order_id.into(),
            order_number: self.order_number,
            product_id: self.product_id.into(),
            product_title: self.product_title,
            counterpart_name: self.counterpart_name,
            amount: self.amount,
            status,
            escrow_status,
            delivery_status,
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct LedgerRow {
    tx_id: Uuid,
    user_id: Uuid,
    wallet_type: String,
    tx_type: String,
    amount: i64,
    order_id: Option<Uuid>,
    product_id: Option<Uuid>,
    status: String,
    created_at: DateTime<Utc>,
}

impl LedgerRow {
    fn into_entry(self) -> MarketResult<LedgerEntry> {
        let wallet = WalletKind::parse(&self.wallet_type).ok_or_else(|| {
            MarketError::Internal(format!("Invalid wallet type: {}", self.wallet_type))
        })?;
        let kind = LedgerEntryKind::parse(&self.tx_type).ok_or_else(|| {
            MarketError::Internal(format!("Invalid transaction type: {}", self.tx_type))
        })?;

        Ok(LedgerEntry {
            entry_id: self.tx_id.into(),
            user_id: self.user_id.into(),
            wallet,
            kind,
            amount: self.amount,
            order_id: self.order_id.map(Into::into),
            product_id: self.product_id.map(Into::into),
            status: self.status,
            created_at: self.created_at,
        })
    }
}
