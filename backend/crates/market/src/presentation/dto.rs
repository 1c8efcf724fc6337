//! API DTOs (Data Transfer Objects)
//!
//! All amounts are integer minor units. Every response body is wrapped
//! in the kernel envelope by the handlers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{
    Category, EscrowRelease, LedgerEntry, Order, OrderView, Payment, ProductDetail,
    ProductSummary, Profile, Review, SellerInfo, Wallet,
};

/// Query for GET /api/market/products
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductListQuery {
    #[serde(default)]
    pub category: Option<Uuid>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub offset: Option<i64>,
}

/// Query for GET /api/market/users/{id}/transactions
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PageQuery {
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub offset: Option<i64>,
}

/// Query for GET /api/market/users/{id}/orders
#[derive(Debug, Clone, Deserialize, Default)]
pub struct OrderListQuery {
    /// "buyer" (default) or "seller"
    #[serde(default)]
    pub role: Option<String>,
}

/// Request for POST /api/market/orders
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub buyer_id: Uuid,
    pub product_id: Uuid,
}

/// Request for POST /api/market/orders/{id}/complete
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteOrderRequest {
    pub buyer_id: Uuid,
}

/// Request for POST /api/market/payments
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequestBody {
    pub user_id: Uuid,
    pub amount: i64,
    /// "deposit" or "withdrawal"
    pub payment_type: String,
    /// Order this payment settles, when there is one
    #[serde(default)]
    pub order_id: Option<Uuid>,
}

/// Request for POST /api/market/transactions
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequestBody {
    pub user_id: Uuid,
    /// "main" or "earnings"
    pub wallet_type: String,
    /// "sale", "deposit", "withdrawal", or "refund"
    pub tx_type: String,
    pub amount: i64,
    #[serde(default)]
    pub order_id: Option<Uuid>,
    #[serde(default)]
    pub product_id: Option<Uuid>,
}

/// Response for POST /api/market/transactions
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionCreatedResponse {
    pub tx_id: Uuid,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub is_verified: bool,
    pub is_premium_seller: bool,
    pub main_balance: i64,
    pub earnings_balance: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Profile> for ProfileResponse {
    fn from(p: Profile) -> Self {
        Self {
            user_id: p.user_id.into_uuid(),
            first_name: p.first_name,
            last_name: p.last_name,
            username: p.username,
            is_verified: p.is_verified,
            is_premium_seller: p.is_premium_seller,
            main_balance: p.main_balance,
            earnings_balance: p.earnings_balance,
            created_at: p.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletResponse {
    pub user_id: Uuid,
    pub main_balance: i64,
    pub earnings_balance: i64,
    pub total_earned: i64,
    pub updated_at: DateTime<Utc>,
}

impl From<Wallet> for WalletResponse {
    fn from(w: Wallet) -> Self {
        Self {
            user_id: w.user_id.into_uuid(),
            main_balance: w.main_balance,
            earnings_balance: w.earnings_balance,
            total_earned: w.total_earned,
            updated_at: w.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub tx_id: Uuid,
    pub wallet_type: String,
    pub tx_type: String,
    pub amount: i64,
    pub order_id: Option<Uuid>,
    pub product_id: Option<Uuid>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<LedgerEntry> for TransactionResponse {
    fn from(e: LedgerEntry) -> Self {
        Self {
            tx_id: e.entry_id.into_uuid(),
            wallet_type: e.wallet.as_str().to_string(),
            tx_type: e.kind.as_str().to_string(),
            amount: e.amount,
            order_id: e.order_id.map(|id| id.into_uuid()),
            product_id: e.product_id.map(|id| id.into_uuid()),
            status: e.status,
            created_at: e.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub category_id: Uuid,
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(c: Category) -> Self {
        Self {
            category_id: c.category_id.into_uuid(),
            name: c.name,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummaryResponse {
    pub product_id: Uuid,
    pub seller_id: Uuid,
    pub seller_name: String,
    pub category_id: Uuid,
    pub category_name: String,
    pub title: String,
    pub price: i64,
    pub stock: i32,
    pub sales_count: i32,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
}

impl From<ProductSummary> for ProductSummaryResponse {
    fn from(p: ProductSummary) -> Self {
        Self {
            product_id: p.product_id.into_uuid(),
            seller_id: p.seller_id.into_uuid(),
            seller_name: p.seller_name,
            category_id: p.category_id.into_uuid(),
            category_name: p.category_name,
            title: p.title,
            price: p.price,
            stock: p.stock,
            sales_count: p.sales_count,
            is_featured: p.is_featured,
            created_at: p.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub review_id: Uuid,
    pub buyer_name: String,
    pub rating: i16,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(r: Review) -> Self {
        Self {
            review_id: r.review_id.into_uuid(),
            buyer_name: r.buyer_name,
            rating: r.rating,
            comment: r.comment,
            created_at: r.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailResponse {
    pub product_id: Uuid,
    pub seller_id: Uuid,
    pub seller_name: String,
    pub seller_verified: bool,
    pub category_name: String,
    pub title: String,
    pub description: Option<String>,
    pub price: i64,
    pub stock: i32,
    pub sales_count: i32,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub reviews: Vec<ReviewResponse>,
}

impl From<ProductDetail> for ProductDetailResponse {
    fn from(p: ProductDetail) -> Self {
        Self {
            product_id: p.product_id.into_uuid(),
            seller_id: p.seller_id.into_uuid(),
            seller_name: p.seller_name,
            seller_verified: p.seller_verified,
            category_name: p.category_name,
            title: p.title,
            description: p.description,
            price: p.price,
            stock: p.stock,
            sales_count: p.sales_count,
            is_featured: p.is_featured,
            created_at: p.created_at,
            reviews: p.reviews.into_iter().map(Into::into).collect(),
        }
    }
}

/// Response for POST /api/market/orders
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_id: Uuid,
    pub order_number: String,
    pub product_id: Uuid,
    pub amount: i64,
    pub commission_amount: i64,
    pub seller_amount: i64,
    pub status: String,
    pub escrow_status: String,
    pub delivery_status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(o: Order) -> Self {
        Self {
            order_id: o.order_id.into_uuid(),
            order_number: o.order_number.as_str().to_string(),
            product_id: o.product_id.into_uuid(),
            amount: o.amount,
            commission_amount: o.commission_amount,
            seller_amount: o.seller_amount,
            status: o.status.as_str().to_string(),
            escrow_status: o.escrow_status.as_str().to_string(),
            delivery_status: o.delivery_status.as_str().to_string(),
            created_at: o.created_at,
        }
    }
}

/// Entry in a user's order history
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderViewResponse {
    pub order_id: Uuid,
    pub order_number: String,
    pub product_id: Uuid,
    pub product_title: String,
    pub counterpart_name: String,
    pub amount: i64,
    pub status: String,
    pub escrow_status: String,
    pub delivery_status: String,
    pub created_at: DateTime<Utc>,
}

impl From<OrderView> for OrderViewResponse {
    fn from(o: OrderView) -> Self {
        Self {
            order_id: o.order_id.into_uuid(),
            order_number: o.order_number,
            product_id: o.product_id.into_uuid(),
            product_title: o.product_title,
            counterpart_name: o.counterpart_name,
            amount: o.amount,
            status: o.status.as_str().to_string(),
            escrow_status: o.escrow_status.as_str().to_string(),
            delivery_status: o.delivery_status.as_str().to_string(),
            created_at: o.created_at,
        }
    }
}

/// Response for POST /api/market/orders/{id}/complete
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EscrowReleaseResponse {
    pub order_id: Uuid,
    pub seller_amount: i64,
    pub confirmed_at: DateTime<Utc>,
}

impl From<EscrowRelease> for EscrowReleaseResponse {
    fn from(r: EscrowRelease) -> Self {
        Self {
            order_id: r.order_id.into_uuid(),
            seller_amount: r.seller_amount,
            confirmed_at: r.confirmed_at,
        }
    }
}

/// Response for POST /api/market/payments
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub payment_id: Uuid,
    pub amount: i64,
    pub payment_type: String,
    pub order_id: Option<Uuid>,
    pub reference: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Payment> for PaymentResponse {
    fn from(p: Payment) -> Self {
        Self {
            payment_id: p.payment_id.into_uuid(),
            amount: p.amount,
            payment_type: p.payment_type.as_str().to_string(),
            order_id: p.order_id.map(|id| id.into_uuid()),
            reference: p.reference.as_str().to_string(),
            status: p.status,
            created_at: p.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerInfoResponse {
    pub user_id: Uuid,
    pub first_name: String,
    pub plan_name: String,
    pub product_limit: i32,
    pub commission_discount: i32,
}

impl From<SellerInfo> for SellerInfoResponse {
    fn from(s: SellerInfo) -> Self {
        Self {
            user_id: s.user_id.into_uuid(),
            first_name: s.first_name,
            plan_name: s.plan_name,
            product_limit: s.product_limit,
            commission_discount: s.commission_discount,
        }
    }
}
