//! Domain Entities
//!
//! Core business entities and read models for the marketplace domain.

use chrono::{DateTime, Utc};
use kernel::id::{CategoryId, LedgerEntryId, OrderId, PaymentId, ProductId, ReviewId, UserId};

use crate::domain::services::{CommissionSplit, split_commission};
use crate::domain::value_objects::{
    CommissionRate, DeliveryStatus, EscrowStatus, LedgerEntryKind, OrderNumber, OrderStatus,
    PaymentReference, PaymentType, WalletKind,
};

/// Per-user wallet. One per user; `main_balance` is spendable,
/// `earnings_balance` holds released sale proceeds.
#[derive(Debug, Clone)]
pub struct Wallet {
    pub user_id: UserId,
    pub main_balance: i64,
    pub earnings_balance: i64,
    pub total_earned: i64,
    pub updated_at: DateTime<Utc>,
}

/// User profile joined with wallet balances
#[derive(Debug, Clone)]
pub struct Profile {
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub is_verified: bool,
    pub is_premium_seller: bool,
    pub main_balance: i64,
    pub earnings_balance: i64,
    pub created_at: DateTime<Utc>,
}

/// Premium seller info; only exists for users flagged premium
#[derive(Debug, Clone)]
pub struct SellerInfo {
    pub user_id: UserId,
    pub first_name: String,
    pub plan_name: String,
    pub product_limit: i32,
    pub commission_discount: i32,
}

/// Category of the product catalog
#[derive(Debug, Clone)]
pub struct Category {
    pub category_id: CategoryId,
    pub name: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Listing entry: product joined with seller and category names
#[derive(Debug, Clone)]
pub struct ProductSummary {
    pub product_id: ProductId,
    pub seller_id: UserId,
    pub seller_name: String,
    pub category_id: CategoryId,
    pub category_name: String,
    pub title: String,
    pub price: i64,
    pub stock: i32,
    pub sales_count: i32,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
}

/// Single review on a product
#[derive(Debug, Clone)]
pub struct Review {
    pub review_id: ReviewId,
    pub product_id: ProductId,
    pub buyer_id: UserId,
    pub buyer_name: String,
    pub rating: i16,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Full product view: summary plus description, seller verification,
/// and the complete review list (newest first)
#[derive(Debug, Clone)]
pub struct ProductDetail {
    pub product_id: ProductId,
    pub seller_id: UserId,
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
    pub reviews: Vec<Review>,
}

/// Escrow order entity
#[derive(Debug, Clone)]
pub struct Order {
    pub order_id: OrderId,
    pub order_number: OrderNumber,
    pub buyer_id: UserId,
    pub seller_id: UserId,
    pub product_id: ProductId,
    pub amount: i64,
    pub commission_amount: i64,
    pub seller_amount: i64,
    pub status: OrderStatus,
    pub escrow_status: EscrowStatus,
    pub delivery_status: DeliveryStatus,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Place a new order against a claimed product unit.
    ///
    /// Computes the commission split from the configured rate and starts
    /// the escrow lifecycle: `pending` / `locked` / delivery `pending`.
    pub fn place(
        buyer_id: UserId,
        seller_id: UserId,
        product_id: ProductId,
        price: i64,
        rate: CommissionRate,
    ) -> Self {
        let CommissionSplit {
            commission,
            seller_amount,
        } = split_commission(price, rate);

        Self {
            order_id: OrderId::new(),
            order_number: OrderNumber::generate(),
            buyer_id,
            seller_id,
            product_id,
            amount: price,
            commission_amount: commission,
            seller_amount,
            status: OrderStatus::Pending,
            escrow_status: EscrowStatus::Locked,
            delivery_status: DeliveryStatus::Pending,
            confirmed_at: None,
            created_at: Utc::now(),
        }
    }

    /// Whether the buyer may confirm delivery and release escrow
    pub fn can_complete(&self) -> bool {
        self.status == OrderStatus::Paid && self.escrow_status == EscrowStatus::Locked
    }
}

/// Order joined with the counterpart's name and product title,
/// as shown in a user's order history
#[derive(Debug, Clone)]
pub struct OrderView {
    pub order_id: OrderId,
    pub order_number: String,
    pub product_id: ProductId,
    pub product_title: String,
    /// Seller name when viewing as buyer, buyer name when viewing as seller
    pub counterpart_name: String,
    pub amount: i64,
    pub status: OrderStatus,
    pub escrow_status: EscrowStatus,
    pub delivery_status: DeliveryStatus,
    pub created_at: DateTime<Utc>,
}

/// Immutable ledger entry - the audit trail for every balance change
#[derive(Debug, Clone)]
pub struct LedgerEntry {
    pub entry_id: LedgerEntryId,
    pub user_id: UserId,
    pub wallet: WalletKind,
    pub kind: LedgerEntryKind,
    pub amount: i64,
    pub order_id: Option<OrderId>,
    pub product_id: Option<ProductId>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Input for appending a ledger entry
#[derive(Debug, Clone)]
pub struct NewLedgerEntry {
    pub user_id: UserId,
    pub wallet: WalletKind,
    pub kind: LedgerEntryKind,
    pub amount: i64,
    pub order_id: Option<OrderId>,
    pub product_id: Option<ProductId>,
}

/// Outcome of a successful escrow release
#[derive(Debug, Clone)]
pub struct EscrowRelease {
    pub order_id: OrderId,
    pub seller_id: UserId,
    pub seller_amount: i64,
    pub ledger_entry_id: LedgerEntryId,
    pub confirmed_at: DateTime<Utc>,
}

/// Funding/withdrawal request toward an external gateway
#[derive(Debug, Clone)]
pub struct Payment {
    pub payment_id: PaymentId,
    pub user_id: UserId,
    pub amount: i64,
    pub payment_type: PaymentType,
    pub order_id: Option<OrderId>,
    pub reference: PaymentReference,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a payment request
#[derive(Debug, Clone)]
pub struct NewPaymentRequest {
    pub user_id: UserId,
    pub amount: i64,
    pub payment_type: PaymentType,
    pub order_id: Option<OrderId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_place_splits_amount() {
        let order = Order::place(
            UserId::new(),
            UserId::new(),
            ProductId::new(),
            1000,
            CommissionRate::new(10).unwrap(),
        );

        assert_eq!(order.amount, 1000);
        assert_eq!(order.commission_amount, 100);
        assert_eq!(order.seller_amount, 900);
        assert_eq!(
            order.commission_amount + order.seller_amount,
            order.amount
        );
    }

    #[test]
    fn test_order_place_starts_locked_pending() {
        let order = Order::place(
            UserId::new(),
            UserId::new(),
            ProductId::new(),
            500,
            CommissionRate::default(),
        );

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.escrow_status, EscrowStatus::Locked);
        assert_eq!(order.delivery_status, DeliveryStatus::Pending);
        assert!(order.confirmed_at.is_none());
        assert!(order.order_number.as_str().starts_with("ORD-"));
    }

    #[test]
    fn test_can_complete_requires_paid_and_locked() {
        let mut order = Order::place(
            UserId::new(),
            UserId::new(),
            ProductId::new(),
            500,
            CommissionRate::default(),
        );

        assert!(!order.can_complete(), "pending orders cannot complete");

        order.status = OrderStatus::Paid;
        assert!(order.can_complete());

        order.escrow_status = EscrowStatus::Released;
        assert!(!order.can_complete(), "released escrow cannot release again");

        order.escrow_status = EscrowStatus::Locked;
        order.status = OrderStatus::Completed;
        assert!(!order.can_complete());
    }
}
