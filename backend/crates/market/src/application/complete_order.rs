//! Complete Order Use Case

use std::sync::Arc;

use kernel::id::{OrderId, UserId};

use crate::domain::entities::EscrowRelease;
use crate::domain::repository::OrderRepository;
use crate::error::MarketResult;

/// Input DTO for complete order
#[derive(Debug, Clone)]
pub struct CompleteOrderInput {
    pub buyer_id: UserId,
    pub order_id: OrderId,
}

/// Complete Order Use Case
///
/// The buyer confirms delivery; escrow is released and the seller is
/// credited exactly once. The repository enforces the state check under
/// a row lock, so a repeated confirmation fails with `InvalidOrderState`
/// instead of paying twice.
pub struct CompleteOrderUseCase<O>
where
    O: OrderRepository,
{
    order_repo: Arc<O>,
}

impl<O> CompleteOrderUseCase<O>
where
    O: OrderRepository,
{
    pub fn new(order_repo: Arc<O>) -> Self {
        Self { order_repo }
    }

    pub async fn execute(&self, input: CompleteOrderInput) -> MarketResult<EscrowRelease> {
        let release = self
            .order_repo
            .complete_order(input.order_id, input.buyer_id)
            .await?;

        tracing::info!(
            order_id = %input.order_id,
            buyer_id = %input.buyer_id,
            seller_amount = release.seller_amount,
            "Delivery confirmed, escrow released"
        );

        Ok(release)
    }
}
