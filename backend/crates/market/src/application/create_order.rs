//! Create Order Use Case

use std::sync::Arc;

use kernel::id::{ProductId, UserId};

use crate::application::config::{COMMISSION_SETTING_KEY, MarketConfig};
use crate::domain::entities::Order;
use crate::domain::repository::{OrderRepository, SettingsRepository};
use crate::domain::value_objects::CommissionRate;
use crate::error::MarketResult;

/// Input DTO for create order
#[derive(Debug, Clone)]
pub struct CreateOrderInput {
    pub buyer_id: UserId,
    pub product_id: ProductId,
}

/// Create Order Use Case
///
/// Claims one stock unit and opens an order with escrow locked, all in
/// one repository transaction. The commission rate comes from admin
/// settings when set, otherwise from config.
pub struct CreateOrderUseCase<O, S>
where
    O: OrderRepository,
    S: SettingsRepository,
{
    order_repo: Arc<O>,
    settings_repo: Arc<S>,
    config: Arc<MarketConfig>,
}

impl<O, S> CreateOrderUseCase<O, S>
where
    O: OrderRepository,
    S: SettingsRepository,
{
    pub fn new(order_repo: Arc<O>, settings_repo: Arc<S>, config: Arc<MarketConfig>) -> Self {
        Self {
            order_repo,
            settings_repo,
            config,
        }
    }

    pub async fn execute(&self, input: CreateOrderInput) -> MarketResult<Order> {
        let rate = self.effective_rate().await?;

        let order = self
            .order_repo
            .create_order(input.buyer_id, input.product_id, rate)
            .await?;

        tracing::info!(
            order_number = order.order_number.as_str(),
            buyer_id = %input.buyer_id,
            product_id = %input.product_id,
            commission_percent = rate.percent(),
            "Order placed"
        );

        Ok(order)
    }

    /// Admin-set commission percentage wins over the configured default.
    /// An unparsable or out-of-range setting falls back to config.
    async fn effective_rate(&self) -> MarketResult<CommissionRate> {
        let setting = self.settings_repo.get_setting(COMMISSION_SETTING_KEY).await?;

        let rate = setting
            .and_then(|s| s.parse::<u8>().ok())
            .and_then(CommissionRate::new)
            .unwrap_or(self.config.commission_rate);

        Ok(rate)
    }
}
