//! Payment Request Use Case

use std::sync::Arc;

use kernel::id::{OrderId, UserId};

use crate::application::config::MarketConfig;
use crate::domain::entities::{NewPaymentRequest, Payment};
use crate::domain::repository::{PaymentRepository, WalletRepository};
use crate::domain::value_objects::PaymentType;
use crate::error::{MarketError, MarketResult};

/// Input DTO for a payment request
#[derive(Debug, Clone)]
pub struct PaymentRequestInput {
    pub user_id: UserId,
    pub amount: i64,
    pub payment_type: PaymentType,
    /// Order this payment settles, when there is one
    pub order_id: Option<OrderId>,
}

/// Payment Request Use Case
///
/// Records a pending funding or withdrawal request toward the external
/// gateway. Balances are not moved here; only the gateway callback
/// settles a request. Withdrawals are validated against the configured
/// bounds and the user's earnings balance including the flat fee.
pub struct PaymentRequestUseCase<P, W>
where
    P: PaymentRepository,
    W: WalletRepository,
{
    payment_repo: Arc<P>,
    wallet_repo: Arc<W>,
    config: Arc<MarketConfig>,
}

impl<P, W> PaymentRequestUseCase<P, W>
where
    P: PaymentRepository,
    W: WalletRepository,
{
    pub fn new(payment_repo: Arc<P>, wallet_repo: Arc<W>, config: Arc<MarketConfig>) -> Self {
        Self {
            payment_repo,
            wallet_repo,
            config,
        }
    }

    pub async fn execute(&self, input: PaymentRequestInput) -> MarketResult<Payment> {
        if input.amount <= 0 {
            return Err(MarketError::InvalidAmount);
        }

        if input.payment_type == PaymentType::Withdrawal {
            self.check_withdrawal(input.user_id, input.amount).await?;
        }

        let payment = self
            .payment_repo
            .create_payment_request(&NewPaymentRequest {
                user_id: input.user_id,
                amount: input.amount,
                payment_type: input.payment_type,
                order_id: input.order_id,
            })
            .await?;

        tracing::info!(
            reference = payment.reference.as_str(),
            user_id = %input.user_id,
            payment_type = input.payment_type.as_str(),
            amount = input.amount,
            "Payment request recorded"
        );

        Ok(payment)
    }

    async fn check_withdrawal(&self, user_id: UserId, amount: i64) -> MarketResult<()> {
        if amount < self.config.min_withdrawal || amount > self.config.max_withdrawal {
            return Err(MarketError::WithdrawalOutOfRange {
                min: self.config.min_withdrawal,
                max: self.config.max_withdrawal,
            });
        }

        let wallet = self
            .wallet_repo
            .wallet(user_id)
            .await?
            .ok_or(MarketError::NotFound("Wallet"))?;

        // The fee comes out of the same balance as the amount
        if wallet.earnings_balance < amount + self.config.withdrawal_fee {
            return Err(MarketError::InsufficientBalance);
        }

        Ok(())
    }
}
