//! Record Transaction Use Case

use std::sync::Arc;

use kernel::id::{LedgerEntryId, OrderId, ProductId, UserId};

use crate::domain::entities::NewLedgerEntry;
use crate::domain::repository::WalletRepository;
use crate::domain::value_objects::{LedgerEntryKind, WalletKind};
use crate::error::{MarketError, MarketResult};

/// Input DTO for recording a ledger entry
#[derive(Debug, Clone)]
pub struct RecordTransactionInput {
    pub user_id: UserId,
    pub wallet: WalletKind,
    pub kind: LedgerEntryKind,
    pub amount: i64,
    pub order_id: Option<OrderId>,
    pub product_id: Option<ProductId>,
}

/// Record Transaction Use Case
///
/// Appends one immutable ledger entry for a settled balance movement,
/// e.g. a gateway-confirmed deposit or withdrawal. Sale entries for
/// escrow releases are appended inside the order-completion transaction
/// instead, so they can never be separated from the wallet credit.
pub struct RecordTransactionUseCase<W>
where
    W: WalletRepository,
{
    wallet_repo: Arc<W>,
}

impl<W> RecordTransactionUseCase<W>
where
    W: WalletRepository,
{
    pub fn new(wallet_repo: Arc<W>) -> Self {
        Self { wallet_repo }
    }

    pub async fn execute(&self, input: RecordTransactionInput) -> MarketResult<LedgerEntryId> {
        if input.amount <= 0 {
            return Err(MarketError::InvalidAmount);
        }

        let entry_id = self
            .wallet_repo
            .log_transaction(&NewLedgerEntry {
                user_id: input.user_id,
                wallet: input.wallet,
                kind: input.kind,
                amount: input.amount,
                order_id: input.order_id,
                product_id: input.product_id,
            })
            .await?;

        tracing::info!(
            entry_id = %entry_id,
            user_id = %input.user_id,
            wallet = input.wallet.as_str(),
            kind = input.kind.as_str(),
            amount = input.amount,
            "Transaction recorded"
        );

        Ok(entry_id)
    }
}
