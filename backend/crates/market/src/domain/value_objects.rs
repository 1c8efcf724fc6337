//! Domain Value Objects
//!
//! Immutable value types for the marketplace domain. Statuses are stored
//! as text in the database; each type round-trips through `as_str`.

use platform::crypto::random_token;

/// Order lifecycle: pending (awaiting payment) -> paid -> completed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Paid,
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Completed => "completed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(OrderStatus::Pending),
            "paid" => Some(OrderStatus::Paid),
            "completed" => Some(OrderStatus::Completed),
            _ => None,
        }
    }
}

/// Escrow state: locked until the buyer confirms delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscrowStatus {
    Locked,
    Released,
}

impl EscrowStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EscrowStatus::Locked => "locked",
            EscrowStatus::Released => "released",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "locked" => Some(EscrowStatus::Locked),
            "released" => Some(EscrowStatus::Released),
            _ => None,
        }
    }
}

/// Delivery confirmation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    Pending,
    Confirmed,
}

impl DeliveryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "pending",
            DeliveryStatus::Confirmed => "confirmed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(DeliveryStatus::Pending),
            "confirmed" => Some(DeliveryStatus::Confirmed),
            _ => None,
        }
    }
}

/// Which balance of a wallet a ledger entry touches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletKind {
    Main,
    Earnings,
}

impl WalletKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WalletKind::Main => "main",
            WalletKind::Earnings => "earnings",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "main" => Some(WalletKind::Main),
            "earnings" => Some(WalletKind::Earnings),
            _ => None,
        }
    }
}

/// Kind of balance-affecting event recorded in the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerEntryKind {
    Sale,
    Deposit,
    Withdrawal,
    Refund,
}

impl LedgerEntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LedgerEntryKind::Sale => "sale",
            LedgerEntryKind::Deposit => "deposit",
            LedgerEntryKind::Withdrawal => "withdrawal",
            LedgerEntryKind::Refund => "refund",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "sale" => Some(LedgerEntryKind::Sale),
            "deposit" => Some(LedgerEntryKind::Deposit),
            "withdrawal" => Some(LedgerEntryKind::Withdrawal),
            "refund" => Some(LedgerEntryKind::Refund),
            _ => None,
        }
    }
}

/// Funding direction of a payment request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentType {
    #[default]
    Deposit,
    Withdrawal,
}

impl PaymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::Deposit => "deposit",
            PaymentType::Withdrawal => "withdrawal",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "deposit" => Some(PaymentType::Deposit),
            "withdrawal" => Some(PaymentType::Withdrawal),
            _ => None,
        }
    }
}

/// Which side of an order a user is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderRole {
    #[default]
    Buyer,
    Seller,
}

/// Platform commission percentage, validated to 0..=100
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommissionRate(u8);

impl CommissionRate {
    pub const DEFAULT: CommissionRate = CommissionRate(10);
    pub const MAX_PERCENT: u8 = 100;

    pub fn new(percent: u8) -> Option<Self> {
        if percent <= Self::MAX_PERCENT {
            Some(Self(percent))
        } else {
            None
        }
    }

    pub fn percent(&self) -> u8 {
        self.0
    }
}

impl Default for CommissionRate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Unique order reference shown to buyers and sellers.
///
/// Random-token based: the timestamp-plus-user schemes collide under
/// concurrent requests, so the reference embeds 96 bits of randomness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderNumber(String);

impl OrderNumber {
    const PREFIX: &'static str = "ORD-";
    const TOKEN_BYTES: usize = 12;

    pub fn generate() -> Self {
        Self(format!("{}{}", Self::PREFIX, random_token(Self::TOKEN_BYTES)))
    }

    pub fn from_db(s: String) -> Self {
        Self(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Unique payment reference, same scheme as [`OrderNumber`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReference(String);

impl PaymentReference {
    const PREFIX: &'static str = "PAY-";
    const TOKEN_BYTES: usize = 12;

    pub fn generate() -> Self {
        Self(format!("{}{}", Self::PREFIX, random_token(Self::TOKEN_BYTES)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
