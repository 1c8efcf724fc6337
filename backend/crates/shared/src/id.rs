//! Common ID Types
//!
//! Type-safe ID wrappers for marketplace entities.

use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type ProductId = Id<markers::Product>;
/// ```
pub struct Id<T> {
    value: uuid::Uuid,
    _marker: PhantomData<T>,
}

// Manual impls to avoid the derive-generated `T: Clone`/`T: Copy`/etc.
// bounds, which marker types don't (and shouldn't need to) satisfy.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> Id<T> {
    /// Create a new random ID (UUID v4)
    pub fn new() -> Self {
        Self {
            value: Uuid::new_v4(),
            _marker: PhantomData,
        }
    }

    /// Create from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            value: uuid,
            _marker: PhantomData,
        }
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.value
    }

    /// Convert to UUID
    pub fn into_uuid(self) -> Uuid {
        self.value
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<Uuid> for Id<T> {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl<T> From<Id<T>> for Uuid {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for User IDs
    pub struct User;

    /// Marker for Product IDs
    pub struct Product;

    /// Marker for Category IDs
    pub struct Category;

    /// Marker for Order IDs
    pub struct Order;

    /// Marker for ledger Transaction IDs
    pub struct LedgerEntry;

    /// Marker for Payment IDs
    pub struct Payment;

    /// Marker for Review IDs
    pub struct Review;

    /// Marker for SellerPlan IDs
    pub struct SellerPlan;
}

/// Type aliases for common IDs
pub type UserId = Id<markers::User>;
pub type ProductId = Id<markers::Product>;
pub type CategoryId = Id<markers::Category>;
pub type OrderId = Id<markers::Order>;
pub type LedgerEntryId = Id<markers::LedgerEntry>;
pub type PaymentId = Id<markers::Payment>;
pub type ReviewId = Id<markers::Review>;
pub type SellerPlanId = Id<markers::SellerPlan>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_type_safety() {
        let product_id: ProductId = Id::new();
        let order_id: OrderId = Id::new();

        // These are different types, cannot be mixed
        let _p: Uuid = product_id.into_uuid();
        let _o: Uuid = order_id.into_uuid();
    }

    #[test]
    fn test_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id: ProductId = Id::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
    }
}
