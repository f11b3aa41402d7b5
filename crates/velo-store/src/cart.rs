//! # Persistent Cart Store
//!
//! Wraps the pure [`Cart`] with a durable mirror: the full line sequence is
//! loaded from storage once at construction and rewritten synchronously
//! after every mutation.
//!
//! ## Persistence Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    CartStore Persistence                            │
//! │                                                                     │
//! │  open() ────► storage.get("cart") ──► JSON decode ──► Cart          │
//! │                    │                      │                         │
//! │                 absent                malformed                     │
//! │                    └──────► empty cart ◄──┘   (warn, never panic)   │
//! │                                                                     │
//! │  add_item / update_quantity / remove_item / clear                   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  mutate in-memory cart ──► storage.set("cart", full JSON) ──► Ok    │
//! │                                                                     │
//! │  NOTE: The mirror is rewritten whole on every mutation. There is    │
//! │        no background flushing and no partial write.                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, warn};

use velo_core::{Bicycle, Cart, CartLine, Money, OrderItem};

use crate::error::StoreResult;
use crate::traits::StringStore;
use crate::DEFAULT_CART_KEY;

/// The shopping cart, mirrored into durable storage.
///
/// Generic over the storage backend so production code can run on
/// [`crate::FileStore`] and tests on [`crate::MemoryStore`] with identical
/// semantics.
#[derive(Debug)]
pub struct CartStore<S> {
    cart: Cart,
    storage: S,
    key: String,
}

impl<S: StringStore> CartStore<S> {
    /// Opens a cart store under the default storage key (`"cart"`).
    pub fn open(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_CART_KEY)
    }

    /// Opens a cart store under a custom storage key.
    ///
    /// Initialization never fails: an absent value is an empty cart, and a
    /// value that does not decode is discarded with a warning rather than
    /// taking the whole client down over a corrupt mirror.
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let cart = match storage.get(&key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<CartLine>>(&raw) {
                Ok(lines) => Cart::from_lines(lines),
                Err(err) => {
                    warn!(%key, %err, "discarding undecodable cart mirror");
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(err) => {
                warn!(%key, %err, "cart mirror unreadable, starting empty");
                Cart::new()
            }
        };

        CartStore { cart, storage, key }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Read-only view of the cart lines, in display order.
    #[inline]
    pub fn items(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// Number of lines (distinct slots) in the cart.
    #[inline]
    pub fn len(&self) -> usize {
        self.cart.len()
    }

    /// Checks if the cart is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Total quantity across all lines. Recomputed on every call.
    pub fn total_items(&self) -> i64 {
        self.cart.total_items()
    }

    /// Cart total (Σ unit price × quantity). Recomputed on every call.
    pub fn total_amount(&self) -> Money {
        self.cart.total_amount()
    }

    /// Order submission payload, in cart order. Pure read.
    pub fn order_items(&self) -> Vec<OrderItem> {
        self.cart.order_items()
    }

    // =========================================================================
    // Mutations (each persists before returning)
    // =========================================================================

    /// Adds a bicycle to the cart, merging into an existing slot when the
    /// `(id, customizations)` identity matches, then persists.
    pub fn add_item(
        &mut self,
        bicycle: &Bicycle,
        quantity: i64,
        customizations: Vec<String>,
    ) -> StoreResult<()> {
        self.cart.add_item(bicycle, quantity, customizations);
        self.persist()
    }

    /// Updates the quantity of the line at `index` (≤ 0 removes the line),
    /// then persists. Fails fast on a stale index, persisting nothing.
    pub fn update_quantity(&mut self, index: usize, quantity: i64) -> StoreResult<()> {
        self.cart.update_quantity(index, quantity)?;
        self.persist()
    }

    /// Removes the line at `index`, then persists. Returns the removed
    /// line. Fails fast on a stale index, persisting nothing.
    pub fn remove_item(&mut self, index: usize) -> StoreResult<CartLine> {
        let removed = self.cart.remove_item(index)?;
        self.persist()?;
        Ok(removed)
    }

    /// Empties the cart, then persists.
    pub fn clear(&mut self) -> StoreResult<()> {
        self.cart.clear();
        self.persist()
    }

    /// Consumes the store, handing back its storage backend.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Rewrites the full durable mirror from the in-memory lines.
    fn persist(&mut self) -> StoreResult<()> {
        let raw = serde_json::to_string(self.cart.lines())?;
        self.storage.set(&self.key, &raw)?;
        debug!(key = %self.key, lines = self.cart.len(), "cart mirror rewritten");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::FileStore;
    use velo_core::CartError;
    use crate::StoreError;

    fn test_bicycle(id: &str, price_cents: i64) -> Bicycle {
        Bicycle {
            id: id.to_string(),
            model_name: format!("Model {}", id),
            brand: "Velo".to_string(),
            price_cents,
            image_url: format!("/img/{}.jpg", id),
            stock_quantity: 5,
        }
    }

    #[test]
    fn test_opens_empty_on_absent_mirror() {
        let store = CartStore::open(MemoryStore::new());
        assert!(store.is_empty());
        assert_eq!(store.total_items(), 0);
        assert_eq!(store.total_amount(), Money::zero());
    }

    #[test]
    fn test_opens_empty_on_corrupt_mirror() {
        let mut storage = MemoryStore::new();
        storage.set(DEFAULT_CART_KEY, "{not json at all").unwrap();

        let store = CartStore::open(storage);
        assert!(store.is_empty());
    }

    #[test]
    fn test_every_mutation_rewrites_mirror() {
        let mut store = CartStore::open(MemoryStore::new());
        store.add_item(&test_bicycle("b-1", 10_000), 2, vec![]).unwrap();

        let storage = store.into_storage();
        let raw = storage.get(DEFAULT_CART_KEY).unwrap().unwrap();
        let lines: Vec<CartLine> = serde_json::from_str(&raw).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 2);
    }

    #[test]
    fn test_round_trip_reproduces_items() {
        let mut store = CartStore::open(MemoryStore::new());
        store
            .add_item(&test_bicycle("b-1", 10_000), 2, vec!["Red".to_string()])
            .unwrap();
        store.add_item(&test_bicycle("b-2", 5_000), 1, vec![]).unwrap();

        let before = store.items().to_vec();
        let reopened = CartStore::open(store.into_storage());

        assert_eq!(reopened.items(), &before[..]);
        assert_eq!(reopened.total_items(), 3);
        assert_eq!(reopened.total_amount().cents(), 25_000);
    }

    #[test]
    fn test_round_trip_through_file_store() {
        let dir = tempfile::tempdir().unwrap();

        {
            let storage = FileStore::open(dir.path()).unwrap();
            let mut store = CartStore::open(storage);
            store
                .add_item(&test_bicycle("b-1", 129_900), 1, vec!["29in".to_string()])
                .unwrap();
            store.add_item(&test_bicycle("b-1", 129_900), 2, vec!["29in".to_string()]).unwrap();
        }

        let storage = FileStore::open(dir.path()).unwrap();
        let store = CartStore::open(storage);
        assert_eq!(store.len(), 1);
        assert_eq!(store.items()[0].quantity, 3);
        assert_eq!(store.total_amount().cents(), 389_700);
    }

    #[test]
    fn test_clear_persists_empty_mirror() {
        let mut store = CartStore::open(MemoryStore::new());
        store.add_item(&test_bicycle("b-1", 10_000), 2, vec![]).unwrap();
        store.clear().unwrap();

        let storage = store.into_storage();
        assert_eq!(
            storage.get(DEFAULT_CART_KEY).unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn test_update_quantity_zero_removes_and_persists() {
        let mut store = CartStore::open(MemoryStore::new());
        store.add_item(&test_bicycle("b-1", 10_000), 2, vec![]).unwrap();

        store.update_quantity(0, 0).unwrap();
        assert!(store.is_empty());

        let reopened = CartStore::open(store.into_storage());
        assert!(reopened.is_empty());
    }

    #[test]
    fn test_stale_index_fails_without_persisting() {
        let mut store = CartStore::open(MemoryStore::new());
        store.add_item(&test_bicycle("b-1", 10_000), 2, vec![]).unwrap();

        let err = store.update_quantity(7, 1).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Cart(CartError::IndexOutOfBounds { index: 7, len: 1 })
        ));

        // The mirror still holds the pre-error state
        let reopened = CartStore::open(store.into_storage());
        assert_eq!(reopened.items()[0].quantity, 2);
    }

    #[test]
    fn test_custom_key() {
        let mut store = CartStore::with_key(MemoryStore::new(), "cart:guest");
        store.add_item(&test_bicycle("b-1", 10_000), 1, vec![]).unwrap();

        let storage = store.into_storage();
        assert!(storage.get("cart:guest").unwrap().is_some());
        assert_eq!(storage.get(DEFAULT_CART_KEY).unwrap(), None);
    }

    #[test]
    fn test_order_items_from_persisted_cart() {
        let mut store = CartStore::open(MemoryStore::new());
        store
            .add_item(&test_bicycle("b-9", 10_000), 2, vec!["Red".to_string()])
            .unwrap();

        let payload = store.order_items();
        assert_eq!(payload.len(), 1);
        assert_eq!(payload[0].bicycle_id, "b-9");
        assert_eq!(payload[0].quantity, 2);
        assert_eq!(payload[0].selected_customizations, vec!["Red".to_string()]);
    }
}
