//! # Cart
//!
//! The pure shopping-cart container: an ordered list of line items with
//! derived totals. Persistence lives one layer up, in `velo-store`.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Cart Operations                               │
//! │                                                                     │
//! │  Shopper Action            Operation              State Change      │
//! │  ──────────────            ─────────              ────────────      │
//! │                                                                     │
//! │  Add to cart ────────────► add_item() ──────────► merge or push     │
//! │                                                                     │
//! │  Change quantity ────────► update_quantity() ───► lines[i].qty = n  │
//! │                                                                     │
//! │  Remove line ────────────► remove_item() ───────► lines.remove(i)   │
//! │                                                                     │
//! │  Empty cart ─────────────► clear() ─────────────► lines.clear()     │
//! │                                                                     │
//! │  Checkout ───────────────► order_items() ───────► (read only)       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Line Identity
//! Two lines occupy the same slot iff the `bicycle_id` matches AND the
//! selected customizations are element-wise equal, in order. The same
//! bicycle with `["Red", "29in"]` and `["29in", "Red"]` is two lines.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CartError, CartResult};
use crate::money::Money;
use crate::types::{Bicycle, OrderItem};

// =============================================================================
// Cart Line
// =============================================================================

/// One line of the shopping cart.
///
/// ## Design Notes
/// - `bicycle_id`: Reference to the catalog entry (for server-side lookup)
/// - Everything else is a frozen copy of catalog data at add time.
///   This ensures the cart displays consistent data even if the bicycle
///   is edited in the catalog after being added to the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Catalog identifier of the bicycle.
    pub bicycle_id: String,

    /// Model name at time of adding (frozen).
    pub model_name: String,

    /// Brand at time of adding (frozen).
    pub brand: String,

    /// Price in cents at time of adding (frozen).
    /// This is critical: we lock in the price when added to cart.
    pub unit_price_cents: i64,

    /// Image location at time of adding (frozen).
    pub image_url: String,

    /// Quantity in cart.
    pub quantity: i64,

    /// Chosen customization values, in selection order.
    /// Order-significant: part of the line's identity.
    pub selected_customizations: Vec<String>,

    /// Stock level at time of adding. Advisory only.
    pub stock_quantity: i64,

    /// When this line was first added to the cart.
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a new cart line from a catalog bicycle, freezing its fields.
    pub fn snapshot(bicycle: &Bicycle, quantity: i64, customizations: Vec<String>) -> Self {
        CartLine {
            bicycle_id: bicycle.id.clone(),
            model_name: bicycle.model_name.clone(),
            brand: bicycle.brand.clone(),
            unit_price_cents: bicycle.price_cents,
            image_url: bicycle.image_url.clone(),
            quantity,
            selected_customizations: customizations,
            stock_quantity: bicycle.stock_quantity,
            added_at: Utc::now(),
        }
    }

    /// Returns the frozen unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }

    /// Checks whether this line occupies the slot identified by the given
    /// bicycle and customization sequence.
    pub fn occupies_slot(&self, bicycle_id: &str, customizations: &[String]) -> bool {
        self.bicycle_id == bicycle_id && self.selected_customizations == customizations
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `(bicycle_id, selected_customizations)`;
///   adding into an occupied slot increases its quantity instead
/// - Insertion order is display order; removal shifts later lines left
/// - Totals are recomputed from the lines on every read, never cached
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Creates a cart from previously persisted lines.
    ///
    /// The lines are trusted as-is; this is the deserialization entry
    /// point used by the persistent store.
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Cart { lines }
    }

    /// Read-only view of the lines, in display order.
    #[inline]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Consumes the cart, returning its lines.
    pub fn into_lines(self) -> Vec<CartLine> {
        self.lines
    }

    /// Returns the number of lines (distinct slots) in the cart.
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the cart is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Adds a bicycle to the cart, merging into an existing slot when the
    /// identity matches.
    ///
    /// ## Behavior
    /// - Slot `(bicycle.id, customizations)` already present: its quantity
    ///   grows by `quantity` (no upper bound)
    /// - Otherwise: a new line is appended, snapshotting the bicycle
    ///
    /// `quantity` is expected to be ≥ 1; the caller owns that contract and
    /// no clamping happens here.
    pub fn add_item(&mut self, bicycle: &Bicycle, quantity: i64, customizations: Vec<String>) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.occupies_slot(&bicycle.id, &customizations))
        {
            line.quantity += quantity;
            return;
        }

        self.lines.push(CartLine::snapshot(bicycle, quantity, customizations));
    }

    /// Updates the quantity of the line at `index`.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: the line is removed (same as [`Cart::remove_item`])
    /// - otherwise: the quantity is set as given (no stock-limit check;
    ///   `stock_quantity` on the line is advisory)
    ///
    /// Fails fast with [`CartError::IndexOutOfBounds`] on a stale index.
    pub fn update_quantity(&mut self, index: usize, quantity: i64) -> CartResult<()> {
        if index >= self.lines.len() {
            return Err(CartError::IndexOutOfBounds {
                index,
                len: self.lines.len(),
            });
        }

        if quantity <= 0 {
            self.lines.remove(index);
        } else {
            self.lines[index].quantity = quantity;
        }
        Ok(())
    }

    /// Removes the line at `index`, preserving the relative order of the
    /// remaining lines, and returns it.
    ///
    /// Fails fast with [`CartError::IndexOutOfBounds`] on a stale index.
    pub fn remove_item(&mut self, index: usize) -> CartResult<CartLine> {
        if index >= self.lines.len() {
            return Err(CartError::IndexOutOfBounds {
                index,
                len: self.lines.len(),
            });
        }

        Ok(self.lines.remove(index))
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Returns the total quantity across all lines.
    pub fn total_items(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Calculates the cart total (Σ unit price × quantity).
    pub fn total_amount(&self) -> Money {
        self.lines
            .iter()
            .map(|l| l.line_total())
            .fold(Money::zero(), |acc, t| acc + t)
    }

    /// Projects every line into the order submission shape, in cart order.
    ///
    /// Pure read: building the payload does not touch the cart.
    pub fn order_items(&self) -> Vec<OrderItem> {
        self.lines
            .iter()
            .map(|l| OrderItem {
                bicycle_id: l.bicycle_id.clone(),
                quantity: l.quantity,
                selected_customizations: l.selected_customizations.clone(),
            })
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
