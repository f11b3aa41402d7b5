//! # velo-core: Pure Business Logic for the Velo Shop Client
//!
//! This crate is the **heart** of the Velo Shop client layer. It contains
//! all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Velo Shop Client Architecture                   │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                 Embedding Application                         │  │
//! │  │    Catalog UI ──► Cart UI ──► Checkout ──► Order submission   │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │                 ★ velo-core (THIS CRATE) ★                    │  │
//! │  │                                                               │  │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────────────────┐    │  │
//! │  │   │   types   │  │   money   │  │         cart          │    │  │
//! │  │   │  Bicycle  │  │   Money   │  │   Cart / CartLine     │    │  │
//! │  │   │   User    │  │  (cents)  │  │   totals, projection  │    │  │
//! │  │   └───────────┘  └───────────┘  └───────────────────────┘    │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS           │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │                 velo-store (Storage Layer)                    │  │
//! │  │        Durable key-value backends, persistent stores          │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Bicycle, OrderItem, User, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The cart container: merge-by-identity adds, derived totals
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use velo_core::{Bicycle, Cart};
//!
//! let bicycle = Bicycle {
//!     id: "64f1c0ffee".to_string(),
//!     model_name: "Gravel One".to_string(),
//!     brand: "Velo".to_string(),
//!     price_cents: 129_900, // $1299.00 - never floats!
//!     image_url: "/img/gravel-one.jpg".to_string(),
//!     stock_quantity: 4,
//! };
//!
//! let mut cart = Cart::new();
//! cart.add_item(&bicycle, 2, vec!["frame_color:Red".to_string()]);
//!
//! assert_eq!(cart.total_items(), 2);
//! assert_eq!(cart.total_amount().cents(), 259_800);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use velo_core::Cart` instead of
// `use velo_core::cart::Cart`

pub use cart::{Cart, CartLine};
pub use error::{CartError, CartResult};
pub use money::Money;
pub use types::*;
