//! # Error Types
//!
//! Domain-specific error types for velo-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                │
//! │                                                                     │
//! │  velo-core errors (this file)                                       │
//! │  └── CartError    - Cart addressing failures                        │
//! │                                                                     │
//! │  velo-store errors (separate crate)                                 │
//! │  └── StoreError   - Storage / serialization failures                │
//! │                                                                     │
//! │  Flow: CartError → StoreError → embedding application               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (index, length, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Cart Error
// =============================================================================

/// Cart operation errors.
///
/// Index-addressed operations check bounds up front: silently ignoring a
/// stale index would let the in-memory cart diverge from what the UI shows.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// The given line index does not exist in the cart.
    ///
    /// ## When This Occurs
    /// - The UI issued an update/remove against a line that was already
    ///   removed
    /// - The cart was cleared between render and action
    #[error("cart line index {index} out of bounds (cart has {len} lines)")]
    IndexOutOfBounds { index: usize, len: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

// =============================================================================
// Unit Tests
// =============================================================================
