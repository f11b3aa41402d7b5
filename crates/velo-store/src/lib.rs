//! # velo-store: Storage Layer for the Velo Shop Client
//!
//! Durable key-value storage and the state containers built on it.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Velo Shop Client Data Flow                      │
//! │                                                                     │
//! │  Embedding application (UI / transport)                             │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                   velo-store (THIS CRATE)                     │  │
//! │  │                                                               │  │
//! │  │   ┌──────────────┐   ┌───────────────┐   ┌────────────────┐  │  │
//! │  │   │  CartStore   │   │ SessionStore  │   │  NoticeStore   │  │  │
//! │  │   │ cart mirror  │   │ token + user  │   │  (in-memory)   │  │  │
//! │  │   └──────┬───────┘   └───────┬───────┘   └────────────────┘  │  │
//! │  │          │                   │                               │  │
//! │  │          ▼                   ▼                               │  │
//! │  │   ┌───────────────────────────────────────┐                  │  │
//! │  │   │        StringStore (trait)            │                  │  │
//! │  │   │   MemoryStore        FileStore        │                  │  │
//! │  │   └───────────────────────────────────────┘                  │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`traits`] - The `StringStore` durable key-value abstraction
//! - [`memory`] - In-memory backend (tests, ephemeral sessions)
//! - [`file`] - File-per-key backend (the localStorage analog)
//! - [`cart`] - Persistent cart store
//! - [`session`] - Auth session store
//! - [`notice`] - Transient notice store
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use velo_store::{CartStore, FileStore};
//!
//! let storage = FileStore::open("~/.velo-shop")?;
//! let mut cart = CartStore::open(storage);
//!
//! cart.add_item(&bicycle, 1, vec!["frame_color:Red".into()])?;
//! println!("{} items, {}", cart.total_items(), cart.total_amount());
//! ```
//!
//! ## Execution Model
//! Single-threaded and synchronous: every operation runs to completion on
//! the calling thread, and every mutation rewrites its durable mirror
//! before returning. If two processes point at the same FileStore
//! directory, last writer wins.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod file;
pub mod memory;
pub mod notice;
pub mod session;
pub mod traits;

// =============================================================================
// Re-exports
// =============================================================================

pub use cart::CartStore;
pub use error::{StoreError, StoreResult};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use notice::{Notice, NoticeLevel, NoticeStore};
pub use session::SessionStore;
pub use traits::StringStore;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Storage key the cart mirror lives under.
///
/// Matches the key the web client has always used, so a FileStore pointed
/// at an existing profile directory picks up the same cart.
pub const DEFAULT_CART_KEY: &str = "cart";

/// Storage key the session token lives under.
pub const DEFAULT_TOKEN_KEY: &str = "token";

/// How long a published notice stays visible.
pub const DEFAULT_NOTICE_TTL: std::time::Duration = std::time::Duration::from_secs(3);
