//! Startup helpers shared by the recipe services.
//!
//! This crate provides:
//! - [`connect`], a bounded retry loop for obtaining a store handle at startup
//! - [`RetryPolicy`] describing attempts and the fixed wait between them
//! - [`shutdown_signal`] for Ctrl+C / SIGTERM
//!
//! ## Example Usage
//! ```ignore
//! use bootstrap::{connect, shutdown_signal, RetryPolicy};
//!
//! let store = connect(&RetryPolicy::default(), shutdown_signal(), |attempt| async move {
//!     RecipeStore::open(&path, false)
//! })
//! .await?;
//! ```

pub mod retry;
pub mod signal;

pub use retry::{ConnectError, DEFAULT_INTERVAL, DEFAULT_MAX_ATTEMPTS, RetryPolicy, connect};
pub use signal::shutdown_signal;
