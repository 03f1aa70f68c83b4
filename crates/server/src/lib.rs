//! HTTP services for the recipe catalog.
//!
//! This crate contains two axum services:
//! - the recipe book, which owns the store file (`/list`, `/create`, `/find`)
//! - recipe search, which filters recipes from a store file or a remote
//!   recipe book (`/recipe`, `/details`)
//!
//! Both attach to their backing store with [`bootstrap::connect`] at
//! startup and shut down gracefully on Ctrl+C or SIGTERM.

pub mod config;
pub mod error;
pub mod routes;
pub mod search;
pub mod server;
pub mod source;
pub mod state;

pub use config::ServiceConfig;
pub use error::{ServiceError, ServiceResult};
pub use search::RecipeSearch;
pub use server::{build_book_router, build_search_router, run_book_service, run_search_service};
pub use source::{RecipeSource, RemoteRecipeBook};
pub use state::{BookState, SearchState};
