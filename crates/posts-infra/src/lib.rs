//! # Posts Infrastructure
//!
//! Concrete implementations of the [`PostStore`](posts_core::ports::PostStore)
//! port defined in `posts-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL store via SeaORM
//! - without `postgres` - in-memory store only

pub mod database;
pub mod memory;

pub use database::DatabaseConfig;
pub use memory::InMemoryPostStore;

#[cfg(feature = "postgres")]
pub use database::PostgresPostStore;
