//! # advert-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the [`AdvertRepository`](advert_app::ports::AdvertRepository)
//!   port defined in `advert-app`
//! - Manage the `SQLite` connection pool lifecycle
//! - Run database migrations (sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `advert-app` (for the port trait) and `advert-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

pub mod advert_repo;
pub mod error;
pub mod pool;

pub use advert_repo::SqliteAdvertRepository;
pub use pool::{Config, Database};
