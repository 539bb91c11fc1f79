//! Database module providing organized access to all database operations
//!
//! - `connection`: pool configuration and embedded migrations
//! - `query`: the parameterized statement helper every raw query goes through
//! - `users`, `catalog`, `profile`: storefront reads and the registration insert
//! - `sessions`: the server-side session store
//! - `service`: `DatabaseService`, the unified interface handed to routes

pub mod catalog;
pub mod connection;
pub mod profile;
pub mod query;
pub mod service;
pub mod sessions;
pub mod users;

pub use connection::{DbConnection, DbPool, MIGRATIONS};
pub use query::{QueryOutcome, SqlParam, StatementKind, query_db};
pub use service::DatabaseService;

pub use catalog::CatalogOperations;
pub use profile::ProfileOperations;
pub use sessions::SessionOperations;
pub use users::UserOperations;
