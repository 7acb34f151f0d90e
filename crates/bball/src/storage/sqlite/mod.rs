//! SQLite storage backend implementation.
//!
//! This module provides the relational implementation of `EntryRepository`
//! using `rusqlite` for synchronous operations and `tokio-rusqlite` for async
//! wrapping. Ids and timestamps are generated by the database.

mod connection;
mod conversions;
mod error;
mod repository;
mod schema;

pub use connection::SqliteConnectionProvider;
pub use repository::SqliteRepository;
