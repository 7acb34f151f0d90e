//! Storage backend implementations.
//!
//! This module provides concrete implementations of
//! `bball_core::storage::EntryRepository`. The implementations are selected
//! at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `sqlite`: relational backend using `rusqlite` and `tokio-rusqlite`,
//!   keyed by `i64`
//! - `dynamodb`: key-value backend using `aws-sdk-dynamodb`, keyed by UUID
//!   strings
//! - `inmemory`: a double that behaves like either of the above
//!
//! # Examples
//!
//! Build only the records function:
//! ```bash
//! cargo build -p bball --no-default-features --features sqlite --bin bball-records
//! ```

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub use sqlite::{SqliteConnectionProvider, SqliteRepository};

#[cfg(feature = "dynamodb")]
pub use dynamodb::{AwsSettings, DynamoDbClientProvider, DynamoDbRepository};

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryRepository;
