//! In-memory storage backend for testing.
//!
//! Entries live in a HashMap wrapped in `Arc<RwLock<_>>` and are lost when
//! the repository is dropped. The repository can imitate either backend
//! flavour, including its id scheme, ordering and `description` handling.
//!
//! # Example
//!
//! ```rust,ignore
//! use bball::storage::inmemory::InMemoryRepository;
//!
//! let records = InMemoryRepository::relational();
//! let items = InMemoryRepository::key_value();
//! ```

mod repository;

pub use repository::InMemoryRepository;
