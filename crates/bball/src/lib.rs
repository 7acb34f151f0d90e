//! Entry CRUD functions.
//!
//! Two event-driven functions share one service layer:
//!
//! - **records** ([`handlers::RecordsHandler`]): every event creates an entry
//!   in SQLite, keyed by a store-assigned integer.
//! - **items** ([`handlers::ItemsHandler`]): `{action, data}` events run
//!   create, get, list, update or delete against DynamoDB, keyed by UUID.
//!
//! Pure types and rules live in `bball_core`; this crate holds the storage
//! backends, the service, the handlers and the runtime wiring.

pub mod config;
pub mod error;
pub mod handlers;
pub mod service;
pub mod storage;
pub mod telemetry;

pub use config::{Config, LogFormat};
pub use error::{InvocationError, ServiceError};
pub use handlers::{ItemsHandler, RecordsHandler};
pub use service::EntryService;
