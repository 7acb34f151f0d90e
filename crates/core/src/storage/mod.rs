mod error;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use traits::EntryRepository;
pub use types::StorageKind;
