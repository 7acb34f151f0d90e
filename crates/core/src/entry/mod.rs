mod error;
mod key;
mod requests;
mod types;
mod validation;

pub use error::ValidationError;
pub use key::EntryKey;
pub use requests::{CreateEntryRequest, EntryPatch};
pub use types::{Entry, ItemEntry, RecordEntry};
pub use validation::{
    validate_limit, validate_name, validate_value, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT,
    MAX_NAME_LENGTH,
};
