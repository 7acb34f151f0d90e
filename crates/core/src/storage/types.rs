/// The behavioural flavour of a storage backend.
///
/// The two backends intentionally differ, and callers rely on it:
///
/// | | `Relational` | `KeyValue` |
/// |---|---|---|
/// | `get_all` | newest first, capped at a limit | unordered full scan |
/// | service `update` | fetch, validate, rewrite whole entry | validate, field-level update |
/// | schema bootstrap | `CREATE TABLE IF NOT EXISTS` | none |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Relational,
    KeyValue,
}

impl StorageKind {
    /// Returns true if listings are ordered and limited.
    pub fn is_relational(self) -> bool {
        matches!(self, StorageKind::Relational)
    }
}
