//! Functional core for the bball entry services.
//!
//! Everything in this crate is pure: data types, validation rules, the static
//! event schema and the response envelope. Storage access is described by the
//! traits in [`storage`] and implemented in the `bball` crate.

pub mod entry;
pub mod event;
pub mod storage;
