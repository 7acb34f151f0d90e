//! DynamoDB storage backend implementation.
//!
//! This module provides the key-value implementation of `EntryRepository`
//! using `aws-sdk-dynamodb`. Items are keyed by a UUID string `id` attribute
//! generated before the write.

mod client;
mod conversions;
mod error;
mod expressions;
mod repository;

pub use client::{AwsSettings, DynamoDbClientProvider};
pub use repository::DynamoDbRepository;
