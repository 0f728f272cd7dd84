//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET against the sensor
//! - [`KeyValueStore`] - Local key-value storage for persisted settings

pub mod http;
pub mod storage;

pub use http::{Headers, HttpClient, HttpError, Response, STATUS_UNAUTHORIZED};
pub use storage::{KeyValueStore, StorageError};
