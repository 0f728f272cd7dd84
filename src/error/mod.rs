//! Error types for tempwatch.
//!
//! - [`FetchError`] - a temperature fetch failed (invalid token, unreachable,
//!   malformed body). Surfaced to the user, never retried.
//! - [`StoreError`] - reading or writing the persisted settings failed.
//!   Read errors are logged and treated as "nothing stored"; write errors
//!   are surfaced to the user.
//!
//! Neither kind is fatal. The application always returns to an idle state
//! showing the last good reading.

mod fetch;
mod store;

pub use fetch::FetchError;
pub use store::StoreError;
