//! AppMessage enum for async communication within the application.

use crate::error::FetchError;
use crate::models::Reading;

/// Messages delivered to the event loop by background tasks
#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    /// A fetch started by a reload finished
    ReadingFetched(Result<Reading, FetchError>),
    /// The terminal came back into focus
    Foregrounded,
}
