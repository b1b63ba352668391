use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors raised by page operations before any request is issued
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("no listed row with id {id} {location}")]
    UnknownRow { id: String, location: ErrorLocation },

    #[error("user {id} is not available for selection {location}")]
    UnknownMember { id: String, location: ErrorLocation },
}

impl EditorError {
    #[track_caller]
    pub fn unknown_row<S: Into<String>>(id: S) -> Self {
        EditorError::UnknownRow {
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unknown_member<S: Into<String>>(id: S) -> Self {
        EditorError::UnknownMember {
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
