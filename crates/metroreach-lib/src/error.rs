use thiserror::Error;

use crate::graph::{LineId, StationId};

/// Convenient result alias for the metroreach library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Raised when a traversal budget is negative.
    #[error("limit must be non-negative, got {limit}")]
    InvalidLimit { limit: i64 },

    /// Raised when a station identifier does not belong to the graph.
    #[error("station {id} does not belong to this transit graph")]
    UnknownStationId { id: StationId },

    /// Raised when a station name could not be found in the graph.
    #[error("unknown station name: {name}{}", format_suggestions(.suggestions))]
    UnknownStation {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a policy name is not one of the supported limit types.
    #[error("unknown reachability policy: {name}")]
    UnknownPolicy { name: String },

    /// Raised when two stations share an identifier.
    #[error("duplicate station id {id}")]
    DuplicateStation { id: StationId },

    /// Raised when two lines share an identifier.
    #[error("duplicate line id {id}")]
    DuplicateLine { id: LineId },

    /// Raised when a line calls at the same station more than once.
    #[error("line {line} calls at station {station} more than once")]
    DuplicateStop { line: LineId, station: StationId },

    /// Raised when a traversal configuration cannot produce meaningful times.
    #[error("invalid reachability config: {message}")]
    InvalidConfig { message: String },
}

impl Error {
    /// Whether this error rejects a caller-supplied argument before traversal.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::InvalidLimit { .. }
                | Error::UnknownStationId { .. }
                | Error::UnknownStation { .. }
                | Error::UnknownPolicy { .. }
                | Error::InvalidConfig { .. }
        )
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
