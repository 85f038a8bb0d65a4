//! Error types

use thiserror::Error;

/// Reason a single span could not be turned into a customer record.
///
/// These are expected and frequent: the span is skipped, the reason is
/// reported to the caller and the batch carries on with the next span.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionFailure {
    #[error("no trailing phone number of 9 to 15 digits")]
    NoPhoneFound,

    #[error("no preferred time found before the phone number")]
    NoTimeFound,

    #[error("no customer name before the preferred time")]
    EmptyName,

    #[error("nothing after the preferred time")]
    EmptyTail,

    #[error("destination is empty after splitting")]
    EmptyDestination,

    #[error("address is empty after splitting")]
    EmptyAddress,
}

/// Errors outside of per-span extraction (input and output plumbing)
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read input: {0}")]
    Input(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid time of day {hour:02}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_display() {
        assert_eq!(
            ExtractionFailure::NoPhoneFound.to_string(),
            "no trailing phone number of 9 to 15 digits"
        );
    }

    #[test]
    fn test_failure_serializes_as_snake_case() {
        let json = serde_json::to_string(&ExtractionFailure::NoTimeFound).unwrap();
        assert_eq!(json, "\"no_time_found\"");
        let json = serde_json::to_string(&ExtractionFailure::EmptyTail).unwrap();
        assert_eq!(json, "\"empty_tail\"");
    }
}
