use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the data loading pipeline.
///
/// Both variants are fatal for the current session iteration; the session
/// loop reports them and prompts again.
#[derive(Debug, Error)]
pub enum Error {
    /// The backing CSV file for a city is missing or unreadable.
    #[error("could not read {city} data from {}", path.display())]
    DataSource {
        city: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be deserialized, or its start time or a numeric
    /// field is malformed. `record` is the 1-based data row number.
    #[error("record {record}: {detail}")]
    Parse { record: u64, detail: String },
}
