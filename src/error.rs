//! Error handling for report parsing operations.
//!
//! All parse failures are fatal: the parser raises on the first detected
//! malformation and never attempts partial-report recovery.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The report text violates the fixed Radio Mobile layout: bad header,
    /// missing section, unparsable timestamp or coordinate, or a net with
    /// a missing/duplicate master member.
    #[error("format error in {section}: {reason}")]
    Format { section: String, reason: String },

    /// A declared table field was not found in a table header line.
    #[error("table field '{field}' not found in header line")]
    Table { field: String },

    /// Report serialization failed.
    #[error("render error: {0}")]
    Render(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a format error with the offending section name
    pub fn format(section: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Format {
            section: section.into(),
            reason: reason.into(),
        }
    }

    /// Create a table extraction error for a missing field
    pub fn table(field: impl Into<String>) -> Self {
        Self::Table {
            field: field.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
