//! Entry date handling
//!
//! Ledger entries store their date as the display-formatted string shown in
//! the table (`DD/MM/YYYY`), derived from ISO-style user input by reordering
//! the dash-separated components. No calendar validity checking is performed:
//! "2024-13-99" is accepted and becomes "99/13/2024". That is the documented
//! contract, so chrono parsing is intentionally not involved here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A display-formatted entry date (`DD/MM/YYYY`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryDate(String);

impl EntryDate {
    /// Build an entry date from ISO-style input (`YYYY-MM-DD`)
    ///
    /// Requires exactly three non-empty dash-separated components; the
    /// components themselves are carried over verbatim.
    pub fn from_iso(input: &str) -> Result<Self, DateParseError> {
        let parts: Vec<&str> = input.trim().split('-').collect();

        if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
            return Err(DateParseError::InvalidFormat(input.trim().to_string()));
        }

        Ok(Self(format!("{}/{}/{}", parts[2], parts[1], parts[0])))
    }

    /// Wrap an already display-formatted date (e.g. loaded from storage)
    pub fn from_display(display: impl Into<String>) -> Self {
        Self(display.into())
    }

    /// The display form of the date
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for entry date parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    InvalidFormat(String),
}

impl fmt::Display for DateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateParseError::InvalidFormat(s) => {
                write!(f, "Invalid date format: '{}'. Use YYYY-MM-DD", s)
            }
        }
    }
}

impl std::error::Error for DateParseError {}
