//! Per-section collection results.

use serde::{Deserialize, Serialize};

use crate::error::OutreachError;

/// Outcome of collecting one section of a profile report.
///
/// A report section either loaded (possibly empty) or failed with a typed
/// error. Rendering an `Unavailable` section produces an explicit
/// unavailable marker, so a failed sub-call is never confused with a
/// genuinely empty collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Section<T> {
    /// The section was fetched successfully. The value may be empty.
    Loaded(T),
    /// The section could not be fetched; the error explains why.
    Unavailable(OutreachError),
}

impl<T> Section<T> {
    /// Returns the loaded value, if any.
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Section::Loaded(value) => Some(value),
            Section::Unavailable(_) => None,
        }
    }

    /// Returns the error for an unavailable section, if any.
    pub fn unavailable(&self) -> Option<&OutreachError> {
        match self {
            Section::Loaded(_) => None,
            Section::Unavailable(err) => Some(err),
        }
    }

    /// True if the section loaded successfully.
    pub fn is_loaded(&self) -> bool {
        matches!(self, Section::Loaded(_))
    }

    /// Builds a section from a fallible fetch result.
    pub fn from_result(result: crate::error::Result<T>) -> Self {
        match result {
            Ok(value) => Section::Loaded(value),
            Err(err) => Section::Unavailable(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result_ok() {
        let section = Section::from_result(Ok(vec![1, 2, 3]));
        assert!(section.is_loaded());
        assert_eq!(section.loaded(), Some(&vec![1, 2, 3]));
    }

    #[test]
    fn test_from_result_err() {
        let section: Section<Vec<i32>> =
            Section::from_result(Err(OutreachError::upstream_rejected("GitHub", 500, "boom")));
        assert!(!section.is_loaded());
        assert!(section.unavailable().unwrap().is_upstream());
    }
}
