//! Observable events
//!
//! Events are explicit and typed; each maps to one stable log name.

use std::fmt;

use super::logger::Severity;

/// Observable events of the command-line front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration file read and validated
    ConfigLoaded,
    /// Dataset read into memory
    DatasetLoaded,
    /// Search received with parsed criteria
    SearchStart,
    /// Search produced at least one row
    SearchComplete,
    /// Search ran but nothing matched
    SearchNoMatches,
    /// Search refused: bad criteria or unusable dataset
    SearchRejected,
    /// Output table written to a file
    ExportWritten,
    /// Command ended with an error
    CommandFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::DatasetLoaded => "DATASET_LOADED",
            Event::SearchStart => "SEARCH_BEGIN",
            Event::SearchComplete => "SEARCH_COMPLETE",
            Event::SearchNoMatches => "SEARCH_NO_MATCHES",
            Event::SearchRejected => "SEARCH_REJECTED",
            Event::ExportWritten => "EXPORT_WRITTEN",
            Event::CommandFailed => "COMMAND_FAILED",
        }
    }

    /// Returns true for events that report a refused operation
    pub fn is_rejection(&self) -> bool {
        matches!(self, Event::SearchRejected)
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::CommandFailed => Severity::Error,
            e if e.is_rejection() => Severity::Warn,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_events_have_string_representation() {
        let events = [
            Event::ConfigLoaded,
            Event::DatasetLoaded,
            Event::SearchStart,
            Event::SearchComplete,
            Event::SearchNoMatches,
            Event::SearchRejected,
            Event::ExportWritten,
            Event::CommandFailed,
        ];

        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_rejection_flag() {
        assert!(Event::SearchRejected.is_rejection());
        assert!(!Event::SearchNoMatches.is_rejection());
    }

    #[test]
    fn test_event_severity() {
        assert_eq!(Event::CommandFailed.severity(), Severity::Error);
        assert_eq!(Event::SearchRejected.severity(), Severity::Warn);
        assert_eq!(Event::SearchNoMatches.severity(), Severity::Info);
        assert_eq!(Event::ExportWritten.severity(), Severity::Info);
    }
}
