//! Observability for the command-line front end
//!
//! Structured JSON logging of typed lifecycle events. The matching engine
//! itself never logs; only the CLI steps around it do.
//!
//! # Usage
//!
//! ```ignore
//! use mofmatch::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::SearchComplete, &[("rows", "3")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
