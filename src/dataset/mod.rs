//! Dataset subsystem
//!
//! In-memory tabular data the matcher runs over, plus the local loader
//! that builds it from CSV or JSON files. The matcher only ever borrows a
//! dataset immutably.

mod errors;
mod loader;
mod record;
mod value;

pub use errors::{DatasetError, DatasetResult};
pub use loader::DatasetLoader;
pub use record::{Dataset, Record};
pub use value::CellValue;
