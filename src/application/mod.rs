//! Application layer: services and use cases
//!
//! Orchestrates the parsing core around file and directory input.

pub mod error;
pub mod error_ext;
pub mod export;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use export::{ExportService, ParsedExport};
