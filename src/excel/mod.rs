//! Workbook serialization
//!
//! The document model in [`crate::types`] is turned into a file by a
//! [`WorkbookWriter`]. The xlsx writer is backed by `rust_xlsxwriter` and only
//! exists when the crate is built with the `xlsx` feature; otherwise
//! [`default_writer`] hands out an [`UnavailableWriter`] so callers report the
//! missing backend instead of producing a file.

mod columns;
#[cfg(feature = "xlsx")]
mod exporter;

pub use columns::{cell_name, column_letter};
#[cfg(feature = "xlsx")]
pub use exporter::XlsxWriter;

use crate::error::{SheetsError, SheetsResult};
use crate::types::Workbook;
use std::path::Path;

/// Serializes a [`Workbook`] to disk
pub trait WorkbookWriter {
    /// Short backend name used in messages
    fn name(&self) -> &'static str;

    fn is_available(&self) -> bool {
        true
    }

    /// Write `workbook` to `path`, replacing any existing file
    fn write(&self, workbook: &Workbook, path: &Path) -> SheetsResult<()>;

    fn ensure_available(&self) -> SheetsResult<()> {
        if self.is_available() {
            Ok(())
        } else {
            Err(SheetsError::WriterUnavailable {
                backend: self.name(),
            })
        }
    }
}

/// Stand-in for a backend that was not compiled in
#[derive(Debug, Clone, Copy)]
pub struct UnavailableWriter {
    backend: &'static str,
}

impl UnavailableWriter {
    pub fn new(backend: &'static str) -> Self {
        Self { backend }
    }
}

impl WorkbookWriter for UnavailableWriter {
    fn name(&self) -> &'static str {
        self.backend
    }

    fn is_available(&self) -> bool {
        false
    }

    fn write(&self, _workbook: &Workbook, _path: &Path) -> SheetsResult<()> {
        Err(SheetsError::WriterUnavailable {
            backend: self.backend,
        })
    }
}

/// The writer selected by this build's features
pub fn default_writer() -> Box<dyn WorkbookWriter> {
    #[cfg(feature = "xlsx")]
    {
        Box::new(XlsxWriter::new())
    }
    #[cfg(not(feature = "xlsx"))]
    {
        Box::new(UnavailableWriter::new("xlsx"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_unavailable_writer_refuses() {
        let writer = UnavailableWriter::new("xlsx");
        assert!(!writer.is_available());
        let err = writer.ensure_available().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DependencyMissing);

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("never.xlsx");
        assert!(writer.write(&Workbook::new(), &path).is_err());
        assert!(!path.exists());
    }

    #[cfg(feature = "xlsx")]
    #[test]
    fn test_default_writer_is_xlsx() {
        let writer = default_writer();
        assert_eq!(writer.name(), "xlsx");
        assert!(writer.ensure_available().is_ok());
    }
}
