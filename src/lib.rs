//! dx-sheets - generators for the DX status workbook and the kintone import manual
//!
//! Both workbooks are laid out into an in-memory document model
//! ([`types::Workbook`]) and then serialized by a [`excel::WorkbookWriter`].
//!
//! # Features
//!
//! - Status template: comparison matrix, progress dashboard, before/after table
//! - Dashboard figures derived from the same work items as the matrix
//! - Five-step data import manual with screenshot placeholders
//! - `xlsx` cargo feature (default) for the rust_xlsxwriter backend
//!
//! # Example
//!
//! ```no_run
//! use dx_sheets::builder::{StatusTemplate, Template};
//! use dx_sheets::excel::default_writer;
//! use std::path::Path;
//!
//! let date = chrono::NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
//! let template = StatusTemplate::new(date);
//! let workbook = template.build()?;
//!
//! println!("Sheets: {:?}", workbook.sheet_names());
//!
//! default_writer().write(&workbook, Path::new(template.file_name()))?;
//! # Ok::<(), dx_sheets::error::SheetsError>(())
//! ```

pub mod builder;
pub mod cli;
pub mod core;
pub mod error;
pub mod excel;
pub mod types;

// Re-export commonly used types
pub use error::{ErrorKind, SheetsError, SheetsResult};
pub use types::{Cell, CellRange, Sheet, Style, Workbook};
