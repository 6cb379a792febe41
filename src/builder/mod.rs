//! Workbook templates
//!
//! Each template lays its content out into the document model top to bottom,
//! advancing a [`RowCursor`] as sections are appended. Nothing here touches the
//! filesystem; see [`crate::excel`] for serialization.

pub mod manual;
pub mod status_template;

pub use manual::{Manual, ManualStep};
pub use status_template::StatusTemplate;

use crate::core::styles;
use crate::error::SheetsResult;
use crate::types::{CellRange, Sheet, Style, Workbook};
use chrono::NaiveDate;

/// A generator for one workbook file
pub trait Template {
    /// Default output file name
    fn file_name(&self) -> &str;

    /// First line of the completion summary, followed by the output path
    fn headline(&self) -> &str;

    /// Remaining completion summary lines
    fn notes(&self) -> Vec<String>;

    fn build(&self) -> SheetsResult<Workbook>;
}

/// Zero-based row counter for sequential layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCursor {
    row: u32,
}

impl RowCursor {
    pub fn at(row: u32) -> Self {
        Self { row }
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    /// Return the current row and move to the next one
    pub fn advance(&mut self) -> u32 {
        let row = self.row;
        self.row += 1;
        row
    }

    /// Leave `rows` blank rows
    pub fn skip(&mut self, rows: u32) {
        self.row += rows;
    }
}

/// `更新日: 2025年01月05日`
pub fn format_update_date(date: NaiveDate) -> String {
    format!("更新日: {}", date.format("%Y年%m月%d日"))
}

/// Merged title band across `0..=last_col` of the first row
pub fn title_banner(sheet: &mut Sheet, text: &str, last_col: u16) -> SheetsResult<()> {
    banner(sheet, 0, last_col, text, styles::title(), 30.0)
}

/// Merged single-row band with a fixed height
pub fn banner(
    sheet: &mut Sheet,
    row: u32,
    last_col: u16,
    text: &str,
    style: Style,
    height: f64,
) -> SheetsResult<()> {
    sheet.merge(CellRange::row(row, 0, last_col), text, style)?;
    sheet.set_row_height(row, height);
    Ok(())
}

pub fn update_date_row(sheet: &mut Sheet, row: u32, date: NaiveDate) {
    sheet.set(row, 0, format_update_date(date), styles::update_date());
}

pub fn header_row(sheet: &mut Sheet, row: u32, headers: &[&str]) {
    for (col, header) in headers.iter().enumerate() {
        sheet.set(row, col as u16, *header, styles::column_header());
    }
    sheet.set_row_height(row, 25.0);
}

/// Widths for columns A, B, C, ... in order
pub fn set_column_widths(sheet: &mut Sheet, widths: &[f64]) {
    for (col, width) in widths.iter().enumerate() {
        sheet.set_column_width(col as u16, *width);
    }
}
