//! xlsx writer backed by rust_xlsxwriter

use super::WorkbookWriter;
use crate::error::{SheetsError, SheetsResult};
use crate::types::{
    Alignment, BorderStyle, HorizontalAlign, Sheet, Style, VerticalAlign, Workbook,
};
use rust_xlsxwriter::{
    Color, DocProperties, Format, FormatAlign, FormatBorder, FormatPattern, Worksheet, XlsxError,
};
use std::path::Path;
use tracing::debug;

/// Writes the document model as an Office Open XML workbook
#[derive(Debug, Default, Clone, Copy)]
pub struct XlsxWriter;

impl XlsxWriter {
    pub fn new() -> Self {
        Self
    }

    /// Build the rust_xlsxwriter workbook without touching the filesystem
    fn render(&self, workbook: &Workbook) -> SheetsResult<rust_xlsxwriter::Workbook> {
        let mut xlsx = rust_xlsxwriter::Workbook::new();

        if let Some(title) = &workbook.title {
            let properties = DocProperties::new().set_title(title);
            xlsx.set_properties(&properties);
        }

        for sheet in workbook.sheets() {
            let worksheet = xlsx.add_worksheet();
            worksheet
                .set_name(&sheet.name)
                .map_err(|e| SheetsError::Render(format!("Failed to set worksheet name: {}", e)))?;
            Self::render_sheet(worksheet, sheet)?;
        }

        Ok(xlsx)
    }

    fn render_sheet(worksheet: &mut Worksheet, sheet: &Sheet) -> SheetsResult<()> {
        for (col, width) in sheet.column_widths() {
            worksheet
                .set_column_width(col, width)
                .map_err(|e| SheetsError::Render(format!("Failed to set column width: {}", e)))?;
        }

        for (row, height) in sheet.row_heights() {
            worksheet
                .set_row_height(row, height)
                .map_err(|e| SheetsError::Render(format!("Failed to set row height: {}", e)))?;
        }

        for (row, col, cell) in sheet.cells() {
            let format = to_format(&cell.style);

            if let Some(range) = sheet.merge_at(row, col) {
                worksheet
                    .merge_range(
                        range.first_row,
                        range.first_col,
                        range.last_row,
                        range.last_col,
                        &cell.value,
                        &format,
                    )
                    .map_err(|e| SheetsError::Render(format!("Failed to merge {}: {}", range, e)))?;
                continue;
            }

            if sheet.merges().iter().any(|m| m.contains(row, col)) {
                debug!(
                    sheet = %sheet.name,
                    cell = %super::cell_name(row, col),
                    "skipping cell hidden by merged region"
                );
                continue;
            }

            worksheet
                .write_string_with_format(row, col, &cell.value, &format)
                .map_err(|e| SheetsError::Render(format!("Failed to write cell: {}", e)))?;
        }

        Ok(())
    }
}

impl WorkbookWriter for XlsxWriter {
    fn name(&self) -> &'static str {
        "xlsx"
    }

    fn write(&self, workbook: &Workbook, path: &Path) -> SheetsResult<()> {
        let mut xlsx = self.render(workbook)?;

        xlsx.save(path).map_err(|e| match e {
            XlsxError::IoError(source) => SheetsError::Write {
                path: path.to_path_buf(),
                source,
            },
            other => SheetsError::Render(format!("Failed to save Excel file: {}", other)),
        })?;

        debug!(path = %path.display(), sheets = workbook.sheets().len(), "workbook saved");
        Ok(())
    }
}

/// Translate a cell style into a rust_xlsxwriter format
fn to_format(style: &Style) -> Format {
    let mut format = Format::new();

    if let Some(font) = &style.font {
        format = format.set_font_name(&font.name).set_font_size(font.size);
        if font.bold {
            format = format.set_bold();
        }
        if font.italic {
            format = format.set_italic();
        }
        if let Some(color) = font.color {
            format = format.set_font_color(Color::RGB(color.value()));
        }
    }

    if let Some(fill) = style.fill {
        format = format
            .set_pattern(FormatPattern::Solid)
            .set_background_color(Color::RGB(fill.value()));
    }

    if let Some(alignment) = style.alignment {
        format = apply_alignment(format, alignment);
    }

    if let Some(border) = style.border {
        format = format.set_border(match border {
            BorderStyle::Thin => FormatBorder::Thin,
        });
    }

    format
}

fn apply_alignment(format: Format, alignment: Alignment) -> Format {
    let format = format
        .set_align(match alignment.horizontal {
            HorizontalAlign::Left => FormatAlign::Left,
            HorizontalAlign::Center => FormatAlign::Center,
        })
        .set_align(match alignment.vertical {
            VerticalAlign::Top => FormatAlign::Top,
            VerticalAlign::Center => FormatAlign::VerticalCenter,
        });

    if alignment.wrap_text {
        format.set_text_wrap()
    } else {
        format
    }
}
