use crate::error::{SheetsError, SheetsResult};
use std::collections::BTreeMap;
use std::fmt;

//==============================================================================
// Style Types
//==============================================================================

/// 24-bit RGB color (0xRRGGBB)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u32);

impl Rgb {
    pub const WHITE: Rgb = Rgb(0xFFFFFF);

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

/// Font settings for a cell
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub name: String,
    pub size: f64,
    pub bold: bool,
    pub italic: bool,
    pub color: Option<Rgb>,
}

impl Font {
    pub fn new(name: &str, size: f64) -> Self {
        Self {
            name: name.to_string(),
            size,
            bold: false,
            italic: false,
            color: None,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alignment {
    pub horizontal: HorizontalAlign,
    pub vertical: VerticalAlign,
    pub wrap_text: bool,
}

/// Border drawn on all four sides of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
    Thin,
}

/// Complete, explicit style of a single cell. There is no inheritance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub font: Option<Font>,
    pub fill: Option<Rgb>,
    pub alignment: Option<Alignment>,
    pub border: Option<BorderStyle>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    pub fn with_fill(mut self, fill: Rgb) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn with_border(mut self, border: BorderStyle) -> Self {
        self.border = Some(border);
        self
    }
}

//==============================================================================
// Grid Types
//==============================================================================

/// A single cell: one string value plus its style
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub value: String,
    pub style: Style,
}

/// Inclusive rectangular block of cells (zero-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub first_row: u32,
    pub first_col: u16,
    pub last_row: u32,
    pub last_col: u16,
}

impl CellRange {
    pub fn new(first_row: u32, first_col: u16, last_row: u32, last_col: u16) -> Self {
        Self {
            first_row,
            first_col,
            last_row,
            last_col,
        }
    }

    /// Single-row range spanning `first_col..=last_col`
    pub fn row(row: u32, first_col: u16, last_col: u16) -> Self {
        Self::new(row, first_col, row, last_col)
    }

    pub fn contains(&self, row: u32, col: u16) -> bool {
        (self.first_row..=self.last_row).contains(&row)
            && (self.first_col..=self.last_col).contains(&col)
    }

    pub fn overlaps(&self, other: &CellRange) -> bool {
        self.first_row <= other.last_row
            && other.first_row <= self.last_row
            && self.first_col <= other.last_col
            && other.first_col <= self.last_col
    }

    fn is_ordered(&self) -> bool {
        self.first_row <= self.last_row && self.first_col <= self.last_col
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}",
            crate::excel::cell_name(self.first_row, self.first_col),
            crate::excel::cell_name(self.last_row, self.last_col)
        )
    }
}

/// Named 2-D grid of cells with merged regions and row/column sizing
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    cells: BTreeMap<(u32, u16), Cell>,
    merges: Vec<CellRange>,
    row_heights: BTreeMap<u32, f64>,
    column_widths: BTreeMap<u16, f64>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> SheetsResult<Self> {
        let name = name.into();
        validate_sheet_name(&name)?;
        Ok(Self {
            name,
            cells: BTreeMap::new(),
            merges: Vec::new(),
            row_heights: BTreeMap::new(),
            column_widths: BTreeMap::new(),
        })
    }

    /// Set a cell's value and style, replacing whatever was there
    pub fn set(&mut self, row: u32, col: u16, value: impl Into<String>, style: Style) {
        self.cells.insert(
            (row, col),
            Cell {
                value: value.into(),
                style,
            },
        );
    }

    /// Merge `range` and put `value`/`style` in its anchor (top-left) cell
    pub fn merge(
        &mut self,
        range: CellRange,
        value: impl Into<String>,
        style: Style,
    ) -> SheetsResult<()> {
        if !range.is_ordered() {
            return Err(SheetsError::Layout(format!(
                "Merge range {} in '{}' is inverted",
                range, self.name
            )));
        }
        if range.first_row == range.last_row && range.first_col == range.last_col {
            return Err(SheetsError::Layout(format!(
                "Merge range {} in '{}' covers a single cell",
                range, self.name
            )));
        }
        if let Some(existing) = self.merges.iter().find(|m| m.overlaps(&range)) {
            return Err(SheetsError::Layout(format!(
                "Merge range {} overlaps {} in '{}'",
                range, existing, self.name
            )));
        }
        self.merges.push(range);
        self.set(range.first_row, range.first_col, value, style);
        Ok(())
    }

    pub fn set_row_height(&mut self, row: u32, height: f64) {
        self.row_heights.insert(row, height);
    }

    pub fn set_column_width(&mut self, col: u16, width: f64) {
        self.column_widths.insert(col, width);
    }

    pub fn cell(&self, row: u32, col: u16) -> Option<&Cell> {
        self.cells.get(&(row, col))
    }

    /// Cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (u32, u16, &Cell)> {
        self.cells.iter().map(|(&(row, col), cell)| (row, col, cell))
    }

    pub fn merges(&self) -> &[CellRange] {
        &self.merges
    }

    /// Merged region whose anchor is at `(row, col)`
    pub fn merge_at(&self, row: u32, col: u16) -> Option<&CellRange> {
        self.merges
            .iter()
            .find(|m| m.first_row == row && m.first_col == col)
    }

    pub fn row_height(&self, row: u32) -> Option<f64> {
        self.row_heights.get(&row).copied()
    }

    pub fn row_heights(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.row_heights.iter().map(|(&row, &height)| (row, height))
    }

    pub fn column_width(&self, col: u16) -> Option<f64> {
        self.column_widths.get(&col).copied()
    }

    pub fn column_widths(&self) -> impl Iterator<Item = (u16, f64)> + '_ {
        self.column_widths.iter().map(|(&col, &width)| (col, width))
    }

    /// Highest used row index, if the sheet has any cells
    pub fn last_row(&self) -> Option<u32> {
        self.cells.keys().map(|&(row, _)| row).max()
    }
}

/// Excel's sheet naming rules
fn validate_sheet_name(name: &str) -> SheetsResult<()> {
    let len = name.chars().count();
    if len == 0 || len > 31 {
        return Err(SheetsError::Layout(format!(
            "Sheet name '{}' must be 1-31 characters",
            name
        )));
    }
    if let Some(c) = name.chars().find(|c| "[]:*?/\\".contains(*c)) {
        return Err(SheetsError::Layout(format!(
            "Sheet name '{}' contains invalid character '{}'",
            name, c
        )));
    }
    if name.starts_with('\'') || name.ends_with('\'') {
        return Err(SheetsError::Layout(format!(
            "Sheet name '{}' cannot start or end with an apostrophe",
            name
        )));
    }
    Ok(())
}

//==============================================================================
// Workbook
//==============================================================================

/// Ordered collection of uniquely named sheets
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    pub title: Option<String>,
    sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Append a new sheet; tab order follows insertion order
    pub fn add_sheet(&mut self, name: &str) -> SheetsResult<&mut Sheet> {
        if self.sheet(name).is_some() {
            return Err(SheetsError::Layout(format!(
                "Duplicate sheet name '{}'",
                name
            )));
        }
        self.sheets.push(Sheet::new(name)?);
        let index = self.sheets.len() - 1;
        Ok(&mut self.sheets[index])
    }

    /// Look up a sheet by name (case-insensitive, like Excel)
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        let wanted = name.to_lowercase();
        self.sheets.iter().find(|s| s.name.to_lowercase() == wanted)
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|s| s.name.clone()).collect()
    }
}
