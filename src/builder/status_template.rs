//! DX status-tracking workbook: matrix, dashboard, before/after

use super::{
    banner, header_row, set_column_widths, title_banner, update_date_row, RowCursor, Template,
};
use crate::core::styles::{self, CENTER, LEFT_TOP};
use crate::core::{Improvement, ProgressSummary, Status, WorkItem};
use crate::error::SheetsResult;
use crate::types::{CellRange, Sheet, Style, Workbook};
use chrono::NaiveDate;
use tracing::debug;

pub const FILE_NAME: &str = "DX化対応状況管理テンプレート.xlsx";

pub const MATRIX_SHEET: &str = "マトリクス比較表";
pub const DASHBOARD_SHEET: &str = "進捗ダッシュボード";
pub const BEFORE_AFTER_SHEET: &str = "Before_After比較";

pub const MATRIX_HEADERS: [&str; 8] = [
    "業務プロセス",
    "現状の方法",
    "キントーン対応方法",
    "対応状況",
    "優先度",
    "担当者",
    "完了予定",
    "備考",
];

/// Column of the matrix holding the status text
pub const STATUS_COLUMN: u16 = 3;

const MATRIX_WIDTHS: [f64; 8] = [20.0, 25.0, 25.0, 15.0, 10.0, 12.0, 15.0, 30.0];

/// Free-text matrix columns are left aligned, short ones centered
const MATRIX_LEFT_COLUMNS: [u16; 4] = [0, 1, 2, 7];

pub const BEFORE_AFTER_HEADERS: [&str; 4] =
    ["業務フロー", "Before（現状）", "After（キントーン）", "改善効果"];

const BEFORE_AFTER_WIDTHS: [f64; 4] = [20.0, 35.0, 35.0, 25.0];

const DASHBOARD_WIDTHS: [f64; 4] = [20.0, 15.0, 15.0, 15.0];

/// Header row of the matrix and before/after tables
const HEADER_ROW: u32 = 2;

/// Three-sheet status workbook built from one list of work items
#[derive(Debug, Clone)]
pub struct StatusTemplate {
    items: Vec<WorkItem>,
    improvements: Vec<Improvement>,
    updated: NaiveDate,
}

impl StatusTemplate {
    /// Template with the built-in sample rows
    pub fn new(updated: NaiveDate) -> Self {
        Self::with_items(WorkItem::samples(), Improvement::samples(), updated)
    }

    pub fn with_items(
        items: Vec<WorkItem>,
        improvements: Vec<Improvement>,
        updated: NaiveDate,
    ) -> Self {
        Self {
            items,
            improvements,
            updated,
        }
    }

    pub fn items(&self) -> &[WorkItem] {
        &self.items
    }

    pub fn progress(&self) -> ProgressSummary {
        ProgressSummary::from_items(&self.items)
    }

    fn build_matrix(&self, sheet: &mut Sheet) -> SheetsResult<()> {
        let last_col = (MATRIX_HEADERS.len() - 1) as u16;
        title_banner(sheet, "DX化対応状況 - マトリクス比較表", last_col)?;
        update_date_row(sheet, 1, self.updated);
        header_row(sheet, HEADER_ROW, &MATRIX_HEADERS);

        let mut cursor = RowCursor::at(HEADER_ROW + 1);
        for item in &self.items {
            let row = cursor.advance();
            for (col, value) in item.row_values().into_iter().enumerate() {
                let col = col as u16;
                let alignment = if MATRIX_LEFT_COLUMNS.contains(&col) {
                    LEFT_TOP
                } else {
                    CENTER
                };
                let mut style = styles::table_cell(alignment);
                if col == STATUS_COLUMN {
                    if let Some(status) = Status::from_label(&value) {
                        style = style.with_fill(status.fill());
                    }
                }
                sheet.set(row, col, value, style);
            }
            sheet.set_row_height(row, 30.0);
        }

        set_column_widths(sheet, &MATRIX_WIDTHS);

        cursor.skip(1);
        sheet.merge(
            CellRange::row(cursor.row(), 0, last_col),
            Status::legend(),
            styles::legend(),
        )?;

        debug!(rows = self.items.len(), "matrix sheet laid out");
        Ok(())
    }

    fn build_dashboard(&self, sheet: &mut Sheet) -> SheetsResult<()> {
        let last_col = (DASHBOARD_WIDTHS.len() - 1) as u16;
        let progress = self.progress();

        title_banner(sheet, "DX化進捗状況ダッシュボード", last_col)?;
        update_date_row(sheet, 1, self.updated);

        let mut cursor = RowCursor::at(3);
        banner(
            sheet,
            cursor.advance(),
            last_col,
            "【全体進捗】",
            styles::heading_band(12.0),
            25.0,
        )?;

        for entry in progress.visible_statuses() {
            let row = cursor.advance();
            // default font; only the count cell is coloured
            sheet.set(row, 0, entry.status.label(), Style::new());
            sheet.set(
                row,
                1,
                format!("{}件", entry.count),
                Style::new().with_fill(entry.status.fill()),
            );
            sheet.set(row, 2, format!("{}%", entry.percent), Style::new());
        }

        cursor.skip(1);
        banner(
            sheet,
            cursor.advance(),
            last_col,
            "【カテゴリ別進捗】",
            styles::heading_band(12.0),
            25.0,
        )?;

        for category in &progress.by_category {
            let row = cursor.advance();
            sheet.set(row, 0, category.category.as_str(), styles::body(10.0));
            sheet.set(row, 1, category.fraction(), styles::body(10.0));
            sheet.set(row, 2, format!("{}%", category.percent()), styles::body(10.0));
        }

        set_column_widths(sheet, &DASHBOARD_WIDTHS);

        debug!(
            total = progress.total,
            completed = progress.count(Status::Completed),
            categories = progress.by_category.len(),
            "dashboard sheet laid out"
        );
        Ok(())
    }

    fn build_before_after(&self, sheet: &mut Sheet) -> SheetsResult<()> {
        let last_col = (BEFORE_AFTER_HEADERS.len() - 1) as u16;
        title_banner(sheet, "Before/After比較表", last_col)?;
        header_row(sheet, HEADER_ROW, &BEFORE_AFTER_HEADERS);

        let mut cursor = RowCursor::at(HEADER_ROW + 1);
        for improvement in &self.improvements {
            let row = cursor.advance();
            for (col, value) in improvement.row_values().into_iter().enumerate() {
                sheet.set(row, col as u16, value, styles::table_cell(LEFT_TOP));
            }
            sheet.set_row_height(row, 40.0);
        }

        set_column_widths(sheet, &BEFORE_AFTER_WIDTHS);
        Ok(())
    }
}

impl Template for StatusTemplate {
    fn file_name(&self) -> &str {
        FILE_NAME
    }

    fn headline(&self) -> &str {
        "DX化対応状況管理テンプレートを作成しました"
    }

    fn notes(&self) -> Vec<String> {
        vec![
            String::new(),
            "含まれるシート:".to_string(),
            format!("1. {} - 詳細な対応状況を管理", MATRIX_SHEET),
            format!("2. {} - 全体の進捗を可視化", DASHBOARD_SHEET),
            format!("3. {} - 改善効果を明確化", BEFORE_AFTER_SHEET),
        ]
    }

    fn build(&self) -> SheetsResult<Workbook> {
        let mut workbook = Workbook::new().with_title("DX化対応状況管理テンプレート");

        self.build_matrix(workbook.add_sheet(MATRIX_SHEET)?)?;
        self.build_dashboard(workbook.add_sheet(DASHBOARD_SHEET)?)?;
        self.build_before_after(workbook.add_sheet(BEFORE_AFTER_SHEET)?)?;

        Ok(workbook)
    }
}
