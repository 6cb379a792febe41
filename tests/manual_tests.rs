//! Manual layout tests

use dx_sheets::builder::manual::{PLACEHOLDER_MARKER, ROWS_PER_STEP, SHEET_NAME};
use dx_sheets::builder::{Manual, ManualStep, Template};
use dx_sheets::core::styles::{self, PLACEHOLDER_FILL, PLACEHOLDER_TEXT};
use dx_sheets::types::{CellRange, Sheet, Workbook};
use pretty_assertions::assert_eq;

fn build() -> Workbook {
    Manual::new().build().unwrap()
}

fn placeholder_rows(sheet: &Sheet) -> Vec<u32> {
    sheet
        .cells()
        .filter(|(_, _, cell)| cell.value.contains(PLACEHOLDER_MARKER))
        .map(|(row, _, _)| row)
        .collect()
}

#[test]
fn test_single_sheet() {
    let wb = build();
    assert_eq!(wb.sheet_names(), vec![SHEET_NAME]);
}

#[test]
fn test_title_banner() {
    let wb = build();
    let sheet = wb.sheet(SHEET_NAME).unwrap();
    let title = sheet.cell(0, 0).unwrap();
    assert_eq!(title.value, "キントーン 不良名マスタ データ登録手順書");
    assert_eq!(title.style, styles::title());
    assert!(sheet.merges().contains(&CellRange::row(0, 0, 3)));
}

#[test]
fn test_exactly_five_step_blocks() {
    let wb = build();
    let sheet = wb.sheet(SHEET_NAME).unwrap();

    let headings: Vec<String> = sheet
        .cells()
        .filter(|(_, _, cell)| cell.value.starts_with("手順"))
        .map(|(_, _, cell)| cell.value.clone())
        .collect();
    assert_eq!(
        headings,
        vec![
            "手順1: エクセルでデータを準備",
            "手順2: キントーンの不良名マスタアプリを開く",
            "手順3: 「ファイルから読み込む」を選択",
            "手順4: エクセルファイルを選択",
            "手順5: 「読み込む」ボタンをクリック",
        ]
    );
}

#[test]
fn test_each_step_followed_by_one_placeholder() {
    let wb = build();
    let sheet = wb.sheet(SHEET_NAME).unwrap();

    let expected: Vec<u32> = (0..5)
        .map(|i| Manual::step_row(i) + ROWS_PER_STEP - 1)
        .collect();
    assert_eq!(placeholder_rows(sheet), expected);

    for (index, row) in expected.into_iter().enumerate() {
        let cell = sheet.cell(row, 0).unwrap();
        assert!(cell
            .value
            .starts_with(&format!("【ここに画像{}を貼り付け】", index + 1)));
        assert_eq!(cell.style.fill, Some(PLACEHOLDER_FILL));
        let font = cell.style.font.as_ref().unwrap();
        assert!(font.italic);
        assert_eq!(font.color, Some(PLACEHOLDER_TEXT));
        assert_eq!(sheet.row_height(row), Some(200.0));
    }
}

#[test]
fn test_block_order_heading_description_caption_placeholder() {
    let wb = build();
    let sheet = wb.sheet(SHEET_NAME).unwrap();

    for index in 0..5 {
        let top = Manual::step_row(index);
        let number = index + 1;
        assert!(sheet.cell(top, 0).unwrap().value.starts_with(&format!("手順{}:", number)));
        assert_eq!(sheet.row_height(top), Some(25.0));
        assert_eq!(sheet.row_height(top + 1), Some(50.0));
        assert!(sheet
            .cell(top + 2, 0)
            .unwrap()
            .value
            .starts_with(&format!("【画像{}】", number)));
        // blank separator row
        assert!(sheet.cell(top + ROWS_PER_STEP, 0).is_none());
    }
}

#[test]
fn test_caption_heights_follow_line_count() {
    let wb = build();
    let sheet = wb.sheet(SHEET_NAME).unwrap();

    assert_eq!(sheet.row_height(Manual::step_row(0) + 2), Some(80.0));
    for index in 1..5 {
        assert_eq!(sheet.row_height(Manual::step_row(index) + 2), Some(60.0));
    }
}

#[test]
fn test_every_block_row_is_merged_across_four_columns() {
    let wb = build();
    let sheet = wb.sheet(SHEET_NAME).unwrap();

    for (row, col, _) in sheet.cells() {
        assert_eq!(col, 0);
        assert!(
            sheet.merges().contains(&CellRange::row(row, 0, 3)),
            "row {} not merged",
            row
        );
    }
    let widths: Vec<f64> = (0..4).filter_map(|c| sheet.column_width(c)).collect();
    assert_eq!(widths, vec![25.0; 4]);
}

#[test]
fn test_completion_banner_closes_sheet() {
    let wb = build();
    let sheet = wb.sheet(SHEET_NAME).unwrap();

    let last = sheet.last_row().unwrap();
    let cell = sheet.cell(last, 0).unwrap();
    assert!(cell.value.starts_with("完了:"));
    assert_eq!(cell.style, styles::completion_banner());
    assert_eq!(sheet.row_height(last), Some(40.0));
    assert!(sheet.cell(last - 1, 0).is_none());
}

#[test]
fn test_custom_steps() {
    let steps = vec![ManualStep::new(
        "ログイン",
        "一行目\n二行目\n三行目",
        "ログイン画面",
        &[],
        "ログイン画面の画面",
    )];
    let wb = Manual::with_steps(steps).build().unwrap();
    let sheet = wb.sheet(SHEET_NAME).unwrap();

    assert_eq!(placeholder_rows(sheet), vec![5]);
    assert_eq!(sheet.row_height(3), Some(75.0));
    assert_eq!(sheet.row_height(4), Some(20.0));
    assert_eq!(sheet.cell(4, 0).unwrap().value, "【画像1】ログイン画面");
}

#[test]
fn test_build_is_deterministic() {
    assert_eq!(build(), build());
}
