//! Step-by-step kintone data import manual with screenshot placeholders

use super::{banner, set_column_widths, title_banner, RowCursor, Template};
use crate::core::styles;
use crate::error::SheetsResult;
use crate::types::{Sheet, Workbook};
use tracing::debug;

pub const FILE_NAME: &str = "キントーン_データ登録手順書.xlsx";
pub const SHEET_NAME: &str = "データ登録手順";

/// Every placeholder cell contains this text
pub const PLACEHOLDER_MARKER: &str = "を貼り付け】";

const TITLE: &str = "キントーン 不良名マスタ データ登録手順書";
const COMPLETION: &str =
    "完了: データが正常に登録されると、不良名マスタアプリにデータが表示されます。";

const LAST_COL: u16 = 3;
const COLUMN_WIDTHS: [f64; 4] = [25.0; 4];

const HEADING_HEIGHT: f64 = 25.0;
const DESCRIPTION_LINE_HEIGHT: f64 = 25.0;
const CAPTION_LINE_HEIGHT: f64 = 20.0;
const PLACEHOLDER_HEIGHT: f64 = 200.0;
const COMPLETION_HEIGHT: f64 = 40.0;

/// Rows occupied by one step: heading, description, caption, placeholder
pub const ROWS_PER_STEP: u32 = 4;

/// One numbered step of the procedure
#[derive(Debug, Clone, PartialEq)]
pub struct ManualStep {
    pub title: String,
    pub description: String,
    pub caption: String,
    pub caption_points: Vec<String>,
    pub screenshot: String,
}

impl ManualStep {
    pub fn new(
        title: &str,
        description: &str,
        caption: &str,
        caption_points: &[&str],
        screenshot: &str,
    ) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            caption: caption.to_string(),
            caption_points: caption_points.iter().map(|p| p.to_string()).collect(),
            screenshot: screenshot.to_string(),
        }
    }

    pub fn heading(&self, number: usize) -> String {
        format!("手順{}: {}", number, self.title)
    }

    /// `【画像N】caption` followed by one `・point` line per point
    pub fn caption_text(&self, number: usize) -> String {
        let mut text = format!("【画像{}】{}", number, self.caption);
        for point in &self.caption_points {
            text.push_str("\n・");
            text.push_str(point);
        }
        text
    }

    pub fn placeholder_text(&self, number: usize) -> String {
        format!("【ここに画像{}{}\n{}", number, PLACEHOLDER_MARKER, self.screenshot)
    }

    fn description_height(&self) -> f64 {
        DESCRIPTION_LINE_HEIGHT * line_count(&self.description) as f64
    }

    fn caption_height(&self) -> f64 {
        CAPTION_LINE_HEIGHT * (1 + self.caption_points.len()) as f64
    }

    /// The five-step import procedure for the 不良名マスタ app
    pub fn defaults() -> Vec<ManualStep> {
        vec![
            ManualStep::new(
                "エクセルでデータを準備",
                "エクセルファイルに「ライン名」と「不良名」の2列を作成し、データを入力します。\nデータは末尾の空行に追加してください。",
                "エクセルでのデータ準備例",
                &[
                    "列A: ライン名（例: A38, A35, A33, A06, A01など）",
                    "列B: 不良名（例: Time NG, 逆, シルク欠けなど）",
                    "データは末尾の空行（57行目以降）に追加",
                ],
                "エクセルスプレッドシートの画面（44-56行目にデータ、57-59行目が空行）",
            ),
            ManualStep::new(
                "キントーンの不良名マスタアプリを開く",
                "キントーンの「不良名マスタ」アプリを開きます。\nアプリが空の状態（データが表示されていない状態）から開始します。",
                "不良名マスタアプリ（データなし）",
                &[
                    "アプリタイトル: 不良名マスタ",
                    "テーブルに「データがありません。」と表示されている状態",
                ],
                "キントーン不良名マスタアプリの画面（データなし）",
            ),
            ManualStep::new(
                "「ファイルから読み込む」を選択",
                "画面右上の「...」（三点リーダー）ボタンをクリックし、\nメニューから「ファイルから読み込む」を選択します。",
                "メニューから「ファイルから読み込む」を選択",
                &[
                    "右上の「...」ボタンをクリック",
                    "メニューが開いたら「ファイルから読み込む」を選択",
                ],
                "メニューが開いた状態（「ファイルから読み込む」が選択可能）",
            ),
            ManualStep::new(
                "エクセルファイルを選択",
                "ファイル選択ダイアログが開いたら、\n手順1で作成したエクセルファイル（.xlsxまたは.csv）を選択します。",
                "ファイル選択ダイアログ",
                &[
                    "ファイル一覧からエクセルファイルを選択",
                    "対応形式: .xlsx, .csv, .txt",
                ],
                "ファイル選択ダイアログの画面",
            ),
            ManualStep::new(
                "「読み込む」ボタンをクリック",
                "ファイルを選択したら、「読み込む」ボタンをクリックします。\nデータがキントーンに登録されます。",
                "読み込み画面",
                &[
                    "「キャンセル」ボタン: 読み込みを中止",
                    "「読み込む」ボタン: データを読み込んで登録",
                ],
                "読み込み画面（キャンセルと読み込むボタン）",
            ),
        ]
    }
}

fn line_count(text: &str) -> usize {
    text.lines().count().max(1)
}

/// Single-sheet instruction workbook
#[derive(Debug, Clone)]
pub struct Manual {
    steps: Vec<ManualStep>,
}

impl Manual {
    pub fn new() -> Self {
        Self::with_steps(ManualStep::defaults())
    }

    pub fn with_steps(steps: Vec<ManualStep>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[ManualStep] {
        &self.steps
    }

    /// Zero-based row of step `index`'s heading
    pub fn step_row(index: usize) -> u32 {
        2 + index as u32 * (ROWS_PER_STEP + 1)
    }

    fn build_step(
        sheet: &mut Sheet,
        cursor: &mut RowCursor,
        number: usize,
        step: &ManualStep,
    ) -> SheetsResult<()> {
        banner(
            sheet,
            cursor.advance(),
            LAST_COL,
            &step.heading(number),
            styles::heading_band(14.0),
            HEADING_HEIGHT,
        )?;
        banner(
            sheet,
            cursor.advance(),
            LAST_COL,
            &step.description,
            styles::paragraph(11.0),
            step.description_height(),
        )?;
        banner(
            sheet,
            cursor.advance(),
            LAST_COL,
            &step.caption_text(number),
            styles::paragraph(11.0),
            step.caption_height(),
        )?;
        banner(
            sheet,
            cursor.advance(),
            LAST_COL,
            &step.placeholder_text(number),
            styles::image_placeholder(),
            PLACEHOLDER_HEIGHT,
        )?;
        cursor.skip(1);
        Ok(())
    }
}

impl Default for Manual {
    fn default() -> Self {
        Self::new()
    }
}

impl Template for Manual {
    fn file_name(&self) -> &str {
        FILE_NAME
    }

    fn headline(&self) -> &str {
        "手順書を作成しました"
    }

    fn notes(&self) -> Vec<String> {
        vec![
            String::new(),
            "注意: 画像は手動で貼り付けてください。".to_string(),
            "各手順の【ここに画像Xを貼り付け】のセルに、対応する画像を貼り付けてください。"
                .to_string(),
        ]
    }

    fn build(&self) -> SheetsResult<Workbook> {
        let mut workbook = Workbook::new().with_title(TITLE);
        let sheet = workbook.add_sheet(SHEET_NAME)?;

        title_banner(sheet, TITLE, LAST_COL)?;

        let mut cursor = RowCursor::at(2);
        for (index, step) in self.steps.iter().enumerate() {
            Self::build_step(sheet, &mut cursor, index + 1, step)?;
        }

        banner(
            sheet,
            cursor.advance(),
            LAST_COL,
            COMPLETION,
            styles::completion_banner(),
            COMPLETION_HEIGHT,
        )?;

        set_column_widths(sheet, &COLUMN_WIDTHS);

        debug!(steps = self.steps.len(), "manual sheet laid out");
        Ok(workbook)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_have_five_steps() {
        assert_eq!(ManualStep::defaults().len(), 5);
    }

    #[test]
    fn test_step_texts() {
        let step = &ManualStep::defaults()[2];
        assert_eq!(step.heading(3), "手順3: 「ファイルから読み込む」を選択");
        assert_eq!(
            step.caption_text(3),
            "【画像3】メニューから「ファイルから読み込む」を選択\n・右上の「...」ボタンをクリック\n・メニューが開いたら「ファイルから読み込む」を選択"
        );
        assert!(step
            .placeholder_text(3)
            .starts_with("【ここに画像3を貼り付け】\n"));
    }

    #[test]
    fn test_heights_scale_with_lines() {
        let steps = ManualStep::defaults();
        assert_eq!(steps[0].caption_height(), 80.0);
        assert_eq!(steps[1].caption_height(), 60.0);
        assert_eq!(steps[0].description_height(), 50.0);
    }

    #[test]
    fn test_layout_rows() {
        let wb = Manual::new().build().unwrap();
        let sheet = wb.sheet(SHEET_NAME).unwrap();

        assert_eq!(Manual::step_row(0), 2);
        assert_eq!(Manual::step_row(1), 7);
        assert_eq!(
            sheet.cell(Manual::step_row(1), 0).unwrap().value,
            "手順2: キントーンの不良名マスタアプリを開く"
        );
        assert_eq!(sheet.row_height(Manual::step_row(4) + 3), Some(200.0));

        // completion banner after one blank row
        let completion_row = Manual::step_row(5);
        assert_eq!(sheet.cell(completion_row, 0).unwrap().value, COMPLETION);
        assert_eq!(sheet.row_height(completion_row), Some(40.0));
        assert_eq!(sheet.last_row(), Some(completion_row));
    }

    #[test]
    fn test_empty_manual_still_has_title_and_completion() {
        let wb = Manual::with_steps(Vec::new()).build().unwrap();
        let sheet = wb.sheet(SHEET_NAME).unwrap();
        assert_eq!(sheet.cell(0, 0).unwrap().value, TITLE);
        assert_eq!(sheet.cell(2, 0).unwrap().value, COMPLETION);
    }
}
