//! Work items and their status
//!
//! Status is carried as data and only rendered to its marker text
//! (`✅ 完了`) when a sheet is built.

use super::styles;
use crate::types::Rgb;
use serde::Serialize;
use std::fmt;

/// Progress state of a work item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Completed,
    InProgress,
    NotStarted,
    Blocked,
    OnHold,
}

impl Status {
    /// Every status, in marker-precedence and legend order
    pub const ALL: [Status; 5] = [
        Status::Completed,
        Status::InProgress,
        Status::NotStarted,
        Status::Blocked,
        Status::OnHold,
    ];

    pub fn marker(self) -> &'static str {
        match self {
            Status::Completed => "✅",
            Status::InProgress => "🔄",
            Status::NotStarted => "⏳",
            Status::Blocked => "⚠️",
            Status::OnHold => "❌",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Completed => "完了",
            Status::InProgress => "進行中",
            Status::NotStarted => "未着手",
            Status::Blocked => "課題あり",
            Status::OnHold => "保留",
        }
    }

    pub fn fill(self) -> Rgb {
        match self {
            Status::Completed => styles::COMPLETED_FILL,
            Status::InProgress => styles::IN_PROGRESS_FILL,
            Status::NotStarted => styles::NOT_STARTED_FILL,
            Status::Blocked => styles::BLOCKED_FILL,
            Status::OnHold => styles::ON_HOLD_FILL,
        }
    }

    /// Always listed on the dashboard, even with a zero count
    pub fn is_primary(self) -> bool {
        matches!(
            self,
            Status::Completed | Status::InProgress | Status::NotStarted
        )
    }

    /// Recover a status from rendered text such as `"🔄 進行中"`.
    ///
    /// The first status in [`Status::ALL`] whose marker occurs in the text
    /// wins, so `"✅ 🔄"` is completed. Text without a marker yields `None`.
    pub fn from_label(text: &str) -> Option<Status> {
        Status::ALL
            .into_iter()
            .find(|status| text.contains(status.marker()))
    }

    /// `【凡例】✅ 完了 | 🔄 進行中 | ...`
    pub fn legend() -> String {
        let entries: Vec<String> = Status::ALL.iter().map(|s| s.to_string()).collect();
        format!("【凡例】{}", entries.join(" | "))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.marker(), self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "高",
            Priority::Medium => "中",
            Priority::Low => "低",
        }
    }
}

/// One business process being moved onto kintone
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkItem {
    pub process: String,
    pub current_method: String,
    pub target_solution: String,
    pub status: Status,
    pub priority: Priority,
    pub owner: String,
    pub due: String,
    pub notes: String,
    pub category: String,
}

impl WorkItem {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        process: &str,
        current_method: &str,
        target_solution: &str,
        status: Status,
        priority: Priority,
        owner: &str,
        due: &str,
        notes: &str,
        category: &str,
    ) -> Self {
        Self {
            process: process.to_string(),
            current_method: current_method.to_string(),
            target_solution: target_solution.to_string(),
            status,
            priority,
            owner: owner.to_string(),
            due: due.to_string(),
            notes: notes.to_string(),
            category: category.to_string(),
        }
    }

    /// Matrix row values, one per header column
    pub fn row_values(&self) -> [String; 8] {
        [
            self.process.clone(),
            self.current_method.clone(),
            self.target_solution.clone(),
            self.status.to_string(),
            self.priority.label().to_string(),
            self.owner.clone(),
            self.due.clone(),
            self.notes.clone(),
        ]
    }

    /// Built-in rows of the status template
    pub fn samples() -> Vec<WorkItem> {
        vec![
            WorkItem::new(
                "生産日報管理",
                "Excel手入力",
                "生産日報報告書アプリ",
                Status::Completed,
                Priority::High,
                "田中",
                "2025/01",
                "自動集計機能追加",
                "生産管理",
            ),
            WorkItem::new(
                "不良管理",
                "紙媒体",
                "不良名マスタアプリ",
                Status::InProgress,
                Priority::High,
                "佐藤",
                "2025/02",
                "データ移行中",
                "品質管理",
            ),
            WorkItem::new(
                "在庫管理",
                "別システム",
                "在庫管理アプリ",
                Status::NotStarted,
                Priority::Medium,
                "鈴木",
                "2025/03",
                "要件定義中",
                "在庫管理",
            ),
            WorkItem::new(
                "品質検査",
                "手作業記録",
                "品質検査アプリ",
                Status::NotStarted,
                Priority::Medium,
                "山田",
                "2025/04",
                "設計中",
                "品質管理",
            ),
            WorkItem::new(
                "設備管理",
                "紙ベース",
                "設備管理アプリ",
                Status::NotStarted,
                Priority::Low,
                "高橋",
                "2025/05",
                "検討中",
                "生産管理",
            ),
        ]
    }
}

/// A manual process, its replacement, and the measured effect
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Improvement {
    pub workflow: String,
    pub before: String,
    pub after: String,
    pub effect: String,
}

impl Improvement {
    pub fn new(workflow: &str, before: &str, after: &str, effect: &str) -> Self {
        Self {
            workflow: workflow.to_string(),
            before: before.to_string(),
            after: after.to_string(),
            effect: effect.to_string(),
        }
    }

    pub fn row_values(&self) -> [&str; 4] {
        [&self.workflow, &self.before, &self.after, &self.effect]
    }

    pub fn samples() -> Vec<Improvement> {
        vec![
            Improvement::new(
                "データ入力",
                "Excel手入力 → メール送信",
                "キントーンアプリで直接入力",
                "時間短縮: 50%",
            ),
            Improvement::new(
                "承認フロー",
                "紙で回覧 → 押印",
                "ワークフロー機能で自動承認",
                "処理時間: 70%短縮",
            ),
            Improvement::new(
                "データ集計",
                "手動でExcel集計",
                "自動集計・グラフ表示",
                "ミス削減: 90%",
            ),
            Improvement::new(
                "レポート作成",
                "毎月手作業で作成",
                "ダッシュボードで自動生成",
                "作業時間: 80%削減",
            ),
        ]
    }
}
