//! Dashboard aggregates derived from the work item list

use super::status::{Status, WorkItem};
use serde::Serialize;

/// Whole-number percentage, rounded half up. A zero total is 0%.
pub fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((part as f64 * 100.0) / total as f64).round() as u32
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusCount {
    pub status: Status,
    pub count: usize,
    pub percent: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryProgress {
    pub category: String,
    pub completed: usize,
    pub total: usize,
}

impl CategoryProgress {
    /// `"2/3"`
    pub fn fraction(&self) -> String {
        format!("{}/{}", self.completed, self.total)
    }

    pub fn percent(&self) -> u32 {
        percentage(self.completed, self.total)
    }
}

/// Completion breakdown by status and by category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSummary {
    pub total: usize,
    pub by_status: Vec<StatusCount>,
    pub by_category: Vec<CategoryProgress>,
}

impl ProgressSummary {
    pub fn from_items(items: &[WorkItem]) -> Self {
        let total = items.len();

        let by_status = Status::ALL
            .iter()
            .map(|&status| {
                let count = items.iter().filter(|i| i.status == status).count();
                StatusCount {
                    status,
                    count,
                    percent: percentage(count, total),
                }
            })
            .collect();

        let mut by_category: Vec<CategoryProgress> = Vec::new();
        for item in items {
            let index = match by_category.iter().position(|c| c.category == item.category) {
                Some(index) => index,
                None => {
                    by_category.push(CategoryProgress {
                        category: item.category.clone(),
                        completed: 0,
                        total: 0,
                    });
                    by_category.len() - 1
                }
            };
            let entry = &mut by_category[index];
            entry.total += 1;
            if item.status == Status::Completed {
                entry.completed += 1;
            }
        }

        Self {
            total,
            by_status,
            by_category,
        }
    }

    pub fn count(&self, status: Status) -> usize {
        self.by_status
            .iter()
            .find(|s| s.status == status)
            .map(|s| s.count)
            .unwrap_or(0)
    }

    /// Rows shown on the dashboard: primary statuses always, the rest only when used
    pub fn visible_statuses(&self) -> impl Iterator<Item = &StatusCount> {
        self.by_status
            .iter()
            .filter(|s| s.status.is_primary() || s.count > 0)
    }
}
