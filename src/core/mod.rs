pub mod progress;
pub mod status;
pub mod styles;

pub use progress::{percentage, CategoryProgress, ProgressSummary, StatusCount};
pub use status::{Improvement, Priority, Status, WorkItem};
