use crate::builder::{Manual, StatusTemplate, Template};
use crate::core::ProgressSummary;
use crate::error::{SheetsError, SheetsResult};
use crate::excel::{default_writer, WorkbookWriter};
use chrono::NaiveDate;
use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Options shared by every generate command
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory relative output names are resolved against
    pub output_dir: PathBuf,
    /// Date embedded as `更新日`
    pub date: NaiveDate,
    /// Print reports as JSON lines instead of the human summary
    pub json: bool,
}

impl Settings {
    /// Current directory, today's date, human output
    pub fn current_dir(date: NaiveDate) -> Self {
        Self {
            output_dir: PathBuf::from("."),
            date,
            json: false,
        }
    }
}

/// Outcome of one successful generation
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub file: String,
    pub path: PathBuf,
    pub sheets: Vec<String>,
    pub updated: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<ProgressSummary>,
}

/// Local date used when `--date` is not given
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` date override
pub fn parse_date(value: &str) -> SheetsResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| SheetsError::InvalidDate {
        value: value.to_string(),
    })
}

/// Resolve where a template is written
///
/// An explicit `output` wins (joined onto `output_dir` when relative);
/// otherwise the template's own file name goes into `output_dir`.
pub fn output_path(output_dir: &Path, output: Option<&Path>, default_name: &str) -> PathBuf {
    match output {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => output_dir.join(path),
        None => output_dir.join(default_name),
    }
}

/// Build `template` and write it with `writer`
///
/// The writer's availability is checked first, so a missing backend never
/// leaves a file behind. An existing file at `path` is replaced.
pub fn generate(
    template: &dyn Template,
    writer: &dyn WorkbookWriter,
    path: &Path,
    updated: NaiveDate,
) -> SheetsResult<GenerationReport> {
    writer.ensure_available()?;

    let workbook = template.build()?;
    debug!(
        file = template.file_name(),
        sheets = workbook.sheets().len(),
        "workbook built"
    );

    if path.exists() {
        debug!(path = %path.display(), "overwriting existing file");
    }
    writer.write(&workbook, path)?;
    info!(path = %path.display(), writer = writer.name(), "workbook written");

    Ok(GenerationReport {
        file: template.file_name().to_string(),
        path: path.to_path_buf(),
        sheets: workbook.sheet_names(),
        updated,
        progress: None,
    })
}

/// Execute the status-template command
pub fn status_template(
    settings: &Settings,
    output: Option<PathBuf>,
) -> SheetsResult<GenerationReport> {
    status_template_with(settings, output, default_writer().as_ref())
}

pub fn status_template_with(
    settings: &Settings,
    output: Option<PathBuf>,
    writer: &dyn WorkbookWriter,
) -> SheetsResult<GenerationReport> {
    let template = StatusTemplate::new(settings.date);
    let path = output_path(
        &settings.output_dir,
        output.as_deref(),
        template.file_name(),
    );

    let mut report = generate(&template, writer, &path, settings.date)?;
    report.progress = Some(template.progress());

    print_report(&template, &report, settings.json)?;
    Ok(report)
}

/// Execute the manual command
pub fn manual(settings: &Settings, output: Option<PathBuf>) -> SheetsResult<GenerationReport> {
    manual_with(settings, output, default_writer().as_ref())
}

pub fn manual_with(
    settings: &Settings,
    output: Option<PathBuf>,
    writer: &dyn WorkbookWriter,
) -> SheetsResult<GenerationReport> {
    let template = Manual::new();
    let path = output_path(
        &settings.output_dir,
        output.as_deref(),
        template.file_name(),
    );

    let report = generate(&template, writer, &path, settings.date)?;

    print_report(&template, &report, settings.json)?;
    Ok(report)
}

/// Execute the all command: status template, then manual
pub fn all(settings: &Settings) -> SheetsResult<Vec<GenerationReport>> {
    let writer = default_writer();
    Ok(vec![
        status_template_with(settings, None, writer.as_ref())?,
        manual_with(settings, None, writer.as_ref())?,
    ])
}

fn print_report(
    template: &dyn Template,
    report: &GenerationReport,
    json: bool,
) -> SheetsResult<()> {
    if json {
        println!("{}", serde_json::to_string(report)?);
        return Ok(());
    }

    println!(
        "{}: {}",
        template.headline().bold().green(),
        report.path.display()
    );
    for line in template.notes() {
        println!("{}", line);
    }
    Ok(())
}

/// Print a failure the way the generators report it
pub fn report_error(error: &SheetsError) {
    println!("{}", error.user_message().red());
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
