use clap::{Parser, Subcommand};
use dx_sheets::cli::{self, commands, Settings};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dx-sheets")]
#[command(about = "Generate the DX status workbook and the kintone data import manual (.xlsx)")]
#[command(long_about = "dx-sheets - styled .xlsx generators

COMMANDS:
  status-template - DX化対応状況管理テンプレート.xlsx (matrix, dashboard, before/after)
  manual          - キントーン_データ登録手順書.xlsx (five steps with image placeholders)
  all             - both files

Existing files are overwritten without asking. Screenshots are pasted into
the manual by hand after generation.

EXAMPLES:
  dx-sheets all
  dx-sheets --output-dir out status-template
  dx-sheets --date 2025-01-15 manual -o manual.xlsx
  dx-sheets --json all")]
#[command(version)]
struct Cli {
    /// Directory the workbooks are written to
    #[arg(short = 'd', long, global = true, default_value = ".", env = "DX_SHEETS_OUTPUT_DIR")]
    output_dir: PathBuf,

    /// Update date embedded in the sheets (YYYY-MM-DD, default: today)
    #[arg(long, global = true, env = "DX_SHEETS_DATE")]
    date: Option<String>,

    /// Print a JSON report per file instead of the summary
    #[arg(long, global = true)]
    json: bool,

    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the three-sheet DX status template
    StatusTemplate {
        /// Output file (default: DX化対応状況管理テンプレート.xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Create the data import manual
    Manual {
        /// Output file (default: キントーン_データ登録手順書.xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Create both workbooks
    All,
}

fn run(cli: Cli) -> dx_sheets::SheetsResult<()> {
    let date = match cli.date.as_deref() {
        Some(value) => commands::parse_date(value)?,
        None => commands::today(),
    };
    let settings = Settings {
        output_dir: cli.output_dir,
        date,
        json: cli.json,
    };

    match cli.command {
        Commands::StatusTemplate { output } => cli::status_template(&settings, output).map(|_| ()),
        Commands::Manual { output } => cli::manual(&settings, output).map(|_| ()),
        Commands::All => cli::all(&settings).map(|_| ()),
    }
}

fn main() {
    let cli = Cli::parse();
    cli::init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        cli::report_error(&e);
        std::process::exit(e.exit_code());
    }
}
