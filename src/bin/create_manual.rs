//! Writes キントーン_データ登録手順書.xlsx into the current directory.
//!
//! Takes no arguments. Failures are printed and the process still exits 0.
//! Screenshots are pasted into the placeholder cells by hand afterwards.

use dx_sheets::cli::{self, commands, Settings};

fn main() {
    cli::init_tracing(false);

    let settings = Settings::current_dir(commands::today());
    if let Err(e) = cli::manual(&settings, None) {
        cli::report_error(&e);
    }
}
