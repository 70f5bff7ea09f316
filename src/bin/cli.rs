// src/bin/cli.rs
use color_eyre::{eyre::Report, Section};
use course_scrape::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = cli::run() {
        let hint = e.hint();
        let report = Report::new(e);
        return Err(match hint {
            Some(h) => report.suggestion(h),
            None => report,
        });
    }
    Ok(())
}
