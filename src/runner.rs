// src/runner.rs
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::{
    config::{consts::STDIN_PATH, NetOptions, ScrapeOptions, Source},
    core::{net, Document},
    error::{Result, ScrapeError},
    extract, report,
    selector::ClassSelector,
};

/// What one run produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub matched: usize,
    pub lines_written: usize,
}

/// Top-level runner: load → parse → select → report.
/// Nothing is written to `out` unless loading and parsing both succeed.
pub fn run(opts: &ScrapeOptions, out: &mut dyn Write) -> Result<RunSummary> {
    info!("scraping {} for {}", opts.source.describe(), opts.selector);
    let html = load_document(&opts.source, &opts.net)?;
    scrape_html(&html, &opts.selector, out)
}

/// Parse `html` and report every element matching `sel`.
pub fn scrape_html(html: &str, sel: &ClassSelector, out: &mut dyn Write) -> Result<RunSummary> {
    let doc = Document::parse(html)?;
    let matches = extract::select(&doc, sel);
    let lines_written = report::report(&matches, out)?;
    out.flush()?;
    info!("{lines_written} line(s) written");
    Ok(RunSummary { matched: matches.len(), lines_written })
}

/// Fetch the raw document text from its source.
pub fn load_document(source: &Source, net_opts: &NetOptions) -> Result<String> {
    match source {
        Source::Url(url) => net::http_get(url, net_opts),
        Source::File(path) => read_local(path),
    }
}

fn read_local(path: &Path) -> Result<String> {
    let bytes = if path.as_os_str() == STDIN_PATH {
        debug!("reading document from stdin");
        let mut buf = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .map_err(|source| ScrapeError::Input { path: s!("<stdin>"), source })?;
        buf
    } else {
        debug!("reading document from {}", path.display());
        fs::read(path)
            .map_err(|source| ScrapeError::Input { path: path.display().to_string(), source })?
    };
    // Local files carry no charset header; assume UTF-8 like the fetcher does
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
