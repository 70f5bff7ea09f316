// src/cli.rs
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::time::Duration;

use tracing::debug;

use crate::config::{ScrapeOptions, Source};
use crate::error::Result;
use crate::runner::{self, RunSummary};
use crate::selector::ClassSelector;

pub const HELP: &str = include_str!("cli_help.txt");

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliArgs {
    pub opts: ScrapeOptions,
    pub verbose: u8,
    pub quiet: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run(CliArgs),
    Help,
}

/// Binary entry point: parse `std::env::args`, set up logging, scrape to stdout.
pub fn run() -> Result<Option<RunSummary>> {
    match parse_args(std::env::args().skip(1))? {
        Command::Help => {
            eprintln!("{HELP}");
            Ok(None)
        }
        Command::Run(args) => {
            crate::log::init(crate::log::level_for(args.verbose, args.quiet));
            debug!(opts = ?args.opts, "options");
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            runner::run(&args.opts, &mut out).map(Some)
        }
    }
}

pub fn parse_args<I, S>(argv: I) -> Result<Command>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut opts = ScrapeOptions::default();
    let mut verbose = 0u8;
    let mut quiet = false;

    let mut url: Option<String> = None;
    let mut input: Option<PathBuf> = None;
    let mut select: Option<String> = None;
    let mut classes: Vec<String> = Vec::new();

    let mut args = argv.into_iter().map(Into::<String>::into);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-u" | "--url" => url = Some(value(&mut args, &a)?),
            "-i" | "--input" => input = Some(PathBuf::from(value(&mut args, &a)?)),
            "-s" | "--select" => select = Some(value(&mut args, &a)?),
            "-c" | "--class" => classes.push(value(&mut args, &a)?),
            "--timeout" => opts.net.timeout = secs(&value(&mut args, &a)?, &a)?,
            "--connect-timeout" => opts.net.connect_timeout = secs(&value(&mut args, &a)?, &a)?,
            "--max-redirects" => {
                let v = value(&mut args, &a)?;
                opts.net.max_redirects = match v.parse() {
                    Ok(n) => n,
                    Err(_) => bail_usage!("Invalid value for {a}: {v}"),
                };
            }
            "-v" | "--verbose" => verbose = verbose.saturating_add(1),
            "-vv" => verbose = verbose.saturating_add(2),
            "-vvv" => verbose = verbose.saturating_add(3),
            "-q" | "--quiet" => quiet = true,
            "-h" | "--help" => return Ok(Command::Help),
            _ => bail_usage!("Unknown arg: {a}"),
        }
    }

    opts.source = match (url, input) {
        (Some(_), Some(_)) => bail_usage!("--url and --input are mutually exclusive"),
        (Some(u), None) => Source::Url(u),
        (None, Some(p)) => Source::File(p),
        (None, None) => Source::default(),
    };

    opts.selector = match (select, classes.is_empty()) {
        (Some(_), false) => bail_usage!("--select and --class are mutually exclusive"),
        (Some(css), true) => ClassSelector::parse(&css)?,
        (None, false) => ClassSelector::new(classes)?,
        (None, true) => ClassSelector::default(),
    };

    Ok(Command::Run(CliArgs { opts, verbose, quiet }))
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    match args.next() {
        Some(v) => Ok(v),
        None => bail_usage!("Missing value for {flag}"),
    }
}

fn secs(v: &str, flag: &str) -> Result<Duration> {
    match v.parse::<u64>() {
        Ok(n) if n > 0 => Ok(Duration::from_secs(n)),
        _ => bail_usage!("Invalid value for {flag}: {v} (expected whole seconds > 0)"),
    }
}
