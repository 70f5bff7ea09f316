// tests/cli_args.rs
use std::path::PathBuf;
use std::time::Duration;

use course_scrape::cli::{parse_args, CliArgs, Command};
use course_scrape::config::{ScrapeOptions, Source};
use course_scrape::selector::ClassSelector;
use course_scrape::ScrapeError;

fn run_args(argv: &[&str]) -> CliArgs {
    match parse_args(argv.iter().copied()).unwrap() {
        Command::Run(a) => a,
        Command::Help => panic!("unexpected help"),
    }
}

fn usage_err(argv: &[&str]) -> bool {
    matches!(parse_args(argv.iter().copied()), Err(ScrapeError::Usage(_)))
}

#[test]
fn no_args_is_reference_behavior() {
    let a = run_args(&[]);
    assert_eq!(a.opts, ScrapeOptions::default());
    assert_eq!(a.opts.source, Source::Url("https://flatironschool.com/".into()));
    assert_eq!(a.verbose, 0);
    assert!(!a.quiet);
}

#[test]
fn source_and_selector_flags() {
    let a = run_args(&["--url", "http://example.test/", "--select", ".card.featured"]);
    assert_eq!(a.opts.source, Source::Url("http://example.test/".into()));
    assert_eq!(a.opts.selector.tokens(), ["card", "featured"]);

    let a = run_args(&["-i", "page.html", "-c", "x", "-c", "y"]);
    assert_eq!(a.opts.source, Source::File(PathBuf::from("page.html")));
    assert_eq!(a.opts.selector, ClassSelector::new(["x", "y"]).unwrap());
}

#[test]
fn net_flags() {
    let a = run_args(&["--timeout", "5", "--connect-timeout", "2", "--max-redirects", "0"]);
    assert_eq!(a.opts.net.timeout, Duration::from_secs(5));
    assert_eq!(a.opts.net.connect_timeout, Duration::from_secs(2));
    assert_eq!(a.opts.net.max_redirects, 0);
}

#[test]
fn verbosity_flags() {
    assert_eq!(run_args(&["-v", "-v"]).verbose, 2);
    assert_eq!(run_args(&["-vvv"]).verbose, 3);
    assert!(run_args(&["-q"]).quiet);
}

#[test]
fn help_short_circuits() {
    assert_eq!(parse_args(["-h", "--bogus-later"].iter().copied()).unwrap(), Command::Help);
    assert!(usage_err(&["--bogus-earlier", "-h"]));
}

#[test]
fn usage_errors() {
    assert!(usage_err(&["--frobnicate"]));
    assert!(usage_err(&["--url"]));
    assert!(usage_err(&["--timeout", "0"]));
    assert!(usage_err(&["--timeout", "soon"]));
    assert!(usage_err(&["--max-redirects", "-1"]));
    assert!(usage_err(&["--url", "http://a/", "--input", "b.html"]));
    assert!(usage_err(&["--select", ".a", "--class", "b"]));
}

#[test]
fn bad_selector_is_a_selector_error() {
    assert!(matches!(
        parse_args(["--select", "div.a"].iter().copied()),
        Err(ScrapeError::Selector { .. })
    ));
    assert!(matches!(
        parse_args(["--class", ""].iter().copied()),
        Err(ScrapeError::Selector { .. })
    ));
}
