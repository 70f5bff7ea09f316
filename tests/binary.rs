// tests/binary.rs
//
// End-to-end through the built binary: stdout, stderr, exit status.
//
use std::io::Write;
use std::net::TcpListener;
use std::process::{Command, Output, Stdio};

fn bin(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_course_scrape"))
        .args(args)
        .output()
        .expect("spawn course_scrape")
}

fn bin_with_stdin(args: &[&str], input: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_course_scrape"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn course_scrape");
    let mut stdin = child.stdin.take().expect("piped stdin");
    stdin.write_all(input).expect("write stdin");
    drop(stdin);
    child.wait_with_output().expect("wait course_scrape")
}

fn fixture() -> String {
    format!("{}/tests/fixtures/courses.html", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn fixture_lines_on_stdout() {
    let out = bin(&["--input", &fixture()]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "Software Engineering\nData Science\nCybersecurity\nProduct Design\n"
    );
}

#[test]
fn fixture_piped_through_stdin() {
    let html = std::fs::read(fixture()).unwrap();
    let out = bin_with_stdin(&["--input", "-"], &html);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "Software Engineering\nData Science\nCybersecurity\nProduct Design\n"
    );
}

#[test]
fn runaway_nesting_exits_one_with_diagnostic() {
    let html = "<span>".repeat(20_000);
    let out = bin_with_stdin(&["-i", "-", "-s", ".tokenA.tokenB"], html.as_bytes());
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("nests deeper"));
}

#[test]
fn no_matches_exits_zero_with_empty_stdout() {
    let out = bin(&["--input", &fixture(), "--select", ".nothing.here"]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn failed_fetch_exits_nonzero_with_diagnostic() {
    let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
    let out = bin(&["--url", &format!("http://{addr}/"), "--connect-timeout", "2"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("--connect-timeout"));
}

#[test]
fn missing_input_file_exits_nonzero() {
    let out = bin(&["--input", "/definitely/not/here.html"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("/definitely/not/here.html"));
}

#[test]
fn unknown_flag_exits_nonzero() {
    let out = bin(&["--frobnicate"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Unknown arg"));
}

#[test]
fn help_exits_zero() {
    let out = bin(&["--help"]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage:"));
}
