// src/log.rs
use tracing::Level;
use tracing_subscriber::fmt::time::Uptime;

/// Map `-q` / `-v` counts to a level. Default is WARN so a normal run
/// prints nothing but result lines.
pub fn level_for(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the stderr subscriber. Stdout stays reserved for result lines.
/// Calling twice is harmless; the first subscriber wins.
pub fn init(level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_timer(Uptime::default())
        .with_target(false)
        .try_init();
}
