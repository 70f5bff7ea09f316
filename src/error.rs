// src/error.rs
use std::io;

use thiserror::Error;

/// Everything that can abort a scrape run. Nothing is recovered locally;
/// the first error ends the run.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// DNS, connect, TLS or transport failure, or an unusable URL.
    #[error("network error fetching {url}: {msg}")]
    Network { url: String, msg: String },

    /// The server answered, but not with a 2xx.
    #[error("HTTP {code} for {url}")]
    Status { code: u16, url: String },

    #[error("timed out fetching {url}")]
    Timeout { url: String },

    #[error("cannot read {path}: {source}")]
    Input {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot parse document: {0}")]
    Parse(String),

    #[error("invalid selector {input:?}: {reason}")]
    Selector { input: String, reason: String },

    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ScrapeError {
    /// True for the failures the fetch stage reports (network, status, timeout).
    pub fn is_fetch(&self) -> bool {
        matches!(
            self,
            ScrapeError::Network { .. } | ScrapeError::Status { .. } | ScrapeError::Timeout { .. }
        )
    }

    /// Follow-up advice shown under the error by the binary.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            e if e.is_fetch() => {
                Some("check the URL and network; slow hosts may need a larger --timeout or --connect-timeout")
            }
            ScrapeError::Usage(_) | ScrapeError::Selector { .. } => Some("run with --help for usage"),
            _ => None,
        }
    }
}


pub type Result<T> = std::result::Result<T, ScrapeError>;
