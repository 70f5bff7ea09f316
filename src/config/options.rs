// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use crate::selector::ClassSelector;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub source: Source,
    pub selector: ClassSelector,
    pub net: NetOptions,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            source: Source::default(),
            selector: ClassSelector::default(),
            net: NetOptions::default(),
        }
    }
}

/// Where the document comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Url(String),
    /// Local file; `-` reads stdin. Never touches the network.
    File(PathBuf),
}

impl Default for Source {
    fn default() -> Self {
        Source::Url(s!(DEFAULT_URL))
    }
}

impl Source {
    pub fn describe(&self) -> String {
        match self {
            Source::Url(url) => url.clone(),
            Source::File(path) if path.as_os_str() == STDIN_PATH => s!("<stdin>"),
            Source::File(path) => path.display().to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetOptions {
    pub connect_timeout: Duration,
    /// Whole request, including reading the body.
    pub timeout: Duration,
    /// 0 disables redirect following.
    pub max_redirects: usize,
    pub user_agent: String,
}

impl Default for NetOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(CONNECT_TIMEOUT_SECS),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            max_redirects: MAX_REDIRECTS,
            user_agent: s!(USER_AGENT),
        }
    }
}
