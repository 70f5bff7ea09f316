// src/core/net.rs

// Single blocking HTTP(S) GET with explicit timeouts and redirect limit.

use std::error::Error as _;

use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use tracing::{debug, info};

use crate::config::NetOptions;
use crate::error::{Result, ScrapeError};

/// Fetch `url` and return the body as text.
///
/// The body is decoded with the `charset` from `Content-Type`, falling back
/// to UTF-8. Any non-2xx status (including an unfollowed redirect) is an error.
pub fn http_get(url: &str, opts: &NetOptions) -> Result<String> {
    let policy = match opts.max_redirects {
        0 => Policy::none(),
        n => Policy::limited(n),
    };
    let client = Client::builder()
        .connect_timeout(opts.connect_timeout)
        .timeout(opts.timeout)
        .user_agent(opts.user_agent.as_str())
        .redirect(policy)
        .build()
        .map_err(|e| classify(url, e))?;

    info!("GET {url}");
    let resp = client.get(url).send().map_err(|e| classify(url, e))?;

    let status = resp.status();
    let final_url = resp.url().to_string();
    if final_url != url {
        debug!("redirected to {final_url}");
    }
    if !status.is_success() {
        return Err(ScrapeError::Status { code: status.as_u16(), url: final_url });
    }

    let body = resp.text().map_err(|e| classify(url, e))?;
    debug!(status = status.as_u16(), bytes = body.len(), "response body read");
    Ok(body)
}

fn classify(url: &str, e: reqwest::Error) -> ScrapeError {
    if e.is_timeout() || timed_out_io(&e) {
        return ScrapeError::Timeout { url: s!(url) };
    }
    // reqwest's top-level message is generic; the cause chain says what failed
    let mut msg = e.to_string();
    let mut src = e.source();
    while let Some(cause) = src {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        src = cause.source();
    }
    ScrapeError::Network { url: s!(url), msg }
}

// Body reads in the blocking client can surface a timeout as a plain io error.
fn timed_out_io(e: &reqwest::Error) -> bool {
    let mut src = e.source();
    while let Some(cause) = src {
        if let Some(io) = cause.downcast_ref::<std::io::Error>() {
            if io.kind() == std::io::ErrorKind::TimedOut {
                return true;
            }
        }
        src = cause.source();
    }
    false
}
