// src/selector.rs
//! Compound class selectors (`.a.b`).
//!
//! An element matches when its `class` attribute, split on HTML whitespace,
//! contains every token. Token order and extra classes do not matter;
//! comparison is case-sensitive. CSS escapes are not supported.

use std::fmt;

use crate::config::consts::DEFAULT_CLASSES;
use crate::error::{Result, ScrapeError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassSelector {
    tokens: Vec<String>,
}

impl Default for ClassSelector {
    fn default() -> Self {
        Self { tokens: DEFAULT_CLASSES.iter().map(|t| s!(*t)).collect() }
    }
}

impl ClassSelector {
    /// Build from bare class names (no leading dot).
    pub fn new<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        let display = tokens.join(" ");
        if tokens.is_empty() {
            return Err(invalid(&display, "no class tokens"));
        }
        for t in &tokens {
            check_token(t).map_err(|reason| invalid(&display, reason))?;
        }
        Ok(Self { tokens })
    }

    /// Parse CSS compound-class text, e.g. `.card.featured`.
    pub fn parse(css: &str) -> Result<Self> {
        let text = css.trim();
        let Some(rest) = text.strip_prefix('.') else {
            return Err(invalid(css, "expected a compound class selector like .a.b"));
        };
        let mut tokens = Vec::new();
        for part in rest.split('.') {
            check_token(part).map_err(|reason| invalid(css, reason))?;
            tokens.push(s!(part));
        }
        Ok(Self { tokens })
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Test a raw `class` attribute value.
    pub fn matches_class_attr(&self, class_attr: &str) -> bool {
        self.tokens
            .iter()
            .all(|want| class_attr.split_ascii_whitespace().any(|have| have == want))
    }
}

impl fmt::Display for ClassSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for t in &self.tokens {
            write!(f, ".{t}")?;
        }
        Ok(())
    }
}

fn check_token(t: &str) -> std::result::Result<(), &'static str> {
    if t.is_empty() {
        return Err("empty class token");
    }
    if t.chars().any(|c| c.is_ascii_whitespace()) {
        return Err("class token contains whitespace");
    }
    if t.contains('.') {
        return Err("class token contains '.'");
    }
    Ok(())
}

fn invalid(input: &str, reason: &str) -> ScrapeError {
    ScrapeError::Selector { input: s!(input), reason: s!(reason) }
}
