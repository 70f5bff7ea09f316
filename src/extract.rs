// src/extract.rs
//! Compound-class extraction over a parsed `Document`.
//!
//! Pure functions: no I/O, no logging beyond a debug count. The result is a
//! subsequence of the document's elements in pre-order, each at most once;
//! when an element and one of its descendants both match, both are returned,
//! ancestor first.

use tracing::debug;

use crate::core::dom::{Document, Element};
use crate::selector::ClassSelector;

/// True iff `el` has a `class` attribute containing every selector token.
pub fn matches(el: &Element, sel: &ClassSelector) -> bool {
    el.attr("class").is_some_and(|c| sel.matches_class_attr(c))
}

/// All matching elements in document order. Empty is not an error.
pub fn select<'a>(doc: &'a Document, sel: &ClassSelector) -> Vec<&'a Element> {
    let found: Vec<&Element> = doc.elements().filter(|el| matches(el, sel)).collect();
    debug!(selector = %sel, matched = found.len(), "selected elements");
    found
}
