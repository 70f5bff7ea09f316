// src/core/dom.rs
//! Owned, typed element tree.
//!
//! The HTML5 parser (`scraper`/html5ever) does the tolerant parsing; its tree is
//! then copied into plain `Element`/`Node` values so extraction is a pure walk
//! over data we own. Comments, doctypes and processing instructions are dropped.

use std::collections::BTreeMap;

use scraper::{ElementRef, Html, Node as HtmlNode};
use tracing::{debug, trace};

use crate::config::consts::{BINARY_SNIFF_LEN, MAX_TREE_DEPTH};
use crate::error::{Result, ScrapeError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text<S: Into<String>>(s: S) -> Self {
        Node::Text(s.into())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: BTreeMap<String, String>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into(), attributes: BTreeMap::new(), children: Vec::new() }
    }

    pub fn with_attr<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.children.push(Node::text(text));
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Concatenated character data of all descendant text nodes, in document order.
    pub fn text(&self) -> String {
        let mut out = String::new();
        let mut stack: Vec<&Node> = self.children.iter().rev().collect();
        while let Some(node) = stack.pop() {
            match node {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => stack.extend(e.children.iter().rev()),
            }
        }
        out
    }

    /// This element and every element below it, pre-order.
    pub fn elements(&self) -> Elements<'_> {
        Elements { stack: vec![self] }
    }
}

/// Pre-order depth-first iterator over elements.
pub struct Elements<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Elements<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let el = self.stack.pop()?;
        for child in el.children.iter().rev() {
            if let Node::Element(e) = child {
                self.stack.push(e);
            }
        }
        Some(el)
    }
}

/// A parsed page. `root` is the `<html>` element the parser always produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    pub root: Element,
}

impl Document {
    /// Best-effort HTML5 parse. Malformed markup is repaired the way browsers
    /// repair it. Binary input and trees nested deeper than `MAX_TREE_DEPTH`
    /// are rejected.
    pub fn parse(html: &str) -> Result<Self> {
        if looks_binary(html) {
            return Err(ScrapeError::Parse(s!(
                "input is not HTML text (NUL bytes and no markup at the start)"
            )));
        }

        let parsed = Html::parse_document(html);
        if !parsed.errors.is_empty() {
            debug!(count = parsed.errors.len(), "HTML parser recovered from errors");
            for e in &parsed.errors {
                trace!("parse error: {e}");
            }
        }

        Ok(Self { root: convert(parsed.root_element(), 1)? })
    }

    pub fn elements(&self) -> Elements<'_> {
        self.root.elements()
    }
}

impl From<Element> for Document {
    fn from(root: Element) -> Self {
        Self { root }
    }
}

// A stray NUL is a recoverable HTML parse error; only a NUL in a head
// with no tag at all marks the input as binary.
fn looks_binary(html: &str) -> bool {
    let head = &html.as_bytes()[..html.len().min(BINARY_SNIFF_LEN)];
    head.contains(&0) && !head.contains(&b'<')
}

// Parsed trees never exceed MAX_TREE_DEPTH levels.
fn convert(src: ElementRef<'_>, depth: usize) -> Result<Element> {
    if depth > MAX_TREE_DEPTH {
        return Err(ScrapeError::Parse(format!(
            "document nests deeper than {MAX_TREE_DEPTH} elements"
        )));
    }
    let v = src.value();
    let mut el = Element::new(v.name());
    for (k, val) in v.attrs() {
        el.attributes.insert(s!(k), s!(val));
    }
    for child in src.children() {
        match child.value() {
            HtmlNode::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    el.children.push(Node::Element(convert(child_el, depth + 1)?));
                }
            }
            HtmlNode::Text(t) => el.children.push(Node::text(&**t)),
            _ => {}
        }
    }
    Ok(el)
}
