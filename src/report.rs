// src/report.rs
use std::io::{self, Write};

use crate::core::dom::Element;
use crate::core::sanitize::trim_text;

/// The output line for one match: its descendant text, ends trimmed.
pub fn line_for(el: &Element) -> String {
    s!(trim_text(&el.text()))
}

/// Write one `\n`-terminated line per match, in order. Whitespace-only
/// matches produce an empty line rather than being skipped.
/// Returns the number of lines written.
pub fn report<W: Write + ?Sized>(matches: &[&Element], out: &mut W) -> io::Result<usize> {
    for el in matches {
        writeln!(out, "{}", line_for(el))?;
    }
    Ok(matches.len())
}
