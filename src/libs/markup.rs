//! Tolerant markup scanning for exported timesheet pages.
//!
//! The exported pages are CSS-module styled, so every structural class
//! carries a build hash suffix (`monthDay__ad9`). Selecting by full class
//! name or by deep child chains breaks on every frontend release; instead
//! this module scans for tag blocks whose class list starts with a known
//! marker and works on the inner markup of each block. Tag detection is
//! case-insensitive and resilient to attribute order, quoting style and
//! whitespace noise.
//!
//! The marker set itself is a [`MarkupSchema`] keyed by [`SchemaVersion`],
//! because the page structure changed between export generations and both
//! variants are still in the wild.

use crate::libs::error::{Result, TabelError};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Export generation of the timesheet page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVersion {
    /// Calendar grid with `monthDay`/`workItemCard` blocks.
    #[default]
    V2022,
    /// Reworked grid with `calendarDay`/`workItemRow` blocks.
    V2023,
}

/// A named descend path inside a structural block.
///
/// Each step descends into the first child element of the given tag. The
/// field name is what a mismatch error reports, so the operator learns
/// which part of the page moved instead of chasing an index chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath {
    /// Human-readable name of the field, used in mismatch errors.
    pub field: &'static str,
    /// Tag names to descend through, outermost first.
    pub steps: &'static [&'static str],
}

/// Named class markers for the structural blocks of one export generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkupSchema {
    /// Container of one calendar day.
    pub day_class: &'static str,
    /// Paragraph holding the day-of-month number.
    pub date_class: &'static str,
    /// Card holding one work item entry.
    pub task_class: &'static str,
    /// Path from a work item card to its elapsed-time text.
    pub elapsed: FieldPath,
    /// Path from a work item card to its task identifier text.
    pub task_key: FieldPath,
}

const V2022_SCHEMA: MarkupSchema = MarkupSchema {
    day_class: "monthDay",
    date_class: "monthDayDate",
    task_class: "workItemCard",
    elapsed: FieldPath {
        field: "elapsed time of a work item",
        steps: &["div", "p"],
    },
    task_key: FieldPath {
        field: "task identifier of a work item",
        steps: &["div", "a", "span", "div", "span"],
    },
};

const V2023_SCHEMA: MarkupSchema = MarkupSchema {
    day_class: "calendarDay",
    date_class: "calendarDayDate",
    task_class: "workItemRow",
    elapsed: FieldPath {
        field: "elapsed time of a work item",
        steps: &["div", "span", "p"],
    },
    task_key: FieldPath {
        field: "task identifier of a work item",
        steps: &["div", "a", "span", "span"],
    },
};

impl MarkupSchema {
    /// Returns the marker set for an export generation.
    pub fn for_version(version: SchemaVersion) -> &'static MarkupSchema {
        match version {
            SchemaVersion::V2022 => &V2022_SCHEMA,
            SchemaVersion::V2023 => &V2023_SCHEMA,
        }
    }
}

/// A located opening tag.
struct OpenTag<'a> {
    attrs: &'a str,
    content_start: usize,
    self_closing: bool,
}

/// Finds the next opening `<tag ...>` at or after `from`.
fn find_open_tag<'a>(html: &'a str, tag: &str, from: usize) -> Option<OpenTag<'a>> {
    let mut i = from;
    while let Some(off) = html.get(i..)?.find('<') {
        let lt = i + off;
        let rest = &html.as_bytes()[lt + 1..];
        if rest.len() > tag.len() && rest[..tag.len()].eq_ignore_ascii_case(tag.as_bytes()) {
            let next = rest[tag.len()];
            if next == b'>' || next == b'/' || next.is_ascii_whitespace() {
                let name_end = lt + 1 + tag.len();
                let (gt, self_closing) = scan_to_gt(html, name_end)?;
                return Some(OpenTag {
                    attrs: &html[name_end..gt],
                    content_start: gt + 1,
                    self_closing,
                });
            }
        }
        i = lt + 1;
    }
    None
}

/// Scans from inside an open tag to its closing `>`, skipping quoted
/// attribute values. Returns the index of `>` and whether the tag is
/// self-closing.
fn scan_to_gt(html: &str, from: usize) -> Option<(usize, bool)> {
    let bytes = html.as_bytes();
    let mut quote: Option<u8> = None;
    let mut i = from;
    while i < bytes.len() {
        match bytes[i] {
            q @ (b'"' | b'\'') => match quote {
                Some(open) if open == q => quote = None,
                None => quote = Some(q),
                _ => {}
            },
            b'>' if quote.is_none() => {
                let self_closing = i > from && bytes[i - 1] == b'/';
                return Some((i, self_closing));
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Finds the end of an element body by tracking same-tag nesting.
/// Returns the index right past the last content byte.
fn element_end(html: &str, tag: &str, content_start: usize) -> Option<usize> {
    let mut depth = 1usize;
    let mut i = content_start;
    while let Some(off) = html.get(i..)?.find('<') {
        let lt = i + off;
        let rest = &html.as_bytes()[lt + 1..];
        if rest.first() == Some(&b'/') {
            let name = &rest[1..];
            if name.len() > tag.len()
                && name[..tag.len()].eq_ignore_ascii_case(tag.as_bytes())
                && (name[tag.len()] == b'>' || name[tag.len()].is_ascii_whitespace())
            {
                depth -= 1;
                if depth == 0 {
                    return Some(lt);
                }
            }
            i = lt + 1;
        } else if rest.len() > tag.len()
            && rest[..tag.len()].eq_ignore_ascii_case(tag.as_bytes())
            && (rest[tag.len()] == b'>' || rest[tag.len()] == b'/' || rest[tag.len()].is_ascii_whitespace())
        {
            let (gt, self_closing) = scan_to_gt(html, lt + 1 + tag.len())?;
            if !self_closing {
                depth += 1;
            }
            i = gt + 1;
        } else {
            i = lt + 1;
        }
    }
    None
}

/// Extracts the value of an attribute from an open-tag attribute string.
fn attr_value<'a>(attrs: &'a str, name: &str) -> Option<&'a str> {
    let bytes = attrs.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_whitespace() || bytes[i] == b'/' {
            i += 1;
            continue;
        }
        let start = i;
        while i < bytes.len() && !bytes[i].is_ascii_whitespace() && bytes[i] != b'=' {
            i += 1;
        }
        let attr = &attrs[start..i];
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i < bytes.len() && bytes[i] == b'=' {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            if i < bytes.len() && (bytes[i] == b'"' || bytes[i] == b'\'') {
                let q = bytes[i];
                i += 1;
                let vstart = i;
                while i < bytes.len() && bytes[i] != q {
                    i += 1;
                }
                let value = &attrs[vstart..i];
                i += 1;
                if attr.eq_ignore_ascii_case(name) {
                    return Some(value);
                }
            } else {
                let vstart = i;
                while i < bytes.len() && !bytes[i].is_ascii_whitespace() {
                    i += 1;
                }
                if attr.eq_ignore_ascii_case(name) {
                    return Some(&attrs[vstart..i]);
                }
            }
        } else if attr.eq_ignore_ascii_case(name) {
            return Some("");
        }
    }
    None
}

/// Checks whether any class in the class list starts with the marker.
/// Build hash suffixes (`monthDay__ad9`) are matched by prefix.
fn has_class(attrs: &str, class_marker: &str) -> bool {
    attr_value(attrs, "class").is_some_and(|classes| classes.split_whitespace().any(|c| c.starts_with(class_marker)))
}

/// Inner markup of every `tag` element carrying the class marker.
///
/// Matched blocks are not re-entered, so a matching element nested inside
/// another matching element is reported once, with its parent.
pub fn class_blocks<'a>(html: &'a str, tag: &str, class_marker: &str) -> Vec<&'a str> {
    let mut blocks = Vec::new();
    let mut i = 0;
    while let Some(open) = find_open_tag(html, tag, i) {
        if open.self_closing {
            i = open.content_start;
            continue;
        }
        if has_class(open.attrs, class_marker) {
            match element_end(html, tag, open.content_start) {
                Some(end) => {
                    blocks.push(&html[open.content_start..end]);
                    i = end;
                }
                // Unterminated element: the rest of the page is unusable.
                None => break,
            }
        } else {
            i = open.content_start;
        }
    }
    blocks
}

/// Inner markup of the first `tag` element carrying the class marker.
pub fn first_class_block<'a>(html: &'a str, tag: &str, class_marker: &str) -> Option<&'a str> {
    let mut i = 0;
    while let Some(open) = find_open_tag(html, tag, i) {
        if !open.self_closing && has_class(open.attrs, class_marker) {
            return element_end(html, tag, open.content_start).map(|end| &html[open.content_start..end]);
        }
        i = open.content_start;
    }
    None
}

/// Resolves a [`FieldPath`] against a block, validating the presence of
/// every step. A missing step fails with a [`TabelError::Markup`] naming
/// the field, which signals that the page layout no longer matches the
/// selected schema version.
pub fn field<'a>(html: &'a str, path: &FieldPath) -> Result<&'a str> {
    let mut current = html;
    for step in path.steps {
        current = first_block(current, step).ok_or(TabelError::Markup(path.field))?;
    }
    Ok(current)
}

/// Inner markup of the first `tag` element, regardless of attributes.
pub fn first_block<'a>(html: &'a str, tag: &str) -> Option<&'a str> {
    let mut i = 0;
    loop {
        let open = find_open_tag(html, tag, i)?;
        if open.self_closing {
            i = open.content_start;
            continue;
        }
        return element_end(html, tag, open.content_start).map(|end| &html[open.content_start..end]);
    }
}

/// Plain text of a markup fragment: tags stripped, entities decoded,
/// whitespace collapsed to single spaces.
pub fn text(html: &str) -> String {
    let mut stripped = String::with_capacity(html.len());
    let mut i = 0;
    while let Some(off) = html[i..].find('<') {
        stripped.push_str(&html[i..i + off]);
        match html[i + off..].find('>') {
            Some(end) => i = i + off + end + 1,
            None => {
                i = html.len();
                break;
            }
        }
    }
    stripped.push_str(&html[i..]);

    let decoded = decode_entities(&stripped);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decodes the named and numeric entities that actually occur in the
/// exports. Unknown entities are passed through verbatim.
fn decode_entities(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        let semi = rest[1..].find(';').filter(|&e| e <= 9).map(|e| e + 1);
        let decoded = semi.and_then(|e| {
            let entity = &rest[1..e];
            let ch = match entity {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some(' '),
                _ => entity.strip_prefix('#').and_then(|num| {
                    let code = match num.strip_prefix('x').or_else(|| num.strip_prefix('X')) {
                        Some(hex) => u32::from_str_radix(hex, 16).ok(),
                        None => num.parse().ok(),
                    };
                    code.and_then(char::from_u32)
                }),
            };
            ch.map(|ch| (ch, e + 1))
        });
        match decoded {
            Some((ch, skip)) => {
                out.push(ch);
                rest = &rest[skip..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
