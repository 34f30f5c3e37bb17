// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

//! Encoding of text for the two places it can end up in markup:
//! between tags, and inside a double-quoted attribute value.

use std::borrow::Cow;
use std::fmt::{self, Write};

const fn text_entity(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

const fn attribute_entity(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

fn write_escaped(
    value: &str,
    f: &mut impl Write,
    entity: fn(char) -> Option<&'static str>,
) -> fmt::Result {
    for c in value.chars() {
        match entity(c) {
            Some(replacement) => f.write_str(replacement),
            None => f.write_char(c),
        }?;
    }
    Ok(())
}

fn escape_with(value: &str, entity: fn(char) -> Option<&'static str>) -> Cow<'_, str> {
    let Some(first) = value.find(|c: char| entity(c).is_some()) else {
        return Cow::Borrowed(value);
    };
    let (clean, rest) = value.split_at(first);
    let mut output = String::with_capacity(value.len() + 8);
    output.push_str(clean);
    for c in rest.chars() {
        match entity(c) {
            Some(replacement) => output.push_str(replacement),
            None => output.push(c),
        }
    }
    Cow::Owned(output)
}

/// Escapes `value` for use as element text content.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with their character references.
/// Returns the input unchanged (borrowed) if none of those occur.
#[must_use]
pub fn escape_text(value: &str) -> Cow<'_, str> {
    escape_with(value, text_entity)
}

/// Escapes `value` for use inside a double-quoted attribute value.
///
/// Replaces `&`, `<`, `"` and `'` with their character references.
#[must_use]
pub fn escape_attribute_value(value: &str) -> Cow<'_, str> {
    escape_with(value, attribute_entity)
}

/// Like [`escape_text`], but streams into `f`.
///
/// # Errors
///
/// Only if writing to `f` fails.
pub fn write_escaped_text(value: &str, f: &mut impl Write) -> fmt::Result {
    write_escaped(value, f, text_entity)
}

/// Like [`escape_attribute_value`], but streams into `f`.
///
/// # Errors
///
/// Only if writing to `f` fails.
pub fn write_escaped_attribute_value(value: &str, f: &mut impl Write) -> fmt::Result {
    write_escaped(value, f, attribute_entity)
}
