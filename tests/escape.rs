// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;

#[cfg(test)]
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tagwrite::escape::{
    escape_attribute_value, escape_text, write_escaped_attribute_value, write_escaped_text,
};

const TEXT_SPECIALS: [char; 5] = ['&', '<', '>', '"', '\''];

#[test]
fn test_escape_text() {
    assert_eq!(escape_text("a & b"), "a &amp; b");
    assert_eq!(
        escape_text("<b class=\"x\">it's</b>"),
        "&lt;b class=&quot;x&quot;&gt;it&#39;s&lt;/b&gt;"
    );
    assert_eq!(escape_text("&amp;"), "&amp;amp;");
    assert_eq!(escape_text(""), "");
}

#[test]
fn test_escape_attribute_value() {
    assert_eq!(escape_attribute_value("a \"b\" & <c>"), "a &quot;b&quot; &amp; &lt;c>");
    assert_eq!(escape_attribute_value("it's"), "it&#39;s");
    assert_eq!(escape_attribute_value(""), "");
}

#[test]
fn test_clean_input_is_borrowed() {
    assert!(matches!(escape_text("plain text, 100%"), Cow::Borrowed(_)));
    assert!(matches!(escape_attribute_value("a > b"), Cow::Borrowed(_)));
    assert!(matches!(escape_text("a > b"), Cow::Owned(_)));
}

#[test]
fn test_streaming_variants() {
    let mut text = String::new();
    write_escaped_text("1 < 2 ünd 3 > 2", &mut text).unwrap();
    assert_eq!(text, "1 &lt; 2 ünd 3 &gt; 2");

    let mut value = String::from("x=");
    write_escaped_attribute_value("\"q\"", &mut value).unwrap();
    assert_eq!(value, "x=&quot;q&quot;");
}

proptest! {
    #[test]
    fn prop_attribute_value_has_no_bare_quote(s in any::<String>()) {
        prop_assert!(!escape_attribute_value(&s).contains('"'));
    }

    #[test]
    fn prop_double_escaping_changes_only_specials(s in any::<String>()) {
        let once = escape_text(&s).into_owned();
        let twice = escape_text(&once).into_owned();
        if s.contains(TEXT_SPECIALS) {
            prop_assert_ne!(twice, once);
        } else {
            prop_assert_eq!(&twice, &s);
            prop_assert_eq!(&once, &s);
        }
    }

    #[test]
    fn prop_escaped_text_has_no_markup(s in any::<String>()) {
        let escaped = escape_text(&s);
        prop_assert!(!escaped.contains(['<', '>', '"', '\'']));
    }
}
