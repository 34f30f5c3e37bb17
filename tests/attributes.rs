// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

#[cfg(test)]
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tagwrite::attributes::{normalize_name, Attributes};

#[test]
fn test_empty_renders_nothing() {
    assert_eq!(Attributes::NONE.render(), "");
    assert_eq!(Attributes::new().render(), "");
    assert!(Attributes::default().is_empty());
}

#[test]
fn test_insertion_order_is_kept() {
    let attributes = Attributes::from([("src", "app.js"), ("type", "text/javascript"), ("async", "")]);
    assert_eq!(attributes.len(), 3);
    assert_eq!(
        attributes.render(),
        " src=\"app.js\" type=\"text/javascript\" async=\"\""
    );
}

#[test]
fn test_class_sugar() {
    assert_eq!(Attributes::class("nav main").render(), " class=\"nav main\"");
}

#[test]
fn test_names_are_normalized() {
    let attributes = Attributes::new()
        .with("data_item_id", "7")
        .with("cssClass", "a")
        .with("css_class", "b")
        .with("class", "c")
        .with("ARIA_Label", "d");
    assert_eq!(
        attributes.render(),
        " data-item-id=\"7\" class=\"a\" class=\"b\" class=\"c\" aria-label=\"d\""
    );
}

#[test]
fn test_normalize_name() {
    assert_eq!(normalize_name("href"), "href");
    assert_eq!(normalize_name("http_equiv"), "http-equiv");
    assert_eq!(normalize_name("cssclass"), "class");
    assert_eq!(normalize_name("css-class"), "class");
    assert_eq!(normalize_name("classes"), "classes");
}

#[test]
fn test_absent_value_renders_empty() {
    let attributes = Attributes::new()
        .with_optional("alt", None::<String>)
        .with_optional("title", Some("t"));
    assert_eq!(attributes.render(), " alt=\"\" title=\"t\"");
    assert_eq!(
        attributes.iter().collect::<Vec<_>>(),
        [("alt", None::<&str>), ("title", Some("t"))]
    );
}

#[test]
fn test_values_are_escaped() {
    let attributes = Attributes::new().with("title", "say \"hi\" & <bye> it's me");
    assert_eq!(
        attributes.render(),
        " title=\"say &quot;hi&quot; &amp; &lt;bye> it&#39;s me\""
    );
}

#[test]
fn test_display_equals_render() {
    let attributes: Attributes = vec![("id", "main"), ("role", "region")].into_iter().collect();
    assert_eq!(format!("<div{attributes}>"), "<div id=\"main\" role=\"region\">");
}

#[test]
fn test_value_may_contain_equals_sign() {
    assert_eq!(Attributes::from([("a", "=")]).render(), " a=\"=\"");
    assert_eq!(
        Attributes::from([("href", "?q=1&x=")]).render(),
        " href=\"?q=1&amp;x=\""
    );
}

proptest! {
    #[test]
    fn prop_one_segment_per_pair(
        pairs in prop::collection::vec(("[a-z][a-z_]{0,7}", any::<String>()), 0..8)
    ) {
        let attributes: Attributes = pairs.iter().cloned().collect();
        let rendered = attributes.render();
        // values never contain an unescaped quote,
        // so every pair adds exactly two of them
        prop_assert_eq!(rendered.matches('"').count(), 2 * pairs.len());
        let mut rest = rendered.as_str();
        for (name, _value) in &pairs {
            let segment = format!(" {}=\"", normalize_name(name));
            prop_assert!(rest.starts_with(&segment));
            let value_end = rest[segment.len()..].find('"').unwrap();
            rest = &rest[segment.len() + value_end + 1..];
        }
        prop_assert!(rest.is_empty());
    }
}
