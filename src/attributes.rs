// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;
use std::fmt::{self, Write};

use crate::escape::write_escaped_attribute_value;

pub const CLASS: &str = "class";

/// Attribute names that are rendered as `class`,
/// after underscores have been replaced and the name was lower-cased.
const CLASS_SYNONYMS: [&str; 2] = ["cssclass", "css-class"];

/// An ordered set of HTML attributes.
///
/// Pairs are rendered in the order they were added,
/// never re-sorted.
/// A value of `None` renders as an empty string (`name=""`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, Option<String>)>);

impl Attributes {
    /// No attributes at all.
    pub const NONE: Self = Self(Vec::new());

    #[must_use]
    pub const fn new() -> Self {
        Self::NONE
    }

    /// A set with a single `class` attribute.
    #[must_use]
    pub fn class(css_class: impl Into<String>) -> Self {
        Self::new().with(CLASS, css_class)
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, Some(value.into()));
        self
    }

    #[must_use]
    pub fn with_optional(mut self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        self.push(name, value.map(Into::into));
        self
    }

    pub fn push(&mut self, name: impl Into<String>, value: Option<String>) {
        self.0.push((name.into(), value));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The pairs as they were added, with names **not** yet normalized.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.0
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }

    /// Writes ` name="value"` for each pair, in order.
    ///
    /// # Errors
    ///
    /// Only if writing to `f` fails.
    pub fn write_to(&self, f: &mut impl Write) -> fmt::Result {
        for (name, value) in self.iter() {
            write!(f, " {}=\"", normalize_name(name))?;
            write_escaped_attribute_value(value.unwrap_or_default(), f)?;
            f.write_char('"')?;
        }
        Ok(())
    }

    /// Renders all pairs as ` name1="v1" name2="v2"`,
    /// or the empty string if there are none.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), Some(value.into())))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Attributes {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Maps an attribute name as given by the caller
/// to the name that ends up in the markup.
///
/// Underscores become hyphens (`data_id` -> `data-id`),
/// the name is lower-cased,
/// and the class synonyms (`cssClass`, `css_class`) become `class`.
#[must_use]
pub fn normalize_name(name: &str) -> Cow<'_, str> {
    let needs_change = name.contains('_') || name.chars().any(|c| c.is_ascii_uppercase());
    let normalized = if needs_change {
        Cow::Owned(name.replace('_', "-").to_ascii_lowercase())
    } else {
        Cow::Borrowed(name)
    };
    if CLASS_SYNONYMS.contains(&normalized.as_ref()) {
        Cow::Borrowed(CLASS)
    } else {
        normalized
    }
}
