// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

//! Writes indented, well-formed HTML markup straight to a stream,
//! one open/write/close call at a time,
//! without ever building a document tree.
//!
//! ```
//! use tagwrite::{attributes::Attributes, options::WriterOptions, writer::render_to_string};
//!
//! let options = WriterOptions {
//!     line_terminator: "\n".to_string(),
//!     ..WriterOptions::default()
//! };
//! let html = render_to_string(options, |writer| {
//!     let mut list = writer.open_tag("ul", &Attributes::class("menu"))?;
//!     list.write_tag("li", Some("Fish & Chips"), &Attributes::NONE)?;
//!     list.close()
//! })
//! .unwrap();
//! assert_eq!(
//!     html,
//!     "<ul class=\"menu\">\n    <li>\n        Fish &amp; Chips\n    </li>\n</ul>\n"
//! );
//! ```

pub mod attributes;
pub mod closer;
pub mod compose;
pub mod constants;
pub mod context;
pub mod error;
pub mod escape;
pub mod options;
pub mod sink;
pub mod writer;

pub use attributes::Attributes;
pub use error::{Error, WriterResult};
pub use options::WriterOptions;
pub use writer::{DocumentWriter, TagCloser};
