// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

/// Indentation written once per level, unless configured otherwise.
pub const DEFAULT_INDENTATION: &str = "    ";

/// The line terminator native to the platform we are compiled for.
#[cfg(windows)]
pub const NATIVE_LINE_TERMINATOR: &str = "\r\n";
/// The line terminator native to the platform we are compiled for.
#[cfg(not(windows))]
pub const NATIVE_LINE_TERMINATOR: &str = "\n";

pub const LINE_BREAK: &str = "<br/>";
pub const NBSP: &str = "&nbsp;";

pub const TAG_SCRIPT: &str = "script";
pub const TAG_LINK: &str = "link";
pub const TAG_TABLE_ROW: &str = "tr";
pub const TAG_TABLE_CELL: &str = "td";

pub const MIME_JAVASCRIPT: &str = "text/javascript";
pub const MIME_CSS: &str = "text/css";
pub const MIME_ICON: &str = "image/x-icon";

pub const REL_STYLESHEET: &str = "stylesheet";
pub const REL_ICON: &str = "shortcut icon";
