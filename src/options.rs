// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use crate::constants::{DEFAULT_INDENTATION, NATIVE_LINE_TERMINATOR};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterOptions {
    /// Space(s) or tab(s) representing one level of indentation.
    pub indentation: String,
    /// Written after every tag and every line of text.
    ///
    /// Defaults to the platform native line terminator,
    /// so `"\r\n"` on Windows and `"\n"` everywhere else.
    pub line_terminator: String,
    /// Number of indentation levels to use for the outermost elements.
    ///
    /// Useful when the output gets embedded into an already indented document.
    pub initial_indent_level: usize,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            indentation: DEFAULT_INDENTATION.to_string(),
            line_terminator: NATIVE_LINE_TERMINATOR.to_string(),
            initial_indent_level: 0,
        }
    }
}
