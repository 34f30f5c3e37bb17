// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

/// Current state of the writer.
#[derive(Default)]
pub struct Context<W> {
    /// The level of indentation
    /// (**not** measured in spaces).
    pub indent_level: usize,
    pub output: W,
}

impl<W> Context<W> {
    pub const fn new(output: W, indent_level: usize) -> Self {
        Self {
            indent_level,
            output,
        }
    }
}
