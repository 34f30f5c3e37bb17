// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("File extension of dependency '{0}' is not supported; write the tag explicitly instead")]
    UnsupportedDependency(String),

    #[error("Failed to create output file {}", .0.display())]
    FailedToCreateFile(PathBuf, #[source] std::io::Error),

    #[error("Failed to read {}", .0.display())]
    FailedToReadFile(PathBuf, #[source] std::io::Error),

    /// Represents all cases of `std::io::Error`.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type WriterResult<T> = std::result::Result<T, Error>;
