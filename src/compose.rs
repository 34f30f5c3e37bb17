// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

//! Conveniences built purely from the primitives of [`DocumentWriter`].

use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::attributes::Attributes;
use crate::constants::{
    MIME_CSS, MIME_ICON, MIME_JAVASCRIPT, REL_ICON, REL_STYLESHEET, TAG_LINK, TAG_SCRIPT,
    TAG_TABLE_CELL, TAG_TABLE_ROW,
};
use crate::error::{Error, WriterResult};
use crate::sink::Sink;
use crate::writer::DocumentWriter;

/// The kinds of files [`DocumentWriter::dependency`] knows how to reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyKind {
    Script,
    Icon,
    Stylesheet,
}

impl DependencyKind {
    /// Figures out the kind by the file extension at the very end of `url`,
    /// ignoring trailing white-space.
    ///
    /// NOTE A query or fragment after the extension (`app.js?v=2`)
    ///      hides it, and thus yields `None`.
    #[must_use]
    pub fn from_url(url: &str) -> Option<Self> {
        let url = url.trim_end();
        if url.ends_with(".js") {
            Some(Self::Script)
        } else if url.ends_with(".ico") {
            Some(Self::Icon)
        } else if url.ends_with(".css") {
            Some(Self::Stylesheet)
        } else {
            None
        }
    }

    fn tag_and_attributes(self, url: &str) -> (&'static str, Attributes) {
        match self {
            Self::Script => (
                TAG_SCRIPT,
                Attributes::from([("src", url), ("type", MIME_JAVASCRIPT)]),
            ),
            Self::Icon => (
                TAG_LINK,
                Attributes::from([("rel", REL_ICON), ("type", MIME_ICON), ("href", url)]),
            ),
            Self::Stylesheet => (
                TAG_LINK,
                Attributes::from([("rel", REL_STYLESHEET), ("type", MIME_CSS), ("href", url)]),
            ),
        }
    }
}

impl<W: Sink> DocumentWriter<W> {
    /// Calls `callback` for each of the `items`, in order.
    ///
    /// If a `container` tag is given,
    /// all of that happens inside of it,
    /// and `attributes` are applied to it.
    /// Otherwise `attributes` are ignored.
    ///
    /// # Errors
    ///
    /// The first error returned by `callback` or by writing to the sink.
    /// An opened container is closed in any case.
    pub fn for_each<I, F>(
        &mut self,
        container: Option<&str>,
        attributes: &Attributes,
        items: I,
        mut callback: F,
    ) -> WriterResult<()>
    where
        I: IntoIterator,
        F: FnMut(&mut Self, I::Item) -> WriterResult<()>,
    {
        let Some(container) = container else {
            for item in items {
                callback(&mut *self, item)?;
            }
            return Ok(());
        };
        let mut inside = self.open_tag(container, attributes)?;
        for item in items {
            callback(&mut *inside, item)?;
        }
        inside.close()
    }

    /// Writes one `tag` element per item,
    /// with the text `text_fn` produces for it.
    ///
    /// If `text_fn` yields `None`, that element is left empty.
    ///
    /// # Errors
    ///
    /// If writing to the sink fails.
    pub fn write_for_each<I, F, S>(
        &mut self,
        tag: &str,
        attributes: &Attributes,
        items: I,
        mut text_fn: F,
    ) -> WriterResult<()>
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> Option<S>,
        S: AsRef<str>,
    {
        for item in items {
            let text = text_fn(item);
            self.write_tag(tag, text.as_ref().map(AsRef::as_ref), attributes)?;
        }
        Ok(())
    }

    /// Writes a table row, with one cell per entry of `cells`.
    ///
    /// A `None` results in an empty cell.
    ///
    /// # Errors
    ///
    /// If writing to the sink fails.
    pub fn table_row<I, T>(&mut self, cells: I) -> WriterResult<()>
    where
        I: IntoIterator<Item = Option<T>>,
        T: Display,
    {
        self.for_each(Some(TAG_TABLE_ROW), &Attributes::NONE, cells, |row, cell| {
            let mut td = row.open_tag(TAG_TABLE_CELL, &Attributes::NONE)?;
            if let Some(cell) = cell {
                td.write_text(&cell.to_string())?;
            }
            td.close()
        })
    }

    /// Writes the tag that references the script, icon or stylesheet at `url`,
    /// chosen by its file extension (`.js`, `.ico` or `.css`).
    ///
    /// A blank `url` is silently skipped.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedDependency`] for any other extension;
    /// use [`Self::write_tag`] for those.
    /// Also if writing to the sink fails.
    pub fn dependency(&mut self, url: &str) -> WriterResult<()> {
        if url.trim().is_empty() {
            tracing::debug!("Skipping blank dependency URL");
            return Ok(());
        }
        let kind = DependencyKind::from_url(url)
            .ok_or_else(|| Error::UnsupportedDependency(url.to_owned()))?;
        let (tag, attributes) = kind.tag_and_attributes(url);
        self.write_tag(tag, None, &attributes)
    }

    /// Copies `lines` into the output as they are,
    /// each followed by the line terminator,
    /// but without any indentation.
    ///
    /// # Errors
    ///
    /// The first error produced by `lines`, or by writing to the sink.
    pub fn write_file_contents<I, S>(&mut self, lines: I) -> WriterResult<()>
    where
        I: IntoIterator<Item = io::Result<S>>,
        S: AsRef<str>,
    {
        for line in lines {
            self.write_verbatim_line(line?.as_ref())?;
        }
        Ok(())
    }

    /// Copies everything `reader` produces into the output, line by line,
    /// see [`Self::write_file_contents`].
    ///
    /// # Errors
    ///
    /// If reading or writing fails.
    pub fn write_reader_contents(&mut self, reader: impl BufRead) -> WriterResult<()> {
        self.write_file_contents(reader.lines())
    }

    /// Copies the file at `path` into the output, line by line,
    /// see [`Self::write_file_contents`].
    ///
    /// # Errors
    ///
    /// If the file can not be read, or writing fails.
    pub fn include_file(&mut self, path: impl AsRef<Path>) -> WriterResult<()> {
        let path = path.as_ref();
        let file =
            File::open(path).map_err(|err| Error::FailedToReadFile(path.to_path_buf(), err))?;
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|err| Error::FailedToReadFile(path.to_path_buf(), err))?;
            self.write_verbatim_line(&line)?;
        }
        Ok(())
    }
}
