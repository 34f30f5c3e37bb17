// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::attributes::Attributes;
use crate::closer::Closer;
use crate::constants::{LINE_BREAK, NBSP};
use crate::context::Context;
use crate::error::{Error, WriterResult};
use crate::escape::escape_text;
use crate::options::WriterOptions;
use crate::sink::{Output, Sink};

/// Guard for a tag opened by [`DocumentWriter::open_tag`].
///
/// Write the content of the element through it,
/// then [`close`](Closer::close) it or let it go out of scope.
pub type TagCloser<'w, W> = Closer<'w, DocumentWriter<W>>;

/// Writes indented markup straight to a [`Sink`],
/// without building a document tree in memory.
///
/// Every opened tag is represented by a [`TagCloser`],
/// which writes the matching end tag exactly once.
pub struct DocumentWriter<W: Sink> {
    context: Context<Output<W>>,
    options: WriterOptions,
}

/// Runs `body` against a writer over an in-memory buffer,
/// and returns what it wrote.
///
/// # Errors
///
/// Whatever `body` returns.
pub fn render_to_string<F>(options: WriterOptions, body: F) -> WriterResult<String>
where
    F: FnOnce(&mut DocumentWriter<Vec<u8>>) -> WriterResult<()>,
{
    let mut writer = DocumentWriter::with_options(Vec::new(), options);
    body(&mut writer)?;
    let bytes = writer.into_inner()?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

impl<W: Sink> DocumentWriter<W> {
    /// Writes directly to `sink`, which stays the callers responsibility;
    /// [`close`](Self::close) flushes it, but never releases it.
    pub fn new(sink: W) -> Self {
        Self::with_options(sink, WriterOptions::default())
    }

    pub fn with_options(sink: W, options: WriterOptions) -> Self {
        Self::from_output(Output::Direct(sink), options)
    }

    /// Writes through a buffer created on top of `stream`;
    /// [`close`](Self::close) releases both.
    pub fn from_stream(stream: W) -> Self {
        Self::from_stream_with_options(stream, WriterOptions::default())
    }

    pub fn from_stream_with_options(stream: W, options: WriterOptions) -> Self {
        Self::from_output(Output::Buffered(BufWriter::new(stream)), options)
    }

    fn from_output(output: Output<W>, options: WriterOptions) -> Self {
        Self {
            context: Context::new(output, options.initial_indent_level),
            options,
        }
    }

    #[must_use]
    pub const fn indent_level(&self) -> usize {
        self.context.indent_level
    }

    #[must_use]
    pub const fn options(&self) -> &WriterOptions {
        &self.options
    }

    fn write_indent(&mut self) -> WriterResult<()> {
        for _ in 0..self.context.indent_level {
            self.context
                .output
                .write_all(self.options.indentation.as_bytes())?;
        }
        Ok(())
    }

    fn write_line_terminator(&mut self) -> WriterResult<()> {
        self.context
            .output
            .write_all(self.options.line_terminator.as_bytes())?;
        Ok(())
    }

    /// Writes one full line: indentation, `content` and the line terminator.
    fn write_line(&mut self, content: &str) -> WriterResult<()> {
        self.write_indent()?;
        self.context.output.write_all(content.as_bytes())?;
        self.write_line_terminator()
    }

    /// Writes `<tag attr="...">` on a line of its own,
    /// and indents everything that follows one level deeper,
    /// until the returned closer writes `</tag>`.
    ///
    /// # Errors
    ///
    /// If writing to the sink fails.
    pub fn open_tag(&mut self, tag: &str, attributes: &Attributes) -> WriterResult<TagCloser<'_, W>> {
        tracing::trace!("Opening <{tag}> at level {}", self.context.indent_level);
        self.write_line(&format!("<{tag}{attributes}>"))?;
        self.context.indent_level += 1;
        let tag = tag.to_owned();
        Ok(Closer::new(self, move |writer: &mut Self| {
            writer.close_tag(&tag)
        }))
    }

    /// Steps back one level of indentation and writes `</tag>`.
    ///
    /// Only ever called by the closer of the matching [`Self::open_tag`].
    pub(crate) fn close_tag(&mut self, tag: &str) -> WriterResult<()> {
        debug_assert!(
            self.context.indent_level > 0,
            "Closing </{tag}> without any open tag"
        );
        self.context.indent_level = self.context.indent_level.saturating_sub(1);
        tracing::trace!("Closing </{tag}> at level {}", self.context.indent_level);
        self.write_line(&format!("</{tag}>"))
    }

    /// Writes `text` HTML-encoded, on a line of its own.
    ///
    /// # Errors
    ///
    /// If writing to the sink fails.
    pub fn write_text(&mut self, text: &str) -> WriterResult<()> {
        self.write_line(&escape_text(text))
    }

    /// Writes `text` as is, on a line of its own.
    ///
    /// It is up to the caller to make sure this is well-formed markup.
    ///
    /// # Errors
    ///
    /// If writing to the sink fails.
    pub fn write_raw(&mut self, text: &str) -> WriterResult<()> {
        self.write_line(text)
    }

    /// Opens `tag`, writes `text` (if any) inside of it, and closes it again.
    ///
    /// # Errors
    ///
    /// If writing to the sink fails.
    pub fn write_tag(
        &mut self,
        tag: &str,
        text: Option<&str>,
        attributes: &Attributes,
    ) -> WriterResult<()> {
        let mut element = self.open_tag(tag, attributes)?;
        if let Some(text) = text {
            element.write_text(text)?;
        }
        element.close()
    }

    /// Writes a `<br/>` on a line of its own.
    ///
    /// # Errors
    ///
    /// If writing to the sink fails.
    pub fn break_line(&mut self) -> WriterResult<()> {
        self.write_line(LINE_BREAK)
    }

    /// Writes a single `&nbsp;`, inline.
    ///
    /// # Errors
    ///
    /// If writing to the sink fails.
    pub fn nbsp(&mut self) -> WriterResult<()> {
        self.non_breaking_space(1)
    }

    /// Writes `count` times `&nbsp;`, inline,
    /// so without indentation nor line terminator.
    ///
    /// # Errors
    ///
    /// If writing to the sink fails.
    pub fn non_breaking_space(&mut self, count: usize) -> WriterResult<()> {
        self.context.output.write_all(NBSP.repeat(count).as_bytes())?;
        Ok(())
    }

    /// Writes one line as is,
    /// without indentation.
    pub(crate) fn write_verbatim_line(&mut self, line: &str) -> WriterResult<()> {
        self.context.output.write_all(line.as_bytes())?;
        self.write_line_terminator()
    }

    /// Forwards to the sink's flush,
    /// pushing out whatever a buffer in between still holds.
    ///
    /// # Errors
    ///
    /// If flushing the sink fails.
    pub fn flush(&mut self) -> WriterResult<()> {
        self.context.output.flush()?;
        Ok(())
    }

    /// Flushes everything written so far, and hands back the sink.
    ///
    /// # Errors
    ///
    /// If flushing fails.
    pub fn into_inner(self) -> WriterResult<W> {
        Ok(self.context.output.into_inner()?)
    }

    /// Finishes writing.
    ///
    /// A sink given to [`Self::new`] is only flushed.
    /// With [`Self::from_stream`] and [`DocumentWriter::create`],
    /// the buffer we created is flushed and dropped,
    /// and then the sink is released,
    /// even if flushing the buffer failed.
    ///
    /// # Errors
    ///
    /// The first failure while flushing or releasing.
    pub fn close(self) -> WriterResult<()> {
        if self.context.indent_level != self.options.initial_indent_level {
            tracing::debug!(
                "Closing the writer with {} tag(s) still open",
                self.context.indent_level
                    .saturating_sub(self.options.initial_indent_level)
            );
        }
        self.context.output.release()?;
        Ok(())
    }
}

impl DocumentWriter<File> {
    /// Creates (or truncates) the file at `path`,
    /// and writes to it through a buffer.
    ///
    /// [`Self::close`] releases both.
    ///
    /// # Errors
    ///
    /// If the file can not be created.
    pub fn create(path: impl AsRef<Path>) -> WriterResult<Self> {
        Self::create_with_options(path, WriterOptions::default())
    }

    /// # Errors
    ///
    /// If the file can not be created.
    pub fn create_with_options(path: impl AsRef<Path>, options: WriterOptions) -> WriterResult<Self> {
        let path = path.as_ref();
        tracing::debug!("Creating output file {}", path.display());
        let file =
            File::create(path).map_err(|err| Error::FailedToCreateFile(path.to_path_buf(), err))?;
        Ok(Self::from_stream_with_options(file, options))
    }
}
