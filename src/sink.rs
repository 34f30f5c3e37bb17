// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::fs::File;
use std::io::{self, BufWriter, LineWriter, Write};
use std::net::TcpStream;
#[cfg(unix)]
use std::os::unix::net::UnixStream;
use std::process::ChildStdin;

/// A destination for the generated markup.
///
/// Appending and flushing come from [`Write`];
/// this adds the final release of the resources behind it.
pub trait Sink: Write {
    /// Gives up the resources held by this sink.
    ///
    /// The default does nothing beyond dropping `self`.
    ///
    /// # Errors
    ///
    /// If the underlying resource reports a failure while being released.
    fn release(self) -> io::Result<()>
    where
        Self: Sized,
    {
        Ok(())
    }
}

impl Sink for Vec<u8> {}
impl Sink for File {}
impl Sink for io::Stdout {}
impl Sink for io::StdoutLock<'_> {}
impl Sink for io::Stderr {}
impl Sink for io::StderrLock<'_> {}
impl Sink for io::Sink {}
impl Sink for io::Cursor<Vec<u8>> {}
impl Sink for io::Cursor<&mut Vec<u8>> {}
impl Sink for TcpStream {}
#[cfg(unix)]
impl Sink for UnixStream {}
impl Sink for ChildStdin {}
impl Sink for Box<dyn Write + '_> {}
impl Sink for Box<dyn Write + Send + '_> {}

/// Flushes, then releases the wrapped sink,
/// even if the flush failed.
impl<W: Sink> Sink for BufWriter<W> {
    fn release(self) -> io::Result<()> {
        release_buffered(self)
    }
}

/// Flushes, then releases the wrapped sink.
///
/// NOTE If the flush fails, the wrapped sink is only dropped,
///      as a `LineWriter` can not be taken apart.
impl<W: Sink> Sink for LineWriter<W> {
    fn release(self) -> io::Result<()> {
        self.into_inner()
            .map_err(io::IntoInnerError::into_error)?
            .release()
    }
}

/// Borrowed sinks are never released by us;
/// that is up to whoever owns them.
impl<S: Sink + ?Sized> Sink for &mut S {}

/// Where the writer actually puts its output.
pub enum Output<W: Sink> {
    /// Supplied by the caller, written to directly,
    /// and never released by the writer.
    Direct(W),
    /// A text layer the writer created on top of a byte sink;
    /// both get released on teardown.
    Buffered(BufWriter<W>),
}

impl<W: Sink> Output<W> {
    /// Releases everything the writer created itself.
    ///
    /// The byte sink underneath a buffered layer is released
    /// even if flushing the layer fails;
    /// that first failure is then the one reported.
    ///
    /// # Errors
    ///
    /// If flushing or releasing fails.
    pub fn release(self) -> io::Result<()> {
        match self {
            Self::Direct(mut sink) => sink.flush(),
            Self::Buffered(buffered) => release_buffered(buffered),
        }
    }

    /// Flushes and hands back the sink.
    ///
    /// # Errors
    ///
    /// If flushing the buffered layer fails;
    /// whatever it still held is then discarded, together with the sink.
    pub fn into_inner(self) -> io::Result<W> {
        match self {
            Self::Direct(mut sink) => {
                sink.flush()?;
                Ok(sink)
            }
            Self::Buffered(buffered) => buffered.into_inner().map_err(|err| take_apart(err).0),
        }
    }
}

/// Splits a failed flush into its error and the sink underneath,
/// dropping the unwritten bytes without another attempt to write them.
fn take_apart<W: Write>(err: io::IntoInnerError<BufWriter<W>>) -> (io::Error, W) {
    let (err, buffered) = err.into_parts();
    let (sink, _unwritten) = buffered.into_parts();
    (err, sink)
}

fn release_buffered<W: Sink>(buffered: BufWriter<W>) -> io::Result<()> {
    let (sink, flushed) = match buffered.into_inner() {
        Ok(sink) => (sink, Ok(())),
        Err(err) => {
            let (err, sink) = take_apart(err);
            (sink, Err(err))
        }
    };
    let released = sink.release();
    flushed.and(released)
}

impl<W: Sink> Write for Output<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Direct(sink) => sink.write(buf),
            Self::Buffered(buffered) => buffered.write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            Self::Direct(sink) => sink.write_all(buf),
            Self::Buffered(buffered) => buffered.write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Direct(sink) => sink.flush(),
            Self::Buffered(buffered) => buffered.flush(),
        }
    }
}
