use std::io;

/// An append-only character destination.
///
/// This is all the canvas needs from its output: append text, and (for
/// in-memory sinks) hand back what was written so far.
pub trait CharacterSink {
    /// Append `text` verbatim.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the sink rejects the write.
    fn append(&mut self, text: &str) -> io::Result<()>;

    /// Append a single character verbatim.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the sink rejects the write.
    fn append_char(&mut self, ch: char) -> io::Result<()> {
        let mut buf = [0; 4];
        self.append(ch.encode_utf8(&mut buf))
    }

    /// Push buffered output to its destination.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if flushing fails.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Everything written so far, when the sink keeps it.
    fn written(&self) -> Option<&str> {
        None
    }
}

impl CharacterSink for String {
    fn append(&mut self, text: &str) -> io::Result<()> {
        self.push_str(text);
        Ok(())
    }

    fn append_char(&mut self, ch: char) -> io::Result<()> {
        self.push(ch);
        Ok(())
    }

    fn written(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

/// Adapts any [`io::Write`] (file, socket, response body) into a sink.
///
/// Text is written as UTF-8 with no buffering of its own; wrap the writer in
/// a [`io::BufWriter`] for small writes to a slow destination.
#[derive(Debug)]
pub struct StreamSink<W: io::Write> {
    inner: W,
}

impl<W: io::Write> StreamSink<W> {
    /// Wrap `inner`.
    pub const fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Unwrap the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> CharacterSink for StreamSink<W> {
    fn append(&mut self, text: &str) -> io::Result<()> {
        self.inner.write_all(text.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
