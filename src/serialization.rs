//! Writers for streams of tweets and summaries.

use serde::Serialize;
use std::io::Write;
use thiserror::Error;

/// Error type for serialization operations
#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// NDJSON (Newline Delimited JSON) writer
///
/// Writes one JSON object per line.
pub struct NdjsonWriter<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> NdjsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Write a single item as an NDJSON line
    pub fn write<T: Serialize>(&mut self, item: &T) -> Result<(), SerializationError> {
        serde_json::to_writer(&mut self.writer, item)?;
        self.writer.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    /// Write multiple items
    pub fn write_all<T: Serialize>(&mut self, items: &[T]) -> Result<(), SerializationError> {
        for item in items {
            self.write(item)?;
        }
        Ok(())
    }

    /// Number of lines written so far
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn flush(&mut self) -> Result<(), SerializationError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// JSON array writer
///
/// Writes items as one JSON array, pretty-printed on request.
pub struct JsonArrayWriter<W: Write> {
    writer: W,
    first: bool,
    pretty: bool,
}

impl<W: Write> JsonArrayWriter<W> {
    /// Create a new JSON array writer and write the opening bracket
    pub fn new(mut writer: W, pretty: bool) -> Result<Self, SerializationError> {
        write!(writer, "[")?;
        Ok(Self {
            writer,
            first: true,
            pretty,
        })
    }

    /// Write a single item to the JSON array
    pub fn write<T: Serialize>(&mut self, item: &T) -> Result<(), SerializationError> {
        if !self.first {
            write!(self.writer, ",")?;
        }
        self.first = false;

        if self.pretty {
            writeln!(self.writer)?;
            serde_json::to_writer_pretty(&mut self.writer, item)?;
        } else {
            serde_json::to_writer(&mut self.writer, item)?;
        }
        Ok(())
    }

    /// Finish writing the array and close the bracket
    pub fn finish(mut self) -> Result<(), SerializationError> {
        if self.pretty && !self.first {
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "]")?;
        self.writer.flush()?;
        Ok(())
    }
}
