//! Stateful line reassembly for the camera link.
//!
//! The serial link is a byte stream without message boundaries: a single
//! read may contain a partial line, a complete line, several lines, or
//! garbage. The parser accumulates bytes in an internal buffer and splits
//! out complete lines on `\n`, so a message split across polls (for example
//! `FACE_VER` followed by `IFIED:Taz\n`) is reassembled and delivered once.
//!
//! # Usage
//!
//! ```
//! use attendkit_protocol::LineParser;
//!
//! let mut parser = LineParser::new();
//!
//! parser.feed(b"FACE_VER");
//! assert!(parser.next_line().is_none());
//!
//! parser.feed(b"IFIED:Taz\n");
//! assert_eq!(parser.next_line().as_deref(), Some("FACE_VERIFIED:Taz"));
//! ```
//!
//! # Encoding
//!
//! The protocol is ASCII. Carriage returns are stripped wherever they
//! appear, so both `\n` and `\r\n` terminators work. A completed line
//! containing bytes outside the ASCII range is discarded as corruption.

use attendkit_core::constants::{CARRIAGE_RETURN, LINE_FEED};
use bytes::BytesMut;
use std::collections::VecDeque;

/// Maximum buffer size to prevent memory exhaustion from a stream that
/// never sends a line terminator.
const MAX_BUFFER_SIZE: usize = 64 * 1024; // 64 KB

/// Initial buffer capacity for incoming link data.
const INITIAL_BUFFER_CAPACITY: usize = 1024; // 1 KB

/// Initial capacity for the completed-line queue.
///
/// Responses normally arrive one at a time, but a verification outcome
/// followed by a sheets report can land in the same read.
const INITIAL_LINE_QUEUE_CAPACITY: usize = 4;

/// Stateful line parser for the reader-camera link.
///
/// Handles partial reception from the byte stream, buffering incomplete
/// data and queueing complete lines for extraction.
///
/// - **Partial lines**: buffered until the terminator arrives
/// - **Multiple lines**: all extracted and queued from one `feed()`
/// - **Overlong garbage**: buffer is discarded past [`MAX_BUFFER_SIZE`]
#[derive(Debug)]
pub struct LineParser {
    /// Accumulates bytes of the current, not-yet-terminated line.
    buffer: BytesMut,

    /// Queue of complete lines ready for extraction, terminators stripped.
    lines: VecDeque<String>,
}

impl LineParser {
    pub fn new() -> Self {
        Self {
            buffer: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            lines: VecDeque::with_capacity(INITIAL_LINE_QUEUE_CAPACITY),
        }
    }

    /// Feed bytes from the link into the parser.
    ///
    /// Appends to the internal buffer and extracts every complete line the
    /// buffer now contains. Carriage returns are dropped on the way in.
    pub fn feed(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            match byte {
                CARRIAGE_RETURN => {}
                LINE_FEED => self.complete_current_line(),
                b => self.buffer.extend_from_slice(&[b]),
            }
        }

        // A stream that never terminates its line gets its buffer dropped
        // rather than growing without bound.
        if self.buffer.len() > MAX_BUFFER_SIZE {
            self.buffer.clear();
        }
    }

    /// Extract the next complete line, if one is available.
    ///
    /// Returns `None` when no full line has arrived yet; the partial data
    /// stays buffered for the next `feed()`.
    pub fn next_line(&mut self) -> Option<String> {
        self.lines.pop_front()
    }

    /// Number of complete lines ready for extraction.
    pub fn lines_available(&self) -> usize {
        self.lines.len()
    }

    /// Discard all buffered data and queued lines.
    ///
    /// Used when resetting the link after an error.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.lines.clear();
    }

    /// Returns an iterator that drains all currently available lines.
    ///
    /// Does not process more data from the buffer; call [`feed()`] first.
    ///
    /// [`feed()`]: LineParser::feed
    pub fn drain_lines(&mut self) -> DrainLines<'_> {
        DrainLines { parser: self }
    }

    /// Terminate the current line and queue it if it is valid.
    ///
    /// Lines with non-ASCII bytes are discarded as corruption. Empty lines
    /// are queued; the message layer treats them as unrecognized.
    fn complete_current_line(&mut self) {
        let raw = self.buffer.split();
        if raw.iter().all(|b| b.is_ascii()) {
            // ASCII bytes are valid UTF-8 by construction.
            self.lines
                .push_back(String::from_utf8_lossy(&raw).into_owned());
        }
    }
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator that drains lines from a [`LineParser`].
///
/// Created by [`LineParser::drain_lines`]. Yields all currently queued
/// lines until the queue is empty.
pub struct DrainLines<'a> {
    parser: &'a mut LineParser,
}

impl Iterator for DrainLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.parser.next_line()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.parser.lines_available();
        (len, Some(len))
    }
}

impl ExactSizeIterator for DrainLines<'_> {
    fn len(&self) -> usize {
        self.parser.lines_available()
    }
}
