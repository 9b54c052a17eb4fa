//! The scan engine.
//!
//! [`Parser`] walks the document once per [`parse`](Parser::parse) call,
//! alternating between comment text and tagged data, and reports what it
//! finds to a [`Handler`]. The internal [`Scanner`] owns the cursor and the
//! line counter; the parser only forwards what the scanner yields.

use std::borrow::Cow;
use std::path::Path;

use tracing::{debug, trace, warn};

use crate::error::{LoadError, ParseError};
use crate::grammar::{find_tag, Tag};
use crate::handler::Handler;
use crate::lines::count_line_breaks;

/// Event-driven ADI parser.
///
/// The lifetime `'a` is that of the document text (`'static` when the
/// parser owns it), `'h` that of the borrowed handler.
///
/// ```
/// use adi_core::{EventLog, Parser};
///
/// let mut log = EventLog::new();
/// let mut parser = Parser::new("<CALL:6>JS2PBF\n<EOR>").with_handler(&mut log);
/// assert!(parser.parse());
/// assert_eq!(parser.line_number(), 2);
/// drop(parser);
/// assert_eq!(log.fields(), vec![("CALL", Some("JS2PBF")), ("EOR", None)]);
/// ```
pub struct Parser<'a, 'h> {
    text: Cow<'a, str>,
    handler: Option<&'h mut dyn Handler>,
    line_number: usize,
    error: Option<ParseError>,
}

impl<'a, 'h> Parser<'a, 'h> {
    /// Create a parser over `text` with no handler registered.
    pub fn new(text: impl Into<Cow<'a, str>>) -> Self {
        Self {
            text: text.into(),
            handler: None,
            line_number: 0,
            error: None,
        }
    }

    /// Read a whole file as the document.
    ///
    /// Fails if the file cannot be read or is not valid UTF-8.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "loaded ADI document");
        Self::from_bytes(bytes)
    }

    /// Take ownership of raw bytes as the document. Fails on invalid UTF-8.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, LoadError> {
        Ok(Self::new(String::from_utf8(bytes)?))
    }

    /// Register the handler that receives events, replacing any previous one.
    pub fn set_handler(&mut self, handler: &'h mut dyn Handler) {
        self.handler = Some(handler);
    }

    /// Builder form of [`set_handler`](Self::set_handler).
    pub fn with_handler(mut self, handler: &'h mut dyn Handler) -> Self {
        self.set_handler(handler);
        self
    }

    /// Whether a handler is registered, i.e. whether `parse` can succeed.
    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// The document text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Line the parser has reached. After a successful parse this is the
    /// line of the last consumed byte; before any parse it is 0.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// The error that made the last [`parse`](Self::parse) fail, if any.
    pub fn error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    /// Parse the document, reporting to the registered handler.
    ///
    /// Returns `false` without emitting anything when no handler is
    /// registered; the reason is then available from
    /// [`error`](Self::error). Every other input parses successfully.
    ///
    /// Each call scans the document from the beginning and resets the line
    /// counter.
    pub fn parse(&mut self) -> bool {
        let Some(handler) = self.handler.as_deref_mut() else {
            warn!("parse called without a handler");
            self.error = Some(ParseError::NoHandler);
            return false;
        };
        self.error = None;

        handler.start_document();

        let mut scanner = Scanner::new(self.text.as_bytes());
        let mut specifiers = 0usize;
        for specifier in scanner.by_ref() {
            if let Some(comment) = &specifier.comment {
                handler.comment(comment);
            }
            let Tag {
                field_name,
                length,
                data_type,
            } = specifier.tag;
            handler.start_data_specifier(field_name, length, data_type);
            if let Some(payload) = &specifier.payload {
                handler.data(payload);
            }
            handler.end_data_specifier(field_name);
            specifiers += 1;
        }
        self.line_number = scanner.line();

        debug!(specifiers, lines = self.line_number, "parsed ADI document");
        handler.end_document();
        true
    }
}

impl std::fmt::Debug for Parser<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("len", &self.text.len())
            .field("has_handler", &self.handler.is_some())
            .field("line_number", &self.line_number)
            .field("error", &self.error)
            .finish()
    }
}

/// One data-specifier with the comment text before it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Specifier<'s> {
    /// Present only if it holds a non-whitespace character.
    comment: Option<Cow<'s, str>>,
    tag: Tag<'s>,
    /// Present only if the declared length is non-zero.
    payload: Option<Cow<'s, str>>,
}

/// Cursor over the document bytes.
///
/// The cursor only moves forward. Text between the last tag (or payload)
/// and the end of the input is never yielded.
struct Scanner<'s> {
    input: &'s [u8],
    pos: usize,
    line: usize,
}

impl<'s> Scanner<'s> {
    fn new(input: &'s [u8]) -> Self {
        Self { input, pos: 0, line: 1 }
    }

    #[inline]
    fn rest(&self) -> &'s [u8] {
        &self.input[self.pos..]
    }

    #[inline]
    fn line(&self) -> usize {
        self.line
    }

    /// Take `len` bytes as a payload. Slicing is by byte, so a payload may
    /// end inside a multi-byte character; the partial character decodes
    /// as U+FFFD on both sides of the cut.
    fn take_payload(&mut self, field_name: &str, len: usize) -> Cow<'s, str> {
        let rest = self.rest();
        if len > rest.len() {
            warn!(
                field_name,
                declared = len,
                available = rest.len(),
                line = self.line,
                "payload runs past end of input"
            );
        }
        let bytes = &rest[..len.min(rest.len())];
        self.pos += bytes.len();
        self.line += count_line_breaks(bytes);
        String::from_utf8_lossy(bytes)
    }
}

impl<'s> Iterator for Scanner<'s> {
    type Item = Specifier<'s>;

    fn next(&mut self) -> Option<Specifier<'s>> {
        let rest = self.rest();
        let found = find_tag(rest)?;

        self.line += count_line_breaks(&rest[..found.consumed()]);
        self.pos += found.consumed();

        let comment = String::from_utf8_lossy(found.comment);
        let comment = comment.chars().any(|c| !c.is_whitespace()).then_some(comment);

        let tag = found.tag;
        trace!(
            field_name = tag.field_name,
            length = ?tag.length,
            data_type = ?tag.data_type,
            line = self.line,
            "data-specifier"
        );

        let payload = match tag.length {
            Some(len) if len > 0 => Some(self.take_payload(tag.field_name, len)),
            _ => None,
        };

        Some(Specifier {
            comment,
            tag,
            payload,
        })
    }
}
