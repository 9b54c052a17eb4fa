//! Parser events - one value per handler callback.
//!
//! This is a SAX-style event model: events are emitted as the parser
//! encounters syntax, with no accumulation. Each data-specifier is
//! represented by a start/end pair.
//!
//! For `<CALL:6>JS2PBF` the stream is:
//! ```text
//! DataSpecifierStart { field_name: "CALL", length: Some(6), data_type: None }
//! Data("JS2PBF")
//! DataSpecifierEnd { field_name: "CALL" }
//! ```
//!
//! Any closure taking an [`Event`] is a [`Handler`](crate::Handler), and
//! [`EventLog`] records owned events for later inspection.

use std::borrow::Cow;

use crate::error::ParseError;
use crate::handler::Handler;

/// Parser events.
///
/// Text fields borrow from the callback arguments; call
/// [`into_owned`](Event::into_owned) to keep an event past the callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<'a> {
    DocumentStart,

    DocumentEnd,

    /// Tag `<name[:length[:type]]>`
    DataSpecifierStart {
        field_name: Cow<'a, str>,
        length: Option<usize>,
        data_type: Option<char>,
    },

    /// Payload following a tag with a non-zero length
    Data(Cow<'a, str>),

    DataSpecifierEnd {
        field_name: Cow<'a, str>,
    },

    /// Text outside data-specifiers that is not all whitespace
    Comment(Cow<'a, str>),

    /// Fatal error
    Error(ParseError),
}

impl<'a> Event<'a> {
    /// Detach the event from the borrowed callback arguments.
    pub fn into_owned(self) -> Event<'static> {
        match self {
            Event::DocumentStart => Event::DocumentStart,
            Event::DocumentEnd => Event::DocumentEnd,
            Event::DataSpecifierStart {
                field_name,
                length,
                data_type,
            } => Event::DataSpecifierStart {
                field_name: Cow::Owned(field_name.into_owned()),
                length,
                data_type,
            },
            Event::Data(payload) => Event::Data(Cow::Owned(payload.into_owned())),
            Event::DataSpecifierEnd { field_name } => Event::DataSpecifierEnd {
                field_name: Cow::Owned(field_name.into_owned()),
            },
            Event::Comment(text) => Event::Comment(Cow::Owned(text.into_owned())),
            Event::Error(error) => Event::Error(error),
        }
    }

    /// Check if this is an error event.
    pub fn is_error(&self) -> bool {
        matches!(self, Event::Error(_))
    }

    /// Check if this event opens a structure closed by a later event.
    pub fn is_structure_start(&self) -> bool {
        matches!(self, Event::DocumentStart | Event::DataSpecifierStart { .. })
    }

    /// Check if this event closes a structure.
    pub fn is_structure_end(&self) -> bool {
        matches!(self, Event::DocumentEnd | Event::DataSpecifierEnd { .. })
    }
}

impl<F> Handler for F
where
    F: FnMut(Event<'_>),
{
    fn start_document(&mut self) {
        self(Event::DocumentStart);
    }

    fn end_document(&mut self) {
        self(Event::DocumentEnd);
    }

    fn start_data_specifier(&mut self, field_name: &str, length: Option<usize>, data_type: Option<char>) {
        self(Event::DataSpecifierStart {
            field_name: Cow::Borrowed(field_name),
            length,
            data_type,
        });
    }

    fn data(&mut self, payload: &str) {
        self(Event::Data(Cow::Borrowed(payload)));
    }

    fn end_data_specifier(&mut self, field_name: &str) {
        self(Event::DataSpecifierEnd {
            field_name: Cow::Borrowed(field_name),
        });
    }

    fn comment(&mut self, text: &str) {
        self(Event::Comment(Cow::Borrowed(text)));
    }

    fn parse_error(&mut self, error: &ParseError) {
        self(Event::Error(*error));
    }
}

/// A handler that records every event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<Event<'static>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Event<'static>] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event<'static>> {
        self.events
    }

    /// `(field name, payload)` for every data-specifier, in document order.
    /// Specifiers without a payload are paired with `None`.
    pub fn fields(&self) -> Vec<(&str, Option<&str>)> {
        let mut fields = Vec::new();
        let mut iter = self.events.iter().peekable();
        while let Some(event) = iter.next() {
            if let Event::DataSpecifierStart { field_name, .. } = event {
                let payload = match iter.peek() {
                    Some(Event::Data(payload)) => Some(payload.as_ref()),
                    _ => None,
                };
                fields.push((field_name.as_ref(), payload));
            }
        }
        fields
    }

    /// Texts of all comment events.
    pub fn comments(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Comment(text) => Some(text.as_ref()),
                _ => None,
            })
            .collect()
    }

    fn push(&mut self, event: Event<'_>) {
        self.events.push(event.into_owned());
    }
}

impl Handler for EventLog {
    fn start_document(&mut self) {
        self.push(Event::DocumentStart);
    }

    fn end_document(&mut self) {
        self.push(Event::DocumentEnd);
    }

    fn start_data_specifier(&mut self, field_name: &str, length: Option<usize>, data_type: Option<char>) {
        self.push(Event::DataSpecifierStart {
            field_name: Cow::Borrowed(field_name),
            length,
            data_type,
        });
    }

    fn data(&mut self, payload: &str) {
        self.push(Event::Data(Cow::Borrowed(payload)));
    }

    fn end_data_specifier(&mut self, field_name: &str) {
        self.push(Event::DataSpecifierEnd {
            field_name: Cow::Borrowed(field_name),
        });
    }

    fn comment(&mut self, text: &str) {
        self.push(Event::Comment(Cow::Borrowed(text)));
    }

    fn parse_error(&mut self, error: &ParseError) {
        self.push(Event::Error(*error));
    }
}
