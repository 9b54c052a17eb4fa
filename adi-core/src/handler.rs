//! The callback interface between the parser and its consumer.

use crate::error::ParseError;

/// Receives notifications while a document is parsed.
///
/// Every method has an empty default, so implementors override only the
/// hooks they care about. Callbacks arrive strictly in document order:
///
/// ```text
/// start_document
///   ( comment? start_data_specifier data? end_data_specifier )*
/// end_document
/// ```
///
/// String arguments borrow from the parser for the duration of the call.
///
/// Closures taking an [`Event`](crate::Event) implement this trait too.
pub trait Handler {
    /// Called once before anything else.
    fn start_document(&mut self) {}

    /// Called once after the last data-specifier. Trailing text after the
    /// final tag is not reported.
    fn end_document(&mut self) {}

    /// A tag was matched. `length` is the declared byte length of the
    /// payload, `data_type` the indicator letter exactly as written.
    #[allow(unused_variables)]
    fn start_data_specifier(&mut self, field_name: &str, length: Option<usize>, data_type: Option<char>) {}

    /// The payload of the current data-specifier. Only called when the
    /// declared length is greater than zero.
    #[allow(unused_variables)]
    fn data(&mut self, payload: &str) {}

    #[allow(unused_variables)]
    fn end_data_specifier(&mut self, field_name: &str) {}

    /// Text between data-specifiers containing at least one non-whitespace
    /// character, passed through verbatim with its surrounding whitespace.
    #[allow(unused_variables)]
    fn comment(&mut self, text: &str) {}

    /// Reserved for fatal errors. A missing handler is reported through
    /// [`Parser::error`](crate::Parser::error) instead, since there is no
    /// one to call.
    #[allow(unused_variables)]
    fn parse_error(&mut self, error: &ParseError) {}
}
