//! ADI Core Parser
//!
//! Event-driven parser for ADI, the tag-delimited text format of ADIF
//! (Amateur Data Interchange Format). Reports comments and data-specifiers
//! to a [`Handler`] without building records.
//!
//! # Architecture
//!
//! - **grammar.rs** - Tag grammar `<name[:length[:type]]>`, earliest-match search
//! - **parser.rs** - Scan engine: cursor, line counter, byte-exact payloads
//! - **handler.rs** - Callback trait implemented by consumers
//! - **event.rs** - Event enum, closure handlers, EventLog recorder
//! - **lines.rs** - Line-terminator counting
//! - **data_type.rs** - Data type indicator letters
//! - **error.rs** - ParseError and LoadError

pub mod data_type;
pub mod error;
pub mod event;
pub mod grammar;
pub mod handler;
pub mod lines;
pub mod parser;

pub use data_type::DataType;
pub use error::{LoadError, ParseError};
pub use event::{Event, EventLog};
pub use grammar::{find_tag, Tag, TagMatch};
pub use handler::Handler;
pub use parser::Parser;
