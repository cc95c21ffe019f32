//! Wire-side error types.
//!
//! Two categories that are never merged: [`ParseError`] for malformed or
//! structurally incomplete input, and [`WriteError`] for objects that are
//! incomplete for the wire contract. Argument/range violations raised while
//! *constructing* values are a third, separate kind owned by the model crate.

use thiserror::Error;

/// Result alias for parse operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Result alias for write operations.
pub type WriteResult<T> = Result<T, WriteError>;

/// A structural or lexical problem in input XML.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The XML tokenizer rejected the document.
    #[error("malformed XML: {0}")]
    Malformed(#[from] quick_xml::Error),

    /// The document ended inside an open element.
    #[error("document ended before the root element was closed")]
    UnexpectedEof,

    /// The document contained no root element.
    #[error("expected a single root element")]
    MissingRoot,

    /// The root element does not match the thing type being parsed.
    #[error("unexpected root element <{found}>, expected <{expected}>")]
    UnexpectedRoot {
        expected: &'static str,
        found: String,
    },

    /// A mandatory child element was absent.
    #[error("missing required element <{element}> under <{parent}>")]
    MissingElement {
        parent: String,
        element: &'static str,
    },

    /// A mandatory attribute was absent.
    #[error("missing required attribute `{attribute}` on <{element}>")]
    MissingAttribute {
        element: String,
        attribute: &'static str,
    },

    /// Element text could not be interpreted as the target type.
    #[error("invalid value in <{element}>: {reason}")]
    InvalidText { element: String, reason: String },

    /// No thing type is registered for the given type identifier.
    #[error("unknown thing type identifier {type_id}")]
    UnknownTypeId { type_id: String },
}

/// A failure to serialize an object to the wire format.
#[derive(Error, Debug)]
pub enum WriteError {
    /// The object is missing a mandatory field and cannot satisfy the wire
    /// contract. The object itself was constructible and locally valid; it is
    /// merely incomplete.
    #[error("cannot serialize {thing}: mandatory field `{field}` is not set")]
    MissingField {
        thing: &'static str,
        field: &'static str,
    },

    /// The XML writer rejected an event.
    #[error("XML write error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The underlying output sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
