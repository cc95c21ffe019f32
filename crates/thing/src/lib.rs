//! Typed health-record thing types for the Vital platform.
//!
//! Each thing type represents one discrete health-record entry (a blood
//! glucose reading, an exercise session, a medication, ...), tagged with a
//! 128-bit [`TypeId`] that identifies the schema it conforms to. A thing
//! knows how to parse itself from an XML fragment and how to serialize itself
//! back to the platform wire format; everything else — transport, storage,
//! business rules — lives outside this crate.
//!
//! ## Structure
//!
//! - [`values`] — validated scalar newtypes whose constructors reject invalid
//!   input immediately (argument/range errors), so invalid states are
//!   unrepresentable once constructed.
//! - [`vocab`] — closed coded vocabularies with a forward-compatible
//!   fallback: wire text outside the known set parses to
//!   [`vocab::Coded::Unrecognized`] carrying the original literal, never an
//!   error.
//! - [`item`] — reusable sub-structures (codable values, structured
//!   date/times, measurements) embedded by many things and (de)serialized in
//!   exactly one place each.
//! - [`thing`] — the thing types themselves.
//! - [`registry`] — the [`Thing`] tagged union, dispatched once at the
//!   boundary where raw XML is routed by type identifier.
//! - [`text`] — the process-wide, read-only localization table used by the
//!   `Display` summaries.
//!
//! ## Mandatory vs. optional fields
//!
//! Mandatory fields are `Option` in the structs because a default-constructed
//! thing may legitimately be incomplete while it is being filled in; the wire
//! contract is enforced when `write_xml` is called, which fails with
//! `WriteError::MissingField` rather than emitting an empty element.

pub mod error;
pub mod item;
pub mod registry;
pub mod text;
pub mod thing;
pub mod type_id;
pub mod values;
pub mod vocab;

pub use error::ValueError;
pub use registry::Thing;
pub use type_id::TypeId;

use std::io::Write;

use vital_xml::{Element, ParseError, ParseResult, WriteError, WriteResult, XmlWriter};

/// The capability shared by every thing type: a schema identifier, a fixed
/// root element name, and the parse/write pair.
///
/// Unlike [`vital_xml::ItemXml`], a thing owns its root element name — the
/// outer element is part of the type's wire identity, not chosen by an
/// embedding composite.
pub trait ThingType: Sized {
    /// The GUID identifying the schema this type conforms to.
    const TYPE_ID: TypeId;

    /// The outer wire element name, e.g. `blood-glucose`.
    const ROOT: &'static str;

    /// Parses one instance from the root element of a fragment.
    fn parse_xml(node: &Element) -> ParseResult<Self>;

    /// Serializes this instance, including its root element.
    ///
    /// Fails with `WriteError::MissingField` when a mandatory field is unset.
    fn write_xml<W: Write>(&self, writer: &mut XmlWriter<W>) -> WriteResult<()>;

    /// Parses an instance from an XML string, checking the root element name.
    fn from_xml_str(xml: &str) -> ParseResult<Self> {
        let root = Element::parse(xml)?;
        if root.name() != Self::ROOT {
            return Err(ParseError::UnexpectedRoot {
                expected: Self::ROOT,
                found: root.name().to_owned(),
            });
        }
        Self::parse_xml(&root)
    }

    /// Serializes this instance to an XML string.
    fn to_xml_string(&self) -> WriteResult<String> {
        let mut buffer = Vec::new();
        {
            let mut writer = XmlWriter::new(&mut buffer);
            self.write_xml(&mut writer)?;
        }
        String::from_utf8(buffer)
            .map_err(|e| WriteError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }
}
