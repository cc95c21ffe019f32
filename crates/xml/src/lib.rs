//! XML wire mapping convention for Vital thing types.
//!
//! Every thing type on the platform round-trips through the same small set of
//! rules, and this crate is where those rules live:
//!
//! - **Read defensively**: parsing navigates an in-memory [`Element`] tree.
//!   An absent optional element leaves the corresponding field at its default
//!   (`None` or an empty collection); an absent *mandatory* element fails with
//!   [`ParseError::MissingElement`] naming the expected node.
//! - **Write only what is present**: the [`XmlWriter`] helpers emit an element
//!   only when the value is set, so round-tripping an object with unset
//!   optional fields never introduces spurious elements.
//! - **Invariant numerics**: all wire-borne numbers go through
//!   `rust_decimal::Decimal`, whose textual form always uses `.` as the
//!   decimal separator and no grouping, regardless of host locale.
//!
//! ## Wire shape
//!
//! | in memory | on the wire |
//! |-----------|-------------|
//! | `value: Some(dec!(5.5))` | `<value>5.5</value>` |
//! | `value: None` | *(nothing)* |
//! | `is_control_test: Some(true)` | `<is-control-test>true</is-control-test>` |
//! | display value with units | `<display units="kg" units-code="kg">84</display>` |
//!
//! ## Error kinds
//!
//! Wire-side failures come in exactly two flavors, and they are never
//! conflated with each other or with value-construction errors:
//!
//! - [`ParseError`] — malformed or structurally incomplete *input* XML.
//! - [`WriteError`] — an *object* that is incomplete for the wire contract,
//!   most prominently [`WriteError::MissingField`] when a mandatory field is
//!   unset at serialization time.

pub mod error;
pub mod node;
pub mod writer;

pub use error::{ParseError, ParseResult, WriteError, WriteResult};
pub use node::Element;
pub use writer::{XmlWriter, require_field, to_xml_string};

use std::io::Write;

/// The shared parse/write capability implemented by every reusable
/// sub-structure ("item") embedded in thing types.
///
/// The element name is supplied by the embedding composite on the write side
/// because the same item type appears under many names (a codable value may be
/// an `<activity>`, a `<name>`, a `<route>`, ...). On the read side the caller
/// has already located the element, so `parse_xml` receives the node itself.
/// This keeps each item's XML shape defined in exactly one place and reused by
/// every composite that embeds it.
pub trait ItemXml: Sized {
    /// Parses one instance from the given element.
    fn parse_xml(node: &Element) -> ParseResult<Self>;

    /// Writes this instance as a single element named `name`.
    fn write_xml<W: Write>(&self, name: &str, writer: &mut XmlWriter<W>) -> WriteResult<()>;
}
