//! Event-based XML writer with present-only optional element helpers.
//!
//! The `opt_*` family is the write half of the mapping convention: a `None`
//! value emits nothing at all, so absence round-trips as absence.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use rust_decimal::Decimal;

use crate::ItemXml;
use crate::error::{WriteError, WriteResult};

/// Thin wrapper over `quick_xml::Writer` that keeps thing serialization code
/// free of event bookkeeping.
pub struct XmlWriter<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> XmlWriter<W> {
    /// Creates a writer over the given sink.
    pub fn new(sink: W) -> Self {
        Self {
            writer: Writer::new(sink),
        }
    }

    /// Writes `<name>`, runs `body` for the children, then writes `</name>`.
    pub fn element<F>(&mut self, name: &str, body: F) -> WriteResult<()>
    where
        F: FnOnce(&mut Self) -> WriteResult<()>,
    {
        self.writer.write_event(Event::Start(BytesStart::new(name)))?;
        body(self)?;
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    /// Like [`element`](Self::element), with attributes on the start tag.
    pub fn element_with<F>(&mut self, name: &str, attrs: &[(&str, &str)], body: F) -> WriteResult<()>
    where
        F: FnOnce(&mut Self) -> WriteResult<()>,
    {
        let mut start = BytesStart::new(name);
        for (key, value) in attrs {
            start.push_attribute((*key, *value));
        }
        self.writer.write_event(Event::Start(start))?;
        body(self)?;
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    /// Writes escaped character data at the current position.
    pub fn text(&mut self, text: &str) -> WriteResult<()> {
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        Ok(())
    }

    /// Writes `<name>text</name>`.
    pub fn text_element(&mut self, name: &str, text: &str) -> WriteResult<()> {
        self.element(name, |w| w.text(text))
    }

    /// Writes a decimal element using invariant formatting (`.` separator, no
    /// grouping), e.g. `<value>0.065</value>`.
    pub fn decimal_element(&mut self, name: &str, value: Decimal) -> WriteResult<()> {
        self.text_element(name, &value.to_string())
    }

    /// Writes an integer element.
    pub fn int_element(&mut self, name: &str, value: i64) -> WriteResult<()> {
        self.text_element(name, &value.to_string())
    }

    /// Writes a boolean element using the fixed lexical forms `true`/`false`.
    pub fn bool_element(&mut self, name: &str, value: bool) -> WriteResult<()> {
        self.text_element(name, if value { "true" } else { "false" })
    }

    /// Writes a text element only when the value is present.
    pub fn opt_text_element(&mut self, name: &str, value: Option<&str>) -> WriteResult<()> {
        match value {
            Some(text) => self.text_element(name, text),
            None => Ok(()),
        }
    }

    /// Writes a decimal element only when the value is present.
    pub fn opt_decimal_element(&mut self, name: &str, value: Option<Decimal>) -> WriteResult<()> {
        match value {
            Some(value) => self.decimal_element(name, value),
            None => Ok(()),
        }
    }

    /// Writes an integer element only when the value is present.
    pub fn opt_int_element(&mut self, name: &str, value: Option<i64>) -> WriteResult<()> {
        match value {
            Some(value) => self.int_element(name, value),
            None => Ok(()),
        }
    }

    /// Writes a boolean element only when the value is present.
    pub fn opt_bool_element(&mut self, name: &str, value: Option<bool>) -> WriteResult<()> {
        match value {
            Some(value) => self.bool_element(name, value),
            None => Ok(()),
        }
    }

    /// Delegates serialization of a child item under the given element name.
    pub fn item<T: ItemXml>(&mut self, name: &str, item: &T) -> WriteResult<()> {
        item.write_xml(name, self)
    }

    /// Delegates serialization of an optional child item; `None` emits
    /// nothing.
    pub fn opt_item<T: ItemXml>(&mut self, name: &str, item: Option<&T>) -> WriteResult<()> {
        match item {
            Some(item) => item.write_xml(name, self),
            None => Ok(()),
        }
    }

    /// Writes every item in a collection under the same repeated element
    /// name. An empty collection emits nothing.
    pub fn items<T: ItemXml>(&mut self, name: &str, items: &[T]) -> WriteResult<()> {
        for item in items {
            item.write_xml(name, self)?;
        }
        Ok(())
    }
}

/// Unwraps a mandatory field or fails with the serialization-state error
/// naming the thing and the unset field.
///
/// This is deliberately distinct from both the structural parse errors and the
/// argument/range errors raised at construction time: the object was valid as
/// far as every local constructor was concerned, but it is incomplete for the
/// wire contract.
pub fn require_field<'a, T>(
    field: &'a Option<T>,
    thing: &'static str,
    name: &'static str,
) -> WriteResult<&'a T> {
    field.as_ref().ok_or(WriteError::MissingField {
        thing,
        field: name,
    })
}

/// Serializes a single item to a string under the given element name.
pub fn to_xml_string<T: ItemXml>(name: &str, item: &T) -> WriteResult<String> {
    let mut buffer = Vec::new();
    {
        let mut writer = XmlWriter::new(&mut buffer);
        item.write_xml(name, &mut writer)?;
    }
    String::from_utf8(buffer)
        .map_err(|e| WriteError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(body: F) -> String
    where
        F: FnOnce(&mut XmlWriter<&mut Vec<u8>>) -> WriteResult<()>,
    {
        let mut buffer = Vec::new();
        {
            let mut writer = XmlWriter::new(&mut buffer);
            body(&mut writer).unwrap();
        }
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn optional_none_emits_nothing() {
        let xml = render(|w| {
            w.element("exercise", |w| {
                w.opt_text_element("title", None)?;
                w.opt_decimal_element("duration", None)?;
                w.opt_bool_element("is-control-test", None)
            })
        });
        assert_eq!(xml, "<exercise></exercise>");
    }

    #[test]
    fn optional_some_emits_the_element() {
        let xml = render(|w| {
            w.element("exercise", |w| {
                w.opt_text_element("title", Some("Morning walk"))?;
                w.opt_decimal_element("duration", Some("32.5".parse().unwrap()))
            })
        });
        assert_eq!(
            xml,
            "<exercise><title>Morning walk</title><duration>32.5</duration></exercise>"
        );
    }

    #[test]
    fn decimal_formatting_is_invariant() {
        let xml = render(|w| w.decimal_element("value", "1234.5".parse().unwrap()));
        assert_eq!(xml, "<value>1234.5</value>");
    }

    #[test]
    fn text_is_escaped() {
        let xml = render(|w| w.text_element("title", "Fish & chips"));
        assert_eq!(xml, "<title>Fish &amp; chips</title>");
    }

    #[test]
    fn attributes_are_written_on_the_start_tag() {
        let xml = render(|w| w.element_with("display", &[("units", "kg")], |w| w.text("84")));
        assert_eq!(xml, "<display units=\"kg\">84</display>");
    }

    #[test]
    fn require_field_reports_the_unset_field() {
        let unset: Option<i64> = None;
        let err = require_field(&unset, "weight", "value").unwrap_err();
        match err {
            WriteError::MissingField { thing, field } => {
                assert_eq!(thing, "weight");
                assert_eq!(field, "value");
            }
            other => panic!("expected MissingField, got {other:?}"),
        }
    }
}
