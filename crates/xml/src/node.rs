//! In-memory element tree built from quick-xml events.
//!
//! Thing parsing is navigation-heavy (find a child by name, read its text,
//! recurse into its children), so the reader materializes each fragment as a
//! small [`Element`] tree up front rather than streaming events through every
//! composite. Fragments on this platform are a few hundred bytes, which makes
//! the tree cheaper than threading reader state through the type hierarchy.

use quick_xml::Reader;
use quick_xml::escape::{EscapeError, resolve_predefined_entity};
use quick_xml::events::{BytesStart, Event};
use rust_decimal::Decimal;

use crate::ItemXml;
use crate::error::{ParseError, ParseResult};

/// One XML element: name, attributes, accumulated text, and child elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    /// Parses an XML document into its root element.
    ///
    /// Comments, processing instructions, and the XML declaration are
    /// skipped. Text content is unescaped and whitespace-trimmed.
    pub fn parse(xml: &str) -> ParseResult<Element> {
        let mut reader = Reader::from_str(xml);

        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event()? {
                Event::Start(start) => stack.push(Element::from_start(&start)?),
                Event::Empty(start) => {
                    let element = Element::from_start(&start)?;
                    Element::attach(element, &mut stack, &mut root)?;
                }
                Event::End(_) => {
                    // quick-xml guarantees tag balance, so the stack is
                    // non-empty whenever an End event is delivered.
                    let element = stack.pop().ok_or(ParseError::MissingRoot)?;
                    Element::attach(element, &mut stack, &mut root)?;
                }
                Event::Text(text) => {
                    if let Some(current) = stack.last_mut() {
                        let unescaped = text.xml_content().map_err(quick_xml::Error::from)?;
                        current.text.push_str(unescaped.as_ref());
                    }
                }
                Event::GeneralRef(reference) => {
                    // quick-xml 0.38 delivers `&...;` references as their own
                    // event instead of unescaping them inside `Text`.
                    if let Some(current) = stack.last_mut() {
                        if let Some(ch) = reference.resolve_char_ref()? {
                            current.text.push(ch);
                        } else {
                            let name =
                                reference.xml_content().map_err(quick_xml::Error::from)?;
                            let resolved = resolve_predefined_entity(&name).ok_or_else(|| {
                                let pos = reader.buffer_position() as usize;
                                quick_xml::Error::Escape(EscapeError::UnrecognizedEntity(
                                    pos..pos,
                                    name.to_string(),
                                ))
                            })?;
                            current.text.push_str(resolved);
                        }
                    }
                }
                Event::CData(data) => {
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&String::from_utf8_lossy(&data));
                    }
                }
                Event::Eof => break,
                // Decl, comments, PIs, doctypes carry no model data.
                _ => {}
            }
        }

        if !stack.is_empty() {
            return Err(ParseError::UnexpectedEof);
        }
        root.ok_or(ParseError::MissingRoot)
    }

    fn from_start(start: &BytesStart<'_>) -> ParseResult<Element> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(quick_xml::Error::from)?
                .into_owned();
            attributes.push((key, value));
        }
        Ok(Element {
            name,
            attributes,
            text: String::new(),
            children: Vec::new(),
        })
    }

    fn attach(
        mut element: Element,
        stack: &mut Vec<Element>,
        root: &mut Option<Element>,
    ) -> ParseResult<()> {
        // Trim once per element; quick-xml 0.38 splits text at entity
        // references, so per-event trimming would eat interior whitespace.
        let trimmed = element.text.trim();
        if trimmed.len() != element.text.len() {
            element.text = trimmed.to_string();
        }
        match stack.last_mut() {
            Some(parent) => parent.children.push(element),
            None if root.is_none() => *root = Some(element),
            None => return Err(ParseError::MissingRoot),
        }
        Ok(())
    }

    /// The element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The concatenated, unescaped text content of this element.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// All child elements in document order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Looks up an attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Looks up a mandatory attribute, failing with
    /// [`ParseError::MissingAttribute`] when absent.
    pub fn require_attribute(&self, name: &'static str) -> ParseResult<&str> {
        self.attribute(name)
            .ok_or_else(|| ParseError::MissingAttribute {
                element: self.name.clone(),
                attribute: name,
            })
    }

    /// Finds the first child element with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Iterates over all child elements with the given name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Finds a mandatory child element, failing with
    /// [`ParseError::MissingElement`] naming the expected node when absent.
    pub fn require(&self, name: &'static str) -> ParseResult<&Element> {
        self.child(name).ok_or_else(|| ParseError::MissingElement {
            parent: self.name.clone(),
            element: name,
        })
    }

    /// Builds an [`ParseError::InvalidText`] tied to this element.
    pub fn invalid(&self, reason: impl Into<String>) -> ParseError {
        ParseError::InvalidText {
            element: self.name.clone(),
            reason: reason.into(),
        }
    }

    /// Interprets the element text as a decimal number.
    ///
    /// `Decimal` parsing is culture-invariant: only `.` is accepted as the
    /// decimal separator and grouping separators are rejected, so values
    /// round-trip identically on every host locale.
    pub fn decimal(&self) -> ParseResult<Decimal> {
        self.text
            .trim()
            .parse::<Decimal>()
            .map_err(|e| self.invalid(e.to_string()))
    }

    /// Interprets the element text as an integer.
    pub fn int(&self) -> ParseResult<i64> {
        self.text
            .trim()
            .parse::<i64>()
            .map_err(|e| self.invalid(e.to_string()))
    }

    /// Interprets the element text as a boolean.
    ///
    /// Only the fixed lexical forms `true` and `false` are accepted.
    pub fn boolean(&self) -> ParseResult<bool> {
        match self.text.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(self.invalid(format!("expected `true` or `false`, got `{other}`"))),
        }
    }

    /// Reads an optional child item, returning `Ok(None)` when the element is
    /// absent.
    pub fn opt_item<T: ItemXml>(&self, name: &str) -> ParseResult<Option<T>> {
        self.child(name).map(T::parse_xml).transpose()
    }

    /// Reads a mandatory child item.
    pub fn req_item<T: ItemXml>(&self, name: &'static str) -> ParseResult<T> {
        T::parse_xml(self.require(name)?)
    }

    /// Reads all repeated child items with the given name. An empty result is
    /// not an error; mandatory-collection enforcement happens at write time.
    pub fn items<T: ItemXml>(&self, name: &str) -> ParseResult<Vec<T>> {
        self.children_named(name).map(T::parse_xml).collect()
    }

    /// Reads an optional text child.
    pub fn opt_text_child(&self, name: &str) -> Option<String> {
        self.child(name).map(|child| child.text.clone())
    }

    /// Reads an optional decimal child.
    pub fn opt_decimal_child(&self, name: &str) -> ParseResult<Option<Decimal>> {
        self.child(name).map(Element::decimal).transpose()
    }

    /// Reads an optional integer child.
    pub fn opt_int_child(&self, name: &str) -> ParseResult<Option<i64>> {
        self.child(name).map(Element::int).transpose()
    }

    /// Reads an optional boolean child.
    pub fn opt_bool_child(&self, name: &str) -> ParseResult<Option<bool>> {
        self.child(name).map(Element::boolean).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_elements_with_text_and_attributes() {
        let root = Element::parse(
            r#"<weight><when><date><y>2024</y></date></when><value><kg>84</kg><display units="kg">84</display></value></weight>"#,
        )
        .unwrap();

        assert_eq!(root.name(), "weight");
        let value = root.child("value").unwrap();
        assert_eq!(value.child("kg").unwrap().text(), "84");
        assert_eq!(value.child("display").unwrap().attribute("units"), Some("kg"));
        assert_eq!(
            root.child("when").unwrap().child("date").unwrap().child("y").unwrap().text(),
            "2024"
        );
    }

    #[test]
    fn absent_child_is_none_but_require_names_the_node() {
        let root = Element::parse("<exercise><title>Walk</title></exercise>").unwrap();
        assert!(root.child("duration").is_none());

        let err = root.require("duration").unwrap_err();
        match err {
            ParseError::MissingElement { parent, element } => {
                assert_eq!(parent, "exercise");
                assert_eq!(element, "duration");
            }
            other => panic!("expected MissingElement, got {other:?}"),
        }
    }

    #[test]
    fn decimal_text_is_invariant() {
        let root = Element::parse("<value>0.065</value>").unwrap();
        assert_eq!(root.decimal().unwrap().to_string(), "0.065");

        // Locale-style comma input is rejected, not silently reinterpreted.
        let root = Element::parse("<value>0,065</value>").unwrap();
        assert!(matches!(
            root.decimal().unwrap_err(),
            ParseError::InvalidText { .. }
        ));
    }

    #[test]
    fn boolean_text_is_strict() {
        let root = Element::parse("<flag>true</flag>").unwrap();
        assert!(root.boolean().unwrap());

        let root = Element::parse("<flag>TRUE</flag>").unwrap();
        assert!(matches!(
            root.boolean().unwrap_err(),
            ParseError::InvalidText { .. }
        ));
    }

    #[test]
    fn repeated_children_keep_document_order() {
        let root = Element::parse("<basic><language>en</language><language>fr</language></basic>")
            .unwrap();
        let languages: Vec<&str> = root.children_named("language").map(Element::text).collect();
        assert_eq!(languages, ["en", "fr"]);
    }

    #[test]
    fn text_entities_are_unescaped() {
        let root = Element::parse("<title>Fish &amp; chips</title>").unwrap();
        assert_eq!(root.text(), "Fish & chips");
    }

    #[test]
    fn empty_document_has_no_root() {
        assert!(matches!(
            Element::parse("   ").unwrap_err(),
            ParseError::MissingRoot
        ));
    }
}
