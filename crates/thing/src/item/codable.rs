//! Codable values: human-entered text optionally paired with vocabulary
//! codes.

use std::fmt;
use std::io::Write;

use vital_xml::{Element, ItemXml, ParseResult, WriteResult, XmlWriter};

/// One machine code drawn from a named platform vocabulary.
///
/// Wire shape:
///
/// ```xml
/// <code>
///   <value>Walking</value>
///   <family>wc</family>
///   <type>exercise-activities</type>
///   <version>1</version>
/// </code>
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodedValue {
    /// The code itself. Mandatory.
    pub value: String,
    /// The code family (issuing organization), if any.
    pub family: Option<String>,
    /// The vocabulary name, written as `<type>`. Mandatory.
    pub vocabulary: String,
    /// The vocabulary version, if any.
    pub version: Option<String>,
}

impl CodedValue {
    pub fn new(value: impl Into<String>, vocabulary: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            vocabulary: vocabulary.into(),
            family: None,
            version: None,
        }
    }
}

impl ItemXml for CodedValue {
    fn parse_xml(node: &Element) -> ParseResult<Self> {
        Ok(Self {
            value: node.require("value")?.text().to_owned(),
            family: node.opt_text_child("family"),
            vocabulary: node.require("type")?.text().to_owned(),
            version: node.opt_text_child("version"),
        })
    }

    fn write_xml<W: Write>(&self, name: &str, writer: &mut XmlWriter<W>) -> WriteResult<()> {
        writer.element(name, |w| {
            w.text_element("value", &self.value)?;
            w.opt_text_element("family", self.family.as_deref())?;
            w.text_element("type", &self.vocabulary)?;
            w.opt_text_element("version", self.version.as_deref())
        })
    }
}

/// Display text plus zero or more machine codes.
///
/// Used wherever a field may be both human-entered text and machine-coded
/// (activity names, medication names, allergy reactions, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodableValue {
    /// The display text. Mandatory.
    pub text: String,
    /// Machine codes for the text, in document order.
    pub codes: Vec<CodedValue>,
}

impl CodableValue {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            codes: Vec::new(),
        }
    }

    pub fn with_code(text: impl Into<String>, code: CodedValue) -> Self {
        Self {
            text: text.into(),
            codes: vec![code],
        }
    }
}

impl ItemXml for CodableValue {
    fn parse_xml(node: &Element) -> ParseResult<Self> {
        Ok(Self {
            text: node.require("text")?.text().to_owned(),
            codes: node.items("code")?,
        })
    }

    fn write_xml<W: Write>(&self, name: &str, writer: &mut XmlWriter<W>) -> WriteResult<()> {
        writer.element(name, |w| {
            w.text_element("text", &self.text)?;
            w.items("code", &self.codes)
        })
    }
}

impl fmt::Display for CodableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vital_xml::{ParseError, to_xml_string};

    #[test]
    fn codable_value_round_trips_with_codes() {
        let value = CodableValue::with_code(
            "Walking",
            CodedValue {
                value: "Walking".to_owned(),
                family: Some("wc".to_owned()),
                vocabulary: "exercise-activities".to_owned(),
                version: Some("1".to_owned()),
            },
        );
        let xml = to_xml_string("activity", &value).unwrap();
        assert_eq!(
            xml,
            "<activity><text>Walking</text><code><value>Walking</value><family>wc</family>\
             <type>exercise-activities</type><version>1</version></code></activity>"
        );

        let reparsed = CodableValue::parse_xml(&Element::parse(&xml).unwrap()).unwrap();
        assert_eq!(reparsed, value);
    }

    #[test]
    fn text_only_codable_value_omits_codes() {
        let xml = to_xml_string("name", &CodableValue::new("Aspirin")).unwrap();
        assert_eq!(xml, "<name><text>Aspirin</text></name>");
    }

    #[test]
    fn missing_text_is_a_structural_error() {
        let node = Element::parse("<name><code><value>x</value><type>v</type></code></name>").unwrap();
        assert!(matches!(
            CodableValue::parse_xml(&node).unwrap_err(),
            ParseError::MissingElement { element: "text", .. }
        ));
    }
}
