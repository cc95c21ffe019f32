//! Measurement items: a canonical-unit value plus optional display metadata.

use std::fmt;
use std::io::Write;

use rust_decimal::Decimal;
use vital_xml::{Element, ItemXml, ParseResult, WriteResult, XmlWriter};

/// The value as the user entered or saw it, with its unit of measure.
///
/// Wire shape: `<display units="lbs" units-code="x-lbs">185</display>`.
/// The `units` attribute is mandatory, `units-code` optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayValue {
    pub value: Decimal,
    pub units: String,
    pub units_code: Option<String>,
}

impl DisplayValue {
    pub fn new(value: Decimal, units: impl Into<String>) -> Self {
        Self {
            value,
            units: units.into(),
            units_code: None,
        }
    }
}

impl ItemXml for DisplayValue {
    fn parse_xml(node: &Element) -> ParseResult<Self> {
        Ok(Self {
            value: node.decimal()?,
            units: node.require_attribute("units")?.to_owned(),
            units_code: node.attribute("units-code").map(str::to_owned),
        })
    }

    fn write_xml<W: Write>(&self, name: &str, writer: &mut XmlWriter<W>) -> WriteResult<()> {
        let value = self.value.to_string();
        let mut attrs = vec![("units", self.units.as_str())];
        if let Some(code) = &self.units_code {
            attrs.push(("units-code", code.as_str()));
        }
        writer.element_with(name, &attrs, |w| w.text(&value))
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.units)
    }
}

/// A measurement stored in the schema's canonical unit, optionally carrying
/// the display value the user worked in.
///
/// The canonical unit element name varies by schema (`<kg>`, `<m>`,
/// `<mmolPerL>`, ...), so it is supplied by the embedding thing rather than
/// stored here:
///
/// ```xml
/// <value>
///   <kg>84</kg>
///   <display units="lbs" units-code="x-lbs">185</display>
/// </value>
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    /// The value in the canonical unit. Mandatory.
    pub value: Decimal,
    /// The value as entered, when it differs from the canonical unit.
    pub display: Option<DisplayValue>,
}

impl Measurement {
    pub fn new(value: Decimal) -> Self {
        Self {
            value,
            display: None,
        }
    }

    pub fn with_display(value: Decimal, display: DisplayValue) -> Self {
        Self {
            value,
            display: Some(display),
        }
    }

    /// Parses from a wrapping node whose canonical-unit child is named
    /// `canonical`.
    pub fn parse_xml(node: &Element, canonical: &'static str) -> ParseResult<Self> {
        Ok(Self {
            value: node.require(canonical)?.decimal()?,
            display: node.opt_item("display")?,
        })
    }

    /// Writes `<name><canonical>value</canonical>[<display .../>]</name>`.
    pub fn write_xml<W: Write>(
        &self,
        name: &str,
        canonical: &str,
        writer: &mut XmlWriter<W>,
    ) -> WriteResult<()> {
        writer.element(name, |w| {
            w.decimal_element(canonical, self.value)?;
            w.opt_item("display", self.display.as_ref())
        })
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.display {
            Some(display) => write!(f, "{}", display),
            None => write!(f, "{}", self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use vital_xml::{ParseError, XmlWriter};

    fn render(measurement: &Measurement, canonical: &str) -> String {
        let mut buffer = Vec::new();
        {
            let mut writer = XmlWriter::new(&mut buffer);
            measurement.write_xml("value", canonical, &mut writer).unwrap();
        }
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn canonical_only_measurement_omits_display() {
        let xml = render(&Measurement::new(dec!(84)), "kg");
        assert_eq!(xml, "<value><kg>84</kg></value>");
    }

    #[test]
    fn display_value_round_trips_with_attributes() {
        let measurement = Measurement::with_display(
            dec!(83.9),
            DisplayValue {
                value: dec!(185),
                units: "lbs".to_owned(),
                units_code: Some("x-lbs".to_owned()),
            },
        );
        let xml = render(&measurement, "kg");
        assert_eq!(
            xml,
            "<value><kg>83.9</kg><display units=\"lbs\" units-code=\"x-lbs\">185</display></value>"
        );

        let node = Element::parse(&xml).unwrap();
        assert_eq!(Measurement::parse_xml(&node, "kg").unwrap(), measurement);
    }

    #[test]
    fn missing_canonical_element_is_structural() {
        let node = Element::parse("<value><display units=\"kg\">84</display></value>").unwrap();
        assert!(matches!(
            Measurement::parse_xml(&node, "kg").unwrap_err(),
            ParseError::MissingElement { element: "kg", .. }
        ));
    }

    #[test]
    fn display_without_units_attribute_is_structural() {
        let node = Element::parse("<value><kg>84</kg><display>84</display></value>").unwrap();
        assert!(matches!(
            Measurement::parse_xml(&node, "kg").unwrap_err(),
            ParseError::MissingAttribute { attribute: "units", .. }
        ));
    }
}
