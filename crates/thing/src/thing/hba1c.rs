//! Glycated hemoglobin (HbA1C) result.

use std::fmt;
use std::io::Write;

use uuid::uuid;
use vital_xml::{Element, ParseResult, WriteResult, XmlWriter, require_field};

use crate::ThingType;
use crate::item::{CodableValue, DateTime};
use crate::text;
use crate::type_id::TypeId;
use crate::values::Fraction;

/// An HbA1C assay result. The value is the glycated fraction (0–1), written
/// as a bare decimal: a reading of 6.5% is `<value>0.065</value>`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HbA1C {
    /// When the sample was taken. Mandatory.
    pub when: Option<DateTime>,
    /// Glycated hemoglobin fraction. Mandatory.
    pub value: Option<Fraction>,
    /// The assay method used.
    pub assay_method: Option<CodableValue>,
}

impl HbA1C {
    pub fn new(when: DateTime, value: Fraction) -> Self {
        Self {
            when: Some(when),
            value: Some(value),
            assay_method: None,
        }
    }
}

impl ThingType for HbA1C {
    const TYPE_ID: TypeId = TypeId::new(uuid!("227f55fb-1001-4d4e-9f6a-8d893e07b451"));
    const ROOT: &'static str = "HbA1C";

    fn parse_xml(node: &Element) -> ParseResult<Self> {
        let value_node = node.require("value")?;
        let value = Fraction::new(value_node.decimal()?)
            .map_err(|e| value_node.invalid(e.to_string()))?;
        Ok(Self {
            when: Some(node.req_item("when")?),
            value: Some(value),
            assay_method: node.opt_item("HbA1C-assay-method")?,
        })
    }

    fn write_xml<W: Write>(&self, writer: &mut XmlWriter<W>) -> WriteResult<()> {
        let when = require_field(&self.when, Self::ROOT, "when")?;
        let value = require_field(&self.value, Self::ROOT, "value")?;
        writer.element(Self::ROOT, |w| {
            w.item("when", when)?;
            w.decimal_element("value", value.get())?;
            w.opt_item("HbA1C-assay-method", self.assay_method.as_ref())
        })
    }
}

impl fmt::Display for HbA1C {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        if let Some(value) = &self.value {
            parts.push(format!(
                "{}{}",
                value.as_percent().normalize(),
                text::lookup("unit.percent")
            ));
        }
        if let Some(method) = &self.assay_method {
            parts.push(method.to_string());
        }
        f.write_str(&parts.join(text::list_separator()))
    }
}
