//! Blood glucose reading.

use std::fmt;
use std::io::Write;

use uuid::uuid;
use vital_xml::{Element, ParseResult, WriteResult, XmlWriter, require_field};

use crate::ThingType;
use crate::item::{CodableValue, DateTime, Measurement};
use crate::text;
use crate::type_id::TypeId;
use crate::vocab::{Coded, Normalcy};

/// A single blood glucose measurement, canonically in mmol/L.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BloodGlucose {
    /// When the measurement was taken. Mandatory.
    pub when: Option<DateTime>,
    /// Glucose concentration in mmol/L. Mandatory.
    pub value: Option<Measurement>,
    /// Sample type: whole blood, plasma, etc. Mandatory.
    pub measurement_type: Option<CodableValue>,
    /// Whether the meter was outside its operating temperature range.
    pub outside_operating_temperature: Option<bool>,
    /// Whether this reading was a control-solution test.
    pub is_control_test: Option<bool>,
    /// Where the reading falls relative to the subject's normal range.
    pub normalcy: Option<Coded<Normalcy>>,
    /// Context of the measurement (before/after a meal, ...).
    pub measurement_context: Option<CodableValue>,
}

impl BloodGlucose {
    /// Convenience constructor taking the mandatory fields.
    pub fn new(when: DateTime, value: Measurement, measurement_type: CodableValue) -> Self {
        Self {
            when: Some(when),
            value: Some(value),
            measurement_type: Some(measurement_type),
            ..Self::default()
        }
    }
}

impl ThingType for BloodGlucose {
    const TYPE_ID: TypeId = TypeId::new(uuid!("879e7c04-4e8a-4707-9ad3-b054df467ce4"));
    const ROOT: &'static str = "blood-glucose";

    fn parse_xml(node: &Element) -> ParseResult<Self> {
        Ok(Self {
            when: Some(node.req_item("when")?),
            value: Some(Measurement::parse_xml(node.require("value")?, "mmolPerL")?),
            measurement_type: Some(node.req_item("glucose-measurement-type")?),
            outside_operating_temperature: node.opt_bool_child("outside-operating-temp")?,
            is_control_test: node.opt_bool_child("is-control-test")?,
            normalcy: node.child("normalcy").map(Coded::from_element),
            measurement_context: node.opt_item("measurement-context")?,
        })
    }

    fn write_xml<W: Write>(&self, writer: &mut XmlWriter<W>) -> WriteResult<()> {
        let when = require_field(&self.when, Self::ROOT, "when")?;
        let value = require_field(&self.value, Self::ROOT, "value")?;
        let measurement_type =
            require_field(&self.measurement_type, Self::ROOT, "glucose-measurement-type")?;
        writer.element(Self::ROOT, |w| {
            w.item("when", when)?;
            value.write_xml("value", "mmolPerL", w)?;
            w.item("glucose-measurement-type", measurement_type)?;
            w.opt_bool_element(
                "outside-operating-temp",
                self.outside_operating_temperature,
            )?;
            w.opt_bool_element("is-control-test", self.is_control_test)?;
            w.opt_text_element("normalcy", self.normalcy.as_ref().map(Coded::wire_value))?;
            w.opt_item("measurement-context", self.measurement_context.as_ref())
        })
    }
}

impl fmt::Display for BloodGlucose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        if let Some(value) = &self.value {
            parts.push(format!("{}{}", value.value, text::lookup("unit.mmol-per-l")));
        }
        if let Some(normalcy) = &self.normalcy {
            parts.push(normalcy.to_string());
        }
        if self.is_control_test == Some(true) {
            parts.push(text::lookup("label.control-test").to_owned());
        }
        f.write_str(&parts.join(text::list_separator()))
    }
}
