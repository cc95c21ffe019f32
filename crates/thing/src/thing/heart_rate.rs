//! Heart rate measurement.

use std::fmt;
use std::io::Write;

use uuid::uuid;
use vital_xml::{Element, ParseResult, WriteResult, XmlWriter, require_field};

use crate::ThingType;
use crate::item::{CodableValue, DateTime};
use crate::text;
use crate::type_id::TypeId;
use crate::values::BeatsPerMinute;

/// A single heart-rate reading in beats per minute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeartRate {
    /// When the reading was taken. Mandatory.
    pub when: Option<DateTime>,
    /// Beats per minute, strictly positive. Mandatory.
    pub value: Option<BeatsPerMinute>,
    /// How the reading was taken (device, pulse, ...).
    pub measurement_method: Option<CodableValue>,
    /// Conditions under which it was taken (resting, after exercise, ...).
    pub measurement_conditions: Option<CodableValue>,
}

impl HeartRate {
    pub fn new(when: DateTime, value: BeatsPerMinute) -> Self {
        Self {
            when: Some(when),
            value: Some(value),
            ..Self::default()
        }
    }
}

impl ThingType for HeartRate {
    const TYPE_ID: TypeId = TypeId::new(uuid!("b81eb4a6-6eac-4292-ae93-3872d6870994"));
    const ROOT: &'static str = "heart-rate";

    fn parse_xml(node: &Element) -> ParseResult<Self> {
        let value_node = node.require("value")?;
        let bpm = value_node.int()?;
        let value = u32::try_from(bpm)
            .ok()
            .and_then(|v| BeatsPerMinute::new(v).ok())
            .ok_or_else(|| value_node.invalid(format!("{bpm} is not a positive heart rate")))?;
        Ok(Self {
            when: Some(node.req_item("when")?),
            value: Some(value),
            measurement_method: node.opt_item("measurement-method")?,
            measurement_conditions: node.opt_item("measurement-conditions")?,
        })
    }

    fn write_xml<W: Write>(&self, writer: &mut XmlWriter<W>) -> WriteResult<()> {
        let when = require_field(&self.when, Self::ROOT, "when")?;
        let value = require_field(&self.value, Self::ROOT, "value")?;
        writer.element(Self::ROOT, |w| {
            w.item("when", when)?;
            w.int_element("value", i64::from(value.get()))?;
            w.opt_item("measurement-method", self.measurement_method.as_ref())?;
            w.opt_item("measurement-conditions", self.measurement_conditions.as_ref())
        })
    }
}

impl fmt::Display for HeartRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        if let Some(value) = &self.value {
            parts.push(format!("{}{}", value, text::lookup("unit.bpm")));
        }
        if let Some(conditions) = &self.measurement_conditions {
            parts.push(conditions.to_string());
        }
        f.write_str(&parts.join(text::list_separator()))
    }
}
