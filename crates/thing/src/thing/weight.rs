//! Body weight measurement.

use std::fmt;
use std::io::Write;

use uuid::uuid;
use vital_xml::{Element, ParseResult, WriteResult, XmlWriter, require_field};

use crate::ThingType;
use crate::item::{DateTime, Measurement};
use crate::text;
use crate::type_id::TypeId;

/// A body weight reading, canonically in kilograms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Weight {
    /// When the weight was taken. Mandatory.
    pub when: Option<DateTime>,
    /// Weight in kilograms. Mandatory.
    pub value: Option<Measurement>,
}

impl Weight {
    pub fn new(when: DateTime, value: Measurement) -> Self {
        Self {
            when: Some(when),
            value: Some(value),
        }
    }
}

impl ThingType for Weight {
    const TYPE_ID: TypeId = TypeId::new(uuid!("3d34d87e-7fc1-4153-800f-f56592cb0d17"));
    const ROOT: &'static str = "weight";

    fn parse_xml(node: &Element) -> ParseResult<Self> {
        Ok(Self {
            when: Some(node.req_item("when")?),
            value: Some(Measurement::parse_xml(node.require("value")?, "kg")?),
        })
    }

    fn write_xml<W: Write>(&self, writer: &mut XmlWriter<W>) -> WriteResult<()> {
        let when = require_field(&self.when, Self::ROOT, "when")?;
        let value = require_field(&self.value, Self::ROOT, "value")?;
        writer.element(Self::ROOT, |w| {
            w.item("when", when)?;
            value.write_xml("value", "kg", w)
        })
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => match &value.display {
                Some(display) => write!(f, "{}", display),
                None => write!(f, "{}{}", value.value, text::lookup("unit.kilograms")),
            },
            None => Ok(()),
        }
    }
}
