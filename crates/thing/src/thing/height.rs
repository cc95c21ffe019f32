//! Body height measurement.

use std::fmt;
use std::io::Write;

use uuid::uuid;
use vital_xml::{Element, ParseResult, WriteResult, XmlWriter, require_field};

use crate::ThingType;
use crate::item::{DateTime, Measurement};
use crate::text;
use crate::type_id::TypeId;

/// A body height reading, canonically in meters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Height {
    /// When the height was taken. Mandatory.
    pub when: Option<DateTime>,
    /// Height in meters. Mandatory.
    pub value: Option<Measurement>,
}

impl Height {
    pub fn new(when: DateTime, value: Measurement) -> Self {
        Self {
            when: Some(when),
            value: Some(value),
        }
    }
}

impl ThingType for Height {
    const TYPE_ID: TypeId = TypeId::new(uuid!("40750a6a-89b2-455c-bd8d-b420a4cb500b"));
    const ROOT: &'static str = "height";

    fn parse_xml(node: &Element) -> ParseResult<Self> {
        Ok(Self {
            when: Some(node.req_item("when")?),
            value: Some(Measurement::parse_xml(node.require("value")?, "m")?),
        })
    }

    fn write_xml<W: Write>(&self, writer: &mut XmlWriter<W>) -> WriteResult<()> {
        let when = require_field(&self.when, Self::ROOT, "when")?;
        let value = require_field(&self.value, Self::ROOT, "value")?;
        writer.element(Self::ROOT, |w| {
            w.item("when", when)?;
            value.write_xml("value", "m", w)
        })
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => match &value.display {
                Some(display) => write!(f, "{}", display),
                None => write!(f, "{}{}", value.value, text::lookup("unit.meters")),
            },
            None => Ok(()),
        }
    }
}
