//! Medication record.

use std::fmt;
use std::io::Write;

use uuid::uuid;
use vital_xml::{Element, ParseResult, WriteResult, XmlWriter, require_field};

use crate::ThingType;
use crate::item::{ApproximateDateTime, CodableValue};
use crate::text;
use crate::type_id::TypeId;

/// A medication the subject takes or took. Only the name is mandatory; the
/// remaining detail is whatever the source system knew.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Medication {
    /// The medication name. Mandatory.
    pub name: Option<CodableValue>,
    /// The generic (non-brand) name, when different.
    pub generic_name: Option<CodableValue>,
    /// Amount per administration, e.g. "1 tablet".
    pub dose: Option<CodableValue>,
    /// Strength of one unit, e.g. "500 mg".
    pub strength: Option<CodableValue>,
    /// How often the dose is taken.
    pub frequency: Option<CodableValue>,
    /// Route of administration.
    pub route: Option<CodableValue>,
    /// Why the medication was prescribed.
    pub indication: Option<CodableValue>,
    pub date_started: Option<ApproximateDateTime>,
    pub date_discontinued: Option<ApproximateDateTime>,
}

impl Medication {
    pub fn new(name: CodableValue) -> Self {
        Self {
            name: Some(name),
            ..Self::default()
        }
    }
}

impl ThingType for Medication {
    const TYPE_ID: TypeId = TypeId::new(uuid!("30cafccc-047d-4288-94ef-643571f7919d"));
    const ROOT: &'static str = "medication";

    fn parse_xml(node: &Element) -> ParseResult<Self> {
        Ok(Self {
            name: Some(node.req_item("name")?),
            generic_name: node.opt_item("generic-name")?,
            dose: node.opt_item("dose")?,
            strength: node.opt_item("strength")?,
            frequency: node.opt_item("frequency")?,
            route: node.opt_item("route")?,
            indication: node.opt_item("indication")?,
            date_started: node.opt_item("date-started")?,
            date_discontinued: node.opt_item("date-discontinued")?,
        })
    }

    fn write_xml<W: Write>(&self, writer: &mut XmlWriter<W>) -> WriteResult<()> {
        let name = require_field(&self.name, Self::ROOT, "name")?;
        writer.element(Self::ROOT, |w| {
            w.item("name", name)?;
            w.opt_item("generic-name", self.generic_name.as_ref())?;
            w.opt_item("dose", self.dose.as_ref())?;
            w.opt_item("strength", self.strength.as_ref())?;
            w.opt_item("frequency", self.frequency.as_ref())?;
            w.opt_item("route", self.route.as_ref())?;
            w.opt_item("indication", self.indication.as_ref())?;
            w.opt_item("date-started", self.date_started.as_ref())?;
            w.opt_item("date-discontinued", self.date_discontinued.as_ref())
        })
    }
}

impl fmt::Display for Medication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        if let Some(name) = &self.name {
            parts.push(name.to_string());
        }
        for detail in [&self.strength, &self.dose, &self.frequency] {
            if let Some(detail) = detail {
                parts.push(detail.to_string());
            }
        }
        f.write_str(&parts.join(text::list_separator()))
    }
}
