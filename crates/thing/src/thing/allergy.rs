//! Allergy record.

use std::fmt;
use std::io::Write;

use uuid::uuid;
use vital_xml::{Element, ParseResult, WriteResult, XmlWriter, require_field};

use crate::ThingType;
use crate::item::{ApproximateDateTime, CodableValue};
use crate::text;
use crate::type_id::TypeId;
use crate::vocab::{AllergySeverity, Coded};

/// An allergy to a named allergen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Allergy {
    /// The allergen name. Mandatory.
    pub name: Option<CodableValue>,
    /// The reaction the allergen provokes.
    pub reaction: Option<CodableValue>,
    /// When the allergy was first observed; may be approximate.
    pub first_observed: Option<ApproximateDateTime>,
    /// Category of the allergen (food, environmental, drug, ...).
    pub allergen_type: Option<CodableValue>,
    /// How severe the reaction is.
    pub severity: Option<Coded<AllergySeverity>>,
    /// The usual treatment.
    pub treatment: Option<CodableValue>,
    /// `true` when this entry records that the allergy has been ruled out.
    pub is_negated: Option<bool>,
}

impl Allergy {
    pub fn new(name: CodableValue) -> Self {
        Self {
            name: Some(name),
            ..Self::default()
        }
    }
}

impl ThingType for Allergy {
    const TYPE_ID: TypeId = TypeId::new(uuid!("52bf9104-2c5e-4f1f-a66d-552ebcc53df7"));
    const ROOT: &'static str = "allergy";

    fn parse_xml(node: &Element) -> ParseResult<Self> {
        Ok(Self {
            name: Some(node.req_item("name")?),
            reaction: node.opt_item("reaction")?,
            first_observed: node.opt_item("first-observed")?,
            allergen_type: node.opt_item("allergen-type")?,
            severity: node.child("severity").map(Coded::from_element),
            treatment: node.opt_item("treatment")?,
            is_negated: node.opt_bool_child("is-negated")?,
        })
    }

    fn write_xml<W: Write>(&self, writer: &mut XmlWriter<W>) -> WriteResult<()> {
        let name = require_field(&self.name, Self::ROOT, "name")?;
        writer.element(Self::ROOT, |w| {
            w.item("name", name)?;
            w.opt_item("reaction", self.reaction.as_ref())?;
            w.opt_item("first-observed", self.first_observed.as_ref())?;
            w.opt_item("allergen-type", self.allergen_type.as_ref())?;
            w.opt_text_element("severity", self.severity.as_ref().map(Coded::wire_value))?;
            w.opt_item("treatment", self.treatment.as_ref())?;
            w.opt_bool_element("is-negated", self.is_negated)
        })
    }
}

impl fmt::Display for Allergy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        if let Some(name) = &self.name {
            parts.push(name.to_string());
        }
        if let Some(severity) = &self.severity {
            parts.push(severity.to_string());
        }
        if let Some(reaction) = &self.reaction {
            parts.push(reaction.to_string());
        }
        if self.is_negated == Some(true) {
            parts.push(text::lookup("label.negated").to_owned());
        }
        f.write_str(&parts.join(text::list_separator()))
    }
}
