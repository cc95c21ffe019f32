//! Weight goal.

use std::fmt;
use std::io::Write;

use uuid::uuid;
use vital_xml::{Element, ParseResult, WriteResult, XmlWriter};

use crate::ThingType;
use crate::item::{Goal, Measurement};
use crate::text;
use crate::type_id::TypeId;

/// A target weight range and its progress. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightGoal {
    /// Weight when the goal was set, in kilograms.
    pub initial: Option<Measurement>,
    /// Lower end of the target range, in kilograms.
    pub minimum: Option<Measurement>,
    /// Upper end of the target range, in kilograms.
    pub maximum: Option<Measurement>,
    /// Target date and progress state.
    pub goal: Option<Goal>,
}

impl ThingType for WeightGoal {
    const TYPE_ID: TypeId = TypeId::new(uuid!("b7925180-d69e-48fa-ae1d-cb3748ca170e"));
    const ROOT: &'static str = "weight-goal";

    fn parse_xml(node: &Element) -> ParseResult<Self> {
        let parse_kg = |name: &'static str| -> ParseResult<Option<Measurement>> {
            match node.child(name) {
                Some(child) => Ok(Some(Measurement::parse_xml(child, "kg")?)),
                None => Ok(None),
            }
        };
        Ok(Self {
            initial: parse_kg("initial")?,
            minimum: parse_kg("minimum")?,
            maximum: parse_kg("maximum")?,
            goal: node.opt_item("goal")?,
        })
    }

    fn write_xml<W: Write>(&self, writer: &mut XmlWriter<W>) -> WriteResult<()> {
        writer.element(Self::ROOT, |w| {
            for (name, value) in [
                ("initial", &self.initial),
                ("minimum", &self.minimum),
                ("maximum", &self.maximum),
            ] {
                if let Some(measurement) = value {
                    measurement.write_xml(name, "kg", w)?;
                }
            }
            w.opt_item("goal", self.goal.as_ref())
        })
    }
}

impl fmt::Display for WeightGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        match (&self.minimum, &self.maximum) {
            (Some(min), Some(max)) => parts.push(format!(
                "{}-{}{}",
                min.value,
                max.value,
                text::lookup("unit.kilograms")
            )),
            (Some(min), None) => {
                parts.push(format!("{}{}", min.value, text::lookup("unit.kilograms")))
            }
            (None, Some(max)) => {
                parts.push(format!("{}{}", max.value, text::lookup("unit.kilograms")))
            }
            (None, None) => {}
        }
        if let Some(goal) = &self.goal {
            let rendered = goal.to_string();
            if !rendered.is_empty() {
                parts.push(rendered);
            }
        }
        f.write_str(&parts.join(text::list_separator()))
    }
}
