//! Exercise session.

use std::fmt;
use std::io::Write;

use uuid::uuid;
use vital_xml::{Element, ParseResult, WriteResult, XmlWriter, require_field};

use crate::ThingType;
use crate::item::{ApproximateDateTime, CodableValue, Measurement};
use crate::text;
use crate::type_id::TypeId;
use crate::values::PositiveDecimal;

/// One exercise session: what was done, roughly when, and optionally how far
/// and for how long.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Exercise {
    /// When the session took place; may be approximate. Mandatory.
    pub when: Option<ApproximateDateTime>,
    /// The activity performed. Mandatory.
    pub activity: Option<CodableValue>,
    /// A free-text title for the session.
    pub title: Option<String>,
    /// Distance covered, canonically in meters.
    pub distance: Option<Measurement>,
    /// Duration in minutes; must be positive.
    pub duration: Option<PositiveDecimal>,
}

impl Exercise {
    pub fn new(when: ApproximateDateTime, activity: CodableValue) -> Self {
        Self {
            when: Some(when),
            activity: Some(activity),
            ..Self::default()
        }
    }
}

impl ThingType for Exercise {
    const TYPE_ID: TypeId = TypeId::new(uuid!("85a21ddb-db20-4c65-8d30-33c899ccf612"));
    const ROOT: &'static str = "exercise";

    fn parse_xml(node: &Element) -> ParseResult<Self> {
        let duration = match node.child("duration") {
            Some(child) => Some(
                PositiveDecimal::new(child.decimal()?)
                    .map_err(|e| child.invalid(e.to_string()))?,
            ),
            None => None,
        };
        Ok(Self {
            when: Some(node.req_item("when")?),
            activity: Some(node.req_item("activity")?),
            title: node.opt_text_child("title"),
            distance: match node.child("distance") {
                Some(child) => Some(Measurement::parse_xml(child, "m")?),
                None => None,
            },
            duration,
        })
    }

    fn write_xml<W: Write>(&self, writer: &mut XmlWriter<W>) -> WriteResult<()> {
        let when = require_field(&self.when, Self::ROOT, "when")?;
        let activity = require_field(&self.activity, Self::ROOT, "activity")?;
        writer.element(Self::ROOT, |w| {
            w.item("when", when)?;
            w.item("activity", activity)?;
            w.opt_text_element("title", self.title.as_deref())?;
            if let Some(distance) = &self.distance {
                distance.write_xml("distance", "m", w)?;
            }
            w.opt_decimal_element("duration", self.duration.map(PositiveDecimal::get))
        })
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        if let Some(title) = &self.title {
            parts.push(title.clone());
        } else if let Some(activity) = &self.activity {
            parts.push(activity.to_string());
        }
        if let Some(duration) = &self.duration {
            parts.push(format!("{}{}", duration, text::lookup("unit.minutes")));
        }
        if let Some(distance) = &self.distance {
            parts.push(format!("{}{}", distance.value, text::lookup("unit.meters")));
        }
        f.write_str(&parts.join(text::list_separator()))
    }
}
