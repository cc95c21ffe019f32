//! Recurring alert.

use std::fmt;
use std::io::Write;

use uuid::uuid;
use vital_xml::{Element, ParseResult, WriteError, WriteResult, XmlWriter};

use crate::ThingType;
use crate::item::StructuredTime;
use crate::text;
use crate::type_id::TypeId;
use crate::vocab::DayOfWeek;

/// A recurring reminder: fire at each listed time on each listed day.
///
/// Both collections are mandatory and must be non-empty on the wire; an
/// `Alert` with either list empty fails serialization with the same
/// missing-field error as an unset scalar mandatory field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Alert {
    /// Days the alert fires, wire-encoded as 1-based `<dow>` ordinals.
    pub days: Vec<DayOfWeek>,
    /// Times of day the alert fires.
    pub times: Vec<StructuredTime>,
    /// Free-text description shown with the alert.
    pub description: Option<String>,
}

impl Alert {
    pub fn new(days: Vec<DayOfWeek>, times: Vec<StructuredTime>) -> Self {
        Self {
            days,
            times,
            description: None,
        }
    }
}

impl ThingType for Alert {
    const TYPE_ID: TypeId = TypeId::new(uuid!("1ad9cd15-a810-4fc5-9aa9-19d13f77a4c5"));
    const ROOT: &'static str = "alert";

    fn parse_xml(node: &Element) -> ParseResult<Self> {
        let mut days = Vec::new();
        for child in node.children_named("dow") {
            let ordinal = child.int()?;
            let day = DayOfWeek::from_ordinal(ordinal).ok_or_else(|| {
                child.invalid(format!("day-of-week ordinal must be 1-7, got {ordinal}"))
            })?;
            days.push(day);
        }
        Ok(Self {
            days,
            times: node.items("time")?,
            description: node.opt_text_child("description"),
        })
    }

    fn write_xml<W: Write>(&self, writer: &mut XmlWriter<W>) -> WriteResult<()> {
        if self.days.is_empty() {
            return Err(WriteError::MissingField {
                thing: Self::ROOT,
                field: "dow",
            });
        }
        if self.times.is_empty() {
            return Err(WriteError::MissingField {
                thing: Self::ROOT,
                field: "time",
            });
        }
        writer.element(Self::ROOT, |w| {
            for day in &self.days {
                w.int_element("dow", i64::from(day.ordinal()))?;
            }
            w.items("time", &self.times)?;
            w.opt_text_element("description", self.description.as_deref())
        })
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(description) = &self.description {
            return f.write_str(description);
        }
        let days: Vec<String> = self.days.iter().map(|d| d.to_string()).collect();
        let times: Vec<String> = self.times.iter().map(|t| t.to_string()).collect();
        write!(
            f,
            "{} @ {}",
            days.join(text::list_separator()),
            times.join(text::list_separator())
        )
    }
}
