//! Basic demographic information.

use std::fmt;
use std::io::Write;

use uuid::uuid;
use vital_xml::{Element, ParseResult, WriteResult, XmlWriter};

use crate::ThingType;
use crate::text;
use crate::type_id::TypeId;
use crate::values::BirthYear;
use crate::vocab::{Coded, DayOfWeek, Gender};

/// Coarse demographic data the subject has chosen to share. Every field is
/// optional; an empty `basic` thing is valid on the wire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Basic {
    pub gender: Option<Coded<Gender>>,
    /// Year of birth, validated to 1000–3000 at construction.
    pub birth_year: Option<BirthYear>,
    pub country: Option<String>,
    pub postcode: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    /// The subject's preferred first day of the week (wire ordinal 1–7,
    /// 1 = Monday).
    pub first_day_of_week: Option<DayOfWeek>,
    /// Languages spoken, in preference order.
    pub languages: Vec<String>,
}

impl ThingType for Basic {
    const TYPE_ID: TypeId = TypeId::new(uuid!("bf516a61-5252-4c28-a979-27f45f62f78d"));
    const ROOT: &'static str = "basic";

    fn parse_xml(node: &Element) -> ParseResult<Self> {
        let birth_year = match node.child("birthyear") {
            Some(child) => {
                let year = child.int()?;
                let year = u16::try_from(year)
                    .ok()
                    .and_then(|y| BirthYear::new(y).ok())
                    .ok_or_else(|| {
                        child.invalid(format!(
                            "birth year must be between {} and {}, got {year}",
                            BirthYear::MIN,
                            BirthYear::MAX
                        ))
                    })?;
                Some(year)
            }
            None => None,
        };
        let first_day_of_week = match node.child("firstdow") {
            Some(child) => {
                let ordinal = child.int()?;
                Some(DayOfWeek::from_ordinal(ordinal).ok_or_else(|| {
                    child.invalid(format!("day-of-week ordinal must be 1-7, got {ordinal}"))
                })?)
            }
            None => None,
        };
        Ok(Self {
            gender: node.child("gender").map(Coded::from_element),
            birth_year,
            country: node.opt_text_child("country"),
            postcode: node.opt_text_child("postcode"),
            city: node.opt_text_child("city"),
            state: node.opt_text_child("state"),
            first_day_of_week,
            languages: node
                .children_named("language")
                .map(|child| child.text().to_owned())
                .collect(),
        })
    }

    fn write_xml<W: Write>(&self, writer: &mut XmlWriter<W>) -> WriteResult<()> {
        writer.element(Self::ROOT, |w| {
            w.opt_text_element("gender", self.gender.as_ref().map(Coded::wire_value))?;
            w.opt_int_element("birthyear", self.birth_year.map(|y| i64::from(y.get())))?;
            w.opt_text_element("country", self.country.as_deref())?;
            w.opt_text_element("postcode", self.postcode.as_deref())?;
            w.opt_text_element("city", self.city.as_deref())?;
            w.opt_text_element("state", self.state.as_deref())?;
            w.opt_int_element(
                "firstdow",
                self.first_day_of_week.map(|d| i64::from(d.ordinal())),
            )?;
            for language in &self.languages {
                w.text_element("language", language)?;
            }
            Ok(())
        })
    }
}

impl fmt::Display for Basic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        if let Some(gender) = &self.gender {
            parts.push(gender.to_string());
        }
        if let Some(year) = &self.birth_year {
            parts.push(year.to_string());
        }
        for place in [&self.city, &self.state, &self.country] {
            if let Some(place) = place {
                parts.push(place.clone());
            }
        }
        f.write_str(&parts.join(text::list_separator()))
    }
}
