//! Heart-rate zone items, the collection children of the aerobic profile.

use std::fmt;
use std::io::Write;

use vital_xml::{Element, ItemXml, ParseResult, WriteResult, XmlWriter};

use crate::error::ValueError;
use crate::values::BeatsPerMinute;

/// A named heart-rate band with inclusive bpm bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeartRateZone {
    name: Option<String>,
    lower_bound: BeatsPerMinute,
    upper_bound: BeatsPerMinute,
}

impl HeartRateZone {
    /// Fails when the lower bound exceeds the upper bound.
    pub fn new(
        name: Option<String>,
        lower_bound: BeatsPerMinute,
        upper_bound: BeatsPerMinute,
    ) -> Result<Self, ValueError> {
        if lower_bound > upper_bound {
            return Err(ValueError::BoundsOrder {
                field: "heart rate zone",
                lower: lower_bound.to_string(),
                upper: upper_bound.to_string(),
            });
        }
        Ok(Self {
            name,
            lower_bound,
            upper_bound,
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn lower_bound(&self) -> BeatsPerMinute {
        self.lower_bound
    }

    pub fn upper_bound(&self) -> BeatsPerMinute {
        self.upper_bound
    }
}

impl ItemXml for HeartRateZone {
    fn parse_xml(node: &Element) -> ParseResult<Self> {
        let name = node.opt_text_child("name");
        let lower = node.require("lower-bound")?.int()?;
        let upper = node.require("upper-bound")?.int()?;
        let lower = u32::try_from(lower)
            .ok()
            .and_then(|v| BeatsPerMinute::new(v).ok())
            .ok_or_else(|| node.invalid(format!("lower-bound {lower} is not a positive heart rate")))?;
        let upper = u32::try_from(upper)
            .ok()
            .and_then(|v| BeatsPerMinute::new(v).ok())
            .ok_or_else(|| node.invalid(format!("upper-bound {upper} is not a positive heart rate")))?;
        HeartRateZone::new(name, lower, upper).map_err(|e| node.invalid(e.to_string()))
    }

    fn write_xml<W: Write>(&self, name: &str, writer: &mut XmlWriter<W>) -> WriteResult<()> {
        writer.element(name, |w| {
            w.opt_text_element("name", self.name.as_deref())?;
            w.int_element("lower-bound", i64::from(self.lower_bound.get()))?;
            w.int_element("upper-bound", i64::from(self.upper_bound.get()))
        })
    }
}

impl fmt::Display for HeartRateZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{}: ", name)?;
        }
        write!(f, "{}-{}", self.lower_bound, self.upper_bound)
    }
}

/// An ordered group of heart-rate zones.
///
/// Wire shape:
///
/// ```xml
/// <heartrate-zone-group>
///   <name>Default</name>
///   <heartrate-zone>...</heartrate-zone>
///   <heartrate-zone>...</heartrate-zone>
/// </heartrate-zone-group>
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeartRateZoneGroup {
    pub name: Option<String>,
    pub zones: Vec<HeartRateZone>,
}

impl ItemXml for HeartRateZoneGroup {
    fn parse_xml(node: &Element) -> ParseResult<Self> {
        Ok(Self {
            name: node.opt_text_child("name"),
            zones: node.items("heartrate-zone")?,
        })
    }

    fn write_xml<W: Write>(&self, name: &str, writer: &mut XmlWriter<W>) -> WriteResult<()> {
        writer.element(name, |w| {
            w.opt_text_element("name", self.name.as_deref())?;
            w.items("heartrate-zone", &self.zones)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vital_xml::to_xml_string;

    fn bpm(value: u32) -> BeatsPerMinute {
        BeatsPerMinute::new(value).unwrap()
    }

    #[test]
    fn zone_bounds_must_be_ordered() {
        assert!(HeartRateZone::new(None, bpm(120), bpm(140)).is_ok());
        assert!(matches!(
            HeartRateZone::new(None, bpm(150), bpm(140)),
            Err(ValueError::BoundsOrder { .. })
        ));
    }

    #[test]
    fn group_round_trips_its_zones_in_order() {
        let group = HeartRateZoneGroup {
            name: Some("Default".to_owned()),
            zones: vec![
                HeartRateZone::new(Some("Easy".to_owned()), bpm(100), bpm(120)).unwrap(),
                HeartRateZone::new(Some("Hard".to_owned()), bpm(140), bpm(170)).unwrap(),
            ],
        };
        let xml = to_xml_string("heartrate-zone-group", &group).unwrap();
        let reparsed =
            HeartRateZoneGroup::parse_xml(&Element::parse(&xml).unwrap()).unwrap();
        assert_eq!(reparsed, group);
        assert_eq!(reparsed.zones[0].name(), Some("Easy"));
    }

    #[test]
    fn empty_group_emits_no_zone_elements() {
        let xml = to_xml_string("heartrate-zone-group", &HeartRateZoneGroup::default()).unwrap();
        assert_eq!(xml, "<heartrate-zone-group></heartrate-zone-group>");
    }

    #[test]
    fn unordered_wire_bounds_are_a_parse_error() {
        let node = Element::parse(
            "<heartrate-zone><lower-bound>150</lower-bound><upper-bound>120</upper-bound></heartrate-zone>",
        )
        .unwrap();
        assert!(HeartRateZone::parse_xml(&node).is_err());
    }
}
