//! Aerobic fitness profile.

use std::fmt;
use std::io::Write;

use uuid::uuid;
use vital_xml::{Element, ParseResult, WriteResult, XmlWriter, require_field};

use crate::ThingType;
use crate::item::{DateTime, HeartRateZoneGroup};
use crate::text;
use crate::type_id::TypeId;
use crate::values::BeatsPerMinute;

fn opt_bpm(node: &Element, name: &str) -> ParseResult<Option<BeatsPerMinute>> {
    match node.child(name) {
        Some(child) => {
            let raw = child.int()?;
            let value = u32::try_from(raw)
                .ok()
                .and_then(|v| BeatsPerMinute::new(v).ok())
                .ok_or_else(|| child.invalid(format!("{raw} is not a positive heart rate")))?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

/// The subject's aerobic parameters and training zones at a point in time.
///
/// This is the collection-holder shape: the profile owns an ordered list of
/// zone groups, each of which owns an ordered list of zones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AerobicProfile {
    /// When the profile was established. Mandatory.
    pub when: Option<DateTime>,
    pub max_heart_rate: Option<BeatsPerMinute>,
    pub resting_heart_rate: Option<BeatsPerMinute>,
    pub anaerobic_threshold: Option<BeatsPerMinute>,
    /// Training zone groups, in document order.
    pub zone_groups: Vec<HeartRateZoneGroup>,
}

impl AerobicProfile {
    pub fn new(when: DateTime) -> Self {
        Self {
            when: Some(when),
            ..Self::default()
        }
    }
}

impl ThingType for AerobicProfile {
    const TYPE_ID: TypeId = TypeId::new(uuid!("7b2ea78c-4b78-4f75-a6a7-5396fe38b09a"));
    const ROOT: &'static str = "aerobic-profile";

    fn parse_xml(node: &Element) -> ParseResult<Self> {
        Ok(Self {
            when: Some(node.req_item("when")?),
            max_heart_rate: opt_bpm(node, "max-heartrate")?,
            resting_heart_rate: opt_bpm(node, "resting-heartrate")?,
            anaerobic_threshold: opt_bpm(node, "anaerobic-threshold")?,
            zone_groups: node.items("heartrate-zone-group")?,
        })
    }

    fn write_xml<W: Write>(&self, writer: &mut XmlWriter<W>) -> WriteResult<()> {
        let when = require_field(&self.when, Self::ROOT, "when")?;
        writer.element(Self::ROOT, |w| {
            w.item("when", when)?;
            w.opt_int_element(
                "max-heartrate",
                self.max_heart_rate.map(|v| i64::from(v.get())),
            )?;
            w.opt_int_element(
                "resting-heartrate",
                self.resting_heart_rate.map(|v| i64::from(v.get())),
            )?;
            w.opt_int_element(
                "anaerobic-threshold",
                self.anaerobic_threshold.map(|v| i64::from(v.get())),
            )?;
            w.items("heartrate-zone-group", &self.zone_groups)
        })
    }
}

impl fmt::Display for AerobicProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        if let Some(max) = &self.max_heart_rate {
            parts.push(format!("max {}{}", max, text::lookup("unit.bpm")));
        }
        if let Some(resting) = &self.resting_heart_rate {
            parts.push(format!("resting {}{}", resting, text::lookup("unit.bpm")));
        }
        f.write_str(&parts.join(text::list_separator()))
    }
}
