//! Goal metadata embedded by goal-carrying things.

use std::fmt;
use std::io::Write;

use vital_xml::{Element, ItemXml, ParseResult, WriteResult, XmlWriter};

use crate::item::ApproximateDateTime;
use crate::vocab::{Coded, GoalStatus};

/// Target date and progress state for a goal. All fields optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Goal {
    pub target_date: Option<ApproximateDateTime>,
    pub completion_date: Option<ApproximateDateTime>,
    pub status: Option<Coded<GoalStatus>>,
}

impl ItemXml for Goal {
    fn parse_xml(node: &Element) -> ParseResult<Self> {
        Ok(Self {
            target_date: node.opt_item("target-date")?,
            completion_date: node.opt_item("completion-date")?,
            status: node.child("status").map(Coded::from_element),
        })
    }

    fn write_xml<W: Write>(&self, name: &str, writer: &mut XmlWriter<W>) -> WriteResult<()> {
        writer.element(name, |w| {
            w.opt_item("target-date", self.target_date.as_ref())?;
            w.opt_item("completion-date", self.completion_date.as_ref())?;
            w.opt_text_element("status", self.status.as_ref().map(Coded::wire_value))
        })
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.status, &self.target_date) {
            (Some(status), Some(date)) => write!(f, "{} by {}", status, date),
            (Some(status), None) => write!(f, "{}", status),
            (None, Some(date)) => write!(f, "by {}", date),
            (None, None) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vital_xml::to_xml_string;

    #[test]
    fn empty_goal_writes_an_empty_element() {
        let xml = to_xml_string("goal", &Goal::default()).unwrap();
        assert_eq!(xml, "<goal></goal>");
    }

    #[test]
    fn unknown_status_survives_the_round_trip() {
        let node = Element::parse("<goal><status>on-hold</status></goal>").unwrap();
        let goal = Goal::parse_xml(&node).unwrap();
        assert_eq!(goal.status, Some(Coded::Unrecognized("on-hold".to_owned())));

        let xml = to_xml_string("goal", &goal).unwrap();
        assert_eq!(xml, "<goal><status>on-hold</status></goal>");
    }
}
