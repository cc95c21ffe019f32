//! GUID-keyed dispatch of raw XML to thing types.
//!
//! The platform client receives a type identifier alongside each payload and
//! routes here. Dispatch happens exactly once, at this boundary; from then on
//! the value is a concrete variant, with no virtual dispatch inside the type
//! hierarchy.

use std::fmt;
use std::io::Write;

use vital_xml::{Element, ParseError, ParseResult, WriteResult, XmlWriter};

use crate::ThingType;
use crate::thing::{
    AerobicProfile, Alert, Allergy, Basic, BloodGlucose, Exercise, HbA1C, HeartRate, Height,
    Medication, PasswordProtectedPackage, Weight, WeightGoal,
};
use crate::type_id::TypeId;

/// A health-record entry of any registered schema.
#[derive(Debug, Clone, PartialEq)]
pub enum Thing {
    AerobicProfile(AerobicProfile),
    Alert(Alert),
    Allergy(Allergy),
    Basic(Basic),
    BloodGlucose(BloodGlucose),
    Exercise(Exercise),
    HbA1C(HbA1C),
    HeartRate(HeartRate),
    Height(Height),
    Medication(Medication),
    PasswordProtectedPackage(PasswordProtectedPackage),
    Weight(Weight),
    WeightGoal(WeightGoal),
}

impl Thing {
    /// The type identifiers of every registered schema.
    pub fn registered_type_ids() -> Vec<TypeId> {
        vec![
            AerobicProfile::TYPE_ID,
            Alert::TYPE_ID,
            Allergy::TYPE_ID,
            Basic::TYPE_ID,
            BloodGlucose::TYPE_ID,
            Exercise::TYPE_ID,
            HbA1C::TYPE_ID,
            HeartRate::TYPE_ID,
            Height::TYPE_ID,
            Medication::TYPE_ID,
            PasswordProtectedPackage::TYPE_ID,
            Weight::TYPE_ID,
            WeightGoal::TYPE_ID,
        ]
    }

    /// Routes a parsed fragment to the type registered for `type_id`.
    ///
    /// Fails with [`ParseError::UnknownTypeId`] for an unregistered
    /// identifier.
    pub fn parse(type_id: TypeId, node: &Element) -> ParseResult<Thing> {
        match type_id {
            id if id == AerobicProfile::TYPE_ID => {
                Ok(Thing::AerobicProfile(AerobicProfile::parse_xml(node)?))
            }
            id if id == Alert::TYPE_ID => Ok(Thing::Alert(Alert::parse_xml(node)?)),
            id if id == Allergy::TYPE_ID => Ok(Thing::Allergy(Allergy::parse_xml(node)?)),
            id if id == Basic::TYPE_ID => Ok(Thing::Basic(Basic::parse_xml(node)?)),
            id if id == BloodGlucose::TYPE_ID => {
                Ok(Thing::BloodGlucose(BloodGlucose::parse_xml(node)?))
            }
            id if id == Exercise::TYPE_ID => Ok(Thing::Exercise(Exercise::parse_xml(node)?)),
            id if id == HbA1C::TYPE_ID => Ok(Thing::HbA1C(HbA1C::parse_xml(node)?)),
            id if id == HeartRate::TYPE_ID => Ok(Thing::HeartRate(HeartRate::parse_xml(node)?)),
            id if id == Height::TYPE_ID => Ok(Thing::Height(Height::parse_xml(node)?)),
            id if id == Medication::TYPE_ID => Ok(Thing::Medication(Medication::parse_xml(node)?)),
            id if id == PasswordProtectedPackage::TYPE_ID => Ok(Thing::PasswordProtectedPackage(
                PasswordProtectedPackage::parse_xml(node)?,
            )),
            id if id == Weight::TYPE_ID => Ok(Thing::Weight(Weight::parse_xml(node)?)),
            id if id == WeightGoal::TYPE_ID => Ok(Thing::WeightGoal(WeightGoal::parse_xml(node)?)),
            _ => Err(ParseError::UnknownTypeId {
                type_id: type_id.to_string(),
            }),
        }
    }

    /// Routes an XML document to the type registered for `type_id`,
    /// additionally checking the root element name.
    pub fn parse_document(type_id: TypeId, xml: &str) -> ParseResult<Thing> {
        let root = Element::parse(xml)?;
        let expected = Self::root_element_for(type_id)?;
        if root.name() != expected {
            return Err(ParseError::UnexpectedRoot {
                expected,
                found: root.name().to_owned(),
            });
        }
        Self::parse(type_id, &root)
    }

    fn root_element_for(type_id: TypeId) -> ParseResult<&'static str> {
        match type_id {
            id if id == AerobicProfile::TYPE_ID => Ok(AerobicProfile::ROOT),
            id if id == Alert::TYPE_ID => Ok(Alert::ROOT),
            id if id == Allergy::TYPE_ID => Ok(Allergy::ROOT),
            id if id == Basic::TYPE_ID => Ok(Basic::ROOT),
            id if id == BloodGlucose::TYPE_ID => Ok(BloodGlucose::ROOT),
            id if id == Exercise::TYPE_ID => Ok(Exercise::ROOT),
            id if id == HbA1C::TYPE_ID => Ok(HbA1C::ROOT),
            id if id == HeartRate::TYPE_ID => Ok(HeartRate::ROOT),
            id if id == Height::TYPE_ID => Ok(Height::ROOT),
            id if id == Medication::TYPE_ID => Ok(Medication::ROOT),
            id if id == PasswordProtectedPackage::TYPE_ID => Ok(PasswordProtectedPackage::ROOT),
            id if id == Weight::TYPE_ID => Ok(Weight::ROOT),
            id if id == WeightGoal::TYPE_ID => Ok(WeightGoal::ROOT),
            _ => Err(ParseError::UnknownTypeId {
                type_id: type_id.to_string(),
            }),
        }
    }

    /// The schema identifier of the contained thing.
    pub fn type_id(&self) -> TypeId {
        match self {
            Thing::AerobicProfile(_) => AerobicProfile::TYPE_ID,
            Thing::Alert(_) => Alert::TYPE_ID,
            Thing::Allergy(_) => Allergy::TYPE_ID,
            Thing::Basic(_) => Basic::TYPE_ID,
            Thing::BloodGlucose(_) => BloodGlucose::TYPE_ID,
            Thing::Exercise(_) => Exercise::TYPE_ID,
            Thing::HbA1C(_) => HbA1C::TYPE_ID,
            Thing::HeartRate(_) => HeartRate::TYPE_ID,
            Thing::Height(_) => Height::TYPE_ID,
            Thing::Medication(_) => Medication::TYPE_ID,
            Thing::PasswordProtectedPackage(_) => PasswordProtectedPackage::TYPE_ID,
            Thing::Weight(_) => Weight::TYPE_ID,
            Thing::WeightGoal(_) => WeightGoal::TYPE_ID,
        }
    }

    /// The root element name of the contained thing.
    pub fn root_element(&self) -> &'static str {
        match self {
            Thing::AerobicProfile(_) => AerobicProfile::ROOT,
            Thing::Alert(_) => Alert::ROOT,
            Thing::Allergy(_) => Allergy::ROOT,
            Thing::Basic(_) => Basic::ROOT,
            Thing::BloodGlucose(_) => BloodGlucose::ROOT,
            Thing::Exercise(_) => Exercise::ROOT,
            Thing::HbA1C(_) => HbA1C::ROOT,
            Thing::HeartRate(_) => HeartRate::ROOT,
            Thing::Height(_) => Height::ROOT,
            Thing::Medication(_) => Medication::ROOT,
            Thing::PasswordProtectedPackage(_) => PasswordProtectedPackage::ROOT,
            Thing::Weight(_) => Weight::ROOT,
            Thing::WeightGoal(_) => WeightGoal::ROOT,
        }
    }

    /// Serializes the contained thing, including its root element.
    pub fn write_xml<W: Write>(&self, writer: &mut XmlWriter<W>) -> WriteResult<()> {
        match self {
            Thing::AerobicProfile(thing) => thing.write_xml(writer),
            Thing::Alert(thing) => thing.write_xml(writer),
            Thing::Allergy(thing) => thing.write_xml(writer),
            Thing::Basic(thing) => thing.write_xml(writer),
            Thing::BloodGlucose(thing) => thing.write_xml(writer),
            Thing::Exercise(thing) => thing.write_xml(writer),
            Thing::HbA1C(thing) => thing.write_xml(writer),
            Thing::HeartRate(thing) => thing.write_xml(writer),
            Thing::Height(thing) => thing.write_xml(writer),
            Thing::Medication(thing) => thing.write_xml(writer),
            Thing::PasswordProtectedPackage(thing) => thing.write_xml(writer),
            Thing::Weight(thing) => thing.write_xml(writer),
            Thing::WeightGoal(thing) => thing.write_xml(writer),
        }
    }

    /// Serializes the contained thing to an XML string.
    pub fn to_xml_string(&self) -> WriteResult<String> {
        match self {
            Thing::AerobicProfile(thing) => thing.to_xml_string(),
            Thing::Alert(thing) => thing.to_xml_string(),
            Thing::Allergy(thing) => thing.to_xml_string(),
            Thing::Basic(thing) => thing.to_xml_string(),
            Thing::BloodGlucose(thing) => thing.to_xml_string(),
            Thing::Exercise(thing) => thing.to_xml_string(),
            Thing::HbA1C(thing) => thing.to_xml_string(),
            Thing::HeartRate(thing) => thing.to_xml_string(),
            Thing::Height(thing) => thing.to_xml_string(),
            Thing::Medication(thing) => thing.to_xml_string(),
            Thing::PasswordProtectedPackage(thing) => thing.to_xml_string(),
            Thing::Weight(thing) => thing.to_xml_string(),
            Thing::WeightGoal(thing) => thing.to_xml_string(),
        }
    }
}

impl fmt::Display for Thing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Thing::AerobicProfile(thing) => thing.fmt(f),
            Thing::Alert(thing) => thing.fmt(f),
            Thing::Allergy(thing) => thing.fmt(f),
            Thing::Basic(thing) => thing.fmt(f),
            Thing::BloodGlucose(thing) => thing.fmt(f),
            Thing::Exercise(thing) => thing.fmt(f),
            Thing::HbA1C(thing) => thing.fmt(f),
            Thing::HeartRate(thing) => thing.fmt(f),
            Thing::Height(thing) => thing.fmt(f),
            Thing::Medication(thing) => thing.fmt(f),
            Thing::PasswordProtectedPackage(thing) => thing.fmt(f),
            Thing::Weight(thing) => thing.fmt(f),
            Thing::WeightGoal(thing) => thing.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_type_ids_are_unique() {
        let ids = Thing::registered_type_ids();
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn unknown_type_id_is_rejected_at_the_boundary() {
        let node = Element::parse("<weight></weight>").unwrap();
        let bogus: TypeId = "00000000-0000-0000-0000-000000000000".parse().unwrap();
        assert!(matches!(
            Thing::parse(bogus, &node).unwrap_err(),
            ParseError::UnknownTypeId { .. }
        ));
    }

    #[test]
    fn parse_document_checks_the_root_element() {
        let err =
            Thing::parse_document(Weight::TYPE_ID, "<height><x/></height>").unwrap_err();
        match err {
            ParseError::UnexpectedRoot { expected, found } => {
                assert_eq!(expected, "weight");
                assert_eq!(found, "height");
            }
            other => panic!("expected UnexpectedRoot, got {other:?}"),
        }
    }
}
