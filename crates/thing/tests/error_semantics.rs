//! The three failure categories stay distinct: argument errors at
//! construction, structural errors at parse, missing-field errors at write.

use rust_decimal_macros::dec;
use vital_thing::item::Measurement;
use vital_thing::thing::{Alert, BloodGlucose, PasswordProtectedPackage, Weight};
use vital_thing::values::{BirthYear, Fraction};
use vital_thing::vocab::Coded;
use vital_thing::{Thing, ThingType, TypeId, ValueError};
use vital_xml::{Element, ParseError, WriteError};

#[test]
fn unset_mandatory_field_fails_serialization_not_construction() {
    // A default-constructed thing is representable while incomplete.
    let weight = Weight::default();

    match weight.to_xml_string().unwrap_err() {
        WriteError::MissingField { thing, field } => {
            assert_eq!(thing, "weight");
            assert_eq!(field, "when");
        }
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[test]
fn missing_field_error_fires_before_any_output() {
    let mut incomplete = Weight::default();
    incomplete.value = Some(Measurement::new(dec!(84)));

    let mut buffer = Vec::new();
    {
        let mut writer = vital_xml::XmlWriter::new(&mut buffer);
        assert!(incomplete.write_xml(&mut writer).is_err());
    }
    assert!(
        buffer.is_empty(),
        "a missing mandatory field must not leave a partial document behind"
    );
}

#[test]
fn missing_mandatory_element_names_the_expected_node() {
    let xml = "<blood-glucose>\
               <when><date><y>2026</y><m>4</m><d>1</d></date></when>\
               <glucose-measurement-type><text>Whole blood</text></glucose-measurement-type>\
               </blood-glucose>";
    match BloodGlucose::from_xml_str(xml).unwrap_err() {
        ParseError::MissingElement { parent, element } => {
            assert_eq!(element, "value");
            assert_eq!(parent, "blood-glucose");
        }
        other => panic!("expected MissingElement, got {other:?}"),
    }
}

#[test]
fn wrong_root_element_is_reported_with_both_names() {
    match Weight::from_xml_str("<height><value><m>1.8</m></value></height>").unwrap_err() {
        ParseError::UnexpectedRoot { expected, found } => {
            assert_eq!(expected, "weight");
            assert_eq!(found, "height");
        }
        other => panic!("expected UnexpectedRoot, got {other:?}"),
    }
}

#[test]
fn out_of_range_argument_fails_immediately() {
    assert!(matches!(
        BirthYear::new(999).unwrap_err(),
        ValueError::OutOfRange { field: "birth year", .. }
    ));
    assert!(BirthYear::new(1400).is_ok(), "1400 is inside the valid range");
    assert!(Fraction::new(dec!(1.2)).is_err());
}

#[test]
fn day_of_week_ordinal_outside_1_to_7_is_a_parse_error() {
    let xml = "<alert><dow>8</dow><time><h>9</h><m>30</m></time></alert>";
    match Alert::from_xml_str(xml).unwrap_err() {
        ParseError::InvalidText { element, reason } => {
            assert_eq!(element, "dow");
            assert!(reason.contains("8"), "reason should carry the value, got {reason}");
        }
        other => panic!("expected InvalidText, got {other:?}"),
    }
}

#[test]
fn alert_with_empty_mandatory_collection_fails_like_an_unset_scalar() {
    let alert = Alert::default();
    match alert.to_xml_string().unwrap_err() {
        WriteError::MissingField { thing, field } => {
            assert_eq!(thing, "alert");
            assert_eq!(field, "dow");
        }
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[test]
fn unknown_coded_literal_parses_and_writes_back_verbatim() {
    let xml = "<password-protected-package>\
               <algorithm-name>argon2id</algorithm-name>\
               <data>AAEC</data>\
               </password-protected-package>";
    let package = PasswordProtectedPackage::from_xml_str(xml).unwrap();
    assert_eq!(
        package.algorithm,
        Some(Coded::Unrecognized("argon2id".to_owned())),
        "an unknown algorithm must not be a parse error"
    );

    let written = package.to_xml_string().unwrap();
    assert!(
        written.contains("<algorithm-name>argon2id</algorithm-name>"),
        "the original literal must be preserved, got {written}"
    );
}

#[test]
fn unknown_normalcy_code_survives_the_round_trip() {
    let xml = "<blood-glucose>\
               <when><date><y>2026</y><m>4</m><d>1</d></date></when>\
               <value><mmolPerL>5.5</mmolPerL></value>\
               <glucose-measurement-type><text>Whole blood</text></glucose-measurement-type>\
               <normalcy>borderline</normalcy>\
               </blood-glucose>";
    let glucose = BloodGlucose::from_xml_str(xml).unwrap();
    assert_eq!(
        glucose.normalcy,
        Some(Coded::Unrecognized("borderline".to_owned()))
    );
    let written = glucose.to_xml_string().unwrap();
    assert!(written.contains("<normalcy>borderline</normalcy>"));
}

#[test]
fn unregistered_type_id_is_rejected_at_dispatch() {
    let node = Element::parse("<weight><when/><value/></weight>").unwrap();
    let bogus: TypeId = "ffffffff-ffff-ffff-ffff-ffffffffffff".parse().unwrap();
    match Thing::parse(bogus, &node).unwrap_err() {
        ParseError::UnknownTypeId { type_id } => {
            assert_eq!(type_id, "ffffffff-ffff-ffff-ffff-ffffffffffff");
        }
        other => panic!("expected UnknownTypeId, got {other:?}"),
    }
}

#[test]
fn dispatch_routes_a_document_to_the_right_variant() {
    let xml = "<weight>\
               <when><date><y>2026</y><m>4</m><d>1</d></date></when>\
               <value><kg>84</kg></value>\
               </weight>";
    let thing = Thing::parse_document(Weight::TYPE_ID, xml).unwrap();
    assert_eq!(thing.type_id(), Weight::TYPE_ID);
    assert_eq!(thing.root_element(), "weight");
    match &thing {
        Thing::Weight(weight) => assert_eq!(weight.value.as_ref().unwrap().value, dec!(84)),
        other => panic!("expected the Weight variant, got {other:?}"),
    }
}
