//! Wire-format round trips across whole thing types.

use rust_decimal_macros::dec;
use vital_thing::ThingType;
use vital_thing::item::{
    ApproximateDateTime, CodableValue, CodedValue, DateTime, DisplayValue, Measurement,
    StructuredDate, StructuredTime,
};
use vital_thing::thing::{Basic, BloodGlucose, Exercise, HbA1C, Weight};
use vital_thing::values::Fraction;
use vital_thing::vocab::{Coded, Normalcy};

fn noon(year: u16, month: u8, day: u8) -> DateTime {
    DateTime::with_time(
        StructuredDate::new(year, month, day).unwrap(),
        StructuredTime::new(12, 0).unwrap(),
    )
}

#[test]
fn absent_optional_fields_leave_no_trace_on_the_wire() {
    let when = ApproximateDateTime::new(2026).unwrap().with_month(4).unwrap();
    let exercise = Exercise::new(when, CodableValue::new("Walking"));

    let xml = exercise.to_xml_string().unwrap();
    assert!(
        !xml.contains("<duration"),
        "unset duration must not be serialized, got {xml}"
    );
    assert!(
        !xml.contains("<distance") && !xml.contains("<title"),
        "unset optional fields must not be serialized, got {xml}"
    );

    let reparsed = Exercise::from_xml_str(&xml).unwrap();
    assert_eq!(reparsed, exercise, "absence must survive the round trip");
    assert!(reparsed.duration.is_none());
}

#[test]
fn fully_populated_reading_round_trips_identically() {
    let mut glucose = BloodGlucose::new(
        noon(2026, 4, 1),
        Measurement::with_display(dec!(5.5), DisplayValue::new(dec!(99), "mg/dL")),
        CodableValue::with_code(
            "Whole blood",
            CodedValue::new("wb", "glucose-measurement-type"),
        ),
    );
    glucose.is_control_test = Some(false);
    glucose.normalcy = Some(Coded::Known(Normalcy::Normal));

    let xml = glucose.to_xml_string().unwrap();
    assert_eq!(
        BloodGlucose::from_xml_str(&xml).unwrap(),
        glucose,
        "parse(write(x)) must equal x"
    );

    let again = BloodGlucose::from_xml_str(&xml).unwrap().to_xml_string().unwrap();
    assert_eq!(again, xml, "a second round trip must be byte-identical");
}

#[test]
fn decimals_are_written_in_the_invariant_format() {
    let weight = Weight::new(noon(2026, 4, 1), Measurement::new(dec!(83.9)));
    let xml = weight.to_xml_string().unwrap();
    assert!(
        xml.contains("<kg>83.9</kg>"),
        "decimal must use the dot separator regardless of locale, got {xml}"
    );
}

#[test]
fn hba1c_fraction_is_a_bare_decimal_value_element() {
    let result = HbA1C::new(noon(2026, 4, 1), Fraction::new(dec!(0.065)).unwrap());
    let xml = result.to_xml_string().unwrap();
    assert!(
        xml.starts_with("<HbA1C>") && xml.ends_with("</HbA1C>"),
        "root element must be HbA1C, got {xml}"
    );
    assert!(
        xml.contains("<value>0.065</value>"),
        "the fraction is written bare, not wrapped in a unit element, got {xml}"
    );

    let reparsed = HbA1C::from_xml_str(&xml).unwrap();
    assert_eq!(reparsed.value.unwrap().get(), dec!(0.065));
}

#[test]
fn empty_basic_thing_is_valid_in_both_directions() {
    let basic = Basic::default();
    let xml = basic.to_xml_string().unwrap();
    assert_eq!(xml, "<basic></basic>");
    assert_eq!(Basic::from_xml_str(&xml).unwrap(), basic);
}

#[test]
fn repeated_languages_keep_document_order() {
    let basic = Basic {
        languages: vec!["en".to_owned(), "fr".to_owned(), "de".to_owned()],
        ..Basic::default()
    };
    let xml = basic.to_xml_string().unwrap();
    let reparsed = Basic::from_xml_str(&xml).unwrap();
    assert_eq!(reparsed.languages, ["en", "fr", "de"]);
}
