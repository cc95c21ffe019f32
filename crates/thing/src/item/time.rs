//! Structured date and time items.
//!
//! The wire format encodes dates and times as numeric component elements
//! (`<y>`, `<m>`, `<d>`, `<h>`, ...) rather than a single lexical form.
//! Components are validated at construction; `chrono` conversions are
//! provided for callers that work with calendar types.

use std::fmt;
use std::io::Write;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use vital_xml::{Element, ItemXml, ParseResult, WriteResult, XmlWriter};

use crate::error::ValueError;

fn component_in_range(
    field: &'static str,
    value: i64,
    min: i64,
    max: i64,
) -> Result<(), ValueError> {
    if !(min..=max).contains(&value) {
        return Err(ValueError::OutOfRange {
            field,
            min: min.to_string(),
            max: max.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

/// A fully specified calendar date.
///
/// Only simple component ranges are validated (a `<d>` of 30 in February is
/// representable, as on the wire); [`StructuredDate::to_naive`] returns
/// `None` for such dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuredDate {
    year: u16,
    month: u8,
    day: u8,
}

impl StructuredDate {
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ValueError> {
        component_in_range("year", i64::from(year), 1000, 9999)?;
        component_in_range("month", i64::from(month), 1, 12)?;
        component_in_range("day", i64::from(day), 1, 31)?;
        Ok(Self { year, month, day })
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn from_naive(date: NaiveDate) -> Result<Self, ValueError> {
        let year = u16::try_from(date.year()).map_err(|_| ValueError::OutOfRange {
            field: "year",
            min: "1000".to_string(),
            max: "9999".to_string(),
            value: date.year().to_string(),
        })?;
        Self::new(year, date.month() as u8, date.day() as u8)
    }

    /// `None` when the components do not name a real calendar day.
    pub fn to_naive(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )
    }
}

impl ItemXml for StructuredDate {
    fn parse_xml(node: &Element) -> ParseResult<Self> {
        let year = node.require("y")?.int()?;
        let month = node.require("m")?.int()?;
        let day = node.require("d")?.int()?;
        component_in_range("year", year, 1000, 9999)
            .and_then(|_| component_in_range("month", month, 1, 12))
            .and_then(|_| component_in_range("day", day, 1, 31))
            .map_err(|e| node.invalid(e.to_string()))?;
        Ok(Self {
            year: year as u16,
            month: month as u8,
            day: day as u8,
        })
    }

    fn write_xml<W: Write>(&self, name: &str, writer: &mut XmlWriter<W>) -> WriteResult<()> {
        writer.element(name, |w| {
            w.int_element("y", i64::from(self.year))?;
            w.int_element("m", i64::from(self.month))?;
            w.int_element("d", i64::from(self.day))
        })
    }
}

impl fmt::Display for StructuredDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A time of day: hour and minute mandatory, second and millisecond
/// optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuredTime {
    hour: u8,
    minute: u8,
    second: Option<u8>,
    millisecond: Option<u16>,
}

impl StructuredTime {
    pub fn new(hour: u8, minute: u8) -> Result<Self, ValueError> {
        component_in_range("hour", i64::from(hour), 0, 23)?;
        component_in_range("minute", i64::from(minute), 0, 59)?;
        Ok(Self {
            hour,
            minute,
            second: None,
            millisecond: None,
        })
    }

    pub fn with_second(mut self, second: u8) -> Result<Self, ValueError> {
        component_in_range("second", i64::from(second), 0, 59)?;
        self.second = Some(second);
        Ok(self)
    }

    /// Requires the second to be set first.
    pub fn with_millisecond(mut self, millisecond: u16) -> Result<Self, ValueError> {
        if self.second.is_none() {
            return Err(ValueError::Requires {
                field: "millisecond",
                requires: "second",
            });
        }
        component_in_range("millisecond", i64::from(millisecond), 0, 999)?;
        self.millisecond = Some(millisecond);
        Ok(self)
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> Option<u8> {
        self.second
    }

    pub fn millisecond(&self) -> Option<u16> {
        self.millisecond
    }

    pub fn from_naive(time: NaiveTime) -> Self {
        // chrono components are always in range.
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
            second: Some(time.second() as u8),
            millisecond: Some((time.nanosecond() / 1_000_000) as u16),
        }
    }

    pub fn to_naive(&self) -> NaiveTime {
        NaiveTime::from_hms_milli_opt(
            u32::from(self.hour),
            u32::from(self.minute),
            u32::from(self.second.unwrap_or(0)),
            u32::from(self.millisecond.unwrap_or(0)),
        )
        .unwrap_or(NaiveTime::MIN)
    }
}

impl ItemXml for StructuredTime {
    fn parse_xml(node: &Element) -> ParseResult<Self> {
        let hour = node.require("h")?.int()?;
        let minute = node.require("m")?.int()?;
        component_in_range("hour", hour, 0, 23)
            .and_then(|_| component_in_range("minute", minute, 0, 59))
            .map_err(|e| node.invalid(e.to_string()))?;
        let mut time = Self {
            hour: hour as u8,
            minute: minute as u8,
            second: None,
            millisecond: None,
        };
        if let Some(second) = node.opt_int_child("s")? {
            component_in_range("second", second, 0, 59).map_err(|e| node.invalid(e.to_string()))?;
            time.second = Some(second as u8);
        }
        if let Some(millisecond) = node.opt_int_child("f")? {
            time = time
                .with_millisecond(u16::try_from(millisecond).unwrap_or(u16::MAX))
                .map_err(|e| node.invalid(e.to_string()))?;
        }
        Ok(time)
    }

    fn write_xml<W: Write>(&self, name: &str, writer: &mut XmlWriter<W>) -> WriteResult<()> {
        writer.element(name, |w| {
            w.int_element("h", i64::from(self.hour))?;
            w.int_element("m", i64::from(self.minute))?;
            w.opt_int_element("s", self.second.map(i64::from))?;
            w.opt_int_element("f", self.millisecond.map(i64::from))
        })
    }
}

impl fmt::Display for StructuredTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)?;
        if let Some(second) = self.second {
            write!(f, ":{:02}", second)?;
        }
        Ok(())
    }
}

/// An exact date, optionally with a time of day.
///
/// Wire shape: `<date>...</date>` followed by an optional `<time>...</time>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTime {
    pub date: StructuredDate,
    pub time: Option<StructuredTime>,
}

impl DateTime {
    pub fn new(date: StructuredDate) -> Self {
        Self { date, time: None }
    }

    pub fn with_time(date: StructuredDate, time: StructuredTime) -> Self {
        Self {
            date,
            time: Some(time),
        }
    }

    pub fn from_naive(value: NaiveDateTime) -> Result<Self, ValueError> {
        Ok(Self {
            date: StructuredDate::from_naive(value.date())?,
            time: Some(StructuredTime::from_naive(value.time())),
        })
    }

    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        let date = self.date.to_naive()?;
        let time = self.time.map(|t| t.to_naive()).unwrap_or(NaiveTime::MIN);
        Some(date.and_time(time))
    }
}

impl ItemXml for DateTime {
    fn parse_xml(node: &Element) -> ParseResult<Self> {
        Ok(Self {
            date: node.req_item("date")?,
            time: node.opt_item("time")?,
        })
    }

    fn write_xml<W: Write>(&self, name: &str, writer: &mut XmlWriter<W>) -> WriteResult<()> {
        writer.element(name, |w| {
            self.date.write_xml("date", w)?;
            w.opt_item("time", self.time.as_ref())
        })
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date)?;
        if let Some(time) = &self.time {
            write!(f, " {}", time)?;
        }
        Ok(())
    }
}

/// A date known only approximately: the year is mandatory, month, day, and
/// time of day progressively optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApproximateDateTime {
    year: u16,
    month: Option<u8>,
    day: Option<u8>,
    time: Option<StructuredTime>,
}

impl ApproximateDateTime {
    pub fn new(year: u16) -> Result<Self, ValueError> {
        component_in_range("year", i64::from(year), 1000, 9999)?;
        Ok(Self {
            year,
            month: None,
            day: None,
            time: None,
        })
    }

    pub fn with_month(mut self, month: u8) -> Result<Self, ValueError> {
        component_in_range("month", i64::from(month), 1, 12)?;
        self.month = Some(month);
        Ok(self)
    }

    /// Requires the month to be set first.
    pub fn with_day(mut self, day: u8) -> Result<Self, ValueError> {
        if self.month.is_none() {
            return Err(ValueError::Requires {
                field: "day",
                requires: "month",
            });
        }
        component_in_range("day", i64::from(day), 1, 31)?;
        self.day = Some(day);
        Ok(self)
    }

    pub fn with_time(mut self, time: StructuredTime) -> Self {
        self.time = Some(time);
        self
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> Option<u8> {
        self.month
    }

    pub fn day(&self) -> Option<u8> {
        self.day
    }

    pub fn time(&self) -> Option<StructuredTime> {
        self.time
    }

    pub fn from_naive_date(date: NaiveDate) -> Result<Self, ValueError> {
        let exact = StructuredDate::from_naive(date)?;
        Self::new(exact.year())?
            .with_month(exact.month())?
            .with_day(exact.day())
    }
}

impl ItemXml for ApproximateDateTime {
    fn parse_xml(node: &Element) -> ParseResult<Self> {
        let year = node.require("y")?.int()?;
        component_in_range("year", year, 1000, 9999).map_err(|e| node.invalid(e.to_string()))?;
        let mut value = Self {
            year: year as u16,
            month: None,
            day: None,
            time: None,
        };
        if let Some(month) = node.opt_int_child("m")? {
            component_in_range("month", month, 1, 12).map_err(|e| node.invalid(e.to_string()))?;
            value.month = Some(month as u8);
        }
        if let Some(day) = node.opt_int_child("d")? {
            if value.month.is_none() {
                return Err(node.invalid("day requires month to be set"));
            }
            component_in_range("day", day, 1, 31).map_err(|e| node.invalid(e.to_string()))?;
            value.day = Some(day as u8);
        }
        if let Some(time) = node.opt_item("time")? {
            value = value.with_time(time);
        }
        Ok(value)
    }

    fn write_xml<W: Write>(&self, name: &str, writer: &mut XmlWriter<W>) -> WriteResult<()> {
        writer.element(name, |w| {
            w.int_element("y", i64::from(self.year))?;
            w.opt_int_element("m", self.month.map(i64::from))?;
            w.opt_int_element("d", self.day.map(i64::from))?;
            w.opt_item("time", self.time.as_ref())
        })
    }
}

impl fmt::Display for ApproximateDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.year)?;
        if let Some(month) = self.month {
            write!(f, "-{:02}", month)?;
        }
        if let Some(day) = self.day {
            write!(f, "-{:02}", day)?;
        }
        if let Some(time) = &self.time {
            write!(f, " {}", time)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vital_xml::{ParseError, to_xml_string};

    #[test]
    fn date_components_are_range_checked_at_construction() {
        assert!(StructuredDate::new(2024, 2, 29).is_ok());
        assert!(matches!(
            StructuredDate::new(2024, 13, 1),
            Err(ValueError::OutOfRange { field: "month", .. })
        ));
        assert!(matches!(
            StructuredDate::new(2024, 1, 0),
            Err(ValueError::OutOfRange { field: "day", .. })
        ));
    }

    #[test]
    fn representable_non_calendar_dates_have_no_naive_form() {
        let date = StructuredDate::new(2023, 2, 30).unwrap();
        assert_eq!(date.to_naive(), None);
    }

    #[test]
    fn date_time_round_trips() {
        let when = DateTime::with_time(
            StructuredDate::new(2024, 3, 7).unwrap(),
            StructuredTime::new(6, 30).unwrap().with_second(15).unwrap(),
        );
        let xml = to_xml_string("when", &when).unwrap();
        assert_eq!(
            xml,
            "<when><date><y>2024</y><m>3</m><d>7</d></date>\
             <time><h>6</h><m>30</m><s>15</s></time></when>"
        );
        let reparsed = DateTime::parse_xml(&Element::parse(&xml).unwrap()).unwrap();
        assert_eq!(reparsed, when);
    }

    #[test]
    fn date_without_time_omits_the_time_element() {
        let when = DateTime::new(StructuredDate::new(2024, 3, 7).unwrap());
        let xml = to_xml_string("when", &when).unwrap();
        assert!(!xml.contains("<time>"), "XML: {xml}");
    }

    #[test]
    fn missing_date_is_a_structural_error() {
        let node = Element::parse("<when><time><h>6</h><m>30</m></time></when>").unwrap();
        assert!(matches!(
            DateTime::parse_xml(&node).unwrap_err(),
            ParseError::MissingElement { element: "date", .. }
        ));
    }

    #[test]
    fn approximate_date_requires_month_before_day() {
        let year_only = ApproximateDateTime::new(2020).unwrap();
        assert!(matches!(
            year_only.with_day(5),
            Err(ValueError::Requires { field: "day", requires: "month" })
        ));
    }

    #[test]
    fn approximate_date_round_trips_partial_precision() {
        let value = ApproximateDateTime::new(2020).unwrap().with_month(6).unwrap();
        let xml = to_xml_string("when", &value).unwrap();
        assert_eq!(xml, "<when><y>2020</y><m>6</m></when>");
        let reparsed = ApproximateDateTime::parse_xml(&Element::parse(&xml).unwrap()).unwrap();
        assert_eq!(reparsed, value);
    }

    #[test]
    fn millisecond_requires_second() {
        let time = StructuredTime::new(6, 30).unwrap();
        assert!(matches!(
            time.with_millisecond(250),
            Err(ValueError::Requires { field: "millisecond", requires: "second" })
        ));
    }

    #[test]
    fn chrono_conversions_agree_with_components() {
        let date = NaiveDate::from_ymd_opt(1984, 12, 1).unwrap();
        let structured = StructuredDate::from_naive(date).unwrap();
        assert_eq!(structured.to_naive(), Some(date));

        let time = NaiveTime::from_hms_milli_opt(23, 59, 58, 500).unwrap();
        let structured = StructuredTime::from_naive(time);
        assert_eq!(structured.to_naive(), time);
    }
}
