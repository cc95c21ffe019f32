//! Closed coded vocabularies with a forward-compatible fallback.
//!
//! Several wire fields carry a small fixed vocabulary. New codes are added
//! upstream ahead of client releases, so parsing must never fail on an
//! unknown code: it becomes [`Coded::Unrecognized`] carrying the original
//! wire literal, and writing puts that literal back verbatim. The contract is
//! expressed in the type rather than as a sentinel enum variant plus a
//! side-channel raw string.

use std::fmt;

use vital_xml::Element;

/// A code drawn from a closed wire vocabulary.
pub trait VocabularyCode: Copy + Sized {
    /// Maps wire text to a known code, or `None` when the text is outside
    /// the vocabulary.
    fn from_wire(code: &str) -> Option<Self>;

    /// The wire text for this code.
    fn wire(&self) -> &'static str;

    /// A human-readable label for summaries.
    fn label(&self) -> &'static str;
}

/// Either a known vocabulary code or an unrecognized wire literal preserved
/// for round-tripping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Coded<C> {
    Known(C),
    Unrecognized(String),
}

impl<C: VocabularyCode> Coded<C> {
    /// Parses wire text; never fails.
    pub fn parse(wire: &str) -> Self {
        match C::from_wire(wire) {
            Some(code) => Coded::Known(code),
            None => Coded::Unrecognized(wire.to_owned()),
        }
    }

    /// Parses the trimmed text content of an element.
    pub fn from_element(node: &Element) -> Self {
        Self::parse(node.text().trim())
    }

    /// The text written back to the wire: the known code, or the preserved
    /// original literal.
    pub fn wire_value(&self) -> &str {
        match self {
            Coded::Known(code) => code.wire(),
            Coded::Unrecognized(raw) => raw,
        }
    }

    /// The known code, when there is one.
    pub fn known(&self) -> Option<C> {
        match self {
            Coded::Known(code) => Some(*code),
            Coded::Unrecognized(_) => None,
        }
    }
}

impl<C: VocabularyCode> From<C> for Coded<C> {
    fn from(code: C) -> Self {
        Coded::Known(code)
    }
}

impl<C: VocabularyCode> fmt::Display for Coded<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coded::Known(code) => f.write_str(code.label()),
            Coded::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

/// Where a glucose reading falls relative to the subject's normal range.
/// Wire codes are the ordinals `1` (well below normal) through `5` (well
/// above normal).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalcy {
    WellBelowNormal,
    BelowNormal,
    Normal,
    AboveNormal,
    WellAboveNormal,
}

impl VocabularyCode for Normalcy {
    fn from_wire(code: &str) -> Option<Self> {
        match code {
            "1" => Some(Normalcy::WellBelowNormal),
            "2" => Some(Normalcy::BelowNormal),
            "3" => Some(Normalcy::Normal),
            "4" => Some(Normalcy::AboveNormal),
            "5" => Some(Normalcy::WellAboveNormal),
            _ => None,
        }
    }

    fn wire(&self) -> &'static str {
        match self {
            Normalcy::WellBelowNormal => "1",
            Normalcy::BelowNormal => "2",
            Normalcy::Normal => "3",
            Normalcy::AboveNormal => "4",
            Normalcy::WellAboveNormal => "5",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Normalcy::WellBelowNormal => "well below normal",
            Normalcy::BelowNormal => "below normal",
            Normalcy::Normal => "normal",
            Normalcy::AboveNormal => "above normal",
            Normalcy::WellAboveNormal => "well above normal",
        }
    }
}

/// Progress state of a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalStatus {
    Proposed,
    Active,
    Achieved,
    Abandoned,
}

impl VocabularyCode for GoalStatus {
    fn from_wire(code: &str) -> Option<Self> {
        match code {
            "proposed" => Some(GoalStatus::Proposed),
            "active" => Some(GoalStatus::Active),
            "achieved" => Some(GoalStatus::Achieved),
            "abandoned" => Some(GoalStatus::Abandoned),
            _ => None,
        }
    }

    fn wire(&self) -> &'static str {
        match self {
            GoalStatus::Proposed => "proposed",
            GoalStatus::Active => "active",
            GoalStatus::Achieved => "achieved",
            GoalStatus::Abandoned => "abandoned",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            GoalStatus::Proposed => "proposed",
            GoalStatus::Active => "active",
            GoalStatus::Achieved => "achieved",
            GoalStatus::Abandoned => "abandoned",
        }
    }
}

/// Key-derivation/encryption scheme of a password-protected package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordProtectAlgorithm {
    /// The package payload is not encrypted.
    None,
    HmacSha1TripleDes,
    HmacSha256Aes256,
}

impl VocabularyCode for PasswordProtectAlgorithm {
    fn from_wire(code: &str) -> Option<Self> {
        match code {
            "none" => Some(PasswordProtectAlgorithm::None),
            "hmac-sha1-3des" => Some(PasswordProtectAlgorithm::HmacSha1TripleDes),
            "hmac-sha256-aes256" => Some(PasswordProtectAlgorithm::HmacSha256Aes256),
            _ => None,
        }
    }

    fn wire(&self) -> &'static str {
        match self {
            PasswordProtectAlgorithm::None => "none",
            PasswordProtectAlgorithm::HmacSha1TripleDes => "hmac-sha1-3des",
            PasswordProtectAlgorithm::HmacSha256Aes256 => "hmac-sha256-aes256",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            PasswordProtectAlgorithm::None => "unencrypted",
            PasswordProtectAlgorithm::HmacSha1TripleDes => "HMAC-SHA1 / 3DES",
            PasswordProtectAlgorithm::HmacSha256Aes256 => "HMAC-SHA256 / AES-256",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl VocabularyCode for Gender {
    fn from_wire(code: &str) -> Option<Self> {
        match code {
            "m" => Some(Gender::Male),
            "f" => Some(Gender::Female),
            _ => None,
        }
    }

    fn wire(&self) -> &'static str {
        match self {
            Gender::Male => "m",
            Gender::Female => "f",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// Severity of an allergic reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllergySeverity {
    Mild,
    Moderate,
    Severe,
}

impl VocabularyCode for AllergySeverity {
    fn from_wire(code: &str) -> Option<Self> {
        match code {
            "mild" => Some(AllergySeverity::Mild),
            "moderate" => Some(AllergySeverity::Moderate),
            "severe" => Some(AllergySeverity::Severe),
            _ => None,
        }
    }

    fn wire(&self) -> &'static str {
        match self {
            AllergySeverity::Mild => "mild",
            AllergySeverity::Moderate => "moderate",
            AllergySeverity::Severe => "severe",
        }
    }

    fn label(&self) -> &'static str {
        self.wire()
    }
}

/// Day of the week with the platform's 1-based wire encoding (`1` = Monday
/// … `7` = Sunday).
///
/// Unlike the coded vocabularies above, this is *not* forward-compatible: an
/// ordinal outside 1–7 is malformed input, not a new code, so parsing is
/// strict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// Maps a 1-based wire ordinal; `None` outside 1–7.
    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        match ordinal {
            1 => Some(DayOfWeek::Monday),
            2 => Some(DayOfWeek::Tuesday),
            3 => Some(DayOfWeek::Wednesday),
            4 => Some(DayOfWeek::Thursday),
            5 => Some(DayOfWeek::Friday),
            6 => Some(DayOfWeek::Saturday),
            7 => Some(DayOfWeek::Sunday),
            _ => None,
        }
    }

    /// The 1-based wire ordinal.
    pub fn ordinal(self) -> u8 {
        match self {
            DayOfWeek::Monday => 1,
            DayOfWeek::Tuesday => 2,
            DayOfWeek::Wednesday => 3,
            DayOfWeek::Thursday => 4,
            DayOfWeek::Friday => 5,
            DayOfWeek::Saturday => 6,
            DayOfWeek::Sunday => 7,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }
}

impl From<chrono::Weekday> for DayOfWeek {
    fn from(weekday: chrono::Weekday) -> Self {
        // number_from_monday is 1-based, same as the wire encoding.
        DayOfWeek::from_ordinal(i64::from(weekday.number_from_monday()))
            .unwrap_or(DayOfWeek::Monday)
    }
}

impl From<DayOfWeek> for chrono::Weekday {
    fn from(day: DayOfWeek) -> Self {
        match day {
            DayOfWeek::Monday => chrono::Weekday::Mon,
            DayOfWeek::Tuesday => chrono::Weekday::Tue,
            DayOfWeek::Wednesday => chrono::Weekday::Wed,
            DayOfWeek::Thursday => chrono::Weekday::Thu,
            DayOfWeek::Friday => chrono::Weekday::Fri,
            DayOfWeek::Saturday => chrono::Weekday::Sat,
            DayOfWeek::Sunday => chrono::Weekday::Sun,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_round_trip() {
        let coded: Coded<Normalcy> = Coded::parse("3");
        assert_eq!(coded, Coded::Known(Normalcy::Normal));
        assert_eq!(coded.wire_value(), "3");
    }

    #[test]
    fn unknown_codes_become_unrecognized_and_preserve_the_literal() {
        let coded: Coded<Normalcy> = Coded::parse("7");
        assert_eq!(coded, Coded::Unrecognized("7".to_owned()));
        assert_eq!(coded.wire_value(), "7");
        assert_eq!(coded.known(), None);

        let coded: Coded<PasswordProtectAlgorithm> = Coded::parse("hmac-sha512-aes512");
        assert_eq!(coded.wire_value(), "hmac-sha512-aes512");
    }

    #[test]
    fn display_uses_labels_for_known_codes() {
        assert_eq!(Coded::from(Normalcy::AboveNormal).to_string(), "above normal");
        assert_eq!(
            Coded::<Normalcy>::Unrecognized("6".to_owned()).to_string(),
            "6"
        );
    }

    #[test]
    fn day_of_week_is_strict_and_one_based() {
        assert_eq!(DayOfWeek::from_ordinal(1), Some(DayOfWeek::Monday));
        assert_eq!(DayOfWeek::from_ordinal(7), Some(DayOfWeek::Sunday));
        assert_eq!(DayOfWeek::from_ordinal(0), None);
        assert_eq!(DayOfWeek::from_ordinal(8), None);
        assert_eq!(DayOfWeek::Sunday.ordinal(), 7);
    }

    #[test]
    fn day_of_week_matches_chrono_numbering() {
        assert_eq!(DayOfWeek::from(chrono::Weekday::Mon), DayOfWeek::Monday);
        assert_eq!(chrono::Weekday::from(DayOfWeek::Sunday), chrono::Weekday::Sun);
        for ordinal in 1..=7 {
            let day = DayOfWeek::from_ordinal(ordinal).unwrap();
            let weekday: chrono::Weekday = day.into();
            assert_eq!(weekday.number_from_monday() as u8, day.ordinal());
        }
    }
}
