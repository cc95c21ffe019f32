//! Schema type identifiers.
//!
//! Every thing type carries a fixed 128-bit GUID that tags which schema a
//! wire payload conforms to. The platform client uses it to route raw XML to
//! the right type before parsing.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

/// The GUID identifying a thing type's schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(Uuid);

impl TypeId {
    pub const fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for TypeId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl From<Uuid> for TypeId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_text() {
        let id: TypeId = "879e7c04-4e8a-4707-9ad3-b054df467ce4".parse().unwrap();
        assert_eq!(id.to_string(), "879e7c04-4e8a-4707-9ad3-b054df467ce4");
    }

    #[test]
    fn rejects_malformed_guids() {
        assert!("not-a-guid".parse::<TypeId>().is_err());
    }
}
