//! Reusable sub-structures embedded by thing types.
//!
//! Each item defines its XML shape in exactly one place; composites delegate
//! to the item's `parse_xml`/`write_xml` and never inline its structure.

pub mod codable;
pub mod goal;
pub mod measurement;
pub mod time;
pub mod zones;

pub use codable::{CodableValue, CodedValue};
pub use goal::Goal;
pub use measurement::{DisplayValue, Measurement};
pub use time::{ApproximateDateTime, DateTime, StructuredDate, StructuredTime};
pub use zones::{HeartRateZone, HeartRateZoneGroup};
