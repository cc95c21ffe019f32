//! The thing types: one module per schema.

pub mod aerobic_profile;
pub mod alert;
pub mod allergy;
pub mod basic;
pub mod blood_glucose;
pub mod exercise;
pub mod hba1c;
pub mod heart_rate;
pub mod height;
pub mod medication;
pub mod password_protected_package;
pub mod weight;
pub mod weight_goal;

pub use aerobic_profile::AerobicProfile;
pub use alert::Alert;
pub use allergy::Allergy;
pub use basic::Basic;
pub use blood_glucose::BloodGlucose;
pub use exercise::Exercise;
pub use hba1c::HbA1C;
pub use heart_rate::HeartRate;
pub use height::Height;
pub use medication::Medication;
pub use password_protected_package::PasswordProtectedPackage;
pub use weight::Weight;
pub use weight_goal::WeightGoal;
