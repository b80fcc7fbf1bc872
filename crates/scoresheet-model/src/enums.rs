//! Type-safe enumerations for score sheet records.
//!
//! These enums replace the free-form state and role strings the upstream
//! administrative records carry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role a linked organizational entity plays for a course offering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityRole {
    /// Entity handling student administration for the offering.
    Administration,
    /// Entity academically managing the offering.
    Management,
}

impl EntityRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityRole::Administration => "ENTITY_ADMINISTRATION",
            EntityRole::Management => "ENTITY_MANAGEMENT",
        }
    }
}

impl fmt::Display for EntityRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of an exam enrollment.
///
/// Only `Enrolled` rows get a deadline on the sheet; every other state is
/// shown with a blank deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnrollmentState {
    Enrolled,
    NotEnrolled,
    /// Any other terminal state carried by upstream records.
    Other,
}

impl EnrollmentState {
    pub fn is_enrolled(&self) -> bool {
        matches!(self, EnrollmentState::Enrolled)
    }
}

/// Label of a person's postal address record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PersonAddressLabel {
    Professional,
    Private,
    Other,
}
