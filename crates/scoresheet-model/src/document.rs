//! The assembled score sheet document.
//!
//! This is a transient, fully materialized projection: nothing here is
//! persisted, and the structural shape is always complete. Consumers must
//! treat empty strings as "no data", never as an error signal.

use serde::{Deserialize, Serialize};

/// Postal subset of an address, already localized for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalFields {
    pub location: String,
    pub postal_code: String,
    pub city: String,
    /// Localized country display name, not the ISO code.
    pub country: String,
    pub phone: String,
    pub fax: String,
}

/// Uniform address mapping printed on a score sheet.
///
/// All eight fields are always present; absent data is an empty string, so
/// consumers never need existence checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressFields {
    pub location: String,
    pub postal_code: String,
    pub city: String,
    pub country: String,
    pub phone: String,
    pub fax: String,
    pub email: String,
    pub recipient: String,
}

impl AddressFields {
    pub fn from_postal(postal: PostalFields, email: String, recipient: String) -> Self {
        Self {
            location: postal.location,
            postal_code: postal.postal_code,
            city: postal.city,
            country: postal.country,
            phone: postal.phone,
            fax: postal.fax,
            email,
            recipient,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructorName {
    pub first_name: String,
    pub last_name: String,
}

/// Who signs off on encoded scores for a learning unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScoresResponsible {
    /// The single instructor flagged as score responsible.
    Single {
        first_name: String,
        last_name: String,
        address: PostalFields,
    },
    /// No instructor is flagged; the sheet lists every attributed
    /// instructor instead.
    All { instructors: Vec<InstructorName> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentRow {
    pub registration_id: String,
    pub last_name: String,
    pub first_name: String,
    /// Formatted submission deadline, or empty for rows without one.
    pub deadline: String,
}

/// Enrollments of one program within a learning unit block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramBlock {
    pub acronym: String,
    pub enrollments: Vec<EnrollmentRow>,
}

/// One course offering's worth of score sheet data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningUnitBlock {
    pub acronym: String,
    pub academic_year: i32,
    pub decimal_scores: bool,
    pub address: AddressFields,
    pub scores_responsible: ScoresResponsible,
    pub programs: Vec<ProgramBlock>,
}

/// The full printable score sheet document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSheet {
    /// Formatted date of assembly; recomputed on every build.
    pub publication_date: String,
    pub learning_unit_years: Vec<LearningUnitBlock>,
}
