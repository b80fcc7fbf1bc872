//! Input records: read-only views over externally owned storage.
//!
//! All of these are created and mutated by upstream administrative
//! workflows; the assembler never writes them back.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::PersonAddressLabel;
use crate::ids::{AttributionId, EnrollmentId, EntityId, OfferingId, UnitId};

/// An administrative or academic organizational unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationalEntity {
    pub id: EntityId,
    #[serde(default)]
    pub parent: Option<EntityId>,
    /// Generic mailbox of the unit, printed on the sheet when the address
    /// is entity-sourced.
    #[serde(default)]
    pub email: Option<String>,
}

/// Time-bounded snapshot of an entity's acronym and title.
///
/// Entities get renamed and restructured over time; at most one version is
/// valid for a given entity at any instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityVersion {
    pub entity_id: EntityId,
    pub acronym: String,
    pub title: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl EntityVersion {
    /// Validity is the half-open interval `[start_date, end_date)`; a
    /// missing end date means the version is still open.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && self.end_date.is_none_or(|end| date < end)
    }

    /// Label printed as the sheet recipient, acronym first.
    pub fn verbose_title(&self) -> String {
        if self.title.is_empty() {
            self.acronym.clone()
        } else {
            format!("{} - {}", self.acronym, self.title)
        }
    }
}

/// Raw postal attributes shared by entity addresses, person addresses and
/// the literal fields of a custom preference. Country is an ISO code here;
/// rendering localizes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalAddress {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub fax: Option<String>,
}

/// One year's instance of an academic program.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseOffering {
    pub id: OfferingId,
    pub acronym: String,
    pub academic_year: i32,
}

/// Literal address entered by hand for a course offering, with its own
/// contact mailbox and recipient label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomAddress {
    pub address: PostalAddress,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub recipient: Option<String>,
}

/// Per-offering choice of score sheet address source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "choice", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AddressChoice {
    EntityAdministration,
    EntityManagement,
    Custom(CustomAddress),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreSheetAddressPreference {
    pub offering_id: OfferingId,
    #[serde(flatten)]
    pub choice: AddressChoice,
}

/// One year's instance of a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningUnitOffering {
    pub id: UnitId,
    pub acronym: String,
    pub academic_year: i32,
    /// Whether decimal scores may be encoded for this unit.
    #[serde(default)]
    pub decimal_scores: bool,
}

/// A labeled postal address of an instructor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonAddress {
    pub label: PersonAddressLabel,
    pub address: PostalAddress,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instructor {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub addresses: Vec<PersonAddress>,
}

/// Assignment of an instructor to a learning unit, optionally flagged as
/// score responsible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attribution {
    pub id: AttributionId,
    pub unit_id: UnitId,
    pub instructor: Instructor,
    #[serde(default)]
    pub score_responsible: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub registration_id: String,
    pub first_name: String,
    pub last_name: String,
}

/// A student's registration for a specific exam session of a learning unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamEnrollment {
    pub id: EnrollmentId,
    pub unit_id: UnitId,
    /// Program offering the student follows, reached through the
    /// enrollment chain.
    pub offering_id: OfferingId,
    pub session: u8,
    pub student: Student,
}

/// Per-student submission deadline for one exam session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineRecord {
    pub deadline: NaiveDate,
    /// Earlier deadline granted to the tutor, when one was computed.
    #[serde(default)]
    pub deadline_tutor: Option<NaiveDate>,
}

impl DeadlineRecord {
    /// The date shown on the sheet: the tutor variant wins when present.
    pub fn effective(&self) -> NaiveDate {
        self.deadline_tutor.unwrap_or(self.deadline)
    }
}
