//! In-memory record store deserialized from a JSON snapshot.
//!
//! The CLI and the test suite feed the assembler through this store; a
//! deployment against live storage implements [`RecordStore`] directly.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use scoresheet_model::{
    Attribution, CourseOffering, DeadlineRecord, EnrollmentId, EnrollmentState, EntityId,
    EntityRole, EntityVersion, ExamEnrollment, LearningUnitOffering, OfferingId,
    OrganizationalEntity, PostalAddress, Result, ScoreSheetAddressPreference, SheetError, UnitId,
};

use crate::store::RecordStore;

/// Postal address attached to an entity.
#[derive(Debug, Clone, Deserialize)]
pub struct EntityAddressRecord {
    pub entity_id: EntityId,
    pub address: PostalAddress,
}

/// Role-tagged link between a course offering and an entity.
#[derive(Debug, Clone, Deserialize)]
pub struct OfferingEntityLink {
    pub offering_id: OfferingId,
    pub role: EntityRole,
    pub entity_id: EntityId,
}

/// An exam enrollment together with its current state.
#[derive(Debug, Clone, Deserialize)]
pub struct EnrollmentRecord {
    pub enrollment: ExamEnrollment,
    pub state: EnrollmentState,
}

/// Per-student deadline for one session number.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionDeadline {
    pub enrollment_id: EnrollmentId,
    pub session: u8,
    pub record: DeadlineRecord,
}

/// Every record kind the assembler reads, in one deserializable bundle.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemorySnapshot {
    #[serde(default)]
    pub entities: Vec<OrganizationalEntity>,
    #[serde(default)]
    pub entity_versions: Vec<EntityVersion>,
    #[serde(default)]
    pub entity_addresses: Vec<EntityAddressRecord>,
    #[serde(default)]
    pub offerings: Vec<CourseOffering>,
    #[serde(default)]
    pub offering_entities: Vec<OfferingEntityLink>,
    #[serde(default)]
    pub address_preferences: Vec<ScoreSheetAddressPreference>,
    #[serde(default)]
    pub learning_units: Vec<LearningUnitOffering>,
    #[serde(default)]
    pub attributions: Vec<Attribution>,
    #[serde(default)]
    pub enrollments: Vec<EnrollmentRecord>,
    #[serde(default)]
    pub deadlines: Vec<SessionDeadline>,
}

impl MemorySnapshot {
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("parse record snapshot")
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read snapshot {}", path.display()))?;
        Self::from_json_str(&json)
    }

    /// The enrollments to assemble, detached from their state records.
    pub fn exam_enrollments(&self) -> Vec<ExamEnrollment> {
        self.enrollments
            .iter()
            .map(|record| record.enrollment.clone())
            .collect()
    }
}

impl RecordStore for MemorySnapshot {
    fn entity_versions(&self, entity: EntityId) -> Vec<EntityVersion> {
        let mut versions: Vec<EntityVersion> = self
            .entity_versions
            .iter()
            .filter(|version| version.entity_id == entity)
            .cloned()
            .collect();
        versions.sort_by_key(|version| version.start_date);
        versions
    }

    fn linked_entity(
        &self,
        offering: OfferingId,
        role: EntityRole,
    ) -> Option<OrganizationalEntity> {
        let link = self
            .offering_entities
            .iter()
            .find(|link| link.offering_id == offering && link.role == role)?;
        self.entities
            .iter()
            .find(|entity| entity.id == link.entity_id)
            .cloned()
    }

    fn address_preference(&self, offering: OfferingId) -> Option<ScoreSheetAddressPreference> {
        self.address_preferences
            .iter()
            .find(|preference| preference.offering_id == offering)
            .cloned()
    }

    fn entity_address(&self, entity: EntityId) -> Option<PostalAddress> {
        self.entity_addresses
            .iter()
            .find(|record| record.entity_id == entity)
            .map(|record| record.address.clone())
    }

    fn attributions(&self, unit: UnitId) -> Vec<Attribution> {
        self.attributions
            .iter()
            .filter(|attribution| attribution.unit_id == unit)
            .cloned()
            .collect()
    }

    fn deadline(&self, enrollment: EnrollmentId, session: u8) -> Option<DeadlineRecord> {
        self.deadlines
            .iter()
            .find(|entry| entry.enrollment_id == enrollment && entry.session == session)
            .map(|entry| entry.record)
    }

    fn enrollment_state(&self, enrollment: EnrollmentId) -> EnrollmentState {
        self.enrollments
            .iter()
            .find(|record| record.enrollment.id == enrollment)
            .map(|record| record.state)
            .unwrap_or(EnrollmentState::Other)
    }

    fn learning_unit(&self, unit: UnitId) -> Result<LearningUnitOffering> {
        self.learning_units
            .iter()
            .find(|entry| entry.id == unit)
            .cloned()
            .ok_or(SheetError::UnknownUnit(unit))
    }

    fn course_offering(&self, offering: OfferingId) -> Result<CourseOffering> {
        self.offerings
            .iter()
            .find(|entry| entry.id == offering)
            .cloned()
            .ok_or(SheetError::UnknownOffering(offering))
    }
}
