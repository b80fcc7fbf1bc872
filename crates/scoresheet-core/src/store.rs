//! Abstract contracts over externally owned records.
//!
//! The assembler only ever reads already-committed records through this
//! trait. No snapshot isolation is established here; callers needing
//! point-in-time consistency across the joined reads must supply it at the
//! storage boundary.

use scoresheet_model::{
    Attribution, CourseOffering, DeadlineRecord, EnrollmentId, EnrollmentState, EntityId,
    EntityRole, EntityVersion, LearningUnitOffering, OfferingId, OrganizationalEntity,
    PostalAddress, Result, ScoreSheetAddressPreference, UnitId,
};

pub trait RecordStore {
    /// Versions of an entity, ordered by start date ascending.
    fn entity_versions(&self, entity: EntityId) -> Vec<EntityVersion>;

    /// Organizational entity linked to an offering for the given role.
    fn linked_entity(&self, offering: OfferingId, role: EntityRole)
    -> Option<OrganizationalEntity>;

    /// Saved score sheet address preference of an offering, when any.
    fn address_preference(&self, offering: OfferingId) -> Option<ScoreSheetAddressPreference>;

    /// Postal address attached to an entity, shared by all its versions.
    fn entity_address(&self, entity: EntityId) -> Option<PostalAddress>;

    /// Instructor attributions of a learning unit's container.
    fn attributions(&self, unit: UnitId) -> Vec<Attribution>;

    /// Per-student deadline record for the matching session number.
    fn deadline(&self, enrollment: EnrollmentId, session: u8) -> Option<DeadlineRecord>;

    fn enrollment_state(&self, enrollment: EnrollmentId) -> EnrollmentState;

    /// Fails with `SheetError::UnknownUnit` on a dangling reference; the
    /// assembler propagates that to the caller unrecovered.
    fn learning_unit(&self, unit: UnitId) -> Result<LearningUnitOffering>;

    /// Fails with `SheetError::UnknownOffering` on a dangling reference.
    fn course_offering(&self, offering: OfferingId) -> Result<CourseOffering>;
}
