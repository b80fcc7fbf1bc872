pub mod document;
pub mod enums;
pub mod error;
pub mod ids;
pub mod records;

pub use document::{
    AddressFields, EnrollmentRow, InstructorName, LearningUnitBlock, PostalFields, ProgramBlock,
    ScoreSheet, ScoresResponsible,
};
pub use enums::{EnrollmentState, EntityRole, PersonAddressLabel};
pub use error::{Result, SheetError};
pub use ids::{AttributionId, EnrollmentId, EntityId, OfferingId, UnitId};
pub use records::{
    AddressChoice, Attribution, CourseOffering, CustomAddress, DeadlineRecord, EntityVersion,
    ExamEnrollment, Instructor, LearningUnitOffering, OrganizationalEntity, PersonAddress,
    PostalAddress, ScoreSheetAddressPreference, Student,
};
