//! Score sheet assembly core.
//!
//! Turns raw enrollment, attribution, deadline and organizational-entity
//! records into a structured score sheet document:
//!
//! - [`entity`]: resolve a course offering's address source at a date.
//! - [`address`]: project any source into the uniform address mapping.
//! - [`responsible`]: find the designated score responsible of a unit.
//! - [`deadline`]: format the per-enrollment submission deadline.
//! - [`assemble`]: group everything into the final document.
//!
//! All of it is a pure read-time projection over a [`RecordStore`]; no
//! record is ever written back.

pub mod address;
pub mod assemble;
pub mod deadline;
pub mod entity;
pub mod locale;
pub mod responsible;
pub mod snapshot;
pub mod store;

pub use assemble::ScoreSheetAssembler;
pub use locale::{Locale, Localizer};
pub use snapshot::MemorySnapshot;
pub use store::RecordStore;
