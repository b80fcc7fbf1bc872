//! Entity hierarchy resolution: preference, role link, current version.

use chrono::NaiveDate;
use tracing::debug;

use scoresheet_model::{AddressChoice, EntityRole, EntityVersion, OfferingId};

use crate::address::AddressSource;
use crate::store::RecordStore;

/// Version valid at `date`. The selection is total: when records overlap,
/// the highest start date wins, so the outcome never depends on store order.
pub fn current_version(versions: &[EntityVersion], date: NaiveDate) -> Option<&EntityVersion> {
    versions
        .iter()
        .filter(|version| version.contains(date))
        .max_by_key(|version| version.start_date)
}

/// Resolve the score sheet address source of a course offering at `as_of`.
///
/// A CUSTOM preference wins outright and never consults the entity links.
/// Otherwise the preferred role's entity is looked up; a missing link or a
/// version gap at `as_of` resolves to `None`, while a missing address
/// record resolves to an all-blank entity address. An offering without a
/// saved preference uses its administration entity.
pub fn resolve_entity_address(
    store: &impl RecordStore,
    offering: OfferingId,
    as_of: NaiveDate,
) -> Option<AddressSource> {
    let choice = store
        .address_preference(offering)
        .map(|preference| preference.choice)
        .unwrap_or(AddressChoice::EntityAdministration);
    let role = match choice {
        AddressChoice::Custom(custom) => return Some(AddressSource::Custom(custom)),
        AddressChoice::EntityAdministration => EntityRole::Administration,
        AddressChoice::EntityManagement => EntityRole::Management,
    };
    let Some(entity) = store.linked_entity(offering, role) else {
        debug!(%offering, %role, "no linked entity for offering");
        return None;
    };
    let versions = store.entity_versions(entity.id);
    let version = current_version(&versions, as_of)?;
    let address = store.entity_address(entity.id).unwrap_or_default();
    Some(AddressSource::Entity {
        address,
        email: entity.email,
        recipient: version.verbose_title(),
    })
}
