//! Score responsible resolution.

use scoresheet_model::{
    Attribution, InstructorName, PersonAddressLabel, PostalAddress, ScoresResponsible, UnitId,
};

use crate::address::project_postal;
use crate::locale::Localizer;
use crate::store::RecordStore;

/// Find the designated score responsible for a learning unit.
///
/// When several attributions carry the flag, the lowest attribution id
/// wins, so the outcome never depends on store iteration order. When none
/// carries it, the full instructor list is returned instead, ordered by
/// name.
pub fn resolve_responsible(
    store: &impl RecordStore,
    locale: &impl Localizer,
    unit: UnitId,
) -> ScoresResponsible {
    let attributions = store.attributions(unit);
    let responsible = attributions
        .iter()
        .filter(|attribution| attribution.score_responsible)
        .min_by_key(|attribution| attribution.id);
    match responsible {
        Some(attribution) => {
            let address = contact_address(attribution)
                .map(|postal| project_postal(postal, locale))
                .unwrap_or_default();
            ScoresResponsible::Single {
                first_name: attribution.instructor.first_name.clone(),
                last_name: attribution.instructor.last_name.clone(),
                address,
            }
        }
        None => {
            let mut instructors: Vec<InstructorName> = attributions
                .iter()
                .map(|attribution| InstructorName {
                    first_name: attribution.instructor.first_name.clone(),
                    last_name: attribution.instructor.last_name.clone(),
                })
                .collect();
            instructors.sort_by(|a, b| {
                (a.last_name.as_str(), a.first_name.as_str())
                    .cmp(&(b.last_name.as_str(), b.first_name.as_str()))
            });
            instructors.dedup();
            ScoresResponsible::All { instructors }
        }
    }
}

/// PROFESSIONAL address when present, any other address as fallback.
fn contact_address(attribution: &Attribution) -> Option<&PostalAddress> {
    let addresses = &attribution.instructor.addresses;
    addresses
        .iter()
        .find(|entry| entry.label == PersonAddressLabel::Professional)
        .or_else(|| addresses.first())
        .map(|entry| &entry.address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoresheet_model::{AttributionId, Instructor, PersonAddress};

    fn attribution(city: &str, label: PersonAddressLabel) -> Attribution {
        Attribution {
            id: AttributionId(1),
            unit_id: UnitId(1),
            instructor: Instructor {
                first_name: "Thomas".to_string(),
                last_name: "Durant".to_string(),
                addresses: vec![PersonAddress {
                    label,
                    address: PostalAddress {
                        city: Some(city.to_string()),
                        ..PostalAddress::default()
                    },
                }],
            },
            score_responsible: true,
        }
    }

    #[test]
    fn professional_address_preferred_over_private() {
        let mut entry = attribution("Louvain-la-Neuve", PersonAddressLabel::Professional);
        entry.instructor.addresses.push(PersonAddress {
            label: PersonAddressLabel::Private,
            address: PostalAddress {
                city: Some("Brussels".to_string()),
                ..PostalAddress::default()
            },
        });
        let address = contact_address(&entry).expect("contact address");
        assert_eq!(address.city.as_deref(), Some("Louvain-la-Neuve"));
    }

    #[test]
    fn any_address_used_when_no_professional_one() {
        let entry = attribution("Brussels", PersonAddressLabel::Private);
        let address = contact_address(&entry).expect("contact address");
        assert_eq!(address.city.as_deref(), Some("Brussels"));
    }
}
