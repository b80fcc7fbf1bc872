//! Address projection into the uniform eight-field sheet mapping.

use scoresheet_model::{AddressFields, CustomAddress, PostalAddress, PostalFields};

use crate::locale::Localizer;

/// Where a score sheet address comes from.
///
/// The two variants synthesize email and recipient differently, which is
/// why the source is a tagged variant instead of a duck-typed record.
#[derive(Debug, Clone)]
pub enum AddressSource {
    /// Address read off the entity version current at the query date.
    Entity {
        address: PostalAddress,
        /// The entity's generic mailbox.
        email: Option<String>,
        /// Acronym/title label of the current version.
        recipient: String,
    },
    /// Literal address saved on the offering's preference.
    Custom(CustomAddress),
}

/// Normalize raw postal attributes for display. Country codes are rendered
/// as localized names; absent fields become empty strings.
pub fn project_postal(address: &PostalAddress, locale: &impl Localizer) -> PostalFields {
    PostalFields {
        location: address.location.clone().unwrap_or_default(),
        postal_code: address.postal_code.clone().unwrap_or_default(),
        city: address.city.clone().unwrap_or_default(),
        country: address
            .country_code
            .as_deref()
            .map(|code| locale.country_name(code))
            .unwrap_or_default(),
        phone: address.phone.clone().unwrap_or_default(),
        fax: address.fax.clone().unwrap_or_default(),
    }
}

/// Project a source into the full eight-field mapping. Every field is
/// always present; only values fall back to empty.
pub fn project_address(source: &AddressSource, locale: &impl Localizer) -> AddressFields {
    match source {
        AddressSource::Entity {
            address,
            email,
            recipient,
        } => AddressFields::from_postal(
            project_postal(address, locale),
            email.clone().unwrap_or_default(),
            recipient.clone(),
        ),
        AddressSource::Custom(custom) => AddressFields::from_postal(
            project_postal(&custom.address, locale),
            custom.email.clone().unwrap_or_default(),
            custom.recipient.clone().unwrap_or_default(),
        ),
    }
}
