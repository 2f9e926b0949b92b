//! # Registration Records
//!
//! [`RawRegistration`] mirrors one result of the registration-listing
//! search. Every field is optional because the registry omits fields freely.
//! [`RegistrationRecord`] is the normalized row shown to the user.
//!
//! ## Missing fields
//!
//! Name and FEI number fall back to [`MISSING_FIELD_PLACEHOLDER`]. Address
//! components fall back to the empty string, so the composite address keeps
//! its separators: a record with no street starts with `", "`.

use serde::{Deserialize, Serialize};

use crate::identity::CountryCode;

/// Shown in place of a missing manufacturer name or FEI number.
pub const MISSING_FIELD_PLACEHOLDER: &str = "N/A";

/// A registration-listing record as returned by the registry.
///
/// Unknown fields are ignored so that schema additions on the registry side
/// do not break decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRegistration {
    #[serde(default)]
    pub registrant_name: Option<String>,
    #[serde(default)]
    pub fei_number: Option<String>,
    #[serde(default)]
    pub address_1: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state_province: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
}

impl RawRegistration {
    /// Whether this record belongs to `country`.
    pub fn is_in(&self, country: &CountryCode) -> bool {
        country.matches(self.country_code.as_deref())
    }

    /// Map into the display entity.
    pub fn normalize(&self) -> RegistrationRecord {
        let placeholder = |v: &Option<String>| {
            v.clone()
                .unwrap_or_else(|| MISSING_FIELD_PLACEHOLDER.to_string())
        };
        let part = |v: &Option<String>| v.clone().unwrap_or_default();

        let address_line = part(&self.address_1);
        let city = part(&self.city);
        let state_or_province = part(&self.state_province);
        let postal_code = part(&self.zip_code);
        let country_code = part(&self.country_code);
        let address =
            format!("{address_line}, {city}, {state_or_province} {postal_code}, {country_code}");

        RegistrationRecord {
            manufacturer_name: placeholder(&self.registrant_name),
            fei_number: placeholder(&self.fei_number),
            address_line,
            city,
            state_or_province,
            postal_code,
            country_code,
            address,
        }
    }
}

/// A manufacturer row, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    pub manufacturer_name: String,
    pub fei_number: String,
    pub address_line: String,
    pub city: String,
    pub state_or_province: String,
    pub postal_code: String,
    /// Country code exactly as the registry reported it.
    pub country_code: String,
    /// `"street, city, state zip, country"`.
    pub address: String,
}

/// Keep the records located in `country` and normalize them.
///
/// Input order is preserved and nothing is deduplicated.
pub fn retain_country<'a, I>(records: I, country: &CountryCode) -> Vec<RegistrationRecord>
where
    I: IntoIterator<Item = &'a RawRegistration>,
{
    records
        .into_iter()
        .filter(|r| r.is_in(country))
        .map(RawRegistration::normalize)
        .collect()
}
