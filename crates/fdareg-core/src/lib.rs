//! # fdareg-core -- Foundational Types for fdareg
//!
//! Pure, I/O-free building blocks shared by the registry client and the
//! command-line tool:
//!
//! - **Country reference table.** Every ISO 3166-1 country with its alpha-2
//!   and alpha-3 codes, compiled into the binary. [`resolve_country`] maps a
//!   display name (or alias, or code) to a [`CountryCode`].
//!
//! - **Validated identifiers.** [`CountryCode`], [`ProductCode`] and
//!   [`LabelerName`] are newtypes with checked constructors. No bare strings
//!   cross crate boundaries.
//!
//! - **Registration records.** [`RawRegistration`] is the wire shape of an
//!   openFDA registration-listing result; [`RegistrationRecord`] is the
//!   normalized display entity produced by [`RawRegistration::normalize`].
//!
//! ## Crate Policy
//!
//! - No dependencies on other `fdareg-*` crates.
//! - No network or filesystem access.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod country;
pub mod error;
pub mod identity;
pub mod record;

pub use country::{
    countries, country_names, lookup as lookup_country, resolve_country, CountryReference,
    COUNTRY_TABLE_VERSION,
};
pub use error::{CoreError, ErrorKind};
pub use identity::{CountryCode, LabelerName, ProductCode};
pub use record::{retain_country, RawRegistration, RegistrationRecord, MISSING_FIELD_PLACEHOLDER};
