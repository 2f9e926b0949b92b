//! # fdareg-client -- Typed Rust client for the openFDA device registry
//!
//! Provides typed access to the two openFDA endpoints fdareg needs:
//! - **Device identification** via `/device/udi.json` (labeler discovery)
//! - **Registration listing** via `/device/registrationlisting.json`
//!
//! and the [`RegistryLookup`] pipeline that turns a country name and a
//! product code into a list of manufacturer records.
//!
//! ## Failure model
//!
//! The sub-clients return `Result<_, OpenFdaError>`. [`RegistryLookup`]
//! catches every query failure at the individual call, records it as a
//! [`Notice`], and carries on with an empty result for that call. Only
//! invalid input (unknown country, blank product code) stops a lookup, and
//! it does so before any request is sent.

pub mod config;
pub mod error;
pub mod lookup;
pub mod registration;
pub(crate) mod retry;
pub mod search;
pub mod udi;

pub use config::{ConfigError, OpenFdaConfig};
pub use error::OpenFdaError;
pub use lookup::{
    LookupError, LookupOutcome, Notice, NoticeLevel, OutcomeStatus, RegistryLookup, Strategy,
};
pub use registration::RegistrationQuery;
pub use search::{SearchEnvelope, PAGE_LIMIT};

use std::time::Duration;

const USER_AGENT: &str = concat!("fdareg/", env!("CARGO_PKG_VERSION"));

/// Top-level openFDA client. Holds a sub-client per endpoint.
#[derive(Debug, Clone)]
pub struct OpenFdaClient {
    devices: udi::UdiClient,
    registrations: registration::RegistrationClient,
}

impl OpenFdaClient {
    /// Create a new openFDA client from configuration.
    pub fn new(config: OpenFdaConfig) -> Result<Self, OpenFdaError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| OpenFdaError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        tracing::debug!(
            base_url = %config.base_url,
            timeout_secs = config.timeout_secs,
            max_retries = config.max_retries,
            "openFDA client ready"
        );

        Ok(Self {
            devices: udi::UdiClient::new(
                http.clone(),
                config.base_url.clone(),
                config.max_retries,
            ),
            registrations: registration::RegistrationClient::new(
                http,
                config.base_url,
                config.max_retries,
            ),
        })
    }

    /// Access the device-identification client.
    pub fn devices(&self) -> &udi::UdiClient {
        &self.devices
    }

    /// Access the registration-listing client.
    pub fn registrations(&self) -> &registration::RegistrationClient {
        &self.registrations
    }
}
