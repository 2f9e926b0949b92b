//! Typed client for the openFDA registration-listing endpoint.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/device/registrationlisting.json?search=<expr>&limit=100` | Registrations by product, country, or registrant |
//!
//! The search expression is built from a [`RegistrationQuery`]:
//!
//! | Query | Expression |
//! |-------|------------|
//! | `ProductAndCountry` | `product_code:FOZ AND country_code:US` |
//! | `Product` | `product_code:FOZ` |
//! | `Registrant` | `registrant_name:"Acme Medical"` |

use fdareg_core::{CountryCode, LabelerName, ProductCode, RawRegistration};

use crate::error::OpenFdaError;
use crate::search::{endpoint_url, get_search, SearchEnvelope};

const REGISTRATION_PATH: &str = "device/registrationlisting.json";
const ENDPOINT: &str = "GET /device/registrationlisting.json";

/// What to ask the registration-listing endpoint for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationQuery {
    /// Registrations for a product code located in one country. The
    /// registry applies the country filter.
    ProductAndCountry {
        product_code: ProductCode,
        country: CountryCode,
    },
    /// Every registration for a product code, in any country.
    Product(ProductCode),
    /// Registrations filed under a registrant name.
    Registrant(LabelerName),
}

impl RegistrationQuery {
    /// The openFDA search expression for this query.
    pub fn search_expression(&self) -> String {
        match self {
            Self::ProductAndCountry {
                product_code,
                country,
            } => format!(
                "product_code:{} AND country_code:{}",
                product_code.as_str(),
                country.as_str()
            ),
            Self::Product(product_code) => format!("product_code:{}", product_code.as_str()),
            // Embedded quotes would terminate the phrase early.
            Self::Registrant(name) => {
                format!("registrant_name:\"{}\"", name.as_str().replace('"', ""))
            }
        }
    }

    /// Whether the registry filters the response by country itself.
    pub fn is_country_filtered(&self) -> bool {
        matches!(self, Self::ProductAndCountry { .. })
    }
}

impl std::fmt::Display for RegistrationQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.search_expression())
    }
}

/// Client for the registration-listing endpoint.
#[derive(Debug, Clone)]
pub struct RegistrationClient {
    http: reqwest::Client,
    base_url: url::Url,
    max_retries: u32,
}

impl RegistrationClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url, max_retries: u32) -> Self {
        Self {
            http,
            base_url,
            max_retries,
        }
    }

    /// Fetch up to one page of registrations matching `query`.
    ///
    /// Calls `GET {base_url}/device/registrationlisting.json?search=<expr>&limit=100`.
    pub async fn search(
        &self,
        query: &RegistrationQuery,
    ) -> Result<SearchEnvelope<RawRegistration>, OpenFdaError> {
        let url = endpoint_url(&self.base_url, REGISTRATION_PATH);
        let search = query.search_expression();
        get_search(&self.http, &url, ENDPOINT, &search, self.max_retries).await
    }
}
