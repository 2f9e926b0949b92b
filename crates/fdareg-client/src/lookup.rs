//! # Registry Lookup Pipeline
//!
//! Resolves a country, queries openFDA with one of three strategies, and
//! returns normalized manufacturer records located in that country.
//!
//! | Strategy | Requests | Country filter |
//! |----------|----------|----------------|
//! | [`Strategy::ServerSide`] | one registration search by product and country | registry, then re-checked locally |
//! | [`Strategy::ClientSide`] | one registration search by product | local |
//! | [`Strategy::TwoStage`] | one device search, then one registration search per labeler | local |
//!
//! Every query failure is absorbed where it happens: it is logged, recorded
//! as a [`Notice`], and treated as an empty result. A 404 from openFDA means
//! "no matches"; it is reported the same way, with [`ErrorKind::NotFound`].
//!
//! Two-stage results are not deduplicated. If two labelers resolve to the
//! same registrant, that registrant is listed twice.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use fdareg_core::{
    lookup_country, retain_country, CoreError, CountryCode, ErrorKind, LabelerName, ProductCode,
    RawRegistration, RegistrationRecord,
};

use crate::error::OpenFdaError;
use crate::registration::RegistrationQuery;
use crate::search::SearchEnvelope;
use crate::{udi, OpenFdaClient};

/// Registration searches allowed in flight at once during fan-out.
const FAN_OUT_CONCURRENCY: usize = 4;

/// How registrations are fetched and filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Ask the registry for product and country in one search.
    ServerSide,
    /// Fetch all registrations for the product, filter by country locally.
    ClientSide,
    /// Discover labelers for the product, search registrations per labeler,
    /// filter by country locally.
    TwoStage,
}

impl Strategy {
    /// Every strategy, in documentation order.
    pub const ALL: [Strategy; 3] = [Self::ServerSide, Self::ClientSide, Self::TwoStage];

    /// The kebab-case name used on the command line and in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ServerSide => "server-side",
            Self::ClientSide => "client-side",
            Self::TwoStage => "two-stage",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| {
                format!("unknown strategy {s:?} (expected server-side, client-side or two-stage)")
            })
    }
}

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

impl std::fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A user-facing message produced while running a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    /// Set when the notice reports a failed query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ErrorKind>,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
            kind: None,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
            kind: None,
        }
    }

    fn query_failed(context: &str, err: &OpenFdaError) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: format!("{context} failed ({}): {err}", err.kind()),
            kind: Some(err.kind()),
        }
    }
}

/// How a completed lookup turned out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    Found,
    /// Two-stage only: the device search produced no labelers, so no
    /// registration searches were made.
    NoLabelers,
    NoManufacturers,
}

/// The result of [`RegistryLookup::run`].
#[derive(Debug, Clone, Serialize)]
pub struct LookupOutcome {
    /// Display name of the resolved country.
    pub country_name: String,
    pub country_code: CountryCode,
    pub product_code: ProductCode,
    pub strategy: Strategy,
    /// Labelers found by the two-stage strategy; `None` for the others.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labelers: Option<BTreeSet<LabelerName>>,
    pub records: Vec<RegistrationRecord>,
    pub notices: Vec<Notice>,
}

impl LookupOutcome {
    pub fn status(&self) -> OutcomeStatus {
        match &self.labelers {
            Some(labelers) if labelers.is_empty() => OutcomeStatus::NoLabelers,
            _ if self.records.is_empty() => OutcomeStatus::NoManufacturers,
            _ => OutcomeStatus::Found,
        }
    }

    /// One-line description of the outcome for the user.
    pub fn summary(&self) -> String {
        match self.status() {
            OutcomeStatus::Found => format!(
                "Found {} manufacturer(s) in {}.",
                self.records.len(),
                self.country_name
            ),
            OutcomeStatus::NoLabelers => "No labelers found for this product code.".to_string(),
            OutcomeStatus::NoManufacturers => format!(
                "No manufacturers found in {} for that product code.",
                self.country_name
            ),
        }
    }
}

/// Input rejected before any request is made.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("invalid country: {0:?} is not a known country name or code")]
    UnknownCountry(String),
    #[error("invalid product code: {0}")]
    InvalidProductCode(#[from] CoreError),
}

/// The registry lookup service.
#[derive(Debug, Clone)]
pub struct RegistryLookup {
    client: OpenFdaClient,
}

impl RegistryLookup {
    pub fn new(client: OpenFdaClient) -> Self {
        Self { client }
    }

    /// Run a full lookup for `country` and `product_code`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] for an unknown country or a blank product
    /// code. Query failures are reported in [`LookupOutcome::notices`].
    pub async fn run(
        &self,
        country: &str,
        product_code: &str,
        strategy: Strategy,
    ) -> Result<LookupOutcome, LookupError> {
        let reference = lookup_country(country)
            .ok_or_else(|| LookupError::UnknownCountry(country.trim().to_string()))?;
        let country_code = reference.code();
        let product_code = ProductCode::new(product_code)?;

        tracing::info!(
            country = %country_code,
            product_code = %product_code,
            %strategy,
            "starting registry lookup"
        );

        let mut notices = Vec::new();
        let (labelers, records) = match strategy {
            Strategy::ServerSide => {
                let query = RegistrationQuery::ProductAndCountry {
                    product_code: product_code.clone(),
                    country: country_code.clone(),
                };
                let raw = self.query_registrations(&query, &mut notices).await;
                (None, retain_country(&raw, &country_code))
            }
            Strategy::ClientSide => {
                let query = RegistrationQuery::Product(product_code.clone());
                let raw = self.query_registrations(&query, &mut notices).await;
                (None, retain_country(&raw, &country_code))
            }
            Strategy::TwoStage => {
                let labelers = self.discover_labelers(&product_code, &mut notices).await;
                let records = if labelers.is_empty() {
                    Vec::new()
                } else {
                    notices.push(Notice::info(format!(
                        "Found {} labeler(s) for product code '{}'.",
                        labelers.len(),
                        product_code
                    )));
                    self.aggregate(&labelers, &country_code, &mut notices).await
                };
                (Some(labelers), records)
            }
        };

        tracing::info!(
            records = records.len(),
            notices = notices.len(),
            "registry lookup complete"
        );

        Ok(LookupOutcome {
            country_name: reference.name.to_string(),
            country_code,
            product_code,
            strategy,
            labelers,
            records,
            notices,
        })
    }

    /// Distinct labeler names on devices classified under `product_code`.
    ///
    /// A failed search yields an empty set and a notice.
    pub async fn discover_labelers(
        &self,
        product_code: &ProductCode,
        notices: &mut Vec<Notice>,
    ) -> BTreeSet<LabelerName> {
        let result = self.client.devices().search_by_product_code(product_code).await;
        let devices = absorb(result, "Device identification search", notices);
        let labelers = udi::labeler_names(&devices);
        tracing::debug!(
            product_code = %product_code,
            devices = devices.len(),
            labelers = labelers.len(),
            "labeler discovery complete"
        );
        labelers
    }

    /// Raw registrations matching `query`.
    ///
    /// A failed search yields an empty list and a notice.
    pub async fn query_registrations(
        &self,
        query: &RegistrationQuery,
        notices: &mut Vec<Notice>,
    ) -> Vec<RawRegistration> {
        let result = self.client.registrations().search(query).await;
        absorb(result, &format!("Registration search [{query}]"), notices)
    }

    /// Registrations for every labeler, restricted to `country`.
    ///
    /// Searches run concurrently; results are concatenated in labeler order.
    /// A failed search for one labeler does not affect the others.
    pub async fn aggregate(
        &self,
        labelers: &BTreeSet<LabelerName>,
        country: &CountryCode,
        notices: &mut Vec<Notice>,
    ) -> Vec<RegistrationRecord> {
        let limiter = Arc::new(Semaphore::new(FAN_OUT_CONCURRENCY));
        let mut tasks = JoinSet::new();

        for (idx, labeler) in labelers.iter().enumerate() {
            let client = self.client.registrations().clone();
            let limiter = Arc::clone(&limiter);
            let query = RegistrationQuery::Registrant(labeler.clone());
            tasks.spawn(async move {
                let _permit = limiter.acquire_owned().await;
                let result = client.search(&query).await;
                (idx, query, result)
            });
        }

        let mut finished = Vec::with_capacity(labelers.len());
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(done) => finished.push(done),
                Err(e) => {
                    tracing::error!("registration search task failed: {e}");
                    notices.push(Notice {
                        level: NoticeLevel::Error,
                        message: format!("A registration search did not complete: {e}"),
                        kind: None,
                    });
                }
            }
        }
        finished.sort_by_key(|(idx, _, _)| *idx);

        let mut records = Vec::new();
        for (_, query, result) in finished {
            let raw = absorb(result, &format!("Registration search [{query}]"), notices);
            records.extend(retain_country(&raw, country));
        }
        records
    }
}

/// Unwrap a search result, converting failure into an empty list.
fn absorb<T>(
    result: Result<SearchEnvelope<T>, OpenFdaError>,
    context: &str,
    notices: &mut Vec<Notice>,
) -> Vec<T> {
    match result {
        Ok(envelope) => {
            if envelope.is_truncated() {
                let total = envelope.total().unwrap_or_default();
                tracing::warn!(context, returned = envelope.results.len(), total, "results truncated");
                notices.push(Notice::warning(format!(
                    "{context}: showing the first {} of {total} matching records.",
                    envelope.results.len()
                )));
            }
            envelope.results
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::info!(context, endpoint = err.endpoint(), "no matching records");
            notices.push(Notice {
                level: NoticeLevel::Warning,
                message: format!("{context} returned no matching records (HTTP 404)."),
                kind: Some(ErrorKind::NotFound),
            });
            Vec::new()
        }
        Err(err) => {
            tracing::warn!(
                context,
                endpoint = err.endpoint(),
                kind = %err.kind(),
                "query failed: {err}"
            );
            notices.push(Notice::query_failed(context, &err));
            Vec::new()
        }
    }
}
