//! Typed client for the openFDA device-identification endpoint (GUDID).
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/device/udi.json?search=product_code:<code>&limit=100` | Devices by product code |
//!
//! Only `labeler_name` is decoded; other device fields are ignored.

use std::collections::BTreeSet;

use serde::Deserialize;

use fdareg_core::{LabelerName, ProductCode};

use crate::error::OpenFdaError;
use crate::search::{endpoint_url, get_search, SearchEnvelope};

const UDI_PATH: &str = "device/udi.json";
const ENDPOINT: &str = "GET /device/udi.json";

/// The part of a device record the lookup needs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeviceRecord {
    #[serde(default)]
    pub labeler_name: Option<String>,
}

/// Distinct, trimmed, non-empty labeler names across `devices`.
pub fn labeler_names<'a, I>(devices: I) -> BTreeSet<LabelerName>
where
    I: IntoIterator<Item = &'a DeviceRecord>,
{
    devices
        .into_iter()
        .filter_map(|d| d.labeler_name.as_deref())
        .filter_map(|name| LabelerName::new(name).ok())
        .collect()
}

/// Search expression for devices carrying `product_code`.
pub fn product_code_search(product_code: &ProductCode) -> String {
    format!("product_code:{}", product_code.as_str())
}

/// Client for the device-identification endpoint.
#[derive(Debug, Clone)]
pub struct UdiClient {
    http: reqwest::Client,
    base_url: url::Url,
    max_retries: u32,
}

impl UdiClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url, max_retries: u32) -> Self {
        Self {
            http,
            base_url,
            max_retries,
        }
    }

    /// Fetch up to one page of devices classified under `product_code`.
    ///
    /// Calls `GET {base_url}/device/udi.json?search=product_code:<code>&limit=100`.
    pub async fn search_by_product_code(
        &self,
        product_code: &ProductCode,
    ) -> Result<SearchEnvelope<DeviceRecord>, OpenFdaError> {
        let url = endpoint_url(&self.base_url, UDI_PATH);
        let search = product_code_search(product_code);
        get_search(&self.http, &url, ENDPOINT, &search, self.max_retries).await
    }
}
