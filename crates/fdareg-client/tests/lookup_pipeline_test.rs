//! End-to-end tests for `RegistryLookup` against a simulated openFDA.
//!
//! Each test mounts the device and registration endpoints on one wiremock
//! server and runs a full lookup with a given strategy.

use fdareg_client::{
    LookupError, NoticeLevel, OpenFdaClient, OpenFdaConfig, OutcomeStatus, RegistryLookup,
    Strategy,
};
use fdareg_core::{CoreError, ErrorKind};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const UDI: &str = "/device/udi.json";
const REGISTRATIONS: &str = "/device/registrationlisting.json";

fn lookup_for(mock_server: &MockServer) -> RegistryLookup {
    let config = OpenFdaConfig::local_mock(&mock_server.uri()).unwrap();
    RegistryLookup::new(OpenFdaClient::new(config).unwrap())
}

fn registration(name: &str, country: &str) -> serde_json::Value {
    serde_json::json!({
        "registrant_name": name,
        "fei_number": "3000000001",
        "address_1": "1 Main St",
        "city": "Springfield",
        "state_province": "IL",
        "zip_code": "62701",
        "country_code": country
    })
}

fn page(results: Vec<serde_json::Value>) -> ResponseTemplate {
    let total = results.len();
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "meta": {"results": {"skip": 0, "limit": 100, "total": total}},
        "results": results
    }))
}

fn not_found() -> ResponseTemplate {
    ResponseTemplate::new(404)
        .set_body_json(serde_json::json!({"error": {"code": "NOT_FOUND", "message": "No matches found!"}}))
}

// ── Input validation ─────────────────────────────────────────────────

#[tokio::test]
async fn unknown_country_halts_before_any_request() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(page(vec![]))
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = lookup_for(&mock_server)
        .run("Atlantis", "FOZ", Strategy::TwoStage)
        .await
        .unwrap_err();
    assert!(matches!(err, LookupError::UnknownCountry(ref name) if name == "Atlantis"));
}

#[tokio::test]
async fn blank_product_code_halts_before_any_request() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(page(vec![]))
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = lookup_for(&mock_server)
        .run("United States", "   ", Strategy::ServerSide)
        .await
        .unwrap_err();
    assert!(matches!(err, LookupError::InvalidProductCode(_)));
}

#[tokio::test]
async fn product_code_with_search_syntax_halts_before_any_request() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(page(vec![registration("Injected Ltd", "CN")]))
        .expect(0)
        .mount(&mock_server)
        .await;

    for strategy in [Strategy::ServerSide, Strategy::ClientSide, Strategy::TwoStage] {
        let err = lookup_for(&mock_server)
            .run("United States", "FOZ OR country_code:CN", strategy)
            .await
            .unwrap_err();
        assert!(
            matches!(
                err,
                LookupError::InvalidProductCode(CoreError::MalformedProductCode(_))
            ),
            "{strategy:?}: {err}"
        );
    }
}

// ── Server-side strategy ─────────────────────────────────────────────

#[tokio::test]
async fn server_side_returns_only_target_country() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(REGISTRATIONS))
        .and(query_param("search", "product_code:FOZ AND country_code:US"))
        .respond_with(page(vec![
            registration("Acme Medical Inc", "US"),
            registration("Stray Canada Ltd", "CA"),
            registration("Gamma Devices", "us"),
        ]))
        .expect(1)
        .mount(&mock_server)
        .await;

    let outcome = lookup_for(&mock_server)
        .run("United States", "FOZ", Strategy::ServerSide)
        .await
        .unwrap();

    assert_eq!(outcome.country_code.as_str(), "US");
    assert_eq!(outcome.status(), OutcomeStatus::Found);
    assert_eq!(outcome.records.len(), 2);
    assert!(outcome
        .records
        .iter()
        .all(|r| r.country_code.to_uppercase() == "US"));
    assert!(outcome.labelers.is_none());
}

// ── Client-side strategy ─────────────────────────────────────────────

#[tokio::test]
async fn client_side_filters_superset_locally() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(REGISTRATIONS))
        .and(query_param("search", "product_code:FOZ"))
        .respond_with(page(vec![
            registration("Acme Medical Inc", "US"),
            registration("Beta GmbH", "DE"),
            registration("Gamma Devices", "us"),
            serde_json::json!({"registrant_name": "No Country Ltd"}),
        ]))
        .expect(1)
        .mount(&mock_server)
        .await;

    let outcome = lookup_for(&mock_server)
        .run("Germany", "FOZ", Strategy::ClientSide)
        .await
        .unwrap();

    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].manufacturer_name, "Beta GmbH");
    assert_eq!(outcome.summary(), "Found 1 manufacturer(s) in Germany.");
}

#[tokio::test]
async fn client_side_transport_failure_degrades_to_no_results() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(REGISTRATIONS))
        .respond_with(ResponseTemplate::new(503).set_body_string("try later"))
        .mount(&mock_server)
        .await;

    let outcome = lookup_for(&mock_server)
        .run("Germany", "FOZ", Strategy::ClientSide)
        .await
        .unwrap();

    assert_eq!(outcome.status(), OutcomeStatus::NoManufacturers);
    assert_eq!(outcome.notices.len(), 1);
    assert_eq!(outcome.notices[0].level, NoticeLevel::Warning);
    assert_eq!(outcome.notices[0].kind, Some(ErrorKind::Transport));
}

#[tokio::test]
async fn truncated_page_adds_notice() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(REGISTRATIONS))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "meta": {"results": {"skip": 0, "limit": 100, "total": 734}},
            "results": [registration("Acme Medical Inc", "US")]
        })))
        .mount(&mock_server)
        .await;

    let outcome = lookup_for(&mock_server)
        .run("US", "FOZ", Strategy::ClientSide)
        .await
        .unwrap();

    assert_eq!(outcome.records.len(), 1);
    assert!(outcome
        .notices
        .iter()
        .any(|n| n.level == NoticeLevel::Warning && n.message.contains("1 of 734")));
}

// ── Two-stage strategy ───────────────────────────────────────────────

#[tokio::test]
async fn two_stage_without_labelers_skips_registration_queries() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(UDI))
        .respond_with(not_found())
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(REGISTRATIONS))
        .respond_with(page(vec![]))
        .expect(0)
        .mount(&mock_server)
        .await;

    let outcome = lookup_for(&mock_server)
        .run("United States", "ZZZ", Strategy::TwoStage)
        .await
        .unwrap();

    assert_eq!(outcome.status(), OutcomeStatus::NoLabelers);
    assert_eq!(outcome.summary(), "No labelers found for this product code.");
    assert_eq!(outcome.notices.len(), 1);
    assert_eq!(outcome.notices[0].level, NoticeLevel::Warning);
    assert_eq!(outcome.notices[0].kind, Some(ErrorKind::NotFound));
    assert!(outcome.notices[0].message.contains("Device identification search"));
}

#[tokio::test]
async fn two_stage_keeps_duplicate_registrants_across_labelers() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(UDI))
        .and(query_param("search", "product_code:FOZ"))
        .respond_with(page(vec![
            serde_json::json!({"labeler_name": "Acme Medical"}),
            serde_json::json!({"labeler_name": " Acme Medical "}),
            serde_json::json!({"labeler_name": "Acme Holdings"}),
            serde_json::json!({"labeler_name": "  "}),
        ]))
        .expect(1)
        .mount(&mock_server)
        .await;
    for labeler in ["Acme Medical", "Acme Holdings"] {
        Mock::given(method("GET"))
            .and(path(REGISTRATIONS))
            .and(query_param("search", format!("registrant_name:\"{labeler}\"")))
            .respond_with(page(vec![
                registration("Acme Corp", "US"),
                registration("Acme Corp Europe", "DE"),
            ]))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let outcome = lookup_for(&mock_server)
        .run("United States", "FOZ", Strategy::TwoStage)
        .await
        .unwrap();

    let labelers: Vec<&str> = outcome
        .labelers
        .as_ref()
        .unwrap()
        .iter()
        .map(|l| l.as_str())
        .collect();
    assert_eq!(labelers, vec!["Acme Holdings", "Acme Medical"]);

    assert_eq!(outcome.status(), OutcomeStatus::Found);
    assert_eq!(outcome.records.len(), 2);
    assert!(outcome.records.iter().all(|r| r.manufacturer_name == "Acme Corp"));
    assert!(outcome
        .notices
        .iter()
        .any(|n| n.level == NoticeLevel::Info && n.message.contains("Found 2 labeler(s)")));
}

#[tokio::test]
async fn two_stage_failed_labeler_does_not_abort_others() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(UDI))
        .respond_with(page(vec![
            serde_json::json!({"labeler_name": "Broken Labeler"}),
            serde_json::json!({"labeler_name": "Working Labeler"}),
            serde_json::json!({"labeler_name": "Unregistered Labeler"}),
        ]))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(REGISTRATIONS))
        .and(query_param("search", "registrant_name:\"Broken Labeler\""))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(REGISTRATIONS))
        .and(query_param("search", "registrant_name:\"Working Labeler\""))
        .respond_with(page(vec![registration("Working Labeler LLC", "US")]))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(REGISTRATIONS))
        .and(query_param("search", "registrant_name:\"Unregistered Labeler\""))
        .respond_with(not_found())
        .mount(&mock_server)
        .await;

    let outcome = lookup_for(&mock_server)
        .run("United States", "FOZ", Strategy::TwoStage)
        .await
        .unwrap();

    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].manufacturer_name, "Working Labeler LLC");

    let failures: Vec<_> = outcome
        .notices
        .iter()
        .filter(|n| n.kind.is_some())
        .collect();
    // Notices follow labeler order: Broken, Unregistered, Working.
    assert_eq!(failures.len(), 2, "{failures:?}");
    assert_eq!(failures[0].kind, Some(ErrorKind::Transport));
    assert!(failures[0].message.contains("Broken Labeler"));
    assert_eq!(failures[1].kind, Some(ErrorKind::NotFound));
    assert_eq!(failures[1].level, NoticeLevel::Warning);
    assert!(failures[1].message.contains("Unregistered Labeler"));
}

#[tokio::test]
async fn two_stage_device_search_failure_reports_and_yields_no_labelers() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(UDI))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let outcome = lookup_for(&mock_server)
        .run("United States", "FOZ", Strategy::TwoStage)
        .await
        .unwrap();

    assert_eq!(outcome.status(), OutcomeStatus::NoLabelers);
    assert_eq!(outcome.notices.len(), 1);
    assert_eq!(outcome.notices[0].kind, Some(ErrorKind::Decode));
}

#[tokio::test]
async fn repeated_lookup_is_idempotent() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(UDI))
        .respond_with(page(vec![
            serde_json::json!({"labeler_name": "Beta GmbH"}),
            serde_json::json!({"labeler_name": "Acme Medical"}),
        ]))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(REGISTRATIONS))
        .and(query_param("search", "registrant_name:\"Acme Medical\""))
        .respond_with(page(vec![registration("Acme Medical Inc", "US")]))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(REGISTRATIONS))
        .and(query_param("search", "registrant_name:\"Beta GmbH\""))
        .respond_with(page(vec![registration("Beta US Inc", "US")]))
        .mount(&mock_server)
        .await;

    let lookup = lookup_for(&mock_server);
    let first = lookup
        .run("United States", "FOZ", Strategy::TwoStage)
        .await
        .unwrap();
    let second = lookup
        .run("United States", "FOZ", Strategy::TwoStage)
        .await
        .unwrap();

    assert_eq!(first.labelers, second.labelers);
    assert_eq!(first.records, second.records);
    assert_eq!(first.records[0].manufacturer_name, "Acme Medical Inc");
    assert_eq!(first.records[1].manufacturer_name, "Beta US Inc");
}
