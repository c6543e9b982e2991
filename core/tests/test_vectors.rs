//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests or simulated
//! responses, and the expected outcome. Request bodies are compared as parsed
//! JSON so field ordering does not matter.

use agency_core::{
    ApiError, ContactRequest, HttpMethod, HttpRequest, HttpResponse, Section, SectionView,
    Service, SiteClient, Source,
};

const BASE_URL: &str = "http://localhost:8080/api";

fn client() -> SiteClient {
    SiteClient::with_base_url(BASE_URL)
}

fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        other => panic!("unknown method: {other}"),
    }
}

fn simulated(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[test]
fn request_test_vectors() {
    let raw = include_str!("../../test-vectors/requests.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let req: HttpRequest = match case["endpoint"].as_str().unwrap() {
            "services" => c.build_list_services(),
            "portfolio" => c.build_list_portfolio(),
            "testimonials" => c.build_list_testimonials(),
            "statistics" => c.build_list_statistics(),
            "faq" => c.build_list_faq(),
            "contact" => {
                let input: ContactRequest = serde_json::from_value(case["input"].clone()).unwrap();
                c.build_submit_contact(&input).unwrap()
            }
            other => panic!("unknown endpoint: {other}"),
        };

        let expected = &case["expected_request"];
        assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.path, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()), "{name}: path");

        let expected_headers: Vec<(String, String)> =
            serde_json::from_value(expected["headers"].clone()).unwrap();
        assert_eq!(req.headers, expected_headers, "{name}: headers");

        match req.body.as_deref() {
            Some(body) => {
                let body: serde_json::Value = serde_json::from_str(body).unwrap();
                assert_eq!(body, expected["body"], "{name}: body");
            }
            None => assert!(expected["body"].is_null(), "{name}: body should be None"),
        }
    }
}

// ---------------------------------------------------------------------------
// Status classification
// ---------------------------------------------------------------------------

#[test]
fn classify_test_vectors() {
    let raw = include_str!("../../test-vectors/classify.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected = &case["expected"];
        let kind = expected["kind"].as_str().unwrap();
        let result = c.parse_submit_contact(simulated(case));

        if kind == "ok" {
            let envelope = result.unwrap_or_else(|e| panic!("{name}: unexpected error {e:?}"));
            assert_eq!(envelope.success, expected["success"].as_bool().unwrap(), "{name}: success");
            assert_eq!(envelope.message.as_deref(), expected["message"].as_str(), "{name}: message");
            continue;
        }

        let err = match result {
            Ok(envelope) => panic!("{name}: expected {kind}, got {envelope:?}"),
            Err(err) => err,
        };
        let matched = match kind {
            "rate_limited" => matches!(err, ApiError::RateLimited(_)),
            "validation" => matches!(err, ApiError::Validation { .. }),
            "server" => matches!(err, ApiError::Server { .. }),
            "http" => matches!(err, ApiError::Http { .. }),
            "deserialization" => matches!(err, ApiError::Deserialization(_)),
            other => panic!("unknown kind: {other}"),
        };
        assert!(matched, "{name}: expected {kind}, got {err:?}");

        if let Some(message) = expected["message"].as_str() {
            assert_eq!(err.to_string(), message, "{name}: message");
        }
    }
}

// ---------------------------------------------------------------------------
// Section resolution
// ---------------------------------------------------------------------------

#[test]
fn section_test_vectors() {
    let raw = include_str!("../../test-vectors/sections.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected_ids: Vec<i64> = serde_json::from_value(case["expected_ids"].clone()).unwrap();
        let expected_source = match case["source"].as_str().unwrap() {
            "backend" => Source::Backend,
            "fallback" => Source::Fallback,
            other => panic!("unknown source: {other}"),
        };

        let mut section: Section<Service> = Section::new();
        let ticket = section.mount();
        assert!(section.complete(ticket, c.parse_list_services(simulated(case))), "{name}: complete");

        match section.view() {
            SectionView::Items { items, source } => {
                let ids: Vec<i64> = items.iter().map(|s| s.id).collect();
                assert_eq!(ids, expected_ids, "{name}: ids");
                assert_eq!(source, expected_source, "{name}: source");
            }
            other => panic!("{name}: expected items, got {other:?}"),
        }
    }
}
