//! Verify build/parse methods against JSON test vectors stored in
//! `test-vectors/`.
//!
//! Each vector file describes a configuration, the expected request URL, a
//! simulated response, and the expected parse result or error. Comparing
//! parsed results as typed values (not raw strings) avoids false negatives
//! from field-ordering differences.

use employee_core::{ApiConfig, Employee, EmployeeClient, FetchError, HttpResponse};

fn client_from(case: &serde_json::Value) -> EmployeeClient {
    let config: ApiConfig = serde_json::from_value(case["config"].clone()).unwrap();
    EmployeeClient::new(config)
}

fn simulated_response(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

fn check_error(name: &str, case: &serde_json::Value, err: FetchError, body: &str) {
    match case["expected_error"].as_str().unwrap() {
        "ServerReported" => {
            let expected = case["expected_message"].as_str().unwrap();
            match err {
                FetchError::ServerReported(message) => {
                    assert_eq!(message, expected, "{name}: server message")
                }
                other => panic!("{name}: expected ServerReported, got {other:?}"),
            }
        }
        "RateLimited" => {
            assert!(
                matches!(err, FetchError::RateLimited),
                "{name}: expected RateLimited, got {err:?}"
            );
        }
        "DecodeFailed" => match err {
            FetchError::DecodeFailed { body: raw, .. } => {
                assert_eq!(raw, body, "{name}: decode failure must carry the raw body")
            }
            other => panic!("{name}: expected DecodeFailed, got {other:?}"),
        },
        other => panic!("{name}: unknown expected_error: {other}"),
    }
}

#[test]
fn list_test_vectors() {
    let raw = include_str!("../../test-vectors/list.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let client = client_from(case);

        // Verify build
        let req = client.build_list_employees().unwrap();
        assert_eq!(req.url, case["expected_url"].as_str().unwrap(), "{name}: url");

        // Verify parse
        let response = simulated_response(case);
        let body = response.body.clone();
        let result = client.parse_list_employees(response);

        if case.get("expected_error").is_some() {
            check_error(name, case, result.unwrap_err(), &body);
        } else {
            let employees = result.unwrap();
            let expected: Vec<Employee> =
                serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(employees, expected, "{name}: parsed result");
        }
    }
}

#[test]
fn details_test_vectors() {
    let raw = include_str!("../../test-vectors/details.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let client = client_from(case);
        let id = case["input_id"].as_u64().unwrap();

        // Verify build
        let req = client.build_employee_details(id).unwrap();
        assert_eq!(req.url, case["expected_url"].as_str().unwrap(), "{name}: url");

        // Verify parse
        let response = simulated_response(case);
        let body = response.body.clone();
        let result = client.parse_employee_details(response);

        if case.get("expected_error").is_some() {
            check_error(name, case, result.unwrap_err(), &body);
        } else {
            let employee = result.unwrap();
            let expected: Employee =
                serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(employee, expected, "{name}: parsed result");
        }
    }
}
