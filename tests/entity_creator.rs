mod common;

use serde_json::{Value, json};
use timesheet_sync::api::{DestinationJobCodePayload, EntityCreator, SyncStatus, build_http_client};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::DEST_TOKEN;

fn payload() -> DestinationJobCodePayload {
    DestinationJobCodePayload {
        name: "Excavation".into(),
        job_code: "12".into(),
        active: true,
        track_mileage: false,
        track_location: false,
    }
}

struct Case {
    status: u16,
    body: Value,
    expected: SyncStatus,
    expected_id: Option<&'static str>,
    message_contains: Option<&'static str>,
}

#[tokio::test]
async fn test_classification_table() {
    let cases = vec![
        Case {
            status: 201,
            body: json!({ "items": { "id": 42 } }),
            expected: SyncStatus::Success,
            expected_id: Some("42"),
            message_contains: None,
        },
        Case {
            status: 200,
            body: json!({ "items": { "id": 7 }, "message": "Job created successfully" }),
            expected: SyncStatus::Success,
            expected_id: Some("7"),
            message_contains: Some("Job created successfully"),
        },
        Case {
            status: 422,
            body: json!({ "message": "The email has already been taken." }),
            expected: SyncStatus::Skipped,
            expected_id: None,
            message_contains: Some("email has already been taken"),
        },
        Case {
            status: 422,
            body: json!({ "message": "Disposable email addresses are not accepted." }),
            expected: SyncStatus::Skipped,
            expected_id: None,
            message_contains: Some("Disposable email"),
        },
        Case {
            status: 422,
            body: json!({ "message": "Name is required." }),
            expected: SyncStatus::Failed,
            expected_id: None,
            message_contains: Some("Name is required."),
        },
        Case {
            status: 500,
            body: json!({ "error": "internal" }),
            expected: SyncStatus::Error,
            expected_id: None,
            message_contains: Some("500"),
        },
        Case {
            status: 404,
            body: json!({ "message": "Not Found" }),
            expected: SyncStatus::Error,
            expected_id: None,
            message_contains: Some("HTTP Status 404"),
        },
    ];

    for case in cases {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/public/jobs"))
            .respond_with(ResponseTemplate::new(case.status).set_body_json(case.body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let creator = EntityCreator::new(build_http_client().unwrap(), DEST_TOKEN);
        let url = format!("{}/api/public/jobs", server.uri());
        let outcome = creator.create("create_jobcode", &url, payload()).await;

        assert_eq!(outcome.status, case.expected, "status {} body {}", case.status, case.body);
        assert_eq!(outcome.destination_id.as_deref(), case.expected_id);
        if let Some(fragment) = case.message_contains {
            let message = outcome.message.as_deref().unwrap_or_default();
            assert!(message.contains(fragment), "{:?} should contain {:?}", message, fragment);
        }
        assert_eq!(outcome.payload, payload());
    }
}

#[tokio::test]
async fn test_sends_raw_token_and_json_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/public/jobs"))
        .and(header("Authorization", DEST_TOKEN))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "name": "Excavation",
            "job_code": "12",
            "active": true,
            "track_mileage": false,
            "track_location": false
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "items": { "id": 1 } })))
        .expect(1)
        .mount(&server)
        .await;

    let creator = EntityCreator::new(build_http_client().unwrap(), DEST_TOKEN);
    let outcome = creator.create("create_jobcode", &format!("{}/api/public/jobs", server.uri()), payload()).await;

    assert_eq!(outcome.status, SyncStatus::Success);
    let requests = server.received_requests().await.unwrap();
    let auth = requests[0].headers.get("Authorization").unwrap().to_str().unwrap();
    assert!(!auth.starts_with("Bearer"));
}

#[tokio::test]
async fn test_non_json_error_body_is_embedded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let creator = EntityCreator::new(build_http_client().unwrap(), DEST_TOKEN);
    let outcome = creator.create("create_jobcode", &format!("{}/api/public/jobs", server.uri()), payload()).await;

    assert_eq!(outcome.status, SyncStatus::Error);
    let message = outcome.message.unwrap();
    assert!(message.contains("502"));
    assert!(message.contains("Bad Gateway"));
}

#[tokio::test]
async fn test_transport_failure_is_an_error_outcome() {
    // Bind then release a port so nothing is listening on it
    let url = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}/api/public/jobs", listener.local_addr().unwrap())
    };

    let creator = EntityCreator::new(build_http_client().unwrap(), DEST_TOKEN);
    let outcome = creator.create("create_jobcode", &url, payload()).await;

    assert_eq!(outcome.status, SyncStatus::Error);
    assert!(outcome.message.unwrap().starts_with("Request failed"));
    assert_eq!(outcome.destination_id, None);
}
