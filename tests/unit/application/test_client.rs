use crate::common::{TOKEN, api_path, authenticated_client, test_client};
use assert_json_diff::assert_json_eq;
use cmdbuild_client::prelude::*;
use mockito::{Matcher, Server};
use reqwest::StatusCode;
use serde_json::{Value, json};
use std::time::{Duration, Instant};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Every read endpoint with the path it must hit
const READ_ENDPOINTS: &[(&str, &str)] = &[
    ("get_session_info", "sessions/tok123"),
    ("list_lookup_types", "lookup_types"),
    ("get_lookup_type_values", "lookup_types/APCT_BRANCH/values"),
    ("get_lookup_type_value_detail", "lookup_types/APCT_BRANCH/values/52106"),
    ("list_domains", "domains"),
    ("get_domain_detail", "domains/IPV4_002_DV"),
    ("get_domain_attributes", "domains/IPV4_002_DV/attributes"),
    ("get_domain_relations", "domains/IPV4_002_DV/relations"),
    ("get_domain_relation_detail", "domains/IPV4_002_DV/relations/46441"),
    ("list_classes", "classes"),
    ("count_classes", "classes"),
    ("get_class_detail", "classes/CI_RS_PF_SVC_SW"),
    ("get_class_attributes", "classes/CI_RS_PF_SVC_SW/attributes"),
    ("list_cards", "classes/CI_RS_PF_SVC_SW/cards"),
    ("get_card_detail", "classes/CI_RS_PF_SVC_SW/cards/1234"),
];

/// Dispatches an endpoint by name with fixed identifiers
async fn call(client: &Client, endpoint: &str) -> Result<Value, AppError> {
    match endpoint {
        "get_session_info" => client.get_session_info().await,
        "list_lookup_types" => client.list_lookup_types().await,
        "get_lookup_type_values" => client.get_lookup_type_values("APCT_BRANCH").await,
        "get_lookup_type_value_detail" => {
            client
                .get_lookup_type_value_detail("APCT_BRANCH", "52106")
                .await
        }
        "list_domains" => client.list_domains().await,
        "get_domain_detail" => client.get_domain_detail("IPV4_002_DV").await,
        "get_domain_attributes" => client.get_domain_attributes("IPV4_002_DV").await,
        "get_domain_relations" => client.get_domain_relations("IPV4_002_DV").await,
        "get_domain_relation_detail" => {
            client
                .get_domain_relation_detail("IPV4_002_DV", "46441")
                .await
        }
        "list_classes" => client.list_classes().await,
        "count_classes" => client.count_classes().await.map(Value::from),
        "get_class_detail" => client.get_class_detail("CI_RS_PF_SVC_SW").await,
        "get_class_attributes" => client.get_class_attributes("CI_RS_PF_SVC_SW").await,
        "list_cards" => client.list_cards("CI_RS_PF_SVC_SW").await,
        "get_card_detail" => client.get_card_detail("CI_RS_PF_SVC_SW", "1234").await,
        "insert_card" => client
            .insert_card("CI_RS_PF_SVC_SW", r#"{"Description":"test"}"#)
            .await
            .map(Value::from),
        other => panic!("unknown endpoint {other}"),
    }
}

#[tokio::test]
async fn calls_before_authenticate_fail_without_request() {
    let mut server = Server::new_async().await;
    let any_get = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let any_post = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let client = test_client(&server);

    for (endpoint, _) in READ_ENDPOINTS.iter().chain([("insert_card", "")].iter()) {
        let err = call(&client, endpoint).await.unwrap_err();
        assert!(
            matches!(err, AppError::NotAuthenticated),
            "{endpoint}: expected NotAuthenticated, got {err:?}"
        );
    }

    any_get.assert_async().await;
    any_post.assert_async().await;
}

#[tokio::test]
async fn read_endpoints_hit_their_paths_with_token() {
    let mut server = Server::new_async().await;
    let client = authenticated_client(&mut server).await;

    let mut mocks = Vec::new();
    let mut paths: Vec<&str> = READ_ENDPOINTS.iter().map(|(_, path)| *path).collect();
    paths.dedup();
    for path in paths {
        let hits = READ_ENDPOINTS.iter().filter(|(_, p)| *p == path).count();
        let mock = server
            .mock("GET", api_path(path).as_str())
            .match_header("CMDBuild-Authorization", TOKEN)
            .match_header("content-type", "application/json")
            .match_header("accept", "*/*")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"data":[{"_id":"x"}],"meta":{"total":1}}"#)
            .expect(hits)
            .create_async()
            .await;
        mocks.push(mock);
    }

    for (endpoint, _) in READ_ENDPOINTS {
        let body = call(&client, endpoint)
            .await
            .unwrap_or_else(|e| panic!("{endpoint} failed: {e:?}"));

        if *endpoint == "count_classes" {
            assert_eq!(body, json!(1));
        } else {
            assert_json_eq!(body, json!({"data": [{"_id": "x"}], "meta": {"total": 1}}));
        }
    }

    for mock in mocks {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn server_error_surfaces_status_and_body_for_every_endpoint() {
    let mut server = Server::new_async().await;
    let client = authenticated_client(&mut server).await;
    let _get = server
        .mock("GET", Matcher::Any)
        .with_status(500)
        .with_body("internal failure")
        .create_async()
        .await;
    let _post = server
        .mock("POST", api_path("classes/CI_RS_PF_SVC_SW/cards").as_str())
        .with_status(500)
        .with_body("internal failure")
        .create_async()
        .await;

    for (endpoint, _) in READ_ENDPOINTS.iter().chain([("insert_card", "")].iter()) {
        match call(&client, endpoint).await {
            Err(AppError::UnexpectedResponse { status, body }) => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{endpoint}");
                assert_eq!(body, "internal failure", "{endpoint}");
            }
            other => panic!("{endpoint}: expected UnexpectedResponse, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn expired_token_surfaces_as_unexpected_response() {
    let mut server = Server::new_async().await;
    let client = authenticated_client(&mut server).await;
    let _domains = server
        .mock("GET", api_path("domains").as_str())
        .with_status(401)
        .with_body(r#"{"success":false}"#)
        .create_async()
        .await;

    let err = client.list_domains().await.unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
    assert!(client.is_authenticated().await);
}

#[tokio::test]
async fn count_classes_reads_meta_total() {
    let mut server = Server::new_async().await;
    let client = authenticated_client(&mut server).await;
    let _classes = server
        .mock("GET", api_path("classes").as_str())
        .with_status(200)
        .with_body(r#"{"data":[],"meta":{"total":187}}"#)
        .create_async()
        .await;

    assert_eq!(client.count_classes().await.unwrap(), 187);
}

#[tokio::test]
async fn count_classes_without_meta_is_a_deserialization_error() {
    let mut server = Server::new_async().await;
    let client = authenticated_client(&mut server).await;
    let _classes = server
        .mock("GET", api_path("classes").as_str())
        .with_status(200)
        .with_body(r#"{"data":[]}"#)
        .create_async()
        .await;

    let err = client.count_classes().await.unwrap_err();
    assert!(matches!(err, AppError::Deserialization(_)));
}

#[tokio::test]
async fn non_json_success_body_is_a_deserialization_error() {
    let mut server = Server::new_async().await;
    let client = authenticated_client(&mut server).await;
    let _classes = server
        .mock("GET", api_path("classes/Employee").as_str())
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let err = client.get_class_detail("Employee").await.unwrap_err();
    assert!(matches!(err, AppError::Deserialization(_)));
}

#[tokio::test]
async fn identifiers_are_percent_encoded() {
    let mut server = Server::new_async().await;
    let client = authenticated_client(&mut server).await;
    let mock = server
        .mock("GET", "/services/rest/v2/classes/My%20Class/cards")
        .with_status(200)
        .with_body(r#"{"data":[],"meta":{"total":0}}"#)
        .create_async()
        .await;

    client.list_cards("My Class").await.unwrap();
    mock.assert_async().await;
}

#[test]
fn client_is_shareable_across_tasks() {
    fn assert_send_sync<T: Send + Sync + Clone>() {}
    assert_send_sync::<Client>();
}

#[tokio::test]
async fn configured_timeout_bounds_a_silent_server() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let _silent = tokio::spawn(async move {
        let mut open = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            open.push(socket);
        }
    });
    let url = format!("http://{addr}/cmdbuild");
    let client = Client::new(Config::with_credentials(&url, "admin", "secret").timeout(1)).unwrap();

    let started = Instant::now();
    let err = client
        .authenticate(&url, "admin", "secret")
        .await
        .unwrap_err();

    match err {
        AppError::Network(e) => assert!(e.is_timeout(), "expected a timeout, got {e}"),
        other => panic!("Unexpected error: {other:?}"),
    }
    assert!(started.elapsed() < Duration::from_secs(10));
    assert!(!client.is_authenticated().await);
}

#[tokio::test]
async fn truncated_error_body_keeps_the_status() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let _truncating = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.ends_with(b"}") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        socket
            .write_all(b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 100\r\n\r\npartial")
            .await
            .unwrap();
    });
    let url = format!("http://{addr}/cmdbuild");
    let client = Client::new(Config::with_credentials(&url, "admin", "secret").timeout(5)).unwrap();

    let err = client
        .authenticate(&url, "admin", "secret")
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
}
