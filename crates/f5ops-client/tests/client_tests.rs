//! Integration tests for the iControl REST client against a mock appliance.

use f5ops_client::{F5Client, F5Error};
use serde_json::json;
use wiremock::matchers::{basic_auth, body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> F5Client {
    F5Client::builder(server.uri(), "admin", "secret")
        .build()
        .expect("client builds")
}

#[tokio::test]
async fn lists_devices_with_select_filter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(
            "/mgmt/shared/resolver/device-groups/cm-bigip-allDevices/devices",
        ))
        .and(query_param("$select", "hostname,managementAddress"))
        .and(basic_auth("admin", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {"hostname": "bigip1.example.net", "managementAddress": "10.1.1.11"},
                {"hostname": "bigip2.example.net", "managementAddress": "10.1.1.12"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let devices = client_for(&server).devices().list().await.unwrap();

    assert_eq!(devices.len(), 2);
    assert_eq!(devices.items[0].hostname, "bigip1.example.net");
    assert_eq!(devices.items[1].management_address, "10.1.1.12");
}

#[tokio::test]
async fn maps_401_to_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client_for(&server).devices().list().await.unwrap_err();

    assert!(err.is_auth_error());
    assert_eq!(err.status_code(), Some(401));
}

#[tokio::test]
async fn other_failures_keep_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let err = client_for(&server).devices().list().await.unwrap_err();

    match err {
        F5Error::Api { code, message } => {
            assert_eq!(code, 502);
            assert_eq!(message, "upstream down");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn bash_posts_wrapped_command() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/mgmt/tm/util/bash"))
        .and(basic_auth("admin", "secret"))
        .and(body_json(json!({
            "command": "run",
            "utilCmdArgs": "-c 'tmsh list sys version'"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "commandResult": "Sys::Version\n"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client_for(&server)
        .util()
        .bash("tmsh list sys version")
        .await
        .unwrap();

    assert_eq!(resp.output(), "Sys::Version\n");
}

#[tokio::test]
async fn bash_escapes_embedded_single_quotes() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/mgmt/tm/util/bash"))
        .and(body_json(json!({
            "command": "run",
            "utilCmdArgs": r"-c 'echo '\''hi'\'''"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client_for(&server).util().bash("echo 'hi'").await.unwrap();
    assert_eq!(resp.output(), "");
}
