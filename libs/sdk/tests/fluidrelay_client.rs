//! Integration tests for the Fluid Relay operation clients.
//!
//! Runs each client against a local mock of the Resource Manager API.

use armkit_sdk::fluidrelay::{
    FluidRelayContainersClient, FluidRelayId, FluidRelayServer, FluidRelayServersClient,
    FluidRelayServerUpdate, KeyName, ProvisioningState, RegenerateKeyRequest, API_VERSION,
};
use armkit_sdk::resourceids::{ResourceGroupId, SubscriptionId};
use armkit_sdk::{ArmClient, ClientOptions, SdkError};
use rstest::rstest;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SERVER_PATH: &str = "/subscriptions/sub/resourceGroups/myrg/providers/Microsoft.FluidRelay/fluidRelayServers/myFluid";

fn arm_client(server: &MockServer) -> ArmClient {
    ArmClient::new(ClientOptions {
        endpoint: server.uri(),
        token: Some("test-token".to_string()),
        ..ClientOptions::default()
    })
    .unwrap()
}

fn server_id() -> FluidRelayId {
    FluidRelayId::new("sub", "myrg", "myFluid")
}

fn server_body(name: &str) -> serde_json::Value {
    json!({
        // The API does not always return canonical casing.
        "id": format!("/subscriptions/sub/resourcegroups/myrg/providers/Microsoft.FluidRelay/fluidRelayServers/{name}"),
        "name": name,
        "type": "Microsoft.FluidRelay/fluidRelayServers",
        "location": "westus2",
        "properties": { "provisioningState": "Succeeded", "frsTenantId": "tenant" }
    })
}

#[tokio::test]
async fn test_get_server() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SERVER_PATH))
        .and(query_param("api-version", API_VERSION))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(server_body("myFluid")))
        .expect(1)
        .mount(&mock)
        .await;

    let client = FluidRelayServersClient::new(arm_client(&mock));
    let server = client.get(&server_id()).await.unwrap();

    assert_eq!(server.location, "westus2");
    assert_eq!(server.provisioning_state(), Some(&ProvisioningState::Succeeded));
    assert_eq!(server.parsed_id().unwrap(), Some(server_id()));
}

#[tokio::test]
async fn test_create_or_update_sends_body() {
    let mock = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(SERVER_PATH))
        .and(query_param("api-version", API_VERSION))
        .and(body_json(json!({ "location": "westus2", "tags": { "env": "test" } })))
        .respond_with(ResponseTemplate::new(201).set_body_json(server_body("myFluid")))
        .expect(1)
        .mount(&mock)
        .await;

    let client = FluidRelayServersClient::new(arm_client(&mock));
    let request = FluidRelayServer {
        location: "westus2".to_string(),
        tags: Some([("env".to_string(), "test".to_string())].into_iter().collect()),
        ..Default::default()
    };
    let created = client.create_or_update(&server_id(), &request).await.unwrap();
    assert_eq!(created.name.as_deref(), Some("myFluid"));
}

#[tokio::test]
async fn test_update_uses_patch() {
    let mock = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path(SERVER_PATH))
        .and(body_json(json!({ "tags": {} })))
        .respond_with(ResponseTemplate::new(200).set_body_json(server_body("myFluid")))
        .expect(1)
        .mount(&mock)
        .await;

    let client = FluidRelayServersClient::new(arm_client(&mock));
    let update = FluidRelayServerUpdate {
        tags: Some(Default::default()),
        ..Default::default()
    };
    client.update(&server_id(), &update).await.unwrap();
}

#[tokio::test]
async fn test_delete_accepts_no_content() {
    let mock = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(SERVER_PATH))
        .and(query_param("api-version", API_VERSION))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock)
        .await;

    let client = FluidRelayServersClient::new(arm_client(&mock));
    client.delete(&server_id()).await.unwrap();
}

#[tokio::test]
async fn test_list_by_resource_group_follows_next_link() {
    let mock = MockServer::start().await;
    let list_path = "/subscriptions/sub/resourceGroups/myrg/providers/Microsoft.FluidRelay/fluidRelayServers";

    Mock::given(method("GET"))
        .and(path(list_path))
        .and(query_param("api-version", API_VERSION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [server_body("one"), server_body("two")],
            "nextLink": format!("{}/pages/2?api-version={}", mock.uri(), API_VERSION)
        })))
        .expect(1)
        .mount(&mock)
        .await;

    Mock::given(method("GET"))
        .and(path("/pages/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [server_body("three")],
            "nextLink": ""
        })))
        .expect(1)
        .mount(&mock)
        .await;

    let client = FluidRelayServersClient::new(arm_client(&mock));
    let servers = client
        .list_by_resource_group(&ResourceGroupId::new("sub", "myrg"))
        .await
        .unwrap();

    let names: Vec<_> = servers.iter().filter_map(|s| s.name.as_deref()).collect();
    assert_eq!(names, vec!["one", "two", "three"]);
}

#[tokio::test]
async fn test_list_by_subscription_single_page() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/subscriptions/sub/providers/Microsoft.FluidRelay/fluidRelayServers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "value": [] })))
        .expect(1)
        .mount(&mock)
        .await;

    let client = FluidRelayServersClient::new(arm_client(&mock));
    let servers = client
        .list_by_subscription(&SubscriptionId::new("sub"))
        .await
        .unwrap();
    assert!(servers.is_empty());
}

#[tokio::test]
async fn test_keys() {
    let mock = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{SERVER_PATH}/listKeys")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "key1": "aaa", "key2": "bbb" })),
        )
        .expect(1)
        .mount(&mock)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("{SERVER_PATH}/regenerateKey")))
        .and(body_json(json!({ "keyName": "key1" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "key1": "ccc", "key2": "bbb" })),
        )
        .expect(1)
        .mount(&mock)
        .await;

    let client = FluidRelayServersClient::new(arm_client(&mock));
    let keys = client.list_keys(&server_id()).await.unwrap();
    assert_eq!(keys.key1.as_deref(), Some("aaa"));

    let keys = client
        .regenerate_key(
            &server_id(),
            &RegenerateKeyRequest {
                key_name: KeyName::KeyOne,
            },
        )
        .await
        .unwrap();
    assert_eq!(keys.key1.as_deref(), Some("ccc"));
}

#[tokio::test]
async fn test_containers() {
    let mock = MockServer::start().await;
    let container_path = format!("{SERVER_PATH}/fluidRelayContainers/c1");

    Mock::given(method("GET"))
        .and(path(container_path.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": container_path.clone(),
            "name": "c1",
            "properties": { "frsContainerId": "c1", "provisioningState": "Succeeded" }
        })))
        .expect(1)
        .mount(&mock)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{SERVER_PATH}/fluidRelayContainers")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [{ "name": "c1" }, { "name": "c2" }]
        })))
        .expect(1)
        .mount(&mock)
        .await;
    Mock::given(method("DELETE"))
        .and(path(container_path.clone()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock)
        .await;

    let client = FluidRelayContainersClient::new(arm_client(&mock));
    let container_id = server_id().container("c1");

    let container = client.get(&container_id).await.unwrap();
    assert_eq!(container.parsed_id().unwrap(), Some(container_id.clone()));

    let containers = client.list_by_fluid_relay_servers(&server_id()).await.unwrap();
    assert_eq!(containers.len(), 2);

    client.delete(&container_id).await.unwrap();
}

#[rstest]
#[case::arm_error_envelope(
    404,
    r#"{"error":{"code":"ResourceNotFound","message":"The Resource 'Microsoft.FluidRelay/fluidRelayServers/myFluid' was not found."}}"#,
    Some(404),
    "ResourceNotFound"
)]
#[case::raw_body(503, "Service Unavailable", Some(503), "Service Unavailable")]
#[case::malformed_success_body(200, "not json", None, "decoding response")]
#[tokio::test]
async fn test_get_error_responses(
    #[case] status: u16,
    #[case] body: &str,
    #[case] expected_status: Option<u16>,
    #[case] expected_text: &str,
) {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SERVER_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&mock)
        .await;

    let client = FluidRelayServersClient::new(arm_client(&mock));
    let err = client.get(&server_id()).await.unwrap_err();

    assert_eq!(err.status(), expected_status);
    assert_eq!(err.is_not_found(), expected_status == Some(404));
    assert!(
        err.to_string().contains(expected_text),
        "{err} does not mention {expected_text}"
    );
    if expected_status.is_none() {
        assert!(matches!(err, SdkError::Decode(_)));
    }
}

#[tokio::test]
async fn test_list_stops_on_repeated_next_link() {
    let mock = MockServer::start().await;
    let next_link = format!("{}/pages/loop", mock.uri());

    Mock::given(method("GET"))
        .and(path("/subscriptions/sub/providers/Microsoft.FluidRelay/fluidRelayServers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [server_body("one")],
            "nextLink": next_link.as_str()
        })))
        .expect(1)
        .mount(&mock)
        .await;

    Mock::given(method("GET"))
        .and(path("/pages/loop"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [server_body("two")],
            "nextLink": next_link.as_str()
        })))
        .expect(1)
        .mount(&mock)
        .await;

    let client = FluidRelayServersClient::new(arm_client(&mock));
    let err = client
        .list_by_subscription(&SubscriptionId::new("sub"))
        .await
        .unwrap_err();

    match err {
        SdkError::Pagination(link) => assert_eq!(link, next_link),
        other => panic!("unexpected error: {other:?}"),
    }
}
