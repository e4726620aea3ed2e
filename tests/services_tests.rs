mod support;

use endpoint_sdk::{
    load_services_from_path, load_services_from_str, ApiError, Callbacks, ClientConfig, EndpointFactory,
    ServiceRegistry,
};
use serde_json::json;
use support::RecordingBackend;

const SERVICES: &str = r#"{
    "services": {
        "users": {
            "endpoints": {
                "get": ["/users/<int:id>", ["id"]],
                "posts": ["/users/<int:id>/posts/<slug>", ["id", "slug"]],
                "list": ["/users", []]
            }
        },
        "orgs": {
            "args": ["org"],
            "endpoints": {
                "members": ["/orgs/:org/members", ["role"]]
            }
        }
    }
}"#;

#[tokio::test]
async fn builds_resources_with_converted_rules() {
    let backend = RecordingBackend::new();
    let factory = EndpointFactory::new(backend.clone());
    let client = ClientConfig {
        url_prefix: "/api".into(),
        ..ClientConfig::default()
    };
    let config = load_services_from_str(SERVICES).unwrap();
    let registry = ServiceRegistry::build(&factory, &client, &config);

    assert_eq!(registry.names().collect::<Vec<_>>(), vec!["orgs", "users"]);
    let users = registry.service("users").unwrap();
    assert_eq!(users.endpoint("get").unwrap().route(), "/api/users/:id");
    assert_eq!(
        users.endpoint("posts").unwrap().route(),
        "/api/users/:id/posts/:slug"
    );

    let members = registry.service("orgs").unwrap().endpoint("members").unwrap();
    assert_eq!(members.arg_names(), &["org".to_string(), "role".to_string()]);
    members
        .call(&[json!("acme"), json!("admin")])
        .get(Callbacks::new())
        .await
        .unwrap();
    assert_eq!(backend.last().url, "/api/orgs/acme/members");

    assert!(matches!(registry.service("billing"), Err(ApiError::UnknownService(_))));
}

#[test]
fn services_prefix_overrides_client_prefix() {
    let factory = EndpointFactory::new(RecordingBackend::new());
    let client = ClientConfig {
        url_prefix: "/ignored".into(),
        ..ClientConfig::default()
    };
    let config = load_services_from_str(
        r#"{"url_prefix": "/v2", "services": {"ping": {"endpoints": {"check": ["/ping", []]}}}}"#,
    )
    .unwrap();
    let registry = ServiceRegistry::build(&factory, &client, &config);
    let ping = registry.service("ping").unwrap().endpoint("check").unwrap();
    assert_eq!(ping.route(), "/v2/ping");
}

#[tokio::test]
async fn loads_services_from_file() {
    let path = std::env::temp_dir().join(format!("endpoint-sdk-services-{}.json", std::process::id()));
    tokio::fs::write(&path, SERVICES).await.unwrap();
    let config = load_services_from_path(&path).await.unwrap();
    tokio::fs::remove_file(&path).await.unwrap();
    assert_eq!(config.services.len(), 2);
}

#[tokio::test]
async fn missing_file_is_load_error() {
    let err = load_services_from_path("/definitely/not/here.json").await.unwrap_err();
    assert!(matches!(err, endpoint_sdk::ConfigError::Load(_)));
}
