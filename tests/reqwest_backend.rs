use endpoint_sdk::{ApiError, Callbacks, ClientConfig, EndpointFactory, NamedArgs, RequestOptions, Verb};
use serde_json::json;
use std::time::Duration;
use wiremock::{
    matchers::{body_json, header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn config_for(server: &MockServer) -> ClientConfig {
    let mut config = ClientConfig {
        base_url: Some(server.uri()),
        timeout_secs: Some(5),
        ..ClientConfig::default()
    };
    config.default_headers.insert("x-client".into(), "endpoint-sdk".into());
    config
}

#[tokio::test]
async fn get_sends_leftover_data_as_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/42/posts"))
        .and(query_param("page", "2"))
        .and(header("x-client", "endpoint-sdk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [{"id": 1}]})))
        .expect(1)
        .mount(&server)
        .await;

    let factory = EndpointFactory::from_config(&config_for(&server)).unwrap();
    let endpoint = factory.make_endpoint("/users/:id/posts", &["id", "page", "filter"]);
    let response = endpoint
        .call(&[json!(42), json!(2)])
        .get(Callbacks::new())
        .await
        .unwrap();
    let posts: Vec<serde_json::Value> = response.data().unwrap();
    assert_eq!(posts.len(), 1);
}

#[tokio::test]
async fn post_sends_leftover_data_as_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/7/notes"))
        .and(body_json(json!({"title": "hello"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"data": {"id": 8}})))
        .expect(1)
        .mount(&server)
        .await;

    let factory = EndpointFactory::from_config(&config_for(&server)).unwrap();
    let endpoint = factory.make_endpoint("/users/:id/notes", &["id", "title", "draft"]);
    let response = endpoint
        .call(&[json!(7), json!("hello")])
        .post(Callbacks::new())
        .await
        .unwrap();
    assert_eq!(response.status, 201);
}

#[tokio::test]
async fn error_status_maps_to_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "error": {"code": "conflict", "message": "conflict: user has posts"}
        })))
        .mount(&server)
        .await;

    let factory = EndpointFactory::from_config(&config_for(&server)).unwrap();
    let endpoint = factory.make_endpoint("/users/:id", &["id"]);
    let err = endpoint
        .call(&[json!(1)])
        .delete(Callbacks::new())
        .await
        .unwrap_err();
    match err {
        ApiError::Status { status, detail, .. } => {
            assert_eq!(status, 409);
            assert_eq!(detail.unwrap().message, "conflict: user has posts");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn per_request_timeout_is_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let factory = EndpointFactory::from_config(&config_for(&server)).unwrap();
    let endpoint = factory.make_endpoint("/slow", &[] as &[&str]);
    let options = RequestOptions::new(Verb::Get).timeout(Duration::from_millis(50));
    let err = endpoint.http(&NamedArgs::new(), options).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
