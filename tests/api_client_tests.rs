//! Integration tests for the domain API client.
//!
//! These tests verify that each domain operation issues the expected
//! method, path, query parameters, and body, and that failures surface
//! as well-formed results.

use std::time::Duration;

use n8n_api::{
    ApiCallResult, ApiKey, BaseUrl, BasicAuth, ErrorMode, ExecutionListParams, ExecutionStatus,
    N8nClient, N8nConfig, WebhookRequest, WorkflowListParams,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a domain client pointed at the mock server.
fn create_test_client(server: &MockServer) -> N8nClient {
    let config = N8nConfig::builder()
        .base_url(BaseUrl::new(format!("{}/api/v1", server.uri())).unwrap())
        .api_key(ApiKey::new("test-api-key").unwrap())
        .max_retries(1)
        .retry_delay(Duration::from_millis(10))
        .error_mode(ErrorMode::Production)
        .build()
        .unwrap();
    N8nClient::new(config)
}

// ============================================================================
// Workflows
// ============================================================================

#[tokio::test]
async fn test_list_workflows_sends_filters_as_query_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/workflows"))
        .and(query_param("active", "true"))
        .and(query_param("tags", "prod"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [], "nextCursor": null})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let params = WorkflowListParams::default().active(true).tags("prod").limit(20);

    let result = client.list_workflows(&params).await.unwrap();
    assert_eq!(result, Some(json!({"data": [], "nextCursor": null})));
}

#[tokio::test]
async fn test_get_workflow_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/workflows/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "42", "name": "Sync"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client.get_workflow("42").await.unwrap();

    assert_eq!(result, Some(json!({"id": "42", "name": "Sync"})));
}

#[tokio::test]
async fn test_create_workflow_posts_definition() {
    let server = MockServer::start().await;
    let definition = json!({"name": "New Workflow", "nodes": [], "connections": {}});

    Mock::given(method("POST"))
        .and(path("/api/v1/workflows"))
        .and(body_json(&definition))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "43"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client.create_workflow(definition).await.unwrap();

    assert_eq!(result, Some(json!({"id": "43"})));
}

#[tokio::test]
async fn test_update_workflow_puts_definition() {
    let server = MockServer::start().await;
    let definition = json!({"name": "Renamed"});

    Mock::given(method("PUT"))
        .and(path("/api/v1/workflows/42"))
        .and(body_json(&definition))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "42", "name": "Renamed"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client.update_workflow("42", definition).await.unwrap();

    assert_eq!(result, Some(json!({"id": "42", "name": "Renamed"})));
}

#[tokio::test]
async fn test_delete_workflow_with_empty_body_succeeds() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/workflows/42"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client.delete_workflow("42").await.unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_activate_and_deactivate_workflow() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/workflows/42/activate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "42", "active": true})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/workflows/42/deactivate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "42", "active": false})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);

    let activated = client.activate_workflow("42").await.unwrap().unwrap();
    assert_eq!(activated["active"], json!(true));

    let deactivated = client.deactivate_workflow("42").await.unwrap().unwrap();
    assert_eq!(deactivated["active"], json!(false));
}

// ============================================================================
// Executions
// ============================================================================

#[tokio::test]
async fn test_list_executions_with_status_filter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/executions"))
        .and(query_param("workflowId", "42"))
        .and(query_param("status", "error"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let params = ExecutionListParams::default()
        .workflow_id("42")
        .status(ExecutionStatus::Error);

    let result = client.list_executions(&params).await.unwrap();
    assert_eq!(result, Some(json!({"data": []})));
}

#[tokio::test]
async fn test_get_and_delete_execution() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/executions/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 7, "finished": true})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/executions/7"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);

    let execution = client.get_execution("7").await.unwrap();
    assert_eq!(execution, Some(json!({"id": 7, "finished": true})));

    let deleted = client.delete_execution("7").await.unwrap();
    assert!(deleted.is_none());
}

#[tokio::test]
async fn test_retry_execution_sends_load_workflow_flag() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/executions/7/retry"))
        .and(body_json(json!({"loadWorkflow": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 8})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client.retry_execution("7", true).await.unwrap();

    assert_eq!(result, Some(json!({"id": 8})));
}

// ============================================================================
// Credentials, Tags, Variables, Audit
// ============================================================================

#[tokio::test]
async fn test_list_credentials_and_get_schema() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/credentials/schema/httpBasicAuth"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"type": "object", "properties": {"user": {}}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);

    let credentials = client.list_credentials().await.unwrap();
    assert_eq!(credentials, Some(json!({"data": []})));

    let schema = client.get_credential_schema("httpBasicAuth").await.unwrap();
    assert_eq!(schema.unwrap()["type"], json!("object"));
}

#[tokio::test]
async fn test_list_and_create_tags() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/tags"))
        .and(body_json(json!({"name": "billing"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "1", "name": "billing"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);

    let tags = client.list_tags().await.unwrap();
    assert_eq!(tags, Some(json!({"data": []})));

    let created = client.create_tag("billing").await.unwrap().unwrap();
    assert_eq!(created["name"], json!("billing"));
}

#[tokio::test]
async fn test_list_variables() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/variables"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client.list_variables().await.unwrap();

    assert_eq!(result, Some(json!({"data": []})));
}

#[tokio::test]
async fn test_run_audit_with_category_scoping() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/audit"))
        .and(body_json(json!({
            "additionalOptions": {"categories": ["credentials", "nodes"]}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Credentials Risk Report": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client
        .run_audit(Some(&["credentials", "nodes"]))
        .await
        .unwrap();

    assert!(result.is_some());
}

#[tokio::test]
async fn test_run_audit_without_categories() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/audit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Database Risk Report": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client.run_audit(None).await.unwrap();

    assert!(result.is_some());
}

// ============================================================================
// Webhooks
// ============================================================================

#[tokio::test]
async fn test_invoke_webhook_through_domain_client() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/webhook/order-created"))
        .and(body_json(json!({"orderId": 42})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let webhook = WebhookRequest::new("webhook/order-created")
        .payload(json!({"orderId": 42}))
        .basic_auth(BasicAuth::new("svc", "secret"));

    let result = client.invoke_webhook(&webhook).await.unwrap();
    assert_eq!(result, Some(json!({"ok": true})));
}

// ============================================================================
// Structured Results
// ============================================================================

#[tokio::test]
async fn test_failures_convert_to_well_formed_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/workflows/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result: ApiCallResult = client.get_workflow("missing").await.into();

    assert!(!result.success);
    assert!(result.data.is_none());
    assert!(result.error.unwrap().contains("Resource not found"));
}

#[tokio::test]
async fn test_successes_convert_to_well_formed_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/workflows/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "42"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result: ApiCallResult = client.get_workflow("42").await.into();

    assert!(result.success);
    assert_eq!(result.data, Some(json!({"id": "42"})));
    assert!(result.error.is_none());
}
