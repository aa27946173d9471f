//! Graph API Mock Integration Tests
//!
//! Drives the default transport against a mock HTTP server.

use messenger_graph::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "test-page-token";

fn client_for(server: &MockServer) -> MessengerClient {
    MessengerClient::builder()
        .page_token(TOKEN)
        .base_url(server.uri())
        .build()
        .expect("Failed to build client")
}

#[tokio::test]
async fn test_send_broadcast() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2.11/me/broadcast_messages"))
        .and(query_param("access_token", TOKEN))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"message_creative_id": 499792492764246u64})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"broadcast_id": 397230957240952u64})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let res = client_for(&mock_server)
        .broadcast()
        .send_broadcast(499792492764246u64, None)
        .await
        .expect("broadcast failed");
    assert_eq!(res, json!({"broadcast_id": 397230957240952u64}));
}

#[tokio::test]
async fn test_get_messenger_profile_default_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3.2/me/messenger_profile"))
        .and(query_param(
            "fields",
            "account_linking_url,persistent_menu,get_started,greeting,whitelisted_domains,payment_settings,target_audience,home_url",
        ))
        .and(query_param("access_token", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [{}]})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let res = client_for(&mock_server)
        .messenger_profile()
        .get_messenger_profile(None)
        .await
        .expect("profile failed");
    assert_eq!(res, json!({"data": [{}]}));
}

#[tokio::test]
async fn test_remove_psid_sends_delete_with_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v3.2/0957209720496743/label"))
        .and(body_json(json!({"user": "49670354734069743"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let res = client_for(&mock_server)
        .custom_labels()
        .remove_psid_from_custom_label("49670354734069743", "0957209720496743")
        .await
        .expect("remove failed");
    assert_eq!(res["success"], true);
}

#[tokio::test]
async fn test_sponsored_message_is_form_encoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2.11/act_9352379502706/sponsored_message_ads"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("access_token=test-page-token"))
        .and(body_string_contains("message_creative_id=34967347634346"))
        .and(body_string_contains("daily_budget=10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ad_group_id": "6088387928148",
            "broadcast_id": "754911018029273",
            "success": true
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let options = SponsoredMessageOptions::new()
        .message_creative_id("34967347634346")
        .daily_budget("10")
        .bid_amount("1")
        .targeting(json!({"geo_locations": {"countries": ["US"]}}));

    let res = client_for(&mock_server)
        .sponsored_messages()
        .send_sponsored_message("9352379502706", options)
        .await
        .expect("sponsored message failed");
    assert_eq!(res["success"], true);
}

#[tokio::test]
async fn test_validation_failure_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .custom_labels()
        .delete_custom_label("")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "label_id required");

    let err = client.personas().delete_persona("").await.unwrap_err();
    assert_eq!(err.to_string(), "persona_id required");

    let received = mock_server.received_requests().await.unwrap_or_default();
    assert!(received.is_empty());
}

#[tokio::test]
async fn test_graph_errors_are_classified() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3.2/me/personas"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "message": "Error validating access token: Session has expired",
                "type": "OAuthException",
                "code": 190,
                "fbtrace_id": "AbCdEf"
            }
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v3.2/me/custom_labels"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "message": "(#100) Param fields must be non-empty",
                "type": "OAuthException",
                "code": 100
            }
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let err = client.personas().get_all_personas().await.unwrap_err();
    assert!(matches!(err, MessengerError::AuthenticationError(ref m) if m.contains("Session has expired")));
    assert!(err.is_remote());
    assert!(!err.is_validation());

    let err = client
        .custom_labels()
        .get_all_custom_labels()
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(400));
    assert_eq!(err.graph_error_code(), Some(100));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_server_error_is_retryable_hint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2.11/9485676932424"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .broadcast()
        .get_broadcast_reach_estimation("9485676932424")
        .await
        .unwrap_err();
    assert!(err.is_retryable());
    assert_eq!(err.to_string(), "API error 503: Service Unavailable");
}

#[tokio::test]
async fn test_invalid_json_response_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3.2/me/personas"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .personas()
        .get_all_personas()
        .await
        .unwrap_err();
    assert!(matches!(err, MessengerError::ParseError(_)));
}

#[tokio::test]
async fn test_pinned_api_version_overrides_default() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2.11/me/broadcast_reach_estimations"))
        .and(body_json(json!({})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"reach_estimation_id": "1"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = MessengerClient::builder()
        .page_token(TOKEN)
        .base_url(format!("{}/", mock_server.uri()))
        .api_version("v19.0")
        .build()
        .expect("Failed to build client");

    let res = client
        .broadcast()
        .start_broadcast_reach_estimation(None)
        .await
        .expect("estimation failed");
    assert_eq!(res["reach_estimation_id"], "1");
}
