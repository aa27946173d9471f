//! Messenger Profile API (`/me/messenger_profile`).

use serde_json::{Value, json};

use crate::error::MessengerError;
use crate::execution::http::SharedTransport;
use crate::types::GraphRequest;

use super::reject;

const PROFILE_PATH: &str = "/me/messenger_profile";

/// Properties fetched by [`MessengerProfile::get_messenger_profile`] when none are given.
pub const DEFAULT_PROFILE_FIELDS: [&str; 8] = [
    "account_linking_url",
    "persistent_menu",
    "get_started",
    "greeting",
    "whitelisted_domains",
    "payment_settings",
    "target_audience",
    "home_url",
];

/// A profile call: either a field selection to read, or a body to write.
///
/// A body carrying a `fields` key deletes those properties; any other body sets them.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileCall {
    Query(String),
    Payload(Value),
}

impl ProfileCall {
    pub fn to_graph_request(&self) -> GraphRequest {
        match self {
            Self::Query(fields) => GraphRequest::get(PROFILE_PATH).with_query("fields", fields),
            Self::Payload(payload) => {
                let request = if payload.get("fields").is_some() {
                    GraphRequest::delete(PROFILE_PATH)
                } else {
                    GraphRequest::post(PROFILE_PATH)
                };
                request.with_json(payload.clone())
            }
        }
    }
}

/// Messenger Profile API adapter.
#[derive(Clone)]
pub struct MessengerProfile {
    transport: SharedTransport,
}

impl MessengerProfile {
    pub fn new(transport: SharedTransport) -> Self {
        Self { transport }
    }

    /// Set one or more profile properties, e.g.
    /// `{"greeting": [{"locale": "default", "text": "Hello!"}]}`.
    pub async fn set_messenger_profile(&self, fields: Value) -> Result<Value, MessengerError> {
        match &fields {
            Value::Object(map) if !map.is_empty() => {}
            _ => return Err(reject("fields", "valid fields object required")),
        }
        self.call_messenger_profile_api(ProfileCall::Payload(fields))
            .await
    }

    /// Read profile properties. `None` or an empty list reads [`DEFAULT_PROFILE_FIELDS`].
    pub async fn get_messenger_profile(
        &self,
        fields: Option<&[&str]>,
    ) -> Result<Value, MessengerError> {
        let fields = match fields {
            Some(fields) if !fields.is_empty() => fields,
            _ => &DEFAULT_PROFILE_FIELDS[..],
        };
        self.call_messenger_profile_api(ProfileCall::Query(fields.join(",")))
            .await
    }

    /// Delete profile properties.
    pub async fn delete_messenger_profile(
        &self,
        fields: &[&str],
    ) -> Result<Value, MessengerError> {
        if fields.is_empty() || fields.iter().any(|f| f.trim().is_empty()) {
            return Err(reject("fields", "Valid fields array required"));
        }
        self.call_messenger_profile_api(ProfileCall::Payload(json!({ "fields": fields })))
            .await
    }

    pub async fn call_messenger_profile_api(
        &self,
        call: ProfileCall,
    ) -> Result<Value, MessengerError> {
        self.transport.send_request(call.to_graph_request()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingTransport;
    use reqwest::Method;

    fn profile() -> (RecordingTransport, MessengerProfile) {
        let spy = RecordingTransport::new(json!({"result": "success"}));
        let profile = MessengerProfile::new(spy.shared());
        (spy, profile)
    }

    #[tokio::test]
    async fn get_defaults_to_eight_fields_in_order() {
        let (spy, profile) = profile();
        profile.get_messenger_profile(None).await.unwrap();

        let call = spy.last_call();
        assert_eq!(call.method, Method::GET);
        assert_eq!(call.path, "/me/messenger_profile");
        assert_eq!(
            call.query["fields"],
            "account_linking_url,persistent_menu,get_started,greeting,whitelisted_domains,payment_settings,target_audience,home_url"
        );
        assert!(call.body.is_none());

        profile.get_messenger_profile(Some(&[][..])).await.unwrap();
        assert_eq!(spy.last_call().query["fields"], DEFAULT_PROFILE_FIELDS.join(","));
    }

    #[tokio::test]
    async fn get_selected_fields() {
        let (spy, profile) = profile();
        profile
            .get_messenger_profile(Some(&["whitelisted_domains", "greeting"][..]))
            .await
            .unwrap();
        assert_eq!(spy.last_call().query["fields"], "whitelisted_domains,greeting");
    }

    #[tokio::test]
    async fn set_posts_payload() {
        let (spy, profile) = profile();
        let fields = json!({
            "whitelisted_domains": ["https://www.example.com"],
            "get_started": {"payload": "callback_payload"}
        });
        let res = profile.set_messenger_profile(fields.clone()).await.unwrap();
        assert_eq!(res, json!({"result": "success"}));

        let call = spy.last_call();
        assert_eq!(call.method, Method::POST);
        assert_eq!(call.payload(), Some(&fields));
        assert!(call.query.is_empty());
    }

    #[tokio::test]
    async fn delete_switches_method() {
        let (spy, profile) = profile();
        profile
            .delete_messenger_profile(&["whitelisted_domains", "greeting"])
            .await
            .unwrap();
        let call = spy.last_call();
        assert_eq!(call.method, Method::DELETE);
        assert_eq!(
            call.payload(),
            Some(&json!({"fields": ["whitelisted_domains", "greeting"]}))
        );
    }

    #[tokio::test]
    async fn invalid_arguments_are_rejected() {
        let (spy, profile) = profile();

        for bad in [Value::Null, json!("greeting"), json!([1, 2]), json!({})] {
            let err = profile.set_messenger_profile(bad).await.unwrap_err();
            assert_eq!(err.to_string(), "valid fields object required");
        }

        let err = profile.delete_messenger_profile(&[]).await.unwrap_err();
        assert_eq!(err.to_string(), "Valid fields array required");

        assert!(spy.calls().is_empty());
    }
}
