//! Sponsored message options.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::GraphId;

/// Describes a sponsored message ad.
///
/// The four named fields are required by the endpoint. Anything else the ads
/// API accepts can be passed through `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SponsoredMessageOptions {
    /// Message creative to send.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_creative_id: Option<GraphId>,
    /// Maximum daily budget of the campaign.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_budget: Option<String>,
    /// Maximum bid for each recipient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bid_amount: Option<String>,
    /// Targeting spec, either an already-encoded string or a JSON object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targeting: Option<serde_json::Value>,
    /// Additional form fields forwarded untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl SponsoredMessageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message_creative_id(mut self, id: impl Into<GraphId>) -> Self {
        self.message_creative_id = Some(id.into());
        self
    }

    pub fn daily_budget(mut self, budget: impl Into<String>) -> Self {
        self.daily_budget = Some(budget.into());
        self
    }

    pub fn bid_amount(mut self, amount: impl Into<String>) -> Self {
        self.bid_amount = Some(amount.into());
        self
    }

    pub fn targeting(mut self, targeting: impl Into<serde_json::Value>) -> Self {
        self.targeting = Some(targeting.into());
        self
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Names of required fields that are absent or empty, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.message_creative_id.as_ref().is_none_or(GraphId::is_empty) {
            missing.push("message_creative_id");
        }
        if self.daily_budget.as_deref().is_none_or(blank) {
            missing.push("daily_budget");
        }
        if self.bid_amount.as_deref().is_none_or(blank) {
            missing.push("bid_amount");
        }
        if self.targeting.as_ref().is_none_or(empty_value) {
            missing.push("targeting");
        }
        missing
    }

    /// Flatten into form fields. Non-string values are JSON-encoded.
    pub fn to_form(&self) -> BTreeMap<String, String> {
        let mut form: BTreeMap<String, String> = self
            .extra
            .iter()
            .map(|(k, v)| (k.clone(), form_value(v)))
            .collect();

        if let Some(id) = &self.message_creative_id {
            form.insert("message_creative_id".into(), id.to_string());
        }
        if let Some(budget) = &self.daily_budget {
            form.insert("daily_budget".into(), budget.clone());
        }
        if let Some(bid) = &self.bid_amount {
            form.insert("bid_amount".into(), bid.clone());
        }
        if let Some(targeting) = &self.targeting {
            form.insert("targeting".into(), form_value(targeting));
        }
        form
    }
}

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn empty_value(v: &serde_json::Value) -> bool {
    match v {
        serde_json::Value::Null => true,
        serde_json::Value::String(s) => blank(s),
        _ => false,
    }
}

fn form_value(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
