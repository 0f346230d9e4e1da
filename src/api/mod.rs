//! GraphQL API Wrappers
//!
//! Frontend bindings to the GraphQL server, organized by domain. Mutation
//! wrappers return the raw entity object from the payload so it can be
//! normalized into the cache as-is.

pub mod documents;
mod error;
mod organization;
mod project;
mod task;
mod comment;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::query::QueryKey;

pub use error::ApiError;
pub use organization::*;
pub use project::*;
pub use task::*;
pub use comment::*;

#[derive(Serialize)]
struct GraphqlRequest<'a, V: Serialize> {
    query: &'a str,
    variables: V,
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphqlErrorMessage>,
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorMessage {
    message: String,
}

/// HTTP client bound to one GraphQL endpoint
#[derive(Clone, Debug)]
pub struct GraphqlClient {
    endpoint: String,
    http: reqwest::Client,
}

impl GraphqlClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }

    /// POST one operation and return its `data` object
    pub async fn execute<V: Serialize>(&self, document: &str, variables: V) -> Result<Value, ApiError> {
        let request = GraphqlRequest { query: document, variables };
        let response = self.http.post(&self.endpoint).json(&request).send().await?;
        let status = response.status();
        let body = response.text().await?;
        // GraphQL errors may arrive with a 4xx status; prefer their messages
        match parse_response(&body) {
            Err(ApiError::Decode(_)) if !status.is_success() => Err(ApiError::Status(status.as_u16())),
            result => result,
        }
    }
}

/// Decode a GraphQL response body. Any reported error fails the whole
/// operation.
fn parse_response(body: &str) -> Result<Value, ApiError> {
    let response: GraphqlResponse = serde_json::from_str(body)?;
    if !response.errors.is_empty() {
        let messages: Vec<String> = response.errors.into_iter().map(|e| e.message).collect();
        return Err(ApiError::Graphql(messages.join("; ")));
    }
    response.data.ok_or(ApiError::MissingPayload("data"))
}

/// `data[field][payload]`, failing when absent or null
fn take_payload(mut data: Value, field: &'static str, payload: &'static str) -> Result<Value, ApiError> {
    match data.get_mut(field).and_then(|f| f.get_mut(payload)).map(Value::take) {
        Some(value) if !value.is_null() => Ok(value),
        _ => Err(ApiError::MissingPayload(payload)),
    }
}

/// `data[field].ok` must be `true` for a delete to count as confirmed
fn confirm_ok(data: &Value, field: &'static str) -> Result<(), ApiError> {
    match data.get(field).and_then(|f| f.get("ok")).and_then(Value::as_bool) {
        Some(true) => Ok(()),
        _ => Err(ApiError::Rejected(field)),
    }
}

/// Run a root query and return the value of its root field
pub async fn fetch_query(client: &GraphqlClient, key: &QueryKey) -> Result<Value, ApiError> {
    let mut data = client.execute(key.document(), key.variables()).await?;
    let root = data
        .get_mut(key.root_field())
        .map(Value::take)
        .ok_or(ApiError::MissingPayload(key.root_field()))?;
    log::debug!("fetched {}", key.store_field_name());
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_response_data() {
        let data = parse_response(r#"{ "data": { "allOrganizations": [] } }"#).unwrap();
        assert_eq!(data, json!({ "allOrganizations": [] }));
    }

    #[test]
    fn test_parse_response_joins_errors() {
        let err = parse_response(
            r#"{ "data": null, "errors": [{ "message": "Task not found" }, { "message": "second" }] }"#,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Task not found; second");
    }

    #[test]
    fn test_parse_response_without_data() {
        let err = parse_response("{}").unwrap_err();
        assert!(matches!(err, ApiError::MissingPayload("data")));
        assert!(matches!(parse_response("not json"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_take_payload() {
        let data = json!({ "addComment": { "comment": { "__typename": "TaskCommentType", "id": "1" } } });
        let comment = take_payload(data, "addComment", "comment").unwrap();
        assert_eq!(comment["id"], "1");

        let empty = json!({ "addComment": { "comment": null } });
        assert!(matches!(
            take_payload(empty, "addComment", "comment"),
            Err(ApiError::MissingPayload("comment"))
        ));
    }

    #[test]
    fn test_confirm_ok() {
        assert!(confirm_ok(&json!({ "deleteTask": { "ok": true } }), "deleteTask").is_ok());
        assert!(matches!(
            confirm_ok(&json!({ "deleteTask": { "ok": false } }), "deleteTask"),
            Err(ApiError::Rejected("deleteTask"))
        ));
    }
}
