//! Comment Mutations

use serde::Serialize;
use serde_json::Value;

use super::{documents, take_payload, ApiError, GraphqlClient};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddCommentVars<'a> {
    task_id: &'a str,
    content: &'a str,
    author_email: &'a str,
}

/// Append a comment to a task and return the created comment object
pub async fn add_comment(
    client: &GraphqlClient,
    task_id: &str,
    content: &str,
    author_email: &str,
) -> Result<Value, ApiError> {
    let vars = AddCommentVars { task_id, content, author_email };
    let data = client.execute(documents::ADD_COMMENT, vars).await?;
    take_payload(data, "addComment", "comment")
}
