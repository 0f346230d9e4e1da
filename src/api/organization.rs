//! Organization Mutations

use serde_json::Value;

use super::{documents, take_payload, ApiError, GraphqlClient};
use crate::models::NewOrganization;

/// Create an organization; the server derives its slug from the name
pub async fn create_organization(client: &GraphqlClient, input: &NewOrganization) -> Result<Value, ApiError> {
    let data = client.execute(documents::CREATE_ORGANIZATION, input).await?;
    take_payload(data, "createOrganization", "organization")
}
