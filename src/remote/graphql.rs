//! Blocking GraphQL client for the authoring API's `createItem` mutation.
use serde_json::{Value, json};

use super::{CreateItemRequest, ItemClient};
use crate::config::RemoteSettings;
use crate::error::RemoteError;
use crate::model::CreatedResource;

/// The only operation the provisioner sends.
pub const CREATE_ITEM_MUTATION: &str = "mutation CreateItem($input: CreateItemInput!) {
  createItem(input: $input) {
    item { itemId name path }
  }
}";

/// [`ItemClient`] backed by HTTP POSTs to the GraphQL endpoint.
pub struct GraphqlClient {
    agent: ureq::Agent,
    endpoint: String,
    token: String,
}

impl std::fmt::Debug for GraphqlClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphqlClient")
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl GraphqlClient {
    /// Build a client from resolved remote settings.
    ///
    /// Status codes are inspected by the client itself, so the agent is
    /// configured not to turn them into transport errors.
    #[must_use]
    pub fn new(settings: &RemoteSettings) -> Self {
        let mut config = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(settings.timeout));
        if settings.skip_tls_verify {
            config = config.tls_config(
                ureq::tls::TlsConfig::builder()
                    .disable_verification(true)
                    .build(),
            );
        }
        Self {
            agent: config.build().into(),
            endpoint: settings.endpoint.clone(),
            token: settings.token.clone(),
        }
    }
}

impl ItemClient for GraphqlClient {
    fn create_item(&self, request: &CreateItemRequest) -> Result<CreatedResource, RemoteError> {
        let body = request_body(request)?;
        let response = self
            .agent
            .post(self.endpoint.as_str())
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.token))
            .send(body)
            .map_err(|e| RemoteError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .into_body()
            .read_to_string()
            .map_err(|e| RemoteError::Transport(e.to_string()))?;
        parse_create_response(status, &text)
    }
}

/// Encode the request document for one create call.
fn request_body(request: &CreateItemRequest) -> Result<String, RemoteError> {
    let document = json!({
        "query": CREATE_ITEM_MUTATION,
        "variables": { "input": request },
    });
    serde_json::to_string(&document)
        .map_err(|e| RemoteError::Transport(format!("failed to encode request: {e}")))
}

/// Interpret the status and body of a create call.
///
/// The created item is read from the first key under `data`, whatever the
/// mutation alias is.
///
/// # Errors
///
/// - [`RemoteError::Status`] for any status outside `200..300`
/// - [`RemoteError::Graphql`] when a non-empty `errors` list is present
/// - [`RemoteError::MalformedResponse`] when no item can be extracted
pub fn parse_create_response(status: u16, body: &str) -> Result<CreatedResource, RemoteError> {
    if !(200..300).contains(&status) {
        return Err(RemoteError::Status {
            status,
            body: body.to_string(),
        });
    }
    let value: Value = serde_json::from_str(body)
        .map_err(|e| RemoteError::MalformedResponse(format!("{e}: {body}")))?;
    if let Some(errors) = value.get("errors").and_then(Value::as_array)
        && !errors.is_empty()
    {
        return Err(RemoteError::Graphql(Value::Array(errors.clone()).to_string()));
    }
    let item = value
        .get("data")
        .and_then(Value::as_object)
        .and_then(|data| data.values().next())
        .and_then(|root| root.get("item"))
        .filter(|item| !item.is_null())
        .ok_or_else(|| RemoteError::MalformedResponse(body.to_string()))?;
    serde_json::from_value(item.clone())
        .map_err(|e| RemoteError::MalformedResponse(format!("{e}: {body}")))
}
