//! Outbound lead submission
//!
//! One POST with a JSON body, no retries; retry is the visitor pressing
//! the button again. Only the status class of the reply matters.

use gloo_net::http::Request;

use builtelo_core::{response_outcome, LeadFields, SubmitError};

/// POST the lead to the configured endpoint. Success is any 2xx reply.
pub async fn post_lead(endpoint: &str, lead: &LeadFields) -> Result<(), SubmitError> {
    let response = Request::post(endpoint)
        .header("Content-Type", "application/json")
        .json(lead)
        .map_err(|err| SubmitError::Transport(err.to_string()))?
        .send()
        .await
        .map_err(|err| SubmitError::Transport(err.to_string()))?;

    response_outcome(response.status())
}
