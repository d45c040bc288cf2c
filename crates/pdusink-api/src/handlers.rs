//! Endpoint handler for PDU submission.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/submit-pdu` | Authenticate, decode, persist one PDU |
//!
//! # Responses
//!
//! | Status | Body |
//! |--------|------|
//! | 201 | `{"status":"success","id":<id>}` |
//! | 400 | `{"status":"error","message":"Invalid request payload"}` |
//! | 401 | `{"status":"error","message":"Unauthorized"}` |
//! | 500 | `{"status":"error","message":"Failed to save PDU"}` |

use std::sync::Arc;

use axum::Json;
use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use pdusink_db::PduStore;
use pdusink_types::{SubmitPduRequest, SubmitPduResponse};

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /submit-pdu
// ---------------------------------------------------------------------------

/// Accept one PDU submission.
///
/// Steps run strictly in order and the first failure ends the request:
///
/// 1. Authenticate the bearer token. The body is not read on failure.
/// 2. Read at most `max_body_bytes` and decode `{ "raw_pdu": "<string>" }`.
/// 3. Insert one record; the store assigns `id` and `created_at`.
/// 4. Reply `201` with the assigned id.
///
/// Resubmitting the same payload creates a new record.
pub async fn submit_pdu(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Body,
) -> Result<impl IntoResponse, ApiError> {
    state
        .api_token
        .authorize(&headers)
        .map_err(ApiError::Unauthorized)?;

    let bytes = axum::body::to_bytes(body, state.max_body_bytes)
        .await
        .map_err(|e| ApiError::InvalidPayload(format!("failed to read body: {e}")))?;

    let request = decode_submission(&bytes)?;

    let record = PduStore::new(&state.store)
        .insert(&request.raw_pdu)
        .await?;

    tracing::info!(
        pdu_id = %record.id,
        raw_pdu_len = record.raw_pdu.len(),
        "Stored PDU"
    );

    Ok((
        StatusCode::CREATED,
        Json(SubmitPduResponse::success(record.id)),
    ))
}

/// Decode a submission body.
///
/// The body must be a single JSON object whose `raw_pdu` member is a
/// string. Arrays are refused even though a one-element array would
/// otherwise map onto the struct positionally.
fn decode_submission(bytes: &[u8]) -> Result<SubmitPduRequest, ApiError> {
    let value: serde_json::Value = serde_json::from_slice(bytes)
        .map_err(|e| ApiError::InvalidPayload(format!("body is not JSON: {e}")))?;

    if !value.is_object() {
        return Err(ApiError::InvalidPayload(String::from(
            "body is not a JSON object",
        )));
    }

    serde_json::from_value(value)
        .map_err(|e| ApiError::InvalidPayload(format!("unexpected body shape: {e}")))
}
