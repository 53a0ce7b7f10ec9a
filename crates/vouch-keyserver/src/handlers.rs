//! Request handlers for key registration and lookup.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::error::ServerError;
use crate::state::AppState;
use crate::store;

#[derive(Debug, Deserialize)]
pub struct AddKeyRequest {
    pub public_key: String,
}

#[derive(Debug, Serialize)]
pub struct AddKeyResponse {
    pub kid: String,
}

#[derive(Debug, Serialize)]
pub struct KeyResponse {
    pub kid: String,
    pub public_key: String,
}

/// Health check.
pub async fn healthz() -> Json<serde_json::Value> {
    Json(json!({ "ok": true, "service": "vouch-keyserver" }))
}

/// Register a public key and hand back a generated identifier.
pub async fn add_key(
    State(state): State<AppState>,
    Json(req): Json<AddKeyRequest>,
) -> Result<Json<AddKeyResponse>, ServerError> {
    // Only 32-byte hex keys are storable; everything else is rejected here.
    let key = vouch_jwt::load_public_key_hex(&req.public_key)
        .map_err(|e| ServerError::InvalidRequest(e.to_string()))?;

    let kid = Uuid::new_v4().to_string();
    store::insert_key(&state.db, &kid, &hex::encode(key)).await?;
    tracing::info!("registered key {}", kid);

    Ok(Json(AddKeyResponse { kid }))
}

/// Look up a public key by identifier.
pub async fn get_key(
    State(state): State<AppState>,
    Path(kid): Path<String>,
) -> Result<Json<KeyResponse>, ServerError> {
    let stored = store::get_key(&state.db, &kid)
        .await?
        .ok_or(ServerError::KeyNotFound(kid))?;

    Ok(Json(KeyResponse {
        kid: stored.kid,
        public_key: stored.public_key,
    }))
}

/// Remove a key by identifier.
pub async fn delete_key(
    State(state): State<AppState>,
    Path(kid): Path<String>,
) -> Result<StatusCode, ServerError> {
    if !store::delete_key(&state.db, &kid).await? {
        return Err(ServerError::KeyNotFound(kid));
    }
    tracing::info!("deleted key {}", kid);
    Ok(StatusCode::NO_CONTENT)
}
