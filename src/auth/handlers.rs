use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::{
        dto::{LoginRequest, MessageResponse, RegisterRequest, SessionResponse},
        password::{hash_password, verify_password},
        repo::Customer,
    },
    error::ApiError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register/", post(register))
        .route("/login/", post(login))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let Json(payload) = payload.map_err(|e| {
        warn!(error = %e, "malformed register payload");
        ApiError::Decoding(e.body_text())
    })?;

    let hash = hash_password(&payload.password)?;
    let customer = Customer::create(&state.db, &payload, &hash).await?;

    info!(user_id = customer.user_id, username = %customer.username, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User created".into(),
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    let Json(payload) = payload.map_err(|e| {
        warn!(error = %e, "malformed login payload");
        ApiError::Decoding(e.body_text())
    })?;

    let customer = match Customer::find_by_username(&state.db, &payload.username).await? {
        Some(c) => c,
        None => {
            warn!(username = %payload.username, "login unknown username");
            return Err(ApiError::Authentication);
        }
    };

    if !verify_password(&payload.password, &customer.password)? {
        warn!(username = %payload.username, user_id = customer.user_id, "login invalid password");
        return Err(ApiError::Authentication);
    }

    info!(user_id = customer.user_id, username = %customer.username, "user logged in");
    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            sessionid: Uuid::new_v4().to_string(),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_response_uses_the_sessionid_key() {
        let response = SessionResponse {
            sessionid: Uuid::new_v4().to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("sessionid"));
    }

    #[test]
    fn register_response_message() {
        let response = MessageResponse {
            message: "User created".into(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"message":"User created"}"#);
    }
}
