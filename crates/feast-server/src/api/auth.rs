use axum::{extract::State, Form, Json};
use feast_accounts::{validation, Accounts};
use feast_sessions::SessionToken;
use serde::Deserialize;
use std::sync::Arc;

use crate::{error::ApiError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub acct: String,
    #[serde(default)]
    pub pwd: String,
}

/// Password login, answers with a one hour session token
///
/// Every failure gets the same 401 text; the precise reason only goes to
/// the login-failure stream.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Form(form): Form<LoginForm>,
) -> Result<Json<SessionToken>, ApiError> {
    validation::validate_acct(&form.acct)?;
    validation::validate_password(&form.pwd)?;

    let token = state
        .account_service
        .authenticate(&form.acct, &form.pwd)
        .await
        .map_err(|e| {
            if e.is_authentication_failure() {
                ApiError::login_failed()
            } else {
                ApiError::from(e)
            }
        })?;

    Ok(Json(token))
}
