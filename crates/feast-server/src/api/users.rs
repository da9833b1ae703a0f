use axum::{
    extract::{Path, Query, State},
    Form, Json,
};
use feast_accounts::{
    AccountDetail, AccountSummary, AccountUpdate, Accounts, ListQuery,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{error::ApiError, extractors::AuthenticatedUser, state::AppState};

// ============================================================================
// Request Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub acct: String,
    #[serde(default)]
    pub fullname: String,
    #[serde(default)]
    pub pwd: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateForm {
    pub fullname: Option<String>,
    pub pwd: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// Register a new account
pub async fn signup(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SignupForm>,
) -> Result<Json<&'static str>, ApiError> {
    state
        .account_service
        .signup(&form.acct, &form.fullname, &form.pwd)
        .await?;

    Ok(Json("User created successfully"))
}

/// List accounts with optional `sortBy`, `limit` and `offset`
pub async fn list_users(
    _user: AuthenticatedUser,
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<AccountSummary>>, ApiError> {
    let query = ListQuery::from_params(
        params.sort_by.as_deref(),
        params.limit.as_deref(),
        params.offset.as_deref(),
    )?;

    Ok(Json(state.account_service.list(query).await?))
}

/// Accounts whose full name matches the path segment exactly
pub async fn search_by_fullname(
    _user: AuthenticatedUser,
    State(state): State<Arc<AppState>>,
    Path(fullname): Path<String>,
) -> Result<Json<Vec<AccountSummary>>, ApiError> {
    Ok(Json(
        state.account_service.search_by_fullname(&fullname).await?,
    ))
}

pub async fn get_user_detail(
    _user: AuthenticatedUser,
    State(state): State<Arc<AppState>>,
    Path(acct): Path<String>,
) -> Result<Json<AccountDetail>, ApiError> {
    Ok(Json(state.account_service.detail(&acct).await?))
}

/// Change full name and/or password; empty form values count as absent
pub async fn update_user(
    _user: AuthenticatedUser,
    State(state): State<Arc<AppState>>,
    Path(acct): Path<String>,
    Form(form): Form<UpdateForm>,
) -> Result<Json<&'static str>, ApiError> {
    let update = AccountUpdate {
        fullname: form.fullname.filter(|v| !v.is_empty()),
        pwd: form.pwd.filter(|v| !v.is_empty()),
    };

    state.account_service.update(&acct, update).await?;

    Ok(Json("User updated successfully"))
}

/// Delete another account; deleting your own is refused
pub async fn delete_user(
    user: AuthenticatedUser,
    State(state): State<Arc<AppState>>,
    Path(acct): Path<String>,
) -> Result<Json<&'static str>, ApiError> {
    state.account_service.delete(user.acct(), &acct).await?;

    Ok(Json("User deleted successfully"))
}
