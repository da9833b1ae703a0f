use axum::{async_trait, extract::FromRequestParts, http::header, http::request::Parts};
use feast_sessions::TokenClaims;
use std::sync::Arc;

use crate::{error::ApiError, state::AppState};

/// Extractor for authenticated requests
///
/// Reads `Authorization: Bearer <token>` and verifies signature and expiry
/// against the configured public key.
pub struct AuthenticatedUser {
    pub claims: TokenClaims,
}

impl AuthenticatedUser {
    pub fn acct(&self) -> &str {
        &self.claims.acct
    }
}

#[async_trait]
impl FromRequestParts<Arc<AppState>> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .filter(|h| !h.is_empty())
            .ok_or_else(|| ApiError::Unauthorized("Authorization header missing".to_string()))?;

        let token = auth_header.strip_prefix("Bearer ").unwrap_or(auth_header);

        let claims = state.session_service.verifier().verify(token).map_err(|e| {
            tracing::warn!(error = %e, "Token verification failed");
            ApiError::Unauthorized(format!("Error verifying JWT token: {}", e))
        })?;

        Ok(AuthenticatedUser { claims })
    }
}
