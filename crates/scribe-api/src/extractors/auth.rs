//! Authentication extractors
//!
//! Resolve the caller through the identity verifier at the top of every
//! handler. A protected route accessed without a valid token does not
//! error: it answers with a redirect to the login entry point, carrying
//! the originally requested destination so the caller lands back there
//! after authenticating.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use scribe_core::Snowflake;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from the identity token
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    /// User ID asserted by the identity provider
    pub user_id: Snowflake,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(user_id: Snowflake) -> Self {
        Self { user_id }
    }
}

/// Build the login redirect preserving the requested destination
fn login_redirect(state: &AppState, parts: &Parts) -> ApiError {
    let next = parts
        .uri
        .path_and_query()
        .map_or_else(|| parts.uri.path().to_string(), |pq| pq.as_str().to_string());
    ApiError::see_other(format!("{}?next={next}", state.config().auth.login_url))
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        // Extract the Authorization header; absence means anonymous
        let header =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await;
        let TypedHeader(Authorization(bearer)) = match header {
            Ok(header) => header,
            Err(_) => return Err(login_redirect(&app_state, parts)),
        };

        // An invalid token is anonymous too, and gets the same redirect
        match app_state.verifier().verify(bearer.token()) {
            Ok(identity) => Ok(AuthUser::new(identity.user_id)),
            Err(e) => {
                tracing::warn!(error = %e, "Rejected identity token");
                Err(login_redirect(&app_state, parts))
            }
        }
    }
}

/// Optional authenticated user
///
/// Resolves to None for anonymous callers (missing or invalid token)
/// instead of redirecting; used by routes that render for everyone but
/// vary their content for authenticated viewers.
#[derive(Debug, Clone, Copy)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl OptionalAuthUser {
    /// The caller's user id, when authenticated
    pub fn user_id(&self) -> Option<Snowflake> {
        self.0.map(|auth| auth.user_id)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_result =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await;

        match auth_result {
            Ok(TypedHeader(Authorization(bearer))) => {
                let app_state = AppState::from_ref(state);
                match app_state.verifier().verify(bearer.token()) {
                    Ok(identity) => Ok(OptionalAuthUser(Some(AuthUser::new(identity.user_id)))),
                    Err(e) => {
                        tracing::warn!(error = %e, "Ignoring invalid identity token");
                        Ok(OptionalAuthUser(None))
                    }
                }
            }
            Err(_) => Ok(OptionalAuthUser(None)),
        }
    }
}
