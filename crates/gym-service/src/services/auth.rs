//! Caller resolution
//!
//! Tokens come from an external identity provider; this service only verifies
//! them and loads the actor's current role.

use gym_common::AppError;
use gym_core::Caller;
use tracing::{debug, instrument, warn};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Verify a bearer token and load the caller it names
    ///
    /// Deleted or unknown actors are rejected; role and super flag are read
    /// fresh so changes apply to tokens already issued.
    #[instrument(skip(self, token))]
    pub async fn resolve_caller(&self, token: &str) -> ServiceResult<Caller> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_access_token(token)
            .inspect_err(|e| warn!(error = %e, "Rejected access token"))?;
        let actor_id = claims.actor_id()?;

        let caller = self
            .ctx
            .actor_repo()
            .find_caller(actor_id)
            .await?
            .ok_or_else(|| {
                warn!(actor_id = %actor_id, "Token subject is not an active user");
                AppError::UnknownCaller
            })?;

        debug!(actor_id = %caller.id, role = ?caller.role, is_super = caller.is_super, "Caller resolved");
        Ok(caller)
    }
}
