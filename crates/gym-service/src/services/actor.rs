//! User service
//!
//! Profile reads and edits for every role, account administration for admins,
//! and the superuser bootstrap run at startup.

use chrono::Utc;
use gym_common::{hash_password, validate_password_length, SuperuserConfig};
use gym_core::entities::Actor;
use gym_core::policy::lifecycle::{after_restore, LifecycleState};
use gym_core::policy::{authorize, Action, EntityKind, RowScope};
use gym_core::{Caller, DomainError, Role, Snowflake};
use tracing::{info, instrument};

use crate::dto::{ActorResponse, CreateActorRequest, PaginatedResponse, UpdateActorRequest};

use super::access::{missing, Access, ListOptions};
use super::context::ServiceContext;
use super::error::ServiceResult;

const KIND: EntityKind = EntityKind::Actor;

/// User service
pub struct ActorService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ActorService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List users visible to the caller
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        caller: Caller,
        opts: ListOptions,
    ) -> ServiceResult<PaginatedResponse<ActorResponse>> {
        let scope = Access::new(self.ctx, caller).read_scope(KIND, opts.include_inactive);
        let actors = self.ctx.actor_repo().list(&scope, opts.query()).await?;
        Ok(opts.page(actors, |a| a.id))
    }

    /// Soft-deleted users only
    #[instrument(skip(self))]
    pub async fn list_deleted(
        &self,
        caller: Caller,
        opts: ListOptions,
    ) -> ServiceResult<PaginatedResponse<ActorResponse>> {
        authorize(Action::ListDeleted, KIND, &caller)?;
        let actors = self.ctx.actor_repo().list_deleted(opts.query()).await?;
        Ok(opts.page(actors, |a| a.id))
    }

    #[instrument(skip(self))]
    pub async fn get(
        &self,
        caller: Caller,
        id: Snowflake,
        include_inactive: bool,
    ) -> ServiceResult<ActorResponse> {
        let scope = Access::new(self.ctx, caller).read_scope(KIND, include_inactive);
        let actor = self
            .ctx
            .actor_repo()
            .find(id, &scope)
            .await?
            .ok_or_else(|| missing(KIND, id))?;
        Ok(ActorResponse::from(actor))
    }

    /// Create an account
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn create(
        &self,
        caller: Caller,
        request: CreateActorRequest,
    ) -> ServiceResult<ActorResponse> {
        authorize(Action::Create, KIND, &caller)?;
        if request.is_super && !caller.is_super {
            return Err(DomainError::forbidden("only a super-admin may grant super-admin").into());
        }

        let password_hash = hash_password(&request.password)?;

        let mut actor = Actor::new(
            self.ctx.generate_id(),
            request.username,
            request.email,
            request.role,
        );
        actor.first_name = request.first_name;
        actor.last_name = request.last_name;
        actor.bio = request.bio;
        actor.gender = request.gender;
        actor.phone = request.phone;
        actor.weight = request.weight;
        actor.height = request.height;
        actor.age = request.age;
        actor.profile_image = request.profile_image;
        actor.is_super = request.is_super;

        self.ctx.actor_repo().create(&actor, &password_hash).await?;

        info!(actor_id = %actor.id, role = %actor.role, "User created");
        Ok(ActorResponse::from(actor))
    }

    /// Partial profile update
    ///
    /// Non-admins may only edit their own profile and never their role.
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        caller: Caller,
        id: Snowflake,
        request: UpdateActorRequest,
    ) -> ServiceResult<ActorResponse> {
        let scope = Access::new(self.ctx, caller).write_scope(Action::Update, KIND)?;
        let mut actor = self
            .ctx
            .actor_repo()
            .find(id, &scope)
            .await?
            .ok_or_else(|| missing(KIND, id))?;

        check_profile_edit(&caller, &actor, &request)?;
        let password_hash = request.password.as_deref().map(hash_password).transpose()?;

        if let Some(username) = request.username {
            actor.username = username;
        }
        if let Some(email) = request.email {
            actor.email = email;
        }
        if let Some(first_name) = request.first_name {
            actor.first_name = first_name;
        }
        if let Some(last_name) = request.last_name {
            actor.last_name = last_name;
        }
        if let Some(role) = request.role {
            actor.role = role;
        }
        if let Some(is_super) = request.is_super {
            actor.is_super = is_super;
        }
        actor.bio = request.bio.or(actor.bio);
        actor.gender = request.gender.or(actor.gender);
        actor.phone = request.phone.or(actor.phone);
        actor.weight = request.weight.or(actor.weight);
        actor.height = request.height.or(actor.height);
        actor.age = request.age.or(actor.age);
        actor.profile_image = request.profile_image.or(actor.profile_image);
        actor.updated_at = Utc::now();

        self.ctx
            .actor_repo()
            .update(&actor, password_hash.as_deref())
            .await?;

        info!(actor_id = %id, password_changed = password_hash.is_some(), "User updated");
        Ok(ActorResponse::from(actor))
    }

    /// Soft delete
    #[instrument(skip(self))]
    pub async fn delete(&self, caller: Caller, id: Snowflake) -> ServiceResult<()> {
        let scope = Access::new(self.ctx, caller).write_scope(Action::Delete, KIND)?;
        self.ctx
            .actor_repo()
            .find(id, &scope)
            .await?
            .ok_or_else(|| missing(KIND, id))?;

        self.ctx.actor_repo().delete(id).await?;

        info!(actor_id = %id, "User soft deleted");
        Ok(())
    }

    /// Undo a soft delete
    #[instrument(skip(self))]
    pub async fn restore(&self, caller: Caller, id: Snowflake) -> ServiceResult<ActorResponse> {
        let scope = Access::new(self.ctx, caller).restore_scope(KIND)?;
        let mut actor = self
            .ctx
            .actor_repo()
            .find(id, &scope)
            .await?
            .ok_or_else(|| missing(KIND, id))?;

        let state = if actor.is_deleted {
            LifecycleState::Deleted
        } else {
            LifecycleState::Present
        };
        after_restore(KIND, id, state)?;

        self.ctx.actor_repo().restore(id).await?;
        actor.is_deleted = false;

        info!(actor_id = %id, "User restored");
        Ok(ActorResponse::from(actor))
    }

    /// Remove the account for good
    #[instrument(skip(self))]
    pub async fn purge(&self, caller: Caller, id: Snowflake) -> ServiceResult<()> {
        authorize(Action::Purge, KIND, &caller)?;
        self.ctx
            .actor_repo()
            .find(id, &RowScope::unrestricted())
            .await?
            .ok_or_else(|| missing(KIND, id))?;

        self.ctx.actor_repo().purge(id).await?;

        info!(actor_id = %id, "User purged");
        Ok(())
    }

    /// Create the configured super-admin unless the username is already taken
    ///
    /// Returns the new id, or `None` when nothing was created.
    #[instrument(skip(self, config), fields(username = %config.username))]
    pub async fn ensure_superuser(
        &self,
        config: &SuperuserConfig,
    ) -> ServiceResult<Option<Snowflake>> {
        if self
            .ctx
            .actor_repo()
            .find_by_username(&config.username)
            .await?
            .is_some()
        {
            return Ok(None);
        }

        validate_password_length(&config.password)?;
        let password_hash = hash_password(&config.password)?;
        let mut actor = Actor::new(
            self.ctx.generate_id(),
            config.username.clone(),
            config.email.clone(),
            Role::Admin,
        );
        actor.is_super = true;

        self.ctx.actor_repo().create(&actor, &password_hash).await?;

        info!(actor_id = %actor.id, "Superuser created");
        Ok(Some(actor.id))
    }
}

/// Who may change what on an existing profile
fn check_profile_edit(
    caller: &Caller,
    target: &Actor,
    request: &UpdateActorRequest,
) -> Result<(), DomainError> {
    if !caller.is_admin() && target.id != caller.id {
        return Err(DomainError::forbidden("you may only edit your own profile"));
    }
    if request.role.is_some_and(|role| role != target.role) && !caller.is_admin() {
        return Err(DomainError::forbidden("only an admin may change a role"));
    }
    if request.is_super.is_some_and(|flag| flag != target.is_super) && !caller.is_super {
        return Err(DomainError::forbidden("only a super-admin may change super-admin status"));
    }
    Ok(())
}
