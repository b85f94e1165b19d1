//! Trainer-member assignment service

use gym_core::entities::TrainerMemberLink;
use gym_core::policy::lifecycle::{after_restore, LifecycleState};
use gym_core::policy::{Action, EntityKind, RowOwner};
use gym_core::{Caller, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    CreateTrainerLinkRequest, PaginatedResponse, TrainerLinkResponse, UpdateTrainerLinkRequest,
};

use super::access::{missing, Access, ListOptions};
use super::context::ServiceContext;
use super::error::ServiceResult;

const KIND: EntityKind = EntityKind::TrainerMemberLink;

/// Trainer-member link service
pub struct TrainerLinkService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TrainerLinkService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        caller: Caller,
        opts: ListOptions,
    ) -> ServiceResult<PaginatedResponse<TrainerLinkResponse>> {
        let scope = Access::new(self.ctx, caller).read_scope(KIND, opts.include_inactive);
        let links = self.ctx.link_repo().list(&scope, opts.query()).await?;
        Ok(opts.page(links, |l| l.id))
    }

    #[instrument(skip(self))]
    pub async fn get(
        &self,
        caller: Caller,
        id: Snowflake,
        include_inactive: bool,
    ) -> ServiceResult<TrainerLinkResponse> {
        let scope = Access::new(self.ctx, caller).read_scope(KIND, include_inactive);
        let link = self
            .ctx
            .link_repo()
            .find(id, &scope)
            .await?
            .ok_or_else(|| missing(KIND, id))?;
        Ok(TrainerLinkResponse::from(link))
    }

    /// Assign a member to a trainer; the trainer defaults to the caller
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        caller: Caller,
        request: CreateTrainerLinkRequest,
    ) -> ServiceResult<TrainerLinkResponse> {
        let trainer_id = request.trainer_id.unwrap_or(caller.id);
        let access = Access::new(self.ctx, caller);
        access
            .admit_new(KIND, &RowOwner::new(trainer_id, request.member_id), true)
            .await?;

        let mut link = TrainerMemberLink::new(self.ctx.generate_id(), trainer_id, request.member_id);
        link.notes = request.notes;

        self.ctx.link_repo().create(&link).await?;

        info!(
            link_id = %link.id,
            trainer_id = %trainer_id,
            member_id = %link.member_id,
            "Member assigned to trainer"
        );
        Ok(TrainerLinkResponse::from(link))
    }

    /// Edit notes or pause the assignment
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        caller: Caller,
        id: Snowflake,
        request: UpdateTrainerLinkRequest,
    ) -> ServiceResult<TrainerLinkResponse> {
        let scope = Access::new(self.ctx, caller).write_scope(Action::Update, KIND)?;
        let mut link = self
            .ctx
            .link_repo()
            .find(id, &scope)
            .await?
            .ok_or_else(|| missing(KIND, id))?;

        if request.notes.is_some() {
            link.notes = request.notes;
        }
        if let Some(is_active) = request.is_active {
            link.is_active = is_active;
        }

        self.ctx.link_repo().update(&link).await?;

        info!(link_id = %id, is_active = link.is_active, "Assignment updated");
        Ok(TrainerLinkResponse::from(link))
    }

    /// Soft delete; the link stops counting towards the trainer's members
    #[instrument(skip(self))]
    pub async fn delete(&self, caller: Caller, id: Snowflake) -> ServiceResult<()> {
        let scope = Access::new(self.ctx, caller).write_scope(Action::Delete, KIND)?;
        self.ctx
            .link_repo()
            .find(id, &scope)
            .await?
            .ok_or_else(|| missing(KIND, id))?;

        self.ctx.link_repo().delete(id).await?;

        info!(link_id = %id, "Assignment removed");
        Ok(())
    }

    /// Undelete and reactivate
    #[instrument(skip(self))]
    pub async fn restore(
        &self,
        caller: Caller,
        id: Snowflake,
    ) -> ServiceResult<TrainerLinkResponse> {
        let scope = Access::new(self.ctx, caller).restore_scope(KIND)?;
        let mut link = self
            .ctx
            .link_repo()
            .find(id, &scope)
            .await?
            .ok_or_else(|| missing(KIND, id))?;

        let state = if link.is_deleted {
            LifecycleState::Deleted
        } else {
            LifecycleState::Present
        };
        after_restore(KIND, id, state)?;

        self.ctx.link_repo().restore(id).await?;
        link.is_deleted = false;
        link.is_active = true;

        info!(link_id = %id, "Assignment restored");
        Ok(TrainerLinkResponse::from(link))
    }
}
