//! Membership service
//!
//! The repository enforces one active membership per member; this layer
//! handles scoping and date order.

use chrono::{NaiveDate, Utc};
use gym_core::entities::Membership;
use gym_core::policy::{Action, EntityKind, RowOwner};
use gym_core::{Caller, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    CreateMembershipRequest, MembershipResponse, PaginatedResponse, UpdateMembershipRequest,
};

use super::access::{missing, Access, ListOptions};
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

const KIND: EntityKind = EntityKind::Membership;

pub struct MembershipService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MembershipService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        caller: Caller,
        opts: ListOptions,
    ) -> ServiceResult<PaginatedResponse<MembershipResponse>> {
        let scope = Access::new(self.ctx, caller).read_scope(KIND, opts.include_inactive);
        let memberships = self.ctx.membership_repo().list(&scope, opts.query()).await?;
        Ok(opts.page(memberships, |m| m.id))
    }

    #[instrument(skip(self))]
    pub async fn get(
        &self,
        caller: Caller,
        id: Snowflake,
        include_inactive: bool,
    ) -> ServiceResult<MembershipResponse> {
        let scope = Access::new(self.ctx, caller).read_scope(KIND, include_inactive);
        let membership = self
            .ctx
            .membership_repo()
            .find(id, &scope)
            .await?
            .ok_or_else(|| missing(KIND, id))?;
        Ok(MembershipResponse::from(membership))
    }

    #[instrument(skip(self, request), fields(member_id = %request.member_id))]
    pub async fn create(
        &self,
        caller: Caller,
        request: CreateMembershipRequest,
    ) -> ServiceResult<MembershipResponse> {
        Access::new(self.ctx, caller)
            .admit_new(KIND, &RowOwner::member(request.member_id), true)
            .await?;

        let membership = Membership {
            id: self.ctx.generate_id(),
            member_id: request.member_id,
            plan_type: request.plan_type,
            start_date: request.start_date,
            end_date: request.end_date,
            is_active: request.is_active,
            created_at: Utc::now(),
        };

        self.ctx.membership_repo().create(&membership).await?;

        info!(
            membership_id = %membership.id,
            plan_type = %membership.plan_type,
            "Membership created"
        );
        Ok(MembershipResponse::from(membership))
    }

    /// Partial update; re-activating runs the single-active check again
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        caller: Caller,
        id: Snowflake,
        request: UpdateMembershipRequest,
    ) -> ServiceResult<MembershipResponse> {
        let scope = Access::new(self.ctx, caller).write_scope(Action::Update, KIND)?;
        let mut membership = self
            .ctx
            .membership_repo()
            .find(id, &scope)
            .await?
            .ok_or_else(|| missing(KIND, id))?;

        if let Some(plan_type) = request.plan_type {
            membership.plan_type = plan_type;
        }
        if let Some(start_date) = request.start_date {
            membership.start_date = start_date;
        }
        if let Some(end_date) = request.end_date {
            membership.end_date = end_date;
        }
        if let Some(is_active) = request.is_active {
            membership.is_active = is_active;
        }
        check_date_order(membership.start_date, membership.end_date)?;

        self.ctx.membership_repo().update(&membership).await?;

        info!(membership_id = %id, is_active = membership.is_active, "Membership updated");
        Ok(MembershipResponse::from(membership))
    }

    /// Deactivate
    #[instrument(skip(self))]
    pub async fn delete(&self, caller: Caller, id: Snowflake) -> ServiceResult<()> {
        let scope = Access::new(self.ctx, caller).write_scope(Action::Delete, KIND)?;
        self.ctx
            .membership_repo()
            .find(id, &scope)
            .await?
            .ok_or_else(|| missing(KIND, id))?;

        self.ctx.membership_repo().delete(id).await?;

        info!(membership_id = %id, "Membership deactivated");
        Ok(())
    }
}

fn check_date_order(start: NaiveDate, end: NaiveDate) -> ServiceResult<()> {
    if end > start {
        Ok(())
    } else {
        Err(ServiceError::validation("end_date must be after start_date"))
    }
}
