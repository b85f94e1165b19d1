//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use anyhow::Result;
use integration_tests::{
    assert_error, assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

async fn create_user(server: &TestServer, token: &str, user: &NewUser) -> Result<UserView> {
    let response = server.post_auth("/api/v1/users", token, user).await?;
    assert_json(response, StatusCode::CREATED).await
}

/// A user of `role` created by the super-admin, with a token of its own
async fn seeded(server: &TestServer, user: NewUser) -> Result<(UserView, String)> {
    let view = create_user(server, &server.root_token, &user).await?;
    let token = server.token_for(&view.id)?;
    Ok((view, token))
}

async fn link(server: &TestServer, trainer_token: &str, member_id: &str) -> Result<LinkView> {
    let response = server
        .post_auth(
            "/api/v1/trainer-members",
            trainer_token,
            &json!({ "member_id": member_id }),
        )
        .await?;
    assert_json(response, StatusCode::CREATED).await
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() -> Result<()> {
    if !check_test_env().await {
        return Ok(());
    }

    let server = TestServer::start().await?;
    assert_status(server.get("/health").await?, StatusCode::OK).await?;
    assert_status(server.get("/health/ready").await?, StatusCode::OK).await
}

// ============================================================================
// Authentication
// ============================================================================

#[tokio::test]
async fn test_requests_without_token_are_rejected() -> Result<()> {
    if !check_test_env().await {
        return Ok(());
    }

    let server = TestServer::start().await?;
    let code = assert_error(server.get("/api/v1/users").await?, StatusCode::UNAUTHORIZED).await?;
    assert_eq!(code, "MISSING_AUTHORIZATION");
    Ok(())
}

#[tokio::test]
async fn test_token_of_deleted_user_is_rejected() -> Result<()> {
    if !check_test_env().await {
        return Ok(());
    }

    let server = TestServer::start().await?;
    let (member, token) = seeded(&server, NewUser::member()).await?;

    let response = server
        .delete_auth(&format!("/api/v1/users/{}", member.id), &server.root_token)
        .await?;
    assert_status(response, StatusCode::NO_CONTENT).await?;

    let response = server.get_auth("/api/v1/exercises", &token).await?;
    assert_status(response, StatusCode::UNAUTHORIZED).await
}

// ============================================================================
// Users
// ============================================================================

#[tokio::test]
async fn test_member_sees_only_themselves() -> Result<()> {
    if !check_test_env().await {
        return Ok(());
    }

    let server = TestServer::start().await?;
    let (member, token) = seeded(&server, NewUser::member()).await?;
    seeded(&server, NewUser::member()).await?;

    let response = server.get_auth("/api/v1/users", &token).await?;
    let page: Page<UserView> = assert_json(response, StatusCode::OK).await?;

    assert_eq!(page.ids(|u| &u.id), vec![member.id]);
    assert_eq!(page.data[0].role, "member");
    Ok(())
}

#[tokio::test]
async fn test_member_cannot_create_users() -> Result<()> {
    if !check_test_env().await {
        return Ok(());
    }

    let server = TestServer::start().await?;
    let (_, token) = seeded(&server, NewUser::member()).await?;

    let response = server
        .post_auth("/api/v1/users", &token, &NewUser::member())
        .await?;
    let code = assert_error(response, StatusCode::FORBIDDEN).await?;
    assert_eq!(code, "FORBIDDEN");
    Ok(())
}

#[tokio::test]
async fn test_unknown_role_is_a_bad_request() -> Result<()> {
    if !check_test_env().await {
        return Ok(());
    }

    let server = TestServer::start().await?;
    let response = server
        .post_auth("/api/v1/users", &server.root_token, &NewUser::with_role("coach"))
        .await?;
    let code = assert_error(response, StatusCode::BAD_REQUEST).await?;
    assert_eq!(code, "INVALID_BODY");
    Ok(())
}

#[tokio::test]
async fn test_only_super_admin_grants_super() -> Result<()> {
    if !check_test_env().await {
        return Ok(());
    }

    let server = TestServer::start().await?;
    let (_, admin_token) = seeded(&server, NewUser::admin()).await?;
    let (member, _) = seeded(&server, NewUser::member()).await?;
    let path = format!("/api/v1/users/{}", member.id);

    let response = server
        .patch_auth(&path, &admin_token, &json!({ "is_super": true }))
        .await?;
    assert_status(response, StatusCode::FORBIDDEN).await?;

    let response = server
        .patch_auth(&path, &server.root_token, &json!({ "is_super": true }))
        .await?;
    let updated: UserView = assert_json(response, StatusCode::OK).await?;
    assert!(updated.is_super);
    Ok(())
}

#[tokio::test]
async fn test_restore_user_and_second_restore_is_not_found() -> Result<()> {
    if !check_test_env().await {
        return Ok(());
    }

    let server = TestServer::start().await?;
    let (_, admin_token) = seeded(&server, NewUser::admin()).await?;
    let (member, _) = seeded(&server, NewUser::member()).await?;
    let path = format!("/api/v1/users/{}", member.id);

    assert_status(server.delete_auth(&path, &admin_token).await?, StatusCode::NO_CONTENT).await?;
    assert_status(server.get_auth(&path, &admin_token).await?, StatusCode::NOT_FOUND).await?;

    let response = server
        .get_auth("/api/v1/users/deleted?limit=100", &admin_token)
        .await?;
    let deleted: Page<UserView> = assert_json(response, StatusCode::OK).await?;
    assert!(deleted.data.iter().any(|u| u.id == member.id && u.is_deleted));

    let restore = format!("{path}/restore");
    let response = server.post_empty_auth(&restore, &admin_token).await?;
    let restored: UserView = assert_json(response, StatusCode::OK).await?;
    assert!(!restored.is_deleted);
    assert_eq!(restored.username, member.username);

    assert_status(server.get_auth(&path, &admin_token).await?, StatusCode::OK).await?;

    let response = server.post_empty_auth(&restore, &admin_token).await?;
    assert_status(response, StatusCode::NOT_FOUND).await
}

#[tokio::test]
async fn test_purge_is_super_only() -> Result<()> {
    if !check_test_env().await {
        return Ok(());
    }

    let server = TestServer::start().await?;
    let (_, admin_token) = seeded(&server, NewUser::admin()).await?;
    let (member, _) = seeded(&server, NewUser::member()).await?;
    let purge = format!("/api/v1/users/{}/permanent", member.id);

    assert_status(server.delete_auth(&purge, &admin_token).await?, StatusCode::FORBIDDEN).await?;
    assert_status(
        server.delete_auth(&purge, &server.root_token).await?,
        StatusCode::NO_CONTENT,
    )
    .await?;

    let response = server
        .get_auth(&format!("/api/v1/users/{}", member.id), &server.root_token)
        .await?;
    assert_status(response, StatusCode::NOT_FOUND).await
}

// ============================================================================
// Trainer links
// ============================================================================

#[tokio::test]
async fn test_link_requires_trainer_role() -> Result<()> {
    if !check_test_env().await {
        return Ok(());
    }

    let server = TestServer::start().await?;
    let (not_a_trainer, _) = seeded(&server, NewUser::member()).await?;
    let (member, _) = seeded(&server, NewUser::member()).await?;

    let response = server
        .post_auth(
            "/api/v1/trainer-members",
            &server.root_token,
            &json!({ "trainer_id": not_a_trainer.id, "member_id": member.id }),
        )
        .await?;
    assert_status(response, StatusCode::CONFLICT).await
}

#[tokio::test]
async fn test_trainer_sees_assigned_members() -> Result<()> {
    if !check_test_env().await {
        return Ok(());
    }

    let server = TestServer::start().await?;
    let (trainer, trainer_token) = seeded(&server, NewUser::trainer()).await?;
    let (assigned, _) = seeded(&server, NewUser::member()).await?;
    let (stranger, _) = seeded(&server, NewUser::member()).await?;

    let created = link(&server, &trainer_token, &assigned.id).await?;
    assert_eq!(created.trainer_id, trainer.id);
    assert!(created.is_active);

    let response = server
        .get_auth(&format!("/api/v1/users/{}", assigned.id), &trainer_token)
        .await?;
    assert_status(response, StatusCode::OK).await?;

    let response = server
        .get_auth(&format!("/api/v1/users/{}", stranger.id), &trainer_token)
        .await?;
    assert_status(response, StatusCode::NOT_FOUND).await
}

// ============================================================================
// Memberships
// ============================================================================

#[tokio::test]
async fn test_second_active_membership_conflicts() -> Result<()> {
    if !check_test_env().await {
        return Ok(());
    }

    let server = TestServer::start().await?;
    let (member, _) = seeded(&server, NewUser::member()).await?;
    let body = NewMembership::monthly(&member.id);

    let response = server
        .post_auth("/api/v1/memberships", &server.root_token, &body)
        .await?;
    let first: MembershipView = assert_json(response, StatusCode::CREATED).await?;
    assert!(first.is_active);
    assert_eq!(first.member_id, member.id);

    let response = server
        .post_auth("/api/v1/memberships", &server.root_token, &body)
        .await?;
    assert_status(response, StatusCode::CONFLICT).await?;

    // Deactivating the first frees the slot
    let response = server
        .patch_auth(
            &format!("/api/v1/memberships/{}", first.id),
            &server.root_token,
            &json!({ "is_active": false }),
        )
        .await?;
    assert_status(response, StatusCode::OK).await?;

    let response = server
        .post_auth("/api/v1/memberships", &server.root_token, &body)
        .await?;
    assert_status(response, StatusCode::CREATED).await
}

#[tokio::test]
async fn test_membership_dates_are_validated() -> Result<()> {
    if !check_test_env().await {
        return Ok(());
    }

    let server = TestServer::start().await?;
    let (member, _) = seeded(&server, NewUser::member()).await?;
    let mut body = NewMembership::monthly(&member.id);
    body.end_date = body.start_date;

    let response = server
        .post_auth("/api/v1/memberships", &server.root_token, &body)
        .await?;
    let code = assert_error(response, StatusCode::BAD_REQUEST).await?;
    assert_eq!(code, "VALIDATION_ERROR");
    Ok(())
}

// ============================================================================
// Workout plans
// ============================================================================

#[tokio::test]
async fn test_member_cannot_create_workout_plan() -> Result<()> {
    if !check_test_env().await {
        return Ok(());
    }

    let server = TestServer::start().await?;
    let (member, token) = seeded(&server, NewUser::member()).await?;

    let response = server
        .post_auth(
            "/api/v1/workout-plans",
            &token,
            &NewWorkoutPlan::for_member(&member.id),
        )
        .await?;
    assert_status(response, StatusCode::FORBIDDEN).await
}

#[tokio::test]
async fn test_workout_plan_visibility() -> Result<()> {
    if !check_test_env().await {
        return Ok(());
    }

    let server = TestServer::start().await?;
    let (trainer, trainer_token) = seeded(&server, NewUser::trainer()).await?;
    let (member, member_token) = seeded(&server, NewUser::member()).await?;
    let (_, other_token) = seeded(&server, NewUser::member()).await?;
    link(&server, &trainer_token, &member.id).await?;

    let response = server
        .post_auth(
            "/api/v1/workout-plans",
            &trainer_token,
            &NewWorkoutPlan::for_member(&member.id),
        )
        .await?;
    let plan: PlanView = assert_json(response, StatusCode::CREATED).await?;
    assert_eq!(plan.trainer_id, trainer.id);
    assert_eq!(plan.goal, "general_fitness");

    let path = format!("/api/v1/workout-plans/{}", plan.id);
    assert_status(server.get_auth(&path, &member_token).await?, StatusCode::OK).await?;
    assert_status(server.get_auth(&path, &other_token).await?, StatusCode::NOT_FOUND).await
}

#[tokio::test]
async fn test_deleted_plan_hidden_except_full_view() -> Result<()> {
    if !check_test_env().await {
        return Ok(());
    }

    let server = TestServer::start().await?;
    let (_, admin_token) = seeded(&server, NewUser::admin()).await?;
    let (_, trainer_token) = seeded(&server, NewUser::trainer()).await?;
    let (member, member_token) = seeded(&server, NewUser::member()).await?;

    let response = server
        .post_auth(
            "/api/v1/workout-plans",
            &trainer_token,
            &NewWorkoutPlan::for_member(&member.id),
        )
        .await?;
    let plan: PlanView = assert_json(response, StatusCode::CREATED).await?;
    let path = format!("/api/v1/workout-plans/{}", plan.id);

    assert_status(server.delete_auth(&path, &trainer_token).await?, StatusCode::NO_CONTENT).await?;

    for token in [&trainer_token, &member_token, &admin_token] {
        assert_status(server.get_auth(&path, token).await?, StatusCode::NOT_FOUND).await?;
    }

    let full_view = format!("{path}?include_inactive=true");
    assert_status(server.get_auth(&full_view, &admin_token).await?, StatusCode::OK).await?;
    assert_status(server.get_auth(&path, &server.root_token).await?, StatusCode::OK).await?;

    // Members cannot opt into the full view
    assert_status(
        server.get_auth(&full_view, &member_token).await?,
        StatusCode::NOT_FOUND,
    )
    .await
}

#[tokio::test]
async fn test_workout_plan_validation() -> Result<()> {
    if !check_test_env().await {
        return Ok(());
    }

    let server = TestServer::start().await?;
    let (_, trainer_token) = seeded(&server, NewUser::trainer()).await?;
    let (member, _) = seeded(&server, NewUser::member()).await?;

    let mut plan = NewWorkoutPlan::for_member(&member.id);
    plan.duration_weeks = 0;
    plan.name = "ab".to_string();

    let response = server
        .post_auth("/api/v1/workout-plans", &trainer_token, &plan)
        .await?;
    let body: serde_json::Value = assert_json(response, StatusCode::BAD_REQUEST).await?;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["error"]["details"]["duration_weeks"].is_array());
    assert!(body["error"]["details"]["name"].is_array());
    Ok(())
}

#[tokio::test]
async fn test_plan_exercises_filtered_by_plan() -> Result<()> {
    if !check_test_env().await {
        return Ok(());
    }

    let server = TestServer::start().await?;
    let (_, trainer_token) = seeded(&server, NewUser::trainer()).await?;
    let (member, member_token) = seeded(&server, NewUser::member()).await?;

    let response = server
        .post_auth(
            "/api/v1/exercises",
            &trainer_token,
            &json!({ "name": format!("Squat {}", unique_suffix()), "category": "legs" }),
        )
        .await?;
    let exercise: IdView = assert_json(response, StatusCode::CREATED).await?;

    let mut plan_ids = Vec::new();
    for _ in 0..2 {
        let response = server
            .post_auth(
                "/api/v1/workout-plans",
                &trainer_token,
                &NewWorkoutPlan::for_member(&member.id),
            )
            .await?;
        let plan: PlanView = assert_json(response, StatusCode::CREATED).await?;
        plan_ids.push(plan.id);
    }

    for plan_id in &plan_ids {
        let response = server
            .post_auth(
                "/api/v1/workout-plan-exercises",
                &trainer_token,
                &json!({
                    "workout_plan_id": plan_id,
                    "exercise_id": exercise.id,
                    "sets": 3,
                    "reps": 10,
                    "order": 0
                }),
            )
            .await?;
        assert_status(response, StatusCode::CREATED).await?;
    }

    let response = server
        .get_auth(
            &format!("/api/v1/workout-plan-exercises?workout_plan_id={}", plan_ids[0]),
            &member_token,
        )
        .await?;
    let page: Page<IdView> = assert_json(response, StatusCode::OK).await?;
    assert_eq!(page.data.len(), 1);

    let response = server
        .get_auth("/api/v1/workout-plan-exercises?workout_plan_id=abc", &member_token)
        .await?;
    assert_status(response, StatusCode::BAD_REQUEST).await
}

#[tokio::test]
async fn test_other_trainers_plan_reads_as_unknown() -> Result<()> {
    if !check_test_env().await {
        return Ok(());
    }

    let server = TestServer::start().await?;
    let (_, owner_token) = seeded(&server, NewUser::trainer()).await?;
    let (_, rival_token) = seeded(&server, NewUser::trainer()).await?;
    let (member, _) = seeded(&server, NewUser::member()).await?;

    let response = server
        .post_auth(
            "/api/v1/exercises",
            &owner_token,
            &json!({ "name": format!("Lunge {}", unique_suffix()), "category": "legs" }),
        )
        .await?;
    let exercise: IdView = assert_json(response, StatusCode::CREATED).await?;

    let response = server
        .post_auth(
            "/api/v1/workout-plans",
            &owner_token,
            &NewWorkoutPlan::for_member(&member.id),
        )
        .await?;
    let plan: PlanView = assert_json(response, StatusCode::CREATED).await?;

    let entry = |plan_id: &str| {
        json!({
            "workout_plan_id": plan_id,
            "exercise_id": exercise.id,
            "sets": 3,
            "reps": 8,
            "order": 0
        })
    };

    let response = server
        .post_auth("/api/v1/workout-plan-exercises", &rival_token, &entry(&plan.id))
        .await?;
    let hidden = assert_error(response, StatusCode::BAD_REQUEST).await?;

    let response = server
        .post_auth("/api/v1/workout-plan-exercises", &rival_token, &entry("1"))
        .await?;
    let absent = assert_error(response, StatusCode::BAD_REQUEST).await?;
    assert_eq!(hidden, absent);

    let response = server
        .post_auth("/api/v1/workout-plan-exercises", &owner_token, &entry(&plan.id))
        .await?;
    assert_status(response, StatusCode::CREATED).await
}

// ============================================================================
// Activity records
// ============================================================================

#[tokio::test]
async fn test_member_logs_own_workout_only() -> Result<()> {
    if !check_test_env().await {
        return Ok(());
    }

    let server = TestServer::start().await?;
    let (member, token) = seeded(&server, NewUser::member()).await?;
    let (other, _) = seeded(&server, NewUser::member()).await?;

    let response = server
        .post_auth(
            "/api/v1/exercises",
            &server.root_token,
            &json!({ "name": format!("Rowing {}", unique_suffix()), "category": "cardio" }),
        )
        .await?;
    let exercise: IdView = assert_json(response, StatusCode::CREATED).await?;

    let response = server
        .post_auth(
            "/api/v1/workout-logs",
            &token,
            &json!({ "exercise_id": exercise.id, "sets_completed": 3, "reps_completed": 12 }),
        )
        .await?;
    let log: serde_json::Value = assert_json(response, StatusCode::CREATED).await?;
    assert_eq!(log["member_id"], member.id);

    let response = server
        .post_auth(
            "/api/v1/workout-logs",
            &token,
            &json!({
                "member_id": other.id,
                "exercise_id": exercise.id,
                "sets_completed": 3,
                "reps_completed": 12
            }),
        )
        .await?;
    assert_status(response, StatusCode::FORBIDDEN).await
}

#[tokio::test]
async fn test_member_cannot_log_against_another_members_plan() -> Result<()> {
    if !check_test_env().await {
        return Ok(());
    }

    let server = TestServer::start().await?;
    let (_, trainer_token) = seeded(&server, NewUser::trainer()).await?;
    let (owner, owner_token) = seeded(&server, NewUser::member()).await?;
    let (_, intruder_token) = seeded(&server, NewUser::member()).await?;

    let response = server
        .post_auth(
            "/api/v1/exercises",
            &trainer_token,
            &json!({ "name": format!("Deadlift {}", unique_suffix()), "category": "back" }),
        )
        .await?;
    let exercise: IdView = assert_json(response, StatusCode::CREATED).await?;

    let response = server
        .post_auth(
            "/api/v1/workout-plans",
            &trainer_token,
            &NewWorkoutPlan::for_member(&owner.id),
        )
        .await?;
    let plan: PlanView = assert_json(response, StatusCode::CREATED).await?;

    let log = |plan_id: &str| {
        json!({
            "workout_plan_id": plan_id,
            "exercise_id": exercise.id,
            "sets_completed": 5,
            "reps_completed": 5
        })
    };

    let response = server
        .post_auth("/api/v1/workout-logs", &intruder_token, &log(&plan.id))
        .await?;
    let hidden = assert_error(response, StatusCode::BAD_REQUEST).await?;

    let response = server
        .post_auth("/api/v1/workout-logs", &intruder_token, &log("1"))
        .await?;
    let absent = assert_error(response, StatusCode::BAD_REQUEST).await?;
    assert_eq!(hidden, absent);

    let response = server
        .post_auth(
            "/api/v1/workout-sessions",
            &intruder_token,
            &json!({ "workout_plan_id": plan.id, "start_time": "2026-01-01T10:00:00Z" }),
        )
        .await?;
    assert_status(response, StatusCode::BAD_REQUEST).await?;

    let response = server
        .post_auth("/api/v1/workout-logs", &owner_token, &log(&plan.id))
        .await?;
    assert_status(response, StatusCode::CREATED).await
}

#[tokio::test]
async fn test_session_must_end_after_it_starts() -> Result<()> {
    if !check_test_env().await {
        return Ok(());
    }

    let server = TestServer::start().await?;
    let (_, trainer_token) = seeded(&server, NewUser::trainer()).await?;
    let (member, token) = seeded(&server, NewUser::member()).await?;

    let response = server
        .post_auth(
            "/api/v1/workout-plans",
            &trainer_token,
            &NewWorkoutPlan::for_member(&member.id),
        )
        .await?;
    let plan: PlanView = assert_json(response, StatusCode::CREATED).await?;

    let response = server
        .post_auth(
            "/api/v1/workout-sessions",
            &token,
            &json!({
                "workout_plan_id": plan.id,
                "start_time": "2026-01-01T10:00:00Z",
                "end_time": "2026-01-01T09:00:00Z"
            }),
        )
        .await?;
    let code = assert_error(response, StatusCode::BAD_REQUEST).await?;
    assert_eq!(code, "VALIDATION_ERROR");

    let response = server
        .post_auth(
            "/api/v1/workout-sessions",
            &token,
            &json!({
                "workout_plan_id": plan.id,
                "start_time": "2026-01-01T10:00:00Z",
                "end_time": "2026-01-01T11:15:00Z",
                "rating": 4
            }),
        )
        .await?;
    let session: serde_json::Value = assert_json(response, StatusCode::CREATED).await?;
    assert_eq!(session["duration_minutes"], 75);
    Ok(())
}

// ============================================================================
// Pagination
// ============================================================================

#[tokio::test]
async fn test_cursor_pagination() -> Result<()> {
    if !check_test_env().await {
        return Ok(());
    }

    let server = TestServer::start().await?;
    let (_, trainer_token) = seeded(&server, NewUser::trainer()).await?;
    let (member, _) = seeded(&server, NewUser::member()).await?;

    for _ in 0..3 {
        let response = server
            .post_auth(
                "/api/v1/workout-plans",
                &trainer_token,
                &NewWorkoutPlan::for_member(&member.id),
            )
            .await?;
        assert_status(response, StatusCode::CREATED).await?;
    }

    let response = server
        .get_auth("/api/v1/workout-plans?limit=2", &trainer_token)
        .await?;
    let first: Page<PlanView> = assert_json(response, StatusCode::OK).await?;
    assert_eq!(first.data.len(), 2);
    assert!(first.pagination.has_more);
    assert_eq!(first.pagination.limit, 2);

    let after = first.pagination.after.clone().unwrap_or_default();
    let response = server
        .get_auth(&format!("/api/v1/workout-plans?limit=2&after={after}"), &trainer_token)
        .await?;
    let second: Page<PlanView> = assert_json(response, StatusCode::OK).await?;
    assert_eq!(second.data.len(), 1);
    assert!(!second.pagination.has_more);

    let mut seen = first.ids(|p| &p.id);
    seen.extend(second.ids(|p| &p.id));
    seen.dedup();
    assert_eq!(seen.len(), 3);
    Ok(())
}

// ============================================================================
// BMI recommendations
// ============================================================================

#[tokio::test]
async fn test_bmi_recommendations_from_query() -> Result<()> {
    if !check_test_env().await {
        return Ok(());
    }

    let server = TestServer::start().await?;
    let (_, trainer_token) = seeded(&server, NewUser::trainer()).await?;
    let (member, member_token) = seeded(&server, NewUser::member()).await?;

    let response = server
        .post_auth(
            "/api/v1/workout-plans",
            &trainer_token,
            &NewWorkoutPlan::for_member(&member.id),
        )
        .await?;
    let plan: PlanView = assert_json(response, StatusCode::CREATED).await?;

    let response = server
        .get_auth("/api/v1/bmi/recommendations?weight=70&height=175", &member_token)
        .await?;
    let rec: RecommendationView = assert_json(response, StatusCode::OK).await?;

    assert!((rec.bmi - 22.86).abs() < 1e-9);
    assert_eq!(rec.category, "Normal weight");
    assert!(rec.workout_plans.iter().all(|p| p.member_id == member.id));
    assert!(rec.workout_plans.iter().any(|p| p.id == plan.id));
    Ok(())
}

#[tokio::test]
async fn test_bmi_falls_back_to_profile() -> Result<()> {
    if !check_test_env().await {
        return Ok(());
    }

    let server = TestServer::start().await?;
    let (_, with_profile) = seeded(&server, NewUser::member().with_metrics(120.0, 170.0)).await?;
    let (_, without_profile) = seeded(&server, NewUser::member()).await?;

    let response = server
        .get_auth("/api/v1/bmi/recommendations", &with_profile)
        .await?;
    let rec: RecommendationView = assert_json(response, StatusCode::OK).await?;
    assert_eq!(rec.category, "Obese");

    let response = server
        .get_auth("/api/v1/bmi/recommendations", &without_profile)
        .await?;
    assert_status(response, StatusCode::BAD_REQUEST).await
}
