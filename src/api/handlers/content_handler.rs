//! Content editing handlers, one route group per content family.
//!
//! All routes operate on the scoped portfolio; ids in the path are
//! content ids, never portfolio ids. The service layer resolves
//! ownership through parent rows and runs the guard.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post, put},
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::AppState;
use crate::domain::content::{
    AboutContent, ArchitectureContent, CreateAbout, CreateArchitecture, CreateExperience,
    CreatePillar, CreatePillarPoint, CreatePrinciple, CreateProject, CreateSkill,
    CreateSkillGroup, Experience, HeroContent, PersonInfo, Pillar, PillarPoint, Principle,
    Project, Skill, SkillGroup, UpdateAbout, UpdateArchitecture, UpdateExperience, UpdateHero,
    UpdatePersonInfo, UpdatePillar, UpdatePillarPoint, UpdatePrinciple, UpdateProject,
    UpdateSkill, UpdateSkillGroup,
};
use crate::domain::RequestContext;
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

#[derive(Debug, Deserialize, ToSchema)]
pub struct VisibilityRequest {
    pub visible: bool,
}

pub fn content_routes() -> Router<AppState> {
    Router::new()
        .route("/skill-groups", get(list_skill_groups).post(create_skill_group))
        .route(
            "/skill-groups/:id",
            put(update_skill_group).delete(delete_skill_group),
        )
        .route("/skill-groups/:id/visibility", put(set_skill_group_visibility))
        .route("/skill-groups/:id/skills", get(list_skills))
        .route("/skills", post(create_skill))
        .route("/skills/:id", put(update_skill).delete(delete_skill))
        .route("/skills/:id/visibility", put(set_skill_visibility))
        .route("/projects", get(list_projects).post(create_project))
        .route("/projects/:id", put(update_project).delete(delete_project))
        .route("/projects/:id/visibility", put(set_project_visibility))
        .route("/experiences", get(list_experiences).post(create_experience))
        .route(
            "/experiences/:id",
            put(update_experience).delete(delete_experience),
        )
        .route("/experiences/:id/visibility", put(set_experience_visibility))
        .route("/about", get(list_about).post(create_about))
        .route("/about/:id", put(update_about).delete(delete_about))
        .route("/about/:id/visibility", put(set_about_visibility))
        .route("/about/:id/principles", get(list_principles))
        .route("/principles", post(create_principle))
        .route("/principles/:id", put(update_principle).delete(delete_principle))
        .route("/principles/:id/visibility", put(set_principle_visibility))
        .route("/architecture", get(list_architecture).post(create_architecture))
        .route(
            "/architecture/:id",
            put(update_architecture).delete(delete_architecture),
        )
        .route("/architecture/:id/visibility", put(set_architecture_visibility))
        .route("/architecture/:id/pillars", get(list_pillars))
        .route("/pillars", post(create_pillar))
        .route("/pillars/:id", put(update_pillar).delete(delete_pillar))
        .route("/pillars/:id/visibility", put(set_pillar_visibility))
        .route("/pillars/:id/points", get(list_pillar_points))
        .route("/pillar-points", post(create_pillar_point))
        .route(
            "/pillar-points/:id",
            put(update_pillar_point).delete(delete_pillar_point),
        )
        .route("/pillar-points/:id/visibility", put(set_pillar_point_visibility))
        .route("/person-info", get(get_person_info).put(save_person_info))
        .route("/hero", get(get_hero).put(save_hero))
}

// Skills

#[utoipa::path(get, path = "/admin/content/skill-groups", tag = "Content",
    security(("bearer_auth" = [])),
    responses((status = 200, body = Vec<SkillGroup>)))]
pub async fn list_skill_groups(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> AppResult<Json<Vec<SkillGroup>>> {
    Ok(Json(state.services.content().list_skill_groups(&ctx).await?))
}

#[utoipa::path(post, path = "/admin/content/skill-groups", tag = "Content",
    security(("bearer_auth" = [])), request_body = CreateSkillGroup,
    responses((status = 201, body = SkillGroup)))]
pub async fn create_skill_group(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Json(payload): Json<CreateSkillGroup>,
) -> AppResult<Created<SkillGroup>> {
    Ok(Created(
        state.services.content().create_skill_group(&ctx, payload).await?,
    ))
}

#[utoipa::path(put, path = "/admin/content/skill-groups/{id}", tag = "Content",
    security(("bearer_auth" = [])), request_body = UpdateSkillGroup,
    params(("id" = Uuid, Path, description = "Content item id")), responses((status = 200, body = SkillGroup)))]
pub async fn update_skill_group(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateSkillGroup>,
) -> AppResult<Json<SkillGroup>> {
    Ok(Json(
        state
            .services
            .content()
            .update_skill_group(&ctx, id, payload)
            .await?,
    ))
}

#[utoipa::path(put, path = "/admin/content/skill-groups/{id}/visibility", tag = "Content",
    security(("bearer_auth" = [])), request_body = VisibilityRequest,
    params(("id" = Uuid, Path, description = "Content item id")), responses((status = 200, body = SkillGroup)))]
pub async fn set_skill_group_visibility(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<VisibilityRequest>,
) -> AppResult<Json<SkillGroup>> {
    Ok(Json(
        state
            .services
            .content()
            .set_skill_group_visibility(&ctx, id, payload.visible)
            .await?,
    ))
}

#[utoipa::path(delete, path = "/admin/content/skill-groups/{id}", tag = "Content",
    security(("bearer_auth" = [])), params(("id" = Uuid, Path, description = "Content item id")),
    responses((status = 204)))]
pub async fn delete_skill_group(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    state.services.content().delete_skill_group(&ctx, id).await?;
    Ok(NoContent)
}

#[utoipa::path(get, path = "/admin/content/skill-groups/{id}/skills", tag = "Content",
    security(("bearer_auth" = [])), params(("id" = Uuid, Path, description = "Content item id")),
    responses((status = 200, body = Vec<Skill>)))]
pub async fn list_skills(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<Skill>>> {
    Ok(Json(state.services.content().list_skills(&ctx, id).await?))
}

#[utoipa::path(post, path = "/admin/content/skills", tag = "Content",
    security(("bearer_auth" = [])), request_body = CreateSkill,
    responses((status = 201, body = Skill)))]
pub async fn create_skill(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Json(payload): Json<CreateSkill>,
) -> AppResult<Created<Skill>> {
    Ok(Created(
        state.services.content().create_skill(&ctx, payload).await?,
    ))
}

#[utoipa::path(put, path = "/admin/content/skills/{id}", tag = "Content",
    security(("bearer_auth" = [])), request_body = UpdateSkill,
    params(("id" = Uuid, Path, description = "Content item id")), responses((status = 200, body = Skill)))]
pub async fn update_skill(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateSkill>,
) -> AppResult<Json<Skill>> {
    Ok(Json(
        state.services.content().update_skill(&ctx, id, payload).await?,
    ))
}

#[utoipa::path(put, path = "/admin/content/skills/{id}/visibility", tag = "Content",
    security(("bearer_auth" = [])), request_body = VisibilityRequest,
    params(("id" = Uuid, Path, description = "Content item id")), responses((status = 200, body = Skill)))]
pub async fn set_skill_visibility(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<VisibilityRequest>,
) -> AppResult<Json<Skill>> {
    Ok(Json(
        state
            .services
            .content()
            .set_skill_visibility(&ctx, id, payload.visible)
            .await?,
    ))
}

#[utoipa::path(delete, path = "/admin/content/skills/{id}", tag = "Content",
    security(("bearer_auth" = [])), params(("id" = Uuid, Path, description = "Content item id")),
    responses((status = 204)))]
pub async fn delete_skill(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    state.services.content().delete_skill(&ctx, id).await?;
    Ok(NoContent)
}

// Projects

#[utoipa::path(get, path = "/admin/content/projects", tag = "Content",
    security(("bearer_auth" = [])), responses((status = 200, body = Vec<Project>)))]
pub async fn list_projects(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> AppResult<Json<Vec<Project>>> {
    Ok(Json(state.services.content().list_projects(&ctx).await?))
}

#[utoipa::path(post, path = "/admin/content/projects", tag = "Content",
    security(("bearer_auth" = [])), request_body = CreateProject,
    responses((status = 201, body = Project)))]
pub async fn create_project(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Json(payload): Json<CreateProject>,
) -> AppResult<Created<Project>> {
    Ok(Created(
        state.services.content().create_project(&ctx, payload).await?,
    ))
}

#[utoipa::path(put, path = "/admin/content/projects/{id}", tag = "Content",
    security(("bearer_auth" = [])), request_body = UpdateProject,
    params(("id" = Uuid, Path, description = "Content item id")), responses((status = 200, body = Project)))]
pub async fn update_project(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    Ok(Json(
        state.services.content().update_project(&ctx, id, payload).await?,
    ))
}

#[utoipa::path(put, path = "/admin/content/projects/{id}/visibility", tag = "Content",
    security(("bearer_auth" = [])), request_body = VisibilityRequest,
    params(("id" = Uuid, Path, description = "Content item id")), responses((status = 200, body = Project)))]
pub async fn set_project_visibility(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<VisibilityRequest>,
) -> AppResult<Json<Project>> {
    Ok(Json(
        state
            .services
            .content()
            .set_project_visibility(&ctx, id, payload.visible)
            .await?,
    ))
}

#[utoipa::path(delete, path = "/admin/content/projects/{id}", tag = "Content",
    security(("bearer_auth" = [])), params(("id" = Uuid, Path, description = "Content item id")),
    responses((status = 204)))]
pub async fn delete_project(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    state.services.content().delete_project(&ctx, id).await?;
    Ok(NoContent)
}

// Experience

#[utoipa::path(get, path = "/admin/content/experiences", tag = "Content",
    security(("bearer_auth" = [])), responses((status = 200, body = Vec<Experience>)))]
pub async fn list_experiences(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> AppResult<Json<Vec<Experience>>> {
    Ok(Json(state.services.content().list_experiences(&ctx).await?))
}

#[utoipa::path(post, path = "/admin/content/experiences", tag = "Content",
    security(("bearer_auth" = [])), request_body = CreateExperience,
    responses((status = 201, body = Experience)))]
pub async fn create_experience(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Json(payload): Json<CreateExperience>,
) -> AppResult<Created<Experience>> {
    Ok(Created(
        state
            .services
            .content()
            .create_experience(&ctx, payload)
            .await?,
    ))
}

#[utoipa::path(put, path = "/admin/content/experiences/{id}", tag = "Content",
    security(("bearer_auth" = [])), request_body = UpdateExperience,
    params(("id" = Uuid, Path, description = "Content item id")), responses((status = 200, body = Experience)))]
pub async fn update_experience(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateExperience>,
) -> AppResult<Json<Experience>> {
    Ok(Json(
        state
            .services
            .content()
            .update_experience(&ctx, id, payload)
            .await?,
    ))
}

#[utoipa::path(put, path = "/admin/content/experiences/{id}/visibility", tag = "Content",
    security(("bearer_auth" = [])), request_body = VisibilityRequest,
    params(("id" = Uuid, Path, description = "Content item id")), responses((status = 200, body = Experience)))]
pub async fn set_experience_visibility(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<VisibilityRequest>,
) -> AppResult<Json<Experience>> {
    Ok(Json(
        state
            .services
            .content()
            .set_experience_visibility(&ctx, id, payload.visible)
            .await?,
    ))
}

#[utoipa::path(delete, path = "/admin/content/experiences/{id}", tag = "Content",
    security(("bearer_auth" = [])), params(("id" = Uuid, Path, description = "Content item id")),
    responses((status = 204)))]
pub async fn delete_experience(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    state.services.content().delete_experience(&ctx, id).await?;
    Ok(NoContent)
}

// About

#[utoipa::path(get, path = "/admin/content/about", tag = "Content",
    security(("bearer_auth" = [])), responses((status = 200, body = Vec<AboutContent>)))]
pub async fn list_about(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> AppResult<Json<Vec<AboutContent>>> {
    Ok(Json(state.services.content().list_about_contents(&ctx).await?))
}

#[utoipa::path(post, path = "/admin/content/about", tag = "Content",
    security(("bearer_auth" = [])), request_body = CreateAbout,
    responses((status = 201, body = AboutContent)))]
pub async fn create_about(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Json(payload): Json<CreateAbout>,
) -> AppResult<Created<AboutContent>> {
    Ok(Created(
        state.services.content().create_about(&ctx, payload).await?,
    ))
}

#[utoipa::path(put, path = "/admin/content/about/{id}", tag = "Content",
    security(("bearer_auth" = [])), request_body = UpdateAbout,
    params(("id" = Uuid, Path, description = "Content item id")), responses((status = 200, body = AboutContent)))]
pub async fn update_about(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAbout>,
) -> AppResult<Json<AboutContent>> {
    Ok(Json(
        state.services.content().update_about(&ctx, id, payload).await?,
    ))
}

#[utoipa::path(put, path = "/admin/content/about/{id}/visibility", tag = "Content",
    security(("bearer_auth" = [])), request_body = VisibilityRequest,
    params(("id" = Uuid, Path, description = "Content item id")), responses((status = 200, body = AboutContent)))]
pub async fn set_about_visibility(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<VisibilityRequest>,
) -> AppResult<Json<AboutContent>> {
    Ok(Json(
        state
            .services
            .content()
            .set_about_visibility(&ctx, id, payload.visible)
            .await?,
    ))
}

#[utoipa::path(delete, path = "/admin/content/about/{id}", tag = "Content",
    security(("bearer_auth" = [])), params(("id" = Uuid, Path, description = "Content item id")),
    responses((status = 204)))]
pub async fn delete_about(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    state.services.content().delete_about(&ctx, id).await?;
    Ok(NoContent)
}

#[utoipa::path(get, path = "/admin/content/about/{id}/principles", tag = "Content",
    security(("bearer_auth" = [])), params(("id" = Uuid, Path, description = "Content item id")),
    responses((status = 200, body = Vec<Principle>)))]
pub async fn list_principles(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<Principle>>> {
    Ok(Json(state.services.content().list_principles(&ctx, id).await?))
}

#[utoipa::path(post, path = "/admin/content/principles", tag = "Content",
    security(("bearer_auth" = [])), request_body = CreatePrinciple,
    responses((status = 201, body = Principle)))]
pub async fn create_principle(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Json(payload): Json<CreatePrinciple>,
) -> AppResult<Created<Principle>> {
    Ok(Created(
        state
            .services
            .content()
            .create_principle(&ctx, payload)
            .await?,
    ))
}

#[utoipa::path(put, path = "/admin/content/principles/{id}", tag = "Content",
    security(("bearer_auth" = [])), request_body = UpdatePrinciple,
    params(("id" = Uuid, Path, description = "Content item id")), responses((status = 200, body = Principle)))]
pub async fn update_principle(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePrinciple>,
) -> AppResult<Json<Principle>> {
    Ok(Json(
        state
            .services
            .content()
            .update_principle(&ctx, id, payload)
            .await?,
    ))
}

#[utoipa::path(put, path = "/admin/content/principles/{id}/visibility", tag = "Content",
    security(("bearer_auth" = [])), request_body = VisibilityRequest,
    params(("id" = Uuid, Path, description = "Content item id")), responses((status = 200, body = Principle)))]
pub async fn set_principle_visibility(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<VisibilityRequest>,
) -> AppResult<Json<Principle>> {
    Ok(Json(
        state
            .services
            .content()
            .set_principle_visibility(&ctx, id, payload.visible)
            .await?,
    ))
}

#[utoipa::path(delete, path = "/admin/content/principles/{id}", tag = "Content",
    security(("bearer_auth" = [])), params(("id" = Uuid, Path, description = "Content item id")),
    responses((status = 204)))]
pub async fn delete_principle(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    state.services.content().delete_principle(&ctx, id).await?;
    Ok(NoContent)
}

// Architecture

#[utoipa::path(get, path = "/admin/content/architecture", tag = "Content",
    security(("bearer_auth" = [])),
    responses((status = 200, body = Vec<ArchitectureContent>)))]
pub async fn list_architecture(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> AppResult<Json<Vec<ArchitectureContent>>> {
    Ok(Json(
        state.services.content().list_architecture_contents(&ctx).await?,
    ))
}

#[utoipa::path(post, path = "/admin/content/architecture", tag = "Content",
    security(("bearer_auth" = [])), request_body = CreateArchitecture,
    responses((status = 201, body = ArchitectureContent)))]
pub async fn create_architecture(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Json(payload): Json<CreateArchitecture>,
) -> AppResult<Created<ArchitectureContent>> {
    Ok(Created(
        state
            .services
            .content()
            .create_architecture(&ctx, payload)
            .await?,
    ))
}

#[utoipa::path(put, path = "/admin/content/architecture/{id}", tag = "Content",
    security(("bearer_auth" = [])), request_body = UpdateArchitecture,
    params(("id" = Uuid, Path, description = "Content item id")), responses((status = 200, body = ArchitectureContent)))]
pub async fn update_architecture(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateArchitecture>,
) -> AppResult<Json<ArchitectureContent>> {
    Ok(Json(
        state
            .services
            .content()
            .update_architecture(&ctx, id, payload)
            .await?,
    ))
}

#[utoipa::path(put, path = "/admin/content/architecture/{id}/visibility", tag = "Content",
    security(("bearer_auth" = [])), request_body = VisibilityRequest,
    params(("id" = Uuid, Path, description = "Content item id")), responses((status = 200, body = ArchitectureContent)))]
pub async fn set_architecture_visibility(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<VisibilityRequest>,
) -> AppResult<Json<ArchitectureContent>> {
    Ok(Json(
        state
            .services
            .content()
            .set_architecture_visibility(&ctx, id, payload.visible)
            .await?,
    ))
}

#[utoipa::path(delete, path = "/admin/content/architecture/{id}", tag = "Content",
    security(("bearer_auth" = [])), params(("id" = Uuid, Path, description = "Content item id")),
    responses((status = 204)))]
pub async fn delete_architecture(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    state.services.content().delete_architecture(&ctx, id).await?;
    Ok(NoContent)
}

#[utoipa::path(get, path = "/admin/content/architecture/{id}/pillars", tag = "Content",
    security(("bearer_auth" = [])), params(("id" = Uuid, Path, description = "Content item id")),
    responses((status = 200, body = Vec<Pillar>)))]
pub async fn list_pillars(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<Pillar>>> {
    Ok(Json(state.services.content().list_pillars(&ctx, id).await?))
}

#[utoipa::path(post, path = "/admin/content/pillars", tag = "Content",
    security(("bearer_auth" = [])), request_body = CreatePillar,
    responses((status = 201, body = Pillar)))]
pub async fn create_pillar(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Json(payload): Json<CreatePillar>,
) -> AppResult<Created<Pillar>> {
    Ok(Created(
        state.services.content().create_pillar(&ctx, payload).await?,
    ))
}

#[utoipa::path(put, path = "/admin/content/pillars/{id}", tag = "Content",
    security(("bearer_auth" = [])), request_body = UpdatePillar,
    params(("id" = Uuid, Path, description = "Content item id")), responses((status = 200, body = Pillar)))]
pub async fn update_pillar(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePillar>,
) -> AppResult<Json<Pillar>> {
    Ok(Json(
        state.services.content().update_pillar(&ctx, id, payload).await?,
    ))
}

#[utoipa::path(put, path = "/admin/content/pillars/{id}/visibility", tag = "Content",
    security(("bearer_auth" = [])), request_body = VisibilityRequest,
    params(("id" = Uuid, Path, description = "Content item id")), responses((status = 200, body = Pillar)))]
pub async fn set_pillar_visibility(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<VisibilityRequest>,
) -> AppResult<Json<Pillar>> {
    Ok(Json(
        state
            .services
            .content()
            .set_pillar_visibility(&ctx, id, payload.visible)
            .await?,
    ))
}

#[utoipa::path(delete, path = "/admin/content/pillars/{id}", tag = "Content",
    security(("bearer_auth" = [])), params(("id" = Uuid, Path, description = "Content item id")),
    responses((status = 204)))]
pub async fn delete_pillar(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    state.services.content().delete_pillar(&ctx, id).await?;
    Ok(NoContent)
}

#[utoipa::path(get, path = "/admin/content/pillars/{id}/points", tag = "Content",
    security(("bearer_auth" = [])), params(("id" = Uuid, Path, description = "Content item id")),
    responses((status = 200, body = Vec<PillarPoint>)))]
pub async fn list_pillar_points(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<PillarPoint>>> {
    Ok(Json(state.services.content().list_pillar_points(&ctx, id).await?))
}

#[utoipa::path(post, path = "/admin/content/pillar-points", tag = "Content",
    security(("bearer_auth" = [])), request_body = CreatePillarPoint,
    responses((status = 201, body = PillarPoint)))]
pub async fn create_pillar_point(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Json(payload): Json<CreatePillarPoint>,
) -> AppResult<Created<PillarPoint>> {
    Ok(Created(
        state
            .services
            .content()
            .create_pillar_point(&ctx, payload)
            .await?,
    ))
}

#[utoipa::path(put, path = "/admin/content/pillar-points/{id}", tag = "Content",
    security(("bearer_auth" = [])), request_body = UpdatePillarPoint,
    params(("id" = Uuid, Path, description = "Content item id")), responses((status = 200, body = PillarPoint)))]
pub async fn update_pillar_point(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePillarPoint>,
) -> AppResult<Json<PillarPoint>> {
    Ok(Json(
        state
            .services
            .content()
            .update_pillar_point(&ctx, id, payload)
            .await?,
    ))
}

#[utoipa::path(put, path = "/admin/content/pillar-points/{id}/visibility", tag = "Content",
    security(("bearer_auth" = [])), request_body = VisibilityRequest,
    params(("id" = Uuid, Path, description = "Content item id")), responses((status = 200, body = PillarPoint)))]
pub async fn set_pillar_point_visibility(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<VisibilityRequest>,
) -> AppResult<Json<PillarPoint>> {
    Ok(Json(
        state
            .services
            .content()
            .set_pillar_point_visibility(&ctx, id, payload.visible)
            .await?,
    ))
}

#[utoipa::path(delete, path = "/admin/content/pillar-points/{id}", tag = "Content",
    security(("bearer_auth" = [])), params(("id" = Uuid, Path, description = "Content item id")),
    responses((status = 204)))]
pub async fn delete_pillar_point(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    state.services.content().delete_pillar_point(&ctx, id).await?;
    Ok(NoContent)
}

// Profile

#[utoipa::path(get, path = "/admin/content/person-info", tag = "Content",
    security(("bearer_auth" = [])), responses((status = 200, body = Option<PersonInfo>)))]
pub async fn get_person_info(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> AppResult<Json<Option<PersonInfo>>> {
    Ok(Json(state.services.content().get_person_info(&ctx).await?))
}

#[utoipa::path(put, path = "/admin/content/person-info", tag = "Content",
    security(("bearer_auth" = [])), request_body = UpdatePersonInfo,
    responses((status = 200, body = PersonInfo)))]
pub async fn save_person_info(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Json(payload): Json<UpdatePersonInfo>,
) -> AppResult<Json<PersonInfo>> {
    Ok(Json(
        state.services.content().save_person_info(&ctx, payload).await?,
    ))
}

#[utoipa::path(get, path = "/admin/content/hero", tag = "Content",
    security(("bearer_auth" = [])), responses((status = 200, body = Option<HeroContent>)))]
pub async fn get_hero(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> AppResult<Json<Option<HeroContent>>> {
    Ok(Json(state.services.content().get_hero(&ctx).await?))
}

#[utoipa::path(put, path = "/admin/content/hero", tag = "Content",
    security(("bearer_auth" = [])), request_body = UpdateHero,
    responses((status = 200, body = HeroContent)))]
pub async fn save_hero(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Json(payload): Json<UpdateHero>,
) -> AppResult<Json<HeroContent>> {
    Ok(Json(state.services.content().save_hero(&ctx, payload).await?))
}
